//! Text buffer with a line cache.
//!
//! The buffer string is the single source of truth. The line split is derived from it and is
//! only recomputed when the buffer differs from the text the current split was made from, so a
//! wholesale replacement (undo, redo, format) and a line-level edit both leave the two views in
//! agreement: `lines().join("\n") == text()` at all times.

use crate::position::Position;
use crate::text::char_len;

/// The document text and its derived line split.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    text: String,
    lines: Vec<String>,
    /// Text the current `lines` were split from.
    lines_source: String,
}

impl TextBuffer {
    /// Create a buffer from LF-normalized text.
    pub fn new(text: impl Into<String>) -> Self {
        let mut buffer = Self {
            text: text.into(),
            lines: Vec::new(),
            lines_source: String::new(),
        };
        buffer.lines = split_lines(&buffer.text);
        buffer.lines_source = buffer.text.clone();
        buffer
    }

    /// The full buffer.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// All lines (never empty; an empty buffer is one empty line).
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// A single line, if it exists.
    pub fn line(&self, line: usize) -> Option<&str> {
        self.lines.get(line).map(String::as_str)
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Length of a line in characters (0 for lines past the end).
    pub fn line_len(&self, line: usize) -> usize {
        self.line(line).map_or(0, char_len)
    }

    /// Total number of characters.
    pub fn char_count(&self) -> usize {
        char_len(&self.text)
    }

    /// Replace the whole buffer.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.sync_lines();
    }

    /// Run a line-level edit and rebuild the buffer from the edited lines.
    pub(crate) fn edit_lines<R>(&mut self, edit: impl FnOnce(&mut Vec<String>) -> R) -> R {
        let result = edit(&mut self.lines);
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
        self.text = self.lines.join("\n");
        self.lines_source.clone_from(&self.text);
        result
    }

    fn sync_lines(&mut self) {
        if self.text != self.lines_source {
            self.lines = split_lines(&self.text);
            self.lines_source.clone_from(&self.text);
        }
    }

    /// Clamp a position into the buffer.
    pub fn clamp_position(&self, pos: Position) -> Position {
        let line = pos.line.min(self.line_count().saturating_sub(1));
        Position::new(line, pos.column.min(self.line_len(line)))
    }

    /// Absolute character offset of a (clamped) position.
    pub fn char_offset(&self, pos: Position) -> usize {
        let pos = self.clamp_position(pos);
        let preceding: usize = self.lines[..pos.line]
            .iter()
            .map(|line| char_len(line) + 1)
            .sum();
        preceding + pos.column
    }

    /// Position of an absolute character offset (offsets past the end clamp to the end).
    pub fn position_at(&self, offset: usize) -> Position {
        let mut remaining = offset;
        for (index, line) in self.lines.iter().enumerate() {
            let len = char_len(line);
            if remaining <= len {
                return Position::new(index, remaining);
            }
            remaining -= len + 1;
        }
        let last = self.line_count() - 1;
        Position::new(last, self.line_len(last))
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new(String::new())
    }
}

fn split_lines(text: &str) -> Vec<String> {
    // `split('\n')` keeps the trailing empty segment: N newlines => N+1 lines.
    text.split('\n').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_buffer_has_one_line() {
        let buffer = TextBuffer::default();
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.line(0), Some(""));
    }

    #[test]
    fn test_trailing_newline_gives_trailing_empty_line() {
        let buffer = TextBuffer::new("{}\n");
        assert_eq!(buffer.lines(), &["{}".to_string(), String::new()]);
    }

    #[test]
    fn test_set_text_resplits() {
        let mut buffer = TextBuffer::new("a\nb");
        buffer.set_text("x\ny\nz");
        assert_eq!(buffer.line_count(), 3);
        assert_eq!(buffer.lines().join("\n"), buffer.text());
    }

    #[test]
    fn test_edit_lines_rejoins_and_never_empties() {
        let mut buffer = TextBuffer::new("a\nb");
        buffer.edit_lines(|lines| lines.clear());
        assert_eq!(buffer.text(), "");
        assert_eq!(buffer.line_count(), 1);

        buffer.edit_lines(|lines| {
            lines[0].push('q');
            lines.push("r".to_string());
        });
        assert_eq!(buffer.text(), "q\nr");
    }

    #[test]
    fn test_offset_position_conversion() {
        let buffer = TextBuffer::new("{\"é\": [1,\n2]}");
        let pos = Position::new(1, 1);
        let offset = buffer.char_offset(pos);
        assert_eq!(offset, 11);
        assert_eq!(buffer.position_at(offset), pos);
        assert_eq!(buffer.position_at(9), Position::new(0, 9));
        assert_eq!(buffer.position_at(999), Position::new(1, 3));
    }

    #[test]
    fn test_clamp_position() {
        let buffer = TextBuffer::new("ab\nc");
        assert_eq!(buffer.clamp_position(Position::new(9, 9)), Position::new(1, 1));
        assert_eq!(buffer.clamp_position(Position::new(0, 9)), Position::new(0, 2));
    }
}
