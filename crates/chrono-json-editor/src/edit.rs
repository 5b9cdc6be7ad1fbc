//! Edit operations.
//!
//! Every mutating operation follows the same protocol:
//!
//! 1. destructive operations (backspace, delete, cut) with an active selection remove the selected
//!    lines and stop there;
//! 2. otherwise the character/line edit is applied at the caret;
//! 3. the buffer is re-joined from the edited lines;
//! 4. the JSON is re-validated;
//! 5. the new buffer is pushed onto the undo history (skipped if unchanged);
//! 6. the bracket highlight is recomputed for the new caret.
//!
//! Steps 3-6 live in `TextBuffer::edit_lines` and `TextDocument::finish_edit`.

use crate::document::TextDocument;
use crate::inline::inline_numeric_arrays;
use crate::line_ending;
use crate::position::Position;
use crate::text::{byte_index, char_len, leading_whitespace};
use chrono_json_editor_jsonc::{JsoncError, parse_with_context, to_pretty_string};

impl TextDocument {
    /// Insert `text` at the caret; the caret moves to the end of the inserted text.
    ///
    /// Text containing newlines is split across lines. Inserting an empty string does nothing.
    pub fn insert_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let text = line_ending::normalize(text);
        self.selection.clear();

        let Position { line, column } = self.caret;
        self.caret = self.buffer.edit_lines(|lines| {
            let current = &mut lines[line];
            let split_at = byte_index(current, column);
            let tail = current.split_off(split_at);

            let mut segments = text.split('\n');
            let first = segments.next().unwrap_or_default();
            current.push_str(first);

            let mut caret = Position::new(line, column + char_len(first));
            for segment in segments {
                let at = caret.line + 1;
                lines.insert(at, segment.to_string());
                caret = Position::new(at, char_len(segment));
            }
            lines[caret.line].push_str(&tail);
            caret
        });
        self.finish_edit();
    }

    /// Delete the character left of the caret, or join with the previous line at column 0.
    ///
    /// With an active selection the selected lines are removed instead.
    pub fn backspace(&mut self) {
        if self.remove_selected_lines() {
            return;
        }

        let Position { line, column } = self.caret;
        if line == 0 && column == 0 {
            return;
        }

        self.caret = self.buffer.edit_lines(|lines| {
            if column == 0 {
                let current = lines.remove(line);
                let previous = &mut lines[line - 1];
                let join_column = char_len(previous);
                previous.push_str(&current);
                Position::new(line - 1, join_column)
            } else {
                let current = &mut lines[line];
                let start = byte_index(current, column - 1);
                let end = byte_index(current, column);
                current.replace_range(start..end, "");
                Position::new(line, column - 1)
            }
        });
        self.finish_edit();
    }

    /// Delete the character right of the caret, or join the next line at end of line.
    ///
    /// With an active selection the selected lines are removed instead.
    pub fn delete(&mut self) {
        if self.remove_selected_lines() {
            return;
        }

        let Position { line, column } = self.caret;
        let at_line_end = column >= self.buffer.line_len(line);
        if at_line_end && line + 1 >= self.line_count() {
            return;
        }

        self.buffer.edit_lines(|lines| {
            if at_line_end {
                let next = lines.remove(line + 1);
                lines[line].push_str(&next);
            } else {
                let current = &mut lines[line];
                let start = byte_index(current, column);
                let end = byte_index(current, column + 1);
                current.replace_range(start..end, "");
            }
        });
        self.finish_edit();
    }

    /// Split the caret line; the new line inherits the leading spaces/tabs of the split line.
    pub fn insert_newline(&mut self) {
        self.selection.clear();

        let Position { line, column } = self.caret;
        self.caret = self.buffer.edit_lines(|lines| {
            let current = &mut lines[line];
            let indent = leading_whitespace(current).to_string();
            let split_at = byte_index(current, column);
            let tail = current.split_off(split_at);

            let caret = Position::new(line + 1, char_len(&indent));
            lines.insert(line + 1, indent + &tail);
            caret
        });
        self.finish_edit();
    }

    /// Copy the selected lines (or the caret line) to the clipboard and return the copied text.
    pub fn copy(&mut self) -> String {
        let (first, last) = self.target_line_range();
        let text = self.buffer.lines()[first..=last].join("\n");
        self.clipboard.set_text(text.clone());
        text
    }

    /// Copy, then remove, the selected lines (or the caret line).
    pub fn cut(&mut self) -> String {
        let text = self.copy();
        let (first, last) = self.target_line_range();
        self.remove_lines(first, last);
        text
    }

    /// Insert the clipboard's lines after the caret line.
    ///
    /// The caret ends on the last inserted line at column 0. An empty clipboard does nothing.
    pub fn paste(&mut self) {
        let Some(text) = self.clipboard.get_text().filter(|text| !text.is_empty()) else {
            return;
        };
        let text = line_ending::normalize(&text);
        self.selection.clear();

        let line = self.caret.line;
        let last_inserted = self.buffer.edit_lines(|lines| {
            let mut at = line;
            for segment in text.split('\n') {
                at += 1;
                lines.insert(at, segment.to_string());
            }
            at
        });
        self.caret = Position::new(last_inserted, 0);
        self.finish_edit();
    }

    /// Replace the document with its pretty-printed form (numeric arrays inlined if configured).
    ///
    /// Comments are not preserved. Returns `false`, leaving the text untouched, when the document
    /// does not parse.
    pub fn format_document(&mut self) -> bool {
        self.try_format_document().is_ok()
    }

    /// Like [`TextDocument::format_document`], but returns the parse error on failure.
    pub fn try_format_document(&mut self) -> Result<(), JsoncError> {
        let value = parse_with_context(self.buffer.text(), self.config.parse_context.as_deref())?;
        let pretty = to_pretty_string(&value, &self.config.indent)?;
        let formatted = if self.config.inline_numeric_arrays_on_load {
            inline_numeric_arrays(&pretty)
        } else {
            pretty
        };

        tracing::debug!(lines = formatted.split('\n').count(), "format document");
        self.replace_text(&formatted);
        Ok(())
    }

    /// Collapse numeric arrays in the current text. Returns `true` if anything changed.
    pub fn inline_numeric_arrays(&mut self) -> bool {
        let inlined = inline_numeric_arrays(self.buffer.text());
        if inlined == self.buffer.text() {
            return false;
        }
        self.replace_text(&inlined);
        true
    }

    /// Replace the whole text as a single undoable edit.
    pub fn replace_text(&mut self, text: &str) {
        self.buffer.set_text(line_ending::normalize(text));
        self.selection.clear();
        self.finish_edit();
    }

    fn target_line_range(&self) -> (usize, usize) {
        let last_line = self.line_count() - 1;
        match self.selection.line_range() {
            Some((first, last)) => (first.min(last_line), last.min(last_line)),
            None => (self.caret.line, self.caret.line),
        }
    }

    fn remove_selected_lines(&mut self) -> bool {
        let Some((first, last)) = self.selection.line_range() else {
            return false;
        };
        self.remove_lines(first, last);
        true
    }

    fn remove_lines(&mut self, first: usize, last: usize) {
        let last_line = self.line_count() - 1;
        let (first, last) = (first.min(last_line), last.min(last_line));
        self.buffer.edit_lines(|lines| {
            lines.drain(first..=last);
        });
        self.selection.clear();
        self.caret = Position::new(first.min(self.line_count() - 1), 0);
        self.finish_edit();
    }
}
