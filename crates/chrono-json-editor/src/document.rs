//! The editable document: buffer, caret, line selection, history and derived state.

use crate::brackets::{BracketHighlight, BracketIndex, BracketPairs};
use crate::buffer::TextBuffer;
use crate::clipboard::{Clipboard, LocalClipboard};
use crate::config::EditorConfig;
use crate::history::UndoHistory;
use crate::inline::inline_numeric_arrays;
use crate::line_ending::{self, LineEnding};
use crate::measure::{TextMeasurer, measure_column};
use crate::position::Position;
use crate::selection::LineSelection;
use chrono_json_editor_jsonc::{JsoncError, parse_with_context, to_pretty_string};
use serde_json::Value;

/// Caret movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One character left, wrapping to the end of the previous line.
    Left,
    /// One character right, wrapping to the start of the next line.
    Right,
    /// One line up, keeping the column where possible.
    Up,
    /// One line down, keeping the column where possible.
    Down,
}

/// An editable JSON document.
///
/// `TextDocument` owns every piece of editor state:
///
/// - **TextBuffer**: the authoritative text and its line split
/// - **Caret & LineSelection**: where edits happen
/// - **UndoHistory**: whole-buffer snapshots
/// - **BracketIndex**: cached bracket pairs and the caret's bracket highlight
/// - **Validation**: the last comment-tolerant parse error, if any
///
/// Every mutation goes through the edit operations, which re-validate the JSON, record an undo
/// snapshot and refresh the bracket highlight before returning.
///
/// # Example
///
/// ```rust
/// use chrono_json_editor::{Position, TextDocument};
///
/// let mut doc = TextDocument::new("{\"a\": 1,\n\"b\": 2}");
/// doc.set_caret(0, 7);
/// doc.insert_text(",");
/// assert_eq!(doc.text(), "{\"a\": 1,,\n\"b\": 2}");
/// assert!(!doc.is_valid());
///
/// doc.undo();
/// assert_eq!(doc.text(), "{\"a\": 1,\n\"b\": 2}");
/// assert!(doc.is_valid());
/// assert_eq!(doc.caret(), Position::new(0, 8));
/// ```
#[derive(Debug)]
pub struct TextDocument {
    pub(crate) buffer: TextBuffer,
    pub(crate) caret: Position,
    pub(crate) selection: LineSelection,
    pub(crate) history: UndoHistory,
    pub(crate) brackets: BracketIndex,
    pub(crate) bracket_highlight: BracketHighlight,
    pub(crate) last_parse_error: Option<JsoncError>,
    pub(crate) clipboard: Box<dyn Clipboard>,
    pub(crate) config: EditorConfig,
    line_ending: LineEnding,
}

impl TextDocument {
    /// Create a document from raw text with the default configuration.
    ///
    /// The text is taken as-is (after line ending normalization); invalid JSON is accepted and
    /// reported through [`TextDocument::last_parse_error`].
    pub fn new(text: &str) -> Self {
        Self::with_config(text, EditorConfig::default())
    }

    /// Create a document from raw text.
    pub fn with_config(text: &str, config: EditorConfig) -> Self {
        let ending = LineEnding::detect_in_text(text);
        let text = line_ending::normalize(text);
        let mut doc = Self {
            history: UndoHistory::new(text.clone(), config.max_undo_depth),
            buffer: TextBuffer::new(text),
            caret: Position::default(),
            selection: LineSelection::default(),
            brackets: BracketIndex::default(),
            bracket_highlight: BracketHighlight::default(),
            last_parse_error: None,
            clipboard: Box::new(LocalClipboard::new()),
            config,
            line_ending: ending,
        };
        doc.revalidate();
        doc.update_bracket_matching();

        tracing::debug!(
            lines = doc.line_count(),
            chars = doc.buffer.char_count(),
            valid = doc.is_valid(),
            "document created"
        );
        doc
    }

    /// Load a document that is expected to be valid.
    ///
    /// Fails with the parse error when `text` is not valid comment-tolerant JSON. On success the
    /// numeric arrays are inlined if [`EditorConfig::inline_numeric_arrays_on_load`] is set.
    pub fn load(text: &str, config: EditorConfig) -> Result<Self, JsoncError> {
        let ending = LineEnding::detect_in_text(text);
        let text = line_ending::normalize(text);
        parse_with_context(&text, config.parse_context.as_deref())?;

        let text = if config.inline_numeric_arrays_on_load {
            inline_numeric_arrays(&text)
        } else {
            text
        };
        let mut doc = Self::with_config(&text, config);
        doc.line_ending = ending;
        Ok(doc)
    }

    /// Create a document by rendering a template value.
    pub fn from_template(template: &Value, config: EditorConfig) -> Result<Self, JsoncError> {
        let text = to_pretty_string(template, &config.indent)?;
        let text = if config.inline_numeric_arrays_on_load {
            inline_numeric_arrays(&text)
        } else {
            text
        };
        Ok(Self::with_config(&text, config))
    }

    /// Use `clipboard` for cut, copy and paste.
    pub fn with_clipboard(mut self, clipboard: impl Clipboard + 'static) -> Self {
        self.clipboard = Box::new(clipboard);
        self
    }

    /// The full document text, e.g. for saving.
    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    /// The text with the document's line ending applied, ready to be written to disk.
    pub fn text_for_save(&self) -> String {
        self.line_ending.apply_to_text(self.buffer.text())
    }

    /// Line ending detected when the document was created.
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Change the line ending used by [`TextDocument::text_for_save`].
    pub fn set_line_ending(&mut self, line_ending: LineEnding) {
        self.line_ending = line_ending;
    }

    /// The underlying buffer.
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// All lines.
    pub fn lines(&self) -> &[String] {
        self.buffer.lines()
    }

    /// A single line.
    pub fn line(&self, line: usize) -> Option<&str> {
        self.buffer.line(line)
    }

    /// Number of lines (at least 1).
    pub fn line_count(&self) -> usize {
        self.buffer.line_count()
    }

    /// The caret position.
    pub fn caret(&self) -> Position {
        self.caret
    }

    /// The line selection.
    pub fn selection(&self) -> &LineSelection {
        &self.selection
    }

    /// The configuration this document was created with.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The last validation error, or `None` when the document is valid.
    pub fn last_parse_error(&self) -> Option<&JsoncError> {
        self.last_parse_error.as_ref()
    }

    /// The last validation error rendered as text (empty when valid).
    pub fn last_parse_error_message(&self) -> String {
        self.last_parse_error
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    /// Whether the document currently parses.
    ///
    /// Hosts use this to ask for confirmation before saving an invalid file.
    pub fn is_valid(&self) -> bool {
        self.last_parse_error.is_none()
    }

    /// Bracket under/before the caret and its partner.
    pub fn bracket_highlight(&self) -> BracketHighlight {
        self.bracket_highlight
    }

    /// All bracket pairs of the current text.
    pub fn bracket_pairs(&self) -> &BracketPairs {
        self.brackets.pairs()
    }

    /// Whether an undo step is available.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether a redo step is available.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Number of undo snapshots, including the initial state.
    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    /// Number of redo snapshots.
    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    /// Whether the document matches the last saved state.
    pub fn is_clean(&self) -> bool {
        self.history.is_clean()
    }

    /// Mark the current state as saved (call after writing [`TextDocument::text`] to disk).
    pub fn mark_clean(&mut self) {
        self.history.mark_clean();
    }

    // Caret

    /// Move the caret, clamping into the document.
    pub fn set_caret(&mut self, line: usize, column: usize) {
        self.caret = self.buffer.clamp_position(Position::new(line, column));
        self.update_bracket_matching();
    }

    /// Move the caret one step.
    ///
    /// With `extend` the line selection is started (if needed) and extended to the new caret
    /// line, otherwise any selection is cleared.
    pub fn move_caret(&mut self, direction: Direction, extend: bool) {
        if extend {
            if !self.selection.active {
                self.start_line_selection();
            }
        } else {
            self.selection.clear();
        }

        let Position { line, column } = self.caret;
        let last_line = self.line_count() - 1;
        let target = match direction {
            Direction::Left if column > 0 => Position::new(line, column - 1),
            Direction::Left if line > 0 => Position::new(line - 1, self.buffer.line_len(line - 1)),
            Direction::Right if column < self.buffer.line_len(line) => {
                Position::new(line, column + 1)
            }
            Direction::Right if line < last_line => Position::new(line + 1, 0),
            Direction::Up if line > 0 => Position::new(line - 1, column),
            Direction::Down if line < last_line => Position::new(line + 1, column),
            _ => self.caret,
        };
        self.set_caret(target.line, target.column);

        if extend {
            self.update_selection_end();
        }
    }

    /// Move left, wrapping to the end of the previous line.
    pub fn move_left(&mut self) {
        self.move_caret(Direction::Left, false);
    }

    /// Move right, wrapping to the start of the next line.
    pub fn move_right(&mut self) {
        self.move_caret(Direction::Right, false);
    }

    /// Move up one line.
    pub fn move_up(&mut self) {
        self.move_caret(Direction::Up, false);
    }

    /// Move down one line.
    pub fn move_down(&mut self) {
        self.move_caret(Direction::Down, false);
    }

    /// Column of `line` nearest to the horizontal offset `x_offset`, using the host's measurer.
    pub fn measure_column(&self, line: usize, x_offset: f32, measurer: &dyn TextMeasurer) -> usize {
        let line = line.min(self.line_count() - 1);
        measure_column(self.buffer.line(line).unwrap_or_default(), x_offset, measurer)
    }

    // Selection

    /// Anchor a line selection on the caret line.
    pub fn start_line_selection(&mut self) {
        self.selection.start(self.caret.line);
    }

    /// Extend the selection to the caret line.
    pub fn update_selection_end(&mut self) {
        self.selection.extend_to(self.caret.line);
    }

    /// Drop the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Start a drag selection at the caret line.
    pub fn begin_drag_selection(&mut self) {
        self.start_line_selection();
        self.selection.dragging = true;
    }

    /// Move the caret during a drag and extend the selection to it.
    pub fn drag_to(&mut self, line: usize, column: usize) {
        self.set_caret(line, column);
        if self.selection.dragging {
            self.update_selection_end();
        }
    }

    /// Finish a drag selection; the selection itself stays active.
    pub fn end_drag_selection(&mut self) {
        self.selection.dragging = false;
    }

    // History

    /// Restore the previous snapshot. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo().map(str::to_string) else {
            return false;
        };
        tracing::debug!(undo_depth = self.history.undo_depth(), "undo");
        self.restore_snapshot(snapshot);
        true
    }

    /// Re-apply the next snapshot. Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo().map(str::to_string) else {
            return false;
        };
        tracing::debug!(redo_depth = self.history.redo_depth(), "redo");
        self.restore_snapshot(snapshot);
        true
    }

    fn restore_snapshot(&mut self, snapshot: String) {
        self.buffer.set_text(snapshot);
        self.selection.clear();
        self.revalidate();
        let caret = self.caret;
        self.set_caret(caret.line, caret.column);
    }

    // Derived state

    /// Re-run validation and store the result.
    pub(crate) fn revalidate(&mut self) {
        self.last_parse_error =
            parse_with_context(self.buffer.text(), self.config.parse_context.as_deref()).err();
        tracing::trace!(valid = self.last_parse_error.is_none(), "validated");
    }

    /// Refresh bracket pairs (if the text changed) and the caret's bracket highlight.
    pub fn update_bracket_matching(&mut self) {
        self.brackets.refresh(self.buffer.text());
        self.bracket_highlight = BracketHighlight::at_caret(&self.buffer, &self.brackets, self.caret);
    }

    /// Common tail of every edit: validate, snapshot, refresh brackets.
    pub(crate) fn finish_edit(&mut self) {
        self.caret = self.buffer.clamp_position(self.caret);
        self.selection.clamp(self.line_count());
        self.revalidate();
        self.history.push(self.buffer.text());
        self.update_bracket_matching();
    }
}
