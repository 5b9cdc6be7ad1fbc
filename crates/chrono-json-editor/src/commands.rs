//! Command interface.
//!
//! Hosts that drive the editor from an event loop (key bindings, menu items, scripting) can send
//! [`Command`] values instead of calling the [`TextDocument`] methods directly. Every command maps
//! one-to-one onto a document operation.

use crate::document::{Direction, TextDocument};
use crate::position::Position;
use chrono_json_editor_jsonc::JsoncError;
use thiserror::Error;

/// Text editing commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    /// Insert text at the caret
    InsertText {
        /// Text to insert; may contain newlines.
        text: String,
    },
    /// Delete left of the caret (or the selected lines)
    Backspace,
    /// Delete right of the caret (or the selected lines)
    Delete,
    /// Split the caret line, keeping its indentation
    InsertNewLine,
    /// Cut the selected lines (or the caret line)
    Cut,
    /// Copy the selected lines (or the caret line)
    Copy,
    /// Insert clipboard lines after the caret line
    Paste,
    /// Undo last edit
    Undo,
    /// Redo last undone edit
    Redo,
    /// Pretty-print the document
    Format,
    /// Collapse numeric arrays onto one line
    InlineNumericArrays,
}

/// Caret and selection commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorCommand {
    /// Move the caret to a position (clamped)
    MoveTo {
        /// Line index.
        line: usize,
        /// Column in characters.
        column: usize,
    },
    /// Move the caret one step
    Move {
        /// Direction of the step.
        direction: Direction,
        /// Extend the line selection instead of clearing it.
        extend: bool,
    },
    /// Anchor a line selection on the caret line
    StartSelection,
    /// Extend the selection to the caret line
    UpdateSelectionEnd,
    /// Drop the selection
    ClearSelection,
    /// Start a drag selection
    BeginDrag,
    /// Drag the caret to a position
    DragTo {
        /// Line index.
        line: usize,
        /// Column in characters.
        column: usize,
    },
    /// Finish the drag
    EndDrag,
}

/// Editor command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Text editing
    Edit(EditCommand),
    /// Caret and selection
    Cursor(CursorCommand),
}

impl From<EditCommand> for Command {
    fn from(command: EditCommand) -> Self {
        Command::Edit(command)
    }
}

impl From<CursorCommand> for Command {
    fn from(command: CursorCommand) -> Self {
        Command::Cursor(command)
    }
}

/// Command execution result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Success, no return value
    Success,
    /// Returns text (cut/copy)
    Text(String),
    /// Returns the caret position (cursor commands)
    Position(Position),
}

/// Command error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Undo requested with an empty history
    #[error("nothing to undo")]
    NothingToUndo,
    /// Redo requested with an empty redo stack
    #[error("nothing to redo")]
    NothingToRedo,
    /// Formatting requested on a document that does not parse
    #[error("cannot format an invalid document: {0}")]
    InvalidDocument(JsoncError),
}

impl TextDocument {
    /// Execute a command.
    pub fn execute(&mut self, command: impl Into<Command>) -> Result<CommandResult, CommandError> {
        let command = command.into();
        tracing::trace!(?command, "execute");

        match command {
            Command::Edit(edit) => self.execute_edit(edit),
            Command::Cursor(cursor) => Ok(self.execute_cursor(cursor)),
        }
    }

    /// Execute commands in order, stopping at the first error.
    pub fn execute_batch(
        &mut self,
        commands: impl IntoIterator<Item = Command>,
    ) -> Result<Vec<CommandResult>, CommandError> {
        commands
            .into_iter()
            .map(|command| self.execute(command))
            .collect()
    }

    fn execute_edit(&mut self, command: EditCommand) -> Result<CommandResult, CommandError> {
        match command {
            EditCommand::InsertText { text } => self.insert_text(&text),
            EditCommand::Backspace => self.backspace(),
            EditCommand::Delete => self.delete(),
            EditCommand::InsertNewLine => self.insert_newline(),
            EditCommand::Cut => return Ok(CommandResult::Text(self.cut())),
            EditCommand::Copy => return Ok(CommandResult::Text(self.copy())),
            EditCommand::Paste => self.paste(),
            EditCommand::Undo => {
                if !self.undo() {
                    return Err(CommandError::NothingToUndo);
                }
            }
            EditCommand::Redo => {
                if !self.redo() {
                    return Err(CommandError::NothingToRedo);
                }
            }
            EditCommand::Format => self
                .try_format_document()
                .map_err(CommandError::InvalidDocument)?,
            EditCommand::InlineNumericArrays => {
                self.inline_numeric_arrays();
            }
        }
        Ok(CommandResult::Success)
    }

    fn execute_cursor(&mut self, command: CursorCommand) -> CommandResult {
        match command {
            CursorCommand::MoveTo { line, column } => self.set_caret(line, column),
            CursorCommand::Move { direction, extend } => self.move_caret(direction, extend),
            CursorCommand::StartSelection => self.start_line_selection(),
            CursorCommand::UpdateSelectionEnd => self.update_selection_end(),
            CursorCommand::ClearSelection => self.clear_selection(),
            CursorCommand::BeginDrag => self.begin_drag_selection(),
            CursorCommand::DragTo { line, column } => self.drag_to(line, column),
            CursorCommand::EndDrag => self.end_drag_selection(),
        }
        CommandResult::Position(self.caret)
    }
}
