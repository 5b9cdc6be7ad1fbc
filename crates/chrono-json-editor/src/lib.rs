#![warn(missing_docs)]
//! Chrono JSON Editor - Headless Editor for Vehicle Description Files
//!
//! # Overview
//!
//! `chrono-json-editor` is the editing core behind the Chrono vehicle/template JSON editor. It
//! owns the text, caret, line selection, undo history, bracket matching and validation state of a
//! single document, and leaves rendering and input handling to the host UI.
//!
//! Documents may contain `//` and `/* */` comments; validation strips them (see
//! [`chrono_json_editor_jsonc`]) and reports parse errors against the original text.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Command Interface (Command / execute)      │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  TextDocument (edits, caret, selection)     │  ← Editing
//! ├─────────────────────────────────────────────┤
//! │  UndoHistory / BracketIndex / validation    │  ← Derived state
//! ├─────────────────────────────────────────────┤
//! │  TextBuffer (text + cached line split)      │  ← Storage
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use chrono_json_editor::{Command, CursorCommand, EditCommand, Position, TextDocument};
//!
//! let mut doc = TextDocument::new("{\n  \"Mass\": 995.0\n}");
//!
//! doc.execute(CursorCommand::MoveTo { line: 1, column: 15 }).unwrap();
//! doc.execute(Command::Edit(EditCommand::InsertText {
//!     text: ",\n\"Name\": \"Chassis\"".to_string(),
//! }))
//! .unwrap();
//!
//! assert!(doc.is_valid());
//! assert_eq!(doc.caret(), Position::new(2, 17));
//!
//! doc.execute(EditCommand::Format).unwrap();
//! assert_eq!(doc.text(), "{\n  \"Mass\": 995.0,\n  \"Name\": \"Chassis\"\n}");
//! ```
//!
//! # Module Description
//!
//! - [`buffer`] - document text with a cached line split
//! - [`document`] - the editable document and caret/selection operations
//! - [`commands`] - command enum interface over the document
//! - [`history`] - snapshot undo/redo
//! - [`brackets`] - bracket pairing and caret highlight
//! - [`inline`] - collapsing numeric arrays onto one line
//! - [`selection`] - whole-line selection state
//! - [`measure`] - pixel offset to column mapping
//! - [`clipboard`] - clipboard abstraction
//! - [`line_ending`] - CRLF/LF handling
//! - [`config`] - editor settings

pub mod brackets;
pub mod buffer;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod document;
mod edit;
pub mod history;
pub mod inline;
pub mod line_ending;
pub mod measure;
pub mod position;
pub mod selection;
mod text;

pub use brackets::{BracketHighlight, BracketIndex, BracketPairs, compute_bracket_pairs};
pub use buffer::TextBuffer;
pub use clipboard::{Clipboard, LocalClipboard};
pub use commands::{Command, CommandError, CommandResult, CursorCommand, EditCommand};
pub use config::{DEFAULT_MAX_UNDO_DEPTH, EditorConfig};
pub use document::{Direction, TextDocument};
pub use history::UndoHistory;
pub use inline::inline_numeric_arrays;
pub use line_ending::LineEnding;
pub use measure::{MonospaceMeasurer, TextMeasurer, measure_column};
pub use position::Position;
pub use selection::LineSelection;

pub use chrono_json_editor_jsonc::{JsoncError, JsoncErrorKind, parse, strip_comments, try_parse};
