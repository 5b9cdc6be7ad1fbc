//! Parse diagnostics.

use crate::strip::Location;
use thiserror::Error;

/// Broad classification of a [`JsoncError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsoncErrorKind {
    /// The text is not syntactically valid JSON (after comment stripping).
    Syntax,
    /// The text ended before a value was complete.
    Eof,
    /// The text is valid JSON but could not be represented as a value.
    Data,
    /// An I/O failure while reading or writing JSON.
    Io,
    /// A `/*` comment was never closed.
    UnterminatedComment,
}

impl From<serde_json::error::Category> for JsoncErrorKind {
    fn from(category: serde_json::error::Category) -> Self {
        use serde_json::error::Category;
        match category {
            Category::Io => Self::Io,
            Category::Syntax => Self::Syntax,
            Category::Data => Self::Data,
            Category::Eof => Self::Eof,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}{message} (line {line}, column {column})", context_prefix(.context))]
/// A parse failure with a 1-based location in the original (commented) text.
pub struct JsoncError {
    /// Error classification.
    pub kind: JsoncErrorKind,
    /// Human-readable message, without location or context label.
    pub message: String,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column number, counted in `char`s.
    pub column: usize,
    /// Optional caller-supplied label (e.g. the file being edited).
    pub context: Option<String>,
}

fn context_prefix(context: &Option<String>) -> String {
    match context.as_deref() {
        Some(label) if !label.is_empty() => format!("{label}: "),
        _ => String::new(),
    }
}

impl JsoncError {
    /// Create a new error without a context label.
    pub fn new(kind: JsoncErrorKind, message: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
            column,
            context: None,
        }
    }

    /// Attach a context label that is prefixed to the rendered message.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// The failure location.
    pub fn location(&self) -> Location {
        Location {
            line: self.line,
            column: self.column,
        }
    }

    /// Convert a `serde_json` error raised while parsing `source`.
    ///
    /// `serde_json` reports columns in bytes; they are translated to `char` columns of `source` so
    /// that the location stays correct for non-ASCII lines. An error raised just after a newline
    /// was read (column 0) is placed at the end of the line the bad token sits on.
    pub(crate) fn from_serde(err: &serde_json::Error, source: &str) -> Self {
        let line = err.line().max(1);
        let (line, column) = if err.column() == 0 && line > 1 {
            let previous = source.split('\n').nth(line - 2).unwrap_or_default();
            (line - 1, previous.chars().count() + 1)
        } else {
            (line, char_column(source, line, err.column()))
        };
        Self::new(err.classify().into(), bare_message(err), line, column)
    }
}

impl From<serde_json::Error> for JsoncError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(
            err.classify().into(),
            bare_message(&err),
            err.line().max(1),
            err.column().max(1),
        )
    }
}

/// `serde_json` appends " at line L column C" to its messages; the location is stored separately.
fn bare_message(err: &serde_json::Error) -> String {
    let rendered = err.to_string();
    match rendered.rsplit_once(" at line ") {
        Some((message, _)) => message.to_string(),
        None => rendered,
    }
}

fn char_column(source: &str, line: usize, byte_column: usize) -> usize {
    let Some(line_text) = source.split('\n').nth(line - 1) else {
        return byte_column.max(1);
    };
    line_text
        .char_indices()
        .take_while(|(byte, _)| *byte < byte_column)
        .count()
        .max(1)
}
