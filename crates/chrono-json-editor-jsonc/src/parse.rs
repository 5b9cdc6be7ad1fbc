//! Parse entry points.
//!
//! Two forms are provided:
//!
//! - [`parse`] / [`parse_with_context`] return a `Result` and are meant for a one-time load of a
//!   document whose validity matters to the caller.
//! - [`try_parse`] only reports success, for callers that just need a yes/no answer.
//!
//! Duplicate object keys follow a last-write-wins policy (the later value replaces the earlier one).

use crate::error::{JsoncError, JsoncErrorKind};
use crate::strip::strip_comments_detailed;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Strip comments from `text` and parse it into a [`Value`].
pub fn parse(text: &str) -> Result<Value, JsoncError> {
    parse_with_context(text, None)
}

/// Like [`parse`], prefixing `context` (e.g. a file name) to the error message on failure.
pub fn parse_with_context(text: &str, context: Option<&str>) -> Result<Value, JsoncError> {
    let stripped = strip_comments_detailed(text);

    let result = match stripped.unterminated_block {
        Some(at) => Err(JsoncError::new(
            JsoncErrorKind::UnterminatedComment,
            "unterminated block comment",
            at.line,
            at.column,
        )),
        None => serde_json::from_str::<Value>(&stripped.text)
            .map_err(|err| JsoncError::from_serde(&err, &stripped.text)),
    };

    result.map_err(|err| {
        tracing::trace!(
            line = err.line,
            column = err.column,
            message = %err.message,
            "jsonc parse failed"
        );
        match context {
            Some(label) => err.with_context(label),
            None => err,
        }
    })
}

/// Parse `text`, returning `None` instead of an error.
pub fn try_parse(text: &str) -> Option<Value> {
    parse(text).ok()
}

/// Serialize `value` as indented JSON using `indent` as the indentation unit.
pub fn to_pretty_string(value: &Value, indent: &str) -> Result<String, JsoncError> {
    let mut out = Vec::with_capacity(128);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}
