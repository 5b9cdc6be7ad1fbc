#![warn(missing_docs)]
//! `chrono-json-editor-jsonc` - comment-tolerant JSON for `chrono-json-editor`.
//!
//! Chrono vehicle descriptions are JSON files that may carry C++-style comments (`// line` and
//! `/* block */`). This crate strips those comments without disturbing line/column positions and
//! parses the result into a [`serde_json::Value`], reporting failures with 1-based locations that
//! point into the *original* text.
//!
//! # Example
//!
//! ```rust
//! use chrono_json_editor_jsonc::{parse, try_parse};
//!
//! let value = parse(r#"{"x": /* comment */ 5} // trailing"#).unwrap();
//! assert_eq!(value["x"], 5);
//!
//! assert!(try_parse("{\"x\": }").is_none());
//! ```
//!
//! # Module Description
//!
//! - [`scan`] - escape-aware string scanning shared with the editor and the colorizer
//! - [`strip`] - comment removal preserving line/column alignment
//! - [`parse`](mod@parse) - strict and non-failing parse entry points, pretty printing
//! - [`error`] - structured parse diagnostics

pub mod error;
pub mod parse;
pub mod scan;
pub mod strip;

pub use error::{JsoncError, JsoncErrorKind};
pub use parse::{parse, parse_with_context, to_pretty_string, try_parse};
pub use scan::{find_string_end, is_escaped};
pub use strip::{Location, StrippedText, strip_comments, strip_comments_detailed};
