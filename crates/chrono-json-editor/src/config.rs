//! Editor configuration.

use serde::{Deserialize, Serialize};

/// Default number of undo snapshots kept per document.
pub const DEFAULT_MAX_UNDO_DEPTH: usize = 1000;

/// Settings for a [`TextDocument`](crate::TextDocument).
///
/// Deserializable so hosts can keep editor preferences in their own settings file:
///
/// ```rust
/// use chrono_json_editor::EditorConfig;
///
/// let config: EditorConfig = serde_json::from_str(r#"{ "indent": "    " }"#).unwrap();
/// assert_eq!(config.indent, "    ");
/// assert!(config.inline_numeric_arrays_on_load);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Maximum number of undo snapshots (including the initial state).
    pub max_undo_depth: usize,
    /// Collapse arrays of numbers onto one line when a document is loaded or formatted.
    pub inline_numeric_arrays_on_load: bool,
    /// Indentation unit used when rendering templates and formatting.
    pub indent: String,
    /// Label prefixed to parse error messages (typically the file name).
    pub parse_context: Option<String>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_undo_depth: DEFAULT_MAX_UNDO_DEPTH,
            inline_numeric_arrays_on_load: true,
            indent: "  ".to_string(),
            parse_context: None,
        }
    }
}

impl EditorConfig {
    /// Set the undo depth limit.
    pub fn with_max_undo_depth(mut self, depth: usize) -> Self {
        self.max_undo_depth = depth;
        self
    }

    /// Enable or disable numeric-array inlining on load/format.
    pub fn with_inline_numeric_arrays(mut self, enabled: bool) -> Self {
        self.inline_numeric_arrays_on_load = enabled;
        self
    }

    /// Set the indentation unit.
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Set the parse error context label.
    pub fn with_parse_context(mut self, context: impl Into<String>) -> Self {
        self.parse_context = Some(context.into());
        self
    }
}
