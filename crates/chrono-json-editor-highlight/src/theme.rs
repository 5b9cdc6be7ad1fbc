//! Colors used by the colorizer.

use serde::{Deserialize, Serialize};

/// Hex colors (`#rrggbb`) for each token class.
///
/// Missing fields fall back to the defaults when deserializing, so a host settings file only has
/// to list the colors it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorTheme {
    /// String literals, quotes included.
    pub string: String,
    /// Numeric tokens.
    pub number: String,
    /// `true`, `false` and `null`.
    pub keyword: String,
    /// Brackets that are not highlighted.
    pub bracket: String,
    /// The caret's active bracket and its partner (also rendered bold).
    pub bracket_match: String,
    /// `:` separators.
    pub colon: String,
    /// `,` separators.
    pub comma: String,
    /// `//` line comments and `/* */` block comments.
    pub comment: String,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            string: "#ce9178".to_string(),
            number: "#b5cea8".to_string(),
            keyword: "#569cd6".to_string(),
            bracket: "#ffd700".to_string(),
            bracket_match: "#ff0000".to_string(),
            colon: "#d4d4d4".to_string(),
            comma: "#d4d4d4".to_string(),
            comment: "#6a9955".to_string(),
        }
    }
}
