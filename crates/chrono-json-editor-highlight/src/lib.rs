//! `chrono-json-editor-highlight` - rich-text syntax coloring for `chrono-json-editor`.
//!
//! The host UI draws each document line as rich text (`<color=#rrggbb>` / `<b>` tags). This crate
//! turns a raw line into that markup: strings, numbers, keywords, separators, brackets and
//! comments get their theme color, and the caret's active bracket and its partner are drawn bold
//! in the match color.
//!
//! ```rust
//! use chrono_json_editor::TextDocument;
//! use chrono_json_editor_highlight::{ColorTheme, JsonColorizer};
//!
//! let doc = TextDocument::new("{\"Mass\": 995.0}");
//! let colorizer = JsonColorizer::new(ColorTheme::default()).unwrap();
//!
//! let lines = colorizer.colorize_document(&doc);
//! assert!(lines[0].contains("<color=#b5cea8>995.0</color>"));
//! ```

pub mod theme;

pub use theme::ColorTheme;

use chrono_json_editor::{BracketHighlight, TextDocument};
use chrono_json_editor_jsonc::find_string_end;
use regex::Regex;

/// Numeric tokens: optional minus, digits, optional single fraction. Exponents are not matched.
const NUMBER_PATTERN: &str = r"^-?\d+(\.\d+)?$";

const KEYWORDS: [&str; 3] = ["true", "false", "null"];

/// Line colorizer producing `<color>`/`<b>` markup.
#[derive(Debug, Clone)]
pub struct JsonColorizer {
    theme: ColorTheme,
    number: Regex,
}

impl JsonColorizer {
    pub fn new(theme: ColorTheme) -> Result<Self, regex::Error> {
        Ok(Self {
            theme,
            number: Regex::new(NUMBER_PATTERN)?,
        })
    }

    pub fn theme(&self) -> &ColorTheme {
        &self.theme
    }

    /// Colorize one raw line.
    ///
    /// `line_index` is the line's index in the document; it is matched against `highlight` so the
    /// active bracket and its partner are drawn bold. Content is escaped with [`escape_markup`].
    pub fn colorize_line(&self, raw: &str, line_index: usize, highlight: &BracketHighlight) -> String {
        let chars: Vec<char> = raw.chars().collect();
        let mut out = String::with_capacity(raw.len() * 2);
        let mut i = 0usize;

        while i < chars.len() {
            let ch = chars[i];
            match ch {
                '"' => {
                    // An unclosed string runs to the end of the line.
                    let stop = find_string_end(&chars, i).map_or(chars.len(), |end| end + 1);
                    let literal: String = chars[i..stop].iter().collect();
                    push_colored(&mut out, &self.theme.string, &escape_markup(&literal));
                    i = stop;
                }
                '/' if chars.get(i + 1) == Some(&'/') => {
                    let comment: String = chars[i..].iter().collect();
                    push_colored(&mut out, &self.theme.comment, &escape_markup(&comment));
                    i = chars.len();
                }
                '/' if chars.get(i + 1) == Some(&'*') => {
                    // Lines are colored independently, so a block comment left open runs to the
                    // end of this line only.
                    let stop = block_comment_end(&chars, i + 2).unwrap_or(chars.len());
                    let comment: String = chars[i..stop].iter().collect();
                    push_colored(&mut out, &self.theme.comment, &escape_markup(&comment));
                    i = stop;
                }
                '{' | '}' | '[' | ']' | '(' | ')' => {
                    let bracket = ch.to_string();
                    if highlight.is_highlighted(line_index, i) {
                        out.push_str("<b>");
                        push_colored(&mut out, &self.theme.bracket_match, &bracket);
                        out.push_str("</b>");
                    } else {
                        push_colored(&mut out, &self.theme.bracket, &bracket);
                    }
                    i += 1;
                }
                ':' => {
                    push_colored(&mut out, &self.theme.colon, ":");
                    i += 1;
                }
                ',' => {
                    push_colored(&mut out, &self.theme.comma, ",");
                    i += 1;
                }
                c if c.is_whitespace() => {
                    out.push(c);
                    i += 1;
                }
                _ => {
                    let start = i;
                    while i < chars.len() && !ends_word(&chars, i) {
                        i += 1;
                    }
                    let word: String = chars[start..i].iter().collect();
                    self.push_word(&mut out, &word);
                }
            }
        }

        out
    }

    /// Colorize line `line` of `doc` using the document's current bracket highlight.
    pub fn colorize_document_line(&self, doc: &TextDocument, line: usize) -> Option<String> {
        let raw = doc.line(line)?;
        Some(self.colorize_line(raw, line, &doc.bracket_highlight()))
    }

    /// Colorize every line of `doc`.
    pub fn colorize_document(&self, doc: &TextDocument) -> Vec<String> {
        let highlight = doc.bracket_highlight();
        let lines: Vec<String> = doc
            .lines()
            .iter()
            .enumerate()
            .map(|(index, raw)| self.colorize_line(raw, index, &highlight))
            .collect();
        tracing::trace!(lines = lines.len(), "colorized document");
        lines
    }

    fn push_word(&self, out: &mut String, word: &str) {
        if self.number.is_match(word) {
            push_colored(out, &self.theme.number, word);
        } else if KEYWORDS.contains(&word) {
            push_colored(out, &self.theme.keyword, word);
        } else {
            out.push_str(&escape_markup(word));
        }
    }
}

/// Escape rich-text markup so arbitrary content cannot open or close a tag.
///
/// A zero-width space follows every `<` and precedes every `>`; the text renders the same
/// but no longer parses as a tag.
pub fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '<' => out.push_str("<\u{200B}"),
            '>' => out.push_str("\u{200B}>"),
            _ => out.push(ch),
        }
    }
    out
}

fn push_colored(out: &mut String, color: &str, text: &str) {
    out.push_str("<color=");
    out.push_str(color);
    out.push('>');
    out.push_str(text);
    out.push_str("</color>");
}

fn ends_word(chars: &[char], i: usize) -> bool {
    match chars[i] {
        '{' | '}' | '[' | ']' | '(' | ')' | ':' | ',' | '"' => true,
        '/' => matches!(chars.get(i + 1), Some('/' | '*')),
        c => c.is_whitespace(),
    }
}

/// Index just past the `*/` that closes a block comment whose body starts at `from`.
fn block_comment_end(chars: &[char], from: usize) -> Option<usize> {
    (from..chars.len().saturating_sub(1))
        .find(|&i| chars[i] == '*' && chars[i + 1] == '/')
        .map(|i| i + 2)
}
