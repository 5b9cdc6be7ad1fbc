//! Bracket pairing for `{}`, `[]` and `()`.
//!
//! Pairs are found with a single scan over the comment-stripped text that skips string literals
//! (using the same escape rule as the parser). Stripping blanks comments in place, so brackets and
//! quotes inside `//` or `/* */` comments are never paired and offsets still index the original
//! text. Unbalanced input never fails: a closing bracket that does not match the innermost
//! open bracket is ignored, and unclosed brackets simply have no partner.

use crate::buffer::TextBuffer;
use crate::position::Position;
use crate::text::is_bracket;
use chrono_json_editor_jsonc::{is_escaped, strip_comments};
use std::collections::HashMap;

/// Symmetric map of bracket character offsets to their partner's offset.
pub type BracketPairs = HashMap<usize, usize>;

fn opener_for(closer: char) -> Option<char> {
    match closer {
        '}' => Some('{'),
        ']' => Some('['),
        ')' => Some('('),
        _ => None,
    }
}

/// Compute all matched bracket pairs of `text`, keyed by character offset (both directions).
pub fn compute_bracket_pairs(text: &str) -> BracketPairs {
    let chars: Vec<char> = strip_comments(text).chars().collect();
    let mut pairs = BracketPairs::new();
    let mut stack: Vec<(char, usize)> = Vec::new();
    let mut in_string = false;

    for (offset, &ch) in chars.iter().enumerate() {
        if ch == '"' && !is_escaped(&chars, offset) {
            in_string = !in_string;
            continue;
        }
        if in_string {
            continue;
        }

        match ch {
            '{' | '[' | '(' => stack.push((ch, offset)),
            '}' | ']' | ')' => {
                if let Some(&(open_ch, open_offset)) = stack.last()
                    && Some(open_ch) == opener_for(ch)
                {
                    stack.pop();
                    pairs.insert(open_offset, offset);
                    pairs.insert(offset, open_offset);
                }
            }
            _ => {}
        }
    }

    pairs
}

/// Bracket pairs cached against the text they were computed from.
#[derive(Debug, Clone, Default)]
pub struct BracketIndex {
    source: Option<String>,
    pairs: BracketPairs,
}

impl BracketIndex {
    /// Recompute the pairs if `text` differs from the cached source.
    pub fn refresh(&mut self, text: &str) -> &BracketPairs {
        if self.source.as_deref() != Some(text) {
            self.pairs = compute_bracket_pairs(text);
            self.source = Some(text.to_string());
        }
        &self.pairs
    }

    /// The current pairs (as of the last refresh).
    pub fn pairs(&self) -> &BracketPairs {
        &self.pairs
    }

    /// Partner offset of the bracket at `offset`.
    pub fn partner(&self, offset: usize) -> Option<usize> {
        self.pairs.get(&offset).copied()
    }
}

/// The bracket under (or just before) the caret and its partner, for highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BracketHighlight {
    /// Position of the active bracket (always on the caret line).
    pub active: Option<Position>,
    /// Position of the active bracket's partner, when it has one.
    pub partner: Option<Position>,
}

impl BracketHighlight {
    /// Whether `(line, column)` is the active or partner bracket.
    pub fn is_highlighted(&self, line: usize, column: usize) -> bool {
        let pos = Position::new(line, column);
        self.active == Some(pos) || self.partner == Some(pos)
    }

    /// Locate the highlight for `caret`.
    ///
    /// The bracket *at* the caret wins; otherwise the bracket immediately before the caret is
    /// used.
    pub fn at_caret(buffer: &TextBuffer, index: &BracketIndex, caret: Position) -> Self {
        let Some(line) = buffer.line(caret.line) else {
            return Self::default();
        };

        let mut column = None;
        let mut chars = line.chars().skip(caret.column.saturating_sub(1));
        let before = if caret.column > 0 { chars.next() } else { None };
        let at = chars.next();

        if at.is_some_and(is_bracket) {
            column = Some(caret.column);
        } else if before.is_some_and(is_bracket) {
            column = Some(caret.column - 1);
        }

        let Some(column) = column else {
            return Self::default();
        };
        let active = Position::new(caret.line, column);
        let partner = index
            .partner(buffer.char_offset(active))
            .map(|offset| buffer.position_at(offset));

        Self {
            active: Some(active),
            partner,
        }
    }
}
