//! Comment removal for JSON-with-comments text.
//!
//! Comments are blanked rather than removed: every comment character (delimiters included) becomes
//! a single space and newlines inside block comments are kept. The stripped text therefore has the
//! same line count and the same `char` column for every surviving character as the input, so parse
//! diagnostics computed on the stripped text point at the right place in the original.

use crate::scan::is_escaped;

/// A 1-based line/column location in a text, columns counted in `char`s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// 1-based line number.
    pub line: usize,
    /// 1-based column number.
    pub column: usize,
}

/// Result of [`strip_comments_detailed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrippedText {
    /// The comment-free text, aligned line-for-line and column-for-column with the input.
    pub text: String,
    /// Opening location of a `/*` comment that was never closed, if any.
    pub unterminated_block: Option<Location>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanMode {
    Code,
    InString,
    LineComment,
    BlockComment,
}

/// Strip `//` and `/* */` comments that appear outside string literals.
pub fn strip_comments(text: &str) -> String {
    strip_comments_detailed(text).text
}

/// Strip comments and report an unterminated block comment, if one is found.
pub fn strip_comments_detailed(text: &str) -> StrippedText {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut mode = ScanMode::Code;
    let mut block_start: Option<Location> = None;

    let mut line = 1usize;
    let mut column = 1usize;
    let mut i = 0usize;

    while i < chars.len() {
        let ch = chars[i];
        let next = chars.get(i + 1).copied();
        let mut consumed = 1usize;

        match mode {
            ScanMode::Code => match (ch, next) {
                ('"', _) => {
                    mode = ScanMode::InString;
                    out.push(ch);
                }
                ('/', Some('/')) => {
                    mode = ScanMode::LineComment;
                    out.push_str("  ");
                    consumed = 2;
                }
                ('/', Some('*')) => {
                    mode = ScanMode::BlockComment;
                    block_start = Some(Location { line, column });
                    out.push_str("  ");
                    consumed = 2;
                }
                _ => out.push(ch),
            },
            ScanMode::InString => {
                if ch == '"' && !is_escaped(&chars, i) {
                    mode = ScanMode::Code;
                }
                out.push(ch);
            }
            ScanMode::LineComment => {
                if ch == '\n' {
                    mode = ScanMode::Code;
                    out.push('\n');
                } else {
                    out.push(' ');
                }
            }
            ScanMode::BlockComment => match (ch, next) {
                ('*', Some('/')) => {
                    mode = ScanMode::Code;
                    block_start = None;
                    out.push_str("  ");
                    consumed = 2;
                }
                ('\n', _) => out.push('\n'),
                _ => out.push(' '),
            },
        }

        for &c in &chars[i..i + consumed] {
            if c == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        i += consumed;
    }

    StrippedText {
        text: out,
        unterminated_block: if mode == ScanMode::BlockComment {
            block_start
        } else {
            None
        },
    }
}
