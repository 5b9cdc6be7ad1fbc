//! Escape-aware string literal scanning.
//!
//! The comment stripper, the bracket matcher and the syntax colorizer all need to agree on where a
//! JSON string literal ends. They share the helpers in this module, which operate on `char`
//! slices so callers can keep working with character (not byte) indices.

/// Returns `true` if the character at `index` is escaped by a preceding backslash.
///
/// Contiguous backslashes directly before `index` are counted: an odd count means the character is
/// escaped, an even count means the backslashes escape each other. So in `"a\\"` the final quote is
/// *not* escaped, while in `"a\"` it is.
///
/// `index` may be equal to `chars.len()`, in which case the trailing backslashes are counted.
pub fn is_escaped(chars: &[char], index: usize) -> bool {
    let mut backslashes = 0usize;
    let mut i = index.min(chars.len());
    while i > 0 && chars[i - 1] == '\\' {
        backslashes += 1;
        i -= 1;
    }
    backslashes % 2 == 1
}

/// Find the closing quote of a string literal whose opening quote is at `open`.
///
/// Returns the index of the closing (unescaped) quote, or `None` when the literal is not closed
/// before the end of `chars`.
pub fn find_string_end(chars: &[char], open: usize) -> Option<usize> {
    let mut i = open + 1;
    while i < chars.len() {
        if chars[i] == '"' && !is_escaped(chars, i) {
            return Some(i);
        }
        i += 1;
    }
    None
}
