/// Byte index of `column` (in chars) within `line`, clamped to the line end.
pub(crate) fn byte_index(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map_or(line.len(), |(byte, _)| byte)
}

pub(crate) fn char_len(line: &str) -> usize {
    line.chars().count()
}

/// The leading run of spaces and tabs of `line`.
pub(crate) fn leading_whitespace(line: &str) -> &str {
    let end = line
        .bytes()
        .position(|b| b != b' ' && b != b'\t')
        .unwrap_or(line.len());
    &line[..end]
}

pub(crate) fn is_bracket(ch: char) -> bool {
    matches!(ch, '{' | '}' | '[' | ']' | '(' | ')')
}
