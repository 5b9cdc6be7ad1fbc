//! Numeric-array inlining.
//!
//! Curve data in Chrono vehicle files (engine torque maps, tire tables) is usually stored as arrays
//! of numbers, which pretty printers spread one element per line. [`inline_numeric_arrays`]
//! collapses every array made only of numbers onto a single line and leaves everything else
//! byte-for-byte as it was.

use crate::brackets::compute_bracket_pairs;
use serde_json::Value;

/// Reformat every `[...]` whose contents are all numbers as `[a, b, c]`.
///
/// Candidate spans are parsed on their own with a strict JSON parser; a span that fails to parse
/// (malformed, or holding comments) is treated as non-numeric and kept unchanged.
pub fn inline_numeric_arrays(json: &str) -> String {
    let chars: Vec<char> = json.chars().collect();
    let pairs = compute_bracket_pairs(json);

    let mut openings: Vec<(usize, usize)> = pairs
        .iter()
        .filter(|&(&open, &close)| open < close && chars[open] == '[')
        .map(|(&open, &close)| (open, close))
        .collect();
    openings.sort_unstable();

    let mut out = String::with_capacity(json.len());
    let mut cursor = 0usize;
    let mut inlined = 0usize;

    for (open, close) in openings {
        if open < cursor {
            // Inside a span that was already inlined.
            continue;
        }
        let span: String = chars[open..=close].iter().collect();
        let Some(compact) = compact_numeric_array(&span) else {
            continue;
        };
        out.extend(&chars[cursor..open]);
        out.push_str(&compact);
        cursor = close + 1;
        inlined += 1;
    }
    out.extend(&chars[cursor..]);

    if inlined > 0 {
        tracing::debug!(arrays = inlined, "inlined numeric arrays");
    }
    out
}

fn compact_numeric_array(span: &str) -> Option<String> {
    let Ok(Value::Array(items)) = serde_json::from_str::<Value>(span) else {
        return None;
    };
    if !items.iter().all(Value::is_number) {
        return None;
    }
    let parts: Vec<String> = items.iter().map(Value::to_string).collect();
    Some(format!("[{}]", parts.join(", ")))
}
