use chrono_json_editor_jsonc::{parse, strip_comments, to_pretty_string};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::{Map, Value, json};

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        "[a-zA-Z0-9 /*\\\\\"]{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec(("[a-z/*]{1,6}", inner), 0..6)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

/// Decorate every line of a pretty-printed document with comments placed outside strings.
fn decorate(pretty: &str) -> String {
    pretty
        .split('\n')
        .enumerate()
        .map(|(i, line)| format!("/* c{i} */{line} // line {i} \"quoted\" {{"))
        .collect::<Vec<_>>()
        .join("\n")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_commented_document_parses_like_plain(value in arb_value()) {
        let plain = to_pretty_string(&value, "  ").unwrap();
        let commented = decorate(&plain);

        let from_plain = parse(&plain).unwrap();
        let from_commented = parse(&commented).unwrap();
        prop_assert_eq!(&from_plain, &from_commented);
        prop_assert_eq!(&from_plain, &value);
    }

    #[test]
    fn prop_stripping_preserves_line_and_char_counts(value in arb_value()) {
        let commented = decorate(&to_pretty_string(&value, "\t").unwrap());
        let stripped = strip_comments(&commented);
        prop_assert_eq!(stripped.split('\n').count(), commented.split('\n').count());
        prop_assert_eq!(stripped.chars().count(), commented.chars().count());
    }
}

#[test]
fn test_commented_engine_map_matches_plain_equivalent() {
    let commented = r#"
// Chrono engine description
{
    "Name": "HMMWV Engine", /* display name */
    "Type": "Engine",
    "Torque Map": [
        [-100, 300], // idle
        [800, 382],
        [2400, 470]  /* peak */
    ]
}
"#;
    let plain = r#"{
    "Name": "HMMWV Engine",
    "Type": "Engine",
    "Torque Map": [[-100, 300], [800, 382], [2400, 470]]
}"#;
    assert_eq!(parse(commented).unwrap(), parse(plain).unwrap());
}

#[test]
fn test_error_points_into_original_text() {
    let text = "{\n  // fine\n  \"a\": tru\n}";
    let err = parse(text).unwrap_err();
    assert_eq!(err.line, 3);
    assert!(err.column >= 8, "column {} should be at or after the bad literal", err.column);
}
