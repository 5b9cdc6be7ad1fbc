use chrono_json_editor::{EditorConfig, TextDocument};
use chrono_json_editor_highlight::{ColorTheme, JsonColorizer, escape_markup};
use pretty_assertions::assert_eq;

const ENGINE: &str = r#"{
  "Name": "Engine <v2>", // display name
  "Maximum Engine Speed": 4000,
  "Torque Map": [
    [-100, 300],
    [0, 1.5e3]
  ],
  "Active": true
}"#;

fn colorizer() -> JsonColorizer {
    JsonColorizer::new(ColorTheme::default()).unwrap()
}

#[test]
fn test_every_line_is_colorized_and_escaped() {
    let doc = TextDocument::with_config(ENGINE, EditorConfig::default());
    assert!(doc.is_valid());

    let lines = colorizer().colorize_document(&doc);
    assert_eq!(lines.len(), doc.line_count());
    assert_eq!(
        lines[1],
        "  <color=#ce9178>\"Name\"</color><color=#d4d4d4>:</color> \
         <color=#ce9178>\"Engine <\u{200B}v2\u{200B}>\"</color><color=#d4d4d4>,</color> \
         <color=#6a9955>// display name</color>"
    );
    assert!(lines[2].contains("<color=#b5cea8>4000</color>"));
    assert!(lines[4].contains("<color=#b5cea8>-100</color>"));
    assert!(lines[7].contains("<color=#569cd6>true</color>"));
}

#[test]
fn test_exponent_numbers_stay_uncolored() {
    let doc = TextDocument::new(ENGINE);
    let line = colorizer().colorize_document_line(&doc, 5).unwrap();
    assert!(line.contains(" 1.5e3"));
    assert!(!line.contains(">1.5e3<"));
}

#[test]
fn test_highlight_follows_caret() {
    let mut doc = TextDocument::new(ENGINE);
    let bold_bracket = "<b><color=#ff0000>[</color></b>";

    doc.set_caret(3, 17);
    let line = colorizer().colorize_document_line(&doc, 3).unwrap();
    assert!(line.contains(bold_bracket));
    let closing = colorizer().colorize_document_line(&doc, 6).unwrap();
    assert!(closing.contains("<b><color=#ff0000>]</color></b>"));

    doc.set_caret(2, 0);
    let line = colorizer().colorize_document_line(&doc, 3).unwrap();
    assert!(!line.contains(bold_bracket));
}

#[test]
fn test_escape_markup() {
    assert_eq!(escape_markup("a<b>c"), "a<\u{200B}b\u{200B}>c");
    assert_eq!(escape_markup("plain"), "plain");
}
