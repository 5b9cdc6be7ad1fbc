use chrono_json_editor::{EditorConfig, JsoncErrorKind, Position, TextDocument};
use pretty_assertions::assert_eq;

#[test]
fn test_comments_do_not_invalidate_document() {
    let doc = TextDocument::new("{\"x\": /* comment */ 5} // trailing");
    assert!(doc.is_valid());
}

#[test]
fn test_every_keystroke_revalidates() {
    let mut doc = TextDocument::new("{}");
    doc.set_caret(0, 1);
    for (ch, valid) in [("\"", false), ("k", false), ("\"", false), (":", false), ("1", true)] {
        doc.insert_text(ch);
        assert_eq!(doc.is_valid(), valid, "after typing {ch:?}: {}", doc.text());
    }
    assert_eq!(doc.text(), "{\"k\":1}");
}

#[test]
fn test_parse_error_points_into_original_text() {
    let config = EditorConfig::default().with_parse_context("Tire.json");
    let doc = TextDocument::with_config("{\n  /* note */ \"a\": tru\n}", config);

    let err = doc.last_parse_error().unwrap();
    assert_eq!(err.kind, JsoncErrorKind::Syntax);
    assert_eq!(err.line, 2);
    assert!(err.column >= 19, "column {} should be at or after the bad literal", err.column);
    assert!(doc.last_parse_error_message().starts_with("Tire.json: "));

    let doc = TextDocument::new("{\n  /* note */ \"a\": ]\n}");
    let err = doc.last_parse_error().unwrap();
    assert_eq!(err.kind, JsoncErrorKind::Syntax);
    assert_eq!(err.line, 2);
}

#[test]
fn test_unterminated_block_comment_is_reported() {
    let doc = TextDocument::new("{\"a\": 1} /* open");
    let err = doc.last_parse_error().unwrap();
    assert_eq!(err.kind, JsoncErrorKind::UnterminatedComment);
    assert_eq!((err.line, err.column), (1, 10));
}

#[test]
fn test_bracket_partner_follows_caret() {
    let mut doc = TextDocument::new("{\"a\": [1,2]}");
    doc.set_caret(0, 0);
    let highlight = doc.bracket_highlight();
    assert_eq!(highlight.active, Some(Position::new(0, 0)));
    assert_eq!(highlight.partner, Some(Position::new(0, 11)));

    doc.set_caret(0, 6);
    assert_eq!(doc.bracket_highlight().partner, Some(Position::new(0, 10)));

    // Past the end of the line the bracket before the caret is used.
    doc.set_caret(0, 12);
    let highlight = doc.bracket_highlight();
    assert_eq!(highlight.active, Some(Position::new(0, 11)));
    assert_eq!(highlight.partner, Some(Position::new(0, 0)));
}

#[test]
fn test_bracket_partner_skips_commented_text() {
    let text = "{\n  \"Radius\": 0.4, // 16\" rim\n  \"Curve\": [\n    1,\n    2\n  ]\n}";
    let mut doc = TextDocument::new(text);
    doc.set_caret(2, 11);
    let highlight = doc.bracket_highlight();
    assert_eq!(highlight.active, Some(Position::new(2, 11)));
    assert_eq!(highlight.partner, Some(Position::new(5, 2)));

    let loaded = TextDocument::load(text, EditorConfig::default()).unwrap();
    assert_eq!(loaded.lines()[2], "  \"Curve\": [1, 2]");

    let mut doc = TextDocument::new("{ // see [docs\n  \"a\": [1]\n}");
    doc.set_caret(0, 0);
    assert_eq!(doc.bracket_highlight().partner, Some(Position::new(2, 0)));
}

#[test]
fn test_bracket_partner_across_lines_updates_after_edit() {
    let mut doc = TextDocument::new("[\n  1\n]");
    doc.set_caret(0, 0);
    assert_eq!(doc.bracket_highlight().partner, Some(Position::new(2, 0)));

    doc.set_caret(1, 3);
    doc.insert_newline();
    doc.set_caret(0, 0);
    assert_eq!(doc.bracket_highlight().partner, Some(Position::new(3, 0)));
}

#[test]
fn test_unbalanced_brackets_have_no_partner() {
    let mut doc = TextDocument::new("{\"a\": [1, 2}");
    doc.set_caret(0, 6);
    let highlight = doc.bracket_highlight();
    assert_eq!(highlight.active, Some(Position::new(0, 6)));
    assert_eq!(highlight.partner, None);
    assert!(!doc.is_valid());
}

#[test]
fn test_brackets_inside_strings_are_ignored() {
    let mut doc = TextDocument::new(r#"{"a\"[": "]"}"#);
    doc.set_caret(0, 0);
    assert_eq!(doc.bracket_highlight().partner, Some(Position::new(0, 12)));
}

#[test]
fn test_load_keeps_non_numeric_arrays() {
    let text = "{\n  \"names\": [\n    \"a\",\n    \"b\"\n  ],\n  \"xs\": [\n    1,\n    2.5\n  ]\n}";
    let doc = TextDocument::load(text, EditorConfig::default()).unwrap();
    assert_eq!(
        doc.text(),
        "{\n  \"names\": [\n    \"a\",\n    \"b\"\n  ],\n  \"xs\": [1, 2.5]\n}"
    );
}
