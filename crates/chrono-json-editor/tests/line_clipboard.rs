use chrono_json_editor::{
    Clipboard, Command, CursorCommand, EditCommand, LocalClipboard, Position, TextDocument,
};
use pretty_assertions::assert_eq;

fn select_lines(doc: &mut TextDocument, first: usize, last: usize) {
    doc.set_caret(first, 0);
    doc.start_line_selection();
    doc.set_caret(last, 0);
    doc.update_selection_end();
}

#[test]
fn test_cut_selected_lines() {
    let clipboard = LocalClipboard::new();
    let mut doc = TextDocument::new("{\n  \"Mass\": 1,\n  \"Name\": \"a\"\n}")
        .with_clipboard(clipboard.clone());

    select_lines(&mut doc, 1, 2);
    let cut = doc.cut();

    assert_eq!(cut, "  \"Mass\": 1,\n  \"Name\": \"a\"");
    assert_eq!(clipboard.get_text().as_deref(), Some(cut.as_str()));
    assert_eq!(doc.line_count(), 2);
    assert_eq!(doc.text(), "{\n}");
    assert_eq!(doc.caret(), Position::new(1, 0));
    assert!(!doc.selection().active);
}

#[test]
fn test_selection_order_does_not_matter() {
    let mut doc = TextDocument::new("a\nb\nc\nd");
    select_lines(&mut doc, 2, 1);
    assert_eq!(doc.copy(), "b\nc");
}

#[test]
fn test_copy_without_selection_uses_caret_line() {
    let mut doc = TextDocument::new("a\nbb\nc");
    doc.set_caret(1, 1);
    assert_eq!(doc.copy(), "bb");
    assert_eq!(doc.text(), "a\nbb\nc");
    assert_eq!(doc.undo_depth(), 1);
}

#[test]
fn test_cut_then_paste_moves_lines() {
    let mut doc = TextDocument::new("a\nb\nc\nd");
    select_lines(&mut doc, 0, 1);
    doc.cut();
    assert_eq!(doc.text(), "c\nd");

    doc.set_caret(1, 1);
    doc.paste();
    assert_eq!(doc.text(), "c\nd\na\nb");
    assert_eq!(doc.caret(), Position::new(3, 0));

    doc.undo();
    assert_eq!(doc.text(), "c\nd");
    doc.undo();
    assert_eq!(doc.text(), "a\nb\nc\nd");
}

#[test]
fn test_clipboard_is_shared_between_documents() {
    let clipboard = LocalClipboard::new();
    let mut source = TextDocument::new("[1, 2]").with_clipboard(clipboard.clone());
    let mut target = TextDocument::new("{}").with_clipboard(clipboard);

    source.copy();
    target.paste();
    assert_eq!(target.text(), "{}\n[1, 2]");
}

#[test]
fn test_paste_normalizes_crlf() {
    let mut clipboard = LocalClipboard::new();
    clipboard.set_text("x\r\ny".to_string());
    let mut doc = TextDocument::new("").with_clipboard(clipboard);
    doc.paste();
    assert_eq!(doc.lines(), &["", "x", "y"]);
}

#[test]
fn test_delete_with_selection_removes_lines() {
    let mut doc = TextDocument::new("a\nb\nc");
    select_lines(&mut doc, 1, 2);
    doc.delete();
    assert_eq!(doc.text(), "a");
    assert_eq!(doc.caret(), Position::new(0, 0));
}

#[test]
fn test_insert_clears_selection_without_removing_lines() {
    let mut doc = TextDocument::new("a\nb");
    select_lines(&mut doc, 0, 1);
    doc.insert_text("x");
    assert_eq!(doc.text(), "a\nxb");
    assert!(!doc.selection().active);
}

#[test]
fn test_drag_selection_then_cut_via_commands() {
    let mut doc = TextDocument::new("0\n1\n2\n3\n4");
    let commands: Vec<Command> = vec![
        CursorCommand::MoveTo { line: 3, column: 0 }.into(),
        CursorCommand::BeginDrag.into(),
        CursorCommand::DragTo { line: 1, column: 1 }.into(),
        CursorCommand::EndDrag.into(),
        EditCommand::Cut.into(),
    ];
    let results = doc.execute_batch(commands).unwrap();

    assert_eq!(
        results.last(),
        Some(&chrono_json_editor::CommandResult::Text("1\n2\n3".to_string()))
    );
    assert_eq!(doc.text(), "0\n4");
}
