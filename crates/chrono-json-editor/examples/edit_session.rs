//! Edit session example
//!
//! Loads a commented vehicle file, edits it through the command interface and prints the
//! resulting text. Run with `RUST_LOG=chrono_json_editor=debug` to see the editor's tracing output.

use chrono_json_editor::{
    Command, CommandResult, CursorCommand, Direction, EditCommand, EditorConfig, TextDocument,
};
use tracing_subscriber::EnvFilter;

const CHASSIS: &str = r#"// Chassis subsystem
{
  "Name": "HMMWV chassis",
  "Type": "Chassis",
  "Components": {
    "Mass": 2086.52, /* kg */
    "Inertia": [
      1078.52,
      2955.66,
      3570.20
    ]
  }
}"#;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = EditorConfig::default().with_parse_context("Chassis.json");
    let mut doc = match TextDocument::load(CHASSIS, config) {
        Ok(doc) => doc,
        Err(err) => {
            eprintln!("failed to load: {err}");
            return;
        }
    };
    println!("Loaded {} lines:\n{}\n", doc.line_count(), doc.text());

    // Delete the comma after "Mass", then look at the error.
    let commands: Vec<Command> = vec![
        CursorCommand::MoveTo { line: 5, column: 20 }.into(),
        EditCommand::Backspace.into(),
    ];
    for command in commands {
        if let Err(err) = doc.execute(command) {
            eprintln!("command failed: {err}");
        }
    }
    println!("After backspace: valid = {}", doc.is_valid());
    println!("  {}\n", doc.last_parse_error_message());

    // Undo, then duplicate the "Name" line with copy + paste.
    doc.undo();
    let steps: Vec<Command> = vec![
        CursorCommand::MoveTo { line: 2, column: 0 }.into(),
        EditCommand::Copy.into(),
        CursorCommand::Move {
            direction: Direction::Down,
            extend: false,
        }
        .into(),
        EditCommand::Paste.into(),
    ];
    for step in steps {
        match doc.execute(step) {
            Ok(CommandResult::Text(text)) => println!("Copied: {text}"),
            Ok(_) => {}
            Err(err) => eprintln!("command failed: {err}"),
        }
    }

    let highlight = doc.bracket_highlight();
    println!(
        "Caret {:?}, bracket {:?} <-> {:?}",
        doc.caret(),
        highlight.active,
        highlight.partner
    );

    // Duplicate keys are legal but the second one wins; format to see the result.
    if let Err(err) = doc.execute(EditCommand::Format) {
        eprintln!("format failed: {err}");
    }
    println!("\nFormatted:\n{}", doc.text());
}
