use crate::common::harness::EditorTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use scribe::config::{Config, Keybinding};

#[test]
fn test_typed_text_renders_with_line_numbers() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.type_text("hello\nworld").unwrap();

    assert_eq!(harness.screen_row(0).trim_end(), "  1 hello");
    assert_eq!(harness.screen_row(1).trim_end(), "  2 world");
    assert_eq!(harness.cursor_position(), (9, 1));
    harness.assert_screen_contains("Ln 2, Col 6");
    harness.assert_screen_contains("untitled - Text Editor [+]");
}

#[test]
fn test_line_numbers_can_be_disabled() {
    let mut config = Config::default();
    config.editor.line_numbers = false;
    let mut harness = EditorTestHarness::with_config(80, 24, config).unwrap();
    harness.type_text("plain").unwrap();

    assert_eq!(harness.screen_row(0).trim_end(), "plain");
    assert_eq!(harness.cursor_position(), (5, 0));
}

#[test]
fn test_brackets_auto_close() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.type_text("f(x").unwrap();
    assert_eq!(harness.text(), "f(x)");

    harness.send_key(KeyCode::End, KeyModifiers::NONE).unwrap();
    harness.type_text(" {").unwrap();
    assert_eq!(harness.text(), "f(x) {}");
}

#[test]
fn test_delete_keys_and_arrows() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.type_text("abcd").unwrap();

    harness.send_key(KeyCode::Left, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Left, KeyModifiers::NONE).unwrap();
    harness
        .send_key(KeyCode::Backspace, KeyModifiers::NONE)
        .unwrap();
    assert_eq!(harness.text(), "acd");

    harness.send_key(KeyCode::Delete, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.text(), "ad");

    harness.send_key(KeyCode::Home, KeyModifiers::NONE).unwrap();
    harness.type_text(">").unwrap();
    assert_eq!(harness.text(), ">ad");
}

#[test]
fn test_vertical_movement() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.type_text("long line\nab").unwrap();

    harness.send_key(KeyCode::Up, KeyModifiers::NONE).unwrap();
    harness.type_text("_").unwrap();
    assert_eq!(harness.text(), "lo_ng line\nab");
}

#[test]
fn test_tab_inserts_configured_spaces() {
    let mut config = Config::default();
    config.editor.tab_size = 2;
    let mut harness = EditorTestHarness::with_config(80, 24, config).unwrap();

    harness.send_key(KeyCode::Tab, KeyModifiers::NONE).unwrap();
    harness.type_text("x").unwrap();
    assert_eq!(harness.text(), "  x");
}

#[test]
fn test_custom_keybinding() {
    let mut config = Config::default();
    config.keybindings.push(Keybinding {
        key: "u".to_string(),
        modifiers: vec!["ctrl".to_string()],
        action: "undo".to_string(),
    });
    let mut harness = EditorTestHarness::with_config(80, 24, config).unwrap();

    harness.type_text("ab").unwrap();
    harness.send_ctrl('u').unwrap();
    assert_eq!(harness.text(), "a");
}

#[test]
fn test_view_scrolls_with_cursor() {
    let mut harness = EditorTestHarness::new(40, 6).unwrap();
    let text = (1..=20)
        .map(|n| format!("row{n}"))
        .collect::<Vec<_>>()
        .join("\n");
    harness.editor_mut().handle_paste(&text);
    harness.render().unwrap();

    // Five text rows above the status bar
    harness.assert_screen_contains(" 20 row20");
    harness.assert_screen_not_contains(" 15 row15");
    assert_eq!(harness.cursor_position(), (9, 4));
}
