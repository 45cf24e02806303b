use crate::common::harness::EditorTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use scribe::config::Config;
use scribe::model::history::HistoryMode;

#[test]
fn test_undo_then_redo_restores_text() {
    let mut harness = EditorTestHarness::new(100, 24).unwrap();
    harness.type_text("hello").unwrap();
    harness.assert_screen_contains("hello");

    harness.send_ctrl('z').unwrap();
    assert_eq!(harness.text(), "hell");
    harness.assert_screen_not_contains("hello");

    harness.send_ctrl('y').unwrap();
    assert_eq!(harness.text(), "hello");
    harness.assert_screen_contains("hello");
}

#[test]
fn test_undo_is_limited_to_six_steps() {
    let mut harness = EditorTestHarness::new(100, 24).unwrap();
    harness.type_text("abcdefghij").unwrap();

    for _ in 0..10 {
        harness.send_ctrl('z').unwrap();
    }
    assert_eq!(harness.text(), "abcd");
    assert_eq!(harness.status_message(), Some("Nothing to undo"));
}

#[test]
fn test_redo_is_limited_to_six_steps() {
    let mut harness = EditorTestHarness::new(100, 24).unwrap();
    harness.type_text("abcdef").unwrap();
    for _ in 0..6 {
        harness.send_ctrl('z').unwrap();
    }
    assert_eq!(harness.text(), "");

    for _ in 0..10 {
        harness.send_ctrl('y').unwrap();
    }
    assert_eq!(harness.text(), "abcdef");
    assert_eq!(harness.status_message(), Some("Nothing to redo"));
}

#[test]
fn test_new_edit_discards_redo() {
    let mut harness = EditorTestHarness::new(100, 24).unwrap();
    harness.type_text("ab").unwrap();
    harness.send_ctrl('z').unwrap();
    harness.type_text("x").unwrap();

    harness.send_ctrl('y').unwrap();
    assert_eq!(harness.text(), "ax");
    assert_eq!(harness.status_message(), Some("Nothing to redo"));
}

#[test]
fn test_undo_on_new_editor_does_nothing() {
    let mut harness = EditorTestHarness::new(100, 24).unwrap();
    harness.send_ctrl('z').unwrap();
    assert_eq!(harness.text(), "");
    assert!(!harness.editor().session().is_dirty());
}

#[test]
fn test_character_history_mode() {
    let mut config = Config::default();
    config.editor.history_mode = HistoryMode::Character;
    let mut harness = EditorTestHarness::with_config(100, 24, config).unwrap();

    harness.type_text("xyz").unwrap();
    harness.send_ctrl('z').unwrap();
    harness.send_ctrl('z').unwrap();
    assert_eq!(harness.text(), "x");

    harness.send_ctrl('y').unwrap();
    assert_eq!(harness.text(), "xy");
}

#[test]
fn test_character_history_undoes_backspace_and_brackets() {
    let mut config = Config::default();
    config.editor.history_mode = HistoryMode::Character;
    let mut harness = EditorTestHarness::with_config(100, 24, config).unwrap();

    harness.type_text("abc").unwrap();
    harness.send_key(KeyCode::Backspace, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.text(), "ab");
    harness.send_ctrl('z').unwrap();
    assert_eq!(harness.text(), "abc");

    // Auto-closed pair is one edit and comes back out as one
    harness.type_text("(").unwrap();
    assert_eq!(harness.text(), "abc()");
    harness.send_ctrl('z').unwrap();
    assert_eq!(harness.text(), "abc");
}

#[test]
fn test_undo_to_saved_text_quits_without_asking() {
    let mut harness = EditorTestHarness::new(100, 24).unwrap();
    harness.type_text("ab").unwrap();
    harness.send_ctrl('z').unwrap();
    harness.send_ctrl('z').unwrap();
    assert_eq!(harness.text(), "");
    assert!(!harness.editor().session().is_dirty());

    harness.send_ctrl('q').unwrap();
    assert!(harness.editor().should_quit());
}

#[test]
fn test_configured_history_depth() {
    let mut config = Config::default();
    config.editor.history_depth = 2;
    let mut harness = EditorTestHarness::with_config(100, 24, config).unwrap();

    harness.type_text("abcd").unwrap();
    for _ in 0..4 {
        harness.send_ctrl('z').unwrap();
    }
    assert_eq!(harness.text(), "ab");
}
