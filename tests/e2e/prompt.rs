use crate::common::harness::EditorTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};

/// Test that the prompt is rendered on the bottom line
#[test]
fn test_prompt_rendering() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();

    harness.send_ctrl('o').unwrap();
    harness.assert_screen_contains("Open:");

    let buffer = harness.buffer();
    let prompt_y = buffer.area.height - 1;
    assert!(harness.screen_row(prompt_y).starts_with("Open:"));

    // Dark theme prompt background
    let cell = &buffer[(0, prompt_y)];
    assert_eq!(cell.bg, ratatui::style::Color::Rgb(20, 20, 20));

    // Cursor sits after "Open: "
    assert_eq!(harness.cursor_position(), (6, prompt_y));
}

/// Test prompt input handling (typing, backspace, cursor movement)
#[test]
fn test_prompt_input_handling() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();

    harness.send_ctrl('o').unwrap();
    harness.type_text("test.txt").unwrap();
    harness.assert_screen_contains("Open: test.txt");

    harness
        .send_key(KeyCode::Backspace, KeyModifiers::NONE)
        .unwrap();
    harness.assert_screen_contains("test.tx");
    harness.assert_screen_not_contains("test.txt");

    harness.type_text("t2").unwrap();
    harness.assert_screen_contains("test.txt2");

    harness.send_key(KeyCode::Home, KeyModifiers::NONE).unwrap();
    harness.type_text("my_").unwrap();
    harness.assert_screen_contains("my_test.txt2");

    harness.send_key(KeyCode::End, KeyModifiers::NONE).unwrap();
    harness.type_text("!").unwrap();
    harness.assert_screen_contains("my_test.txt2!");
}

/// Test canceling the prompt with Escape
#[test]
fn test_prompt_cancel() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();

    harness.send_ctrl('o').unwrap();
    harness.type_text("abc").unwrap();
    harness.send_key(KeyCode::Esc, KeyModifiers::NONE).unwrap();

    harness.assert_screen_not_contains("Open:");
    assert!(!harness.editor().is_prompting());
    assert_eq!(harness.text(), "");
}

/// Keys typed into a prompt never reach the buffer
#[test]
fn test_prompt_swallows_shortcuts() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.type_text("body").unwrap();

    harness.send_ctrl('f').unwrap();
    harness.type_text("x").unwrap();
    harness.send_ctrl('z').unwrap();
    harness.send_ctrl('q').unwrap();

    assert!(harness.editor().is_prompting());
    assert!(!harness.editor().should_quit());
    assert_eq!(harness.text(), "body");
}
