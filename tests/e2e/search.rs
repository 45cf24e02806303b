use crate::common::harness::EditorTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};

#[test]
fn test_find_reports_location_and_moves_cursor() {
    let mut harness = EditorTestHarness::new(100, 24).unwrap();
    harness.type_text("xxabcxx").unwrap();

    harness.send_ctrl('f').unwrap();
    harness.assert_screen_contains("Find:");
    harness.answer_prompt("abc").unwrap();

    assert_eq!(
        harness.status_message(),
        Some("Found 'abc' at 2 (row: 0, col: 2)")
    );
    harness.assert_screen_contains("Found 'abc' at 2 (row: 0, col: 2)");
    assert_eq!(harness.editor().session().buffer().cursor(), 2);
    // Gutter is four columns wide
    assert_eq!(harness.cursor_position(), (6, 0));
    assert_eq!(harness.text(), "xxabcxx");
}

#[test]
fn test_find_on_later_line() {
    let mut harness = EditorTestHarness::new(100, 24).unwrap();
    harness.type_text("one\ntwo abc").unwrap();

    harness.send_ctrl('f').unwrap();
    harness.answer_prompt("abc").unwrap();

    assert_eq!(
        harness.status_message(),
        Some("Found 'abc' at 8 (row: 1, col: 4)")
    );
    assert_eq!(harness.cursor_position(), (8, 1));
}

#[test]
fn test_find_missing_leaves_buffer_alone() {
    let mut harness = EditorTestHarness::new(100, 24).unwrap();
    harness.type_text("hello").unwrap();
    let undo_len = harness.editor().session().history().undo_len();

    harness.send_ctrl('f').unwrap();
    harness.answer_prompt("zzz").unwrap();

    assert_eq!(harness.status_message(), Some("Could not find 'zzz'"));
    assert_eq!(harness.text(), "hello");
    assert_eq!(harness.editor().session().history().undo_len(), undo_len);
}

#[test]
fn test_find_next_cycles_through_matches() {
    let mut harness = EditorTestHarness::new(100, 24).unwrap();
    harness.type_text("ab ab ab").unwrap();

    harness.send_ctrl('f').unwrap();
    harness.answer_prompt("ab").unwrap();
    assert_eq!(harness.editor().session().buffer().cursor(), 0);

    let mut offsets = Vec::new();
    for _ in 0..3 {
        harness.send_ctrl('g').unwrap();
        offsets.push(harness.editor().session().buffer().cursor());
    }
    assert_eq!(offsets, vec![3, 6, 0]);
}

#[test]
fn test_find_next_without_search_opens_prompt() {
    let mut harness = EditorTestHarness::new(100, 24).unwrap();
    harness.send_ctrl('g').unwrap();
    harness.assert_screen_contains("Find:");
}

#[test]
fn test_find_prompt_remembers_last_needle() {
    let mut harness = EditorTestHarness::new(100, 24).unwrap();
    harness.type_text("needle").unwrap();
    harness.send_ctrl('f').unwrap();
    harness.answer_prompt("eed").unwrap();

    harness.send_ctrl('f').unwrap();
    harness.assert_screen_contains("Find: eed");
}

#[test]
fn test_replace_first_occurrence() {
    let mut harness = EditorTestHarness::new(100, 24).unwrap();
    harness.type_text("ab ab").unwrap();

    harness.send_ctrl('h').unwrap();
    harness.assert_screen_contains("Replace:");
    harness.answer_prompt("ab").unwrap();
    harness.assert_screen_contains("Replace 'ab' with:");
    harness.answer_prompt("cd").unwrap();

    assert_eq!(harness.text(), "cd ab");
    assert_eq!(
        harness.status_message(),
        Some("Replaced 'ab' with 'cd' at 0")
    );

    harness.send_ctrl('z').unwrap();
    assert_eq!(harness.text(), "ab ab");
}

#[test]
fn test_replace_missing_needle_stops_early() {
    let mut harness = EditorTestHarness::new(100, 24).unwrap();
    harness.type_text("abc").unwrap();

    harness.send_ctrl('h').unwrap();
    harness.answer_prompt("zz").unwrap();

    assert_eq!(harness.status_message(), Some("Could not find 'zz'"));
    assert!(!harness.editor().is_prompting());
    assert_eq!(harness.text(), "abc");
}

#[test]
fn test_replace_cancelled_at_second_step() {
    let mut harness = EditorTestHarness::new(100, 24).unwrap();
    harness.type_text("abc").unwrap();

    harness.send_ctrl('h').unwrap();
    harness.answer_prompt("b").unwrap();
    harness.send_key(KeyCode::Esc, KeyModifiers::NONE).unwrap();

    assert!(!harness.editor().is_prompting());
    assert_eq!(harness.text(), "abc");
}
