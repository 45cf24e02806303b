//! The editable text and its cursor
//!
//! `TextBuffer` is a plain `String` plus a cursor stored as a byte offset.
//! The cursor always sits on a grapheme boundary; every operation that
//! moves it goes through the helpers in [`crate::primitives::grapheme`].

use crate::primitives::display_width::{byte_offset_at_visual_column, visual_column_at_byte};
use crate::primitives::grapheme::{
    floor_grapheme_boundary, next_grapheme_boundary, prev_grapheme_boundary,
};

/// Closing bracket inserted after an opening one when auto-close is on
pub fn closing_bracket(c: char) -> Option<char> {
    match c {
        '{' => Some('}'),
        '(' => Some(')'),
        '[' => Some(']'),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    /// Cursor position as a byte offset into `text`
    cursor: usize,
    /// Display column to return to when moving vertically through short lines
    preferred_column: Option<usize>,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer holding `text` with the cursor at the start
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            cursor: 0,
            preferred_column: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Mutable access to the raw text.
    ///
    /// Callers must follow up with [`TextBuffer::clamp_cursor`].
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    /// Replace the whole text. The cursor keeps its offset where possible.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.preferred_column = None;
        self.clamp_cursor();
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor to `offset`, snapping to a grapheme boundary
    pub fn set_cursor(&mut self, offset: usize) {
        self.cursor = floor_grapheme_boundary(&self.text, offset);
        self.preferred_column = None;
    }

    /// Pull the cursor back inside the text and onto a boundary
    pub fn clamp_cursor(&mut self) {
        self.cursor = floor_grapheme_boundary(&self.text, self.cursor.min(self.text.len()));
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        self.preferred_column = None;
    }

    pub fn insert_str(&mut self, s: &str) {
        self.text.insert_str(self.cursor, s);
        self.cursor += s.len();
        self.preferred_column = None;
    }

    /// Insert `open` and its closing bracket, leaving the cursor between them
    pub fn insert_bracket_pair(&mut self, open: char) {
        self.insert_char(open);
        if let Some(close) = closing_bracket(open) {
            self.text.insert(self.cursor, close);
        }
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Delete the grapheme before the cursor. Returns false at the start.
    pub fn delete_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let start = prev_grapheme_boundary(&self.text, self.cursor);
        self.text.replace_range(start..self.cursor, "");
        self.cursor = start;
        self.preferred_column = None;
        true
    }

    /// Delete the grapheme after the cursor. Returns false at the end.
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.text.len() {
            return false;
        }
        let end = next_grapheme_boundary(&self.text, self.cursor);
        self.text.replace_range(self.cursor..end, "");
        self.preferred_column = None;
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = prev_grapheme_boundary(&self.text, self.cursor);
        self.preferred_column = None;
    }

    pub fn move_right(&mut self) {
        self.cursor = next_grapheme_boundary(&self.text, self.cursor);
        self.preferred_column = None;
    }

    pub fn move_up(&mut self) {
        let line = self.cursor_line();
        if line == 0 {
            self.move_line_start();
            return;
        }
        self.move_to_line_keeping_column(line - 1);
    }

    pub fn move_down(&mut self) {
        let line = self.cursor_line();
        if line + 1 >= self.line_count() {
            self.move_line_end();
            return;
        }
        self.move_to_line_keeping_column(line + 1);
    }

    pub fn move_line_start(&mut self) {
        self.cursor = self.line_start(self.cursor);
        self.preferred_column = None;
    }

    pub fn move_line_end(&mut self) {
        self.cursor = self.line_end(self.cursor);
        self.preferred_column = None;
    }

    pub fn move_document_start(&mut self) {
        self.cursor = 0;
        self.preferred_column = None;
    }

    pub fn move_document_end(&mut self) {
        self.cursor = self.text.len();
        self.preferred_column = None;
    }

    /// Zero-based line and byte column of the cursor
    pub fn cursor_line_col(&self) -> (usize, usize) {
        crate::model::search::line_col_at(&self.text, self.cursor)
    }

    /// Zero-based line of the cursor
    pub fn cursor_line(&self) -> usize {
        self.cursor_line_col().0
    }

    /// Display column of the cursor within its line
    pub fn cursor_visual_column(&self) -> usize {
        let start = self.line_start(self.cursor);
        visual_column_at_byte(&self.text[start..], self.cursor - start)
    }

    /// Number of lines; an empty buffer and a trailing newline both count
    /// the empty last line.
    pub fn line_count(&self) -> usize {
        self.text.bytes().filter(|&b| b == b'\n').count() + 1
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }

    /// Byte offset of the start of line `line`, if it exists
    pub fn line_offset(&self, line: usize) -> Option<usize> {
        if line == 0 {
            return Some(0);
        }
        self.text
            .match_indices('\n')
            .nth(line - 1)
            .map(|(idx, _)| idx + 1)
    }

    fn line_start(&self, offset: usize) -> usize {
        self.text[..offset]
            .rfind('\n')
            .map(|idx| idx + 1)
            .unwrap_or(0)
    }

    fn line_end(&self, offset: usize) -> usize {
        self.text[offset..]
            .find('\n')
            .map(|idx| offset + idx)
            .unwrap_or(self.text.len())
    }

    fn move_to_line_keeping_column(&mut self, target_line: usize) {
        let column = self
            .preferred_column
            .unwrap_or_else(|| self.cursor_visual_column());
        let Some(start) = self.line_offset(target_line) else {
            return;
        };
        let end = self.line_end(start);
        let offset = start + byte_offset_at_visual_column(&self.text[start..end], column);
        self.cursor = floor_grapheme_boundary(&self.text, offset);
        self.preferred_column = Some(column);
    }
}
