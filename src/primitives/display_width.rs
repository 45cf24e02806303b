//! Terminal display width of text
//!
//! CJK characters and most emoji take two columns; control characters take
//! none. Cursor placement and horizontal scrolling go through these helpers
//! instead of counting chars.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[inline]
pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

#[inline]
pub fn str_width(s: &str) -> usize {
    s.width()
}

/// Display width of everything before `byte_offset` in `s`.
#[inline]
pub fn visual_column_at_byte(s: &str, byte_offset: usize) -> usize {
    let mut end = byte_offset.min(s.len());
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s[..end].chars().map(char_width).sum()
}

/// Byte offset of the first character starting at or after `visual_col`.
///
/// Returns `s.len()` when the column lies past the end of the string.
#[inline]
pub fn byte_offset_at_visual_column(s: &str, visual_col: usize) -> usize {
    let mut current_col = 0;
    for (byte_idx, ch) in s.char_indices() {
        if current_col >= visual_col {
            return byte_idx;
        }
        current_col += char_width(ch);
    }
    s.len()
}
