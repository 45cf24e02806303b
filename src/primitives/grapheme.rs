//! Grapheme cluster boundaries for cursor movement and deletion
//!
//! The cursor moves over what a user perceives as one character, so
//! combining marks and emoji sequences are stepped over as a unit.

use unicode_segmentation::UnicodeSegmentation;

/// Byte offset where the grapheme cluster before `pos` starts.
#[inline]
pub fn prev_grapheme_boundary(s: &str, pos: usize) -> usize {
    if pos == 0 || s.is_empty() {
        return 0;
    }

    let pos = pos.min(s.len());
    let mut last_boundary = 0;
    for (idx, _) in s.grapheme_indices(true) {
        if idx >= pos {
            break;
        }
        last_boundary = idx;
    }

    last_boundary
}

/// Byte offset just past the grapheme cluster at or containing `pos`.
#[inline]
pub fn next_grapheme_boundary(s: &str, pos: usize) -> usize {
    if pos >= s.len() {
        return s.len();
    }

    for (idx, grapheme) in s.grapheme_indices(true) {
        let end = idx + grapheme.len();
        if end > pos {
            return end;
        }
    }

    s.len()
}

/// Snap `pos` back to the nearest grapheme boundary at or before it.
pub fn floor_grapheme_boundary(s: &str, pos: usize) -> usize {
    if pos >= s.len() {
        return s.len();
    }
    let mut boundary = 0;
    for (idx, _) in s.grapheme_indices(true) {
        if idx > pos {
            break;
        }
        boundary = idx;
    }
    boundary
}
