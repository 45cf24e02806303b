//! Plain substring search and first-occurrence replacement.
//!
//! Offsets and columns are byte-based. A column counts the bytes between
//! the start of the match's line and the match itself.

/// Location of a match inside a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchMatch {
    /// Byte offset of the first byte of the match
    pub offset: usize,
    /// Zero-based line number (newlines before `offset`)
    pub line: usize,
    /// Zero-based byte column within the line
    pub column: usize,
    /// Length of the match in bytes
    pub len: usize,
}

impl SearchMatch {
    fn at(buffer: &str, offset: usize, len: usize) -> Self {
        let (line, column) = line_col_at(buffer, offset);
        Self {
            offset,
            line,
            column,
            len,
        }
    }

    /// Byte offset one past the end of the match
    pub fn end(&self) -> usize {
        self.offset + self.len
    }
}

/// Zero-based line and byte column of `offset` in `buffer`.
///
/// `offset` is clamped to the buffer length.
pub fn line_col_at(buffer: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(buffer.len());
    let before = &buffer.as_bytes()[..offset];
    let line = before.iter().filter(|&&b| b == b'\n').count();
    let line_start = before
        .iter()
        .rposition(|&b| b == b'\n')
        .map(|pos| pos + 1)
        .unwrap_or(0);
    (line, offset - line_start)
}

/// Find the first occurrence of `needle` in `buffer`.
///
/// An empty needle never matches.
pub fn find(buffer: &str, needle: &str) -> Option<SearchMatch> {
    find_from(buffer, needle, 0)
}

/// Find the first occurrence of `needle` at or after byte offset `start`.
///
/// `start` values that are past the end or not on a char boundary yield
/// `None` rather than panicking.
pub fn find_from(buffer: &str, needle: &str, start: usize) -> Option<SearchMatch> {
    if needle.is_empty() {
        return None;
    }
    let haystack = buffer.get(start..)?;
    haystack
        .find(needle)
        .map(|relative| SearchMatch::at(buffer, start + relative, needle.len()))
}

/// Find the next match after `start`, wrapping to the beginning of the
/// buffer when nothing follows.
pub fn find_next_wrapping(buffer: &str, needle: &str, start: usize) -> Option<SearchMatch> {
    find_from(buffer, needle, start).or_else(|| find(buffer, needle))
}

/// Replace the first occurrence of `needle` with `replacement`.
///
/// Returns the rewritten text and the location of the replaced match, or
/// `None` when `needle` does not occur. Later occurrences are untouched.
pub fn replace_first(
    buffer: &str,
    needle: &str,
    replacement: &str,
) -> Option<(String, SearchMatch)> {
    let found = find(buffer, needle)?;
    let mut result = String::with_capacity(buffer.len() - needle.len() + replacement.len());
    result.push_str(&buffer[..found.offset]);
    result.push_str(replacement);
    result.push_str(&buffer[found.end()..]);
    Some((result, found))
}
