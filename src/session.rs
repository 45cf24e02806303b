//! Editor session: the buffer plus everything that travels with it
//!
//! A session owns the text buffer, its undo/redo history, the path the
//! buffer is associated with and the dirty flag. All editing goes through
//! [`EditorSession::edit`] so that history is recorded in one place.

use crate::config::EditorConfig;
use crate::model::buffer::TextBuffer;
use crate::model::history::{new_history, History, HistoryMode};
use crate::model::search::{self, SearchMatch};
use crate::primitives::grapheme::next_grapheme_boundary;
use std::path::{Path, PathBuf};

/// Suffix appended to the file name in the title
pub const TITLE_SUFFIX: &str = " - Text Editor";

/// Name shown for a buffer that has no path yet
pub const UNTITLED: &str = "untitled";

#[derive(Debug)]
pub enum SessionError {
    /// Save was requested but the buffer has no path
    NoPath,
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::NoPath => write!(f, "No path found"),
            SessionError::Io { path, source } => write!(f, "{}: {source}", path.display()),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::NoPath => None,
            SessionError::Io { source, .. } => Some(source),
        }
    }
}

#[derive(Debug)]
pub struct EditorSession {
    buffer: TextBuffer,
    history: Box<dyn History>,
    current_path: Option<PathBuf>,
    /// Text as of the last open, save or new file
    clean_text: String,
}

impl EditorSession {
    pub fn new(mode: HistoryMode, depth: usize) -> Self {
        Self {
            buffer: TextBuffer::new(),
            history: new_history(mode, depth),
            current_path: None,
            clean_text: String::new(),
        }
    }

    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new(config.history_mode, config.history_depth)
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Cursor movement only. Text changes must go through [`Self::edit`].
    pub fn cursor_mut(&mut self) -> CursorHandle<'_> {
        CursorHandle {
            buffer: &mut self.buffer,
        }
    }

    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    pub fn history(&self) -> &dyn History {
        self.history.as_ref()
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    pub fn set_current_path(&mut self, path: Option<PathBuf>) {
        self.current_path = path;
    }

    /// Whether the text differs from what was last opened or saved
    pub fn is_dirty(&self) -> bool {
        self.buffer.text() != self.clean_text
    }

    /// File name of the current path, or "untitled"
    pub fn display_name(&self) -> String {
        self.current_path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| UNTITLED.to_string())
    }

    pub fn title(&self) -> String {
        format!("{}{}", self.display_name(), TITLE_SUFFIX)
    }

    /// Apply `f` to the buffer, recording history if the text changed.
    ///
    /// A new edit discards the redo stack, so redo never resurrects text
    /// from before the edit. Returns whether the text changed.
    pub fn edit<F>(&mut self, f: F) -> bool
    where
        F: FnOnce(&mut TextBuffer),
    {
        let before = self.buffer.text().to_string();
        f(&mut self.buffer);
        if self.buffer.text() == before {
            return false;
        }
        self.history.record_edit(&before, self.buffer.text());
        self.history.clear_redo();
        true
    }

    /// Undo the most recent edit. Returns whether the buffer changed.
    pub fn undo(&mut self) -> bool {
        let at_end = self.buffer.cursor() == self.buffer.len();
        let changed = self.history.undo(self.buffer.text_mut());
        self.after_history_step(at_end);
        changed
    }

    /// Redo the most recently undone edit. Returns whether the buffer changed.
    pub fn redo(&mut self) -> bool {
        let at_end = self.buffer.cursor() == self.buffer.len();
        let changed = self.history.redo(self.buffer.text_mut());
        self.after_history_step(at_end);
        changed
    }

    fn after_history_step(&mut self, cursor_was_at_end: bool) {
        if cursor_was_at_end {
            self.buffer.move_document_end();
        } else {
            self.buffer.clamp_cursor();
        }
    }

    /// Find the first occurrence of `needle` and move the cursor to it.
    /// The text is never modified.
    pub fn find(&mut self, needle: &str) -> Option<SearchMatch> {
        let found = search::find(self.buffer.text(), needle)?;
        self.buffer.set_cursor(found.offset);
        tracing::debug!("Found {:?} at {:?}", needle, found);
        Some(found)
    }

    /// Find the next occurrence after the cursor, wrapping to the start.
    pub fn find_next(&mut self, needle: &str) -> Option<SearchMatch> {
        let start = next_grapheme_boundary(self.buffer.text(), self.buffer.cursor());
        let found = search::find_next_wrapping(self.buffer.text(), needle, start)?;
        self.buffer.set_cursor(found.offset);
        Some(found)
    }

    /// Replace the first occurrence of `needle` with `replacement`.
    ///
    /// The cursor lands just after the inserted text. Returns the location
    /// of the replaced match, or `None` when `needle` does not occur.
    pub fn replace_first(&mut self, needle: &str, replacement: &str) -> Option<SearchMatch> {
        let (text, found) = search::replace_first(self.buffer.text(), needle, replacement)?;
        self.edit(|buffer| {
            buffer.set_text(text);
            buffer.set_cursor(found.offset + replacement.len());
        });
        tracing::debug!("Replaced {:?} with {:?} at {}", needle, replacement, found.offset);
        Some(found)
    }

    /// Start an empty, untitled buffer.
    ///
    /// The previous text stays reachable through undo; the redo stack is
    /// cleared.
    pub fn new_file(&mut self) {
        self.edit(|buffer| buffer.set_text(String::new()));
        self.history.clear_redo();
        self.current_path = None;
        self.clean_text.clear();
        tracing::info!("New file");
    }

    /// Load `path` into the buffer and adopt it as the current path.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD.
    pub fn open(&mut self, path: &Path) -> Result<(), SessionError> {
        let bytes = std::fs::read(path).map_err(|source| SessionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("{} is not valid UTF-8, decoding lossily", path.display());
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };
        self.edit(|buffer| buffer.set_text(text));
        self.buffer.move_document_start();
        self.current_path = Some(path.to_path_buf());
        self.clean_text = self.buffer.text().to_string();
        tracing::info!("Opened {} ({} bytes)", path.display(), self.buffer.len());
        Ok(())
    }

    /// Write the buffer to the current path. Returns the path written.
    pub fn save(&mut self) -> Result<PathBuf, SessionError> {
        let path = self.current_path.clone().ok_or(SessionError::NoPath)?;
        self.write_to(&path)?;
        Ok(path)
    }

    /// Write the buffer to `path` and make it the current path.
    pub fn save_as(&mut self, path: &Path) -> Result<(), SessionError> {
        self.write_to(path)?;
        self.current_path = Some(path.to_path_buf());
        Ok(())
    }

    fn write_to(&mut self, path: &Path) -> Result<(), SessionError> {
        std::fs::write(path, self.buffer.text().as_bytes()).map_err(|source| {
            SessionError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;
        self.clean_text = self.buffer.text().to_string();
        tracing::info!("Saved {} ({} bytes)", path.display(), self.buffer.len());
        Ok(())
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::from_config(&EditorConfig::default())
    }
}

/// Borrow of the buffer that can move the cursor but not change the text
pub struct CursorHandle<'a> {
    buffer: &'a mut TextBuffer,
}

impl CursorHandle<'_> {
    pub fn move_left(&mut self) {
        self.buffer.move_left();
    }

    pub fn move_right(&mut self) {
        self.buffer.move_right();
    }

    pub fn move_up(&mut self) {
        self.buffer.move_up();
    }

    pub fn move_down(&mut self) {
        self.buffer.move_down();
    }

    pub fn move_line_start(&mut self) {
        self.buffer.move_line_start();
    }

    pub fn move_line_end(&mut self) {
        self.buffer.move_line_end();
    }

    pub fn move_document_start(&mut self) {
        self.buffer.move_document_start();
    }

    pub fn move_document_end(&mut self) {
        self.buffer.move_document_end();
    }

    pub fn set_cursor(&mut self, offset: usize) {
        self.buffer.set_cursor(offset);
    }
}
