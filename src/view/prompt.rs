//! Prompt (minibuffer) state
//!
//! The prompt stands in for modal dialogs: it collects a line of text for
//! find, replace, open and save, and a yes/no answer before quitting or
//! overwriting a file.

use crate::primitives::grapheme::{next_grapheme_boundary, prev_grapheme_boundary};
use std::path::PathBuf;

/// What the prompt is collecting input for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptType {
    Find,
    /// First step of replace: the text to look for
    ReplaceSearch,
    /// Second step of replace: the replacement for `search`
    ReplaceWith { search: String },
    OpenFile,
    SaveAs,
    /// Path for a freshly created buffer
    NewFile,
    ConfirmQuit,
    /// Save target already exists on disk
    ConfirmOverwrite { path: PathBuf },
}

impl PromptType {
    /// Label shown before the input
    pub fn message(&self) -> String {
        match self {
            PromptType::Find => "Find: ".to_string(),
            PromptType::ReplaceSearch => "Replace: ".to_string(),
            PromptType::ReplaceWith { search } => format!("Replace '{search}' with: "),
            PromptType::OpenFile => "Open: ".to_string(),
            PromptType::SaveAs => "Save as: ".to_string(),
            PromptType::NewFile => "New file path: ".to_string(),
            PromptType::ConfirmQuit => "Are you sure want to quit? (y/n) ".to_string(),
            PromptType::ConfirmOverwrite { path } => {
                format!("{} already exists. Overwrite? (y/n) ", path.display())
            }
        }
    }

    /// Yes/no questions rather than text input
    pub fn is_confirmation(&self) -> bool {
        matches!(
            self,
            PromptType::ConfirmQuit | PromptType::ConfirmOverwrite { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub message: String,
    pub input: String,
    /// Cursor position within `input`, in bytes
    pub cursor_pos: usize,
    pub prompt_type: PromptType,
}

impl Prompt {
    pub fn new(prompt_type: PromptType) -> Self {
        Self {
            message: prompt_type.message(),
            input: String::new(),
            cursor_pos: 0,
            prompt_type,
        }
    }

    /// Create a prompt pre-filled with `input`, cursor at the end
    pub fn with_input(prompt_type: PromptType, input: impl Into<String>) -> Self {
        let input = input.into();
        Self {
            message: prompt_type.message(),
            cursor_pos: input.len(),
            input,
            prompt_type,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor_pos == 0 {
            return;
        }
        let start = prev_grapheme_boundary(&self.input, self.cursor_pos);
        self.input.replace_range(start..self.cursor_pos, "");
        self.cursor_pos = start;
    }

    pub fn delete(&mut self) {
        if self.cursor_pos >= self.input.len() {
            return;
        }
        let end = next_grapheme_boundary(&self.input, self.cursor_pos);
        self.input.replace_range(self.cursor_pos..end, "");
    }

    pub fn cursor_left(&mut self) {
        self.cursor_pos = prev_grapheme_boundary(&self.input, self.cursor_pos);
    }

    pub fn cursor_right(&mut self) {
        self.cursor_pos = next_grapheme_boundary(&self.input, self.cursor_pos);
    }

    pub fn move_to_start(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_to_end(&mut self) {
        self.cursor_pos = self.input.len();
    }

    /// Clear the input (Ctrl+U)
    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor_pos = 0;
    }
}
