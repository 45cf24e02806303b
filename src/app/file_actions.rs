//! File commands: open, save, save as, new file, show path and quit.

use super::Editor;
use crate::session::SessionError;
use crate::view::prompt::PromptType;
use anyhow::{Context, Result as AnyhowResult};
use std::path::Path;

impl Editor {
    /// Save to the current path, or ask for one when the buffer has none.
    pub(super) fn save(&mut self) -> AnyhowResult<()> {
        match self.session.save() {
            Ok(path) => {
                self.set_status_message(format!("Saved {}", path.display()));
                Ok(())
            }
            Err(SessionError::NoPath) => {
                self.start_save_as();
                Ok(())
            }
            Err(e) => Err(e).context("Save failed"),
        }
    }

    pub(super) fn start_save_as(&mut self) {
        let input = self
            .session
            .current_path()
            .map(|path| path.display().to_string())
            .unwrap_or_default();
        self.start_prompt_with_input(PromptType::SaveAs, input);
    }

    /// Save to the typed path. An existing file other than the current
    /// one is only replaced after a yes/no confirmation.
    pub(super) fn save_as(&mut self, input: &str) -> AnyhowResult<()> {
        let path = self.resolve_path(input);
        if path.exists() && self.session.current_path() != Some(path.as_path()) {
            tracing::debug!("{} exists, asking before overwrite", path.display());
            self.start_prompt(PromptType::ConfirmOverwrite { path });
            return Ok(());
        }
        self.write_to_path(&path)
    }

    pub(super) fn write_to_path(&mut self, path: &Path) -> AnyhowResult<()> {
        self.session.save_as(path).context("Save failed")?;
        self.set_status_message(format!("Saved {}", path.display()));
        Ok(())
    }

    pub(super) fn start_open(&mut self) {
        self.start_prompt(PromptType::OpenFile);
    }

    pub(super) fn open(&mut self, input: &str) -> AnyhowResult<()> {
        let path = self.resolve_path(input);
        self.session.open(&path).context("Open failed")?;
        self.last_match = None;
        self.set_status_message(format!("Opened {}", path.display()));
        Ok(())
    }

    /// Clear the buffer and path, then ask where the new file should live.
    pub(super) fn new_file(&mut self) {
        self.session.new_file();
        self.last_match = None;
        self.start_prompt(PromptType::NewFile);
    }

    pub(super) fn show_path(&mut self) {
        let message = match self.session.current_path() {
            Some(path) => path.display().to_string(),
            None => SessionError::NoPath.to_string(),
        };
        self.set_status_message(message);
    }

    /// Quit at once for a scratch buffer; ask first when there is a file
    /// or unsaved text.
    pub(super) fn quit(&mut self) {
        if self.session.current_path().is_some() || self.session.is_dirty() {
            self.start_prompt(PromptType::ConfirmQuit);
        } else {
            tracing::info!("Quit");
            self.should_quit = true;
        }
    }
}
