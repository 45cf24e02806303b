//! Prompt lifecycle and the search commands built on it.

use super::Editor;
use crate::model::search;
use crate::view::prompt::{Prompt, PromptType};
use anyhow::Result as AnyhowResult;

impl Editor {
    pub(super) fn start_prompt(&mut self, prompt_type: PromptType) {
        self.start_prompt_with_input(prompt_type, String::new());
    }

    pub(super) fn start_prompt_with_input(&mut self, prompt_type: PromptType, input: String) {
        tracing::debug!("Prompt opened: {:?}", prompt_type);
        self.prompt = Some(Prompt::with_input(prompt_type, input));
    }

    /// Close the prompt without acting on it
    pub fn cancel_prompt(&mut self) {
        if let Some(prompt) = self.prompt.take() {
            tracing::debug!("Prompt cancelled: {:?}", prompt.prompt_type);
            match prompt.prompt_type {
                PromptType::NewFile => self.set_status_message("New file (untitled)"),
                PromptType::ConfirmOverwrite { path } => {
                    self.set_status_message(format!("Not saved, {} left as is", path.display()))
                }
                _ => {}
            }
        }
    }

    /// Act on the prompt's input. The prompt is closed first; follow-up
    /// prompts (replace) open a new one.
    pub fn confirm_prompt(&mut self) -> AnyhowResult<()> {
        let Some(prompt) = self.prompt.take() else {
            return Ok(());
        };
        let input = prompt.input;

        match prompt.prompt_type {
            PromptType::Find => self.find(&input),
            PromptType::ReplaceSearch => {
                if search::find(self.session.text(), &input).is_some() {
                    self.start_prompt(PromptType::ReplaceWith { search: input });
                } else {
                    self.set_status_message(format!("Could not find '{input}'"));
                }
            }
            PromptType::ReplaceWith { search: needle } => self.replace(&needle, &input),
            PromptType::OpenFile => {
                if !input.trim().is_empty() {
                    self.open(&input)?;
                }
            }
            PromptType::SaveAs => {
                if !input.trim().is_empty() {
                    self.save_as(&input)?;
                }
            }
            PromptType::NewFile => {
                if input.trim().is_empty() {
                    self.set_status_message("New file (untitled)");
                } else {
                    self.save_as(&input)?;
                }
            }
            PromptType::ConfirmQuit | PromptType::ConfirmOverwrite { .. } => {}
        }
        Ok(())
    }

    pub(super) fn start_find(&mut self) {
        let input = self.last_search.clone().unwrap_or_default();
        self.start_prompt_with_input(PromptType::Find, input);
    }

    pub(super) fn start_replace(&mut self) {
        self.start_prompt(PromptType::ReplaceSearch);
    }

    fn find(&mut self, needle: &str) {
        self.last_search = Some(needle.to_string());
        let found = self.session.find(needle);
        self.report_search(needle, found);
    }

    pub(super) fn find_next(&mut self) {
        let Some(needle) = self.last_search.clone() else {
            self.start_find();
            return;
        };
        let found = self.session.find_next(&needle);
        self.report_search(&needle, found);
    }

    fn report_search(&mut self, needle: &str, found: Option<search::SearchMatch>) {
        self.last_match = found;
        match found {
            Some(found) => self.set_status_message(format!(
                "Found '{}' at {} (row: {}, col: {})",
                needle, found.offset, found.line, found.column
            )),
            None => self.set_status_message(format!("Could not find '{needle}'")),
        }
    }

    fn replace(&mut self, needle: &str, replacement: &str) {
        self.last_match = None;
        match self.session.replace_first(needle, replacement) {
            Some(found) => self.set_status_message(format!(
                "Replaced '{}' with '{}' at {}",
                needle, replacement, found.offset
            )),
            None => self.set_status_message(format!("Could not find '{needle}'")),
        }
    }
}
