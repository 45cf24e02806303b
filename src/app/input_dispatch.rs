//! Input dispatch for modal components.
//!
//! Bridges the Editor and the InputHandler trait: routes keys to the open
//! prompt and processes the deferred actions it produces.

use super::Editor;
use crate::input::handler::{DeferredAction, InputContext, InputHandler, InputResult};
use crate::view::confirm_input::ConfirmInputHandler;
use crate::view::prompt::PromptType;
use anyhow::Result as AnyhowResult;
use crossterm::event::KeyEvent;

impl Editor {
    /// Dispatch input to the open prompt.
    ///
    /// Returns `Some(InputResult)` if a modal handled the input,
    /// `None` if no modal is active and input should be handled normally.
    pub fn dispatch_modal_input(&mut self, event: &KeyEvent) -> Option<InputResult> {
        let mut ctx = InputContext::new();

        let on_yes = self.prompt.as_ref().and_then(|p| match p.prompt_type {
            PromptType::ConfirmQuit => Some(DeferredAction::ConfirmQuit),
            PromptType::ConfirmOverwrite { .. } => Some(DeferredAction::ConfirmOverwrite),
            _ => None,
        });
        if let Some(on_yes) = on_yes {
            let mut handler = ConfirmInputHandler::new(on_yes);
            let result = handler.handle_key_event(event, &mut ctx);
            self.process_deferred_actions(ctx);
            return Some(result);
        }

        if let Some(ref mut prompt) = self.prompt {
            let result = prompt.handle_key_event(event, &mut ctx);
            self.process_deferred_actions(ctx);
            return Some(result);
        }

        None
    }

    /// Process deferred actions collected during input handling.
    pub fn process_deferred_actions(&mut self, mut ctx: InputContext) {
        for action in ctx.take_deferred() {
            if let Err(e) = self.execute_deferred_action(action) {
                tracing::warn!("Deferred action failed: {:#}", e);
                self.set_status_message(format!("Error: {e:#}"));
            }
        }
    }

    fn execute_deferred_action(&mut self, action: DeferredAction) -> AnyhowResult<()> {
        match action {
            DeferredAction::ClosePrompt => self.cancel_prompt(),
            DeferredAction::ConfirmPrompt => self.confirm_prompt()?,
            DeferredAction::ConfirmQuit => {
                self.prompt = None;
                self.should_quit = true;
                tracing::info!("Quit confirmed");
            }
            DeferredAction::ConfirmOverwrite => {
                if let Some(prompt) = self.prompt.take() {
                    if let PromptType::ConfirmOverwrite { path } = prompt.prompt_type {
                        self.write_to_path(&path)?;
                    }
                }
            }
        }
        Ok(())
    }
}
