//! Input handler for yes/no confirmations (quit, overwrite).

use crate::input::handler::{DeferredAction, InputContext, InputHandler, InputResult};
use crossterm::event::{KeyCode, KeyEvent};

/// Modal handler for a yes/no question:
/// - `y` defers the action being confirmed
/// - `n` or Escape dismisses
/// - every other key is consumed
pub struct ConfirmInputHandler {
    on_yes: DeferredAction,
}

impl ConfirmInputHandler {
    pub fn new(on_yes: DeferredAction) -> Self {
        Self { on_yes }
    }
}

impl InputHandler for ConfirmInputHandler {
    fn handle_key_event(&mut self, event: &KeyEvent, ctx: &mut InputContext) -> InputResult {
        match event.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                ctx.defer(self.on_yes.clone());
                InputResult::Consumed
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                ctx.defer(DeferredAction::ClosePrompt);
                InputResult::Consumed
            }
            _ => InputResult::Consumed,
        }
    }

    fn is_modal(&self) -> bool {
        true
    }
}
