//! Input handling for the Prompt (minibuffer).

use super::prompt::Prompt;
use crate::input::handler::{DeferredAction, InputContext, InputHandler, InputResult};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

impl InputHandler for Prompt {
    fn handle_key_event(&mut self, event: &KeyEvent, ctx: &mut InputContext) -> InputResult {
        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
        let alt = event.modifiers.contains(KeyModifiers::ALT);

        match event.code {
            KeyCode::Enter => {
                ctx.defer(DeferredAction::ConfirmPrompt);
                InputResult::Consumed
            }
            KeyCode::Esc => {
                ctx.defer(DeferredAction::ClosePrompt);
                InputResult::Consumed
            }

            KeyCode::Char('u') if ctrl => {
                self.clear();
                InputResult::Consumed
            }
            KeyCode::Char('a') if ctrl => {
                self.move_to_start();
                InputResult::Consumed
            }
            KeyCode::Char('e') if ctrl => {
                self.move_to_end();
                InputResult::Consumed
            }
            KeyCode::Char(c) if !ctrl && !alt => {
                self.insert_char(c);
                InputResult::Consumed
            }

            KeyCode::Backspace => {
                self.backspace();
                InputResult::Consumed
            }
            KeyCode::Delete => {
                self.delete();
                InputResult::Consumed
            }
            KeyCode::Left => {
                self.cursor_left();
                InputResult::Consumed
            }
            KeyCode::Right => {
                self.cursor_right();
                InputResult::Consumed
            }
            KeyCode::Home => {
                self.move_to_start();
                InputResult::Consumed
            }
            KeyCode::End => {
                self.move_to_end();
                InputResult::Consumed
            }

            // Consume everything else so shortcuts don't fire underneath
            _ => InputResult::Consumed,
        }
    }

    fn is_modal(&self) -> bool {
        true
    }
}
