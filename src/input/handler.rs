//! Input handler trait and the deferred-action plumbing around it.
//!
//! Modal components (the prompt, the yes/no confirmations) implement
//! [`InputHandler`]. They edit their own state directly and push anything
//! that needs the whole editor into the [`InputContext`] as a
//! [`DeferredAction`], which the editor processes after the handler
//! returns.

use crossterm::event::KeyEvent;

/// Whether a handler used the key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Consumed,
    Ignored,
}

/// Work a handler asks the editor to do once it has returned
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeferredAction {
    /// Enter was pressed in the prompt
    ConfirmPrompt,
    /// The prompt was dismissed
    ClosePrompt,
    /// The user agreed to quit
    ConfirmQuit,
    /// The user agreed to replace an existing file
    ConfirmOverwrite,
}

#[derive(Debug, Default)]
pub struct InputContext {
    pub deferred_actions: Vec<DeferredAction>,
}

impl InputContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn defer(&mut self, action: DeferredAction) {
        self.deferred_actions.push(action);
    }

    /// Take the queued actions, leaving the context empty
    pub fn take_deferred(&mut self) -> Vec<DeferredAction> {
        std::mem::take(&mut self.deferred_actions)
    }
}

pub trait InputHandler {
    fn handle_key_event(&mut self, event: &KeyEvent, ctx: &mut InputContext) -> InputResult;

    /// Modal handlers swallow every key while active
    fn is_modal(&self) -> bool {
        false
    }
}
