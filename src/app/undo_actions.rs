//! Undo and redo action handlers.

use super::Editor;

impl Editor {
    /// Handle Undo action - restore the text from before the last edit.
    pub fn handle_undo(&mut self) {
        if self.session.undo() {
            self.last_match = None;
            tracing::debug!(
                "Undo: {} left, {} to redo",
                self.session.history().undo_len(),
                self.session.history().redo_len()
            );
        } else {
            self.set_status_message("Nothing to undo");
        }
    }

    /// Handle Redo action - reapply the last undone edit.
    pub fn handle_redo(&mut self) {
        if self.session.redo() {
            self.last_match = None;
            tracing::debug!(
                "Redo: {} to undo, {} left",
                self.session.history().undo_len(),
                self.session.history().redo_len()
            );
        } else {
            self.set_status_message("Nothing to redo");
        }
    }
}
