pub mod editing;
pub mod prompt;
pub mod search;
pub mod undo_redo;
