//! View and UI layer
//!
//! This module contains all presentation and rendering components.

pub mod confirm_input;
pub mod prompt;
pub mod prompt_input;
pub mod theme;
pub mod ui;
pub mod viewport;
