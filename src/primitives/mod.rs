//! Low-level text helpers shared by the buffer and the view

pub mod display_width;
pub mod grapheme;
