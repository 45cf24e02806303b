//! Renderers for the parts of the screen

pub mod status_bar;
pub mod text_area;

pub use status_bar::StatusBarRenderer;
pub use text_area::TextAreaRenderer;
