//! Core data model: the text buffer, its history and text search

pub mod buffer;
pub mod history;
pub mod search;
