//! Input handling: the handler trait shared by modal components

pub mod handler;
