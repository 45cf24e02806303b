// Editor library - exposes all core modules for the binary and tests

pub mod action;
pub mod app;
pub mod config;
pub mod input;
pub mod keybindings;
pub mod model;
pub mod primitives;
pub mod services;
pub mod session;
pub mod view;
