//! simon-tui - Terminal UI for Simon Says
//!
//! This crate provides the ratatui-based front end. It owns the terminal,
//! turns key presses and mouse clicks into [`simon_app::Message`]s, feeds
//! them through `simon_app::update`, and renders the resulting state.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
