//! simon-app - Game orchestration for Simon Says
//!
//! This crate implements the TEA (The Elm Architecture) pattern: a single
//! [`AppState`] model, a [`Message`] enum, and an `update` function that
//! dispatches messages, drives sequence playback through the shared timer
//! queue and adjudicates the player's presses. It also owns configuration
//! loading and OS signal handling.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod signals;
pub mod state;
pub mod timing;

// Re-export primary types
pub use handler::{update, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, Turn, UiMode};
pub use timing::TimerAction;
