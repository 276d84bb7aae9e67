//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for each UI mode
//! - `game`: Game lifecycle and press adjudication
//! - `playback`: Timed replay of the sequence

pub(crate) mod game;
pub(crate) mod keys;
pub(crate) mod playback;
pub(crate) mod update;


use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Result of processing a message
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self { message: Some(msg) }
    }
}
