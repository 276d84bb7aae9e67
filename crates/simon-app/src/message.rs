//! Message types for the application (TEA pattern)

use std::time::Instant;

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Clock tick; fires every timer due at `now`
    Tick { now: Instant },

    /// Force quit (Ctrl+C, signal handler, exit from the title screen)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Game Controls
    // ─────────────────────────────────────────────────────────
    /// The "Start Game" control
    StartGame,

    /// The "Quit Game" control: abandon the current game
    QuitGame,

    /// The player pressed (clicked or typed) the light at `index`
    LightPressed { index: usize },

    /// Close the game-over dialog
    AcknowledgeGameOver,
}
