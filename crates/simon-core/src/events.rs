//! Change notifications emitted by the game model
//!
//! The model records a [`ModelEvent`] for every observable change. Callers
//! drain them after each operation with
//! [`SimonModel::drain_events`](crate::model::SimonModel::drain_events)
//! instead of binding to observable properties.

use crate::model::GamePhase;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelEvent {
    /// A light switched on or off
    LightChanged { index: usize, is_on: bool },

    /// A new element was appended to the game sequence
    SequenceExtended { index: usize, length: usize },

    /// A press matched the expected element at `position`
    InputAccepted { position: usize },

    /// A press diverged from the sequence
    Mismatch {
        position: usize,
        expected: usize,
        actual: usize,
    },

    ScoreChanged { score: u32 },

    PhaseChanged { from: GamePhase, to: GamePhase },
}

impl ModelEvent {
    /// True for light transitions, which are frequent and uninteresting to log at info
    pub fn is_light_change(&self) -> bool {
        matches!(self, ModelEvent::LightChanged { .. })
    }
}
