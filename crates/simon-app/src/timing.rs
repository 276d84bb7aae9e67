//! Actions scheduled on the shared timer queue

/// Delayed work the game schedules on [`AppState::timers`](crate::state::AppState)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Highlight the sequence element at `position`
    PlaybackStep { position: usize },

    /// The last playback highlight has faded; the player's turn begins
    PlaybackFinished,

    /// End of a flash: switch the light at `index` off
    LightOff { index: usize },
}

impl TimerAction {
    pub fn is_playback(&self) -> bool {
        matches!(
            self,
            TimerAction::PlaybackStep { .. } | TimerAction::PlaybackFinished
        )
    }
}
