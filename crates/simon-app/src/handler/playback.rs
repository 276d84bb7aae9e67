//! Timed replay of the game sequence
//!
//! Playback is a chain of timers: each `PlaybackStep` highlights one element
//! and schedules the next one `playback_interval` later. After the last
//! element a `PlaybackFinished` fires once its highlight has faded, handing
//! the turn to the player. Stopping playback cancels whatever link of the
//! chain is pending.

use tracing::debug;

use crate::state::{AppState, Turn, UiMode};
use crate::timing::TimerAction;

/// Start replaying the whole sequence from the beginning
pub(crate) fn display_sequence(state: &mut AppState) {
    state.stop_playback();
    state.turn = Turn::Watching;

    let length = state.model.game_sequence().len();
    if length == 0 {
        state.turn = Turn::Repeating;
        return;
    }

    debug!("Playing back sequence of {}", length);
    let interval = state.settings.timing.playback_interval();
    state.schedule(interval, TimerAction::PlaybackStep { position: 0 });
}

pub(crate) fn handle_step(state: &mut AppState, position: usize) {
    if state.ui_mode != UiMode::InGame || !state.model.is_in_progress() {
        return;
    }
    let Some(&index) = state.model.game_sequence().get(position) else {
        return;
    };

    let timing = state.settings.timing.clone();
    state.flash_light(index, timing.highlight());

    let next = position + 1;
    if next < state.model.game_sequence().len() {
        state.schedule(
            timing.playback_interval(),
            TimerAction::PlaybackStep { position: next },
        );
    } else {
        state.schedule(timing.highlight(), TimerAction::PlaybackFinished);
    }
}

pub(crate) fn handle_finished(state: &mut AppState) {
    if state.ui_mode == UiMode::InGame && state.model.is_in_progress() {
        debug!("Playback finished, waiting for input");
        state.turn = Turn::Repeating;
    }
}
