//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use simon_core::ModelEvent;
use tracing::{debug, info, trace};

use crate::message::Message;
use crate::state::AppState;
use crate::timing::TimerAction;

use super::{game, keys::handle_key, playback, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    let result = dispatch(state, message);
    publish_model_events(state);
    result
}

fn dispatch(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            info!("Quit requested");
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick { now } => {
            handle_tick(state, now);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Game Controls
        // ─────────────────────────────────────────────────────────
        Message::StartGame => game::handle_start_game(state),
        Message::QuitGame => game::handle_quit_game(state),
        Message::LightPressed { index } => game::handle_light_pressed(state, index),
        Message::AcknowledgeGameOver => game::handle_acknowledge_game_over(state),
    }
}

/// Advance the clock and fire every due timer in deadline order.
///
/// While an action fires, the clock reads that action's deadline, so any
/// follow-up it schedules keeps the configured cadence even when ticks are
/// late. Follow-ups that are already due fire in the same tick.
fn handle_tick(state: &mut AppState, now: Instant) {
    while let Some((due, action)) = state.timers.pop_next_due(now) {
        state.now = state.now.max(due);
        fire(state, action);
    }
    // The clock never moves backwards
    state.now = state.now.max(now);
}

fn fire(state: &mut AppState, action: TimerAction) {
    trace!("Timer fired: {:?}", action);
    match action {
        TimerAction::PlaybackStep { position } => playback::handle_step(state, position),
        TimerAction::PlaybackFinished => playback::handle_finished(state),
        TimerAction::LightOff { index } => state.finish_flash(index),
    }
}

/// Drain model notifications and log them; the view pulls state itself
fn publish_model_events(state: &mut AppState) {
    for event in state.model.drain_events() {
        match event {
            ModelEvent::PhaseChanged { from, to } => info!("Game phase: {} -> {}", from, to),
            ModelEvent::ScoreChanged { score } => info!("Score: {}", score),
            ModelEvent::Mismatch {
                position,
                expected,
                actual,
            } => info!(
                "Wrong light at position {}: expected {}, got {}",
                position, expected, actual
            ),
            ref e if e.is_light_change() => trace!("{:?}", e),
            other => debug!("{:?}", other),
        }
    }
}
