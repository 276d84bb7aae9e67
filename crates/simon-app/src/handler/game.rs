//! Game lifecycle and press adjudication

use simon_core::InputOutcome;
use tracing::{debug, info};

use crate::state::{AppState, GameSummary, Turn, UiMode};

use super::{playback, UpdateResult};

pub(crate) fn handle_start_game(state: &mut AppState) -> UpdateResult {
    if state.ui_mode == UiMode::GameOverDialog {
        return UpdateResult::none();
    }

    state.stop_playback();
    state.interrupt_all_flashes();
    state.model.start_new_game();
    state.last_game = None;
    state.ui_mode = UiMode::InGame;
    info!("New game started");

    playback::display_sequence(state);
    UpdateResult::none()
}

/// Abandon the current game and restore the pre-game screen
pub(crate) fn handle_quit_game(state: &mut AppState) -> UpdateResult {
    if state.ui_mode != UiMode::InGame {
        return UpdateResult::none();
    }

    state.stop_playback();
    state.interrupt_all_flashes();
    state.record_best();
    state.model.reset();
    state.turn = Turn::default();
    state.ui_mode = UiMode::Title;
    info!("Game abandoned with score {}", state.model.score());
    UpdateResult::none()
}

pub(crate) fn handle_light_pressed(state: &mut AppState, index: usize) -> UpdateResult {
    if state.ui_mode != UiMode::InGame {
        return UpdateResult::none();
    }
    if state.turn == Turn::Watching {
        debug!("Ignoring press on light {} during playback", index);
        return UpdateResult::none();
    }

    let click_flash = state.settings.timing.click_flash();
    match state.model.add_user_input(index) {
        InputOutcome::Ignored => {}
        InputOutcome::Accepted { .. } => state.flash_light(index, click_flash),
        InputOutcome::RoundComplete { score } => {
            state.flash_light(index, click_flash);
            state.record_best();
            debug!("Round {} complete, replaying", score);
            playback::display_sequence(state);
        }
        InputOutcome::Mismatch {
            expected, actual, ..
        } => handle_game_over(state, expected, actual),
    }
    UpdateResult::none()
}

fn handle_game_over(state: &mut AppState, expected: usize, actual: usize) {
    state.stop_playback();
    state.interrupt_all_flashes();
    state.record_best();
    state.last_game = Some(GameSummary {
        score: state.model.score(),
        expected,
        actual,
    });
    state.ui_mode = UiMode::GameOverDialog;
}

pub(crate) fn handle_acknowledge_game_over(state: &mut AppState) -> UpdateResult {
    if state.ui_mode != UiMode::GameOverDialog {
        return UpdateResult::none();
    }

    state.model.reset();
    state.turn = Turn::default();
    state.ui_mode = UiMode::Title;
    UpdateResult::none()
}
