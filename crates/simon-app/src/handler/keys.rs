//! Key event handlers for different UI modes

use simon_core::LightColor;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit with Ctrl+C from anywhere, even the dialog
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.ui_mode {
        UiMode::Title => handle_key_title(key),
        UiMode::InGame => handle_key_in_game(state, key),
        UiMode::GameOverDialog => handle_key_game_over_dialog(key),
    }
}

fn handle_key_title(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char('s' | 'S') => Some(Message::StartGame),
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_in_game(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::QuitGame),
        InputKey::Char(c) => LightColor::index_for_key(c)
            .filter(|index| *index < state.model.light_count())
            .map(|index| Message::LightPressed { index }),
        _ => None,
    }
}

/// The dialog is modal: only dismissal gets through
fn handle_key_game_over_dialog(key: InputKey) -> Option<Message> {
    if key.is_dismiss() {
        Some(Message::AcknowledgeGameOver)
    } else {
        None
    }
}
