//! Terminal event polling
//!
//! Keys become `Message::Key` and are mapped per screen by the app layer.
//! Mouse clicks are hit-tested here, against the same layout the view
//! draws with.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use simon_app::{AppState, InputKey, Message, UiMode};
use simon_core::prelude::*;

use crate::{layout, widgets};

/// How long to wait for input before the loop redraws
const POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        _ => None,
    }
}

/// Message for a left click at (`column`, `row`) on a screen of size `area`
pub fn click_to_message(state: &AppState, area: Rect, column: u16, row: u16) -> Option<Message> {
    let position = Position::new(column, row);

    if state.ui_mode == UiMode::GameOverDialog {
        return widgets::dialog_rect(area)
            .contains(position)
            .then_some(Message::AcknowledgeGameOver);
    }

    let areas = layout::create(area);
    if layout::controls(areas.controls).button.contains(position) {
        return Some(match state.ui_mode {
            UiMode::InGame => Message::QuitGame,
            _ => Message::StartGame,
        });
    }

    layout::light_at(areas.board, state.model.light_count(), column, row)
        .map(|index| Message::LightPressed { index })
}

fn mouse_to_message(state: &AppState, area: Rect, mouse: MouseEvent) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let message = click_to_message(state, area, mouse.column, mouse.row);
            trace!("Click at ({}, {}) -> {:?}", mouse.column, mouse.row, message);
            message
        }
        _ => None,
    }
}

/// Wait briefly for one terminal event and translate it
pub fn poll(state: &AppState, area: Rect) -> Result<Option<Message>> {
    if !event::poll(POLL_TIMEOUT)? {
        return Ok(None);
    }

    let message = match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            key_event_to_input(key).map(Message::Key)
        }
        Event::Mouse(mouse) => mouse_to_message(state, area, mouse),
        _ => None,
    };
    Ok(message)
}
