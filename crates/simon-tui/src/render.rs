//! Main render/view function (View in TEA pattern)

use ratatui::widgets::Block;
use ratatui::Frame;
use simon_app::{AppState, UiMode};

use crate::theme::styles;
use crate::{layout, widgets};

/// Render the complete UI from state.
///
/// Pure: lights, buttons, status and score are all read from `state`, so
/// highlighting a light or ending a game needs no call into the view.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let theme = &state.theme;

    frame.render_widget(Block::default().style(styles::background(theme)), area);

    let areas = layout::create(area);

    let header = widgets::MainHeader::new(theme, state.model.score(), state.best_score);
    frame.render_widget(header, areas.header);

    frame.render_widget(widgets::LightGrid::new(state.model.lights()), areas.board);

    let status = state.status_line();
    frame.render_widget(
        widgets::Controls::new(theme, state.ui_mode, &status),
        areas.controls,
    );

    if state.ui_mode == UiMode::GameOverDialog {
        let score = state
            .last_game
            .map(|game| game.score)
            .unwrap_or_else(|| state.model.score());
        frame.render_widget(widgets::GameOverDialog::new(theme, score), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_state, TestTerminal};
    use simon_app::{update, Message};

    fn draw(state: &AppState) -> TestTerminal {
        let mut term = TestTerminal::new();
        term.draw_with(|frame| view(frame, state));
        term
    }

    #[test]
    fn test_title_screen() {
        let state = test_state([0]);
        let term = draw(&state);

        assert!(term.buffer_contains("Simon Says"));
        assert!(term.buffer_contains("Score: 0"));
        assert!(term.buffer_contains("[ Start Game ]"));
        assert!(term.buffer_contains("Press 'Start Game' to play!"));
        assert!(term.buffer_contains("Red  [1/r]"));
        assert!(term.buffer_contains("Blue  [4/b]"));
    }

    #[test]
    fn test_in_game_screen() {
        let mut state = test_state([1]);
        update(&mut state, Message::StartGame);
        let term = draw(&state);

        assert!(term.buffer_contains("[ Quit Game ]"));
        assert!(term.buffer_contains("Watch the sequence..."));
        assert!(!term.buffer_contains("Game Over"));
    }

    #[test]
    fn test_lit_light_renders_bright() {
        let mut state = test_state([1]);
        state.model.set_light(1, true);
        let term = draw(&state);

        let board = layout::create(term.area()).board;
        let cell = layout::light_cells(board, 4)[1];
        let bright = crate::theme::palette::rgb(simon_core::LightColor::Yellow.rgb());
        assert_eq!(term.buffer()[(cell.x + 1, cell.y + 1)].bg, bright);
    }

    #[test]
    fn test_game_over_dialog_overlays_board() {
        let mut state = test_state([1]);
        update(&mut state, Message::StartGame);
        let playback = state.settings.timing.playback_interval() + state.settings.timing.highlight();
        let now = state.now + playback;
        update(&mut state, Message::Tick { now });
        update(&mut state, Message::LightPressed { index: 0 });
        assert_eq!(state.ui_mode, UiMode::GameOverDialog);

        let term = draw(&state);

        assert!(term.buffer_contains("Oops! Wrong color. Game Over!"));
        assert!(term.buffer_contains("Final score: 0"));
    }
}
