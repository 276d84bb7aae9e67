//! Modal game-over notice

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use simon_app::config::ThemeSettings;

use super::modal_overlay;
use crate::theme::styles;

pub const DIALOG_WIDTH: u16 = 44;
pub const DIALOG_HEIGHT: u16 = 9;

pub const MESSAGE: &str = "Oops! Wrong color. Game Over!";

/// Where the dialog sits on a screen of size `area`
pub fn dialog_rect(area: Rect) -> Rect {
    modal_overlay::centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area)
}

/// Rendered over the whole screen: dims everything, then draws the dialog
pub struct GameOverDialog<'a> {
    theme: &'a ThemeSettings,
    score: u32,
}

impl<'a> GameOverDialog<'a> {
    pub fn new(theme: &'a ThemeSettings, score: u32) -> Self {
        Self { theme, score }
    }
}

impl Widget for GameOverDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal_overlay::dim_background(buf, area);

        let modal = dialog_rect(area);
        modal_overlay::render_shadow(buf, modal);
        modal_overlay::clear_area(buf, modal);

        let block = styles::modal_block(" Game Over ", self.theme).title_alignment(Alignment::Center);
        let inner = block.inner(modal);
        block.render(modal, buf);

        let [_, message, score, _, button] = Layout::vertical([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Message
            Constraint::Length(1), // Final score
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // OK
        ])
        .areas(inner);

        Paragraph::new(MESSAGE)
            .style(styles::text(self.theme))
            .alignment(Alignment::Center)
            .render(message, buf);

        Paragraph::new(format!("Final score: {}", self.score))
            .style(styles::accent_bold(self.theme))
            .alignment(Alignment::Center)
            .render(score, buf);

        let ok = Line::from(vec![
            Span::styled("[ OK ]", styles::button(self.theme)),
            Span::styled("  Enter / Esc / Space", styles::text_muted()),
        ]);
        Paragraph::new(ok)
            .alignment(Alignment::Center)
            .render(button, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_dialog_shows_message_and_score() {
        let theme = ThemeSettings::default();
        let mut term = TestTerminal::new();
        let area = term.area();

        term.render_widget(GameOverDialog::new(&theme, 4), area);

        assert!(term.buffer_contains("Game Over"));
        assert!(term.buffer_contains(MESSAGE));
        assert!(term.buffer_contains("Final score: 4"));
        assert!(term.buffer_contains("[ OK ]"));
    }

    #[test]
    fn test_dialog_is_centered() {
        let modal = dialog_rect(Rect::new(0, 0, 80, 24));
        assert_eq!(modal, Rect::new(18, 7, DIALOG_WIDTH, DIALOG_HEIGHT));
    }

    #[test]
    fn test_small_screen_still_renders() {
        let theme = ThemeSettings::default();
        let mut term = TestTerminal::with_size(30, 6);
        let area = term.area();

        term.render_widget(GameOverDialog::new(&theme, 0), area);

        assert!(term.buffer_contains("Game Over"));
    }
}
