//! Bottom bar: the Start/Quit button, the status label and key hints

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use simon_app::config::ThemeSettings;
use simon_app::UiMode;

use crate::layout;
use crate::theme::styles;

pub struct Controls<'a> {
    theme: &'a ThemeSettings,
    mode: UiMode,
    status: &'a str,
}

impl<'a> Controls<'a> {
    pub fn new(theme: &'a ThemeSettings, mode: UiMode, status: &'a str) -> Self {
        Self {
            theme,
            mode,
            status,
        }
    }

    /// Button caption for the current screen
    pub fn button_label(mode: UiMode) -> &'static str {
        match mode {
            UiMode::InGame => "Quit Game",
            UiMode::Title | UiMode::GameOverDialog => "Start Game",
        }
    }

    fn key_hints(&self) -> Vec<Span<'static>> {
        let hints: &[(&str, &str)] = match self.mode {
            UiMode::Title => &[("Enter", "start"), ("q", "exit")],
            UiMode::InGame => &[("1-4", "press"), ("q", "quit game")],
            UiMode::GameOverDialog => &[("Enter", "continue")],
        };

        let mut spans = Vec::new();
        for (key, action) in hints {
            spans.push(Span::styled(format!("[{}]", key), styles::accent(self.theme)));
            spans.push(Span::styled(format!(" {}  ", action), styles::text_muted()));
        }
        spans
    }
}

impl Widget for Controls<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.theme);
        block.render(area, buf);

        let areas = layout::controls(area);
        if areas.button.height == 0 {
            return;
        }

        Paragraph::new(format!("[ {} ]", Self::button_label(self.mode)))
            .style(styles::button(self.theme))
            .alignment(Alignment::Center)
            .render(areas.button, buf);

        let status = Line::from(Span::styled(self.status, styles::text(self.theme)));
        buf.set_line(areas.status.x, areas.status.y, &status, areas.status.width);

        let hints = Line::from(self.key_hints());
        let hints_width = hints.width() as u16;
        let status_width = status.width() as u16;
        if status_width + 2 + hints_width <= areas.status.width {
            let x = areas.status.x + areas.status.width - hints_width;
            buf.set_line(x, areas.status.y, &hints, hints_width);
        }
    }
}
