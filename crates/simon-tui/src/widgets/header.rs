//! Header bar: game title on the left, score and session best on the right

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use simon_app::config::ThemeSettings;

use crate::theme::styles;

pub struct MainHeader<'a> {
    theme: &'a ThemeSettings,
    score: u32,
    best: u32,
}

impl<'a> MainHeader<'a> {
    pub fn new(theme: &'a ThemeSettings, score: u32, best: u32) -> Self {
        Self { theme, score, best }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.theme);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled("Simon Says", styles::accent_bold(self.theme)),
        ]);
        buf.set_line(inner.x, inner.y, &title, inner.width);

        let score = Line::from(vec![
            Span::styled(format!("Score: {}", self.score), styles::text(self.theme)),
            Span::styled("  Best: ", styles::text_muted()),
            Span::styled(self.best.to_string(), styles::text_muted()),
            Span::raw(" "),
        ]);
        let score_width = score.width() as u16;
        let title_width = title.width() as u16;

        // Drop the score rather than overwrite the title on narrow terminals
        if title_width + score_width < inner.width {
            let x = inner.x + inner.width - score_width;
            buf.set_line(x, inner.y, &score, score_width);
        }
    }
}
