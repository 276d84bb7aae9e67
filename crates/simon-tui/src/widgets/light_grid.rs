//! The board: one filled cell per light, labelled with its color and keys

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph, Widget},
};
use simon_core::{Light, LightColor};

use crate::layout;
use crate::theme::palette;

pub struct LightGrid<'a> {
    lights: &'a [Light],
}

impl<'a> LightGrid<'a> {
    pub fn new(lights: &'a [Light]) -> Self {
        Self { lights }
    }
}

/// "Red  [1/r]" for palette lights, "Light 5  [5]" beyond the palette
fn label(index: usize) -> String {
    match LightColor::ALL.get(index) {
        Some(color) => format!("{}  [{}/{}]", color.name(), index + 1, color.key()),
        None => format!("Light {}  [{}]", index + 1, index + 1),
    }
}

impl Widget for LightGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cells = layout::light_cells(area, self.lights.len());

        for (index, (light, cell)) in self.lights.iter().zip(cells).enumerate() {
            let color = light.current_color();
            Block::default()
                .style(Style::default().bg(palette::rgb(color)))
                .render(cell, buf);

            if cell.height == 0 {
                continue;
            }

            let mut style = Style::default().fg(palette::contrast_text(color));
            if light.is_on() {
                style = style.add_modifier(Modifier::BOLD);
            }
            let label_row = Rect::new(cell.x, cell.y + cell.height / 2, cell.width, 1);
            Paragraph::new(Line::from(label(index)))
                .style(style)
                .alignment(Alignment::Center)
                .render(label_row, buf);
        }
    }
}
