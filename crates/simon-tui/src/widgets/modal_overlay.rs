//! Helpers shared by modal dialogs: centering, dimming the screen behind
//! the dialog, and a drop shadow.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette;

/// Center a `width` x `height` rect in `area`, shrinking it to fit.
///
/// ```
/// use ratatui::layout::Rect;
/// use simon_tui::widgets::modal_overlay::centered_rect;
///
/// let modal = centered_rect(40, 10, Rect::new(0, 0, 80, 24));
/// assert_eq!(modal, Rect::new(20, 7, 40, 10));
/// ```
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width - w) / 2;
    let y = area.y + (area.height - h) / 2;
    Rect::new(x, y, w, h)
}

/// Restyle every cell of `area` so the content behind a modal fades out
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let dimmed = Style::default()
        .fg(palette::DIMMED_FG)
        .bg(palette::DIMMED_BG);
    for position in area.positions() {
        if let Some(cell) = buf.cell_mut(position) {
            cell.set_style(dimmed);
        }
    }
}

/// One-cell shadow along the right and bottom edges of `modal`
pub fn render_shadow(buf: &mut Buffer, modal: Rect) {
    let shadow = Style::default().bg(palette::SHADOW);
    let right = modal.right();
    let bottom = modal.bottom();

    let right_edge = (modal.y + 1..=bottom).map(|y| (right, y));
    let bottom_edge = (modal.x + 1..=right).map(|x| (x, bottom));
    for position in right_edge.chain(bottom_edge) {
        if let Some(cell) = buf.cell_mut(position) {
            cell.set_char(' ');
            cell.set_style(shadow);
        }
    }
}

/// Reset the cells under a modal before drawing it
pub fn clear_area(buf: &mut Buffer, area: Rect) {
    Clear.render(area, buf);
}
