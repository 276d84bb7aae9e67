//! Screen layout definitions for the TUI
//!
//! Rendering and mouse hit-testing both go through these functions, so a
//! click always lands on the cell that was drawn there.

use ratatui::layout::{Constraint, Layout, Margin, Position, Rect};

/// Lights per row on the board
pub const GRID_COLUMNS: usize = 2;

/// Width of the Start/Quit button, brackets included
pub const BUTTON_WIDTH: u16 = 16;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title and score (bordered)
    pub header: Rect,

    /// The light grid
    pub board: Rect,

    /// Start/Quit button and status label (bordered)
    pub controls: Rect,
}

/// Inside of the controls container
#[derive(Debug, Clone, Copy)]
pub struct ControlAreas {
    pub button: Rect,
    pub status: Rect,
}

/// Split the terminal into header, board and controls
pub fn create(area: Rect) -> ScreenAreas {
    let [header, board, controls] = Layout::vertical([
        Constraint::Length(3), // Header (border + title row + border)
        Constraint::Min(4),    // Board
        Constraint::Length(3), // Controls (border + button row + border)
    ])
    .areas(area);

    ScreenAreas {
        header,
        board,
        controls,
    }
}

/// Split the controls container into the button and the status label
pub fn controls(area: Rect) -> ControlAreas {
    let inner = area.inner(Margin::new(1, 1));
    let [button, status] = Layout::horizontal([Constraint::Length(BUTTON_WIDTH), Constraint::Min(0)])
        .spacing(2)
        .areas(inner);

    ControlAreas { button, status }
}

/// One rect per light, filled row by row, two per row
pub fn light_cells(board: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }

    let rows = count.div_ceil(GRID_COLUMNS);
    let row_areas = Layout::vertical(vec![Constraint::Ratio(1, rows as u32); rows])
        .spacing(1)
        .split(board.inner(Margin::new(1, 0)));

    let mut cells = Vec::with_capacity(count);
    for row in row_areas.iter() {
        let columns = Layout::horizontal(vec![
            Constraint::Ratio(1, GRID_COLUMNS as u32);
            GRID_COLUMNS
        ])
        .spacing(2)
        .split(*row);
        cells.extend(columns.iter().copied());
    }
    cells.truncate(count);
    cells
}

/// Index of the light drawn at (`column`, `row`), if any
pub fn light_at(board: Rect, count: usize, column: u16, row: u16) -> Option<usize> {
    let position = Position::new(column, row);
    light_cells(board, count)
        .iter()
        .position(|cell| cell.contains(position))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.controls.height, 3);
        assert_eq!(layout.board.y, 3);
        assert_eq!(layout.board.height, 18); // 24 - 3 - 3
        assert_eq!(layout.controls.y, 21);
    }

    #[test]
    fn test_controls_split() {
        let areas = controls(Rect::new(0, 21, 80, 3));

        assert_eq!(areas.button, Rect::new(1, 22, BUTTON_WIDTH, 1));
        assert_eq!(areas.status.x, 1 + BUTTON_WIDTH + 2);
        assert_eq!(areas.status.y, 22);
    }

    #[test]
    fn test_four_lights_form_a_two_by_two_grid() {
        let board = Rect::new(0, 3, 80, 18);
        let cells = light_cells(board, 4);

        assert_eq!(cells.len(), 4);
        // Same row for 0/1 and 2/3, same column for 0/2 and 1/3
        assert_eq!(cells[0].y, cells[1].y);
        assert_eq!(cells[2].y, cells[3].y);
        assert_eq!(cells[0].x, cells[2].x);
        assert_eq!(cells[1].x, cells[3].x);
        assert!(cells[0].x < cells[1].x);
        assert!(cells[0].y < cells[2].y);
        assert!(cells.iter().all(|c| c.width > 0 && c.height > 0));
    }

    #[test]
    fn test_cells_do_not_overlap() {
        let cells = light_cells(Rect::new(0, 0, 60, 20), 4);
        for (i, a) in cells.iter().enumerate() {
            for b in cells.iter().skip(i + 1) {
                assert!(!a.intersects(*b), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_odd_count_leaves_last_row_half_full() {
        let cells = light_cells(Rect::new(0, 0, 60, 20), 3);
        assert_eq!(cells.len(), 3);
        assert!(cells[2].y > cells[0].y);
    }

    #[test]
    fn test_no_lights_no_cells() {
        assert!(light_cells(Rect::new(0, 0, 60, 20), 0).is_empty());
    }

    #[test]
    fn test_light_at_hits_each_cell() {
        let board = Rect::new(0, 3, 80, 18);
        for (index, cell) in light_cells(board, 4).iter().enumerate() {
            let center = (cell.x + cell.width / 2, cell.y + cell.height / 2);
            assert_eq!(light_at(board, 4, center.0, center.1), Some(index));
            assert_eq!(light_at(board, 4, cell.x, cell.y), Some(index));
        }
    }

    #[test]
    fn test_light_at_misses_gaps_and_outside() {
        let board = Rect::new(0, 3, 80, 18);
        let cells = light_cells(board, 4);

        // Column between the two cells of the first row
        let gap_x = cells[0].x + cells[0].width;
        assert_eq!(light_at(board, 4, gap_x, cells[0].y), None);

        // Header row and the far right border column
        assert_eq!(light_at(board, 4, 10, 0), None);
        assert_eq!(light_at(board, 4, 79, 10), None);
    }
}
