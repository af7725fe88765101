//! The 3x3 board: lays out nine cells and maps clicks back to positions.

use derive_new::new;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Widget,
};
use retrace_tictactoe::{Board, Position};

use super::{CellView, center_rect, contains};
use crate::config::Theme;

/// Width of one cell, borders included.
pub const CELL_WIDTH: u16 = 7;
/// Height of one cell, borders included.
pub const CELL_HEIGHT: u16 = 3;

/// Screen areas of the nine cells, indexed like the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridLayout {
    cells: [Rect; 9],
}

impl GridLayout {
    /// Centers the grid inside `area` and splits it into cells.
    pub fn new(area: Rect) -> Self {
        let board_area = center_rect(area, CELL_WIDTH * 3, CELL_HEIGHT * 3);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(CELL_HEIGHT); 3])
            .split(board_area);

        let mut cells = [Rect::default(); 9];
        for (row, row_area) in rows.iter().enumerate() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(CELL_WIDTH); 3])
                .split(*row_area);
            for (col, cell_area) in cols.iter().enumerate() {
                cells[row * 3 + col] = *cell_area;
            }
        }
        Self { cells }
    }

    /// Area of the cell at `position`.
    pub fn cell(&self, position: Position) -> Rect {
        self.cells[position.to_index()]
    }

    /// Position of the cell under the given screen coordinate.
    pub fn hit(&self, column: u16, row: u16) -> Option<Position> {
        Position::ALL
            .into_iter()
            .find(|pos| contains(self.cell(*pos), column, row))
    }
}

/// Stateless board widget.
#[derive(Debug, Clone, Copy, new)]
pub struct GridView<'a> {
    board: &'a Board,
    layout: &'a GridLayout,
    theme: &'a Theme,
    cursor: Option<Position>,
    winning_line: Option<[Position; 3]>,
}

impl Widget for GridView<'_> {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        for position in Position::ALL {
            let winning = self
                .winning_line
                .is_some_and(|line| line.contains(&position));
            CellView::new(
                self.board.get(position),
                self.theme,
                self.cursor == Some(position),
                winning,
            )
            .render(self.layout.cell(position), buf);
        }
    }
}
