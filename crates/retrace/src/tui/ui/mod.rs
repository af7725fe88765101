//! UI rendering using ratatui.
//!
//! Three stateless layers: [`CellView`] draws one square, [`GridView`]
//! arranges nine of them, and [`draw`] builds the outer shell with the
//! status line and the move selector. [`draw`] returns the [`ShellLayout`]
//! it used so mouse clicks can be mapped back to what was on screen.

mod cell;
mod grid;
mod moves;

pub use cell::CellView;
pub use grid::{CELL_HEIGHT, CELL_WIDTH, GridLayout, GridView};
pub use moves::{MoveListView, MovesLayout};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use retrace_tictactoe::{Status, winning_line};

use crate::app::{App, Focus, Message};
use crate::config::Theme;

/// Where the clickable parts of the last frame ended up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellLayout {
    /// Board cells.
    pub grid: GridLayout,
    /// History entries.
    pub moves: MovesLayout,
}

impl ShellLayout {
    /// Translates a left click into a message, if it landed on something.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Message> {
        if let Some(position) = self.grid.hit(column, row) {
            return Some(Message::CellActivated(position));
        }
        self.moves.hit(column, row).map(Message::JumpTo)
    }
}

/// Draws the whole application.
pub fn draw(frame: &mut Frame, app: &App, theme: &Theme) -> ShellLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board and history
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Retrace - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    let game = app.game();
    let board = game.current().board();

    let grid_layout = GridLayout::new(body[0]);
    let cursor = (*app.focus() == Focus::Grid).then_some(*app.cursor());
    let line = winning_line(board).map(|(_, line)| line);
    frame.render_widget(
        GridView::new(board, &grid_layout, theme, cursor, line),
        body[0],
    );

    let info = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(body[1]);

    let status = game.status();
    let status_style = match status {
        Status::Winner(_) => Style::default().fg(theme.win).add_modifier(Modifier::BOLD),
        Status::NextPlayer(_) => Style::default().fg(Color::Yellow),
    };
    let status_text = Paragraph::new(status.to_string())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status_text, info[0]);

    let entries = game.moves();
    let selected = (*app.focus() == Focus::History).then_some(*app.selected_step());
    let focus_step = selected.unwrap_or(game.step_number());
    let moves_layout = MovesLayout::new(info[1], entries.len(), focus_step);
    frame.render_widget(
        MoveListView::new(&entries, &moves_layout, selected),
        info[1],
    );

    let help = Paragraph::new(
        "Click or 1-9: play | Arrows+Enter: navigate | Tab: history | Home/End | Q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[2]);

    ShellLayout {
        grid: grid_layout,
        moves: moves_layout,
    }
}

/// Whether the screen coordinate falls inside `area`.
pub(crate) fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

/// A `width` x `height` rect centered in `area`, shrunk to fit if needed.
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
