//! A single board square.

use derive_new::new;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};
use retrace_tictactoe::{Player, Square};

use crate::config::Theme;

/// Stateless widget drawing one square as a bordered button.
#[derive(Debug, Clone, Copy, new)]
pub struct CellView<'a> {
    square: Square,
    theme: &'a Theme,
    highlighted: bool,
    winning: bool,
}

impl Widget for CellView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mark_style = match self.square {
            Square::Empty => Style::default().fg(Color::DarkGray),
            Square::Occupied(Player::X) => Style::default()
                .fg(self.theme.x)
                .add_modifier(Modifier::BOLD),
            Square::Occupied(Player::O) => Style::default()
                .fg(self.theme.o)
                .add_modifier(Modifier::BOLD),
        };
        let style = if self.highlighted {
            mark_style.bg(self.theme.cursor).fg(Color::Black)
        } else {
            mark_style
        };
        let border = if self.winning {
            Style::default().fg(self.theme.win).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        Paragraph::new(self.square.symbol())
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border))
            .render(area, buf);
    }
}
