//! The move selector: one clickable row per history snapshot.

use derive_new::new;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use retrace_tictactoe::MoveEntry;

use super::contains;

/// Screen rows of the visible history entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MovesLayout {
    rows: Vec<(usize, Rect)>,
}

impl MovesLayout {
    /// One row per entry inside the bordered `area`, clipped to fit.
    ///
    /// When the list is taller than the pane the window keeps `focus` in
    /// view, showing the newest entries whenever that is enough.
    pub fn new(area: Rect, entries: usize, focus: usize) -> Self {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let visible = entries.min(inner.height as usize);
        let first = (entries - visible).min(focus);
        let last = (first + visible).min(entries);
        let rows = (first..last)
            .enumerate()
            .map(|(offset, step)| {
                (step, Rect::new(inner.x, inner.y + offset as u16, inner.width, 1))
            })
            .collect();
        Self { rows }
    }

    /// Visible `(step, row)` pairs in order.
    pub fn rows(&self) -> &[(usize, Rect)] {
        &self.rows
    }

    /// History step under the given screen coordinate.
    pub fn hit(&self, column: u16, row: u16) -> Option<usize> {
        self.rows
            .iter()
            .find(|(_, area)| contains(*area, column, row))
            .map(|(step, _)| *step)
    }
}

/// Stateless history list widget.
#[derive(Debug, Clone, new)]
pub struct MoveListView<'a> {
    entries: &'a [MoveEntry],
    layout: &'a MovesLayout,
    selected: Option<usize>,
}

impl Widget for MoveListView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.selected.is_some() {
            "History [focused]"
        } else {
            "History"
        };
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .render(area, buf);

        for (step, row) in self.layout.rows() {
            let Some(entry) = self.entries.get(*step) else {
                continue;
            };
            let mut style = Style::default();
            if entry.current {
                style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
            }
            if self.selected == Some(*step) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            let marker = if entry.current { "> " } else { "  " };
            let line = Line::from(vec![
                Span::raw(format!("{}{}. ", marker, step + 1)),
                Span::styled(entry.label(), style),
            ]);
            Paragraph::new(line).render(*row, buf);
        }
    }
}
