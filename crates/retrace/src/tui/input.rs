//! Maps terminal events to application messages.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use retrace_tictactoe::Position;

use super::ui::ShellLayout;
use crate::app::{App, Focus, Message};

/// Translates one terminal event, using the layout of the last frame for
/// mouse clicks.
pub fn map_event(app: &App, layout: &ShellLayout, event: &Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => map_key(app, key),
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            layout.hit_test(mouse.column, mouse.row)
        }
        _ => None,
    }
}

/// Translates a key press.
pub fn map_key(app: &App, key: &KeyEvent) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Message::Quit),
        KeyCode::Tab | KeyCode::BackTab => Some(Message::ToggleFocus),
        KeyCode::Home => Some(Message::JumpTo(0)),
        KeyCode::End => Some(Message::JumpToLatest),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Message::CellActivated),
        code => match app.focus() {
            Focus::Grid => match code {
                KeyCode::Enter | KeyCode::Char(' ') => Some(Message::CellActivated(*app.cursor())),
                KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                    Some(Message::CursorTo(move_cursor(*app.cursor(), code)))
                }
                _ => None,
            },
            Focus::History => {
                let selected = *app.selected_step();
                match code {
                    KeyCode::Enter | KeyCode::Char(' ') => Some(Message::JumpTo(selected)),
                    KeyCode::Up => Some(Message::SelectStep(selected.saturating_sub(1))),
                    KeyCode::Down => Some(Message::SelectStep(selected + 1)),
                    _ => None,
                }
            }
        },
    }
}

/// Moves the board cursor one step, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_cursor_clamps_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Right), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
    }

    #[test]
    fn test_digits_activate_cells() {
        let app = App::new();
        assert_eq!(
            map_key(&app, &press(KeyCode::Char('1'))),
            Some(Message::CellActivated(Position::TopLeft))
        );
        assert_eq!(
            map_key(&app, &press(KeyCode::Char('9'))),
            Some(Message::CellActivated(Position::BottomRight))
        );
        assert_eq!(map_key(&app, &press(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_quit_keys() {
        let app = App::new();
        assert_eq!(map_key(&app, &press(KeyCode::Char('q'))), Some(Message::Quit));
        assert_eq!(map_key(&app, &press(KeyCode::Esc)), Some(Message::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(&app, &ctrl_c), Some(Message::Quit));
    }

    #[test]
    fn test_enter_depends_on_focus() {
        let mut app = App::new();
        assert_eq!(
            map_key(&app, &press(KeyCode::Enter)),
            Some(Message::CellActivated(Position::Center))
        );
        app.update(Message::ToggleFocus);
        assert_eq!(map_key(&app, &press(KeyCode::Enter)), Some(Message::JumpTo(0)));
        assert_eq!(map_key(&app, &press(KeyCode::Down)), Some(Message::SelectStep(1)));
    }

    #[test]
    fn test_home_and_end_travel_history() {
        let mut app = App::new();
        app.update(Message::CellActivated(Position::TopLeft));
        app.update(Message::CellActivated(Position::Center));

        let home = map_key(&app, &press(KeyCode::Home));
        assert_eq!(home, Some(Message::JumpTo(0)));
        app.update(Message::JumpTo(0));
        assert_eq!(app.game().step_number(), 0);

        app.update(Message::ToggleFocus);
        let end = map_key(&app, &press(KeyCode::End));
        assert_eq!(end, Some(Message::JumpToLatest));
        app.update(Message::JumpToLatest);
        assert_eq!(app.game().step_number(), 2);
        assert_eq!(map_key(&app, &press(KeyCode::Home)), Some(Message::JumpTo(0)));
    }

    #[test]
    fn test_release_events_ignored() {
        let app = App::new();
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        let layout = ShellLayout::default();
        assert_eq!(map_event(&app, &layout, &Event::Key(release)), None);
    }

    #[test]
    fn test_right_click_ignored() {
        let app = App::new();
        let layout = ShellLayout::default();
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(map_event(&app, &layout, &click), None);
    }
}
