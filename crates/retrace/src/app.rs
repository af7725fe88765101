//! Application state and message handling.

use derive_getters::Getters;
use retrace_tictactoe::{GameController, Position};
use tracing::{debug, instrument};

/// Which pane receives keyboard navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Grid,
    /// Arrow keys select a history entry.
    History,
}

/// A request produced by the view layer or the key map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A cell was clicked or activated from the keyboard.
    CellActivated(Position),
    /// A history entry was activated.
    JumpTo(usize),
    /// Return to the most recent move.
    JumpToLatest,
    /// Move the board cursor.
    CursorTo(Position),
    /// Highlight a history entry without jumping.
    SelectStep(usize),
    /// Switch keyboard focus between board and history.
    ToggleFocus,
    /// Leave the application.
    Quit,
}

/// Main application state.
///
/// Owns the only [`GameController`]; everything else here is view state.
#[derive(Debug, Clone, Getters)]
pub struct App {
    game: GameController,
    cursor: Position,
    focus: Focus,
    selected_step: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            game: GameController::new(),
            cursor: Position::Center,
            focus: Focus::Grid,
            selected_step: 0,
            should_quit: false,
        }
    }

    /// Applies one message.
    ///
    /// Rejected moves and jumps are dropped without feedback.
    #[instrument(skip(self))]
    pub fn update(&mut self, message: Message) {
        match message {
            Message::CellActivated(position) => {
                self.cursor = position;
                match self.game.attempt_move(position.to_index()) {
                    Ok(player) => {
                        debug!(%player, %position, "Move applied to UI state");
                        self.selected_step = self.game.step_number();
                    }
                    Err(e) => debug!(error = %e, "Move ignored"),
                }
            }
            Message::JumpTo(step) => match self.game.jump_to(step) {
                Ok(()) => self.selected_step = step,
                Err(e) => debug!(error = %e, "Jump ignored"),
            },
            Message::JumpToLatest => {
                self.game.jump_to_latest();
                self.selected_step = self.game.step_number();
            }
            Message::CursorTo(position) => self.cursor = position,
            Message::SelectStep(step) => {
                self.selected_step = step.min(self.game.history().len() - 1);
            }
            Message::ToggleFocus => {
                self.focus = match self.focus {
                    Focus::Grid => Focus::History,
                    Focus::History => Focus::Grid,
                };
                self.selected_step = self.game.step_number();
            }
            Message::Quit => {
                debug!("Quit requested");
                self.should_quit = true;
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
