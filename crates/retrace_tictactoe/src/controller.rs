//! Game controller: owns the history, the viewed step and the turn flag.
//!
//! The controller is the only mutable game state in the application.
//! Views read it through the accessors below and request changes through
//! [`GameController::attempt_move`] and [`GameController::jump_to`].

use derive_more::Display;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::error::{JumpError, MoveError};
use crate::history::{History, Snapshot};
use crate::rules::check_winner;
use crate::{Player, Position};

/// Status line derived from the viewed snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum Status {
    /// The viewed board has a complete line.
    #[display("Winner: {_0}")]
    Winner(Player),
    /// Nobody has won yet on the viewed board.
    #[display("Next player: {_0}")]
    NextPlayer(Player),
}

/// One entry of the move selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    pub step: usize,
    /// Whether this is the step currently being viewed.
    pub current: bool,
}

impl MoveEntry {
    /// Button text for this entry.
    pub fn label(&self) -> String {
        if self.step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", self.step)
        }
    }
}

impl std::fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// Stateful tic-tac-toe game with time travel through past moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameController {
    history: History,
    step_number: usize,
    x_is_next: bool,
}

impl GameController {
    /// Creates a game at the empty board with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            step_number: 0,
            x_is_next: true,
        }
    }

    /// All snapshots, including any past the viewed step.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the viewed snapshot.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// Whether X moves next from the viewed snapshot.
    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    /// The player whose mark the next accepted move places.
    pub fn next_player(&self) -> Player {
        Player::from_turn_flag(self.x_is_next)
    }

    /// The snapshot being viewed.
    pub fn current(&self) -> &Snapshot {
        // step_number < history.len() is maintained by every transition.
        &self.history.snapshots()[self.step_number]
    }

    /// Winner on the viewed snapshot, if any.
    pub fn winner(&self) -> Option<Player> {
        check_winner(self.current().board())
    }

    /// Status line for the viewed snapshot.
    pub fn status(&self) -> Status {
        match self.winner() {
            Some(winner) => Status::Winner(winner),
            None => Status::NextPlayer(self.next_player()),
        }
    }

    /// One selector entry per snapshot, in history order.
    pub fn moves(&self) -> Vec<MoveEntry> {
        (0..self.history.len())
            .map(|step| MoveEntry {
                step,
                current: step == self.step_number,
            })
            .collect()
    }

    /// Places the next mark at `index` on the viewed snapshot.
    ///
    /// Any snapshots past the viewed step are discarded first. Returns the
    /// player who moved.
    ///
    /// # Errors
    ///
    /// Rejects the move, leaving all state untouched, when the index is
    /// off the board, the viewed board is already won, or the square is
    /// occupied.
    #[instrument(skip(self), fields(step = self.step_number, x_is_next = self.x_is_next))]
    pub fn attempt_move(&mut self, index: usize) -> Result<Player, MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds { index })?;
        let current = *self.current();

        if let Some(winner) = check_winner(current.board()) {
            debug!(%winner, "Rejecting move on a won board");
            return Err(MoveError::GameWon { winner });
        }
        if !current.board().is_empty(position) {
            debug!(%position, "Rejecting move on an occupied square");
            return Err(MoveError::SquareOccupied { position });
        }

        let player = self.next_player();
        let next = current.with_mark(position, player);
        self.step_number = self.history.branch_from(self.step_number, next);
        self.x_is_next = !self.x_is_next;

        info!(%player, %position, step = self.step_number, "Move accepted");
        Ok(player)
    }

    /// Views the snapshot at `step`. History is left intact.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::StepOutOfRange`] when `step` is not a history
    /// index.
    #[instrument(skip(self), fields(from = self.step_number))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), JumpError> {
        let len = self.history.len();
        if step >= len {
            debug!(len, "Rejecting jump past the end of history");
            return Err(JumpError::StepOutOfRange { step, len });
        }

        self.step_number = step;
        self.x_is_next = step % 2 == 0;
        info!(step, "Jumped through history");
        Ok(())
    }

    /// Jumps to the most recent snapshot.
    pub fn jump_to_latest(&mut self) {
        let latest = self.history.len() - 1;
        self.step_number = latest;
        self.x_is_next = latest % 2 == 0;
        debug!(step = latest, "Jumped to latest move");
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn play(game: &mut GameController, moves: &[usize]) {
        for &index in moves {
            game.attempt_move(index).unwrap();
        }
    }

    #[test]
    fn test_initial_state() {
        let game = GameController::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.step_number(), 0);
        assert!(game.x_is_next());
        assert_eq!(game.status(), Status::NextPlayer(Player::X));
        assert_eq!(game.status().to_string(), "Next player: X");
    }

    #[test]
    fn test_accepted_move_flips_turn() {
        let mut game = GameController::new();
        assert_eq!(game.attempt_move(4), Ok(Player::X));
        assert_eq!(game.step_number(), 1);
        assert!(!game.x_is_next());
        assert_eq!(
            game.current().board().get(Position::Center),
            Square::Occupied(Player::X)
        );
        assert_eq!(game.attempt_move(0), Ok(Player::O));
        assert!(game.x_is_next());
    }

    #[test]
    fn test_occupied_square_rejected() {
        let mut game = GameController::new();
        play(&mut game, &[4]);
        let before = game.clone();
        assert_eq!(
            game.attempt_move(4),
            Err(MoveError::SquareOccupied {
                position: Position::Center
            })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut game = GameController::new();
        assert_eq!(
            game.attempt_move(9),
            Err(MoveError::OutOfBounds { index: 9 })
        );
        assert_eq!(game, GameController::new());
    }

    #[test]
    fn test_jump_out_of_range_rejected() {
        let mut game = GameController::new();
        play(&mut game, &[0, 1]);
        assert_eq!(
            game.jump_to(3),
            Err(JumpError::StepOutOfRange { step: 3, len: 3 })
        );
        assert_eq!(game.step_number(), 2);
    }

    #[test]
    fn test_jump_keeps_history() {
        let mut game = GameController::new();
        play(&mut game, &[0, 1, 2]);
        game.jump_to(1).unwrap();
        assert_eq!(game.history().len(), 4);
        assert_eq!(game.step_number(), 1);
        assert!(!game.x_is_next());
        assert_eq!(game.status().to_string(), "Next player: O");
    }

    #[test]
    fn test_jump_to_latest() {
        let mut game = GameController::new();
        play(&mut game, &[0, 1, 2]);
        game.jump_to(0).unwrap();
        game.jump_to_latest();
        assert_eq!(game.step_number(), 3);
        assert!(!game.x_is_next());
    }

    #[test]
    fn test_move_labels() {
        let mut game = GameController::new();
        play(&mut game, &[0, 1]);
        let labels: Vec<_> = game.moves().iter().map(MoveEntry::label).collect();
        assert_eq!(
            labels,
            vec!["Go to game start", "Go to move #1", "Go to move #2"]
        );
        assert!(game.moves()[2].current);
        assert!(!game.moves()[0].current);
    }
}
