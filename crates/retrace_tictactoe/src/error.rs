//! Rejection reasons for controller operations.
//!
//! These never escape to the player; the UI drops them after logging.

use derive_more::{Display, Error};

use crate::{Player, Position};

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Index is not on the board.
    #[display("Position {index} out of bounds (must be 0-8)")]
    OutOfBounds {
        /// The rejected index.
        index: usize,
    },
    /// The viewed snapshot already has a winner.
    #[display("Game already won by {winner}")]
    GameWon {
        /// Owner of the winning line.
        winner: Player,
    },
    /// Square is already occupied.
    #[display("{position} is already occupied")]
    SquareOccupied {
        /// The occupied square.
        position: Position,
    },
}

/// Why a jump through history was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum JumpError {
    /// Step is past the end of the history.
    #[display("Step {step} out of range (history has {len} snapshots)")]
    StepOutOfRange {
        /// The rejected step.
        step: usize,
        /// History length at the time of the jump.
        len: usize,
    },
}
