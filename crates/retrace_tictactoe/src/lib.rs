//! Retrace tic-tac-toe - pure game logic with time travel.
//!
//! Every accepted move produces a fresh [`Snapshot`] of the board; the
//! [`GameController`] keeps them all so play can be rewound to any earlier
//! move and resumed from there, discarding the abandoned branch.
//!
//! # Example
//!
//! ```
//! use retrace_tictactoe::{GameController, Player, Status};
//!
//! let mut game = GameController::new();
//! for index in [0, 4, 1, 3, 2] {
//!     game.attempt_move(index).unwrap();
//! }
//! assert_eq!(game.status(), Status::Winner(Player::X));
//!
//! game.jump_to(2).unwrap();
//! game.attempt_move(6).unwrap();
//! assert_eq!(game.history().len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
mod error;
mod history;
mod position;
mod types;

pub mod rules;

pub use controller::{GameController, MoveEntry, Status};
pub use error::{JumpError, MoveError};
pub use history::{History, Snapshot};
pub use position::Position;
pub use rules::{WINNING_LINES, check_winner, winning_line};
pub use types::{Board, Player, Square};
