//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! history storage so the controller and the UI can share them.

pub mod win;

pub use win::{WINNING_LINES, check_winner, winning_line};
