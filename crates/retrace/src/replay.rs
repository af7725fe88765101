//! Headless replay: play a list of moves and report the resulting view.

use retrace_tictactoe::{Board, GameController, JumpError, MoveEntry};
use serde::Serialize;
use tracing::{info, instrument, warn};

/// Output format for the replay command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReplayFormat {
    /// Board, status line and history labels.
    #[default]
    Text,
    /// A JSON report.
    Json,
}

/// A move the controller refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedMove {
    /// Cell index that was requested.
    pub index: usize,
    /// Why it was refused.
    pub reason: String,
}

/// What the game looks like after a replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// Number of snapshots kept.
    pub history_len: usize,
    /// Index of the viewed snapshot.
    pub step_number: usize,
    /// Whether X moves next.
    pub x_is_next: bool,
    /// Status line text.
    pub status: String,
    /// The viewed board.
    pub board: Board,
    /// History entry labels, in order.
    pub moves: Vec<String>,
    /// Moves that were skipped.
    pub rejected: Vec<RejectedMove>,
}

impl ReplayReport {
    fn from_game(game: &GameController, rejected: Vec<RejectedMove>) -> Self {
        Self {
            history_len: game.history().len(),
            step_number: game.step_number(),
            x_is_next: game.x_is_next(),
            status: game.status().to_string(),
            board: *game.current().board(),
            moves: game.moves().iter().map(MoveEntry::label).collect(),
            rejected,
        }
    }

    /// Renders the report as plain text.
    pub fn to_text(&self) -> String {
        let mut out = format!("{}\n\n{}\n\n", self.board.display(), self.status);
        for (i, label) in self.moves.iter().enumerate() {
            let marker = if i == self.step_number { ">" } else { " " };
            out.push_str(&format!("{} {}. {}\n", marker, i + 1, label));
        }
        out
    }
}

/// Plays `moves` in order, then views `jump` if given.
///
/// Rejected moves are skipped and listed in the report.
///
/// # Errors
///
/// Returns [`JumpError`] if `jump` is not a history index after the moves.
#[instrument]
pub fn replay(moves: &[usize], jump: Option<usize>) -> Result<ReplayReport, JumpError> {
    let mut game = GameController::new();
    let mut rejected = Vec::new();

    for &index in moves {
        if let Err(e) = game.attempt_move(index) {
            warn!(index, error = %e, "Skipping rejected move");
            rejected.push(RejectedMove {
                index,
                reason: e.to_string(),
            });
        }
    }
    if let Some(step) = jump {
        game.jump_to(step)?;
    }

    info!(
        history_len = game.history().len(),
        step = game.step_number(),
        "Replay finished"
    );
    Ok(ReplayReport::from_game(&game, rejected))
}
