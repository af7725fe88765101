//! Named board positions.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the nine cells, numbered row-major:
///
/// ```text
/// 0 | 1 | 2
/// ---------
/// 3 | 4 | 5
/// ---------
/// 6 | 7 | 8
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Cell 0: row 0, column 0.
    TopLeft,
    /// Cell 1: row 0, column 1.
    TopCenter,
    /// Cell 2: row 0, column 2.
    TopRight,
    /// Cell 3: row 1, column 0.
    MiddleLeft,
    /// Cell 4: row 1, column 1.
    Center,
    /// Cell 5: row 1, column 2.
    MiddleRight,
    /// Cell 6: row 2, column 0.
    BottomLeft,
    /// Cell 7: row 2, column 1.
    BottomCenter,
    /// Cell 8: row 2, column 2.
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Human-readable cell name, e.g. `Top-left`.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Row-major cell index, 0-8.
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// The cell at a row-major index, or `None` past 8.
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Creates position from row and column, both 0-2.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
