//! Immutable board snapshots and the ordered history they live in.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::{Board, Player, Position, Square};

/// An owned, immutable copy of the board at one point in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Snapshot {
    board: Board,
}

impl Snapshot {
    /// The empty starting snapshot.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the board captured by this snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Copies this snapshot and marks one square.
    ///
    /// The receiver is left untouched.
    #[instrument(skip(self))]
    pub fn with_mark(&self, position: Position, player: Player) -> Self {
        let mut board = self.board;
        board.set(position, Square::Occupied(player));
        Self { board }
    }
}

/// Ordered snapshots; index 0 is always the empty board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::empty()],
        }
    }

    /// Number of snapshots (never zero).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false once constructed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshot at `step`, if it exists.
    pub fn get(&self, step: usize) -> Option<&Snapshot> {
        self.snapshots.get(step)
    }

    /// The most recent snapshot.
    pub fn last(&self) -> &Snapshot {
        // Index 0 is never removed.
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// All snapshots in order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Drops every snapshot after `step`, then appends `next`.
    ///
    /// Returns the index of the appended snapshot.
    #[instrument(skip(self, next), fields(before = self.snapshots.len()))]
    pub(crate) fn branch_from(&mut self, step: usize, next: Snapshot) -> usize {
        let discarded = self.snapshots.len().saturating_sub(step + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding snapshots past the viewed step");
        }
        self.snapshots.truncate(step + 1);
        self.snapshots.push(next);
        self.snapshots.len() - 1
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
