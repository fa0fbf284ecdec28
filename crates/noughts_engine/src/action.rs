//! Placements and the errors a turn can raise.

use super::cell::Cell;
use super::types::Side;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A placement made during the game: a side marking a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The side that moved.
    pub side: Side,
    /// The cell it marked.
    pub cell: Cell,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(side: Side, cell: Cell) -> Self {
        Self { side, cell }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> {}", self.side, self.cell.label())
    }
}

/// A turn the engine refused to apply.
///
/// Validated input never produces these; they guard direct library use.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum TurnError {
    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Cell),

    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for TurnError {}
