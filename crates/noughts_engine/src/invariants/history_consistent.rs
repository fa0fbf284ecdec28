//! History consistency invariant: one placement per filled cell.

use super::Invariant;
use crate::{Square, TurnEngine};

/// Invariant: the number of filled cells equals the number of placements.
pub struct HistoryConsistentInvariant;

impl<R> Invariant<TurnEngine<R>> for HistoryConsistentInvariant {
    fn holds(engine: &TurnEngine<R>) -> bool {
        let filled = engine
            .board()
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();
        filled == engine.history().len()
    }

    fn description() -> &'static str {
        "Filled cells match move history"
    }
}
