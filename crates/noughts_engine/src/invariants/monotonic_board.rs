//! Monotonic board invariant: cells never change once marked.

use super::Invariant;
use crate::{Board, TurnEngine};

/// Invariant: replaying the history onto an empty board reproduces the board.
///
/// Only meaningful before a win rewrites the winning line in upper case.
pub struct MonotonicBoardInvariant;

impl<R> Invariant<TurnEngine<R>> for MonotonicBoardInvariant {
    fn holds(engine: &TurnEngine<R>) -> bool {
        let mut reconstructed = Board::new();

        for mov in engine.history() {
            if !reconstructed.is_empty(mov.cell) {
                return false;
            }
            reconstructed.place(mov.cell, *engine.player(mov.side).mark());
        }

        reconstructed == *engine.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
