//! Very basic robot opponent.
//!
//! The robot looks one move ahead and no further:
//!
//! 1. complete one of its own two-in-a-row lines,
//! 2. otherwise block one of the human's two-in-a-row lines,
//! 3. otherwise pick any free cell at random.
//!
//! It is fork-blind: with two human threats on the board it blocks the first
//! and loses to the second, unless [`DefenseMode::GiveUp`] is selected, in
//! which case it resigns instead.

use super::board::{Board, WINNING_LINES};
use super::cell::Cell;
use super::choice::Choice;
use super::types::Mark;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// What the robot does when the human has more than one winning threat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DefenseMode {
    /// Block the first threat found and ignore the rest.
    #[default]
    Block,
    /// Give up when two distinct cells would need blocking.
    GiveUp,
}

/// Robot settings fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, derive_new::new)]
pub struct OpponentConfig {
    /// Reaction to an unstoppable fork.
    pub defense: DefenseMode,
}

/// Greedy move picker for the computer side.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicOpponent {
    config: OpponentConfig,
}

impl HeuristicOpponent {
    /// Creates an opponent with the given settings.
    #[instrument]
    pub fn new(config: OpponentConfig) -> Self {
        Self { config }
    }

    /// Returns the settings.
    pub fn config(&self) -> OpponentConfig {
        self.config
    }

    /// Chooses the robot's move on the current board.
    ///
    /// `own` is the robot's mark, `rival` the human's. Only the random
    /// fallback consults `rng`.
    #[instrument(skip(self, board, rng), fields(defense = ?self.config.defense))]
    pub fn choose(&self, board: &Board, own: Mark, rival: Mark, rng: &mut impl Rng) -> Choice {
        if let Some(cell) = winning_move(board, own) {
            debug!(%cell, "Completing own line");
            return Choice::Cell(cell);
        }

        if let Some(choice) = defensive_move(board, rival, self.config.defense) {
            debug!(%choice, "Answering a threat");
            return choice;
        }

        random_move(board, rng)
    }
}

/// Missing cell of the first line (catalogue order) holding two `mark`s.
#[instrument(skip(board))]
pub fn winning_move(board: &Board, mark: Mark) -> Option<Cell> {
    threatened_cells(board, mark).next()
}

/// Response to the lines where `rival` needs one more mark.
///
/// `None` when there is nothing to block.
#[instrument(skip(board))]
pub fn defensive_move(board: &Board, rival: Mark, mode: DefenseMode) -> Option<Choice> {
    let mut threats = threatened_cells(board, rival);
    let first = threats.next()?;

    if mode == DefenseMode::GiveUp && threats.any(|cell| cell != first) {
        debug!(%first, "Fork detected, giving up");
        return Some(Choice::GiveUp);
    }

    Some(Choice::Cell(first))
}

/// Uniformly random free cell.
///
/// Falls back to giving up on a full board, which the engine never asks for.
#[instrument(skip(board, rng))]
pub fn random_move(board: &Board, rng: &mut impl Rng) -> Choice {
    match Cell::free_cells(board).choose(rng) {
        Some(cell) => {
            debug!(%cell, "Random pick");
            Choice::Cell(*cell)
        }
        None => {
            warn!("No free cell for a random move");
            Choice::GiveUp
        }
    }
}

/// Empty cells completing a line where `mark` already has two, one per
/// qualifying line, in catalogue order.
fn threatened_cells(board: &Board, mark: Mark) -> impl Iterator<Item = Cell> + '_ {
    board
        .evaluate_lines(mark)
        .into_iter()
        .filter(|score| score.matches == 2)
        .filter_map(move |score| {
            WINNING_LINES[score.line]
                .iter()
                .copied()
                .find(|cell| board.is_empty(*cell))
        })
}
