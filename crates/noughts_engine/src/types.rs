//! Core domain types for tic-tac-toe.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Glyph rendered for an empty cell.
pub const EMPTY_GLYPH: char = '.';

/// The symbol a player places in a cell.
///
/// Marks are case-sensitive: `x` and `X` are different marks. The upper-case
/// form is reserved for highlighting a winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mark(char);

impl Mark {
    /// Creates a mark from its symbol.
    pub const fn new(symbol: char) -> Self {
        Self(symbol)
    }

    /// Returns the symbol.
    pub fn symbol(self) -> char {
        self.0
    }

    /// Upper-cased form used for the cells of a winning line.
    ///
    /// Symbols whose upper case is not a single character are left as is.
    pub fn upper(self) -> Self {
        let mut upper = self.0.to_uppercase();
        match (upper.next(), upper.next()) {
            (Some(symbol), None) => Self(symbol),
            _ => self,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A cell's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell.
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

impl Square {
    /// Glyph shown when rendering the board.
    pub fn glyph(self) -> char {
        match self {
            Square::Empty => EMPTY_GLYPH,
            Square::Occupied(mark) => mark.symbol(),
        }
    }
}

/// Which participant is acting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The person at the keyboard (always moves first).
    Human,
    /// The heuristic computer opponent.
    Robot,
}

impl Side {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Human => Side::Robot,
            Side::Robot => Side::Human,
        }
    }
}

/// Display name and mark of one participant. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct PlayerDescriptor {
    /// Name used in turn headers and announcements.
    #[new(into)]
    name: String,
    /// Mark placed on the board.
    mark: Mark,
}

impl PlayerDescriptor {
    /// Default human descriptor: "Human" playing `x`.
    #[instrument]
    pub fn human() -> Self {
        Self::new("Human", Mark::new('x'))
    }

    /// Default computer descriptor: "Robot" playing `o`.
    #[instrument]
    pub fn robot() -> Self {
        Self::new("Robot", Mark::new('o'))
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with three in a row.
    Won(Side),
    /// Board filled with no winner.
    Draw,
    /// A side gave up.
    Abandoned(Side),
}

impl GameStatus {
    /// True for every state except `InProgress`.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}
