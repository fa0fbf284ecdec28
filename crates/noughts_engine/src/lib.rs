//! Noughts engine - tic-tac-toe against a very basic robot
//!
//! Pure game logic with no I/O of its own. A presentation layer feeds moves
//! in and renders the board and the outcome.
//!
//! # Architecture
//!
//! - **Board**: keypad-numbered 3x3 grid and the eight winning lines
//! - **Turn engine**: human-then-robot rounds and the game status
//! - **Choice**: validation of typed moves and the retry loop
//! - **Opponent**: greedy, fork-blind move heuristic
//!
//! # Example
//!
//! ```
//! use noughts_engine::{
//!     Cell, Choice, HeuristicOpponent, PlayerDescriptor, TurnEngine,
//! };
//! use rand::SeedableRng;
//!
//! let mut engine = TurnEngine::new(
//!     PlayerDescriptor::human(),
//!     PlayerDescriptor::robot(),
//!     HeuristicOpponent::default(),
//!     rand::rngs::SmallRng::seed_from_u64(7),
//! );
//! let round = engine.play_round(Choice::Cell(Cell::Center)).unwrap();
//! assert!(!round.ended());
//! assert_eq!(engine.turn(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod cell;
mod choice;
mod engine;
pub mod invariants;
mod opponent;
mod types;

pub use action::{Move, TurnError};
pub use board::{Board, LineScore, WINNING_LINES};
pub use cell::Cell;
pub use choice::{
    CHOICE_PROMPT, Choice, ChoiceError, Console, InputError, request_choice, validate_choice,
};
pub use engine::{Round, TurnEngine};
pub use opponent::{
    DefenseMode, HeuristicOpponent, OpponentConfig, defensive_move, random_move, winning_move,
};
pub use types::{EMPTY_GLYPH, GameStatus, Mark, PlayerDescriptor, Side, Square};
