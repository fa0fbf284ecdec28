//! Move choices and validation of the human's typed input.

use super::board::Board;
use super::cell::Cell;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Prompt shown before reading the human's move.
pub const CHOICE_PROMPT: &str = "Your choice (1-9 for turn, 0 for exit):";

/// A move request: either a cell to mark or giving up (typed as `0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    /// Abandon the game.
    GiveUp,
    /// Place the side's mark in this cell.
    Cell(Cell),
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Choice::GiveUp => write!(f, "0"),
            Choice::Cell(cell) => write!(f, "{}", cell),
        }
    }
}

/// Why a typed choice was rejected. Always recoverable by asking again.
///
/// The `Display` text is the notice shown to the human.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ChoiceError {
    /// Input contained something other than decimal digits.
    #[display("Wrong action, use only digits.")]
    NotDigits,
    /// Number was neither 0 nor a cell 1-9.
    #[display("Wrong action, 1-9 or 0.")]
    OutOfRange,
    /// The cell already holds a mark.
    #[display("Cell is occupied, try another.")]
    Occupied(Cell),
}

impl std::error::Error for ChoiceError {}

/// Validates one line of input against the current board.
///
/// Only a trailing line terminator is ignored; any other non-digit,
/// including spaces, is rejected.
#[instrument(skip(board))]
pub fn validate_choice(raw: &str, board: &Board) -> Result<Choice, ChoiceError> {
    let text = raw.trim_end_matches(['\n', '\r']);
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ChoiceError::NotDigits);
    }

    let significant = text.trim_start_matches('0');
    if significant.is_empty() {
        return Ok(Choice::GiveUp);
    }

    let cell = match significant.as_bytes() {
        [digit] => Cell::from_number(digit - b'0'),
        _ => None,
    }
    .ok_or(ChoiceError::OutOfRange)?;

    if !board.is_empty(cell) {
        return Err(ChoiceError::Occupied(cell));
    }

    Ok(Choice::Cell(cell))
}

/// Input/output seam used to ask the human for a move.
pub trait Console {
    /// Shows `prompt` and reads one line. Returns `Ok(None)` once input is exhausted.
    fn request(&mut self, prompt: &str) -> std::io::Result<Option<String>>;

    /// Shows a line of text.
    fn notify(&mut self, text: &str) -> std::io::Result<()>;
}

/// Console input could not be read.
#[derive(Debug, Clone, Display, Error)]
#[display("Input error: {} at {}:{}", message, file, line)]
pub struct InputError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl InputError {
    /// Creates a new input error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for InputError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

/// Asks until the human types `0` or a free cell.
///
/// Each rejected line is answered with the matching notice before asking
/// again.
///
/// # Errors
///
/// Returns [`InputError`] if the console fails or runs out of input.
#[instrument(skip(board, console))]
pub fn request_choice(board: &Board, console: &mut impl Console) -> Result<Choice, InputError> {
    loop {
        let Some(raw) = console.request(CHOICE_PROMPT)? else {
            return Err(InputError::new("Input closed before a move was chosen"));
        };

        match validate_choice(&raw, board) {
            Ok(choice) => {
                debug!(%choice, "Accepted choice");
                return Ok(choice);
            }
            Err(rejection) => {
                debug!(input = %raw.trim_end(), ?rejection, "Rejected choice");
                console.notify(&rejection.to_string())?;
            }
        }
    }
}
