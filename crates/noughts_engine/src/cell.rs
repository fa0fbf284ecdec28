//! Keypad-numbered cells of the tic-tac-toe board.

use super::board::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the board, numbered like the digits of a numeric keypad.
///
/// ```text
/// 7 8 9
/// 4 5 6
/// 1 2 3
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Cell {
    /// Bottom-left (cell 1)
    BottomLeft,
    /// Bottom-center (cell 2)
    BottomCenter,
    /// Bottom-right (cell 3)
    BottomRight,
    /// Middle-left (cell 4)
    MiddleLeft,
    /// Center (cell 5)
    Center,
    /// Middle-right (cell 6)
    MiddleRight,
    /// Top-left (cell 7)
    TopLeft,
    /// Top-center (cell 8)
    TopCenter,
    /// Top-right (cell 9)
    TopRight,
}

impl Cell {
    /// All 9 cells in ascending keypad number.
    pub const ALL: [Cell; 9] = [
        Cell::BottomLeft,
        Cell::BottomCenter,
        Cell::BottomRight,
        Cell::MiddleLeft,
        Cell::Center,
        Cell::MiddleRight,
        Cell::TopLeft,
        Cell::TopCenter,
        Cell::TopRight,
    ];

    /// Get label for this cell (for logs and messages).
    pub fn label(&self) -> &'static str {
        match self {
            Cell::BottomLeft => "Bottom-left",
            Cell::BottomCenter => "Bottom-center",
            Cell::BottomRight => "Bottom-right",
            Cell::MiddleLeft => "Middle-left",
            Cell::Center => "Center",
            Cell::MiddleRight => "Middle-right",
            Cell::TopLeft => "Top-left",
            Cell::TopCenter => "Top-center",
            Cell::TopRight => "Top-right",
        }
    }

    /// Keypad number of this cell (1-9).
    pub fn number(self) -> u8 {
        match self {
            Cell::BottomLeft => 1,
            Cell::BottomCenter => 2,
            Cell::BottomRight => 3,
            Cell::MiddleLeft => 4,
            Cell::Center => 5,
            Cell::MiddleRight => 6,
            Cell::TopLeft => 7,
            Cell::TopCenter => 8,
            Cell::TopRight => 9,
        }
    }

    /// Creates a cell from its keypad number. `None` outside 1-9.
    #[instrument]
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Cell::BottomLeft),
            2 => Some(Cell::BottomCenter),
            3 => Some(Cell::BottomRight),
            4 => Some(Cell::MiddleLeft),
            5 => Some(Cell::Center),
            6 => Some(Cell::MiddleRight),
            7 => Some(Cell::TopLeft),
            8 => Some(Cell::TopCenter),
            9 => Some(Cell::TopRight),
            _ => None,
        }
    }

    /// Offset into the board's storage array (0-8).
    pub(crate) fn slot(self) -> usize {
        usize::from(self.number() - 1)
    }

    /// Filters cells by board state - returns only empty cells, ascending.
    #[instrument(skip(board))]
    pub fn free_cells(board: &Board) -> Vec<Cell> {
        Self::ALL
            .iter()
            .copied()
            .filter(|cell| board.is_empty(*cell))
            .collect()
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_number_round_trips_for_every_cell() {
        for cell in Cell::iter() {
            assert_eq!(Cell::from_number(cell.number()), Some(cell));
        }
    }

    #[test]
    fn test_from_number_rejects_out_of_range() {
        assert_eq!(Cell::from_number(0), None);
        assert_eq!(Cell::from_number(10), None);
    }

    #[test]
    fn test_all_is_ascending() {
        let numbers: Vec<u8> = Cell::ALL.iter().map(|c| c.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }
}
