//! The 3x3 board and its winning-line catalogue.

use super::cell::Cell;
use super::types::{Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace, warn};

/// The eight winning lines, in catalogue order.
///
/// Cells inside a line are listed in ascending keypad number.
pub const WINNING_LINES: [[Cell; 3]; 8] = [
    // Rows
    [Cell::TopLeft, Cell::TopCenter, Cell::TopRight],
    [Cell::MiddleLeft, Cell::Center, Cell::MiddleRight],
    [Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight],
    // Columns
    [Cell::BottomLeft, Cell::MiddleLeft, Cell::TopLeft],
    [Cell::BottomCenter, Cell::Center, Cell::TopCenter],
    [Cell::BottomRight, Cell::MiddleRight, Cell::TopRight],
    // Diagonals
    [Cell::BottomRight, Cell::Center, Cell::TopLeft],
    [Cell::BottomLeft, Cell::Center, Cell::TopRight],
];

/// Rows as drawn on screen, top to bottom.
const ROWS: [[Cell; 3]; 3] = [WINNING_LINES[0], WINNING_LINES[1], WINNING_LINES[2]];

/// How many cells of one winning line hold a given mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineScore {
    /// Index into [`WINNING_LINES`].
    pub line: usize,
    /// Number of the line's cells holding the mark (0-3).
    pub matches: usize,
}

/// 3x3 tic-tac-toe board addressed by keypad cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares ordered by keypad number (cell 1 first).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given cell.
    pub fn get(&self, cell: Cell) -> Square {
        self.squares[cell.slot()]
    }

    /// Places a mark. Occupancy is the caller's responsibility.
    #[instrument(skip(self))]
    pub fn place(&mut self, cell: Cell, mark: Mark) {
        self.squares[cell.slot()] = Square::Occupied(mark);
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell) == Square::Empty
    }

    /// True while at least one cell is empty.
    pub fn has_free_cell(&self) -> bool {
        self.squares.iter().any(|s| *s == Square::Empty)
    }

    /// Returns all squares, cell 1 first.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Counts `mark` on every winning line, in catalogue order.
    #[instrument(skip(self))]
    pub fn evaluate_lines(&self, mark: Mark) -> [LineScore; 8] {
        let mut scores = [LineScore { line: 0, matches: 0 }; 8];
        for (line, cells) in WINNING_LINES.iter().enumerate() {
            let matches = cells
                .iter()
                .filter(|cell| self.get(**cell) == Square::Occupied(mark))
                .count();
            scores[line] = LineScore { line, matches };
        }
        trace!(?scores, "Evaluated lines");
        scores
    }

    /// Index of the line `mark` has completed, if any.
    ///
    /// Picks the first best-scoring line in catalogue order and reports it
    /// only when all three of its cells match.
    #[instrument(skip(self))]
    pub fn winning_line(&self, mark: Mark) -> Option<usize> {
        let scores = self.evaluate_lines(mark);
        let mut best = scores[0];
        for score in &scores[1..] {
            if score.matches > best.matches {
                best = *score;
            }
        }
        (best.matches == 3).then_some(best.line)
    }

    /// Rewrites every cell of a line with the upper-cased mark.
    #[instrument(skip(self))]
    pub fn mark_winning_line(&mut self, line: usize, mark: Mark) {
        let Some(cells) = WINNING_LINES.get(line) else {
            warn!(line, "No such winning line");
            return;
        };
        for cell in cells {
            self.squares[cell.slot()] = Square::Occupied(mark.upper());
        }
    }

    /// Renders cell numbers in place of marks, for the start-up help.
    pub fn keypad_guide() -> String {
        render(|cell| char::from(b'0' + cell.number()))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render(|cell| self.get(cell).glyph()))
    }
}

fn render(glyph: impl Fn(Cell) -> char) -> String {
    let mut out = String::from("┌───────┐\n");
    for [a, b, c] in ROWS {
        out.push_str(&format!("│ {} {} {} │\n", glyph(a), glyph(b), glyph(c)));
    }
    out.push_str("└───────┘");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Mark = Mark::new('x');
    const O: Mark = Mark::new('o');

    fn board_with(cells: &[(u8, Mark)]) -> Board {
        let mut board = Board::new();
        for (number, mark) in cells {
            let cell = Cell::from_number(*number).expect("valid cell");
            board.place(cell, *mark);
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(Board::new().winning_line(X), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[(7, X), (8, X), (9, X)]);
        assert_eq!(board.winning_line(X), Some(0));
        assert_eq!(board.winning_line(O), None);
    }

    #[test]
    fn test_winner_second_diagonal() {
        let board = board_with(&[(9, O), (5, O), (1, O)]);
        assert_eq!(board.winning_line(O), Some(7));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[(7, X), (8, X), (9, O)]);
        assert_eq!(board.winning_line(X), None);
    }

    #[test]
    fn test_two_complete_lines_reports_lower_index() {
        // Left column (3) and bottom row (2) both complete.
        let board = board_with(&[(1, X), (2, X), (3, X), (4, X), (7, X)]);
        assert_eq!(board.winning_line(X), Some(2));
    }

    #[test]
    fn test_evaluate_lines_is_catalogue_ordered() {
        let board = board_with(&[(5, X), (1, X), (9, O)]);
        let scores = board.evaluate_lines(X);
        let lines: Vec<usize> = scores.iter().map(|s| s.line).collect();
        assert_eq!(lines, (0..8).collect::<Vec<_>>());
        let counts: Vec<usize> = scores.iter().map(|s| s.matches).collect();
        assert_eq!(counts, vec![0, 1, 1, 1, 1, 0, 1, 2]);
    }

    #[test]
    fn test_upper_case_marks_do_not_count() {
        let mut board = board_with(&[(7, X), (8, X), (9, X)]);
        board.mark_winning_line(0, X);
        assert_eq!(board.winning_line(X), None);
        assert_eq!(board.winning_line(X.upper()), Some(0));
    }

    #[test]
    fn test_has_free_cell() {
        let mut board = Board::new();
        assert!(board.has_free_cell());
        for (i, cell) in Cell::ALL.iter().enumerate() {
            assert!(board.has_free_cell());
            board.place(*cell, if i % 2 == 0 { X } else { O });
        }
        assert!(!board.has_free_cell());
    }

    #[test]
    fn test_display_renders_keypad_rows() {
        let board = board_with(&[(7, X), (5, O), (3, X)]);
        let expected = "┌───────┐\n│ x . . │\n│ . o . │\n│ . . x │\n└───────┘";
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn test_keypad_guide() {
        let expected = "┌───────┐\n│ 7 8 9 │\n│ 4 5 6 │\n│ 1 2 3 │\n└───────┘";
        assert_eq!(Board::keypad_guide(), expected);
    }

    #[test]
    fn test_mark_unknown_line_is_ignored() {
        let mut board = board_with(&[(7, X)]);
        let before = board.clone();
        board.mark_winning_line(8, X);
        assert_eq!(board, before);
    }
}
