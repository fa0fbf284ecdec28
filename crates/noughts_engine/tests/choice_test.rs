//! Tests for typed-move validation and the retry loop.

use noughts_engine::{
    Board, CHOICE_PROMPT, Cell, Choice, ChoiceError, Console, Mark, request_choice,
    validate_choice,
};
use std::collections::VecDeque;

/// Console fed from a fixed script, recording everything shown.
#[derive(Default)]
struct ScriptedConsole {
    input: VecDeque<String>,
    prompts: Vec<String>,
    notices: Vec<String>,
}

impl ScriptedConsole {
    fn new(lines: &[&str]) -> Self {
        Self {
            input: lines.iter().map(|l| format!("{l}\n")).collect(),
            ..Self::default()
        }
    }
}

impl Console for ScriptedConsole {
    fn request(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.input.pop_front())
    }

    fn notify(&mut self, text: &str) -> std::io::Result<()> {
        self.notices.push(text.to_string());
        Ok(())
    }
}

fn occupied_centre() -> Board {
    let mut board = Board::new();
    board.place(Cell::Center, Mark::new('o'));
    board
}

#[test]
fn test_digit_cells_accepted() {
    let board = Board::new();
    for number in 1..=9u8 {
        let expected = Cell::from_number(number).expect("valid cell");
        assert_eq!(
            validate_choice(&number.to_string(), &board),
            Ok(Choice::Cell(expected))
        );
    }
}

#[test]
fn test_zero_always_gives_up() {
    let mut board = Board::new();
    for cell in Cell::ALL {
        board.place(cell, Mark::new('x'));
    }
    assert_eq!(validate_choice("0", &board), Ok(Choice::GiveUp));
    assert_eq!(validate_choice("000", &board), Ok(Choice::GiveUp));
}

#[test]
fn test_leading_zeros_are_ignored() {
    assert_eq!(
        validate_choice("07", &Board::new()),
        Ok(Choice::Cell(Cell::TopLeft))
    );
}

#[test]
fn test_out_of_range_rejected() {
    let board = Board::new();
    for raw in ["10", "99", "123456789012345678901234567890"] {
        let err = validate_choice(raw, &board).unwrap_err();
        assert_eq!(err, ChoiceError::OutOfRange);
        assert_eq!(err.to_string(), "Wrong action, 1-9 or 0.");
    }
}

#[test]
fn test_non_digits_rejected() {
    let board = Board::new();
    for raw in ["a", "", " 5", "5 ", "-1", "+3", "4.0", "٣"] {
        let err = validate_choice(raw, &board).unwrap_err();
        assert_eq!(err, ChoiceError::NotDigits, "input {raw:?}");
        assert_eq!(err.to_string(), "Wrong action, use only digits.");
    }
}

#[test]
fn test_occupied_cell_rejected() {
    let err = validate_choice("5", &occupied_centre()).unwrap_err();
    assert_eq!(err, ChoiceError::Occupied(Cell::Center));
    assert_eq!(err.to_string(), "Cell is occupied, try another.");
}

#[test]
fn test_line_terminator_is_stripped() {
    assert_eq!(
        validate_choice("3\r\n", &Board::new()),
        Ok(Choice::Cell(Cell::BottomRight))
    );
}

#[test]
fn test_request_choice_retries_until_valid() {
    let mut console = ScriptedConsole::new(&["a", "10", "5", "6"]);

    let choice = request_choice(&occupied_centre(), &mut console).expect("valid choice");

    assert_eq!(choice, Choice::Cell(Cell::MiddleRight));
    assert_eq!(
        console.notices,
        vec![
            "Wrong action, use only digits.",
            "Wrong action, 1-9 or 0.",
            "Cell is occupied, try another.",
        ]
    );
    assert_eq!(console.prompts.len(), 4);
    assert!(console.prompts.iter().all(|p| p == CHOICE_PROMPT));
}

#[test]
fn test_request_choice_accepts_give_up() {
    let mut console = ScriptedConsole::new(&["0"]);
    let choice = request_choice(&occupied_centre(), &mut console).expect("valid choice");
    assert_eq!(choice, Choice::GiveUp);
    assert!(console.notices.is_empty());
}

#[test]
fn test_request_choice_fails_when_input_closes() {
    let mut console = ScriptedConsole::new(&["x"]);
    let err = request_choice(&Board::new(), &mut console).unwrap_err();
    assert!(err.message.contains("Input closed"));
    assert_eq!(console.notices, vec!["Wrong action, use only digits."]);
}
