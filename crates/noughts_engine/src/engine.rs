//! Turn engine: alternates the human and the robot on a single board.

use super::action::{Move, TurnError};
use super::board::Board;
use super::choice::Choice;
use super::invariants::{EngineInvariants, InvariantSet};
use super::opponent::HeuristicOpponent;
use super::types::{GameStatus, PlayerDescriptor, Side};
use derive_getters::Getters;
use rand::Rng;
use tracing::{debug, info, instrument};

/// What happened during one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Round {
    /// The human's move.
    human: Choice,
    /// The robot's reply; `None` when the human's move ended the game.
    robot: Option<Choice>,
    /// Status after the round.
    status: GameStatus,
}

impl Round {
    /// True when the round ended the game.
    pub fn ended(&self) -> bool {
        self.status.is_over()
    }
}

/// Owns the board and runs the human-then-robot round structure.
///
/// The engine is the only mutator of its board. The random source is used
/// only for the robot's fallback move.
#[derive(Debug, Clone)]
pub struct TurnEngine<R> {
    board: Board,
    human: PlayerDescriptor,
    robot: PlayerDescriptor,
    opponent: HeuristicOpponent,
    status: GameStatus,
    turn: u32,
    history: Vec<Move>,
    rng: R,
}

impl<R: Rng> TurnEngine<R> {
    /// Creates an engine with an empty board on turn 1.
    #[instrument(skip(rng))]
    pub fn new(
        human: PlayerDescriptor,
        robot: PlayerDescriptor,
        opponent: HeuristicOpponent,
        rng: R,
    ) -> Self {
        Self {
            board: Board::new(),
            human,
            robot,
            opponent,
            status: GameStatus::InProgress,
            turn: 1,
            history: Vec::new(),
            rng,
        }
    }

    /// Applies one side's choice and reports whether the game ended.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::GameOver`] once the game has ended and
    /// [`TurnError::CellOccupied`] for a marked cell. The board is left
    /// untouched in both cases.
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn apply_turn(&mut self, choice: Choice, side: Side) -> Result<bool, TurnError> {
        if self.status.is_over() {
            return Err(TurnError::GameOver);
        }

        let cell = match choice {
            Choice::GiveUp => {
                info!(?side, "Side gave up");
                self.status = GameStatus::Abandoned(side);
                return Ok(true);
            }
            Choice::Cell(cell) => cell,
        };

        if !self.board.is_empty(cell) {
            return Err(TurnError::CellOccupied(cell));
        }

        let mark = *self.player(side).mark();
        self.board.place(cell, mark);
        self.history.push(Move::new(side, cell));

        if let Some(line) = self.board.winning_line(mark) {
            info!(last = %Move::new(side, cell), line, "Line completed");
            self.board.mark_winning_line(line, mark);
            self.status = GameStatus::Won(side);
            return Ok(true);
        }

        if !self.board.has_free_cell() {
            info!("Board full, draw");
            self.status = GameStatus::Draw;
            return Ok(true);
        }

        Ok(false)
    }

    /// Runs the heuristic for the robot on the current board.
    #[instrument(skip(self))]
    pub fn robot_choice(&mut self) -> Choice {
        let own = *self.robot.mark();
        let rival = *self.human.mark();
        self.opponent.choose(&self.board, own, rival, &mut self.rng)
    }

    /// Plays a full round: the human's validated choice, then the robot's
    /// reply unless the game already ended.
    ///
    /// The turn counter advances only when neither move ended the game.
    ///
    /// # Errors
    ///
    /// Propagates [`TurnError`] from [`TurnEngine::apply_turn`].
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn play_round(&mut self, human: Choice) -> Result<Round, TurnError> {
        if self.apply_turn(human, Side::Human)? {
            return Ok(Round {
                human,
                robot: None,
                status: self.status,
            });
        }

        let robot = self.robot_choice();
        debug!(%robot, "Robot chose");
        if !self.apply_turn(robot, Side::Robot)? {
            debug_assert!(
                EngineInvariants::check_all(self).is_ok(),
                "Engine invariants violated"
            );
            self.turn += 1;
        }

        Ok(Round {
            human,
            robot: Some(robot),
            status: self.status,
        })
    }
}

impl<R> TurnEngine<R> {
    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Current round number, starting at 1.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Placements so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the human's descriptor.
    pub fn human(&self) -> &PlayerDescriptor {
        &self.human
    }

    /// Returns the robot's descriptor.
    pub fn robot(&self) -> &PlayerDescriptor {
        &self.robot
    }

    /// Returns the descriptor of `side`.
    pub fn player(&self, side: Side) -> &PlayerDescriptor {
        match side {
            Side::Human => &self.human,
            Side::Robot => &self.robot,
        }
    }

    /// End-of-game text, `None` while the game is in progress.
    pub fn announcement(&self) -> Option<String> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Won(side) => Some(format!("{} wins!!!", self.player(side).name())),
            GameStatus::Draw => Some("A draw".to_string()),
            GameStatus::Abandoned(side) => Some(format!("{} gave up", self.player(side).name())),
        }
    }
}
