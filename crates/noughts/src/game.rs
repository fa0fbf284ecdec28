//! Game loop between the console and the turn engine.

use crate::config::GameConfig;
use anyhow::Result;
use noughts_engine::{Board, Choice, Console, GameStatus, TurnEngine, request_choice};
use rand::Rng;
use tracing::{debug, info, instrument};

/// Prompt for the optional name override.
pub const NAME_PROMPT: &str = "Enter your name (or skip to use default):";

/// Plays one game on `console` and returns how it ended.
///
/// When `ask_name` is set the human may replace the configured name before
/// the first turn; a blank answer keeps it.
///
/// # Errors
///
/// Fails if the console cannot be read or written.
#[instrument(skip_all, fields(ask_name))]
pub fn run_game<C: Console, R: Rng>(
    config: &GameConfig,
    ask_name: bool,
    console: &mut C,
    rng: R,
) -> Result<GameStatus> {
    console.notify("Hello. Let's play Tic-Tac-Toe")?;
    console.notify("Cells numbered like digits at keyboard")?;
    console.notify(&Board::keypad_guide())?;

    let mut config = config.clone();
    if ask_name
        && let Some(answer) = console.request(NAME_PROMPT)?
        && !answer.trim().is_empty()
    {
        config = config.with_human_name(answer.trim());
    }
    info!(human = %config.human_name(), robot = %config.robot_name(), "Starting game");

    let mut engine = TurnEngine::new(config.human(), config.robot(), config.opponent(), rng);

    loop {
        console.notify(&engine.board().to_string())?;
        console.notify(&format!("Turn #{}: {}", engine.turn(), engine.human().name()))?;

        let choice = request_choice(engine.board(), console)?;
        let round = engine.play_round(choice)?;
        debug!(?round, "Round played");

        if let Some(Choice::Cell(cell)) = round.robot() {
            console.notify(&format!("{} takes {}", engine.robot().name(), cell))?;
        }

        if let Some(announcement) = engine.announcement() {
            console.notify(&engine.board().to_string())?;
            console.notify(&announcement)?;
            return Ok(engine.status());
        }
    }
}
