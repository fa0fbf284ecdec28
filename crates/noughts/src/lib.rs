//! Noughts - console tic-tac-toe against a very basic robot
//!
//! Presentation layer over [`noughts_engine`]: command line, TOML config,
//! a line-based console and the game loop.
//!
//! # Example
//!
//! ```
//! use noughts::{GameConfig, TerminalConsole, run_game};
//! use noughts_engine::GameStatus;
//! use rand::SeedableRng;
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut console = TerminalConsole::new("0\n".as_bytes(), Vec::new());
//! let rng = rand::rngs::SmallRng::seed_from_u64(1);
//! let status = run_game(&GameConfig::default(), false, &mut console, rng)?;
//! assert!(matches!(status, GameStatus::Abandoned(_)));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod game;

pub use cli::Cli;
pub use config::{ConfigError, GameConfig};
pub use console::TerminalConsole;
pub use game::{NAME_PROMPT, run_game};
