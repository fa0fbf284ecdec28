//! Noughts - console tic-tac-toe against a very basic robot.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use noughts::{Cli, TerminalConsole, run_game};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::io;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = cli.game_config()?;
    let seed = cli.seed.unwrap_or_else(clock_seed);
    info!(seed, "Seeding random moves");

    let mut console = TerminalConsole::new(io::stdin().lock(), io::stdout().lock());
    let status = run_game(
        &config,
        cli.name.is_none(),
        &mut console,
        SmallRng::seed_from_u64(seed),
    )?;

    info!(?status, "Game over");
    Ok(())
}

/// Seed derived from the wall clock.
#[instrument]
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
