//! Command-line interface for noughts.

use crate::config::{ConfigError, GameConfig};
use clap::Parser;
use noughts_engine::DefenseMode;
use std::path::PathBuf;
use tracing::instrument;

/// Noughts - tic-tac-toe against a very basic robot
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Console tic-tac-toe against a very basic robot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (names, marks, robot behaviour)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Your display name; skips the name prompt
    #[arg(short, long)]
    pub name: Option<String>,

    /// Let the robot give up when it spots a fork it cannot block
    #[arg(long)]
    pub robot_gives_up: bool,

    /// Seed for the robot's random moves (defaults to the clock)
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    /// Loads the config file, if any, and applies command-line overrides.
    #[instrument(skip(self), fields(config = ?self.config))]
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(name) = &self.name {
            config = config.with_human_name(name.as_str());
        }
        if self.robot_gives_up {
            config = config.with_defense(DefenseMode::GiveUp);
        }
        Ok(config)
    }
}
