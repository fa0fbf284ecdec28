//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use noughts_engine::{
    DefenseMode, EMPTY_GLYPH, HeuristicOpponent, Mark, OpponentConfig, PlayerDescriptor,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Names, marks and robot behaviour for one game.
///
/// Every key is optional in the file; missing keys take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct GameConfig {
    /// Human display name.
    #[setters(into)]
    human_name: String,

    /// Robot display name.
    #[setters(into)]
    robot_name: String,

    /// Human mark (single character).
    human_mark: char,

    /// Robot mark (single character).
    robot_mark: char,

    /// Robot reaction to a fork.
    defense: DefenseMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_name: "Human".to_string(),
            robot_name: "Robot".to_string(),
            human_mark: 'x',
            robot_mark: 'o',
            defense: DefenseMode::default(),
        }
    }
}

impl GameConfig {
    /// Loads and validates configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(human = %config.human_name, robot = %config.robot_name, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that both marks are usable and distinguishable.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (who, mark) in [("human", self.human_mark), ("robot", self.robot_mark)] {
            if mark.is_whitespace() || mark == EMPTY_GLYPH {
                return Err(ConfigError::new(format!(
                    "The {} mark {:?} cannot be told apart from an empty cell",
                    who, mark
                )));
            }
        }
        if self.human_mark == self.robot_mark {
            return Err(ConfigError::new(format!(
                "Human and robot share the mark {:?}",
                self.human_mark
            )));
        }
        // A won line is redrawn upper-cased and must stay distinct.
        let (human, robot) = (Mark::new(self.human_mark), Mark::new(self.robot_mark));
        if human.upper() == robot || robot.upper() == human {
            return Err(ConfigError::new(format!(
                "The marks {:?} and {:?} differ only by case",
                self.human_mark, self.robot_mark
            )));
        }
        Ok(())
    }

    /// Human descriptor built from this config.
    pub fn human(&self) -> PlayerDescriptor {
        PlayerDescriptor::new(self.human_name.as_str(), Mark::new(self.human_mark))
    }

    /// Robot descriptor built from this config.
    pub fn robot(&self) -> PlayerDescriptor {
        PlayerDescriptor::new(self.robot_name.as_str(), Mark::new(self.robot_mark))
    }

    /// Robot heuristic built from this config.
    pub fn opponent(&self) -> HeuristicOpponent {
        HeuristicOpponent::new(OpponentConfig::new(self.defense))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
