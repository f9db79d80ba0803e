//! Game configuration.
//!
//! A `GameConfig` names the board size and the opening player. It can be
//! built in code with the `with_*` methods or loaded from TOML:
//!
//! ```toml
//! dimension = 8
//! first_player = "One"
//! ```
//!
//! Missing keys fall back to the defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::player::Player;
use crate::error::ConfigError;

/// Smallest playable board.
pub const MIN_DIMENSION: usize = 2;

/// Largest board the text renderer lays out cleanly.
pub const MAX_DIMENSION: usize = 26;

/// Board size used when nothing else is specified.
pub const DEFAULT_DIMENSION: usize = 8;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square board.
    pub dimension: usize,

    /// Player who makes the first move.
    pub first_player: Player,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            first_player: Player::One,
        }
    }
}

impl GameConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board dimension.
    #[must_use]
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    /// Set the opening player.
    #[must_use]
    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&self.dimension) {
            return Err(ConfigError::Validation(format!(
                "dimension must be in [{}, {}], got {}",
                MIN_DIMENSION, MAX_DIMENSION, self.dimension
            )));
        }
        Ok(())
    }

    /// Render the default configuration as TOML (for example config files).
    pub fn default_toml() -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(&GameConfig::default())?)
    }
}
