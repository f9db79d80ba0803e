//! Command-line arguments for the terminal game.

use clap::Parser;
use std::path::PathBuf;

use crate::core::{GameConfig, Player};
use crate::error::ConfigError;

#[derive(Parser, Debug)]
#[command(name = "rust-reversi")]
#[command(about = "Two-player Reversi in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board side length (asked interactively when omitted)
    #[arg(short, long)]
    pub dimension: Option<usize>,

    /// Player who moves first: 1 (X) or 2 (O)
    #[arg(short, long, value_parser = parse_player)]
    pub first_player: Option<Player>,

    /// TOML configuration file; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

fn parse_player(text: &str) -> Result<Player, String> {
    text.trim()
        .parse::<u8>()
        .ok()
        .and_then(Player::from_number)
        .ok_or_else(|| format!("expected 1 or 2, got {text:?}"))
}

impl Cli {
    /// Check whether the board size still has to be asked for.
    #[must_use]
    pub fn needs_dimension_prompt(&self) -> bool {
        self.dimension.is_none() && self.config.is_none()
    }

    /// Merge the config file (if any) with the flags and validate the result.
    pub fn resolve_config(&self) -> Result<GameConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };
        if let Some(dimension) = self.dimension {
            config.dimension = dimension;
        }
        if let Some(player) = self.first_player {
            config.first_player = player;
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["rust-reversi"]).unwrap();
        assert!(cli.needs_dimension_prompt());
        assert_eq!(cli.resolve_config().unwrap(), GameConfig::default());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from(["rust-reversi", "--dimension", "6", "--first-player", "2"])
            .unwrap();
        assert!(!cli.needs_dimension_prompt());

        let config = cli.resolve_config().unwrap();
        assert_eq!(config.dimension, 6);
        assert_eq!(config.first_player, Player::Two);
    }

    #[test]
    fn test_bad_player_rejected() {
        assert!(Cli::try_parse_from(["rust-reversi", "-f", "3"]).is_err());
    }

    #[test]
    fn test_out_of_range_dimension_rejected() {
        let cli = Cli::try_parse_from(["rust-reversi", "-d", "1"]).unwrap();
        assert!(matches!(cli.resolve_config(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reversi.toml");
        std::fs::write(&path, "dimension = 10\nfirst_player = \"Two\"").unwrap();

        let path = path.to_str().unwrap();
        let cli = Cli::try_parse_from(["rust-reversi", "--config", path, "-d", "4"]).unwrap();
        let config = cli.resolve_config().unwrap();

        assert_eq!(config.dimension, 4);
        assert_eq!(config.first_player, Player::Two);
    }
}
