use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

use crate::game::{
    grid::{DEFAULT_GRID_SIZE, DEFAULT_PLACEMENT_ATTEMPTS},
    session::{SessionSettings, DEFAULT_MAX_HINTS},
};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub game: GameConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    pub grid_size: usize,
    pub max_attempts: usize,
    pub max_hints: u32,
    /// JSON word list; the built-in chemistry list is used when unset
    pub word_list_path: Option<String>,
    /// Fixed seed for reproducible boards
    pub seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let grid_size: usize = lookup("GRID_SIZE")
            .unwrap_or_else(|| DEFAULT_GRID_SIZE.to_string())
            .parse()
            .context("GRID_SIZE must be a number")?;
        if grid_size == 0 {
            anyhow::bail!("GRID_SIZE must be at least 1");
        }

        let game = GameConfig {
            grid_size,
            max_attempts: lookup("PLACEMENT_ATTEMPTS")
                .unwrap_or_else(|| DEFAULT_PLACEMENT_ATTEMPTS.to_string())
                .parse()
                .context("PLACEMENT_ATTEMPTS must be a number")?,
            max_hints: lookup("MAX_HINTS")
                .unwrap_or_else(|| DEFAULT_MAX_HINTS.to_string())
                .parse()
                .context("MAX_HINTS must be a number")?,
            word_list_path: lookup("WORD_LIST_PATH").filter(|path| !path.trim().is_empty()),
            seed: match lookup("GAME_SEED") {
                Some(seed) => Some(seed.parse().context("GAME_SEED must be a number")?),
                None => None,
            },
        };

        Ok(Config { game })
    }

    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            grid_size: self.game.grid_size,
            max_attempts: self.game.max_attempts,
            max_hints: self.game.max_hints,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.game.grid_size, 15);
        assert_eq!(config.game.max_attempts, 100);
        assert_eq!(config.game.max_hints, 3);
        assert!(config.game.word_list_path.is_none());
        assert!(config.game.seed.is_none());
        assert_eq!(config.session_settings(), SessionSettings::default());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("GRID_SIZE", "20"),
            ("PLACEMENT_ATTEMPTS", "250"),
            ("MAX_HINTS", "5"),
            ("WORD_LIST_PATH", "./words.json"),
            ("GAME_SEED", "1234"),
        ])
        .unwrap();
        assert_eq!(config.game.grid_size, 20);
        assert_eq!(config.game.max_attempts, 250);
        assert_eq!(config.game.max_hints, 5);
        assert_eq!(config.game.word_list_path.as_deref(), Some("./words.json"));
        assert_eq!(config.game.seed, Some(1234));
    }

    #[test]
    fn test_invalid_values() {
        assert!(config_from(&[("GRID_SIZE", "big")]).is_err());
        assert!(config_from(&[("GRID_SIZE", "0")]).is_err());
        assert!(config_from(&[("GAME_SEED", "-1")]).is_err());
        assert!(config_from(&[("PLACEMENT_ATTEMPTS", "many")]).is_err());
        assert!(config_from(&[("MAX_HINTS", "lots")]).is_err());
    }
}
