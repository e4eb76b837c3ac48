use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "blocky_config.json";

/// Draws a random player makes before giving up on finding a legal move.
pub const DEFAULT_MAX_RETRIES: usize = 10_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub max_depth: usize,
    pub max_turns: usize,
    pub num_games: usize,
    pub random_players: usize,
    /// One smart player per entry, with that difficulty.
    pub smart_difficulties: Vec<usize>,
    pub max_retries: usize,
    /// Fixed seed for reproducible runs; a fresh one is drawn when absent.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config_str = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|_| Self::default())
    }

    pub fn num_players(&self) -> usize {
        self.random_players + self.smart_difficulties.len()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            max_depth: 4,
            max_turns: 20,
            num_games: 8,
            random_players: 1,
            smart_difficulties: vec![5],
            max_retries: DEFAULT_MAX_RETRIES,
            seed: None,
        }
    }
}
