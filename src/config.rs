//! Runtime configuration read from the environment.

use std::env;
use std::path::PathBuf;

use crate::core::GameConfig;

pub const DEFAULT_SCOREBOARD_PATH: &str = "scoreboard.json";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub game: GameConfig,
    /// Fixed RNG seed; `None` seeds from the clock
    pub seed: Option<u32>,
    pub scoreboard_path: PathBuf,
    /// Log file; logging is off when unset
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            seed: None,
            scoreboard_path: PathBuf::from(DEFAULT_SCOREBOARD_PATH),
            log_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let defaults = GameConfig::default();
        let grid_width = non_empty("SNAKE_GRID_WIDTH")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.grid_width);
        let grid_height = non_empty("SNAKE_GRID_HEIGHT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.grid_height);

        let seed = non_empty("SNAKE_SEED").and_then(|s| s.parse().ok());

        let scoreboard_path = non_empty("SNAKE_SCOREBOARD_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SCOREBOARD_PATH));

        let log_path = non_empty("SNAKE_LOG_PATH").map(PathBuf::from);

        Self {
            game: defaults.with_grid(grid_width, grid_height),
            seed,
            scoreboard_path,
            log_path,
        }
    }
}
