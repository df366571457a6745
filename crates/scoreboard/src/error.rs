//! Scoreboard persistence errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreboardError {
    #[error("scoreboard I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("scoreboard JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),
}
