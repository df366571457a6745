//! Core errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Every cell of the grid is excluded
    #[error("no free cell left on the grid")]
    NoFreeCell,

    #[error("grid {width}x{height} is out of range (need at least 4x1, at most 32766 per side)")]
    InvalidGrid { width: i32, height: i32 },

    #[error("invalid snake body: {0}")]
    InvalidBody(String),

    #[error("invalid game config: {0}")]
    InvalidConfig(String),
}
