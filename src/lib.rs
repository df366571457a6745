//! TUI Snake (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_snake::{core, input, scoreboard, term, types}`
//! and holds the pieces only the binary needs: environment config and log setup.

pub mod config;
pub mod logging;

pub use tui_snake_core as core;
pub use tui_snake_input as input;
pub use tui_snake_scoreboard as scoreboard;
pub use tui_snake_term as term;
pub use tui_snake_types as types;

pub use config::AppConfig;
