//! Terminal input module.
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::GameAction`] and provides the line editor used
//! to type a name for a new high score.

pub mod map;
pub mod name;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};
pub use name::{NameEntry, NameInput};
