//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, persistence, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical runs
//! - **Testable**: Unit tests for every rule, scenario tests at the crate root
//! - **Portable**: Can run in any environment (terminal, headless, benches)
//!
//! # Module Structure
//!
//! - [`grid`]: Bounded W x H cell grid
//! - [`snake`]: Body, heading, growth, score and speed progression
//! - [`food`]: The always-present pickup
//! - [`reward`]: Rare timed bonus pickup with three point tiers
//! - [`place`]: Uniform random placement on free cells
//! - [`game_state`]: One run: tick pipeline, phases, high-score handoff
//! - [`rng`]: Seeded LCG used for every random draw
//! - [`scoreboard`]: Trait the run uses to talk to the high-score board
//!
//! # Rules
//!
//! - The snake moves one cell per tick in its heading. Reversing is ignored.
//! - Leaving the grid or running into the body ends the run.
//! - Food is worth 10 points and one segment. Speed goes up by one for every
//!   50-point threshold the score crosses.
//! - While no reward is shown, each tick has a small chance to spawn one.
//!   It vanishes after a fixed number of ticks.
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameConfig, GameState};
//! use tui_snake_types::{Direction, GameAction, GameEvent};
//!
//! let mut game = GameState::new(GameConfig::default(), 12345).unwrap();
//! game.apply_action(GameAction::Turn(Direction::Up));
//!
//! let events = game.tick();
//! assert_eq!(events[0], GameEvent::Moved);
//! assert_eq!(game.snake().direction(), Direction::Up);
//! ```
//!
//! # Timing
//!
//! The core has no clock. The driver calls [`GameState::tick`] once every
//! [`GameState::tick_interval_ms`] milliseconds, which is `1000 / speed`.

pub mod config;
pub mod error;
pub mod food;
pub mod game_state;
pub mod grid;
pub mod place;
pub mod reward;
pub mod rng;
pub mod scoreboard;
pub mod snake;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use config::{GameConfig, MAX_GRID_SIDE};
pub use error::CoreError;
pub use food::Food;
pub use game_state::{GameState, TickEvents};
pub use grid::Grid;
pub use place::place_random_free_cell;
pub use reward::Reward;
pub use rng::SimpleRng;
pub use scoreboard::Scoreboard;
pub use snake::Snake;
pub use snapshot::{GameSnapshot, RewardSnapshot};
