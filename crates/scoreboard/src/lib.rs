//! High-score board for tui-snake
//!
//! [`HighScoreTable`] keeps the best ten runs in memory. [`ScoreboardFile`]
//! persists it as JSON and implements the core [`Scoreboard`] trait, so a
//! finished run can be checked and recorded without the simulation knowing
//! about files.
//!
//! ```
//! use tui_snake_scoreboard::{sanitize_name, HighScoreTable};
//!
//! let mut table = HighScoreTable::new();
//! assert_eq!(table.insert(&sanitize_name("ann!"), 120), Some(0));
//! assert_eq!(table.entries()[0].name, "ann");
//! ```

pub mod error;
pub mod file;
pub mod table;

pub use tui_snake_core::Scoreboard;
pub use tui_snake_types as types;

pub use error::ScoreboardError;
pub use file::ScoreboardFile;
pub use table::{sanitize_name, HighScoreTable, ScoreEntry};
