//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, terminal rendering, input mapping, persistence).
//!
//! # Grid
//!
//! The playfield is a fixed grid of cells addressed as `(x, y)`:
//!
//! - **x** grows to the right, `0 <= x < width`
//! - **y** grows downwards, `0 <= y < height`
//! - The default 40x30 grid is the classic 800x600 window at 20 pixels per cell
//!
//! # Tuning Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_SPEED` | 10 | Ticks per second at the start of a run |
//! | `INITIAL_LENGTH` | 3 | Body length of a fresh snake |
//! | `FOOD_POINTS` | 10 | Points per food |
//! | `SPEED_STEP_POINTS` | 50 | Every multiple of this crossed adds one tick per second |
//! | `REWARD_SPAWN_CHANCE` | 0.005 | Per-tick probability that an inactive reward appears |
//! | `REWARD_DURATION_TICKS` | 150 | Ticks a reward stays on the board |
//! | `SCOREBOARD_CAPACITY` | 10 | Entries kept on the high-score board |
//! | `MAX_NAME_LEN` | 10 | Maximum characters in a high-score name |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Cell, Direction, RewardTier};
//!
//! let head = Cell::new(5, 5);
//! assert_eq!(head.step(Direction::Right), Cell::new(6, 5));
//!
//! // Reversal detection
//! assert!(Direction::Left.is_opposite(Direction::Right));
//! assert!(!Direction::Up.is_opposite(Direction::Right));
//!
//! // Tier points
//! assert_eq!(RewardTier::Large.points(), 200);
//! ```

/// Default grid width in cells (40 columns)
pub const GRID_WIDTH: i32 = 40;

/// Default grid height in cells (30 rows)
pub const GRID_HEIGHT: i32 = 30;

/// Ticks per second at the start of every run
pub const BASE_SPEED: u32 = 10;

/// Body length of a freshly spawned snake
pub const INITIAL_LENGTH: usize = 3;

/// Points awarded for each food eaten
pub const FOOD_POINTS: u32 = 10;

/// Speed increases by one each time the score crosses a multiple of this value
pub const SPEED_STEP_POINTS: u32 = 50;

/// Per-tick Bernoulli probability that an inactive reward activates
pub const REWARD_SPAWN_CHANCE: f64 = 0.005;

/// Number of ticks an active reward stays on the board before expiring
pub const REWARD_DURATION_TICKS: u32 = 150;

/// Reward points by tier index (0 = small, 1 = medium, 2 = large)
pub const REWARD_TIER_POINTS: [u32; 3] = [50, 100, 200];

/// Number of entries kept on the high-score board
pub const SCOREBOARD_CAPACITY: usize = 10;

/// Maximum number of characters in a high-score name
pub const MAX_NAME_LEN: usize = 10;

/// Name recorded when the player submits an empty name
pub const DEFAULT_PLAYER_NAME: &str = "Player";


/// A grid cell
///
/// Coordinates are signed so that a step off the edge of the grid is
/// representable; bounds are enforced by the grid, not by this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one unit in `direction`
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Movement direction
///
/// Unit vectors on the grid: **Up** (0,-1), **Down** (0,1), **Left** (-1,0), **Right** (1,0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector `(dx, dy)`
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The exact inverse direction
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Right.opposite(), Direction::Left);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// Actions the driver can feed into the game
///
/// These are produced by the input layer from raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Request a new heading, applied at the next tick
    Turn(Direction),
    /// Toggle between running and paused
    TogglePause,
    /// Start a fresh run
    Restart,
    /// Open or close the high-score board
    ViewScoreboard,
    /// Leave the game
    Quit,
}

/// What the snake ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// The new head left the grid
    Wall,
    /// The new head landed on one of the snake's own segments
    Body,
}

/// Result of advancing the snake by one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Moved,
    Collision(Collision),
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    Collision(Collision),
    /// The snake filled every cell and no food could be placed
    BoardFull,
}

/// Reward categories
///
/// - **Small**: 50 points
/// - **Medium**: 100 points
/// - **Large**: 200 points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RewardTier {
    Small,
    Medium,
    Large,
}

impl RewardTier {
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(RewardTier::Small),
            1 => Some(RewardTier::Medium),
            2 => Some(RewardTier::Large),
            _ => None,
        }
    }

    pub fn index(&self) -> u32 {
        match self {
            RewardTier::Small => 0,
            RewardTier::Medium => 1,
            RewardTier::Large => 2,
        }
    }

    pub fn points(&self) -> u32 {
        REWARD_TIER_POINTS[self.index() as usize]
    }
}

/// Lifecycle phase of a game session
///
/// The simulation only advances in `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Running,
    Paused,
    GameOver,
    ViewingScoreboard,
}

/// Something that happened during one simulation tick
///
/// Events are emitted in the order they occurred so the rendering and
/// audio layers can react to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Moved,
    FoodEaten,
    RewardEaten(u32),
    RewardExpired,
    RewardSpawned,
    GameOver(u32),
}
