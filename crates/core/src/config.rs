//! Simulation tunables

use crate::error::CoreError;
use crate::grid::Grid;
use crate::types::{
    BASE_SPEED, FOOD_POINTS, GRID_HEIGHT, GRID_WIDTH, INITIAL_LENGTH, REWARD_DURATION_TICKS,
    REWARD_SPAWN_CHANCE,
};

/// Largest grid side; two terminal columns per cell plus the border must fit a `u16`
pub const MAX_GRID_SIDE: i32 = (u16::MAX as i32 - 2) / 2;

/// Parameters of a run
///
/// Defaults come from the constants in `tui_snake_types`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub grid_width: i32,
    pub grid_height: i32,
    /// Ticks per second at run start
    pub base_speed: u32,
    pub food_points: u32,
    /// Per-tick activation probability of an inactive reward
    pub reward_spawn_chance: f64,
    /// Ticks a reward stays active unless eaten
    pub reward_duration_ticks: u32,
}

impl GameConfig {
    pub fn with_grid(mut self, width: i32, height: i32) -> Self {
        self.grid_width = width;
        self.grid_height = height;
        self
    }

    pub fn with_reward(mut self, spawn_chance: f64, duration_ticks: u32) -> Self {
        self.reward_spawn_chance = spawn_chance;
        self.reward_duration_ticks = duration_ticks;
        self
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_width, self.grid_height)
    }

    /// Check that a run can start with these parameters.
    ///
    /// The start body lies horizontally left of the centre, so the grid must
    /// be at least `INITIAL_LENGTH + 1` wide; that also guarantees a free cell
    /// for the first food. Neither side may exceed [`MAX_GRID_SIDE`] and the
    /// cell count must fit a `u32`.
    pub fn validate(&self) -> Result<(), CoreError> {
        let min_width = INITIAL_LENGTH as i32 + 1;
        let sides_ok = (min_width..=MAX_GRID_SIDE).contains(&self.grid_width)
            && (1..=MAX_GRID_SIDE).contains(&self.grid_height);
        let area_ok = u32::try_from(i64::from(self.grid_width) * i64::from(self.grid_height)).is_ok();
        if !sides_ok || !area_ok {
            return Err(CoreError::InvalidGrid {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        if self.base_speed == 0 {
            return Err(CoreError::InvalidConfig("base speed must be at least 1".into()));
        }
        if !(0.0..=1.0).contains(&self.reward_spawn_chance) {
            return Err(CoreError::InvalidConfig(format!(
                "reward spawn chance {} is not a probability",
                self.reward_spawn_chance
            )));
        }
        if self.reward_duration_ticks == 0 {
            return Err(CoreError::InvalidConfig(
                "reward duration must be at least 1 tick".into(),
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            base_speed: BASE_SPEED,
            food_points: FOOD_POINTS,
            reward_spawn_chance: REWARD_SPAWN_CHANCE,
            reward_duration_ticks: REWARD_DURATION_TICKS,
        }
    }
}
