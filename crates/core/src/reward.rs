//! Reward module - the rare, timed bonus pickup
//!
//! A reward is inactive most of the time. While inactive, every tick it gets
//! one Bernoulli draw to appear; once active it counts down and disappears at
//! zero unless the snake eats it first.
//!
//! | Tier | Points |
//! |------|--------|
//! | Small | 50 |
//! | Medium | 100 |
//! | Large | 200 |

use crate::error::CoreError;
use crate::grid::Grid;
use crate::place::place_random_free_cell;
use crate::rng::SimpleRng;
use crate::types::{Cell, RewardTier};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reward {
    position: Cell,
    active: bool,
    remaining_ticks: u32,
    tier: RewardTier,
    spawn_chance: f64,
    duration: u32,
}

impl Reward {
    /// An inactive reward with the given activation chance and lifetime
    pub fn new(spawn_chance: f64, duration: u32) -> Self {
        Self {
            position: Cell::default(),
            active: false,
            remaining_ticks: 0,
            tier: RewardTier::Small,
            spawn_chance,
            duration,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    pub fn tier(&self) -> RewardTier {
        self.tier
    }

    pub fn points(&self) -> u32 {
        self.tier.points()
    }

    pub fn remaining_ticks(&self) -> u32 {
        self.remaining_ticks
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Active reward at the given location; lets callers stage scenarios.
    pub fn activate_at(&mut self, position: Cell, tier: RewardTier) {
        self.position = position;
        self.tier = tier;
        self.active = true;
        self.remaining_ticks = self.duration;
    }

    /// Roll for activation.
    ///
    /// No-op returning `Ok(false)` while already active. On a successful draw
    /// the tier is chosen uniformly, then a free cell. If the grid has no free
    /// cell the reward stays inactive and `NoFreeCell` is returned.
    pub fn maybe_spawn<I>(
        &mut self,
        grid: &Grid,
        excluded: I,
        rng: &mut SimpleRng,
    ) -> Result<bool, CoreError>
    where
        I: IntoIterator<Item = Cell>,
    {
        if self.active {
            return Ok(false);
        }
        if !rng.next_chance(self.spawn_chance) {
            return Ok(false);
        }

        let tier = RewardTier::from_index(rng.next_range(3)).unwrap_or(RewardTier::Small);
        let position = place_random_free_cell(grid, excluded, rng)?;
        self.activate_at(position, tier);
        Ok(true)
    }

    /// Count down one tick. Returns true when the reward expired on this tick.
    pub fn tick(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
        if self.remaining_ticks == 0 {
            self.active = false;
            return true;
        }
        false
    }

    /// Collect the reward, returning its points. `None` if nothing is active.
    pub fn consume(&mut self) -> Option<u32> {
        if !self.active {
            return None;
        }
        self.active = false;
        self.remaining_ticks = 0;
        Some(self.points())
    }
}
