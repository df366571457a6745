//! Snake module - body, heading, growth, score and speed
//!
//! The body is an ordered deque with the head at the front. Each step pushes a
//! new head and drops the tail only while the body is longer than the target
//! length, so growth is spread over the following ticks.

use std::collections::VecDeque;

use crate::error::CoreError;
use crate::grid::Grid;
use crate::types::{
    Cell, Collision, Direction, StepOutcome, INITIAL_LENGTH, SPEED_STEP_POINTS,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    grid: Grid,
    /// Head at index 0, tail at the back
    body: VecDeque<Cell>,
    direction: Direction,
    target_length: usize,
    score: u32,
    speed: u32,
}

impl Snake {
    /// A fresh snake: three cells ending at the grid centre, heading right
    pub fn new(grid: Grid, base_speed: u32) -> Self {
        let head = grid.center();
        let body = (0..INITIAL_LENGTH as i32)
            .map(|i| Cell::new(head.x - i, head.y))
            .collect();

        Self {
            grid,
            body,
            direction: Direction::Right,
            target_length: INITIAL_LENGTH,
            score: 0,
            speed: base_speed,
        }
    }

    /// Build a snake from an explicit body (head first).
    ///
    /// The target length starts at `max(body.len(), 3)`.
    pub fn from_body(
        grid: Grid,
        body: impl IntoIterator<Item = Cell>,
        direction: Direction,
        base_speed: u32,
    ) -> Result<Self, CoreError> {
        let body: VecDeque<Cell> = body.into_iter().collect();
        if body.is_empty() {
            return Err(CoreError::InvalidBody("body is empty".into()));
        }
        if let Some(cell) = body.iter().find(|c| !grid.contains(**c)) {
            return Err(CoreError::InvalidBody(format!(
                "segment ({}, {}) is outside the grid",
                cell.x, cell.y
            )));
        }

        let snake = Self {
            grid,
            target_length: body.len().max(INITIAL_LENGTH),
            body,
            direction,
            score: 0,
            speed: base_speed,
        };
        if !snake.body_is_unique() {
            return Err(CoreError::InvalidBody("segments overlap".into()));
        }
        Ok(snake)
    }

    pub fn head(&self) -> Cell {
        // The body is never empty: both constructors reject that and `step`
        // only ever pushes before it pops.
        self.body.front().copied().unwrap_or_default()
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Change heading unless `direction` reverses the current one.
    ///
    /// Returns whether the heading was applied. A reversal is silently
    /// ignored.
    pub fn change_direction(&mut self, direction: Direction) -> bool {
        if self.direction.is_opposite(direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Advance one cell in the current direction.
    ///
    /// On collision the body is left untouched. The tail cell that would be
    /// dropped by this move still counts as occupied.
    pub fn step(&mut self) -> StepOutcome {
        let new_head = self.head().step(self.direction);

        if !self.grid.contains(new_head) {
            return StepOutcome::Collision(Collision::Wall);
        }
        if self.body.iter().skip(1).any(|c| *c == new_head) {
            return StepOutcome::Collision(Collision::Body);
        }

        self.body.push_front(new_head);
        if self.body.len() > self.target_length {
            self.body.pop_back();
        }
        debug_assert!(self.body_is_unique());

        StepOutcome::Moved
    }

    pub fn grow(&mut self, n: usize) {
        self.target_length += n;
    }

    /// Add points; speed rises once per multiple of 50 crossed.
    pub fn add_score(&mut self, points: u32) {
        let old = self.score;
        self.score = self.score.saturating_add(points);
        let crossed = self.score / SPEED_STEP_POINTS - old / SPEED_STEP_POINTS;
        self.speed += crossed;
    }

    /// Tick period for the current speed
    pub fn tick_interval_ms(&self) -> u64 {
        (1000 / self.speed.max(1) as u64).max(1)
    }

    /// True when no two segments share a cell
    pub fn body_is_unique(&self) -> bool {
        // Pairwise so the debug check in `step` stays allocation-free.
        self.body
            .iter()
            .enumerate()
            .all(|(i, a)| self.body.iter().skip(i + 1).all(|b| a != b))
    }
}
