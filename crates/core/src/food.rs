//! Food - the single always-present pickup

use crate::error::CoreError;
use crate::grid::Grid;
use crate::place::place_random_free_cell;
use crate::rng::SimpleRng;
use crate::types::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    position: Cell,
}

impl Food {
    /// Place a new food on a free cell
    pub fn spawn<I>(grid: &Grid, excluded: I, rng: &mut SimpleRng) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = Cell>,
    {
        let position = place_random_free_cell(grid, excluded, rng)?;
        Ok(Self { position })
    }

    /// Food at a fixed cell
    pub fn at(position: Cell) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Move to a random cell outside `excluded`.
    ///
    /// The position is unchanged when no free cell exists.
    pub fn relocate<I>(
        &mut self,
        grid: &Grid,
        excluded: I,
        rng: &mut SimpleRng,
    ) -> Result<(), CoreError>
    where
        I: IntoIterator<Item = Cell>,
    {
        self.position = place_random_free_cell(grid, excluded, rng)?;
        Ok(())
    }
}
