//! Entity placement - uniform random free cells
//!
//! Food and rewards both land on a cell that no snake segment occupies.
//! Sparse boards are handled by rejection sampling; once more than half of
//! the grid is taken the free cells are enumerated instead so the draw stays
//! bounded. A fully occupied grid is reported as [`CoreError::NoFreeCell`].

use crate::error::CoreError;
use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::types::Cell;

/// Pick a uniformly random cell of `grid` that is not in `excluded`.
///
/// Out-of-bounds and duplicate entries in `excluded` are ignored.
pub fn place_random_free_cell<I>(
    grid: &Grid,
    excluded: I,
    rng: &mut SimpleRng,
) -> Result<Cell, CoreError>
where
    I: IntoIterator<Item = Cell>,
{
    let area = grid.area();
    let bound = u32::try_from(area).map_err(|_| CoreError::InvalidGrid {
        width: grid.width(),
        height: grid.height(),
    })?;

    let mut occupied = vec![false; area];
    let mut taken = 0usize;
    for cell in excluded {
        if let Some(i) = grid.index(cell) {
            if !occupied[i] {
                occupied[i] = true;
                taken += 1;
            }
        }
    }

    let free = area - taken;
    if free == 0 {
        return Err(CoreError::NoFreeCell);
    }

    if taken * 2 <= area {
        loop {
            let i = rng.next_range(bound) as usize;
            if !occupied[i] {
                return grid.cell_at(i).ok_or(CoreError::NoFreeCell);
            }
        }
    }

    let pick = rng.next_range(free as u32) as usize;
    occupied
        .iter()
        .enumerate()
        .filter(|(_, used)| !**used)
        .nth(pick)
        .and_then(|(i, _)| grid.cell_at(i))
        .ok_or(CoreError::NoFreeCell)
}
