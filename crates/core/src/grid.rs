//! Grid module - the coordinate space of the playfield
//!
//! Coordinates: (x, y) where x ranges 0..width (left to right), y ranges
//! 0..height (top to bottom). Cells are indexed row-major (y * width + x).

use crate::types::{Cell, GRID_HEIGHT, GRID_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    /// Create a grid; negative dimensions are clamped to an empty grid
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of cells
    pub fn area(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    /// Flat row-major index, `None` when out of bounds
    #[inline(always)]
    pub fn index(&self, cell: Cell) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        Some((cell.y as usize) * (self.width as usize) + (cell.x as usize))
    }

    /// Inverse of [`Grid::index`]
    pub fn cell_at(&self, index: usize) -> Option<Cell> {
        if index >= self.area() {
            return None;
        }
        let w = self.width as usize;
        Some(Cell::new((index % w) as i32, (index / w) as i32))
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(GRID_WIDTH, GRID_HEIGHT)
    }
}
