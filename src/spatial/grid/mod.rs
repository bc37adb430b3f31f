//! Grid - dense row-major storage of exactly one [`Cell`] per coordinate.
//!
//! The grid owns every terrain cell. Organisms keep their own member cells
//! and write them back here each tick (last writer wins). There is no delete:
//! a cell disappears only when something else is written at its coordinate.

use crate::core::{Coord, EngineError, Result};
use crate::domain::{Cell, CellType};

mod accessors;
mod generate;
mod indexing;
mod neighbors;

pub use neighbors::Neighborhood;

pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid by asking `make` for the cell at every coordinate,
    /// row by row from the top.
    pub fn from_fn(width: u32, height: u32, mut make: impl FnMut(Coord) -> Cell) -> Result<Self> {
        if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(EngineError::InvalidDimensions { width, height });
        }

        let size = (width as usize) * (height as usize);
        let mut cells = Vec::with_capacity(size);
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let coord = Coord::new(x, y);
                let mut cell = make(coord);
                cell.set_coord(coord);
                cells.push(cell);
            }
        }

        Ok(Self { width, height, cells })
    }

    /// Grid where every cell is a fresh cell of one kind.
    pub fn filled(width: u32, height: u32, cell_type: CellType) -> Result<Self> {
        Self::from_fn(width, height, |coord| Cell::create(cell_type, coord))
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    pub fn count(&self, cell_type: CellType) -> usize {
        self.cells.iter().filter(|c| c.is(cell_type)).count()
    }
}
