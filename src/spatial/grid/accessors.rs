use super::*;

impl Grid {
    #[inline]
    pub fn get(&self, coord: Coord) -> Result<&Cell> {
        let idx = self.index(coord)?;
        Ok(&self.cells[idx])
    }

    #[inline]
    pub fn get_mut(&mut self, coord: Coord) -> Result<&mut Cell> {
        let idx = self.index(coord)?;
        Ok(&mut self.cells[idx])
    }

    /// Kind at `coord`, or `None` outside the grid.
    #[inline]
    pub fn type_at(&self, coord: Coord) -> Option<CellType> {
        self.get(coord).ok().map(Cell::cell_type)
    }

    /// Overwrite the cell at `coord`. The cell is stamped with `coord`.
    #[inline]
    pub fn set(&mut self, coord: Coord, cell: Cell) -> Result<()> {
        self.replace(coord, cell).map(drop)
    }

    /// Overwrite the cell at `coord` and return the one that was there.
    pub fn replace(&mut self, coord: Coord, mut cell: Cell) -> Result<Cell> {
        let idx = self.index(coord)?;
        cell.set_coord(coord);
        Ok(std::mem::replace(&mut self.cells[idx], cell))
    }
}
