use super::*;

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn size(&self) -> usize { self.cells.len() }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x >= 0 && coord.x < self.width as i32 && coord.y >= 0 && coord.y < self.height as i32
    }

    #[inline]
    pub fn check(&self, coord: Coord) -> Result<()> {
        if self.in_bounds(coord) {
            Ok(())
        } else {
            Err(EngineError::OutOfBounds {
                x: coord.x,
                y: coord.y,
                width: self.width,
                height: self.height,
            })
        }
    }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, coord: Coord) -> Result<usize> {
        self.check(coord)?;
        Ok(coord.y as usize * self.width as usize + coord.x as usize)
    }

    #[inline]
    pub fn coord_of(&self, idx: usize) -> Coord {
        let x = (idx % self.width as usize) as i32;
        let y = (idx / self.width as usize) as i32;
        Coord::new(x, y)
    }
}
