use super::*;

/// Neighbor policy. Each organism type commits to one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighborhood {
    /// All eight surrounding cells.
    Moore,
    /// Up, down, left, right.
    Orthogonal,
}

const MOORE: [(i32, i32); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

impl Neighborhood {
    #[inline]
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Neighborhood::Moore => &MOORE,
            Neighborhood::Orthogonal => &MOORE[..4],
        }
    }
}

impl Grid {
    /// In-bounds neighbor coordinates of `coord` under `policy`.
    /// Fails if `coord` itself is outside the grid.
    pub fn neighbors(&self, coord: Coord, policy: Neighborhood) -> Result<Vec<Coord>> {
        self.check(coord)?;
        Ok(policy
            .offsets()
            .iter()
            .map(|&(dx, dy)| coord.offset(dx, dy))
            .filter(|&c| self.in_bounds(c))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::filled(5, 5, CellType::Air).unwrap()
    }

    #[test]
    fn interior_cell_neighbor_counts() {
        let g = grid();
        assert_eq!(g.neighbors(Coord::new(2, 2), Neighborhood::Moore).unwrap().len(), 8);
        assert_eq!(g.neighbors(Coord::new(2, 2), Neighborhood::Orthogonal).unwrap().len(), 4);
    }

    #[test]
    fn corner_neighbors_are_clamped_to_the_grid() {
        let g = grid();
        let moore = g.neighbors(Coord::new(0, 0), Neighborhood::Moore).unwrap();
        assert_eq!(moore.len(), 3);
        assert!(moore.contains(&Coord::new(1, 1)));

        let ortho = g.neighbors(Coord::new(4, 4), Neighborhood::Orthogonal).unwrap();
        assert_eq!(ortho.len(), 2);
        assert!(ortho.contains(&Coord::new(3, 4)));
        assert!(ortho.contains(&Coord::new(4, 3)));
    }

    #[test]
    fn orthogonal_excludes_diagonals() {
        let g = grid();
        let ortho = g.neighbors(Coord::new(2, 2), Neighborhood::Orthogonal).unwrap();
        assert!(ortho.iter().all(|c| c.x == 2 || c.y == 2));
        assert!(!ortho.contains(&Coord::new(2, 2)));
    }

    #[test]
    fn neighbors_of_out_of_bounds_coord_fail() {
        assert!(grid().neighbors(Coord::new(5, 0), Neighborhood::Moore).is_err());
    }
}
