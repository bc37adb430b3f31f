//! Sun - a drifting light source.
//!
//! A 7x7 disc of sun cells that moves one column right every tick. When its
//! right edge would leave the grid it wraps back to a fixed column and
//! regenerates from its template. Air is lit from the disc's center.

use tracing::debug;

use crate::core::{Coord, Result};
use crate::domain::CellType;
use crate::spatial::grid::Grid;
use crate::systems::terrain::air::lit_air;

use super::{Body, Template, UpdateContext};

pub const SUN_KEY: &str = "sun";
pub const SUN_ANCHOR: Coord = Coord::new(5, 5);
pub const SUN_WRAP_COLUMN: i32 = 5;

const SUN_MASK: [[u8; 7]; 7] = [
    [0, 0, 1, 1, 1, 0, 0],
    [0, 1, 1, 1, 1, 1, 0],
    [1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1],
    [0, 1, 1, 1, 1, 1, 0],
    [0, 0, 1, 1, 1, 0, 0],
];

#[derive(Debug, Clone)]
pub struct Sun {
    body: Body,
}

impl Sun {
    pub fn template() -> Template {
        Template::from_rows(&SUN_MASK)
    }

    /// Whether the disc fits at its anchor inside the air half of `grid`.
    pub fn fits(grid: &Grid) -> bool {
        let t = Self::template();
        SUN_ANCHOR.x + t.width() <= grid.width() as i32
            && SUN_ANCHOR.y + t.height() <= (grid.height() / 2) as i32
    }

    /// Place the disc at its anchor.
    pub fn rise(grid: &mut Grid) -> Result<Self> {
        let mut body = Body::new(SUN_KEY, SUN_ANCHOR, Self::template(), CellType::Sun);
        body.generate_from_template(grid)?;
        Ok(Self { body })
    }

    #[inline]
    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn light_source(&self) -> Coord {
        let (cx, cy) = self.body.template().center();
        self.body.anchor().offset(cx, cy)
    }

    pub fn update(&mut self, ctx: &mut UpdateContext) -> Result<()> {
        let anchor = self.body.anchor();
        let width = self.body.template().width();
        let mut next = anchor.offset(1, 0);
        let wrapped = next.x + width > ctx.grid.width() as i32;
        if wrapped {
            next = Coord::new(SUN_WRAP_COLUMN, anchor.y);
        }

        let (cx, cy) = self.body.template().center();
        let light = Some(next.offset(cx, cy));

        // Whatever still shows the old disc turns back into air.
        for member in self.body.members() {
            let at = member.coord();
            if ctx.grid.type_at(at) == Some(CellType::Sun) {
                ctx.grid.set(at, lit_air(at, light))?;
            }
        }

        self.body.set_anchor(next);
        if wrapped {
            debug!(frame = ctx.frame, column = next.x, "sun wrapped");
            self.body.generate_from_template(ctx.grid)
        } else {
            let dx = next.x - anchor.x;
            for member in self.body.members_mut() {
                let to = member.coord().offset(dx, 0);
                member.set_coord(to);
            }
            self.body.write_back(ctx.grid)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn sky(width: u32, height: u32) -> Grid {
        Grid::filled(width, height, CellType::Air).unwrap()
    }

    fn step(sun: &mut Sun, grid: &mut Grid) {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut ctx = UpdateContext { grid, rng: &mut rng, frame: 0 };
        sun.update(&mut ctx).unwrap();
    }

    #[test]
    fn disc_has_37_cells_centered_at_eight_eight() {
        let mut grid = sky(30, 30);
        let sun = Sun::rise(&mut grid).unwrap();
        assert_eq!(sun.body().members().len(), 37);
        assert_eq!(grid.count(CellType::Sun), 37);
        assert_eq!(sun.light_source(), Coord::new(8, 8));
        assert!(grid.get(Coord::new(8, 8)).unwrap().is(CellType::Sun));
        assert!(grid.get(Coord::new(5, 5)).unwrap().is_air());
    }

    #[test]
    fn fits_only_inside_the_air_half() {
        assert!(Sun::fits(&sky(30, 24)));
        assert!(!Sun::fits(&sky(30, 22)));
        assert!(!Sun::fits(&sky(11, 40)));
        assert!(Sun::fits(&sky(12, 40)));
    }

    #[test]
    fn drifts_one_column_and_restores_air() {
        let mut grid = sky(30, 30);
        let mut sun = Sun::rise(&mut grid).unwrap();

        step(&mut sun, &mut grid);
        assert_eq!(sun.body().anchor(), Coord::new(6, 5));
        assert_eq!(sun.light_source(), Coord::new(9, 8));
        assert_eq!(grid.count(CellType::Sun), 37);
        // Left tip of the middle row is air again, lit from the new center.
        let vacated = grid.get(Coord::new(5, 8)).unwrap();
        assert!(vacated.is_air());
        assert_eq!(vacated.sunlight(), Some(100.0 - 4.0 * 1.2));
        assert!(grid.get(Coord::new(12, 8)).unwrap().is(CellType::Sun));
    }

    #[test]
    fn wraps_to_fixed_column_at_right_edge() {
        let mut grid = sky(14, 30);
        let mut sun = Sun::rise(&mut grid).unwrap();

        // Anchor 5 -> 6 -> 7 fits (7 + 7 = 14), the next step wraps.
        step(&mut sun, &mut grid);
        step(&mut sun, &mut grid);
        assert_eq!(sun.body().anchor().x, 7);
        step(&mut sun, &mut grid);
        assert_eq!(sun.body().anchor(), SUN_ANCHOR);
        assert_eq!(grid.count(CellType::Sun), 37);
        for member in sun.body().members() {
            assert!(grid.get(member.coord()).unwrap().is(CellType::Sun));
        }
    }
}
