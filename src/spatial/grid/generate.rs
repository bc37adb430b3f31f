use rand::Rng;

use super::*;

impl Grid {
    /// Terrain generation: the top half is air, the bottom half is dirt with
    /// humidity 1-5, except cells that roll under `rock_chance` (percent),
    /// which become rock.
    ///
    /// Deterministic for a seeded `rng`.
    pub fn generate<R: Rng>(width: u32, height: u32, rock_chance: u32, rng: &mut R) -> Result<Self> {
        let surface = (height / 2) as i32;
        Self::from_fn(width, height, |coord| {
            if coord.y < surface {
                Cell::air(coord)
            } else if rng.gen_range(1..=100) <= rock_chance {
                Cell::rock(coord)
            } else {
                Cell::dirt(coord, rng.gen_range(1..=5))
            }
        })
    }
}
