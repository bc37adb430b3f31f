//! WaterDrop - a falling point mass.
//!
//! One row per tick, straight down, while the cell below is air. On dirt the
//! drop hands its humidity over; on anything else (or at the bottom edge) it
//! just stops. Either way the drop is consumed: its cell turns back into air.

use crate::core::{Coord, Result};
use crate::domain::{CellKind, CellType};
use crate::spatial::grid::Grid;

use super::air::lit_air;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Moved one row down.
    Fell { to: Coord },
    /// Stopped on dirt, which absorbed the humidity.
    Soaked { dirt: Coord, humidity: u32 },
    /// Stopped on a non-absorbing cell, or on the bottom edge (`on == None`).
    Landed { on: Option<Coord>, humidity: u32 },
    /// Not a falling drop.
    Idle,
}

/// Advance the drop at `at` by one tick.
pub fn fall(grid: &mut Grid, at: Coord, light_source: Option<Coord>) -> Result<DropOutcome> {
    let humidity = match grid.get(at)?.kind() {
        CellKind::WaterDrop { humidity, stopped: false } => *humidity,
        _ => return Ok(DropOutcome::Idle),
    };

    let below = at.below();
    match grid.type_at(below) {
        Some(CellType::Air) => {
            let drop = grid.replace(at, lit_air(at, light_source))?;
            grid.set(below, drop)?;
            Ok(DropOutcome::Fell { to: below })
        }
        Some(CellType::Dirt) => {
            grid.get_mut(below)?.add_humidity(humidity);
            grid.set(at, lit_air(at, light_source))?;
            Ok(DropOutcome::Soaked { dirt: below, humidity })
        }
        other => {
            grid.set(at, lit_air(at, light_source))?;
            Ok(DropOutcome::Landed {
                on: other.map(|_| below),
                humidity,
            })
        }
    }
}
