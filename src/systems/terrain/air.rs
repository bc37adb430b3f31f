//! Air lighting - distance-based.
//!
//! Every air cell holds `sunlight = 100 - 1.2 * manhattan(cell, light)`.
//! The value is cached together with the light position it was computed
//! for, so a cell is only recomputed after the light source has moved.

use crate::core::Coord;
use crate::domain::cell::air_color;
use crate::domain::{Cell, CellKind};

pub const MAX_SUNLIGHT: f32 = 100.0;
pub const FALLOFF_PER_CELL: f32 = 1.2;

#[inline]
pub fn sunlight_at(coord: Coord, light_source: Coord) -> f32 {
    MAX_SUNLIGHT - coord.manhattan(light_source) as f32 * FALLOFF_PER_CELL
}

/// Recompute an air cell's sunlight and color for `light_source`.
/// Returns true if anything was recomputed.
pub fn relight(cell: &mut Cell, light_source: Option<Coord>) -> bool {
    let Some(source) = light_source else {
        return false;
    };
    let coord = cell.coord;
    let CellKind::Air { sunlight, light_source: cached } = &mut cell.kind else {
        return false;
    };
    if *cached == Some(source) {
        return false;
    }

    *cached = Some(source);
    *sunlight = sunlight_at(coord, source);
    cell.color = air_color(*sunlight);
    true
}

/// Fresh air cell, already lit for `light_source`.
pub fn lit_air(coord: Coord, light_source: Option<Coord>) -> Cell {
    let mut cell = Cell::air(coord);
    relight(&mut cell, light_source);
    cell
}
