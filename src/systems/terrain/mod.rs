//! Terrain pass - per-tick update of every grid cell.
//!
//! The grid is split into row bands ([`ChunkPlan`]) that run concurrently
//! (rayon, `parallel` feature). Inside a band a cell only ever mutates
//! itself: air relights in place, dirt and rock are static. Falling drops
//! touch a second cell, so bands only stage them in a per-chunk log; a
//! sequential merge phase then moves them, bottom rows first.

pub mod air;
pub mod water;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::{Coord, Result};
use crate::domain::{Cell, CellKind};
use crate::spatial::chunks::ChunkPlan;
use crate::spatial::grid::Grid;

use water::DropOutcome;

/// A drop that came to rest on something other than dirt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Landing {
    pub on: Coord,
    pub humidity: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TerrainReport {
    pub chunks: usize,
    pub relit: usize,
    pub drops_fallen: usize,
    pub drops_stopped: usize,
    pub drops_soaked: usize,
    pub landings: Vec<Landing>,
}

#[derive(Default)]
struct ChunkLog {
    relit: usize,
    falling: Vec<Coord>,
}

/// Update one band of cells. Touches nothing outside `cells`.
fn update_chunk(cells: &mut [Cell], light_source: Option<Coord>) -> ChunkLog {
    let mut log = ChunkLog::default();
    for cell in cells.iter_mut() {
        match cell.kind {
            CellKind::Air { .. } => {
                if air::relight(cell, light_source) {
                    log.relit += 1;
                }
            }
            CellKind::WaterDrop { stopped: false, .. } => log.falling.push(cell.coord),
            // Dirt only changes through events; everything else is static
            // here or driven by its organism.
            _ => {}
        }
    }
    log
}

pub fn process_terrain(grid: &mut Grid, light_source: Option<Coord>) -> Result<TerrainReport> {
    let plan = ChunkPlan::new(grid.width(), grid.height());
    let chunk_len = plan.chunk_len();

    #[cfg(feature = "parallel")]
    let logs: Vec<ChunkLog> = grid
        .cells_mut()
        .par_chunks_mut(chunk_len)
        .map(|chunk| update_chunk(chunk, light_source))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let logs: Vec<ChunkLog> = grid
        .cells_mut()
        .chunks_mut(chunk_len)
        .map(|chunk| update_chunk(chunk, light_source))
        .collect();

    debug_assert_eq!(logs.len(), plan.chunk_count());
    let mut report = TerrainReport {
        chunks: plan.chunk_count(),
        ..TerrainReport::default()
    };

    let mut falling = Vec::new();
    for log in logs {
        report.relit += log.relit;
        falling.extend(log.falling);
    }

    // Merge phase: bottom rows first, so a column of drops falls together.
    falling.sort_by(|a, b| b.y.cmp(&a.y).then(a.x.cmp(&b.x)));
    for at in falling {
        match water::fall(grid, at, light_source)? {
            DropOutcome::Fell { .. } => report.drops_fallen += 1,
            DropOutcome::Soaked { .. } => {
                report.drops_stopped += 1;
                report.drops_soaked += 1;
            }
            DropOutcome::Landed { on, humidity } => {
                report.drops_stopped += 1;
                if let Some(on) = on {
                    report.landings.push(Landing { on, humidity });
                }
            }
            DropOutcome::Idle => {}
        }
    }

    Ok(report)
}
