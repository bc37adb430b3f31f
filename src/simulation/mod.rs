//! Engine - one simulation tick at a time.
//!
//! Per tick: relight air and move water drops in row-band chunks, hand
//! landed drops to the plants they hit, update organisms in insertion order,
//! then extract the render buffers. The engine is the only handle to the
//! simulation state; nothing here is global.

use rand_chacha::ChaCha8Rng;

use crate::core::{Coord, Result};
use crate::domain::{Cell, EngineConfig};
use crate::spatial::grid::Grid;
use crate::systems::organisms::{Organism, OrganismSummary, Plant};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// Per-cell buffers the renderer reads after every tick.
pub(crate) struct RenderBuffers {
    pub(crate) types: Vec<u8>,
    pub(crate) colors: Vec<u32>,
}

pub struct Engine {
    config: EngineConfig,
    grid: Grid,
    organisms: Vec<Organism>,
    rng: ChaCha8Rng,

    // State
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,

    render: RenderBuffers,
}

impl Engine {
    /// Generate terrain from `config` and raise the sun.
    pub fn new(config: EngineConfig) -> Result<Self> {
        init::create_engine(config)
    }

    /// Wrap an existing grid. No sun is raised; see [`Engine::rise_sun`].
    pub fn with_grid(grid: Grid, seed: u64) -> Self {
        init::create_engine_with_grid(grid, seed)
    }

    /// Add the sun if the grid has room for it. Returns whether it rose.
    pub fn rise_sun(&mut self) -> Result<bool> {
        init::rise_sun(self)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Read-only view of one cell, for drawing and inspection.
    pub fn cell_at(&self, coord: Coord) -> Result<&Cell> {
        self.grid.get(coord)
    }

    /// Advance the simulation by exactly one tick.
    pub fn tick(&mut self) -> Result<()> {
        step::step(self)
    }

    /// Plant a seed on the dirt at `coord`. Returns the new plant's key.
    pub fn spawn_plant(&mut self, coord: Coord) -> Result<String> {
        commands::spawn_plant(self, coord)
    }

    /// Release a water drop into the air at `coord`.
    pub fn spawn_waterdrop(&mut self, coord: Coord) -> Result<()> {
        commands::spawn_waterdrop(self, coord)
    }

    pub fn organisms(&self) -> &[Organism] {
        &self.organisms
    }

    pub fn plant(&self, key: &str) -> Option<&Plant> {
        self.organisms
            .iter()
            .filter(|o| o.key() == key)
            .find_map(Organism::as_plant)
    }

    pub fn organism_summaries(&self) -> Vec<OrganismSummary> {
        self.organisms.iter().map(Organism::summary).collect()
    }

    /// Where the air is lit from this tick, if anything emits light.
    pub fn light_source(&self) -> Option<Coord> {
        self.organisms.iter().find_map(Organism::light_source)
    }

    /// JSON view of the cell at `coord`.
    pub fn cell_info_json(&self, coord: Coord) -> Result<String> {
        commands::cell_info_json(self, coord)
    }

    pub fn organisms_json(&self) -> Result<String> {
        commands::organisms_json(self)
    }

    /// Enable or disable per-tick timings. Counters are always collected.
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.perf_enabled = enabled;
    }

    /// Snapshot of the last tick.
    pub fn stats(&self) -> &PerfStats {
        &self.perf_stats
    }

    /// Get pointer to types array (for JS rendering)
    pub fn types_ptr(&self) -> *const u8 {
        self.render.types.as_ptr()
    }

    /// Get pointer to colors array (for JS rendering)
    pub fn colors_ptr(&self) -> *const u32 {
        self.render.colors.as_ptr()
    }

    pub fn types(&self) -> &[u8] {
        &self.render.types
    }

    pub fn colors(&self) -> &[u32] {
        &self.render.colors
    }

    pub fn types_len(&self) -> usize {
        self.render.types.len()
    }

    pub fn colors_len(&self) -> usize {
        self.render.colors.len()
    }

    pub fn colors_len_bytes(&self) -> usize {
        self.render.colors.len() * std::mem::size_of::<u32>()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
