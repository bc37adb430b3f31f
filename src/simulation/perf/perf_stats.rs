use wasm_bindgen::prelude::*;

/// Snapshot of one tick. Timings stay zero unless perf metrics are enabled.
#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct PerfStats {
    pub(super) frame: u64,
    pub(super) step_ms: f64,
    pub(super) terrain_ms: f64,
    pub(super) organisms_ms: f64,
    pub(super) render_ms: f64,
    pub(super) chunks: u32,
    pub(super) relit_cells: u32,
    pub(super) drops_fallen: u32,
    pub(super) drops_stopped: u32,
    pub(super) drops_absorbed: u32,
    pub(super) growth_events: u32,
    pub(super) organism_count: u32,
    pub(super) grid_size: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn terrain_ms(&self) -> f64 { self.terrain_ms }
    #[wasm_bindgen(getter)]
    pub fn organisms_ms(&self) -> f64 { self.organisms_ms }
    #[wasm_bindgen(getter)]
    pub fn render_ms(&self) -> f64 { self.render_ms }
    #[wasm_bindgen(getter)]
    pub fn chunks(&self) -> u32 { self.chunks }
    #[wasm_bindgen(getter)]
    pub fn relit_cells(&self) -> u32 { self.relit_cells }
    #[wasm_bindgen(getter)]
    pub fn drops_fallen(&self) -> u32 { self.drops_fallen }
    #[wasm_bindgen(getter)]
    pub fn drops_stopped(&self) -> u32 { self.drops_stopped }
    /// Drops whose humidity went into dirt or a plant.
    #[wasm_bindgen(getter)]
    pub fn drops_absorbed(&self) -> u32 { self.drops_absorbed }
    #[wasm_bindgen(getter)]
    pub fn growth_events(&self) -> u32 { self.growth_events }
    #[wasm_bindgen(getter)]
    pub fn organism_count(&self) -> u32 { self.organism_count }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
}
