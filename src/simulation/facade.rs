use wasm_bindgen::prelude::*;

use crate::core::{Coord, EngineError};
use crate::domain::EngineConfig;

use super::perf_stats::PerfStats;
use super::Engine;

#[wasm_bindgen]
pub struct World {
    core: Engine,
}

#[wasm_bindgen]
impl World {
    /// Create a new world with generated terrain and the sun.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, rock_chance_percent: u32) -> Result<World, JsError> {
        let config = EngineConfig {
            width,
            height,
            rock_chance_percent,
            ..EngineConfig::default()
        };
        Ok(Self { core: Engine::new(config)? })
    }

    /// Create a world from a JSON `EngineConfig`; missing fields take defaults.
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<World, JsError> {
        let config = EngineConfig::from_json(json)?;
        Ok(Self { core: Engine::new(config)? })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn cell_size(&self) -> u32 { self.core.config().cell_size }

    /// Milliseconds between ticks at the configured rate.
    #[wasm_bindgen(getter)]
    pub fn tick_interval_ms(&self) -> f64 {
        self.core.config().tick_interval().as_secs_f64() * 1000.0
    }

    #[wasm_bindgen(getter)]
    pub fn organism_count(&self) -> u32 { self.core.organisms().len() as u32 }

    /// Enable or disable per-tick timings
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last tick perf snapshot
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.stats().clone()
    }

    /// Advance one tick
    pub fn tick(&mut self) -> Result<(), JsError> {
        self.core.tick()?;
        Ok(())
    }

    /// Plant a seed on dirt. Returns false if the click was not valid for it.
    pub fn spawn_plant(&mut self, x: u32, y: u32) -> Result<bool, JsError> {
        accepted(self.core.spawn_plant(coord(x, y)).map(drop))
    }

    /// Drop water into the air. Returns false if the cell is not air.
    pub fn spawn_waterdrop(&mut self, x: u32, y: u32) -> Result<bool, JsError> {
        accepted(self.core.spawn_waterdrop(coord(x, y)))
    }

    /// JSON description of the cell at (x, y), for click inspection
    pub fn cell_info(&self, x: u32, y: u32) -> Result<String, JsError> {
        Ok(self.core.cell_info_json(coord(x, y))?)
    }

    pub fn organisms_json(&self) -> Result<String, JsError> {
        Ok(self.core.organisms_json()?)
    }

    /// Get pointer to types array (for JS rendering)
    pub fn types_ptr(&self) -> *const u8 { self.core.types_ptr() }

    /// Get pointer to colors array (for JS rendering)
    pub fn colors_ptr(&self) -> *const u32 { self.core.colors_ptr() }

    pub fn types_len(&self) -> usize { self.core.types_len() }

    pub fn colors_len(&self) -> usize { self.core.colors_len() }

    pub fn colors_len_bytes(&self) -> usize { self.core.colors_len_bytes() }
}

impl World {
    pub fn engine(&self) -> &Engine {
        &self.core
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.core
    }
}

#[inline]
fn coord(x: u32, y: u32) -> Coord {
    Coord::new(x.min(i32::MAX as u32) as i32, y.min(i32::MAX as u32) as i32)
}

/// Rejected spawns and clicks outside the grid are `false`; anything else
/// is a real failure.
fn accepted(result: crate::core::Result<()>) -> Result<bool, JsError> {
    match result {
        Ok(()) => Ok(true),
        Err(EngineError::InvalidSpawn { .. } | EngineError::OutOfBounds { .. }) => Ok(false),
        Err(err) => Err(err.into()),
    }
}
