//! Sprout Engine - plant growth simulation on a 2D cell grid, native or WASM
//!
//! Architecture:
//! - core/          - Coordinates, colors, errors
//! - domain/        - Cells and configuration
//! - spatial/       - Grid storage and chunk plan
//! - systems/       - Terrain rules and organisms (sun, plants)
//! - simulation/    - Tick orchestration, commands, render buffers, WASM facade

pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&"🌱 Sprout WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{Coord, EngineError, Rgb};
pub use domain::{Cell, CellKind, CellType, EngineConfig};
pub use simulation::{Engine, PerfStats, World};
pub use spatial::grid::{Grid, Neighborhood};

// Export cell kind codes for JS (values of the types buffer)
#[wasm_bindgen]
pub fn cell_air() -> u8 { CellType::Air.code() }
#[wasm_bindgen]
pub fn cell_dirt() -> u8 { CellType::Dirt.code() }
#[wasm_bindgen]
pub fn cell_rock() -> u8 { CellType::Rock.code() }
#[wasm_bindgen]
pub fn cell_waterdrop() -> u8 { CellType::WaterDrop.code() }
#[wasm_bindgen]
pub fn cell_seed() -> u8 { CellType::Seed.code() }
#[wasm_bindgen]
pub fn cell_stem() -> u8 { CellType::Stem.code() }
#[wasm_bindgen]
pub fn cell_leaf() -> u8 { CellType::Leaf.code() }
#[wasm_bindgen]
pub fn cell_root() -> u8 { CellType::Root.code() }
#[wasm_bindgen]
pub fn cell_wood() -> u8 { CellType::Wood.code() }
#[wasm_bindgen]
pub fn cell_sun() -> u8 { CellType::Sun.code() }
