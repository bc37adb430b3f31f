use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use crate::core::Result;
use crate::domain::EngineConfig;
use crate::spatial::grid::Grid;
use crate::systems::organisms::{Organism, Sun};

use super::perf_stats::PerfStats;
use super::{render_extract, Engine, RenderBuffers};

pub(super) fn create_engine(config: EngineConfig) -> Result<Engine> {
    config.validate()?;
    let seed = config.seed.unwrap_or_else(clock_seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let grid = Grid::generate(config.width, config.height, config.rock_chance_percent, &mut rng)?;

    let mut engine = assemble(config, grid, rng);
    rise_sun(&mut engine)?;
    render_extract::extract(&engine.grid, &mut engine.render);

    info!(
        width = engine.grid.width(),
        height = engine.grid.height(),
        seed,
        organisms = engine.organisms.len(),
        "engine created"
    );
    Ok(engine)
}

pub(super) fn create_engine_with_grid(grid: Grid, seed: u64) -> Engine {
    let config = EngineConfig {
        width: grid.width(),
        height: grid.height(),
        seed: Some(seed),
        ..EngineConfig::default()
    };
    let mut engine = assemble(config, grid, ChaCha8Rng::seed_from_u64(seed));
    render_extract::extract(&engine.grid, &mut engine.render);
    engine
}

fn assemble(config: EngineConfig, grid: Grid, rng: ChaCha8Rng) -> Engine {
    let size = grid.size();
    Engine {
        config,
        grid,
        organisms: Vec::new(),
        rng,
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        render: RenderBuffers {
            types: vec![0u8; size],
            colors: vec![0u32; size],
        },
    }
}

pub(super) fn rise_sun(engine: &mut Engine) -> Result<bool> {
    if engine.organisms.iter().any(|o| matches!(o, Organism::Sun(_))) {
        return Ok(false);
    }
    if !Sun::fits(&engine.grid) {
        warn!(
            width = engine.grid.width(),
            height = engine.grid.height(),
            "grid too small for the sun, air stays dark"
        );
        return Ok(false);
    }
    let sun = Sun::rise(&mut engine.grid)?;
    engine.organisms.push(Organism::Sun(sun));
    Ok(true)
}

/// Seed for runs without a configured one.
fn clock_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Date::now() * 1000.0) as u64 ^ 0x9E37_79B9_7F4A_7C15
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default()
            ^ 0x9E37_79B9_7F4A_7C15
    }
}
