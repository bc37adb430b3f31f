use tracing::trace;

use crate::core::Result;
use crate::systems::organisms::{Growth, Organism, UpdateContext};
use crate::systems::terrain::process_terrain;

use super::{render_extract, Engine, PerfTimer};

pub(super) fn step(engine: &mut Engine) -> Result<()> {
    let perf_on = engine.perf_enabled;
    let step_start = PerfTimer::start(perf_on);

    let stats = &mut engine.perf_stats;
    stats.reset();
    stats.frame = engine.frame;
    stats.grid_size = engine.grid.size() as u32;

    // === TERRAIN: lighting and falling water, chunked ===
    let light = engine.organisms.iter().find_map(Organism::light_source);
    let t0 = PerfTimer::start(perf_on);
    let report = process_terrain(&mut engine.grid, light)?;
    engine.perf_stats.terrain_ms = t0.elapsed_ms();

    // Drops that came to rest on a plant feed it.
    let mut absorbed = report.drops_soaked;
    for landing in &report.landings {
        let owner = engine
            .organisms
            .iter_mut()
            .filter_map(Organism::as_plant_mut)
            .find(|plant| plant.body().owns(landing.on));
        if let Some(plant) = owner {
            plant.absorb(landing.humidity);
            absorbed += 1;
        }
    }

    // === ORGANISMS: sequential, insertion order ===
    let t0 = PerfTimer::start(perf_on);
    let mut growth_events = 0u32;
    let mut ctx = UpdateContext {
        grid: &mut engine.grid,
        rng: &mut engine.rng,
        frame: engine.frame,
    };
    for organism in engine.organisms.iter_mut() {
        if let Some(growth) = organism.update(&mut ctx)? {
            if growth != Growth::Nothing {
                growth_events += 1;
            }
        }
    }
    engine.perf_stats.organisms_ms = t0.elapsed_ms();

    // === RENDER: frame ready ===
    let t0 = PerfTimer::start(perf_on);
    render_extract::extract(&engine.grid, &mut engine.render);
    engine.perf_stats.render_ms = t0.elapsed_ms();

    let stats = &mut engine.perf_stats;
    stats.chunks = report.chunks as u32;
    stats.relit_cells = report.relit as u32;
    stats.drops_fallen = report.drops_fallen as u32;
    stats.drops_stopped = report.drops_stopped as u32;
    stats.drops_absorbed = absorbed as u32;
    stats.growth_events = growth_events;
    stats.organism_count = engine.organisms.len() as u32;
    stats.step_ms = step_start.elapsed_ms();

    trace!(
        frame = engine.frame,
        relit = report.relit,
        drops = report.drops_fallen,
        growth_events,
        "tick"
    );
    engine.frame += 1;
    Ok(())
}
