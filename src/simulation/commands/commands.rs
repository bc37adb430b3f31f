use tracing::debug;

use crate::core::{Coord, EngineError, Result};
use crate::domain::{Cell, CellType};
use crate::systems::organisms::plant::key_for;
use crate::systems::organisms::{Organism, Plant};

use super::Engine;

fn rejected(what: &'static str, at: Coord, reason: impl Into<String>) -> EngineError {
    EngineError::InvalidSpawn {
        what,
        x: at.x,
        y: at.y,
        reason: reason.into(),
    }
}

/// Plant a seed. Only valid on dirt; the seed goes to the top of the column
/// under `at`, i.e. the first cell with air above it, which must be dirt too.
pub(super) fn spawn_plant(engine: &mut Engine, at: Coord) -> Result<String> {
    let target = engine.grid.get(at)?.cell_type();
    if target != CellType::Dirt {
        return Err(rejected("plant", at, format!("{target} is not dirt")));
    }

    let mut anchor = at;
    while anchor.y > 0 && engine.grid.type_at(anchor.above()) != Some(CellType::Air) {
        anchor = anchor.above();
    }

    let key = key_for(anchor);
    if engine.organisms.iter().any(|o| o.key() == key) {
        return Err(rejected("plant", anchor, format!("{key} already exists")));
    }
    match engine.grid.type_at(anchor) {
        Some(CellType::Dirt) => {}
        Some(surface) => {
            return Err(rejected("plant", anchor, format!("surface is {surface}, not dirt")));
        }
        None => return Err(rejected("plant", anchor, "no surface")),
    }

    let plant = Plant::sow(&mut engine.grid, anchor)?;
    debug!(%key, clicked = %at, "plant spawned");
    engine.organisms.push(Organism::Plant(plant));
    Ok(key)
}

/// Release a water drop. Only valid over air.
pub(super) fn spawn_waterdrop(engine: &mut Engine, at: Coord) -> Result<()> {
    let target = engine.grid.get(at)?.cell_type();
    if target != CellType::Air {
        return Err(rejected("waterdrop", at, format!("{target} is not air")));
    }
    engine.grid.set(at, Cell::water_drop(at))?;
    debug!(at = %at, "water drop spawned");
    Ok(())
}

pub(super) fn cell_info_json(engine: &Engine, at: Coord) -> Result<String> {
    Ok(serde_json::to_string(engine.grid.get(at)?)?)
}

pub(super) fn organisms_json(engine: &Engine) -> Result<String> {
    Ok(serde_json::to_string(&engine.organism_summaries())?)
}
