//! Growth step, evaluated in priority order:
//!
//! 1. a lone seed always grows a stem straight up;
//! 2. water-rich plants (`sunlight < water`) flip a coin between a stem and a leaf;
//! 3. everything else grows a root into the wettest dirt below it.
//!
//! An empty candidate set is `Growth::Nothing`, never an error.

use std::cmp::Reverse;
use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::{Coord, Result};
use crate::domain::{Cell, CellType};

use super::{Growth, Plant, UpdateContext, PLANT_NEIGHBORHOOD};

pub(super) fn grow(plant: &mut Plant, ctx: &mut UpdateContext) -> Result<Growth> {
    if plant.body.members().len() == 1 {
        return Ok(grow_stem(plant, ctx));
    }
    if plant.sunlight < plant.water as f32 {
        if ctx.rng.gen_bool(0.5) {
            Ok(grow_stem(plant, ctx))
        } else {
            grow_leaf(plant, ctx)
        }
    } else {
        grow_root(plant, ctx)
    }
}

/// One row above the topmost stem, or above the seed if there is none yet.
fn grow_stem(plant: &mut Plant, ctx: &mut UpdateContext) -> Growth {
    let members = plant.body.members();
    let from = members
        .iter()
        .filter(|m| m.is(CellType::Stem))
        .map(Cell::coord)
        .min_by_key(|c| c.y)
        .or_else(|| members.iter().find(|m| m.is(CellType::Seed)).map(Cell::coord))
        .unwrap_or_else(|| plant.body.anchor());

    let target = from.above();
    if target.y < 0 || !ctx.grid.in_bounds(target) {
        return Growth::Nothing;
    }
    plant.body.place(Cell::stem(target));
    Growth::Stem(target)
}

/// Lowest adjacent air cell outside the rows held by stems; leftmost wins.
fn grow_leaf(plant: &mut Plant, ctx: &mut UpdateContext) -> Result<Growth> {
    let stem_rows: BTreeSet<i32> = plant
        .body
        .members()
        .iter()
        .filter(|m| m.is(CellType::Stem))
        .map(|m| m.coord().y)
        .collect();

    let target = plant
        .body
        .adjacent_unique(ctx.grid, PLANT_NEIGHBORHOOD)?
        .into_iter()
        .filter(|c| !stem_rows.contains(&c.y))
        .filter(|&c| ctx.grid.type_at(c) == Some(CellType::Air))
        .max_by_key(|c| (c.y, Reverse(c.x)));

    Ok(match target {
        Some(at) => {
            plant.body.place(Cell::create(CellType::Leaf, at));
            Growth::Leaf(at)
        }
        None => Growth::Nothing,
    })
}

/// Wettest adjacent dirt at or below the plant's lowest row. The dirt's
/// humidity moves into the plant and a root takes its place.
fn grow_root(plant: &mut Plant, ctx: &mut UpdateContext) -> Result<Growth> {
    let Some(lowest) = plant.body.lowest_row() else {
        return Ok(Growth::Nothing);
    };

    let wet: Vec<(Coord, u32)> = plant
        .body
        .adjacent_unique(ctx.grid, PLANT_NEIGHBORHOOD)?
        .into_iter()
        .filter(|c| c.y >= lowest)
        .filter_map(|c| {
            let cell = ctx.grid.get(c).ok()?;
            if cell.is(CellType::Dirt) {
                cell.humidity().map(|h| (c, h))
            } else {
                None
            }
        })
        .collect();

    let Some(best) = wet.iter().map(|&(_, h)| h).max() else {
        return Ok(Growth::Nothing);
    };
    let wettest: Vec<Coord> = wet.iter().filter(|&&(_, h)| h == best).map(|&(c, _)| c).collect();
    let Some(&at) = wettest.choose(&mut *ctx.rng) else {
        return Ok(Growth::Nothing);
    };

    plant.absorb(best);
    plant.body.place(Cell::create(CellType::Root, at));
    Ok(Growth::Root { at, humidity: best })
}
