//! Plant - the growth state machine.
//!
//! A plant starts as a single seed holding some water and sunlight. Every
//! tick it ages, collects sunlight from the air around it and, when it can
//! afford it, grows one organ (see [`grow`]).

use std::fmt;

use tracing::trace;

use crate::core::{Coord, Result};
use crate::domain::CellType;
use crate::spatial::grid::{Grid, Neighborhood};

use super::{Body, Template, UpdateContext};

mod grow;

pub const SEED_WATER: u32 = 10;
pub const SEED_SUNLIGHT: f32 = 10.0;
pub const GROWTH_WATER_COST: u32 = 2;
pub const GROWTH_SUNLIGHT_COST: f32 = 6.0;
pub const PLANT_NEIGHBORHOOD: Neighborhood = Neighborhood::Moore;

/// What a growth step produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Growth {
    Stem(Coord),
    Leaf(Coord),
    Root { at: Coord, humidity: u32 },
    /// No valid target this tick. The cost is still paid.
    Nothing,
}

#[derive(Debug, Clone)]
pub struct Plant {
    body: Body,
    age: u64,
    water: u32,
    sunlight: f32,
}

pub fn key_for(anchor: Coord) -> String {
    format!("plant({},{})", anchor.x, anchor.y)
}

impl Plant {
    /// Plant a seed at `anchor`, overwriting whatever is there.
    pub fn sow(grid: &mut Grid, anchor: Coord) -> Result<Self> {
        let mut body = Body::new(key_for(anchor), anchor, Template::singleton(), CellType::Seed);
        body.generate_from_template(grid)?;
        Ok(Self {
            body,
            age: 0,
            water: SEED_WATER,
            sunlight: SEED_SUNLIGHT,
        })
    }

    #[inline]
    pub fn body(&self) -> &Body {
        &self.body
    }

    #[inline]
    pub fn age(&self) -> u64 {
        self.age
    }

    #[inline]
    pub fn water(&self) -> u32 {
        self.water
    }

    #[inline]
    pub fn sunlight(&self) -> f32 {
        self.sunlight
    }

    /// Take in water from outside, e.g. a drop landing on the plant.
    pub fn absorb(&mut self, humidity: u32) {
        self.water = self.water.saturating_add(humidity);
    }

    #[inline]
    pub fn can_grow(&self) -> bool {
        self.water > 1 && self.sunlight >= GROWTH_SUNLIGHT_COST
    }

    #[cfg(test)]
    pub(crate) fn set_resources(&mut self, water: u32, sunlight: f32) {
        self.water = water;
        self.sunlight = sunlight;
    }

    /// Half the mean sunlight of the air around the plant, or zero.
    fn sunlight_income(&self, grid: &Grid) -> Result<f32> {
        let lit: Vec<f32> = self
            .body
            .adjacent_unique(grid, PLANT_NEIGHBORHOOD)?
            .into_iter()
            .filter_map(|c| grid.get(c).ok().and_then(|cell| cell.sunlight()))
            .collect();
        if lit.is_empty() {
            return Ok(0.0);
        }
        let mean = lit.iter().sum::<f32>() / lit.len() as f32;
        Ok(if mean > 0.0 { mean / 2.0 } else { 0.0 })
    }

    /// One tick. `None` means the plant could not afford to grow.
    pub fn update(&mut self, ctx: &mut UpdateContext) -> Result<Option<Growth>> {
        self.age += 1;
        self.sunlight += self.sunlight_income(ctx.grid)?;

        let growth = if self.can_grow() {
            let growth = grow::grow(self, ctx)?;
            self.water = self.water.saturating_sub(GROWTH_WATER_COST);
            self.sunlight = (self.sunlight - GROWTH_SUNLIGHT_COST).max(0.0);
            Some(growth)
        } else {
            None
        };

        self.body.write_back(ctx.grid)?;
        trace!(frame = ctx.frame, ?growth, "{}", self);
        Ok(growth)
    }
}

impl fmt::Display for Plant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} age: {} water: {} sunlight: {} cells: {}",
            self.body.key(),
            self.age,
            self.water,
            self.sunlight,
            self.body.members().len()
        )
    }
}
