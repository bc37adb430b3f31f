//! Organisms - multi-cell entities with their own growth/movement policy.
//!
//! Organisms run after the terrain pass, one at a time in insertion order.
//! Each one mutates its member cells and writes them back into the grid as
//! the last step of its update.

pub mod body;
pub mod plant;
pub mod sun;
pub mod template;

pub use body::Body;
pub use plant::{Growth, Plant};
pub use sun::Sun;
pub use template::Template;

use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::core::{Coord, Result};
use crate::spatial::grid::Grid;

/// Update context handed to every organism
pub struct UpdateContext<'a> {
    pub grid: &'a mut Grid,
    pub rng: &'a mut ChaCha8Rng,
    pub frame: u64,
}

#[derive(Debug, Clone)]
pub enum Organism {
    Sun(Sun),
    Plant(Plant),
}

/// Inspection view of one organism.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrganismSummary {
    pub key: String,
    pub kind: &'static str,
    pub cells: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunlight: Option<f32>,
}

impl Organism {
    #[inline]
    pub fn key(&self) -> &str {
        self.body().key()
    }

    pub fn body(&self) -> &Body {
        match self {
            Organism::Sun(sun) => sun.body(),
            Organism::Plant(plant) => plant.body(),
        }
    }

    /// Advance one tick. Returns the growth attempted by a plant, `None`
    /// for an idle plant or the sun.
    pub fn update(&mut self, ctx: &mut UpdateContext) -> Result<Option<Growth>> {
        match self {
            Organism::Sun(sun) => sun.update(ctx).map(|()| None),
            Organism::Plant(plant) => plant.update(ctx),
        }
    }

    /// Position lighting the air, if this organism emits light.
    pub fn light_source(&self) -> Option<Coord> {
        match self {
            Organism::Sun(sun) => Some(sun.light_source()),
            Organism::Plant(_) => None,
        }
    }

    pub fn as_plant(&self) -> Option<&Plant> {
        match self {
            Organism::Plant(plant) => Some(plant),
            _ => None,
        }
    }

    pub fn as_plant_mut(&mut self) -> Option<&mut Plant> {
        match self {
            Organism::Plant(plant) => Some(plant),
            _ => None,
        }
    }

    pub fn summary(&self) -> OrganismSummary {
        let cells = self.body().members().len();
        match self {
            Organism::Sun(sun) => OrganismSummary {
                key: sun.body().key().to_string(),
                kind: "sun",
                cells,
                age: None,
                water: None,
                sunlight: None,
            },
            Organism::Plant(plant) => OrganismSummary {
                key: plant.body().key().to_string(),
                kind: "plant",
                cells,
                age: Some(plant.age()),
                water: Some(plant.water()),
                sunlight: Some(plant.sunlight()),
            },
        }
    }
}
