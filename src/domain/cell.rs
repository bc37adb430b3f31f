//! Cell - the smallest addressable unit of the simulation.
//!
//! A cell is a closed tagged variant: a coordinate and a display color common
//! to every kind, plus kind-specific state in [`CellKind`]. Terrain kinds
//! (air, dirt, rock, water drop) carry their own state; plant organs and sun
//! cells are markers whose behavior is driven by the owning organism.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{Coord, EngineError, Rgb};

pub const AIR_BASE_COLOR: Rgb = Rgb::new(0, 91, 150);
pub const DIRT_BASE_COLOR: Rgb = Rgb::new(139, 69, 19);
pub const ROCK_COLOR: Rgb = Rgb::new(112, 128, 144);
pub const WATER_DROP_COLOR: Rgb = Rgb::new(0, 0, 100);
pub const SEED_COLOR: Rgb = Rgb::new(100, 0, 0);
pub const STEM_COLOR: Rgb = Rgb::new(0, 200, 0);
pub const LEAF_COLOR: Rgb = Rgb::new(0, 255, 0);
pub const ROOT_COLOR: Rgb = Rgb::new(188, 143, 143);
pub const WOOD_COLOR: Rgb = Rgb::new(160, 82, 45);
pub const SUN_COLOR: Rgb = Rgb::new(255, 255, 0);

/// Humidity of dirt created without an explicit value.
pub const DEFAULT_DIRT_HUMIDITY: u32 = 5;
/// Humidity a water drop carries and hands over when it lands.
pub const WATER_DROP_HUMIDITY: u32 = 5;

/// Fieldless kind tag, used by the cell factory and the render type buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum CellType {
    Air = 0,
    Dirt = 1,
    Rock = 2,
    WaterDrop = 3,
    Seed = 4,
    Stem = 5,
    Leaf = 6,
    Root = 7,
    Wood = 8,
    Sun = 9,
}

impl CellType {
    pub const ALL: [CellType; 10] = [
        CellType::Air,
        CellType::Dirt,
        CellType::Rock,
        CellType::WaterDrop,
        CellType::Seed,
        CellType::Stem,
        CellType::Leaf,
        CellType::Root,
        CellType::Wood,
        CellType::Sun,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CellType::Air => "air",
            CellType::Dirt => "dirt",
            CellType::Rock => "rock",
            CellType::WaterDrop => "waterdrop",
            CellType::Seed => "seed",
            CellType::Stem => "stem",
            CellType::Leaf => "leaf",
            CellType::Root => "root",
            CellType::Wood => "wood",
            CellType::Sun => "sun",
        }
    }

    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Seed, stem, leaf, root and wood belong to a plant.
    #[inline]
    pub fn is_plant_organ(self) -> bool {
        matches!(
            self,
            CellType::Seed | CellType::Stem | CellType::Leaf | CellType::Root | CellType::Wood
        )
    }
}

impl FromStr for CellType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CellType::ALL
            .iter()
            .copied()
            .find(|t| t.name() == s)
            .ok_or_else(|| EngineError::InvalidCellKind(s.to_string()))
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind-specific state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CellKind {
    Air {
        sunlight: f32,
        /// Light source position the current `sunlight` was computed for.
        light_source: Option<Coord>,
    },
    Dirt {
        humidity: u32,
    },
    Rock,
    #[serde(rename = "waterdrop")]
    WaterDrop {
        humidity: u32,
        /// A stopping drop is replaced by air in the same tick, so drops on
        /// the grid are normally still falling.
        stopped: bool,
    },
    Seed,
    Stem,
    Leaf,
    Root,
    Wood,
    Sun,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub(crate) coord: Coord,
    pub(crate) color: Rgb,
    #[serde(flatten)]
    pub(crate) kind: CellKind,
}

impl Cell {
    /// Factory: a fresh cell of `cell_type` at `coord`, with default state.
    pub fn create(cell_type: CellType, coord: Coord) -> Self {
        match cell_type {
            CellType::Air => Self::air(coord),
            CellType::Dirt => Self::dirt(coord, DEFAULT_DIRT_HUMIDITY),
            CellType::Rock => Self::marker(coord, ROCK_COLOR, CellKind::Rock),
            CellType::WaterDrop => Self::water_drop(coord),
            CellType::Seed => Self::marker(coord, SEED_COLOR, CellKind::Seed),
            CellType::Stem => Self::stem(coord),
            CellType::Leaf => Self::marker(coord, LEAF_COLOR, CellKind::Leaf),
            CellType::Root => Self::marker(coord, ROOT_COLOR, CellKind::Root),
            CellType::Wood => Self::marker(coord, WOOD_COLOR, CellKind::Wood),
            CellType::Sun => Self::marker(coord, SUN_COLOR, CellKind::Sun),
        }
    }

    /// Factory by kind name (`"air"`, `"dirt"`, ... `"sun"`).
    pub fn create_by_name(name: &str, coord: Coord) -> Result<Self, EngineError> {
        Ok(Self::create(name.parse()?, coord))
    }

    #[inline]
    fn marker(coord: Coord, color: Rgb, kind: CellKind) -> Self {
        Self { coord, color, kind }
    }

    pub fn air(coord: Coord) -> Self {
        Self {
            coord,
            color: air_color(0.0),
            kind: CellKind::Air { sunlight: 0.0, light_source: None },
        }
    }

    pub fn dirt(coord: Coord, humidity: u32) -> Self {
        Self {
            coord,
            color: dirt_color(humidity),
            kind: CellKind::Dirt { humidity },
        }
    }

    pub fn rock(coord: Coord) -> Self {
        Self::create(CellType::Rock, coord)
    }

    pub fn water_drop(coord: Coord) -> Self {
        Self {
            coord,
            color: WATER_DROP_COLOR,
            kind: CellKind::WaterDrop { humidity: WATER_DROP_HUMIDITY, stopped: false },
        }
    }

    /// Stem color depends on the row: brighter toward row 0.
    pub fn stem(coord: Coord) -> Self {
        Self {
            coord,
            color: stem_color(coord.y),
            kind: CellKind::Stem,
        }
    }

    #[inline]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    #[inline]
    pub fn color(&self) -> Rgb {
        self.color
    }

    #[inline]
    pub fn kind(&self) -> &CellKind {
        &self.kind
    }

    pub fn cell_type(&self) -> CellType {
        match self.kind {
            CellKind::Air { .. } => CellType::Air,
            CellKind::Dirt { .. } => CellType::Dirt,
            CellKind::Rock => CellType::Rock,
            CellKind::WaterDrop { .. } => CellType::WaterDrop,
            CellKind::Seed => CellType::Seed,
            CellKind::Stem => CellType::Stem,
            CellKind::Leaf => CellType::Leaf,
            CellKind::Root => CellType::Root,
            CellKind::Wood => CellType::Wood,
            CellKind::Sun => CellType::Sun,
        }
    }

    #[inline]
    pub fn is(&self, cell_type: CellType) -> bool {
        self.cell_type() == cell_type
    }

    #[inline]
    pub fn is_air(&self) -> bool {
        matches!(self.kind, CellKind::Air { .. })
    }

    /// Stored sunlight of an air cell.
    pub fn sunlight(&self) -> Option<f32> {
        match self.kind {
            CellKind::Air { sunlight, .. } => Some(sunlight),
            _ => None,
        }
    }

    /// Humidity of a dirt cell or a water drop.
    pub fn humidity(&self) -> Option<u32> {
        match self.kind {
            CellKind::Dirt { humidity } | CellKind::WaterDrop { humidity, .. } => Some(humidity),
            _ => None,
        }
    }

    /// Add humidity to dirt and recolor it. Returns false for any other kind.
    pub fn add_humidity(&mut self, amount: u32) -> bool {
        match &mut self.kind {
            CellKind::Dirt { humidity } => {
                *humidity = humidity.saturating_add(amount);
                self.color = dirt_color(*humidity);
                true
            }
            _ => false,
        }
    }

    #[inline]
    pub(crate) fn set_coord(&mut self, coord: Coord) {
        self.coord = coord;
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            CellKind::Air { sunlight, .. } => write!(f, "air {sunlight}"),
            CellKind::Dirt { humidity } => write!(f, "dirt {humidity}"),
            _ => f.write_str(self.cell_type().name()),
        }
    }
}

/// Air gets bluer/greener the more sunlight it holds.
#[inline]
pub fn air_color(sunlight: f32) -> Rgb {
    Rgb::clamped(
        AIR_BASE_COLOR.r as f32,
        AIR_BASE_COLOR.g as f32 + sunlight,
        AIR_BASE_COLOR.b as f32 + sunlight,
    )
}

#[inline]
pub fn dirt_color(humidity: u32) -> Rgb {
    let wet = humidity as f32 * 2.0;
    Rgb::clamped(
        DIRT_BASE_COLOR.r as f32 + wet,
        DIRT_BASE_COLOR.g as f32 + wet,
        DIRT_BASE_COLOR.b as f32,
    )
}

#[inline]
pub fn stem_color(y: i32) -> Rgb {
    Rgb::clamped(0.0, 255.0 - y as f32, 0.0)
}
