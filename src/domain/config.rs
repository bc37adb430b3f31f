//! Engine configuration.
//!
//! A handful of named scalars supplied once at startup. The engine itself
//! uses the grid dimensions, rock chance and seed; `cell_size` and
//! `ticks_per_second` are carried for the renderer and the external clock.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of cells in a row
    pub width: u32,
    /// Number of cells in a column
    pub height: u32,
    /// Size of one cell on screen, in pixels
    pub cell_size: u32,
    pub ticks_per_second: u32,
    /// Chance (0-100) that a cell of the lower half is rock instead of dirt
    pub rock_chance_percent: u32,
    /// Seed for every random choice; `None` derives one from the clock
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 160,
            height: 160,
            cell_size: 5,
            ticks_per_second: 60,
            rock_chance_percent: 5,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Parse a JSON object; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(EngineError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.cell_size == 0 {
            return Err(EngineError::Config("cell_size must be positive".into()));
        }
        if self.ticks_per_second == 0 {
            return Err(EngineError::Config("ticks_per_second must be positive".into()));
        }
        if self.rock_chance_percent > 100 {
            return Err(EngineError::Config(format!(
                "rock_chance_percent must be at most 100, got {}",
                self.rock_chance_percent
            )));
        }
        Ok(())
    }

    /// Time budget of one tick at the configured rate.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.ticks_per_second.max(1) as f64)
    }

    /// Screen size in pixels, clamped at `u32::MAX`.
    pub fn screen_size(&self) -> (u32, u32) {
        (
            self.width.saturating_mul(self.cell_size),
            self.height.saturating_mul(self.cell_size),
        )
    }
}
