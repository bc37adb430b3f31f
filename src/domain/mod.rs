//! Domain model: cell kinds and engine configuration.

pub mod cell;
pub mod config;

pub use cell::{Cell, CellKind, CellType};
pub use config::EngineConfig;
