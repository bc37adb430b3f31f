//! Core value types shared by every layer: coordinates, colors and errors.

pub mod color;
pub mod coord;
pub mod error;

pub use color::Rgb;
pub use coord::Coord;
pub use error::{EngineError, Result};
