//! Error types for the engine.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Coordinate access outside the grid. Always a caller contract violation.
    #[error("coordinate ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    #[error("invalid cell kind: {0}")]
    InvalidCellKind(String),

    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// An external event targeted a cell it is not valid for.
    #[error("cannot spawn {what} at ({x}, {y}): {reason}")]
    InvalidSpawn {
        what: &'static str,
        x: i32,
        y: i32,
        reason: String,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Config(err.to_string())
    }
}
