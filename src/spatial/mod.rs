//! Spatial layer: the cell grid and its chunk partitioning.

pub mod chunks;
pub mod grid;
