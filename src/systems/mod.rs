//! Systems - per-tick update rules.
//!
//! - terrain/   - air lighting and falling water, run chunk by chunk
//! - organisms/ - multi-cell entities (sun, plants), run sequentially

pub mod organisms;
pub mod terrain;
