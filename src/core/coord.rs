use std::fmt;

use serde::{Deserialize, Serialize};

/// Grid coordinate. `y` grows downwards (row 0 is the sky).
///
/// Signed so that neighbor offsets can be computed freely; the grid rejects
/// anything outside `[0, width) x [0, height)` with `OutOfBounds`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    #[inline]
    pub fn above(self) -> Self {
        self.offset(0, -1)
    }

    #[inline]
    pub fn below(self) -> Self {
        self.offset(0, 1)
    }

    #[inline]
    pub fn manhattan(self, other: Coord) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
