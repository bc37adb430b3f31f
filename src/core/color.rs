//! RGB colors with clamped channels.
//!
//! Cell colors are computed from signed/float arithmetic (base color plus
//! sunlight or humidity) and always pass through [`Rgb::clamped`], so every
//! channel ends up in `[0, 255]`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from unbounded channel values, clamping each to `[0, 255]`.
    #[inline]
    pub fn clamped(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        }
    }

    /// Packed ABGR (alpha = 255), little-endian bytes `[R, G, B, A]` for a
    /// direct copy into canvas `ImageData`.
    #[inline]
    pub fn to_abgr(self) -> u32 {
        0xFF00_0000 | ((self.b as u32) << 16) | ((self.g as u32) << 8) | self.r as u32
    }
}

#[inline]
fn clamp_channel(value: f32) -> u8 {
    // NaN falls through `clamp` unchanged and casts to 0.
    value.clamp(0.0, 255.0) as u8
}
