//! Linear RGB color type
//!
//! Linear RGB is the intermediate step between gamma-encoded 8-bit colors
//! and CIE XYZ. It is only used on the way into [`Lab`](super::Lab).

use super::lut::srgb8_to_linear;
use super::rgb::Rgb;

/// A color in linear RGB color space.
///
/// Values represent light intensity proportional to physical light power,
/// in the range 0.0..=1.0 for colors decoded from 8-bit sRGB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f32,
    /// Green channel (linear light intensity)
    pub g: f32,
    /// Blue channel (linear light intensity)
    pub b: f32,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for LinearRgb {
    /// Gamma-decode an 8-bit sRGB color through the lookup table.
    fn from(rgb: Rgb) -> Self {
        Self {
            r: srgb8_to_linear(rgb.r),
            g: srgb8_to_linear(rgb.g),
            b: srgb8_to_linear(rgb.b),
        }
    }
}
