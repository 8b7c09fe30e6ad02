//! Gamma lookup table access
//!
//! The table is generated at compile time by build.rs.

include!(concat!(env!("OUT_DIR"), "/gamma_lut.rs"));

/// Convert an 8-bit sRGB code value to linear light (0.0..=1.0).
#[inline]
pub fn srgb8_to_linear(value: u8) -> f32 {
    SRGB8_TO_LINEAR[value as usize]
}
