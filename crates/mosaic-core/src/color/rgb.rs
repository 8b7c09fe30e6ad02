//! 8-bit RGB color type
//!
//! `Rgb` is the unit of data that flows through the whole pipeline: source
//! pixels, palette entries, working copies and rendered cells.

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseColorError;

/// An immutable RGB triple with 8-bit unsigned channels.
///
/// Every constructor that takes real-valued channels rounds and clamps into
/// `0..=255`, so an `Rgb` can never hold an out-of-range value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Opaque black, used for tile backgrounds and the border.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// White.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a color from 8-bit channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array [R, G, B].
    ///
    /// # Example
    /// ```
    /// use mosaic_core::Rgb;
    /// let white = Rgb::from_bytes([255, 255, 255]);
    /// assert_eq!(white, Rgb::WHITE);
    /// ```
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Convert to a fully opaque RGBA pixel.
    #[inline]
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }

    /// Create a color from real-valued channels, rounding and clamping
    /// each one into `0..=255`.
    ///
    /// # Example
    /// ```
    /// use mosaic_core::Rgb;
    /// let c = Rgb::from_f32_clamped(-12.0, 127.6, 300.0);
    /// assert_eq!(c, Rgb::new(0, 128, 255));
    /// ```
    #[inline]
    pub fn from_f32_clamped(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        }
    }

    /// Channels as `f32`, for signed error arithmetic.
    #[inline]
    pub fn to_f32(self) -> [f32; 3] {
        [self.r as f32, self.g as f32, self.b as f32]
    }

    /// Signed per-channel difference `self - other`.
    #[inline]
    pub fn error_to(self, other: Rgb) -> [f32; 3] {
        [
            self.r as f32 - other.r as f32,
            self.g as f32 - other.g as f32,
            self.b as f32 - other.b as f32,
        ]
    }

    /// Returns true if all three channels are equal.
    #[inline]
    pub fn is_grey(self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

/// Round and clamp a real channel value into the 8-bit range.
#[inline]
pub(crate) fn clamp_channel(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Rgb {
    /// Formats as lowercase `#rrggbb`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports the following formats:
    /// - `#RRGGBB` - standard 6-digit hex with hash
    /// - `RRGGBB` - standard 6-digit hex without hash
    /// - `#RGB` - shorthand 3-digit hex with hash (expands to RRGGBB)
    /// - `RGB` - shorthand 3-digit hex without hash
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use mosaic_core::Rgb;
    ///
    /// let orange: Rgb = "#FF5733".parse().unwrap();
    /// assert_eq!(orange, Rgb::new(0xFF, 0x57, 0x33));
    ///
    /// let red: Rgb = "#F00".parse().unwrap();
    /// assert_eq!(red, Rgb::new(255, 0, 0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        match s.len() {
            3 => {
                // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::new(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing_6digit() {
        let white: Rgb = "#FFFFFF".parse().unwrap();
        assert_eq!(white, Rgb::WHITE);

        let black: Rgb = "#000000".parse().unwrap();
        assert_eq!(black, Rgb::BLACK);

        let grey: Rgb = "c9c5be".parse().unwrap();
        assert_eq!(grey, Rgb::new(0xc9, 0xc5, 0xbe));
    }

    #[test]
    fn test_hex_parsing_shorthand() {
        let color: Rgb = "#ABC".parse().unwrap();
        assert_eq!(color, Rgb::new(0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn test_hex_parsing_errors() {
        assert!(matches!(
            "#GGG".parse::<Rgb>(),
            Err(ParseColorError::InvalidHex(_))
        ));
        assert!(matches!(
            "#FFFF".parse::<Rgb>(),
            Err(ParseColorError::InvalidLength)
        ));
        assert!(matches!("".parse::<Rgb>(), Err(ParseColorError::InvalidLength)));
        assert!(matches!("#".parse::<Rgb>(), Err(ParseColorError::InvalidLength)));
        // Multi-byte characters must not panic on slicing
        assert!("#ééé".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_hex_parsing_case_and_whitespace() {
        let upper: Rgb = "  #ABCDEF ".parse().unwrap();
        let lower: Rgb = "#abcdef".parse().unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_display_is_lowercase_hex() {
        assert_eq!(Rgb::new(0xF1, 0xC4, 0x0F).to_string(), "#f1c40f");
        let round: Rgb = Rgb::new(1, 2, 3).to_string().parse().unwrap();
        assert_eq!(round, Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_clamped_construction() {
        assert_eq!(Rgb::from_f32_clamped(-0.4, 0.5, 254.5), Rgb::new(0, 1, 255));
        assert_eq!(Rgb::from_f32_clamped(f32::NAN, 1e9, -1e9), Rgb::new(0, 255, 0));
    }

    #[test]
    fn test_error_to_is_signed() {
        let a = Rgb::new(10, 200, 128);
        let b = Rgb::new(20, 100, 128);
        assert_eq!(a.error_to(b), [-10.0, 100.0, 0.0]);
    }

    #[test]
    fn test_rgba_is_opaque() {
        assert_eq!(Rgb::new(1, 2, 3).to_rgba(), [1, 2, 3, 255]);
    }
}
