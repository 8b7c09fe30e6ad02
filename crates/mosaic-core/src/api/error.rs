//! Unified error type for the mosaic-core public API.
//!
//! [`MosaicError`] wraps every error the crate can produce into a single
//! enum for convenient `?` propagation in application code.

use crate::palette::{PaletteError, ParseColorError};
use std::fmt;

/// Unified error type for the mosaic-core public API.
///
/// # Example
///
/// ```
/// use mosaic_core::{MosaicError, Palette};
///
/// fn two_tone() -> Result<Palette, MosaicError> {
///     let palette = Palette::from_hex(&["#000000", "#FFFFFF"])?;
///     Ok(palette)
/// }
/// # two_tone().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum MosaicError {
    /// Palette validation error (empty, duplicate, or parse error)
    Palette(PaletteError),
    /// Color parsing error (invalid hex string)
    ParseColor(ParseColorError),
    /// A grid, source image, tile size or derived scale is zero or not finite
    InvalidDimensions {
        /// What the dimensions describe ("grid", "source", "block", ...)
        what: &'static str,
        /// Offending width
        width: usize,
        /// Offending height
        height: usize,
    },
    /// A buffer or cell sequence does not hold `width * height` elements
    LengthMismatch {
        /// What was measured ("pixels", "cells", ...)
        what: &'static str,
        /// Length implied by the declared dimensions
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },
    /// A sample coordinate fell outside the source image
    OutOfBoundsSample {
        /// Attempted column
        x: usize,
        /// Attempted row
        y: usize,
        /// Source width
        width: usize,
        /// Source height
        height: usize,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MosaicError::Palette(err) => write!(f, "palette error: {}", err),
            MosaicError::ParseColor(err) => write!(f, "color parse error: {}", err),
            MosaicError::InvalidDimensions {
                what,
                width,
                height,
            } => write!(f, "invalid {} dimensions {}x{}", what, width, height),
            MosaicError::LengthMismatch {
                what,
                expected,
                actual,
            } => write!(
                f,
                "{} length mismatch: expected {}, got {}",
                what, expected, actual
            ),
            MosaicError::OutOfBoundsSample {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "sample ({}, {}) is outside the {}x{} source",
                x, y, width, height
            ),
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MosaicError::Palette(err) => Some(err),
            MosaicError::ParseColor(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PaletteError> for MosaicError {
    fn from(err: PaletteError) -> Self {
        MosaicError::Palette(err)
    }
}

impl From<ParseColorError> for MosaicError {
    fn from(err: ParseColorError) -> Self {
        MosaicError::ParseColor(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_context() {
        let err = MosaicError::OutOfBoundsSample {
            x: 640,
            y: 5,
            width: 640,
            height: 960,
        };
        assert_eq!(err.to_string(), "sample (640, 5) is outside the 640x960 source");

        let err = MosaicError::InvalidDimensions {
            what: "grid",
            width: 0,
            height: 96,
        };
        assert_eq!(err.to_string(), "invalid grid dimensions 0x96");

        let err = MosaicError::LengthMismatch {
            what: "cells",
            expected: 6144,
            actual: 6143,
        };
        assert_eq!(err.to_string(), "cells length mismatch: expected 6144, got 6143");
    }

    #[test]
    fn test_from_palette_error() {
        let err: MosaicError = PaletteError::EmptyPalette.into();
        assert!(matches!(err, MosaicError::Palette(PaletteError::EmptyPalette)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
