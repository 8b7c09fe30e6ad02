//! Row-major RGB pixel buffer.

use crate::api::MosaicError;
use crate::color::Rgb;

/// A flat, row-major `width x height` grid of [`Rgb`] pixels.
///
/// Holds either a decoded source image or a mosaic-resolution working copy.
/// Both dimensions are non-zero and `pixels.len() == width * height` is
/// checked on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: Vec<Rgb>,
    width: usize,
    height: usize,
}

impl PixelBuffer {
    /// Wrap a row-major pixel vector.
    ///
    /// # Errors
    ///
    /// - [`MosaicError::InvalidDimensions`] if either dimension is zero
    /// - [`MosaicError::LengthMismatch`] if `pixels.len() != width * height`
    pub fn new(pixels: Vec<Rgb>, width: usize, height: usize) -> Result<Self, MosaicError> {
        check_dimensions(width, height)?;
        let expected = width * height;
        if pixels.len() != expected {
            return Err(MosaicError::LengthMismatch {
                what: "pixels",
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// A buffer of one solid color.
    pub fn filled(color: Rgb, width: usize, height: usize) -> Result<Self, MosaicError> {
        check_dimensions(width, height)?;
        Ok(Self {
            pixels: vec![color; width * height],
            width,
            height,
        })
    }

    /// Build from packed `[R, G, B, R, G, B, ...]` bytes.
    ///
    /// ```
    /// use mosaic_core::{PixelBuffer, Rgb};
    ///
    /// let buffer = PixelBuffer::from_rgb_bytes(&[255, 0, 0, 0, 0, 255], 2, 1).unwrap();
    /// assert_eq!(buffer.get(1, 0), Rgb::new(0, 0, 255));
    /// ```
    pub fn from_rgb_bytes(bytes: &[u8], width: usize, height: usize) -> Result<Self, MosaicError> {
        check_dimensions(width, height)?;
        let expected = width * height * 3;
        if bytes.len() != expected {
            return Err(MosaicError::LengthMismatch {
                what: "rgb bytes",
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|px| Rgb::new(px[0], px[1], px[2]))
            .collect();
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Consume the buffer, returning its pixels.
    pub fn into_pixels(self) -> Vec<Rgb> {
        self.pixels
    }

    /// Pixel at `(x, y)`, or [`MosaicError::OutOfBoundsSample`] if the
    /// coordinate lies outside the buffer.
    #[inline]
    pub fn try_get(&self, x: usize, y: usize) -> Result<Rgb, MosaicError> {
        if x >= self.width || y >= self.height {
            return Err(MosaicError::OutOfBoundsSample {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.pixels[y * self.width + x])
    }

    /// Pixel at `(x, y)` with the coordinate clamped to the last column/row.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgb {
        let x = x.min(self.width - 1);
        let y = y.min(self.height - 1);
        self.pixels[y * self.width + x]
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<(), MosaicError> {
    if width == 0 || height == 0 {
        return Err(MosaicError::InvalidDimensions {
            what: "source",
            width,
            height,
        });
    }
    Ok(())
}
