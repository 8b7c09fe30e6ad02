//! Logical mosaic grid dimensions.

use crate::api::MosaicError;

/// Width and height of the mosaic in cells.
///
/// Independent of pixel dimensions on either side of the pipeline: the
/// source image is sampled down to it and the renderer scales it up by the
/// tile size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MosaicGrid {
    width: usize,
    height: usize,
}

impl MosaicGrid {
    /// The 64x96 portrait board of the reference configuration.
    pub const REFERENCE: MosaicGrid = MosaicGrid {
        width: 64,
        height: 96,
    };

    /// Create a grid of `width` x `height` cells.
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::InvalidDimensions`] if either side is zero.
    pub fn new(width: usize, height: usize) -> Result<Self, MosaicError> {
        if width == 0 || height == 0 {
            return Err(MosaicError::InvalidDimensions {
                what: "grid",
                width,
                height,
            });
        }
        Ok(Self { width, height })
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Row-major index of cell `(x, y)`.
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Cell coordinates of row-major index `i`.
    #[inline]
    pub fn coords(&self, i: usize) -> (usize, usize) {
        (i % self.width, i / self.width)
    }
}

impl Default for MosaicGrid {
    fn default() -> Self {
        Self::REFERENCE
    }
}
