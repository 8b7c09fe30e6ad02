//! RenderedMosaic: the RGBA raster produced for one variant.

/// An RGBA raster, 4 bytes per pixel, row-major.
///
/// # Example
///
/// ```
/// use mosaic_core::{render, MosaicGrid, Rgb};
///
/// let grid = MosaicGrid::new(2, 1).unwrap();
/// let mosaic = render(&[Rgb::WHITE, Rgb::BLACK], grid, 8, 8).unwrap();
///
/// assert_eq!(mosaic.width(), 2 * 8 + 2 * 8);
/// assert_eq!(mosaic.height(), 8 + 2 * 8);
/// assert_eq!(mosaic.as_rgba().len(), mosaic.width() * mosaic.height() * 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMosaic {
    rgba: Vec<u8>,
    width: usize,
    height: usize,
}

impl RenderedMosaic {
    pub(crate) fn new(rgba: Vec<u8>, width: usize, height: usize) -> Self {
        debug_assert_eq!(rgba.len(), width * height * 4);
        Self {
            rgba,
            width,
            height,
        }
    }

    /// Raster width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Raster height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// RGBA bytes, `width * height * 4` of them.
    #[inline]
    pub fn as_rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// Consume the raster, returning its RGBA bytes.
    pub fn into_rgba(self) -> Vec<u8> {
        self.rgba
    }

    /// The RGBA value at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the raster.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        assert!(x < self.width && y < self.height, "({x}, {y}) outside raster");
        let i = (y * self.width + x) * 4;
        [
            self.rgba[i],
            self.rgba[i + 1],
            self.rgba[i + 2],
            self.rgba[i + 3],
        ]
    }
}
