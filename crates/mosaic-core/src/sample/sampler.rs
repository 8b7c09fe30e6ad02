//! Nearest-neighbor sampling from source pixels to grid cells.
//!
//! Every cell is represented by the single source pixel nearest to its
//! center: `floor(g * scale + scale / 2)` on each axis, with
//! `scale = source / grid` as a real number. No averaging is done.

use super::buffer::PixelBuffer;
use super::grid::MosaicGrid;
use crate::api::MosaicError;
use crate::color::Rgb;

/// Source pixel that represents cell `(grid_x, grid_y)`.
///
/// The returned coordinate is not clamped; callers reading pixels should go
/// through [`GridSampler::sample`], which clamps anything that lands on or
/// beyond the last row or column.
///
/// # Errors
///
/// Returns [`MosaicError::InvalidDimensions`] if any dimension is zero.
///
/// # Example
///
/// ```
/// use mosaic_core::sample_center;
///
/// // 640x960 source on a 64x96 grid: every cell is 10x10 pixels
/// assert_eq!(sample_center(0, 0, 64, 96, 640, 960).unwrap(), (5, 5));
/// assert_eq!(sample_center(63, 95, 64, 96, 640, 960).unwrap(), (635, 955));
/// ```
pub fn sample_center(
    grid_x: usize,
    grid_y: usize,
    grid_width: usize,
    grid_height: usize,
    source_width: usize,
    source_height: usize,
) -> Result<(usize, usize), MosaicError> {
    let grid = MosaicGrid::new(grid_width, grid_height)?;
    let sampler = GridSampler::new(grid, source_width, source_height)?;
    Ok(sampler.sample_center(grid_x, grid_y))
}

/// Maps grid cells onto a source image of fixed size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSampler {
    grid: MosaicGrid,
    source_width: usize,
    source_height: usize,
    scale_x: f64,
    scale_y: f64,
}

impl GridSampler {
    /// Create a sampler for a `source_width x source_height` image.
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::InvalidDimensions`] if the source has a zero
    /// side or the derived scale is not a positive finite number.
    pub fn new(
        grid: MosaicGrid,
        source_width: usize,
        source_height: usize,
    ) -> Result<Self, MosaicError> {
        if source_width == 0 || source_height == 0 {
            return Err(MosaicError::InvalidDimensions {
                what: "source",
                width: source_width,
                height: source_height,
            });
        }

        let scale_x = source_width as f64 / grid.width() as f64;
        let scale_y = source_height as f64 / grid.height() as f64;
        if !(scale_x.is_finite() && scale_y.is_finite() && scale_x > 0.0 && scale_y > 0.0) {
            return Err(MosaicError::InvalidDimensions {
                what: "scale",
                width: source_width,
                height: source_height,
            });
        }

        Ok(Self {
            grid,
            source_width,
            source_height,
            scale_x,
            scale_y,
        })
    }

    /// Sampler sized for an existing buffer.
    pub fn for_source(grid: MosaicGrid, source: &PixelBuffer) -> Result<Self, MosaicError> {
        Self::new(grid, source.width(), source.height())
    }

    /// The grid being sampled onto.
    #[inline]
    pub fn grid(&self) -> MosaicGrid {
        self.grid
    }

    /// Source pixels per cell as `(x, y)`.
    #[inline]
    pub fn scale(&self) -> (f64, f64) {
        (self.scale_x, self.scale_y)
    }

    /// Unclamped center coordinate of a cell.
    #[inline]
    pub fn sample_center(&self, grid_x: usize, grid_y: usize) -> (usize, usize) {
        let x = (grid_x as f64 * self.scale_x + self.scale_x / 2.0).floor();
        let y = (grid_y as f64 * self.scale_y + self.scale_y / 2.0).floor();
        (x as usize, y as usize)
    }

    /// Color of the source pixel that represents cell `(grid_x, grid_y)`.
    ///
    /// A center that falls outside the source is clamped to the last
    /// column/row rather than reported.
    #[inline]
    pub fn sample(&self, source: &PixelBuffer, grid_x: usize, grid_y: usize) -> Rgb {
        let (x, y) = self.sample_center(grid_x, grid_y);
        match source.try_get(x, y) {
            Ok(color) => color,
            // Out of bounds: fall back to the clamped edge pixel
            Err(_) => source.get(x, y),
        }
    }

    /// Downsample `source` to one pixel per cell, row-major.
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::InvalidDimensions`] if `source` is not the
    /// size this sampler was built for.
    pub fn downsample(&self, source: &PixelBuffer) -> Result<PixelBuffer, MosaicError> {
        if source.width() != self.source_width || source.height() != self.source_height {
            return Err(MosaicError::InvalidDimensions {
                what: "source",
                width: source.width(),
                height: source.height(),
            });
        }

        let mut cells = Vec::with_capacity(self.grid.cell_count());
        for gy in 0..self.grid.height() {
            for gx in 0..self.grid.width() {
                cells.push(self.sample(source, gx, gy));
            }
        }
        PixelBuffer::new(cells, self.grid.width(), self.grid.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scale() {
        let sampler = GridSampler::new(MosaicGrid::REFERENCE, 640, 960).unwrap();
        assert_eq!(sampler.scale(), (10.0, 10.0));
        assert_eq!(sampler.sample_center(0, 0), (5, 5));
        assert_eq!(sampler.sample_center(1, 2), (15, 25));
    }

    #[test]
    fn test_fractional_scale() {
        // 100 / 64 = 1.5625
        let grid = MosaicGrid::new(64, 96).unwrap();
        let sampler = GridSampler::new(grid, 100, 150).unwrap();
        assert_eq!(sampler.sample_center(0, 0), (0, 0));
        assert_eq!(sampler.sample_center(1, 1), (2, 2));
        assert_eq!(sampler.sample_center(63, 95), (99, 149));
    }

    #[test]
    fn test_upsampling_small_source() {
        let grid = MosaicGrid::new(4, 4).unwrap();
        let source = PixelBuffer::new(
            vec![Rgb::BLACK, Rgb::WHITE, Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)],
            2,
            2,
        )
        .unwrap();
        let sampler = GridSampler::for_source(grid, &source).unwrap();
        let down = sampler.downsample(&source).unwrap();
        assert_eq!(down.width(), 4);
        assert_eq!(down.get(0, 0), Rgb::BLACK);
        assert_eq!(down.get(1, 0), Rgb::BLACK);
        assert_eq!(down.get(2, 0), Rgb::WHITE);
        assert_eq!(down.get(3, 3), Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_downsample_picks_center_pixels() {
        // Source row-major pixel value encodes its own coordinate
        let (w, h) = (8, 4);
        let pixels = (0..w * h)
            .map(|i| Rgb::new((i % w) as u8, (i / w) as u8, 0))
            .collect();
        let source = PixelBuffer::new(pixels, w, h).unwrap();
        let grid = MosaicGrid::new(4, 2).unwrap();
        let down = GridSampler::for_source(grid, &source)
            .unwrap()
            .downsample(&source)
            .unwrap();

        // scale (2, 2): centers at 1, 3, 5, 7 and rows 1, 3
        let xs: Vec<u8> = down.pixels()[..4].iter().map(|c| c.r).collect();
        assert_eq!(xs, vec![1, 3, 5, 7]);
        assert_eq!(down.get(0, 1).g, 3);
    }

    #[test]
    fn test_sample_past_edge_clamps() {
        let (w, h) = (8, 8);
        let pixels = (0..w * h)
            .map(|i| Rgb::new((i % w) as u8, (i / w) as u8, 0))
            .collect();
        let source = PixelBuffer::new(pixels, w, h).unwrap();
        let sampler = GridSampler::for_source(MosaicGrid::new(4, 4).unwrap(), &source).unwrap();

        // Cell (10, 6) lies outside the grid: center (21, 13) is off the source
        assert_eq!(sampler.sample_center(10, 6), (21, 13));
        assert!(matches!(
            source.try_get(21, 13),
            Err(MosaicError::OutOfBoundsSample { x: 21, y: 13, .. })
        ));
        assert_eq!(sampler.sample(&source, 10, 6), Rgb::new(7, 7, 0));
        assert_eq!(sampler.sample(&source, 1, 9), Rgb::new(3, 7, 0));
    }

    #[test]
    fn test_zero_source_rejected() {
        assert!(matches!(
            GridSampler::new(MosaicGrid::REFERENCE, 0, 960),
            Err(MosaicError::InvalidDimensions { what: "source", .. })
        ));
        assert!(sample_center(0, 0, 0, 96, 640, 960).is_err());
    }

    #[test]
    fn test_downsample_rejects_wrong_source() {
        let sampler = GridSampler::new(MosaicGrid::REFERENCE, 640, 960).unwrap();
        let other = PixelBuffer::filled(Rgb::WHITE, 10, 10).unwrap();
        assert!(sampler.downsample(&other).is_err());
    }
}
