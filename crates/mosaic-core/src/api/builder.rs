//! MosaicBuilder -- the primary ergonomic entry point for the crate.
//!
//! [`MosaicBuilder`] wraps sampling, matching, diffusion and rendering behind
//! fluent configuration.

use crate::color::{DistanceMetric, Rgb};
use crate::output::{render, RenderedMosaic};
use crate::palette::Palette;
use crate::sample::{MosaicGrid, PixelBuffer};

use super::pipeline::quantize_indices;
use super::{MosaicError, Variant};

/// Default tile edge length in output pixels.
pub const DEFAULT_BLOCK_SIZE: usize = 32;

/// High-level mosaic builder.
///
/// # Design
///
/// - Constructor requires a [`Palette`] (no invalid states)
/// - Configuration methods consume and return `self`
/// - [`quantize()`](Self::quantize) and [`render()`](Self::render) take
///   `&self`, so one builder can process any number of images
/// - The border width follows the block size unless set explicitly
///
/// # Example
///
/// ```
/// use mosaic_core::{DistanceMetric, MosaicBuilder, MosaicGrid, Palette, PixelBuffer, Rgb};
///
/// let palette = Palette::from_hex(&["#ffffff", "#000000"]).unwrap();
/// let builder = MosaicBuilder::new(palette)
///     .grid(MosaicGrid::new(4, 6).unwrap())
///     .metric(DistanceMetric::Ciede2000)
///     .dither(true)
///     .block_size(8);
///
/// let image = PixelBuffer::filled(Rgb::new(90, 90, 90), 40, 60).unwrap();
/// let mosaic = builder.render(&image).unwrap();
///
/// assert_eq!(mosaic.width(), 4 * 8 + 2 * 8);
/// assert_eq!(mosaic.height(), 6 * 8 + 2 * 8);
/// ```
#[derive(Debug, Clone)]
pub struct MosaicBuilder {
    palette: Palette,
    grid: MosaicGrid,
    metric: DistanceMetric,
    dither: bool,
    block_size: usize,
    border_width: Option<usize>,
}

impl MosaicBuilder {
    /// Create a builder for the given palette.
    ///
    /// Defaults: reference 64x96 grid, Euclidean metric, no dithering,
    /// 32-pixel tiles, border as wide as one tile.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            grid: MosaicGrid::REFERENCE,
            metric: DistanceMetric::Euclidean,
            dither: false,
            block_size: DEFAULT_BLOCK_SIZE,
            border_width: None,
        }
    }

    /// Create a builder preconfigured for one of the named variants.
    ///
    /// ```
    /// use mosaic_core::{MosaicBuilder, Variant};
    ///
    /// let variant: Variant = "CIEDE_FLOYD_GRAYSCALES".parse().unwrap();
    /// let builder = MosaicBuilder::for_variant(variant);
    /// assert_eq!(builder.palette().len(), 8);
    /// assert!(builder.is_dithering());
    /// ```
    pub fn for_variant(variant: Variant) -> Self {
        Self::new(variant.palette.palette())
            .metric(variant.metric)
            .dither(variant.dither)
    }

    /// Set the mosaic grid.
    #[inline]
    pub fn grid(mut self, grid: MosaicGrid) -> Self {
        self.grid = grid;
        self
    }

    /// Set the distance metric.
    #[inline]
    pub fn metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Enable or disable Floyd-Steinberg error diffusion.
    #[inline]
    pub fn dither(mut self, enabled: bool) -> Self {
        self.dither = enabled;
        self
    }

    /// Set the tile edge length in output pixels.
    #[inline]
    pub fn block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    /// Set the border width explicitly.
    #[inline]
    pub fn border_width(mut self, border_width: usize) -> Self {
        self.border_width = Some(border_width);
        self
    }

    /// The palette in use.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The configured grid.
    pub fn grid_size(&self) -> MosaicGrid {
        self.grid
    }

    /// Whether error diffusion is enabled.
    pub fn is_dithering(&self) -> bool {
        self.dither
    }

    /// Border width that [`render()`](Self::render) will use.
    pub fn effective_border_width(&self) -> usize {
        self.border_width.unwrap_or(self.block_size)
    }

    /// Palette index chosen for each cell, row-major.
    pub fn quantize_indices(&self, image: &PixelBuffer) -> Result<Vec<usize>, MosaicError> {
        quantize_indices(image, self.grid, &self.palette, self.metric, self.dither)
    }

    /// Palette color chosen for each cell, row-major.
    pub fn quantize(&self, image: &PixelBuffer) -> Result<Vec<Rgb>, MosaicError> {
        let indices = self.quantize_indices(image)?;
        Ok(indices.into_iter().map(|i| self.palette.color(i)).collect())
    }

    /// Paint already-resolved cell colors.
    pub fn render_cells(&self, cells: &[Rgb]) -> Result<RenderedMosaic, MosaicError> {
        render(cells, self.grid, self.block_size, self.effective_border_width())
    }

    /// Quantize `image` and paint the result.
    pub fn render(&self, image: &PixelBuffer) -> Result<RenderedMosaic, MosaicError> {
        let cells = self.quantize(image)?;
        self.render_cells(&cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PaletteKind;

    fn two_tone() -> Palette {
        Palette::from_hex(&["#ffffff", "#000000"]).unwrap()
    }

    #[test]
    fn test_defaults() {
        let builder = MosaicBuilder::new(two_tone());
        assert_eq!(builder.grid_size(), MosaicGrid::REFERENCE);
        assert!(!builder.is_dithering());
        assert_eq!(builder.effective_border_width(), DEFAULT_BLOCK_SIZE);
    }

    #[test]
    fn test_border_follows_block_size_unless_set() {
        let builder = MosaicBuilder::new(two_tone()).block_size(10);
        assert_eq!(builder.effective_border_width(), 10);
        let builder = builder.border_width(3).block_size(12);
        assert_eq!(builder.effective_border_width(), 3);
    }

    #[test]
    fn test_builder_is_reusable() {
        let builder = MosaicBuilder::new(two_tone())
            .grid(MosaicGrid::new(3, 3).unwrap())
            .dither(true);
        let image = PixelBuffer::filled(Rgb::new(60, 60, 60), 9, 9).unwrap();
        let first = builder.quantize(&image).unwrap();
        let second = builder.quantize(&image).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_for_variant_picks_palette() {
        for variant in Variant::ALL {
            let builder = MosaicBuilder::for_variant(variant);
            let expected = match variant.palette {
                PaletteKind::Full => 29,
                PaletteKind::Grayscale => 8,
            };
            assert_eq!(builder.palette().len(), expected);
            assert_eq!(builder.is_dithering(), variant.dither);
        }
    }

    #[test]
    fn test_render_propagates_errors() {
        let builder = MosaicBuilder::new(two_tone())
            .grid(MosaicGrid::new(2, 2).unwrap())
            .block_size(0);
        let image = PixelBuffer::filled(Rgb::WHITE, 4, 4).unwrap();
        assert!(matches!(
            builder.render(&image),
            Err(MosaicError::InvalidDimensions { what: "block", .. })
        ));
    }
}
