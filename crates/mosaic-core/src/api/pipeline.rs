//! One-shot pipeline functions.

use crate::color::{DistanceMetric, Rgb};
use crate::dither::ErrorDiffuser;
use crate::palette::Palette;
use crate::sample::{GridSampler, MosaicGrid, PixelBuffer};

use super::MosaicError;

/// Quantize `image` onto `grid`, returning one palette index per cell.
///
/// The image is downsampled to one pixel per cell first. Without dithering
/// each cell is matched on its own; with dithering the cells go through
/// Floyd-Steinberg error diffusion in row-major order.
///
/// # Errors
///
/// Returns [`MosaicError::InvalidDimensions`] if the image cannot be
/// sampled onto the grid.
pub fn quantize_indices(
    image: &PixelBuffer,
    grid: MosaicGrid,
    palette: &Palette,
    metric: DistanceMetric,
    dither: bool,
) -> Result<Vec<usize>, MosaicError> {
    let cells = GridSampler::for_source(grid, image)?.downsample(image)?;

    if dither {
        Ok(ErrorDiffuser::new().diffuse(&cells, palette, metric))
    } else {
        Ok(cells
            .pixels()
            .iter()
            .map(|&pixel| palette.find_nearest(pixel, metric).0)
            .collect())
    }
}

/// Quantize `image` onto `grid`, returning the chosen color per cell.
///
/// Same as [`quantize_indices`] with each index resolved to its palette
/// color. The result has `grid.cell_count()` entries, row-major.
///
/// # Example
///
/// ```
/// use mosaic_core::{quantize, DistanceMetric, MosaicGrid, Palette, PixelBuffer, Rgb};
///
/// let palette = Palette::from_hex(&["#ffffff", "#000000"]).unwrap();
/// let image = PixelBuffer::filled(Rgb::new(30, 30, 30), 40, 60).unwrap();
/// let grid = MosaicGrid::new(4, 6).unwrap();
///
/// let cells = quantize(&image, grid, &palette, DistanceMetric::Euclidean, false).unwrap();
/// assert_eq!(cells.len(), 24);
/// assert!(cells.iter().all(|&c| c == Rgb::BLACK));
/// ```
pub fn quantize(
    image: &PixelBuffer,
    grid: MosaicGrid,
    palette: &Palette,
    metric: DistanceMetric,
    dither: bool,
) -> Result<Vec<Rgb>, MosaicError> {
    let indices = quantize_indices(image, grid, palette, metric, dither)?;
    Ok(indices.into_iter().map(|i| palette.color(i)).collect())
}
