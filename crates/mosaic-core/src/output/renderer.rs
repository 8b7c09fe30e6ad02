//! Disc-tile renderer.
//!
//! Every cell becomes a `block_size` square tile holding a filled circle in
//! the cell's color on a black background. The tile grid is framed by a
//! uniform black border.

use super::RenderedMosaic;
use crate::api::MosaicError;
use crate::color::Rgb;
use crate::sample::MosaicGrid;

const BLACK_RGBA: [u8; 4] = [0, 0, 0, 255];

/// Largest RGBA raster [`render`] will allocate, in bytes (1 GiB).
///
/// The reference 64x96 mosaic with 32-pixel tiles needs about 26 MB.
pub const MAX_RASTER_BYTES: usize = 1 << 30;

/// Which pixels of a `block_size` tile lie inside the disc.
///
/// A pixel `(bx, by)` is inside when its distance from `(bs/2, bs/2)` is
/// strictly less than `bs/2`. Row-major, `block_size²` entries.
pub(crate) fn disc_mask(block_size: usize) -> Vec<bool> {
    let center = block_size as f64 / 2.0;
    let radius_sq = center * center;
    let mut mask = Vec::with_capacity(block_size * block_size);
    for by in 0..block_size {
        for bx in 0..block_size {
            let dx = bx as f64 - center;
            let dy = by as f64 - center;
            mask.push(dx * dx + dy * dy < radius_sq);
        }
    }
    mask
}

/// Output raster size, rejecting rasters that overflow or are too large
fn raster_size(
    grid: MosaicGrid,
    block_size: usize,
    border_width: usize,
) -> Result<(usize, usize), MosaicError> {
    let side = |cells: usize| {
        cells
            .checked_mul(block_size)?
            .checked_add(border_width.checked_mul(2)?)
    };
    let too_large = || MosaicError::InvalidDimensions {
        what: "raster",
        width: side(grid.width()).unwrap_or(usize::MAX),
        height: side(grid.height()).unwrap_or(usize::MAX),
    };

    let (width, height) = match (side(grid.width()), side(grid.height())) {
        (Some(w), Some(h)) => (w, h),
        _ => return Err(too_large()),
    };
    match width.checked_mul(height).and_then(|px| px.checked_mul(4)) {
        Some(bytes) if bytes <= MAX_RASTER_BYTES => Ok((width, height)),
        _ => Err(too_large()),
    }
}

/// Render resolved cell colors as disc tiles inside a black border.
///
/// The output is `(grid.width * block_size + 2 * border_width)` by
/// `(grid.height * block_size + 2 * border_width)` pixels. Cell `i` is
/// drawn with its tile's top-left corner at
/// `(border_width + (i % grid.width) * block_size, border_width + (i / grid.width) * block_size)`.
///
/// # Errors
///
/// - [`MosaicError::InvalidDimensions`] if `block_size` is zero, or if the
///   raster size overflows or exceeds [`MAX_RASTER_BYTES`]
/// - [`MosaicError::LengthMismatch`] if `cells.len() != grid.cell_count()`
pub fn render(
    cells: &[Rgb],
    grid: MosaicGrid,
    block_size: usize,
    border_width: usize,
) -> Result<RenderedMosaic, MosaicError> {
    if block_size == 0 {
        return Err(MosaicError::InvalidDimensions {
            what: "block",
            width: block_size,
            height: block_size,
        });
    }
    if cells.len() != grid.cell_count() {
        return Err(MosaicError::LengthMismatch {
            what: "cells",
            expected: grid.cell_count(),
            actual: cells.len(),
        });
    }

    let (width, height) = raster_size(grid, block_size, border_width)?;

    // Border and tile backgrounds are both opaque black
    let mut rgba = BLACK_RGBA.repeat(width * height);
    let mask = disc_mask(block_size);

    for (i, &color) in cells.iter().enumerate() {
        let (gx, gy) = grid.coords(i);
        let origin_x = border_width + gx * block_size;
        let origin_y = border_width + gy * block_size;
        let px = color.to_rgba();

        for by in 0..block_size {
            let row = &mask[by * block_size..(by + 1) * block_size];
            let line_start = ((origin_y + by) * width + origin_x) * 4;
            for (bx, &inside) in row.iter().enumerate() {
                if inside {
                    let o = line_start + bx * 4;
                    rgba[o..o + 4].copy_from_slice(&px);
                }
            }
        }
    }

    Ok(RenderedMosaic::new(rgba, width, height))
}
