// Generated LUT tables and per-channel loops
#![allow(
    clippy::excessive_precision,
    clippy::needless_range_loop,
    clippy::module_inception
)]

//! mosaic-core: palette quantization and disc-tile rendering for photo mosaics
//!
//! This library turns a decoded photograph into a mosaic: the image is
//! sampled onto a coarse grid, each cell is matched to the nearest color of
//! a small tile palette (optionally with error diffusion between cells), and
//! the result is painted as colored discs inside a bordered tile layout.
//!
//! The crate performs no I/O; callers hand in decoded RGB pixels and get
//! back colors, palette indices or an RGBA raster.
//!
//! # Quick Start
//!
//! The [`MosaicBuilder`] builder is the primary entry point:
//!
//! ```
//! use mosaic_core::{MosaicBuilder, MosaicGrid, PixelBuffer, Rgb, Variant};
//!
//! let variant: Variant = "CIEDE_FLOYD".parse().unwrap();
//! let builder = MosaicBuilder::for_variant(variant)
//!     .grid(MosaicGrid::new(8, 12).unwrap())
//!     .block_size(4);
//!
//! let image = PixelBuffer::filled(Rgb::new(200, 120, 40), 80, 120).unwrap();
//! let mosaic = builder.render(&image).unwrap();
//!
//! assert_eq!(mosaic.width(), 8 * 4 + 2 * 4);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! PixelBuffer (source resolution)
//!     |
//!     v
//! GridSampler::downsample     (one center pixel per cell)
//!     |
//!     +--- dither off ---> Palette::find_nearest per cell
//!     |
//!     +--- dither on ----> ErrorDiffuser (Floyd-Steinberg, row-major)
//!     |
//!     v
//! cell colors (row-major)
//!     |
//!     v
//! render                      (disc tiles + black border, RGBA)
//! ```
//!
//! # Distance Metrics
//!
//! - [`DistanceMetric::Euclidean`]: straight-line distance in 8-bit RGB.
//! - [`DistanceMetric::Ciede2000`]: CIEDE2000 ΔE₀₀ in CIE Lab (D65),
//!   reached through linear RGB and XYZ.
//!
//! Both metrics are symmetric and zero only for identical colors. Exact
//! ties go to the palette entry that comes first.
//!
//! # Error Diffusion
//!
//! Diffusion runs on the downsampled grid, not on source pixels. The
//! working value of a cell is its sampled color plus accumulated error,
//! rounded to 8 bits. The quantization error is spread with the
//! Floyd-Steinberg weights 7/16, 3/16, 5/16 and 1/16; every adjusted
//! neighbour is clamped to `[0, 255]`, and shares that would land outside
//! the grid are dropped.

pub mod api;
pub mod color;
pub mod dither;
pub mod output;
pub mod palette;
pub mod sample;


pub use api::{
    quantize, quantize_indices, MosaicBuilder, MosaicError, UnknownVariant, Variant,
    DEFAULT_BLOCK_SIZE,
};
pub use color::{distance, DistanceMetric, Lab, LinearRgb, Rgb};
pub use dither::{ErrorAccumulator, ErrorDiffuser};
pub use output::{render, RenderedMosaic, MAX_RASTER_BYTES};
pub use palette::{
    full_palette, grayscale_palette, match_nearest, Palette, PaletteEntry, PaletteError,
    PaletteKind, ParseColorError,
};
pub use sample::{sample_center, GridSampler, MosaicGrid, PixelBuffer};
