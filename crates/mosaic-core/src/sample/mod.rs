//! Pixel buffers, grid geometry and source-to-grid sampling.

mod buffer;
mod grid;
mod sampler;

pub use buffer::PixelBuffer;
pub use grid::MosaicGrid;
pub use sampler::{sample_center, GridSampler};
