//! Rendering of resolved cell colors into an RGBA raster.
//!
//! [`render`] paints each cell as a disc tile and frames the grid with a
//! black border; [`RenderedMosaic`] is the result.

mod rendered_mosaic;
mod renderer;

pub use rendered_mosaic::RenderedMosaic;
pub use renderer::{render, MAX_RASTER_BYTES};
