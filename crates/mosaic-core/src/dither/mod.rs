//! Error diffusion at mosaic resolution.
//!
//! Error is diffused between grid cells, never between source pixels: the
//! source is first downsampled to one color per cell and the diffuser runs
//! on that working copy.

mod accumulator;
mod diffuser;
mod kernel;

pub use accumulator::ErrorAccumulator;
pub use diffuser::ErrorDiffuser;
pub use kernel::{Kernel, FLOYD_STEINBERG};
