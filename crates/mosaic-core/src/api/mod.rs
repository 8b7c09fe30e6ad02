//! Public API for the mosaic-core crate.
//!
//! This module provides the high-level API: the [`MosaicBuilder`] builder,
//! the one-shot [`quantize`] functions, [`Variant`] and the unified
//! [`MosaicError`] type.

mod builder;
mod error;
mod pipeline;
mod variant;

pub use builder::{MosaicBuilder, DEFAULT_BLOCK_SIZE};
pub use error::MosaicError;
pub use pipeline::{quantize, quantize_indices};
pub use variant::{UnknownVariant, Variant};
