//! Mosaic generator
//!
//! Loads a source photo, runs the mosaic variants from `mosaic-core`
//! concurrently and encodes the results as PNG.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
