//! Palette types and utilities
//!
//! Ordered `(identifier, color)` palettes, the nearest-color matcher and
//! the built-in tile palettes.

mod error;
mod palette;
mod presets;

pub use error::{PaletteError, ParseColorError};
pub use palette::{match_nearest, Palette, PaletteEntry};
pub use presets::{full_palette, grayscale_palette, PaletteKind};
