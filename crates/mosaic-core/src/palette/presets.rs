//! Built-in mosaic palettes
//!
//! The full palette holds 29 tile colors. The grayscale palette is its first
//! eight entries, running from white through warm and cool greys to black.

use std::fmt;
use std::str::FromStr;

use super::palette::{Palette, PaletteEntry};
use crate::color::Rgb;

/// Tile colors and their identifiers, in matching priority order.
///
/// `#D35400` takes slot 24 under identifier 30; there is no identifier 24.
const FULL: [(Rgb, &str); 29] = [
    (Rgb::new(0xff, 0xff, 0xff), "1"),
    (Rgb::new(0xc9, 0xc5, 0xbe), "2"),
    (Rgb::new(0xa0, 0xa4, 0xb1), "3"),
    (Rgb::new(0x92, 0x97, 0x98), "4"),
    (Rgb::new(0x61, 0x66, 0x67), "5"),
    (Rgb::new(0x3d, 0x3f, 0x43), "6"),
    (Rgb::new(0x3f, 0x3d, 0x3b), "7"),
    (Rgb::new(0x00, 0x00, 0x00), "8"),
    (Rgb::new(0xFF, 0x57, 0x33), "9"),
    (Rgb::new(0x33, 0xFF, 0x57), "10"),
    (Rgb::new(0x33, 0x57, 0xFF), "11"),
    (Rgb::new(0xF1, 0xC4, 0x0F), "12"),
    (Rgb::new(0x8E, 0x44, 0xAD), "13"),
    (Rgb::new(0x34, 0x98, 0xDB), "14"),
    (Rgb::new(0xE7, 0x4C, 0x3C), "15"),
    (Rgb::new(0x1A, 0xBC, 0x9C), "16"),
    (Rgb::new(0x2E, 0xCC, 0x71), "17"),
    (Rgb::new(0xE6, 0x7E, 0x22), "18"),
    (Rgb::new(0x9B, 0x59, 0xB6), "19"),
    (Rgb::new(0x34, 0x49, 0x5E), "20"),
    (Rgb::new(0x16, 0xA0, 0x85), "21"),
    (Rgb::new(0x27, 0xAE, 0x60), "22"),
    (Rgb::new(0x29, 0x80, 0xB9), "23"),
    (Rgb::new(0xD3, 0x54, 0x00), "30"),
    (Rgb::new(0xC0, 0x39, 0x2B), "25"),
    (Rgb::new(0xBD, 0xC3, 0xC7), "26"),
    (Rgb::new(0x7F, 0x8C, 0x8D), "27"),
    (Rgb::new(0xEC, 0xF0, 0xF1), "28"),
    (Rgb::new(0xF3, 0x9C, 0x12), "29"),
];

/// Number of leading entries of the full palette that form the grayscale set.
const GRAYSCALE_LEN: usize = 8;

fn build(entries: &[(Rgb, &str)]) -> Palette {
    Palette::from_validated(
        entries
            .iter()
            .map(|&(color, id)| PaletteEntry::new(id, color))
            .collect(),
    )
}

/// The full 29-color tile palette.
pub fn full_palette() -> Palette {
    build(&FULL)
}

/// The 8-color grayscale palette (white, five greys, black).
pub fn grayscale_palette() -> Palette {
    build(&FULL[..GRAYSCALE_LEN])
}

/// Which built-in palette a variant draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaletteKind {
    /// All 29 tile colors
    #[default]
    Full,
    /// The white-to-black subset
    Grayscale,
}

impl PaletteKind {
    /// Both kinds, full first.
    pub const ALL: [PaletteKind; 2] = [PaletteKind::Full, PaletteKind::Grayscale];

    /// Build the palette for this kind.
    pub fn palette(self) -> Palette {
        match self {
            PaletteKind::Full => full_palette(),
            PaletteKind::Grayscale => grayscale_palette(),
        }
    }

    /// Lowercase name, as used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            PaletteKind::Full => "full",
            PaletteKind::Grayscale => "grayscale",
        }
    }
}

impl fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaletteKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(PaletteKind::Full),
            "grayscale" | "greyscale" | "gray" | "grey" => Ok(PaletteKind::Grayscale),
            other => Err(format!("unknown palette '{other}' (expected full or grayscale)")),
        }
    }
}
