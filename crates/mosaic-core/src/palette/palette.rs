//! Palette struct with identifiers and nearest-color matching.
//!
//! A `Palette` is an ordered, duplicate-free list of `(identifier, color)`
//! entries. Order is significant only as a tie-break: when two entries are
//! equally close to a pixel, the one inserted first wins.

use std::collections::HashSet;
use std::str::FromStr;

use super::error::PaletteError;
use crate::color::{ciede2000_with_lab, distance, euclidean, DistanceMetric, Lab, Rgb};

/// One palette slot: an identifier (a piece number, a bead code...) and its color.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PaletteEntry {
    /// Identifier reported for cells that resolve to this entry
    pub id: String,
    /// The entry's color
    pub color: Rgb,
}

impl PaletteEntry {
    /// Create an entry from an identifier and a color.
    pub fn new(id: impl Into<String>, color: Rgb) -> Self {
        Self {
            id: id.into(),
            color,
        }
    }
}

/// An ordered color palette with precomputed Lab coordinates.
///
/// The Lab value of every entry is computed once at construction so that
/// CIEDE2000 matching only converts the pixel side.
///
/// # Example
///
/// ```
/// use mosaic_core::{DistanceMetric, Palette, Rgb};
///
/// let palette = Palette::from_hex(&["#ffffff", "#000000"]).unwrap();
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.id(1), "2");
///
/// let (idx, _) = palette.find_nearest(Rgb::new(20, 20, 20), DistanceMetric::Euclidean);
/// assert_eq!(idx, 1);
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
    lab: Vec<Lab>,
}

impl Palette {
    /// Create a palette from explicit entries.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyPalette`] if `entries` is empty
    /// - [`PaletteError::DuplicateColor`] if a color (compared by bytes)
    ///   appears more than once; `index` is the position of the repeat
    pub fn new(entries: Vec<PaletteEntry>) -> Result<Self, PaletteError> {
        if entries.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        let mut seen = HashSet::new();
        for (i, entry) in entries.iter().enumerate() {
            if !seen.insert(entry.color.to_bytes()) {
                return Err(PaletteError::DuplicateColor { index: i });
            }
        }

        Ok(Self::from_validated(entries))
    }

    /// Build a palette from entries already known to be non-empty and
    /// duplicate-free.
    pub(crate) fn from_validated(entries: Vec<PaletteEntry>) -> Self {
        let lab = entries.iter().map(|e| Lab::from(e.color)).collect();
        Self { entries, lab }
    }

    /// Create a palette from hex strings, assigning identifiers
    /// `"1"`, `"2"`, ... in order.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ParseColor`] if any hex string is invalid,
    /// or other [`PaletteError`] variants for palette validation failures.
    pub fn from_hex(colors: &[&str]) -> Result<Self, PaletteError> {
        let entries = colors
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let color = Rgb::from_str(s).map_err(PaletteError::ParseColor)?;
                Ok(PaletteEntry::new((i + 1).to_string(), color))
            })
            .collect::<Result<Vec<_>, PaletteError>>()?;
        Palette::new(entries)
    }

    /// Create a palette from `(hex, identifier)` pairs.
    ///
    /// ```
    /// use mosaic_core::Palette;
    ///
    /// let palette = Palette::from_entries(&[("#ffffff", "W"), ("#000", "K")]).unwrap();
    /// assert_eq!(palette.id(1), "K");
    /// ```
    pub fn from_entries(pairs: &[(&str, &str)]) -> Result<Self, PaletteError> {
        let entries = pairs
            .iter()
            .map(|(hex, id)| {
                let color = Rgb::from_str(hex).map_err(PaletteError::ParseColor)?;
                Ok(PaletteEntry::new(*id, color))
            })
            .collect::<Result<Vec<_>, PaletteError>>()?;
        Palette::new(entries)
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in palette order.
    #[inline]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Color at the given index.
    #[inline]
    pub fn color(&self, idx: usize) -> Rgb {
        self.entries[idx].color
    }

    /// Identifier at the given index.
    #[inline]
    pub fn id(&self, idx: usize) -> &str {
        &self.entries[idx].id
    }

    /// Palette colors in order.
    pub fn colors(&self) -> Vec<Rgb> {
        self.entries.iter().map(|e| e.color).collect()
    }

    /// Index of the entry with this exact color, if any.
    pub fn index_of(&self, color: Rgb) -> Option<usize> {
        self.entries.iter().position(|e| e.color == color)
    }

    /// Returns true if every entry is a neutral grey (R = G = B).
    pub fn is_greyscale(&self) -> bool {
        self.entries.iter().all(|e| e.color.is_grey())
    }

    /// Find the nearest palette entry to `pixel`.
    ///
    /// Returns `(index, distance)`. Every entry is scanned and the first
    /// strictly smaller distance wins, so exact ties resolve to the entry
    /// that comes first in palette order.
    #[inline]
    pub fn find_nearest(&self, pixel: Rgb, metric: DistanceMetric) -> (usize, f32) {
        let mut best_idx = 0;
        let mut best_dist = f32::INFINITY;

        match metric {
            DistanceMetric::Euclidean => {
                for (i, entry) in self.entries.iter().enumerate() {
                    let dist = euclidean(pixel, entry.color);
                    if dist < best_dist {
                        best_dist = dist;
                        best_idx = i;
                    }
                }
            }
            DistanceMetric::Ciede2000 => {
                let pixel_lab = Lab::from(pixel);
                for (i, (entry, &entry_lab)) in self.entries.iter().zip(&self.lab).enumerate() {
                    let dist = ciede2000_with_lab(pixel, pixel_lab, entry.color, entry_lab);
                    if dist < best_dist {
                        best_dist = dist;
                        best_idx = i;
                    }
                }
            }
        }

        (best_idx, best_dist)
    }

    /// Color of the nearest palette entry to `pixel`.
    #[inline]
    pub fn nearest_color(&self, pixel: Rgb, metric: DistanceMetric) -> Rgb {
        self.color(self.find_nearest(pixel, metric).0)
    }
}

/// Find the index of the candidate nearest to `pixel`.
///
/// Same contract as [`Palette::find_nearest`] but on a bare color slice,
/// which may be empty.
///
/// # Errors
///
/// Returns [`PaletteError::EmptyPalette`] if `candidates` is empty.
///
/// # Example
///
/// ```
/// use mosaic_core::{match_nearest, DistanceMetric, Rgb};
///
/// let candidates = [Rgb::WHITE, Rgb::BLACK];
/// let idx = match_nearest(Rgb::new(200, 200, 200), &candidates, DistanceMetric::Ciede2000).unwrap();
/// assert_eq!(idx, 0);
/// ```
pub fn match_nearest(
    pixel: Rgb,
    candidates: &[Rgb],
    metric: DistanceMetric,
) -> Result<usize, PaletteError> {
    if candidates.is_empty() {
        return Err(PaletteError::EmptyPalette);
    }

    let mut best_idx = 0;
    let mut best_dist = f32::INFINITY;
    for (i, &candidate) in candidates.iter().enumerate() {
        let dist = distance(pixel, candidate, metric);
        if dist < best_dist {
            best_dist = dist;
            best_idx = i;
        }
    }
    Ok(best_idx)
}
