//! Named pipeline configurations.
//!
//! A [`Variant`] fixes the three choices that distinguish one output image
//! from another: which palette, which distance metric, and whether error
//! diffusion is applied.

use std::fmt;
use std::str::FromStr;

use crate::color::DistanceMetric;
use crate::palette::PaletteKind;

/// One (palette x metric x dither) combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Variant {
    /// Built-in palette the cells are matched against
    pub palette: PaletteKind,
    /// Distance metric used for matching
    pub metric: DistanceMetric,
    /// Whether Floyd-Steinberg error diffusion is applied
    pub dither: bool,
}

impl Variant {
    /// The eight reference variants, in output order.
    pub const ALL: [Variant; 8] = [
        Variant::new(PaletteKind::Full, DistanceMetric::Euclidean, false),
        Variant::new(PaletteKind::Full, DistanceMetric::Ciede2000, false),
        Variant::new(PaletteKind::Full, DistanceMetric::Euclidean, true),
        Variant::new(PaletteKind::Full, DistanceMetric::Ciede2000, true),
        Variant::new(PaletteKind::Grayscale, DistanceMetric::Euclidean, false),
        Variant::new(PaletteKind::Grayscale, DistanceMetric::Ciede2000, false),
        Variant::new(PaletteKind::Grayscale, DistanceMetric::Euclidean, true),
        Variant::new(PaletteKind::Grayscale, DistanceMetric::Ciede2000, true),
    ];

    /// Create a variant.
    pub const fn new(palette: PaletteKind, metric: DistanceMetric, dither: bool) -> Self {
        Self {
            palette,
            metric,
            dither,
        }
    }

    /// Upper-case output name, e.g. `CIEDE_FLOYD_GRAYSCALES`.
    ///
    /// ```
    /// use mosaic_core::Variant;
    ///
    /// let names: Vec<String> = Variant::ALL.iter().map(|v| v.name()).collect();
    /// assert_eq!(names[0], "EUKLID");
    /// assert_eq!(names[7], "CIEDE_FLOYD_GRAYSCALES");
    /// ```
    pub fn name(&self) -> String {
        let mut name = String::from(match self.metric {
            DistanceMetric::Euclidean => "EUKLID",
            DistanceMetric::Ciede2000 => "CIEDE",
        });
        if self.dither {
            name.push_str("_FLOYD");
        }
        if self.palette == PaletteKind::Grayscale {
            name.push_str("_GRAYSCALES");
        }
        name
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// A string that names none of the eight variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown variant '{}'", self.0)
    }
}

impl std::error::Error for UnknownVariant {}

impl FromStr for Variant {
    type Err = UnknownVariant;

    /// Parse a variant name, case-insensitively.
    ///
    /// Accepts the output names (`EUKLID_FLOYD`) and the same names with
    /// `-` as separator (`euklid-floyd`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        Variant::ALL
            .into_iter()
            .find(|v| v.name() == normalized)
            .ok_or_else(|| UnknownVariant(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_names_are_unique_and_round_trip() {
        let expected = [
            "EUKLID",
            "CIEDE",
            "EUKLID_FLOYD",
            "CIEDE_FLOYD",
            "EUKLID_GRAYSCALES",
            "CIEDE_GRAYSCALES",
            "EUKLID_FLOYD_GRAYSCALES",
            "CIEDE_FLOYD_GRAYSCALES",
        ];
        for (variant, name) in Variant::ALL.iter().zip(expected) {
            assert_eq!(variant.name(), name);
            assert_eq!(name.parse::<Variant>().unwrap(), *variant);
        }
    }

    #[test]
    fn test_parse_is_forgiving_about_case_and_separator() {
        let v: Variant = " ciede-floyd ".parse().unwrap();
        assert_eq!(v, Variant::new(PaletteKind::Full, DistanceMetric::Ciede2000, true));
    }

    #[test]
    fn test_unknown_variant() {
        let err = "FLOYD".parse::<Variant>().unwrap_err();
        assert_eq!(err.to_string(), "unknown variant 'FLOYD'");
    }
}
