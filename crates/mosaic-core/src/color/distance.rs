//! Color distance metrics
//!
//! Two interchangeable metrics share one contract: the result is
//! non-negative, zero for identical colors and symmetric in its arguments.

use std::fmt;

use super::lab::Lab;
use super::rgb::Rgb;

/// Distance metric for nearest-color matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DistanceMetric {
    /// Straight-line distance in 8-bit RGB space.
    ///
    /// `sqrt(dr² + dg² + db²)`, ranging from 0 to about 441.67.
    #[default]
    Euclidean,

    /// CIEDE2000 ΔE₀₀ between the CIE Lab (D65) coordinates of both colors.
    ///
    /// Tracks perceived difference far better than RGB distance, especially
    /// around blues and near-neutral tones.
    Ciede2000,
}

impl DistanceMetric {
    /// Short lowercase name, as used in logs and configuration.
    pub fn name(self) -> &'static str {
        match self {
            DistanceMetric::Euclidean => "euclidean",
            DistanceMetric::Ciede2000 => "ciede2000",
        }
    }
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Distance between two colors under the given metric.
///
/// # Example
///
/// ```
/// use mosaic_core::{distance, DistanceMetric, Rgb};
///
/// let d = distance(Rgb::new(0, 0, 0), Rgb::new(3, 4, 0), DistanceMetric::Euclidean);
/// assert_eq!(d, 5.0);
/// ```
pub fn distance(a: Rgb, b: Rgb, metric: DistanceMetric) -> f32 {
    match metric {
        DistanceMetric::Euclidean => euclidean(a, b),
        DistanceMetric::Ciede2000 => ciede2000_with_lab(a, Lab::from(a), b, Lab::from(b)),
    }
}

#[inline]
pub(crate) fn euclidean(a: Rgb, b: Rgb) -> f32 {
    let [dr, dg, db] = a.error_to(b);
    (dr * dr + dg * dg + db * db).sqrt()
}

/// CIEDE2000 on already-converted Lab values.
///
/// The pair is always evaluated with the byte-wise smaller color first so
/// `d(a, b)` and `d(b, a)` agree to the last bit.
#[inline]
pub(crate) fn ciede2000_with_lab(a: Rgb, a_lab: Lab, b: Rgb, b_lab: Lab) -> f32 {
    if a == b {
        return 0.0;
    }
    if a <= b {
        a_lab.ciede2000(b_lab)
    } else {
        b_lab.ciede2000(a_lab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [Rgb; 8] = [
        Rgb::BLACK,
        Rgb::WHITE,
        Rgb::new(128, 128, 128),
        Rgb::new(0xFF, 0x57, 0x33),
        Rgb::new(0x34, 0x98, 0xDB),
        Rgb::new(0x3d, 0x3f, 0x43),
        Rgb::new(0x3f, 0x3d, 0x3b),
        Rgb::new(1, 254, 17),
    ];

    const METRICS: [DistanceMetric; 2] = [DistanceMetric::Euclidean, DistanceMetric::Ciede2000];

    #[test]
    fn test_distance_is_zero_for_identical_colors() {
        for metric in METRICS {
            for c in SAMPLES {
                assert_eq!(distance(c, c, metric), 0.0, "{metric} on {c}");
            }
        }
    }

    #[test]
    fn test_distance_is_symmetric_and_non_negative() {
        for metric in METRICS {
            for a in SAMPLES {
                for b in SAMPLES {
                    let ab = distance(a, b, metric);
                    let ba = distance(b, a, metric);
                    assert!(ab >= 0.0);
                    assert_eq!(ab.to_bits(), ba.to_bits(), "{metric}: {a} vs {b}");
                    if a != b {
                        assert!(ab > 0.0, "{metric}: {a} vs {b} should differ");
                    }
                }
            }
        }
    }

    #[test]
    fn test_euclidean_extremes() {
        let d = distance(Rgb::BLACK, Rgb::WHITE, DistanceMetric::Euclidean);
        assert!((d - 441.672_96).abs() < 1e-3);
    }

    #[test]
    fn test_mid_grey_is_nearer_to_white_under_both_metrics() {
        let grey = Rgb::new(128, 128, 128);
        for metric in METRICS {
            let to_white = distance(grey, Rgb::WHITE, metric);
            let to_black = distance(grey, Rgb::BLACK, metric);
            assert!(to_white < to_black, "{metric}: {to_white} vs {to_black}");
        }
    }

    #[test]
    fn test_metric_names() {
        assert_eq!(DistanceMetric::Euclidean.to_string(), "euclidean");
        assert_eq!(DistanceMetric::Ciede2000.to_string(), "ciede2000");
        assert_eq!(DistanceMetric::default(), DistanceMetric::Euclidean);
    }
}
