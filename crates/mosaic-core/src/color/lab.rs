//! CIE L\*a\*b\* color space and the CIEDE2000 color difference
//!
//! Lab coordinates are computed from linear sRGB through CIE XYZ with the
//! D65 reference white. CIEDE2000 is the 2000 revision of the CIE
//! perceptual color-difference formula.
//!
//! # References
//!
//! G. Sharma, W. Wu, E. N. Dalal, "The CIEDE2000 Color-Difference Formula:
//! Implementation Notes, Supplementary Test Data, and Mathematical
//! Observations", Color Research & Application, 2005.

use super::linear_rgb::LinearRgb;
use super::rgb::Rgb;

/// D65 reference white in XYZ (Y normalized to 1).
const WHITE_X: f32 = 0.95047;
const WHITE_Y: f32 = 1.0;
const WHITE_Z: f32 = 1.08883;

/// (6/29)^3: below this the cube root is replaced by a linear segment.
const EPSILON: f32 = 216.0 / 24389.0;
/// (29/6)^2 / 3
const KAPPA_SLOPE: f32 = 841.0 / 108.0;

/// 25^7, the chroma pivot of the G and R_C terms.
const POW25_7: f64 = 6_103_515_625.0;

/// A color in CIE L\*a\*b\* (D65).
///
/// # Components
///
/// - `l`: Lightness (0.0 = black, 100.0 = white)
/// - `a`: Green-red axis (negative = green, positive = red)
/// - `b`: Blue-yellow axis (negative = blue, positive = yellow)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness: 0.0 (black) to 100.0 (white)
    pub l: f32,
    /// Green-red axis
    pub a: f32,
    /// Blue-yellow axis
    pub b: f32,
}

impl Lab {
    /// Create a new Lab color.
    #[inline]
    pub fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// Chroma (distance from the neutral axis).
    #[inline]
    pub fn chroma(self) -> f32 {
        (self.a * self.a + self.b * self.b).sqrt()
    }

    /// CIEDE2000 color difference ΔE₀₀ with kL = kC = kH = 1.
    ///
    /// Evaluated in `f64`. The result is non-negative and exactly zero when
    /// both colors are identical.
    ///
    /// # Example
    ///
    /// ```
    /// use mosaic_core::Lab;
    ///
    /// let a = Lab::new(50.0, 2.6772, -79.7751);
    /// let b = Lab::new(50.0, 0.0, -82.7485);
    /// assert!((a.ciede2000(b) - 2.0425).abs() < 1e-3);
    /// ```
    pub fn ciede2000(self, other: Lab) -> f32 {
        let (l1, a1, b1) = (self.l as f64, self.a as f64, self.b as f64);
        let (l2, a2, b2) = (other.l as f64, other.a as f64, other.b as f64);

        // Step 1: a' with the chroma-dependent G correction, then C' and h'
        let c1 = (a1 * a1 + b1 * b1).sqrt();
        let c2 = (a2 * a2 + b2 * b2).sqrt();
        let c_bar7 = ((c1 + c2) / 2.0).powi(7);
        let g = 0.5 * (1.0 - (c_bar7 / (c_bar7 + POW25_7)).sqrt());

        let a1p = (1.0 + g) * a1;
        let a2p = (1.0 + g) * a2;
        let c1p = (a1p * a1p + b1 * b1).sqrt();
        let c2p = (a2p * a2p + b2 * b2).sqrt();
        let h1p = hue_degrees(b1, a1p, c1p);
        let h2p = hue_degrees(b2, a2p, c2p);

        // Step 2: ΔL', ΔC', ΔH'
        let delta_lp = l2 - l1;
        let delta_cp = c2p - c1p;
        let chroma_product = c1p * c2p;

        let delta_hp = if chroma_product == 0.0 {
            0.0
        } else {
            let diff = h2p - h1p;
            if diff.abs() <= 180.0 {
                diff
            } else if diff > 180.0 {
                diff - 360.0
            } else {
                diff + 360.0
            }
        };
        let delta_big_hp = 2.0 * chroma_product.sqrt() * (delta_hp.to_radians() / 2.0).sin();

        // Step 3: weighting functions
        let l_bar = (l1 + l2) / 2.0;
        let cp_bar = (c1p + c2p) / 2.0;

        let hp_bar = if chroma_product == 0.0 {
            h1p + h2p
        } else if (h1p - h2p).abs() <= 180.0 {
            (h1p + h2p) / 2.0
        } else if h1p + h2p < 360.0 {
            (h1p + h2p + 360.0) / 2.0
        } else {
            (h1p + h2p - 360.0) / 2.0
        };

        let t = 1.0 - 0.17 * (hp_bar - 30.0).to_radians().cos()
            + 0.24 * (2.0 * hp_bar).to_radians().cos()
            + 0.32 * (3.0 * hp_bar + 6.0).to_radians().cos()
            - 0.20 * (4.0 * hp_bar - 63.0).to_radians().cos();

        let delta_theta = 30.0 * (-((hp_bar - 275.0) / 25.0).powi(2)).exp();
        let cp_bar7 = cp_bar.powi(7);
        let r_c = 2.0 * (cp_bar7 / (cp_bar7 + POW25_7)).sqrt();

        let l_offset = (l_bar - 50.0).powi(2);
        let s_l = 1.0 + 0.015 * l_offset / (20.0 + l_offset).sqrt();
        let s_c = 1.0 + 0.045 * cp_bar;
        let s_h = 1.0 + 0.015 * cp_bar * t;
        let r_t = -(2.0 * delta_theta).to_radians().sin() * r_c;

        let term_l = delta_lp / s_l;
        let term_c = delta_cp / s_c;
        let term_h = delta_big_hp / s_h;

        let sum = term_l * term_l + term_c * term_c + term_h * term_h + r_t * term_c * term_h;
        sum.max(0.0).sqrt() as f32
    }
}

/// Hue angle in degrees `[0, 360)`, defined as 0 for achromatic colors.
#[inline]
fn hue_degrees(b: f64, a_prime: f64, c_prime: f64) -> f64 {
    if c_prime == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a_prime).to_degrees();
    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}

#[inline]
fn lab_f(t: f32) -> f32 {
    if t > EPSILON {
        t.cbrt()
    } else {
        KAPPA_SLOPE * t + 4.0 / 29.0
    }
}

impl From<LinearRgb> for Lab {
    /// Convert linear sRGB to Lab via CIE XYZ (D65).
    fn from(rgb: LinearRgb) -> Self {
        let x = 0.4124564 * rgb.r + 0.3575761 * rgb.g + 0.1804375 * rgb.b;
        let y = 0.2126729 * rgb.r + 0.7151522 * rgb.g + 0.0721750 * rgb.b;
        let z = 0.0193339 * rgb.r + 0.1191920 * rgb.g + 0.9503041 * rgb.b;

        let fx = lab_f(x / WHITE_X);
        let fy = lab_f(y / WHITE_Y);
        let fz = lab_f(z / WHITE_Z);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl From<Rgb> for Lab {
    fn from(rgb: Rgb) -> Self {
        Lab::from(LinearRgb::from(rgb))
    }
}
