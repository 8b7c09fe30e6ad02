//! Color types, conversions and distance metrics
//!
//! # Color Spaces
//!
//! - **Rgb**: 8-bit gamma-encoded sRGB. Used for pixels, palettes and output.
//! - **LinearRgb**: Linear light intensity, the first step towards CIE XYZ.
//! - **Lab**: CIE L\*a\*b\* (D65), where the CIEDE2000 metric is evaluated.
//!
//! # Example
//!
//! ```
//! use mosaic_core::{distance, DistanceMetric, Lab, Rgb};
//!
//! let orange = Rgb::new(0xE6, 0x7E, 0x22);
//! let lab = Lab::from(orange);
//! assert!(lab.l > 50.0);
//!
//! let d = distance(orange, Rgb::new(0xD3, 0x54, 0x00), DistanceMetric::Ciede2000);
//! assert!(d > 0.0);
//! ```

mod distance;
mod lab;
mod linear_rgb;
mod lut;
mod rgb;

pub use distance::{distance, DistanceMetric};
pub(crate) use distance::{ciede2000_with_lab, euclidean};
pub use lab::Lab;
pub use linear_rgb::LinearRgb;
pub use rgb::Rgb;
