//! Grid-level error diffusion.
//!
//! The diffuser walks the downsampled grid row-major (left to right, top to
//! bottom, no serpentine). Each cell's working color is matched against the
//! palette and the signed difference is handed forward through the kernel.

use super::accumulator::ErrorAccumulator;
use super::kernel::{Kernel, FLOYD_STEINBERG};
use crate::color::DistanceMetric;
use crate::palette::Palette;
use crate::sample::PixelBuffer;

/// Error diffusion over a mosaic-resolution buffer.
///
/// # Example
///
/// ```
/// use mosaic_core::{DistanceMetric, ErrorDiffuser, Palette, PixelBuffer, Rgb};
///
/// let palette = Palette::from_hex(&["#000000", "#ffffff"]).unwrap();
/// let cells = PixelBuffer::filled(Rgb::new(100, 100, 100), 4, 4).unwrap();
///
/// let indices = ErrorDiffuser::new().diffuse(&cells, &palette, DistanceMetric::Euclidean);
/// assert_eq!(indices.len(), 16);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ErrorDiffuser {
    kernel: &'static Kernel,
}

impl Default for ErrorDiffuser {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorDiffuser {
    /// A Floyd-Steinberg diffuser.
    pub fn new() -> Self {
        Self {
            kernel: &FLOYD_STEINBERG,
        }
    }

    /// The kernel in use.
    pub fn kernel(&self) -> &'static Kernel {
        self.kernel
    }

    /// Split `error` into one weighted share per kernel neighbor.
    ///
    /// Returns `(dx, dy, share)` in kernel order. The shares sum to
    /// `error` times the kernel's propagation.
    pub fn shares(&self, error: [f32; 3]) -> impl Iterator<Item = (i32, i32, [f32; 3])> + '_ {
        let divisor = self.kernel.divisor as f32;
        self.kernel.entries.iter().map(move |&(dx, dy, weight)| {
            let w = weight as f32 / divisor;
            (dx, dy, [error[0] * w, error[1] * w, error[2] * w])
        })
    }

    /// Quantize every cell of `cells` with error diffusion.
    ///
    /// Returns one palette index per cell in row-major order.
    pub fn diffuse(&self, cells: &PixelBuffer, palette: &Palette, metric: DistanceMetric) -> Vec<usize> {
        let width = cells.width();
        let height = cells.height();
        let mut accumulator = ErrorAccumulator::new(width, height);
        let mut output = Vec::with_capacity(width * height);

        for y in 0..height {
            for x in 0..width {
                let working = accumulator.working_color(x, y, cells.get(x, y));
                let (nearest_idx, _dist) = palette.find_nearest(working, metric);
                output.push(nearest_idx);

                let error = working.error_to(palette.color(nearest_idx));
                for (dx, dy, share) in self.shares(error) {
                    let nx = x as i64 + dx as i64;
                    let ny = y as i64 + dy as i64;
                    if nx >= 0 && (nx as usize) < width && (ny as usize) < height {
                        let base = cells.get(nx as usize, ny as usize);
                        accumulator.deposit(nx, ny, base, share);
                    }
                }
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    fn black_white() -> Palette {
        Palette::from_hex(&["#000000", "#ffffff"]).unwrap()
    }

    #[test]
    fn test_shares_sum_to_error() {
        let diffuser = ErrorDiffuser::new();
        let error = [32.0, -16.0, 7.5];
        let shares: Vec<_> = diffuser.shares(error).collect();
        assert_eq!(shares.len(), 4);

        for c in 0..3 {
            let total: f32 = shares.iter().map(|s| s.2[c]).sum();
            assert!((total - error[c]).abs() < 1e-5);
        }
        assert_eq!((shares[0].0, shares[0].1), (1, 0));
        assert_eq!(shares[0].2[0], 14.0);
        assert_eq!(shares[3].2[0], 2.0);
    }

    #[test]
    fn test_first_cell_is_undisturbed() {
        let cells = PixelBuffer::filled(Rgb::new(100, 100, 100), 3, 3).unwrap();
        let indices = ErrorDiffuser::new().diffuse(&cells, &black_white(), DistanceMetric::Euclidean);
        // 100 is nearer black than white
        assert_eq!(indices[0], 0);
    }

    #[test]
    fn test_error_pushes_right_neighbor() {
        // 100 -> black leaves +100; the right neighbor gets 7/16 of it:
        // 100 + 43.75 = 143.75 -> white
        let cells = PixelBuffer::filled(Rgb::new(100, 100, 100), 2, 1).unwrap();
        let indices = ErrorDiffuser::new().diffuse(&cells, &black_white(), DistanceMetric::Euclidean);
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn test_mid_grey_produces_mix() {
        let cells = PixelBuffer::filled(Rgb::new(128, 128, 128), 10, 10).unwrap();
        for metric in [DistanceMetric::Euclidean, DistanceMetric::Ciede2000] {
            let indices = ErrorDiffuser::new().diffuse(&cells, &black_white(), metric);
            let white = indices.iter().filter(|&&i| i == 1).count();
            assert!(white > 0 && white < 100, "{metric}: {white} white cells");
        }
    }

    #[test]
    fn test_solid_palette_colors_stay_exact() {
        let palette = black_white();
        for (idx, color) in [(0, Rgb::BLACK), (1, Rgb::WHITE)] {
            let cells = PixelBuffer::filled(color, 5, 4).unwrap();
            let indices = ErrorDiffuser::new().diffuse(&cells, &palette, DistanceMetric::Ciede2000);
            assert!(indices.iter().all(|&i| i == idx));
        }
    }

    #[test]
    fn test_brightness_is_roughly_preserved() {
        let cells = PixelBuffer::filled(Rgb::new(77, 77, 77), 20, 20).unwrap();
        let indices = ErrorDiffuser::new().diffuse(&cells, &black_white(), DistanceMetric::Euclidean);
        let white_ratio = indices.iter().filter(|&&i| i == 1).count() as f32 / 400.0;
        assert!(
            (white_ratio - 77.0 / 255.0).abs() < 0.1,
            "white ratio {white_ratio}"
        );
    }
}
