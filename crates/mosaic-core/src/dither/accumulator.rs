//! Grid-resolution error accumulator.

use crate::color::Rgb;

/// Signed per-channel error carried into each cell of the grid.
///
/// Lives for exactly one diffusion pass. A cell's working color is its
/// sampled base color plus the error accumulated so far; every deposit is
/// clamped so that this sum stays inside `0..=255` on each channel.
#[derive(Debug)]
pub struct ErrorAccumulator {
    errors: Vec<[f32; 3]>,
    width: usize,
    height: usize,
}

impl ErrorAccumulator {
    /// A zeroed accumulator for a `width x height` grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            errors: vec![[0.0; 3]; width * height],
            width,
            height,
        }
    }

    /// Accumulated error at `(x, y)`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [f32; 3] {
        self.errors[y * self.width + x]
    }

    /// Working color of a cell: `base + accumulated`, rounded to 8 bits.
    #[inline]
    pub fn working_color(&self, x: usize, y: usize, base: Rgb) -> Rgb {
        let acc = self.get(x, y);
        let [r, g, b] = base.to_f32();
        Rgb::from_f32_clamped(r + acc[0], g + acc[1], b + acc[2])
    }

    /// Add `share` to the cell at `(nx, ny)` if it lies on the grid.
    ///
    /// The adjusted working value `base + accumulated + share` is clamped to
    /// `[0, 255]` per channel before being stored back. Offsets that land
    /// outside the grid are dropped without wrapping.
    #[inline]
    pub fn deposit(&mut self, nx: i64, ny: i64, base: Rgb, share: [f32; 3]) {
        if nx < 0 || ny < 0 || nx as usize >= self.width || ny as usize >= self.height {
            return;
        }
        let idx = ny as usize * self.width + nx as usize;
        let base = base.to_f32();
        let acc = &mut self.errors[idx];
        for c in 0..3 {
            let adjusted = (base[c] + acc[c] + share[c]).clamp(0.0, 255.0);
            acc[c] = adjusted - base[c];
        }
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }
}
