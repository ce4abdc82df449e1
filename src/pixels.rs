//! In-memory strip state
//!
//! Programs read the current color of a pixel back out of the buffer before
//! blending away from it, so the buffer is the single source of truth for
//! what the strip shows.

use crate::color::{BLACK, Rgb, darken};

/// Fixed-size pixel buffer for a strip of `N` pixels
#[derive(Debug, Clone)]
pub struct PixelBuffer<const N: usize> {
    pixels: [Rgb; N],
}

impl<const N: usize> Default for PixelBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PixelBuffer<N> {
    /// Create a buffer with every pixel off
    pub const fn new() -> Self {
        Self { pixels: [BLACK; N] }
    }

    /// Number of pixels
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Current color of a pixel, `None` when out of range
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.pixels.get(index).copied()
    }

    /// Current color of a pixel, black when out of range
    pub fn color(&self, index: usize) -> Rgb {
        self.get(index).unwrap_or(BLACK)
    }

    /// Set a single pixel
    ///
    /// Writing past the end is a bug in the caller: it trips a debug assertion
    /// and is ignored in release builds.
    pub fn set(&mut self, index: usize, color: Rgb) {
        debug_assert!(index < N, "pixel index {index} out of range for {N} pixels");
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    /// Set every pixel to one color
    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.fill(BLACK);
    }

    /// Darken every pixel by `amount`, stopping at black
    pub fn darken_all(&mut self, amount: u8) {
        for pixel in &mut self.pixels {
            *pixel = darken(*pixel, amount);
        }
    }

    /// Rotate the contents towards higher indices, wrapping around
    pub fn rotate_right(&mut self, count: usize) {
        if N == 0 {
            return;
        }
        self.pixels.rotate_right(count % N);
    }

    pub fn as_slice(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rgb> {
        self.pixels.iter()
    }
}
