//! Double buffer of logical pixels
//!
//! `target` is what the application asked for, `current` is what was last
//! committed to the hardware. Only the draw pass writes `current`.

use crate::color::{BLACK, Rgb};
use crate::error::RangeError;

#[derive(Debug, Clone)]
pub struct FrameBuffer<const N: usize> {
    current: [Rgb; N],
    target: [Rgb; N],
}

impl<const N: usize> Default for FrameBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> FrameBuffer<N> {
    /// Create a buffer with both halves black
    pub const fn new() -> Self {
        Self {
            current: [BLACK; N],
            target: [BLACK; N],
        }
    }

    /// Number of logical pixels
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Desired colors
    pub fn target(&self) -> &[Rgb] {
        &self.target
    }

    /// Last committed colors
    pub fn current(&self) -> &[Rgb] {
        &self.current
    }

    /// Set the desired color of one pixel
    pub fn set(&mut self, index: usize, color: Rgb) -> Result<(), RangeError> {
        let slot = self
            .target
            .get_mut(index)
            .ok_or(RangeError::Pixel { index, len: N })?;
        *slot = color;
        Ok(())
    }

    /// Set every desired color to `color`
    pub fn fill(&mut self, color: Rgb) {
        self.target.fill(color);
    }

    /// Set every desired color to black
    pub fn flush(&mut self) {
        self.fill(BLACK);
    }

    /// Move pixel `index` towards its target and return the new color
    ///
    /// Caller guarantees `index < N`.
    pub(crate) fn step(&mut self, index: usize, factor: f32) -> Rgb {
        let next = crate::color::interpolate(self.current[index], self.target[index], factor);
        self.current[index] = next;
        next
    }

    /// Whether `current` already equals `target`
    pub fn is_converged(&self) -> bool {
        self.current == self.target
    }

    /// Largest per-channel gap between `current` and `target`
    pub fn distance(&self) -> u8 {
        self.current
            .iter()
            .zip(self.target.iter())
            .map(|(current, target)| {
                current
                    .r
                    .abs_diff(target.r)
                    .max(current.g.abs_diff(target.g))
                    .max(current.b.abs_diff(target.b))
            })
            .max()
            .unwrap_or(0)
    }
}
