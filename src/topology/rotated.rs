use super::Topology;
use crate::color::{Rgb, rgb_to_u32};

/// Linear strip or ring mounted with an arbitrary rotation
///
/// Logical pixel `i` lands on `(len + i + offset) mod len`. The offset may be
/// negative or larger than the strip; the mapping stays a bijection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotatedStrip {
    len: u16,
    offset: i32,
}

impl RotatedStrip {
    pub const fn new(len: u16) -> Self {
        Self { len, offset: 0 }
    }

    /// Set the rotation offset
    #[must_use]
    pub const fn with_offset(mut self, offset: i32) -> Self {
        self.offset = offset;
        self
    }

    pub const fn offset(&self) -> i32 {
        self.offset
    }

    pub fn set_offset(&mut self, offset: i32) {
        self.offset = offset;
    }

    /// Physical index of logical pixel `index`
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn physical_index(&self, index: usize) -> u16 {
        if self.len == 0 {
            return 0;
        }
        let len = self.len as i64;
        (index as i64 + self.offset as i64).rem_euclid(len) as u16
    }
}

impl Topology for RotatedStrip {
    type Address = u16;
    type Color = u32;

    fn pixel_count(&self) -> usize {
        usize::from(self.len)
    }

    fn address(&self, index: usize) -> u16 {
        self.physical_index(index)
    }

    fn encode(color: Rgb) -> u32 {
        rgb_to_u32(color)
    }
}
