//! Logical to physical pixel addressing
//!
//! The engine renders logical pixels in index order; a topology decides
//! where each one lands on the hardware and in which color format.

mod calendar;
mod matrix;
mod rotated;

pub use calendar::{CALENDAR_LED_COUNT, CalendarZone};
pub use matrix::{GridPoint, INDICATOR_COUNT, MatrixTopology};
pub use rotated::RotatedStrip;

use crate::color::Rgb;

/// Maps logical pixel indices onto a physical LED layout
pub trait Topology {
    /// Physical address understood by the output driver
    type Address: Copy;
    /// Color format understood by the output driver
    type Color: Copy;

    /// Number of logical pixels
    fn pixel_count(&self) -> usize;

    /// Physical address of a logical pixel
    ///
    /// `index` is always below [`pixel_count`](Self::pixel_count).
    fn address(&self, index: usize) -> Self::Address;

    /// Convert a color into the hardware format
    fn encode(color: Rgb) -> Self::Color;
}
