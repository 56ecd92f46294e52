//! Current estimation and brightness throttling
//!
//! The model is linear: a channel at full value and full brightness draws
//! 20 mA. The throttle is memoryless and is recomputed from scratch on every
//! frame, so colors hovering near the limit may flicker between throttled
//! and unthrottled brightness.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::Rgb;
use crate::math8::scale_ratio;

/// Current drawn by one channel at full value and full brightness (mA)
pub const MILLIAMPS_PER_CHANNEL: u32 = 20;

/// Estimate the current (mA) one pixel draws at `brightness`
///
/// Both divisions floor on their own, in this order.
#[inline]
pub const fn estimate_current(color: Rgb, brightness: u8) -> u32 {
    let raw = MILLIAMPS_PER_CHANNEL * color.r as u32
        + MILLIAMPS_PER_CHANNEL * color.g as u32
        + MILLIAMPS_PER_CHANNEL * color.b as u32;
    let full = raw / 255;
    (full * brightness as u32) / 255
}

/// Outcome of the throttle decision for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    /// Estimated total current at base brightness (mA)
    pub total_current: u32,
    /// Brightness pushed to the hardware for this frame
    pub brightness: u8,
}

impl FrameStats {
    /// Whether the frame was pushed below base brightness
    pub const fn is_throttled(&self, base_brightness: u8) -> bool {
        self.brightness < base_brightness
    }
}

/// Per-frame power budget
///
/// `limit` of `None` means the budget is unbounded.
#[derive(Debug, Clone, Copy)]
pub struct PowerBudget {
    limit: Option<u32>,
    total: u32,
}

impl PowerBudget {
    pub const fn new(limit: Option<u32>) -> Self {
        Self { limit, total: 0 }
    }

    /// Configured current limit (mA)
    pub const fn limit(&self) -> Option<u32> {
        self.limit
    }

    /// Change the current limit, effective from the next frame
    pub fn set_limit(&mut self, limit: Option<u32>) {
        self.limit = limit;
    }

    /// Start accumulating a new frame
    pub fn begin_frame(&mut self) {
        self.total = 0;
    }

    /// Add one rendered pixel to the running total
    pub fn accumulate(&mut self, color: Rgb, brightness: u8) {
        self.total = self
            .total
            .saturating_add(estimate_current(color, brightness));
    }

    /// Current accumulated since [`begin_frame`](Self::begin_frame)
    pub const fn total(&self) -> u32 {
        self.total
    }

    /// Decide the brightness for the accumulated frame
    pub fn finish_frame(&self, base_brightness: u8) -> FrameStats {
        FrameStats {
            total_current: self.total,
            brightness: throttle(self.total, base_brightness, self.limit),
        }
    }
}

/// Brightness to apply for a frame drawing `total` mA at `base` brightness
///
/// Returns `base` unless `total` exceeds `limit`, in which case the
/// brightness is scaled by `limit / total` and floored.
pub fn throttle(total: u32, base: u8, limit: Option<u32>) -> u8 {
    match limit {
        Some(limit) if total > limit => {
            let brightness = scale_ratio(base, limit, total);
            #[cfg(feature = "esp32-log")]
            println!(
                "[PowerBudget] {} mA over {} mA limit, brightness {} -> {}",
                total, limit, base, brightness
            );
            brightness
        }
        _ => base,
    }
}
