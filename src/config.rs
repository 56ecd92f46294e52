//! Per-device configuration supplied at construction

use crate::topology::{CALENDAR_LED_COUNT, INDICATOR_COUNT};

/// Width of the word clock matrix
pub const MATRIX_WIDTH: usize = 11;
/// Height of the word clock matrix
pub const MATRIX_HEIGHT: usize = 11;
/// Number of LEDs on the ring
pub const RING_LED_COUNT: usize = 60;
/// Logical pixels of the matrix, grid plus indicators
pub const MATRIX_PIXEL_COUNT: usize = MATRIX_WIDTH * MATRIX_HEIGHT + INDICATOR_COUNT;

/// Device configuration
///
/// Fields can be changed later through the device setters; the config only
/// holds the boot values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceConfig {
    /// Number of logical pixels, strip and ring only
    pub led_count: u16,
    /// Current ceiling in mA, `None` for unbounded
    pub current_limit: Option<u32>,
    /// Base brightness (0-255)
    pub brightness: u8,
    /// Rotation offset, strip and ring only
    pub offset: i32,
}

#[allow(clippy::cast_possible_truncation)]
impl DeviceConfig {
    /// Calendar strip: 50 LEDs, 300 mA
    pub const CALENDAR: Self = Self {
        led_count: CALENDAR_LED_COUNT as u16,
        current_limit: Some(300),
        brightness: 255,
        offset: 0,
    };

    /// Ring: 60 LEDs, 1000 mA
    pub const RING: Self = Self {
        led_count: RING_LED_COUNT as u16,
        current_limit: Some(1000),
        brightness: 255,
        offset: 0,
    };

    /// Matrix: 11x11 grid plus indicators, no current limit
    pub const MATRIX: Self = Self {
        led_count: MATRIX_PIXEL_COUNT as u16,
        current_limit: None,
        brightness: 255,
        offset: 0,
    };

    /// Set the current limit (mA)
    #[must_use]
    pub const fn with_current_limit(mut self, limit: u32) -> Self {
        self.current_limit = Some(limit);
        self
    }

    /// Remove the current limit
    #[must_use]
    pub const fn unbounded(mut self) -> Self {
        self.current_limit = None;
        self
    }

    /// Set the base brightness
    #[must_use]
    pub const fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    /// Set the rotation offset
    #[must_use]
    pub const fn with_offset(mut self, offset: i32) -> Self {
        self.offset = offset;
        self
    }
}
