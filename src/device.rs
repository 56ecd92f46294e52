//! Generic render engine shared by every LED device
//!
//! A device owns the frame buffer, the power budget and the output driver.
//! Application code writes targets; [`Device::draw_frame`] moves `current`
//! towards them, estimates the current draw, throttles brightness and pushes
//! the frame to the hardware in one blocking call.

use crate::OutputDriver;
use crate::color::Rgb;
use crate::config::DeviceConfig;
use crate::error::RangeError;
use crate::frame::FrameBuffer;
use crate::logger::{Logger, log_display};
use crate::power::{FrameStats, PowerBudget};
use crate::topology::Topology;

/// LED device parameterized by topology, driver and logger
///
/// N is the capacity of the frame buffer
pub struct Device<T: Topology, D: OutputDriver, L: Logger, const N: usize> {
    // External dependencies
    topology: T,
    driver: D,
    logger: L,

    // Internal state
    frame: FrameBuffer<N>,
    budget: PowerBudget,
    brightness: u8,
    last_frame: FrameStats,
}

impl<T, D, L, const N: usize> Device<T, D, L, N>
where
    T: Topology,
    D: OutputDriver<Address = T::Address, Color = T::Color>,
    L: Logger,
{
    /// Create a new device with black buffers
    ///
    /// Only brightness and current limit are taken from `config`; the
    /// topology already carries the layout.
    pub fn new(topology: T, driver: D, logger: L, config: &DeviceConfig) -> Self {
        Self {
            topology,
            driver,
            logger,
            frame: FrameBuffer::new(),
            budget: PowerBudget::new(config.current_limit),
            brightness: config.brightness,
            last_frame: FrameStats {
                total_current: 0,
                brightness: config.brightness,
            },
        }
    }

    /// Initialize the driver and push the base brightness
    pub fn begin(&mut self) {
        self.driver.begin();
        self.driver.set_brightness(self.brightness);
    }

    /// Number of logical pixels rendered per frame
    pub fn len(&self) -> usize {
        self.topology.pixel_count().min(N)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Set the target color of one logical pixel
    ///
    /// Out of range writes are logged and leave the target untouched.
    pub fn set_pixel(&mut self, index: usize, color: Rgb) -> Result<(), RangeError> {
        let len = self.len();
        if index >= len {
            return self.reject(RangeError::Pixel { index, len });
        }
        self.frame.set(index, color)
    }

    /// Target color of one logical pixel
    pub fn pixel(&self, index: usize) -> Option<Rgb> {
        self.target().get(index).copied()
    }

    /// Set every target pixel to `color`
    pub fn fill(&mut self, color: Rgb) {
        self.frame.fill(color);
    }

    /// Set every target pixel to black
    pub fn flush(&mut self) {
        self.frame.flush();
    }

    /// Render one frame
    ///
    /// Every pixel moves `factor` of the way from its current to its target
    /// color, in index order. The brightness pushed for this frame is the
    /// base brightness, throttled if the estimate exceeds the current limit.
    pub fn draw_frame(&mut self, factor: f32) -> FrameStats {
        self.budget.begin_frame();

        for index in 0..self.len() {
            let color = self.frame.step(index, factor);
            let address = self.topology.address(index);
            self.driver.set_pixel(address, T::encode(color));
            self.budget.accumulate(color, self.brightness);
        }

        let stats = self.budget.finish_frame(self.brightness);
        self.driver.set_brightness(stats.brightness);
        self.driver.show();

        self.last_frame = stats;
        stats
    }

    /// Snap every pixel to its target
    pub fn draw_instant(&mut self) -> FrameStats {
        self.draw_frame(1.0)
    }

    /// Move every pixel a fraction of the remaining distance
    ///
    /// Repeated calls approach the target exponentially; speed depends only
    /// on the factor and the call rate.
    pub fn draw_smooth(&mut self, factor: f32) -> FrameStats {
        self.draw_frame(factor)
    }

    /// Set the base brightness and push it to the driver
    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
        self.driver.set_brightness(brightness);
    }

    /// Base brightness, never lowered by throttling
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Set the current limit (mA), effective from the next frame
    pub fn set_current_limit(&mut self, limit: u32) {
        self.budget.set_limit(Some(limit));
    }

    /// Drop the current limit
    pub fn remove_current_limit(&mut self) {
        self.budget.set_limit(None);
    }

    pub const fn current_limit(&self) -> Option<u32> {
        self.budget.limit()
    }

    /// Result of the last draw
    pub const fn last_frame(&self) -> FrameStats {
        self.last_frame
    }

    /// Whether the last committed frame equals the target
    pub fn is_converged(&self) -> bool {
        self.frame.is_converged()
    }

    pub fn target(&self) -> &[Rgb] {
        &self.frame.target()[..self.len()]
    }

    pub fn current(&self) -> &[Rgb] {
        &self.frame.current()[..self.len()]
    }

    pub const fn frame(&self) -> &FrameBuffer<N> {
        &self.frame
    }

    pub const fn topology(&self) -> &T {
        &self.topology
    }

    pub(crate) fn topology_mut(&mut self) -> &mut T {
        &mut self.topology
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    pub const fn logger(&self) -> &L {
        &self.logger
    }

    pub fn logger_mut(&mut self) -> &mut L {
        &mut self.logger
    }

    /// Log a rejected write once and hand the error back
    pub(crate) fn reject(&mut self, error: RangeError) -> Result<(), RangeError> {
        log_display(&mut self.logger, &error);
        Err(error)
    }
}
