//! Render loop pacing.
//!
//! Drives smooth draws at a fixed cadence without owning a timer; the caller
//! sleeps for the returned duration between ticks.

use embassy_time::{Duration, Instant};

use crate::OutputDriver;
use crate::device::Device;
use crate::logger::Logger;
use crate::power::FrameStats;
use crate::topology::Topology;

/// Default target frame rate (50 FPS).
pub const DEFAULT_FPS: u32 = 50;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Default fraction of the remaining distance covered per frame.
pub const DEFAULT_SMOOTHING: f32 = 0.1;

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// Power estimate and brightness of the rendered frame.
    pub stats: FrameStats,
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Paces smooth draws of one device.
///
/// The smoothing factor is applied per frame, not per unit of time, so the
/// frame rate sets the transition speed.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(device);
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now));
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<T: Topology, D: OutputDriver, L: Logger, const N: usize> {
    device: Device<T, D, L, N>,
    next_frame: Instant,
    frame_duration: Duration,
    smoothing: f32,
}

impl<T, D, L, const N: usize> FrameScheduler<T, D, L, N>
where
    T: Topology,
    D: OutputDriver<Address = T::Address, Color = T::Color>,
    L: Logger,
{
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (50 FPS) and `DEFAULT_SMOOTHING`.
    pub fn new(device: Device<T, D, L, N>) -> Self {
        Self::with_frame_duration(device, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(device: Device<T, D, L, N>, frame_duration: Duration) -> Self {
        Self {
            device,
            next_frame: Instant::from_millis(0),
            frame_duration,
            smoothing: DEFAULT_SMOOTHING,
        }
    }

    /// Set the per-frame smoothing factor (1.0 = instant).
    #[must_use]
    pub fn with_smoothing(mut self, smoothing: f32) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Draw one smoothing step and return the next deadline.
    ///
    /// Falling more than two frames behind resets the schedule to `now`
    /// instead of bursting through the backlog.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        let max_drift = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift {
            self.next_frame = now;
        }

        let stats = self.device.draw_smooth(self.smoothing);

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            stats,
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    /// Get a reference to the device.
    pub fn device(&self) -> &Device<T, D, L, N> {
        &self.device
    }

    /// Get a mutable reference to the device.
    pub fn device_mut(&mut self) -> &mut Device<T, D, L, N> {
        &mut self.device
    }

    /// Stop scheduling and return the device.
    pub fn into_device(self) -> Device<T, D, L, N> {
        self.device
    }
}
