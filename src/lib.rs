#![no_std]

pub mod color;
pub mod config;
pub mod device;
pub mod devices;
pub mod error;
pub mod font;
pub mod frame;
pub mod frame_scheduler;
pub mod logger;
pub mod math8;
pub mod output;
pub mod power;
pub mod shared;
pub mod topology;

pub use config::DeviceConfig;
pub use device::Device;
pub use devices::{Calendar, Matrix, Ring};
pub use error::RangeError;
pub use frame::FrameBuffer;
pub use frame_scheduler::FrameScheduler;
pub use logger::{Logger, NoopLogger};
pub use output::SmartLedsOutput;
pub use power::{FrameStats, PowerBudget};
pub use shared::SharedDevice;
pub use topology::{CalendarZone, GridPoint, MatrixTopology, RotatedStrip, Topology};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// Pixels are staged with `set_pixel` and committed together by `show`.
pub trait OutputDriver {
    /// Physical pixel address
    type Address: Copy;
    /// Hardware color format
    type Color: Copy;

    /// Initialize the hardware
    fn begin(&mut self) {}

    /// Set the global brightness register (0-255)
    fn set_brightness(&mut self, brightness: u8);

    /// Stage one pixel
    fn set_pixel(&mut self, address: Self::Address, color: Self::Color);

    /// Commit all staged pixels, blocking until done
    fn show(&mut self);
}
