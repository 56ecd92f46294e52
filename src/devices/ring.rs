use crate::OutputDriver;
use crate::config::DeviceConfig;
use crate::device::Device;
use crate::logger::Logger;
use crate::topology::RotatedStrip;

impl<D, L, const N: usize> Device<RotatedStrip, D, L, N>
where
    D: OutputDriver<Address = u16, Color = u32>,
    L: Logger,
{
    /// Create a strip or ring device from `config`
    ///
    /// The strip length is `config.led_count`, capped by the buffer size, so
    /// the rotation wraps inside the LEDs that are actually rendered.
    pub fn strip(driver: D, logger: L, config: &DeviceConfig) -> Self {
        let capacity = u16::try_from(N).unwrap_or(u16::MAX);
        let topology = RotatedStrip::new(config.led_count.min(capacity)).with_offset(config.offset);
        Self::new(topology, driver, logger, config)
    }

    /// Rotate the logical origin, effective from the next frame
    pub fn set_offset(&mut self, offset: i32) {
        self.topology_mut().set_offset(offset);
    }

    pub fn offset(&self) -> i32 {
        self.topology().offset()
    }
}
