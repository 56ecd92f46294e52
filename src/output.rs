//! Strip driver on top of any `smart_leds` writer

use smart_leds::{SmartLedsWrite, brightness};

use crate::OutputDriver;
use crate::color::{BLACK, Rgb, rgb_from_u32};

/// Indexed strip driver backed by a [`SmartLedsWrite`] implementation
///
/// Pixels are staged in a local buffer; `show` writes the whole buffer
/// scaled by the current brightness. Write errors belong to the writer and
/// are dropped here.
pub struct SmartLedsOutput<W: SmartLedsWrite, const N: usize> {
    writer: W,
    pixels: [Rgb; N],
    brightness: u8,
}

impl<W: SmartLedsWrite, const N: usize> SmartLedsOutput<W, N> {
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            pixels: [BLACK; N],
            brightness: 255,
        }
    }

    /// Staged pixels, before brightness scaling
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Brightness that will be applied on the next `show`
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub const fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W, const N: usize> OutputDriver for SmartLedsOutput<W, N>
where
    W: SmartLedsWrite,
    Rgb: Into<W::Color>,
{
    type Address = u16;
    type Color = u32;

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    fn set_pixel(&mut self, address: u16, color: u32) {
        if let Some(pixel) = self.pixels.get_mut(usize::from(address)) {
            *pixel = rgb_from_u32(color);
        }
    }

    fn show(&mut self) {
        let _ = self
            .writer
            .write(brightness(self.pixels.iter().copied(), self.brightness));
    }
}
