use crate::OutputDriver;
use crate::color::Rgb;
use crate::config::DeviceConfig;
use crate::device::Device;
use crate::error::RangeError;
use crate::font::{self, Glyph};
use crate::logger::Logger;
use crate::topology::{GridPoint, INDICATOR_COUNT, MatrixTopology};

impl<D, L, const W: usize, const H: usize, const N: usize> Device<MatrixTopology<W, H>, D, L, N>
where
    D: OutputDriver<Address = GridPoint, Color = u16>,
    L: Logger,
{
    /// Create a matrix device from `config`
    pub fn matrix(driver: D, logger: L, config: &DeviceConfig) -> Self {
        Self::new(MatrixTopology::<W, H>, driver, logger, config)
    }

    /// Set the target color of grid pixel `(x, y)`
    pub fn grid_add_pixel(&mut self, x: u8, y: u8, color: Rgb) -> Result<(), RangeError> {
        match MatrixTopology::<W, H>::grid_index(x, y) {
            Some(index) => self.set_pixel(index, color),
            None => self.reject(RangeError::Grid { x, y }),
        }
    }

    /// Target color of grid pixel `(x, y)`
    pub fn grid_pixel(&self, x: u8, y: u8) -> Option<Rgb> {
        MatrixTopology::<W, H>::grid_index(x, y).and_then(|index| self.pixel(index))
    }

    /// Clear the grid and every indicator
    pub fn grid_flush(&mut self) {
        self.flush();
    }

    /// Light minute indicators from a bit pattern
    ///
    /// Bit `i` of the low nibble lights indicator `i`. Cleared bits leave
    /// their indicator as it was.
    pub fn set_min_indicator(&mut self, pattern: u8, color: Rgb) {
        for indicator in 0..INDICATOR_COUNT {
            if (pattern >> indicator) & 1 == 0 {
                continue;
            }
            if let Some(index) = MatrixTopology::<W, H>::indicator_index(indicator) {
                let _ = self.set_pixel(index, color);
            }
        }
    }

    /// Target color of indicator `i`
    pub fn indicator(&self, indicator: usize) -> Option<Rgb> {
        MatrixTopology::<W, H>::indicator_index(indicator).and_then(|index| self.pixel(index))
    }

    /// Draw a digit with its top left corner at `(x, y)`
    pub fn print_number(&mut self, x: u8, y: u8, number: u8, color: Rgb) -> Result<(), RangeError> {
        match font::digit(number) {
            Some(glyph) => self.print_glyph(x, y, glyph, color),
            None => self.reject(RangeError::Digit(number)),
        }
    }

    /// Draw a letter with its top left corner at `(x, y)`
    pub fn print_char(
        &mut self,
        x: u8,
        y: u8,
        character: char,
        color: Rgb,
    ) -> Result<(), RangeError> {
        self.print_glyph(x, y, font::letter(character), color)
    }

    /// Lit pixels outside the grid are clipped; the first error is returned
    fn print_glyph(&mut self, x: u8, y: u8, glyph: &Glyph, color: Rgb) -> Result<(), RangeError> {
        let mut result = Ok(());
        for (column, row) in font::lit_pixels(glyph) {
            let pixel = self.grid_add_pixel(x.saturating_add(column), y.saturating_add(row), color);
            result = result.and(pixel);
        }
        result
    }
}
