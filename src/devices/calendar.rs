use crate::OutputDriver;
use crate::color::Rgb;
use crate::device::Device;
use crate::error::RangeError;
use crate::logger::Logger;
use crate::topology::{CALENDAR_LED_COUNT, CalendarZone, RotatedStrip};

impl<D, L> Device<RotatedStrip, D, L, CALENDAR_LED_COUNT>
where
    D: OutputDriver<Address = u16, Color = u32>,
    L: Logger,
{
    /// Light one LED of a calendar zone
    ///
    /// `value` is one-based. Out of range values are logged and ignored.
    pub fn set_zone(
        &mut self,
        zone: CalendarZone,
        value: u8,
        color: Rgb,
    ) -> Result<(), RangeError> {
        match zone.index(value) {
            Ok(index) => self.set_pixel(index, color),
            Err(error) => self.reject(error),
        }
    }

    /// Light a weekday, 1 = Monday
    pub fn set_day_of_week(&mut self, day_of_week: u8, color: Rgb) -> Result<(), RangeError> {
        self.set_zone(CalendarZone::DayOfWeek, day_of_week, color)
    }

    /// Light a day of month, 1-31
    pub fn set_day_of_month(&mut self, day_of_month: u8, color: Rgb) -> Result<(), RangeError> {
        self.set_zone(CalendarZone::DayOfMonth, day_of_month, color)
    }

    /// Light a month, 1 = January
    pub fn set_month(&mut self, month: u8, color: Rgb) -> Result<(), RangeError> {
        self.set_zone(CalendarZone::Month, month, color)
    }

    /// Light weekday, day of month and month in one color
    ///
    /// The three writes are independent: a bad field only drops its own
    /// write. The first error is returned.
    pub fn set_date(
        &mut self,
        day_of_week: u8,
        day_of_month: u8,
        month: u8,
        color: Rgb,
    ) -> Result<(), RangeError> {
        let day_of_week = self.set_day_of_week(day_of_week, color);
        let day_of_month = self.set_day_of_month(day_of_month, color);
        let month = self.set_month(month, color);
        day_of_week.and(day_of_month).and(month)
    }
}
