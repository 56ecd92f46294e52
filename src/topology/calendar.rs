use crate::error::RangeError;

/// Calendar strip length: 7 weekdays, 31 days, 12 months
pub const CALENDAR_LED_COUNT: usize = 50;

/// Semantic field of the calendar strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarZone {
    /// Monday (1) to Sunday (7), LEDs 0..7
    DayOfWeek,
    /// 1st to 31st, LEDs 7..38
    DayOfMonth,
    /// January (1) to December (12), LEDs 38..50
    Month,
}

impl CalendarZone {
    /// First LED of the zone
    pub const fn start(self) -> usize {
        match self {
            Self::DayOfWeek => 0,
            Self::DayOfMonth => 7,
            Self::Month => 38,
        }
    }

    /// Number of LEDs in the zone
    pub const fn count(self) -> usize {
        match self {
            Self::DayOfWeek => 7,
            Self::DayOfMonth => 31,
            Self::Month => 12,
        }
    }

    /// Logical index for a one-based field value
    pub fn index(self, value: u8) -> Result<usize, RangeError> {
        let value_index = usize::from(value);
        if value_index == 0 || value_index > self.count() {
            return Err(self.range_error(value));
        }
        Ok(self.start() + value_index - 1)
    }

    const fn range_error(self, value: u8) -> RangeError {
        match self {
            Self::DayOfWeek => RangeError::DayOfWeek(value),
            Self::DayOfMonth => RangeError::DayOfMonth(value),
            Self::Month => RangeError::Month(value),
        }
    }
}
