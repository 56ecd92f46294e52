use core::fmt;

/// A write was rejected because its address was out of bounds
///
/// The rejected write never touches the target buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// Logical pixel index outside `0..len`
    Pixel { index: usize, len: usize },
    /// Grid coordinate outside the matrix
    Grid { x: u8, y: u8 },
    /// Day of week outside `1..=7`
    DayOfWeek(u8),
    /// Day of month outside `1..=31`
    DayOfMonth(u8),
    /// Month outside `1..=12`
    Month(u8),
    /// Digit outside `0..=9`
    Digit(u8),
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixel { index, len } => {
                write!(f, "ERROR: pixel {} out of range (0..{})", index, len)
            }
            Self::Grid { x, y } => write!(f, "ERROR: index out of range: {}, {}", x, y),
            Self::DayOfWeek(value) => write!(f, "ERROR: dayOfWeek {} out of range", value),
            Self::DayOfMonth(value) => write!(f, "ERROR: dayOfMonth {} out of range", value),
            Self::Month(value) => write!(f, "ERROR: month {} out of range", value),
            Self::Digit(value) => write!(f, "ERROR: digit {} out of range", value),
        }
    }
}
