//! Time source: Where the clock reads the current local time from.

use crate::layout::Field;
use chrono::Timelike;

/// A wall-clock reading, to the second.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct ClockTime {
    /// Hour of the day (0-23).
    pub hour: u8,
    /// Minute (0-59).
    pub minute: u8,
    /// Second (0-59, 60 on a leap second).
    pub second: u8,
}

impl ClockTime {
    /// Create a new reading.
    #[inline]
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// The value shown in `field`.
    #[inline]
    pub const fn field(&self, field: Field) -> u8 {
        match field {
            Field::Hour => self.hour,
            Field::Minute => self.minute,
            Field::Second => self.second,
        }
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Anything that can tell the current local time.
pub trait TimeSource {
    /// Read the current time.
    fn now(&mut self) -> ClockTime;
}

/// A fixed reading is its own time source.
impl TimeSource for ClockTime {
    fn now(&mut self) -> ClockTime {
        *self
    }
}

/// The system's local wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalClock;

impl TimeSource for LocalClock {
    fn now(&mut self) -> ClockTime {
        let now = chrono::Local::now();
        ClockTime::new(
            u8::try_from(now.hour()).unwrap_or_default(),
            u8::try_from(now.minute()).unwrap_or_default(),
            u8::try_from(now.second()).unwrap_or_default(),
        )
    }
}
