//! Time-of-day value type.

use super::{check_range, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// A wall-clock time of day with second precision.
///
/// Each component is range-checked independently; there is no date or
/// timezone attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl TimeOfDay {
    /// Builds a validated time-of-day value.
    pub fn new(hour: u8, minute: u8, second: u8) -> ValidationResult<Self> {
        let time = Self {
            hour,
            minute,
            second,
        };
        time.validate()?;
        Ok(time)
    }

    /// Builds a validated time-of-day value on the whole minute.
    pub fn on_minute(hour: u8, minute: u8) -> ValidationResult<Self> {
        Self::new(hour, minute, 0)
    }

    pub fn validate(&self) -> ValidationResult<()> {
        check_range("hour", "must be between 0 and 23", self.hour, 0, 23)?;
        check_range("minute", "must be between 0 and 59", self.minute, 0, 59)?;
        check_range("second", "must be between 0 and 59", self.second, 0, 59)?;
        Ok(())
    }

    /// Whether `self` comes earlier in the day than `other`, comparing
    /// hour and minute only. Seconds are ignored; the comparison assumes
    /// both values belong to the same day.
    pub fn is_before_minute(&self, other: &TimeOfDay) -> bool {
        (self.hour, self.minute) < (other.hour, other.minute)
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::TimeOfDay;

    #[test]
    fn display_pads_components() {
        let time = TimeOfDay::new(7, 5, 0).unwrap();
        assert_eq!(time.to_string(), "07:05:00");
    }

    #[test]
    fn minute_comparison_ignores_seconds() {
        let a = TimeOfDay::new(9, 0, 59).unwrap();
        let b = TimeOfDay::new(9, 0, 0).unwrap();
        assert!(!a.is_before_minute(&b));
        assert!(!b.is_before_minute(&a));
    }
}
