//! Recurrence configuration for repeating tasks.
//!
//! Patterns are stored as configuration only; nothing in this crate expands
//! them into concrete occurrences.

use super::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};

/// How a task repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurrenceType {
    None,
    Daily,
    Weekly,
    Biweekly,
    Monthly,
    Yearly,
}

/// Recurrence settings attached to a task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recurrence {
    #[serde(rename = "type")]
    pub kind: RecurrenceType,
    /// Interval between occurrences, in units of `kind`.
    pub frequency: u32,
    /// Days of week for weekly patterns, 0 = Monday through 6 = Sunday.
    pub days_of_week: Option<Vec<u8>>,
    /// Days of month for monthly patterns, 1 through 31.
    pub days_of_month: Option<Vec<u8>>,
    /// Epoch milliseconds after which the pattern stops, if bounded.
    pub end_date: Option<i64>,
}

impl Default for Recurrence {
    fn default() -> Self {
        Self {
            kind: RecurrenceType::None,
            frequency: 1,
            days_of_week: None,
            days_of_month: None,
            end_date: None,
        }
    }
}

impl Recurrence {
    pub fn validate(&self) -> ValidationResult<()> {
        if self.frequency < 1 {
            return Err(ValidationError::new(
                "frequency",
                "must be at least 1",
                self.frequency,
            ));
        }
        if let Some(days) = &self.days_of_week {
            if let Some(day) = days.iter().find(|day| **day > 6) {
                return Err(ValidationError::new(
                    "days_of_week",
                    "days must be between 0 and 6",
                    day,
                ));
            }
        }
        if let Some(days) = &self.days_of_month {
            if let Some(day) = days.iter().find(|day| **day < 1 || **day > 31) {
                return Err(ValidationError::new(
                    "days_of_month",
                    "days must be between 1 and 31",
                    day,
                ));
            }
        }
        Ok(())
    }
}
