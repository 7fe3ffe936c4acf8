//! Validated record shapes for the routine scheduler.
//!
//! # Responsibility
//! - Define the in-memory value objects exchanged with callers and reject
//!   structurally or semantically invalid data before it reaches storage.
//!
//! # Invariants
//! - A record either validates in full or is never handed out; `validate()`
//!   fails on the first offending field and no partial record escapes.
//! - Records are value objects: an "update" is a new validated instance.
//! - These shapes are deliberately independent of the SQL schema in
//!   [`crate::db`]; the two layers share domain concepts, not vocabularies.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

pub mod category;
pub mod notification;
pub mod profile;
pub mod recurrence;
pub mod response;
pub mod schedule;
pub mod stats;
pub mod task;
pub mod time;

/// Stable identifier for validated records.
pub type RecordId = Uuid;

pub type ValidationResult<T> = Result<T, ValidationError>;

/// A single field value that violated its declared constraint.
///
/// Carries enough context for a caller to render a precise correction
/// message: the field name, the constraint text and the offending value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: &'static str,
    pub constraint: &'static str,
    pub value: String,
}

impl ValidationError {
    pub fn new(field: &'static str, constraint: &'static str, value: impl Display) -> Self {
        Self {
            field,
            constraint,
            value: value.to_string(),
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid value `{}` for field `{}`: {}",
            self.value, self.field, self.constraint
        )
    }
}

impl Error for ValidationError {}

/// Current wall-clock time in unix epoch milliseconds.
///
/// All model-layer timestamps use this encoding; it matches the integer
/// timestamp columns on the schema side.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}

pub(crate) fn check_range<T: PartialOrd + Display + Copy>(
    field: &'static str,
    constraint: &'static str,
    value: T,
    min: T,
    max: T,
) -> ValidationResult<()> {
    // Negated form so values without a total order (f64::NAN) fail too:
    // every comparison against NaN is false, which lands in the error arm.
    if !(value >= min && value <= max) {
        return Err(ValidationError::new(field, constraint, value));
    }
    Ok(())
}

pub(crate) fn check_char_length(
    field: &'static str,
    constraint: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> ValidationResult<()> {
    let chars = value.chars().count();
    if chars < min || chars > max {
        return Err(ValidationError::new(field, constraint, value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_display_names_field_and_constraint() {
        let err = ValidationError::new("hour", "must be between 0 and 23", 24);
        let rendered = err.to_string();
        assert!(rendered.contains("hour"));
        assert!(rendered.contains("must be between 0 and 23"));
        assert!(rendered.contains("24"));
    }

    #[test]
    fn now_epoch_ms_is_after_2020() {
        assert!(now_epoch_ms() > 1_577_836_800_000);
    }
}
