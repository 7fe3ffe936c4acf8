//! Per-task notification preferences.

use super::{now_epoch_ms, RecordId, ValidationResult};
use crate::constants::DEFAULT_NOTIFICATION_MINUTES;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    Reminder,
    Alert,
    Info,
    Warning,
}

/// A notification to deliver some minutes before a task starts.
///
/// Delivery mechanics live outside this crate; this is configuration only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Option<RecordId>,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    /// Lead time before the task, in minutes. Unsigned, so never negative.
    pub lead_minutes: u32,
    pub enabled: bool,
    /// Custom message; `None` lets the delivery layer pick a default.
    pub message: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Default for Notification {
    fn default() -> Self {
        let now = now_epoch_ms();
        Self {
            id: None,
            kind: NotificationType::Reminder,
            lead_minutes: DEFAULT_NOTIFICATION_MINUTES,
            enabled: true,
            message: None,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Notification {
    pub fn validate(&self) -> ValidationResult<()> {
        // Lead minutes are range-free beyond the unsigned type; nothing
        // else on this record carries a constraint.
        Ok(())
    }
}
