//! Task record: the central validated shape of the scheduler.
//!
//! # Invariants
//! - `title` is 1..=255 characters; `description` stays under the shared
//!   description limit.
//! - `priority` is an integer 0..=5 (distinct from the storage-side
//!   low/medium/high/critical ladder).
//! - When both are set, `end_time` must not fall earlier in the day than
//!   `start_time`, compared on (hour, minute) only. A pair spanning
//!   midnight is not representable.

use super::category::ActivityCategory;
use super::notification::Notification;
use super::recurrence::Recurrence;
use super::time::TimeOfDay;
use super::{
    check_char_length, check_range, now_epoch_ms, RecordId, ValidationError, ValidationResult,
};
use crate::constants::{MAX_TASK_DESCRIPTION_LENGTH, MAX_TASK_TITLE_LENGTH};
use serde::{Deserialize, Serialize};

/// Task lifecycle state in the validation vocabulary.
///
/// Note `Paused` here: the storage-side constants carry `overdue` instead.
/// The vocabularies evolved independently and stay separate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
    Paused,
}

pub const MAX_TASK_PRIORITY: u8 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: Option<RecordId>,
    pub title: String,
    pub description: Option<String>,
    pub category: ActivityCategory,
    pub status: TaskStatus,
    /// Priority level 0 (lowest) through 5 (highest).
    pub priority: u8,
    pub start_time: Option<TimeOfDay>,
    pub end_time: Option<TimeOfDay>,
    pub duration_minutes: Option<u32>,
    /// Due date in epoch milliseconds.
    pub due_date: Option<i64>,
    pub recurrence: Recurrence,
    pub notifications: Vec<Notification>,
    pub tags: Vec<String>,
    pub is_recurring: bool,
    pub is_completed: bool,
    pub completion_date: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
    pub user_id: Option<RecordId>,
}

impl TaskRecord {
    /// Builds a validated task with defaults for everything but the title.
    pub fn new(title: impl Into<String>) -> ValidationResult<Self> {
        let now = now_epoch_ms();
        let task = Self {
            id: None,
            title: title.into(),
            description: None,
            category: ActivityCategory::Personal,
            status: TaskStatus::Pending,
            priority: 0,
            start_time: None,
            end_time: None,
            duration_minutes: None,
            due_date: None,
            recurrence: Recurrence::default(),
            notifications: Vec::new(),
            tags: Vec::new(),
            is_recurring: false,
            is_completed: false,
            completion_date: None,
            created_at: now,
            updated_at: now,
            user_id: None,
        };
        task.validate()?;
        Ok(task)
    }

    /// Re-checks every declared constraint, failing on the first violation.
    pub fn validate(&self) -> ValidationResult<()> {
        check_char_length(
            "title",
            "must be between 1 and 255 characters",
            &self.title,
            1,
            MAX_TASK_TITLE_LENGTH,
        )?;
        if let Some(description) = &self.description {
            check_char_length(
                "description",
                "must be at most 5000 characters",
                description,
                0,
                MAX_TASK_DESCRIPTION_LENGTH,
            )?;
        }
        check_range(
            "priority",
            "must be between 0 and 5",
            self.priority,
            0,
            MAX_TASK_PRIORITY,
        )?;
        if let Some(start) = &self.start_time {
            start.validate()?;
        }
        if let Some(end) = &self.end_time {
            end.validate()?;
        }
        if let (Some(start), Some(end)) = (&self.start_time, &self.end_time) {
            // Same-day assumption: seconds are not compared and a window
            // crossing midnight cannot be expressed.
            if end.is_before_minute(start) {
                return Err(ValidationError::new(
                    "end_time",
                    "must not be earlier than start_time",
                    end,
                ));
            }
        }
        self.recurrence.validate()?;
        for notification in &self.notifications {
            notification.validate()?;
        }
        Ok(())
    }
}
