//! A single day's schedule with rollup counters.

use super::task::TaskRecord;
use super::{check_range, now_epoch_ms, RecordId, ValidationResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySchedule {
    pub id: Option<RecordId>,
    pub user_id: RecordId,
    /// The schedule day, as epoch milliseconds at the start of day.
    pub date: i64,
    pub tasks: Vec<TaskRecord>,
    pub total_duration_minutes: u32,
    pub completed_tasks_count: u32,
    pub pending_tasks_count: u32,
    /// Share of tasks completed, 0.0 through 100.0.
    pub completion_percentage: f64,
    pub notes: Option<String>,
    pub mood: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl DailySchedule {
    /// Builds an empty validated schedule for one user and day.
    pub fn new(user_id: RecordId, date: i64) -> ValidationResult<Self> {
        let now = now_epoch_ms();
        let schedule = Self {
            id: None,
            user_id,
            date,
            tasks: Vec::new(),
            total_duration_minutes: 0,
            completed_tasks_count: 0,
            pending_tasks_count: 0,
            completion_percentage: 0.0,
            notes: None,
            mood: None,
            created_at: now,
            updated_at: now,
        };
        schedule.validate()?;
        Ok(schedule)
    }

    pub fn validate(&self) -> ValidationResult<()> {
        check_range(
            "completion_percentage",
            "must be between 0 and 100",
            self.completion_percentage,
            0.0,
            100.0,
        )?;
        for task in &self.tasks {
            task.validate()?;
        }
        Ok(())
    }
}
