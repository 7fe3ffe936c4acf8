//! Reporting aggregate over a user's schedule history.

use super::{check_range, now_epoch_ms, RecordId, ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleStats {
    pub id: Option<RecordId>,
    pub user_id: RecordId,
    /// Period bounds in epoch milliseconds.
    pub period_start: i64,
    pub period_end: i64,
    pub total_tasks: u32,
    pub completed_tasks: u32,
    pub cancelled_tasks: u32,
    pub pending_tasks: u32,
    /// Completion rate 0.0 through 100.0.
    pub completion_rate: f64,
    pub total_hours_logged: f64,
    pub average_daily_tasks: f64,
    pub tasks_by_category: HashMap<String, u32>,
    /// Completion rate per category, each 0.0 through 100.0.
    pub completion_by_category: HashMap<String, f64>,
    pub most_active_day: Option<String>,
    pub longest_streak: u32,
    pub current_streak: u32,
    /// Tasks completed per week, keyed by week label.
    pub weekly_breakdown: HashMap<String, u32>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl ScheduleStats {
    /// Builds empty validated statistics for one user and period.
    pub fn new(user_id: RecordId, period_start: i64, period_end: i64) -> ValidationResult<Self> {
        let now = now_epoch_ms();
        let stats = Self {
            id: None,
            user_id,
            period_start,
            period_end,
            total_tasks: 0,
            completed_tasks: 0,
            cancelled_tasks: 0,
            pending_tasks: 0,
            completion_rate: 0.0,
            total_hours_logged: 0.0,
            average_daily_tasks: 0.0,
            tasks_by_category: HashMap::new(),
            completion_by_category: HashMap::new(),
            most_active_day: None,
            longest_streak: 0,
            current_streak: 0,
            weekly_breakdown: HashMap::new(),
            created_at: now,
            updated_at: now,
        };
        stats.validate()?;
        Ok(stats)
    }

    pub fn validate(&self) -> ValidationResult<()> {
        check_range(
            "completion_rate",
            "must be between 0 and 100",
            self.completion_rate,
            0.0,
            100.0,
        )?;
        if self.total_hours_logged < 0.0 {
            return Err(ValidationError::new(
                "total_hours_logged",
                "must not be negative",
                self.total_hours_logged,
            ));
        }
        if self.average_daily_tasks < 0.0 {
            return Err(ValidationError::new(
                "average_daily_tasks",
                "must not be negative",
                self.average_daily_tasks,
            ));
        }
        for rate in self.completion_by_category.values() {
            check_range(
                "completion_by_category",
                "rates must be between 0 and 100",
                *rate,
                0.0,
                100.0,
            )?;
        }
        Ok(())
    }
}
