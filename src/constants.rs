//! Shared literal values for the routine scheduler core.
//!
//! # Responsibility
//! - Single source of truth for status/priority/recurrence vocabularies,
//!   numeric limits, user-facing messages and cache keys.
//!
//! # Invariants
//! - Everything here is read-only; the priority-weight map is built once
//!   at first use and never mutated afterwards.
//! - This vocabulary is the *storage-side* one. The validation models in
//!   [`crate::model`] carry their own enums which have drifted from these
//!   strings (e.g. `overdue` here vs `paused` there) and are intentionally
//!   not reconciled.

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const APP_NAME: &str = "Routina";
pub const APP_DESCRIPTION: &str = "A daily task and schedule management application";

// ---------------------------------------------------------------------------
// Time and date
// ---------------------------------------------------------------------------

pub const DEFAULT_TIMEZONE: &str = "UTC";

pub const TIME_FORMAT_24H: &str = "%H:%M:%S";
pub const TIME_FORMAT_12H: &str = "%I:%M:%S %p";
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
pub const DATETIME_FORMAT_ISO: &str = "%Y-%m-%dT%H:%M:%S";
pub const DATETIME_FORMAT_DISPLAY: &str = "%Y-%m-%d %H:%M:%S";

pub const SCHEDULER_START_HOUR: u8 = 0;
pub const SCHEDULER_END_HOUR: u8 = 23;
pub const SCHEDULER_START_MINUTE: u8 = 0;
pub const SCHEDULER_END_MINUTE: u8 = 59;

// ---------------------------------------------------------------------------
// Task vocabulary (storage side)
// ---------------------------------------------------------------------------

pub const TASK_STATUS_PENDING: &str = "pending";
pub const TASK_STATUS_IN_PROGRESS: &str = "in_progress";
pub const TASK_STATUS_COMPLETED: &str = "completed";
pub const TASK_STATUS_CANCELLED: &str = "cancelled";
pub const TASK_STATUS_OVERDUE: &str = "overdue";

pub const VALID_TASK_STATUSES: &[&str] = &[
    TASK_STATUS_PENDING,
    TASK_STATUS_IN_PROGRESS,
    TASK_STATUS_COMPLETED,
    TASK_STATUS_CANCELLED,
    TASK_STATUS_OVERDUE,
];

pub const TASK_PRIORITY_LOW: &str = "low";
pub const TASK_PRIORITY_MEDIUM: &str = "medium";
pub const TASK_PRIORITY_HIGH: &str = "high";
pub const TASK_PRIORITY_CRITICAL: &str = "critical";

pub const VALID_TASK_PRIORITIES: &[&str] = &[
    TASK_PRIORITY_LOW,
    TASK_PRIORITY_MEDIUM,
    TASK_PRIORITY_HIGH,
    TASK_PRIORITY_CRITICAL,
];

/// Numeric weights for sorting tasks by the storage-side priority ladder.
pub static PRIORITY_WEIGHTS: Lazy<HashMap<&'static str, u8>> = Lazy::new(|| {
    HashMap::from([
        (TASK_PRIORITY_LOW, 1),
        (TASK_PRIORITY_MEDIUM, 2),
        (TASK_PRIORITY_HIGH, 3),
        (TASK_PRIORITY_CRITICAL, 4),
    ])
});

pub const DEFAULT_TASK_PRIORITY: &str = TASK_PRIORITY_MEDIUM;
pub const DEFAULT_TASK_STATUS: &str = TASK_STATUS_PENDING;

pub const MAX_TASK_TITLE_LENGTH: usize = 255;
pub const MAX_TASK_DESCRIPTION_LENGTH: usize = 5000;

// ---------------------------------------------------------------------------
// Recurrence
// ---------------------------------------------------------------------------

pub const RECURRENCE_NONE: &str = "none";
pub const RECURRENCE_DAILY: &str = "daily";
pub const RECURRENCE_WEEKLY: &str = "weekly";
pub const RECURRENCE_MONTHLY: &str = "monthly";
pub const RECURRENCE_YEARLY: &str = "yearly";

pub const VALID_RECURRENCE_TYPES: &[&str] = &[
    RECURRENCE_NONE,
    RECURRENCE_DAILY,
    RECURRENCE_WEEKLY,
    RECURRENCE_MONTHLY,
    RECURRENCE_YEARLY,
];

pub const VALID_WEEKDAYS: &[&str] = &[
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

pub const DEFAULT_RECURRENCE: &str = RECURRENCE_NONE;

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

pub const NOTIFICATION_TYPE_REMINDER: &str = "reminder";
pub const NOTIFICATION_TYPE_COMPLETION: &str = "completion";
pub const NOTIFICATION_TYPE_OVERDUE: &str = "overdue";
pub const NOTIFICATION_TYPE_UPCOMING: &str = "upcoming";

pub const VALID_NOTIFICATION_TYPES: &[&str] = &[
    NOTIFICATION_TYPE_REMINDER,
    NOTIFICATION_TYPE_COMPLETION,
    NOTIFICATION_TYPE_OVERDUE,
    NOTIFICATION_TYPE_UPCOMING,
];

pub const NOTIFICATION_STATUS_PENDING: &str = "pending";
pub const NOTIFICATION_STATUS_SENT: &str = "sent";
pub const NOTIFICATION_STATUS_FAILED: &str = "failed";
pub const NOTIFICATION_STATUS_DISMISSED: &str = "dismissed";

pub const VALID_NOTIFICATION_STATUSES: &[&str] = &[
    NOTIFICATION_STATUS_PENDING,
    NOTIFICATION_STATUS_SENT,
    NOTIFICATION_STATUS_FAILED,
    NOTIFICATION_STATUS_DISMISSED,
];

/// Minutes before a task at which its reminder fires by default.
pub const DEFAULT_NOTIFICATION_MINUTES: u32 = 15;

// ---------------------------------------------------------------------------
// Database
// ---------------------------------------------------------------------------

pub const DEFAULT_DB_POOL_SIZE: u32 = 10;
pub const DEFAULT_DB_POOL_OVERFLOW: u32 = 20;
pub const DEFAULT_DB_POOL_TIMEOUT_SECS: u32 = 30;

pub const DEFAULT_QUERY_LIMIT: u32 = 100;
pub const MAX_QUERY_LIMIT: u32 = 1000;

// ---------------------------------------------------------------------------
// Validation limits
// ---------------------------------------------------------------------------

pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MAX_USERNAME_LENGTH: usize = 50;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 128;

pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

pub const ERROR_TASK_NOT_FOUND: &str = "Task not found";
pub const ERROR_INVALID_TASK_STATUS: &str = "Invalid task status";
pub const ERROR_INVALID_TASK_PRIORITY: &str = "Invalid task priority";
pub const ERROR_INVALID_RECURRENCE_TYPE: &str = "Invalid recurrence type";
pub const ERROR_INVALID_TIME_FORMAT: &str = "Invalid time format";
pub const ERROR_TASK_TITLE_REQUIRED: &str = "Task title is required";
pub const ERROR_TASK_TITLE_TOO_LONG: &str = "Task title cannot exceed 255 characters";
pub const ERROR_TASK_DESCRIPTION_TOO_LONG: &str =
    "Task description cannot exceed 5000 characters";

pub const SUCCESS_TASK_CREATED: &str = "Task created successfully";
pub const SUCCESS_TASK_UPDATED: &str = "Task updated successfully";
pub const SUCCESS_TASK_DELETED: &str = "Task deleted successfully";
pub const SUCCESS_TASK_COMPLETED: &str = "Task marked as completed";
pub const SUCCESS_NOTIFICATION_SENT: &str = "Notification sent successfully";

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MIN_PAGE_SIZE: u32 = 1;
pub const MAX_PAGE_SIZE: u32 = 100;
pub const DEFAULT_PAGE_NUMBER: u32 = 1;

// ---------------------------------------------------------------------------
// Cache
// ---------------------------------------------------------------------------

pub const CACHE_TTL_SHORT_SECS: u64 = 60;
pub const CACHE_TTL_MEDIUM_SECS: u64 = 300;
pub const CACHE_TTL_LONG_SECS: u64 = 3600;
pub const CACHE_TTL_VERY_LONG_SECS: u64 = 86_400;

pub const CACHE_PREFIX_TASK: &str = "task:";
pub const CACHE_PREFIX_USER: &str = "user:";
pub const CACHE_PREFIX_SCHEDULE: &str = "schedule:";
