//! Persistence schema and data-validation core for a daily routine
//! scheduler.
//!
//! Three layers, dependency order `constants` → `model` → `db`:
//! - [`db`]: the relational schema (eight tables plus indexes) and a
//!   generic four-operation statement interface with per-call scoped
//!   transactions.
//! - [`model`]: validated in-memory record shapes, constructed fully
//!   formed or not at all.
//! - [`constants`]: the read-only literal table both layers and external
//!   callers draw from.
//!
//! The schema and model layers share domain concepts but deliberately not
//! vocabularies; see the module docs for the drift details.

pub mod constants;
pub mod db;
pub mod logging;
pub mod model;

pub use db::{open_db, open_db_in_memory, ScheduleStore, StoreError, StoreResult, StoredRow};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::{ActivityCategory, CategoryRecord};
pub use model::notification::{Notification, NotificationType};
pub use model::profile::UserProfile;
pub use model::recurrence::{Recurrence, RecurrenceType};
pub use model::response::Envelope;
pub use model::schedule::DailySchedule;
pub use model::stats::ScheduleStats;
pub use model::task::{TaskRecord, TaskStatus};
pub use model::time::TimeOfDay;
pub use model::{now_epoch_ms, RecordId, ValidationError, ValidationResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
