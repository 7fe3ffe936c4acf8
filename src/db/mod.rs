//! SQLite storage for the routine scheduler.
//!
//! # Responsibility
//! - Open and bootstrap SQLite connections.
//! - Apply schema migrations in deterministic order and repair missing
//!   tables non-destructively.
//! - Provide the generic four-operation statement interface
//!   ([`store::ScheduleStore`]).
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - Application data is never touched before migrations succeed.
//! - Every write statement commits fully or rolls back fully.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;
pub mod store;

pub use open::{open_db, open_db_in_memory};
pub use store::{ScheduleStore, StoredRow};

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage failure surfaced to callers after a full rollback.
#[derive(Debug)]
pub enum StoreError {
    /// Malformed statement, constraint violation or I/O failure.
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "database schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
