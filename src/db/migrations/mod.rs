//! SQLite migration registry and executor.
//!
//! # Responsibility
//! - Register schema migrations in strictly increasing order.
//! - Apply pending migrations atomically.
//! - Repair a store whose tables were dropped out-of-band.
//!
//! # Invariants
//! - `version` values must remain monotonic.
//! - Applied migration version is mirrored to `PRAGMA user_version`.
//! - Every migration batch is idempotent DDL (`IF NOT EXISTS`), so
//!   re-execution never drops or alters existing tables.

use crate::db::{StoreError, StoreResult};
use rusqlite::Connection;

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        sql: include_str!("0001_init.sql"),
    },
    Migration {
        version: 2,
        sql: include_str!("0002_indexes.sql"),
    },
];

/// The eight tables a fully-formed store must contain.
pub const REQUIRED_TABLES: &[&str] = &[
    "users",
    "routines",
    "tasks",
    "reminders",
    "routine_logs",
    "user_preferences",
    "task_categories",
    "task_category_mapping",
];

/// Returns the latest migration version known by this binary.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Applies all pending migrations on the provided connection.
pub fn apply_migrations(conn: &mut Connection) -> StoreResult<()> {
    let current_version = current_user_version(conn)?;
    let latest = latest_version();

    if current_version > latest {
        return Err(StoreError::UnsupportedSchemaVersion {
            db_version: current_version,
            latest_supported: latest,
        });
    }

    if current_version == latest {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for migration in MIGRATIONS {
        if migration.version <= current_version {
            continue;
        }

        tx.execute_batch(migration.sql)?;
        tx.execute_batch(&format!("PRAGMA user_version = {};", migration.version))?;
    }
    tx.commit()?;

    Ok(())
}

/// Lists the missing required tables, if any.
pub fn missing_tables(conn: &Connection) -> StoreResult<Vec<&'static str>> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type = 'table';")?;
    let existing: Vec<String> = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<Result<_, _>>()?;

    Ok(REQUIRED_TABLES
        .iter()
        .copied()
        .filter(|table| !existing.iter().any(|name| name == table))
        .collect())
}

/// Re-executes every migration batch inside one transaction.
///
/// Safe on a healthy store because all DDL is guarded by `IF NOT EXISTS`;
/// used to restore tables that were dropped out-of-band while
/// `user_version` still reports the latest schema.
pub fn repair_schema(conn: &mut Connection) -> StoreResult<()> {
    let tx = conn.transaction()?;
    for migration in MIGRATIONS {
        tx.execute_batch(migration.sql)?;
    }
    tx.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))?;
    tx.commit()?;
    Ok(())
}

fn current_user_version(conn: &Connection) -> StoreResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}
