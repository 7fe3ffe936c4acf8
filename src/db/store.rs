//! Generic statement interface over the scheduler store.
//!
//! # Responsibility
//! - Own the store file's lifecycle: create, migrate and repair the schema.
//! - Execute caller-supplied SQL with positional parameters under a scoped
//!   per-call transaction.
//!
//! # Invariants
//! - Every statement call opens a fresh bootstrapped connection, runs in
//!   one transaction and releases the connection on every exit path.
//! - A failing statement rolls the whole transaction back; no partial
//!   writes are ever visible.
//! - Schema repair is non-destructive: existing tables and rows survive.

use super::migrations::{missing_tables, repair_schema};
use super::{open_db, StoreResult};
use log::{info, warn};
use rusqlite::types::Value;
use rusqlite::{Connection, Params, Transaction};
use std::path::{Path, PathBuf};

/// One result row as an ordered column-name/value mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredRow {
    values: Vec<(String, Value)>,
}

impl StoredRow {
    /// Looks up a column value by name.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Column names in statement order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(name, _)| name.as_str())
    }

    /// Column/value pairs in statement order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }
}

/// File-backed scheduler store with a four-operation statement interface.
///
/// Callers supply complete SQL; there is no query builder. Concurrent
/// access is serialized by SQLite's own locking plus the bootstrap busy
/// timeout; the store adds no coordination of its own.
pub struct ScheduleStore {
    db_path: PathBuf,
}

impl ScheduleStore {
    /// Opens (creating if needed) the store at `path`.
    ///
    /// On an existing file this verifies all required tables are present
    /// and repairs the schema when any are missing. The repair only runs
    /// `CREATE ... IF NOT EXISTS` batches, so it never drops or alters
    /// what is already there.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db_path = path.as_ref().to_path_buf();
        let mut conn = open_db(&db_path)?;

        let missing = missing_tables(&conn)?;
        if !missing.is_empty() {
            warn!(
                "event=store_open module=db status=repair missing_tables={}",
                missing.join(",")
            );
            repair_schema(&mut conn)?;
        }
        info!(
            "event=store_open module=db status=ok path={}",
            db_path.display()
        );

        Ok(Self { db_path })
    }

    /// Path of the underlying store file.
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Executes a SELECT and returns the full result set in statement
    /// order, one column-name/value mapping per row.
    pub fn fetch_all<P: Params>(&self, sql: &str, params: P) -> StoreResult<Vec<StoredRow>> {
        self.with_transaction(|tx| {
            let mut stmt = tx.prepare(sql)?;
            let column_names: Vec<String> =
                stmt.column_names().iter().map(|name| name.to_string()).collect();

            let mut rows = stmt.query(params)?;
            let mut result = Vec::new();
            while let Some(row) = rows.next()? {
                let mut values = Vec::with_capacity(column_names.len());
                for (index, name) in column_names.iter().enumerate() {
                    values.push((name.clone(), row.get::<_, Value>(index)?));
                }
                result.push(StoredRow { values });
            }
            Ok(result)
        })
    }

    /// Executes an INSERT and returns the newly generated row id.
    pub fn run_insert<P: Params>(&self, sql: &str, params: P) -> StoreResult<i64> {
        self.with_transaction(|tx| {
            tx.execute(sql, params)?;
            Ok(tx.last_insert_rowid())
        })
    }

    /// Executes an UPDATE and returns the number of affected rows.
    pub fn run_update<P: Params>(&self, sql: &str, params: P) -> StoreResult<usize> {
        self.with_transaction(|tx| Ok(tx.execute(sql, params)?))
    }

    /// Executes a DELETE and returns the number of deleted rows.
    pub fn run_delete<P: Params>(&self, sql: &str, params: P) -> StoreResult<usize> {
        self.with_transaction(|tx| Ok(tx.execute(sql, params)?))
    }

    /// Lists the names of all tables currently in the store.
    pub fn table_names(&self) -> StoreResult<Vec<String>> {
        self.with_transaction(|tx| {
            let mut stmt = tx.prepare(
                "SELECT name FROM sqlite_master
                 WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
                 ORDER BY name;",
            )?;
            let names = stmt
                .query_map([], |row| row.get::<_, String>(0))?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(names)
        })
    }

    /// Runs `op` inside a fresh connection-scoped transaction.
    ///
    /// Commits when `op` succeeds; any error path drops the transaction,
    /// which rolls it back before the connection closes.
    fn with_transaction<T>(
        &self,
        op: impl FnOnce(&Transaction<'_>) -> StoreResult<T>,
    ) -> StoreResult<T> {
        let mut conn: Connection = open_db(&self.db_path)?;
        let tx = conn.transaction()?;
        let value = op(&tx)?;
        tx.commit()?;
        Ok(value)
    }
}
