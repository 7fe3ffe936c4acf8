use routina::db::migrations::{latest_version, REQUIRED_TABLES};
use routina::{open_db, ScheduleStore, StoreError};
use rusqlite::{params, Connection};

const EXPECTED_TABLES: &[&str] = &[
    "reminders",
    "routine_logs",
    "routines",
    "task_categories",
    "task_category_mapping",
    "tasks",
    "user_preferences",
    "users",
];

#[test]
fn fresh_store_contains_exactly_the_eight_tables() {
    let dir = tempfile::tempdir().unwrap();
    let store = ScheduleStore::open(dir.path().join("routina.db")).unwrap();

    assert_eq!(store.table_names().unwrap(), EXPECTED_TABLES);
    assert_eq!(REQUIRED_TABLES.len(), EXPECTED_TABLES.len());
}

#[test]
fn fresh_store_has_expected_indexes() {
    let dir = tempfile::tempdir().unwrap();
    let store = ScheduleStore::open(dir.path().join("routina.db")).unwrap();

    let rows = store
        .fetch_all(
            "SELECT name FROM sqlite_master WHERE type = 'index' AND name LIKE 'idx_%' ORDER BY name;",
            [],
        )
        .unwrap();
    assert_eq!(rows.len(), 12);
}

#[test]
fn reopening_an_existing_store_keeps_rows_and_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("routina.db");

    let store = ScheduleStore::open(&path).unwrap();
    let user_id = store
        .run_insert(
            "INSERT INTO users (username, email) VALUES (?1, ?2);",
            params!["early_bird", "early@example.com"],
        )
        .unwrap();
    drop(store);

    let reopened = ScheduleStore::open(&path).unwrap();
    assert_eq!(reopened.table_names().unwrap(), EXPECTED_TABLES);

    let rows = reopened
        .fetch_all("SELECT id FROM users;", [])
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0].get("id"),
        Some(&rusqlite::types::Value::Integer(user_id))
    );

    let version: u32 = {
        let conn = open_db(&path).unwrap();
        conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
            .unwrap()
    };
    assert_eq!(version, latest_version());
}

#[test]
fn dropped_table_is_repaired_without_losing_surviving_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("routina.db");

    let store = ScheduleStore::open(&path).unwrap();
    store
        .run_insert(
            "INSERT INTO users (username, email) VALUES (?1, ?2);",
            params!["survivor", "survivor@example.com"],
        )
        .unwrap();
    drop(store);

    {
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch("DROP TABLE reminders;").unwrap();
    }

    let repaired = ScheduleStore::open(&path).unwrap();
    assert_eq!(repaired.table_names().unwrap(), EXPECTED_TABLES);

    let users = repaired.fetch_all("SELECT username FROM users;", []).unwrap();
    assert_eq!(users.len(), 1);
}

#[test]
fn store_with_newer_schema_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    {
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    }

    let err = match ScheduleStore::open(&path) {
        Err(err) => err,
        Ok(_) => panic!("expected unsupported schema version error"),
    };
    match err {
        StoreError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}
