use routina::ScheduleStore;
use rusqlite::params;
use rusqlite::types::Value;
use tempfile::TempDir;

fn store_with_user() -> (TempDir, ScheduleStore, i64) {
    let dir = tempfile::tempdir().unwrap();
    let store = ScheduleStore::open(dir.path().join("routina.db")).unwrap();
    let user_id = store
        .run_insert(
            "INSERT INTO users (username, email) VALUES (?1, ?2);",
            params!["planner", "planner@example.com"],
        )
        .unwrap();
    (dir, store, user_id)
}

fn insert_routine(store: &ScheduleStore, user_id: i64, name: &str) -> i64 {
    store
        .run_insert(
            "INSERT INTO routines (user_id, name) VALUES (?1, ?2);",
            params![user_id, name],
        )
        .unwrap()
}

fn count(store: &ScheduleStore, table: &str) -> i64 {
    let rows = store
        .fetch_all(&format!("SELECT COUNT(*) AS n FROM {table};"), [])
        .unwrap();
    match rows[0].get("n") {
        Some(Value::Integer(n)) => *n,
        other => panic!("unexpected count value: {other:?}"),
    }
}

#[test]
fn insert_returns_generated_row_ids_in_sequence() {
    let (_dir, store, user_id) = store_with_user();
    assert_eq!(user_id, 1);

    let first = insert_routine(&store, user_id, "morning");
    let second = insert_routine(&store, user_id, "evening");
    assert_eq!(second, first + 1);
}

#[test]
fn update_and_delete_report_affected_row_counts() {
    let (_dir, store, user_id) = store_with_user();
    let routine_id = insert_routine(&store, user_id, "morning");
    for title in ["stretch", "journal", "plan day"] {
        store
            .run_insert(
                "INSERT INTO tasks (routine_id, user_id, title) VALUES (?1, ?2, ?3);",
                params![routine_id, user_id, title],
            )
            .unwrap();
    }

    let updated = store
        .run_update(
            "UPDATE tasks SET status = 'completed' WHERE routine_id = ?1;",
            params![routine_id],
        )
        .unwrap();
    assert_eq!(updated, 3);

    let deleted = store
        .run_delete("DELETE FROM tasks WHERE title = ?1;", params!["journal"])
        .unwrap();
    assert_eq!(deleted, 1);

    let missed = store
        .run_delete("DELETE FROM tasks WHERE title = ?1;", params!["no such"])
        .unwrap();
    assert_eq!(missed, 0);
}

#[test]
fn fetch_all_preserves_statement_column_order() {
    let (_dir, store, _user_id) = store_with_user();

    let rows = store
        .fetch_all(
            "SELECT username, email, is_active FROM users ORDER BY id;",
            [],
        )
        .unwrap();
    assert_eq!(rows.len(), 1);

    let columns: Vec<&str> = rows[0].columns().collect();
    assert_eq!(columns, ["username", "email", "is_active"]);

    let pairs: Vec<(&str, &Value)> = rows[0].iter().collect();
    assert_eq!(pairs.len(), 3);
    assert_eq!(pairs[0].0, "username");
    assert_eq!(pairs[0].1, &Value::Text("planner".to_string()));
    assert_eq!(
        rows[0].get("username"),
        Some(&Value::Text("planner".to_string()))
    );
    assert_eq!(rows[0].get("is_active"), Some(&Value::Integer(1)));
    assert_eq!(rows[0].get("no_such_column"), None);
}

#[test]
fn failing_insert_rolls_back_and_leaves_store_unchanged() {
    let (_dir, store, _user_id) = store_with_user();

    // routine_id 999 does not exist; the FK constraint must reject this.
    let result = store.run_insert(
        "INSERT INTO tasks (routine_id, user_id, title) VALUES (?1, ?2, ?3);",
        params![999, 1, "orphan task"],
    );
    assert!(result.is_err());
    assert_eq!(count(&store, "tasks"), 0);
}

#[test]
fn malformed_statement_is_a_store_error() {
    let (_dir, store, _user_id) = store_with_user();
    assert!(store.fetch_all("SELECT FROM nowhere;", []).is_err());
}

#[test]
fn unique_violation_keeps_previous_row_intact() {
    let (_dir, store, _user_id) = store_with_user();

    let result = store.run_insert(
        "INSERT INTO users (username, email) VALUES (?1, ?2);",
        params!["planner", "other@example.com"],
    );
    assert!(result.is_err());
    assert_eq!(count(&store, "users"), 1);
}

#[test]
fn deleting_a_user_cascades_through_all_owned_rows() {
    let (_dir, store, user_id) = store_with_user();
    let routine_id = insert_routine(&store, user_id, "morning");
    let task_id = store
        .run_insert(
            "INSERT INTO tasks (routine_id, user_id, title) VALUES (?1, ?2, ?3);",
            params![routine_id, user_id, "stretch"],
        )
        .unwrap();
    store
        .run_insert(
            "INSERT INTO reminders (task_id, user_id, reminder_time) VALUES (?1, ?2, ?3);",
            params![task_id, user_id, 1_700_000_000_000_i64],
        )
        .unwrap();
    store
        .run_insert(
            "INSERT INTO routine_logs (routine_id, user_id, execution_date) VALUES (?1, ?2, ?3);",
            params![routine_id, user_id, "2026-08-23"],
        )
        .unwrap();
    store
        .run_insert(
            "INSERT INTO user_preferences (user_id) VALUES (?1);",
            params![user_id],
        )
        .unwrap();
    let category_id = store
        .run_insert(
            "INSERT INTO task_categories (user_id, name) VALUES (?1, ?2);",
            params![user_id, "wellness"],
        )
        .unwrap();
    store
        .run_insert(
            "INSERT INTO task_category_mapping (task_id, category_id) VALUES (?1, ?2);",
            params![task_id, category_id],
        )
        .unwrap();

    let deleted = store
        .run_delete("DELETE FROM users WHERE id = ?1;", params![user_id])
        .unwrap();
    assert_eq!(deleted, 1);

    for table in [
        "users",
        "routines",
        "tasks",
        "reminders",
        "routine_logs",
        "user_preferences",
        "task_categories",
        "task_category_mapping",
    ] {
        assert_eq!(count(&store, table), 0, "table {table} should be empty");
    }
}

#[test]
fn category_names_are_unique_per_user_not_globally() {
    let (_dir, store, user_id) = store_with_user();
    let other_user = store
        .run_insert(
            "INSERT INTO users (username, email) VALUES (?1, ?2);",
            params!["second", "second@example.com"],
        )
        .unwrap();

    store
        .run_insert(
            "INSERT INTO task_categories (user_id, name) VALUES (?1, ?2);",
            params![user_id, "wellness"],
        )
        .unwrap();
    store
        .run_insert(
            "INSERT INTO task_categories (user_id, name) VALUES (?1, ?2);",
            params![other_user, "wellness"],
        )
        .unwrap();

    let duplicate = store.run_insert(
        "INSERT INTO task_categories (user_id, name) VALUES (?1, ?2);",
        params![user_id, "wellness"],
    );
    assert!(duplicate.is_err());
    assert_eq!(count(&store, "task_categories"), 2);
}
