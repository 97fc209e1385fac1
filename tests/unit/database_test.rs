//! Unit tests for the GlassDesk database layer (connection + migrations).

use glassdesk::database::migrations::{get_schema_version, run_all, CURRENT_SCHEMA_VERSION};
use glassdesk::database::Database;
use tempfile::TempDir;

fn table_exists(db: &Database, table: &str) -> bool {
    db.connection()
        .query_row(
            "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name=?1",
            [table],
            |row| row.get(0),
        )
        .unwrap_or(false)
}

#[test]
fn test_open_in_memory_succeeds() {
    assert!(Database::open_in_memory().is_ok());
}

#[test]
fn test_migrations_create_tables() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    for table in ["notes", "password_entries", "schema_version"] {
        assert!(table_exists(&db, table), "Table '{}' should exist after migrations", table);
    }
}

#[test]
fn test_schema_version_is_current() {
    let db = Database::open_in_memory().unwrap();
    assert_eq!(get_schema_version(db.connection()), CURRENT_SCHEMA_VERSION);
}

#[test]
fn test_migrations_are_idempotent() {
    let db = Database::open_in_memory().unwrap();
    run_all(db.connection()).expect("second run should succeed");
    let rows: i64 = db
        .connection()
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, CURRENT_SCHEMA_VERSION as i64);
}

#[test]
fn test_data_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("glassdesk.db");
    {
        let db = Database::open(&path).unwrap();
        db.connection()
            .execute("INSERT INTO notes (content, created_at) VALUES ('kept', 0)", [])
            .unwrap();
    }
    let db = Database::open(&path).unwrap();
    let content: String = db
        .connection()
        .query_row("SELECT content FROM notes", [], |row| row.get(0))
        .unwrap();
    assert_eq!(content, "kept");
}
