use rusqlite::Connection;
use salonbook_core::db::migrations::{apply_migrations, latest_version};
use salonbook_core::db::{open_db, open_db_in_memory, DbError};

#[test]
fn latest_version_is_positive() {
    assert!(latest_version() >= 1);
}

#[test]
fn open_db_applies_all_migrations_and_reopen_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("salonbook.db");

    {
        let conn = open_db(&path).unwrap();
        assert_eq!(user_version(&conn), latest_version());
    }

    let conn = open_db(&path).unwrap();
    assert_eq!(user_version(&conn), latest_version());
}

#[test]
fn newer_schema_version_is_rejected() {
    let mut conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();

    let err = apply_migrations(&mut conn).unwrap_err();
    assert!(matches!(
        err,
        DbError::UnsupportedSchemaVersion {
            db_version: 999,
            ..
        }
    ));
}

#[test]
fn open_db_enables_foreign_keys() {
    let conn = open_db_in_memory().unwrap();
    let enabled: i64 = conn
        .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(enabled, 1);
}

#[test]
fn schema_contains_all_scheduling_tables() {
    let conn = open_db_in_memory().unwrap();
    for table in [
        "employees",
        "services",
        "employee_services",
        "appointments",
        "appointment_services",
    ] {
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1;",
                [table],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1, "missing table {table}");
    }
}

fn user_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}
