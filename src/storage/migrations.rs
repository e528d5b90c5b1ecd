//! Database migrations for focal.
//!
//! Each migration upgrades the schema by one version. Migrations run
//! automatically when the database is opened.

use rusqlite::Connection;

use crate::error::FocalError;

/// Current schema version.
const CURRENT_VERSION: i32 = 1;

/// Get the current schema version from the database.
///
/// Returns 0 if no version has been set (new database).
///
/// # Errors
///
/// Returns an error if the version cannot be read.
pub fn get_version(conn: &Connection) -> Result<i32, FocalError> {
    let version: i32 = conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| FocalError::Database(format!("Failed to get schema version: {e}")))?;

    Ok(version)
}

/// Set the schema version in the database.
fn set_version(conn: &Connection, version: i32) -> Result<(), FocalError> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
        .map_err(|e| FocalError::Database(format!("Failed to set schema version: {e}")))
}

/// Run all pending migrations.
///
/// # Errors
///
/// Returns an error if a migration fails.
pub fn run(conn: &Connection) -> Result<(), FocalError> {
    let current = get_version(conn)?;

    if current >= CURRENT_VERSION {
        return Ok(());
    }

    for version in (current + 1)..=CURRENT_VERSION {
        run_migration(conn, version)?;
        set_version(conn, version)?;
    }

    Ok(())
}

/// Run a specific migration.
fn run_migration(conn: &Connection, version: i32) -> Result<(), FocalError> {
    match version {
        1 => migrate_v1(conn),
        _ => Err(FocalError::Database(format!(
            "Unknown migration version: {version}"
        ))),
    }
}

/// Migration v1: Initial schema.
///
/// Creates tables for:
/// - `focus_sessions`: work session history
/// - `tasks`: linkable tasks
fn migrate_v1(conn: &Connection) -> Result<(), FocalError> {
    conn.execute_batch(
        r"
        -- Focus sessions
        CREATE TABLE IF NOT EXISTS focus_sessions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            task_id TEXT,
            started_at TEXT NOT NULL,
            ended_at TEXT,
            duration_minutes INTEGER NOT NULL,
            break_minutes INTEGER NOT NULL DEFAULT 0,
            status TEXT NOT NULL DEFAULT 'in_progress',
            pause_count INTEGER NOT NULL DEFAULT 0,
            notes TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_focus_sessions_started
        ON focus_sessions(started_at);

        CREATE INDEX IF NOT EXISTS idx_focus_sessions_status
        ON focus_sessions(status);

        -- Tasks that sessions may link to
        CREATE TABLE IF NOT EXISTS tasks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            priority TEXT NOT NULL DEFAULT 'medium',
            status TEXT NOT NULL DEFAULT 'pending',
            completed_at TEXT,
            estimated_minutes INTEGER
        );

        CREATE INDEX IF NOT EXISTS idx_tasks_status
        ON tasks(status);
        ",
    )
    .map_err(|e| FocalError::Database(format!("Migration v1 failed: {e}")))
}
