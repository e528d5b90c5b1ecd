//! `SQLite`-backed stores.
//!
//! Timestamps are stored as RFC 3339 strings in UTC. Row ids are
//! integers in the database and exposed to callers as strings, so the
//! trait surface stays identical to the offline store.

use chrono::{DateTime, Utc};
use rusqlite::{params, OptionalExtension};

use crate::error::FocalError;
use crate::storage::Database;
use crate::tasks::{Priority, Task, TaskStatus};
use crate::timer::{FocusSession, SessionStatus};

use super::{ChangeNotifier, Listener, ListenerId, SessionStore, TaskStore};

fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, FocalError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| FocalError::Database(format!("Invalid timestamp '{s}': {e}")))
}

const fn session_status_to_str(status: SessionStatus) -> &'static str {
    match status {
        SessionStatus::InProgress => "in_progress",
        SessionStatus::Completed => "completed",
        SessionStatus::Interrupted => "interrupted",
    }
}

fn session_status_from_str(s: &str) -> Result<SessionStatus, FocalError> {
    match s {
        "in_progress" => Ok(SessionStatus::InProgress),
        "completed" => Ok(SessionStatus::Completed),
        "interrupted" => Ok(SessionStatus::Interrupted),
        other => Err(FocalError::Database(format!(
            "Unknown session status '{other}'"
        ))),
    }
}

fn to_u32(value: i64, column: &str) -> Result<u32, FocalError> {
    u32::try_from(value)
        .map_err(|_| FocalError::Database(format!("Column {column} out of range: {value}")))
}

/// Raw row shape pulled out of the `focus_sessions` table before
/// timestamp and status parsing.
struct SessionRow {
    id: i64,
    task_id: Option<String>,
    started_at: String,
    ended_at: Option<String>,
    duration_minutes: i64,
    break_minutes: i64,
    status: String,
    pause_count: i64,
    notes: Option<String>,
}

impl SessionRow {
    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            task_id: row.get(1)?,
            started_at: row.get(2)?,
            ended_at: row.get(3)?,
            duration_minutes: row.get(4)?,
            break_minutes: row.get(5)?,
            status: row.get(6)?,
            pause_count: row.get(7)?,
            notes: row.get(8)?,
        })
    }

    fn into_session(self) -> Result<FocusSession, FocalError> {
        Ok(FocusSession {
            id: Some(self.id.to_string()),
            task_id: self.task_id,
            started_at: parse_timestamp(&self.started_at)?,
            ended_at: self
                .ended_at
                .as_deref()
                .map(parse_timestamp)
                .transpose()?,
            duration_minutes: to_u32(self.duration_minutes, "duration_minutes")?,
            break_minutes: to_u32(self.break_minutes, "break_minutes")?,
            status: session_status_from_str(&self.status)?,
            pause_count: to_u32(self.pause_count, "pause_count")?,
            notes: self.notes,
        })
    }
}

const SESSION_COLUMNS: &str = "id, task_id, started_at, ended_at, duration_minutes, \
                               break_minutes, status, pause_count, notes";

/// Session store backed by the local database.
pub struct SqliteSessionStore {
    db: Database,
    notifier: ChangeNotifier,
}

impl SqliteSessionStore {
    /// Open the store over the default database location.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open() -> Result<Self, FocalError> {
        Ok(Self::with_database(Database::open()?))
    }

    /// Wrap an already-open database.
    #[must_use]
    pub fn with_database(db: Database) -> Self {
        Self {
            db,
            notifier: ChangeNotifier::new(),
        }
    }

    fn query_sessions(
        &self,
        sql: &str,
        params: &[&dyn rusqlite::ToSql],
    ) -> Result<Vec<FocusSession>, FocalError> {
        let mut stmt = self
            .db
            .connection()
            .prepare(sql)
            .map_err(|e| FocalError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map(params, SessionRow::from_row)
            .map_err(|e| FocalError::Database(format!("Failed to query sessions: {e}")))?;

        let mut sessions = Vec::new();
        for row in rows {
            let raw =
                row.map_err(|e| FocalError::Database(format!("Failed to read session row: {e}")))?;
            sessions.push(raw.into_session()?);
        }
        Ok(sessions)
    }
}

impl SessionStore for SqliteSessionStore {
    fn create(&self, session: &mut FocusSession) -> Result<(), FocalError> {
        self.db
            .connection()
            .execute(
                "INSERT INTO focus_sessions
                 (task_id, started_at, ended_at, duration_minutes, break_minutes,
                  status, pause_count, notes)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    session.task_id,
                    session.started_at.to_rfc3339(),
                    session.ended_at.map(|dt| dt.to_rfc3339()),
                    session.duration_minutes,
                    session.break_minutes,
                    session_status_to_str(session.status),
                    session.pause_count,
                    session.notes,
                ],
            )
            .map_err(|e| FocalError::Database(format!("Failed to create session: {e}")))?;

        session.id = Some(self.db.connection().last_insert_rowid().to_string());
        self.notifier.notify(session);
        Ok(())
    }

    fn update(&self, session: &FocusSession) -> Result<(), FocalError> {
        let id = session
            .id
            .as_deref()
            .ok_or_else(|| FocalError::Persistence("session has no id".to_string()))?;
        let row_id: i64 = id
            .parse()
            .map_err(|_| FocalError::NotFound(format!("session {id}")))?;

        let changed = self
            .db
            .connection()
            .execute(
                "UPDATE focus_sessions
                 SET task_id = ?1, started_at = ?2, ended_at = ?3,
                     duration_minutes = ?4, break_minutes = ?5, status = ?6,
                     pause_count = ?7, notes = ?8
                 WHERE id = ?9",
                params![
                    session.task_id,
                    session.started_at.to_rfc3339(),
                    session.ended_at.map(|dt| dt.to_rfc3339()),
                    session.duration_minutes,
                    session.break_minutes,
                    session_status_to_str(session.status),
                    session.pause_count,
                    session.notes,
                    row_id,
                ],
            )
            .map_err(|e| FocalError::Database(format!("Failed to update session: {e}")))?;

        if changed == 0 {
            return Err(FocalError::NotFound(format!("session {id}")));
        }

        self.notifier.notify(session);
        Ok(())
    }

    fn get(&self, id: &str) -> Result<Option<FocusSession>, FocalError> {
        // Offline ids never appear in the database.
        let Ok(row_id) = id.parse::<i64>() else {
            return Ok(None);
        };

        let row = self
            .db
            .connection()
            .query_row(
                &format!("SELECT {SESSION_COLUMNS} FROM focus_sessions WHERE id = ?1"),
                params![row_id],
                SessionRow::from_row,
            )
            .optional()
            .map_err(|e| FocalError::Database(format!("Failed to fetch session: {e}")))?;

        row.map(SessionRow::into_session).transpose()
    }

    fn active(&self) -> Result<Option<FocusSession>, FocalError> {
        let row = self
            .db
            .connection()
            .query_row(
                &format!(
                    "SELECT {SESSION_COLUMNS} FROM focus_sessions
                     WHERE status = 'in_progress'
                     ORDER BY started_at DESC LIMIT 1"
                ),
                [],
                SessionRow::from_row,
            )
            .optional()
            .map_err(|e| FocalError::Database(format!("Failed to fetch active session: {e}")))?;

        row.map(SessionRow::into_session).transpose()
    }

    fn list_recent(&self, limit: usize) -> Result<Vec<FocusSession>, FocalError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        self.query_sessions(
            &format!(
                "SELECT {SESSION_COLUMNS} FROM focus_sessions
                 ORDER BY started_at DESC LIMIT ?1"
            ),
            &[&limit],
        )
    }

    fn list_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<FocusSession>, FocalError> {
        self.query_sessions(
            &format!(
                "SELECT {SESSION_COLUMNS} FROM focus_sessions
                 WHERE started_at >= ?1 AND started_at < ?2
                 ORDER BY started_at DESC"
            ),
            &[&start.to_rfc3339(), &end.to_rfc3339()],
        )
    }

    fn subscribe(&self, listener: Listener) -> ListenerId {
        self.notifier.subscribe(listener)
    }

    fn unsubscribe(&self, id: ListenerId) {
        self.notifier.unsubscribe(id);
    }
}

fn task_status_from_str(s: &str) -> Result<TaskStatus, FocalError> {
    match s {
        "pending" => Ok(TaskStatus::Pending),
        "in_progress" => Ok(TaskStatus::InProgress),
        "completed" => Ok(TaskStatus::Completed),
        "blocked" => Ok(TaskStatus::Blocked),
        other => Err(FocalError::Database(format!("Unknown task status '{other}'"))),
    }
}

const fn task_status_to_str(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "pending",
        TaskStatus::InProgress => "in_progress",
        TaskStatus::Completed => "completed",
        TaskStatus::Blocked => "blocked",
    }
}

struct TaskRow {
    id: i64,
    title: String,
    priority: String,
    status: String,
    completed_at: Option<String>,
    estimated_minutes: Option<i64>,
}

impl TaskRow {
    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            priority: row.get(2)?,
            status: row.get(3)?,
            completed_at: row.get(4)?,
            estimated_minutes: row.get(5)?,
        })
    }

    fn into_task(self) -> Result<Task, FocalError> {
        Ok(Task {
            id: self.id.to_string(),
            title: self.title,
            priority: Priority::parse(&self.priority),
            status: task_status_from_str(&self.status)?,
            completed_at: self
                .completed_at
                .as_deref()
                .map(parse_timestamp)
                .transpose()?,
            estimated_minutes: self
                .estimated_minutes
                .map(|v| to_u32(v, "estimated_minutes"))
                .transpose()?,
        })
    }
}

const TASK_COLUMNS: &str = "id, title, priority, status, completed_at, estimated_minutes";

/// Task store backed by the local database.
pub struct SqliteTaskStore {
    db: Database,
}

impl SqliteTaskStore {
    /// Open the store over the default database location.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open() -> Result<Self, FocalError> {
        Ok(Self::with_database(Database::open()?))
    }

    /// Wrap an already-open database.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// Insert a new task and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn add(
        &self,
        title: &str,
        priority: Priority,
        estimated_minutes: Option<u32>,
    ) -> Result<Task, FocalError> {
        self.db
            .connection()
            .execute(
                "INSERT INTO tasks (title, priority, status, estimated_minutes)
                 VALUES (?1, ?2, 'pending', ?3)",
                params![title, priority.to_string(), estimated_minutes],
            )
            .map_err(|e| FocalError::Database(format!("Failed to add task: {e}")))?;

        Ok(Task {
            id: self.db.connection().last_insert_rowid().to_string(),
            title: title.to_string(),
            priority,
            status: TaskStatus::Pending,
            completed_at: None,
            estimated_minutes,
        })
    }

    /// Mark a task completed at `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if no task matches `id` or the write fails.
    pub fn complete(&self, id: &str, now: DateTime<Utc>) -> Result<(), FocalError> {
        let row_id: i64 = id
            .parse()
            .map_err(|_| FocalError::NotFound(format!("task {id}")))?;

        let changed = self
            .db
            .connection()
            .execute(
                "UPDATE tasks SET status = ?1, completed_at = ?2 WHERE id = ?3",
                params![
                    task_status_to_str(TaskStatus::Completed),
                    now.to_rfc3339(),
                    row_id
                ],
            )
            .map_err(|e| FocalError::Database(format!("Failed to complete task: {e}")))?;

        if changed == 0 {
            return Err(FocalError::NotFound(format!("task {id}")));
        }
        Ok(())
    }

    fn query_tasks(&self, sql: &str) -> Result<Vec<Task>, FocalError> {
        let mut stmt = self
            .db
            .connection()
            .prepare(sql)
            .map_err(|e| FocalError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([], TaskRow::from_row)
            .map_err(|e| FocalError::Database(format!("Failed to query tasks: {e}")))?;

        let mut tasks = Vec::new();
        for row in rows {
            let raw =
                row.map_err(|e| FocalError::Database(format!("Failed to read task row: {e}")))?;
            tasks.push(raw.into_task()?);
        }
        Ok(tasks)
    }
}

impl TaskStore for SqliteTaskStore {
    fn pending_tasks(&self) -> Result<Vec<Task>, FocalError> {
        self.query_tasks(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks
             WHERE status != 'completed'
             ORDER BY CASE priority
                 WHEN 'high' THEN 0
                 WHEN 'medium' THEN 1
                 ELSE 2
             END, id"
        ))
    }

    fn all_tasks(&self) -> Result<Vec<Task>, FocalError> {
        self.query_tasks(&format!("SELECT {TASK_COLUMNS} FROM tasks ORDER BY id"))
    }

    fn get(&self, id: &str) -> Result<Option<Task>, FocalError> {
        let Ok(row_id) = id.parse::<i64>() else {
            return Ok(None);
        };

        let row = self
            .db
            .connection()
            .query_row(
                &format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1"),
                params![row_id],
                TaskRow::from_row,
            )
            .optional()
            .map_err(|e| FocalError::Database(format!("Failed to fetch task: {e}")))?;

        row.map(TaskRow::into_task).transpose()
    }
}
