//! In-memory stores for offline use.
//!
//! When the database is unavailable (or `--offline` is passed) the
//! timer runs against these stores. Session history lives only for the
//! process lifetime; ids are prefixed `offline-` so callers can tell
//! the records were never durably stored.

use std::cell::{Cell, RefCell};

use chrono::{DateTime, Utc};

use crate::error::FocalError;
use crate::tasks::{sample_tasks, Task};
use crate::timer::{FocusSession, SessionStatus};

use super::{ChangeNotifier, Listener, ListenerId, SessionStore, TaskStore};

/// Session store backed by a `Vec`.
pub struct MemorySessionStore {
    sessions: RefCell<Vec<FocusSession>>,
    next_id: Cell<u64>,
    notifier: ChangeNotifier,
}

impl MemorySessionStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sessions: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
            notifier: ChangeNotifier::new(),
        }
    }
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for MemorySessionStore {
    fn create(&self, session: &mut FocusSession) -> Result<(), FocalError> {
        let id = format!("offline-session-{}", self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        session.id = Some(id);

        self.sessions.borrow_mut().push(session.clone());
        self.notifier.notify(session);
        Ok(())
    }

    fn update(&self, session: &FocusSession) -> Result<(), FocalError> {
        let id = session
            .id
            .as_deref()
            .ok_or_else(|| FocalError::Persistence("session has no id".to_string()))?;

        let mut sessions = self.sessions.borrow_mut();
        let slot = sessions
            .iter_mut()
            .find(|s| s.id.as_deref() == Some(id))
            .ok_or_else(|| FocalError::NotFound(format!("session {id}")))?;
        *slot = session.clone();
        drop(sessions);

        self.notifier.notify(session);
        Ok(())
    }

    fn get(&self, id: &str) -> Result<Option<FocusSession>, FocalError> {
        Ok(self
            .sessions
            .borrow()
            .iter()
            .find(|s| s.id.as_deref() == Some(id))
            .cloned())
    }

    fn active(&self) -> Result<Option<FocusSession>, FocalError> {
        Ok(self
            .sessions
            .borrow()
            .iter()
            .filter(|s| s.status == SessionStatus::InProgress)
            .max_by_key(|s| s.started_at)
            .cloned())
    }

    fn list_recent(&self, limit: usize) -> Result<Vec<FocusSession>, FocalError> {
        let mut sessions: Vec<FocusSession> = self.sessions.borrow().clone();
        sessions.sort_by(|a, b| b.started_at.cmp(&a.started_at));
        sessions.truncate(limit);
        Ok(sessions)
    }

    fn list_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<FocusSession>, FocalError> {
        let mut sessions: Vec<FocusSession> = self
            .sessions
            .borrow()
            .iter()
            .filter(|s| s.started_at >= start && s.started_at < end)
            .cloned()
            .collect();
        sessions.sort_by(|a, b| b.started_at.cmp(&a.started_at));
        Ok(sessions)
    }

    fn subscribe(&self, listener: Listener) -> ListenerId {
        self.notifier.subscribe(listener)
    }

    fn unsubscribe(&self, id: ListenerId) {
        self.notifier.unsubscribe(id);
    }
}

/// Task store backed by a `Vec`.
pub struct MemoryTaskStore {
    tasks: RefCell<Vec<Task>>,
}

impl MemoryTaskStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: RefCell::new(Vec::new()),
        }
    }

    /// Create a store holding `tasks`.
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: RefCell::new(tasks),
        }
    }

    /// Create a store seeded with the built-in sample tasks.
    #[must_use]
    pub fn with_sample_data() -> Self {
        Self::with_tasks(sample_tasks())
    }
}

impl Default for MemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore for MemoryTaskStore {
    fn pending_tasks(&self) -> Result<Vec<Task>, FocalError> {
        Ok(self
            .tasks
            .borrow()
            .iter()
            .filter(|t| t.is_pending())
            .cloned()
            .collect())
    }

    fn all_tasks(&self) -> Result<Vec<Task>, FocalError> {
        Ok(self.tasks.borrow().clone())
    }

    fn get(&self, id: &str) -> Result<Option<Task>, FocalError> {
        Ok(self.tasks.borrow().iter().find(|t| t.id == id).cloned())
    }
}
