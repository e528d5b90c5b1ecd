//! Store boundary contracts.
//!
//! The timer and metrics code talk to persistence only through these
//! traits, so the same countdown and aggregation logic runs against the
//! `SQLite` database or the in-memory offline store. Change listeners
//! let long-lived views (the countdown screen) observe writes without
//! polling.

pub mod memory;
pub mod sqlite;

use std::cell::{Cell, RefCell};

use chrono::{DateTime, Utc};

use crate::error::FocalError;
use crate::tasks::Task;
use crate::timer::FocusSession;

pub use memory::{MemorySessionStore, MemoryTaskStore};
pub use sqlite::{SqliteSessionStore, SqliteTaskStore};

/// Callback invoked after a session write.
pub type Listener = Box<dyn Fn(&FocusSession)>;

/// Handle returned by [`SessionStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Persistence contract for focus sessions.
///
/// Writes must be atomic from the caller's point of view: either the
/// record reflects the full mutation or the method returns an error and
/// the record is unchanged.
pub trait SessionStore {
    /// Persist a new session and assign it an identifier.
    ///
    /// On success `session.id` is set to the new identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails; `session.id` stays `None`.
    fn create(&self, session: &mut FocusSession) -> Result<(), FocalError>;

    /// Overwrite the stored record with the same id as `session`.
    ///
    /// # Errors
    ///
    /// Returns an error if the session has no id, no record matches, or
    /// the write fails.
    fn update(&self, session: &FocusSession) -> Result<(), FocalError>;

    /// Fetch a session by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn get(&self, id: &str) -> Result<Option<FocusSession>, FocalError>;

    /// The most recently started session still in progress, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn active(&self) -> Result<Option<FocusSession>, FocalError>;

    /// The `limit` most recently started sessions, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn list_recent(&self, limit: usize) -> Result<Vec<FocusSession>, FocalError>;

    /// Sessions started within `[start, end)`, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn list_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<FocusSession>, FocalError>;

    /// Register a callback fired after every successful write.
    fn subscribe(&self, listener: Listener) -> ListenerId;

    /// Remove a previously registered callback. Unknown ids are ignored.
    fn unsubscribe(&self, id: ListenerId);
}

/// Read access to tasks that sessions may link to.
#[cfg_attr(test, mockall::automock)]
pub trait TaskStore {
    /// Tasks still open for linking.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn pending_tasks(&self) -> Result<Vec<Task>, FocalError>;

    /// Every known task.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn all_tasks(&self) -> Result<Vec<Task>, FocalError>;

    /// Fetch a task by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn get(&self, id: &str) -> Result<Option<Task>, FocalError>;
}

/// Shared listener registry used by both store implementations.
pub(crate) struct ChangeNotifier {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(ListenerId, Listener)>>,
}

impl ChangeNotifier {
    pub(crate) fn new() -> Self {
        Self {
            next_id: Cell::new(1),
            listeners: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn subscribe(&self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.listeners.borrow_mut().push((id, listener));
        id
    }

    pub(crate) fn unsubscribe(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|(lid, _)| *lid != id);
    }

    /// Fire all listeners. Listeners must not subscribe or unsubscribe
    /// from within the callback.
    pub(crate) fn notify(&self, session: &FocusSession) {
        for (_, listener) in self.listeners.borrow().iter() {
            listener(session);
        }
    }
}
