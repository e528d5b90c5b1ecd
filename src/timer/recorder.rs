//! Bridges timer events to the session store.
//!
//! The countdown is the source of truth; persistence is best-effort.
//! [`SessionRecorder`] applies [`TimerEvent`]s to a [`SessionStore`] and
//! reports failures to the caller without ever touching timer state. If
//! the create at session start failed, the final mutation creates the
//! record instead, so a flaky store loses nothing but intermediate
//! state.

use crate::error::FocalError;
use crate::store::SessionStore;

use super::engine::TimerEvent;

/// Applies timer events to a session store.
pub struct SessionRecorder<'a> {
    store: &'a dyn SessionStore,
    active_id: Option<String>,
}

impl<'a> SessionRecorder<'a> {
    /// Create a recorder writing to `store`.
    #[must_use]
    pub const fn new(store: &'a dyn SessionStore) -> Self {
        Self {
            store,
            active_id: None,
        }
    }

    /// Persist the store-visible effect of `event`.
    ///
    /// # Errors
    ///
    /// Returns [`FocalError::Persistence`] (or a store error) when the
    /// write fails. Callers should surface this as a warning; the timer
    /// itself is unaffected.
    pub fn record(&mut self, event: &TimerEvent) -> Result<(), FocalError> {
        match event {
            TimerEvent::SessionStarted(session) => {
                let mut record = session.clone();
                self.store.create(&mut record)?;
                self.active_id = record.id;
                Ok(())
            }
            TimerEvent::SessionCompleted(session) | TimerEvent::SessionInterrupted(session) => {
                let mut record = session.clone();
                record.id = self.active_id.take();

                if record.id.is_some() {
                    self.store.update(&record)
                } else {
                    // The create at start failed; create the final
                    // record now instead of losing the session.
                    self.store.create(&mut record)
                }
            }
            TimerEvent::BreakFinished => Ok(()),
        }
    }

    /// Identifier of the record backing the active session, if the
    /// create succeeded.
    #[must_use]
    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedClock;
    use crate::store::memory::MemorySessionStore;
    use crate::timer::{FocusTimer, SessionStatus};
    use chrono::{TimeZone, Utc};

    use std::cell::Cell;

    /// A store that rejects every write, for failure-isolation tests.
    struct FailingStore {
        creates: Cell<u32>,
    }

    impl FailingStore {
        fn new() -> Self {
            Self {
                creates: Cell::new(0),
            }
        }
    }

    impl SessionStore for FailingStore {
        fn create(
            &self,
            _session: &mut crate::timer::FocusSession,
        ) -> Result<(), FocalError> {
            self.creates.set(self.creates.get() + 1);
            Err(FocalError::Persistence("store offline".to_string()))
        }

        fn update(&self, _session: &crate::timer::FocusSession) -> Result<(), FocalError> {
            Err(FocalError::Persistence("store offline".to_string()))
        }

        fn get(&self, _id: &str) -> Result<Option<crate::timer::FocusSession>, FocalError> {
            Ok(None)
        }

        fn active(&self) -> Result<Option<crate::timer::FocusSession>, FocalError> {
            Ok(None)
        }

        fn list_recent(&self, _limit: usize) -> Result<Vec<crate::timer::FocusSession>, FocalError> {
            Ok(Vec::new())
        }

        fn list_range(
            &self,
            _start: chrono::DateTime<Utc>,
            _end: chrono::DateTime<Utc>,
        ) -> Result<Vec<crate::timer::FocusSession>, FocalError> {
            Ok(Vec::new())
        }

        fn subscribe(&self, _listener: crate::store::Listener) -> crate::store::ListenerId {
            crate::store::ListenerId(0)
        }

        fn unsubscribe(&self, _id: crate::store::ListenerId) {}
    }

    fn new_timer() -> FocusTimer<FixedClock> {
        let start = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
        FocusTimer::new(FixedClock::new(start))
    }

    #[test]
    fn test_start_and_complete_round_trip() {
        let store = MemorySessionStore::new();
        let mut recorder = SessionRecorder::new(&store);
        let mut timer = new_timer();

        let event = timer.start(1, 0, None).unwrap();
        recorder.record(&event).unwrap();
        let id = recorder.active_id().map(str::to_owned).unwrap();

        let mut last = None;
        for _ in 0..60 {
            if let Some(e) = timer.tick() {
                last = Some(e);
            }
        }
        recorder.record(&last.unwrap()).unwrap();

        let stored = store.get(&id).unwrap().unwrap();
        assert_eq!(stored.status, SessionStatus::Completed);
        assert!(stored.ended_at.is_some());
    }

    #[test]
    fn test_store_failure_does_not_disturb_timer() {
        let store = FailingStore::new();
        let mut recorder = SessionRecorder::new(&store);
        let mut timer = new_timer();

        let event = timer.start(25, 5, None).unwrap();
        assert!(recorder.record(&event).is_err());

        // The countdown keeps running regardless
        assert_eq!(timer.phase(), crate::timer::Phase::Running);
        timer.tick();
        assert_eq!(timer.seconds_remaining(), 25 * 60 - 1);
    }

    #[test]
    fn test_failed_create_retried_on_final_mutation() {
        let store = FailingStore::new();
        let mut recorder = SessionRecorder::new(&store);
        let mut timer = new_timer();

        let event = timer.start(25, 5, None).unwrap();
        let _ = recorder.record(&event);
        assert_eq!(store.creates.get(), 1);

        let event = timer.cancel().unwrap();
        // No id was assigned, so the final mutation retries the create
        let _ = recorder.record(&event);
        assert_eq!(store.creates.get(), 2);
    }

    #[test]
    fn test_break_finished_records_nothing() {
        let store = MemorySessionStore::new();
        let mut recorder = SessionRecorder::new(&store);

        recorder.record(&TimerEvent::BreakFinished).unwrap();
        assert!(store.list_recent(10).unwrap().is_empty());
    }
}
