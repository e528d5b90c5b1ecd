//! Focus session records.
//!
//! A [`FocusSession`] is the persisted record of one work interval and
//! its planned break. Breaks themselves are not persisted as separate
//! records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of a focus session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// The work countdown has not finished yet.
    InProgress,
    /// The work countdown ran to zero.
    Completed,
    /// The session was cancelled before the countdown finished.
    Interrupted,
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Completed => write!(f, "completed"),
            Self::Interrupted => write!(f, "interrupted"),
        }
    }
}

/// A record of one focused work interval.
///
/// Invariants: `ended_at` is set if and only if
/// `status != InProgress`; `duration_minutes` and `break_minutes` are
/// fixed at session start. Once a session leaves `InProgress` it is
/// never mutated again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusSession {
    /// Store-assigned identifier (None until persisted).
    pub id: Option<String>,
    /// Linked task, by reference only.
    pub task_id: Option<String>,
    /// When the work phase started.
    pub started_at: DateTime<Utc>,
    /// When the session ended (None while in progress).
    pub ended_at: Option<DateTime<Utc>>,
    /// Planned work length in minutes.
    pub duration_minutes: u32,
    /// Planned break length paired with this session.
    pub break_minutes: u32,
    /// Current status.
    pub status: SessionStatus,
    /// Number of times the running phase was paused.
    pub pause_count: u32,
    /// Optional free-form notes.
    pub notes: Option<String>,
}

impl FocusSession {
    /// Create a new in-progress session starting at `started_at`.
    #[must_use]
    pub const fn new(
        duration_minutes: u32,
        break_minutes: u32,
        task_id: Option<String>,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            task_id,
            started_at,
            ended_at: None,
            duration_minutes,
            break_minutes,
            status: SessionStatus::InProgress,
            pause_count: 0,
            notes: None,
        }
    }

    /// Mark the session completed at `now`.
    pub fn complete(&mut self, now: DateTime<Utc>) {
        self.status = SessionStatus::Completed;
        self.ended_at = Some(now);
    }

    /// Mark the session interrupted at `now`.
    pub fn interrupt(&mut self, now: DateTime<Utc>) {
        self.status = SessionStatus::Interrupted;
        self.ended_at = Some(now);
    }

    /// Check if the session is still in progress.
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        self.status == SessionStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn start_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_new_session_is_in_progress() {
        let session = FocusSession::new(25, 5, None, start_time());

        assert!(session.is_in_progress());
        assert!(session.ended_at.is_none());
        assert_eq!(session.duration_minutes, 25);
        assert_eq!(session.break_minutes, 5);
        assert_eq!(session.pause_count, 0);
        assert!(session.id.is_none());
    }

    #[test]
    fn test_complete_sets_end_time() {
        let mut session = FocusSession::new(25, 5, None, start_time());
        let end = start_time() + chrono::Duration::minutes(25);

        session.complete(end);

        assert_eq!(session.status, SessionStatus::Completed);
        assert_eq!(session.ended_at, Some(end));
        assert!(!session.is_in_progress());
    }

    #[test]
    fn test_interrupt_sets_end_time() {
        let mut session = FocusSession::new(25, 5, Some("task-1".to_string()), start_time());
        let end = start_time() + chrono::Duration::minutes(3);

        session.interrupt(end);

        assert_eq!(session.status, SessionStatus::Interrupted);
        assert_eq!(session.ended_at, Some(end));
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&SessionStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
        let json = serde_json::to_string(&SessionStatus::Interrupted).unwrap();
        assert_eq!(json, "\"interrupted\"");
    }
}
