//! Lifetime statistics and chart data.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::timer::{FocusSession, SessionStatus};

use super::aggregate::streak_days;

/// Lifetime statistics across the whole session history.
#[derive(Debug, Clone, Serialize)]
pub struct FocusStats {
    /// All sessions ever recorded.
    pub total_sessions: usize,
    /// Sessions that ran to completion.
    pub completed_sessions: usize,
    /// Sessions cancelled mid-countdown.
    pub interrupted_sessions: usize,
    /// Total completed focus time in minutes.
    pub total_focus_minutes: u32,
    /// Completed / (completed + interrupted). Zero with no history.
    pub completion_rate: f64,
    /// Mean completed session length in minutes. Zero with no history.
    pub avg_session_minutes: f64,
    /// Total pauses across all sessions.
    pub total_pauses: u32,
    /// Consecutive days ending today with a completed session.
    pub current_streak: u32,
    /// Longest such run anywhere in history.
    pub best_streak: u32,
}

impl FocusStats {
    /// Compute lifetime statistics from the full session history.
    #[must_use]
    pub fn calculate(sessions: &[FocusSession], today: NaiveDate) -> Self {
        let completed: Vec<&FocusSession> = sessions
            .iter()
            .filter(|s| s.status == SessionStatus::Completed)
            .collect();
        let interrupted = sessions
            .iter()
            .filter(|s| s.status == SessionStatus::Interrupted)
            .count();

        let total_focus_minutes: u32 = completed.iter().map(|s| s.duration_minutes).sum();

        let resolved = completed.len() + interrupted;
        let completion_rate = if resolved > 0 {
            completed.len() as f64 / resolved as f64
        } else {
            0.0
        };

        let avg_session_minutes = if completed.is_empty() {
            0.0
        } else {
            f64::from(total_focus_minutes) / completed.len() as f64
        };

        Self {
            total_sessions: sessions.len(),
            completed_sessions: completed.len(),
            interrupted_sessions: interrupted,
            total_focus_minutes,
            completion_rate,
            avg_session_minutes,
            total_pauses: sessions.iter().map(|s| s.pause_count).sum(),
            current_streak: streak_days(sessions, today),
            best_streak: best_streak(sessions),
        }
    }
}

/// Longest run of consecutive days with a completed session.
fn best_streak(sessions: &[FocusSession]) -> u32 {
    let mut dates: Vec<NaiveDate> = sessions
        .iter()
        .filter(|s| s.status == SessionStatus::Completed)
        .map(|s| s.started_at.date_naive())
        .collect();
    dates.sort_unstable();
    dates.dedup();

    let mut best = 0;
    let mut run = 0;
    let mut prev: Option<NaiveDate> = None;
    for date in dates {
        run = match prev {
            Some(p) if date - p == Duration::days(1) => run + 1,
            _ => 1,
        };
        best = best.max(run);
        prev = Some(date);
    }
    best
}

/// Completed focus minutes per day for the last `days` days, oldest
/// first. Days without sessions appear with zero minutes so charts stay
/// contiguous.
#[must_use]
pub fn daily_minutes(sessions: &[FocusSession], days: i64, today: NaiveDate) -> Vec<(NaiveDate, u32)> {
    (0..days)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            let minutes = sessions
                .iter()
                .filter(|s| {
                    s.status == SessionStatus::Completed && s.started_at.date_naive() == date
                })
                .map(|s| s.duration_minutes)
                .sum();
            (date, minutes)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn completed_session(started: DateTime<Utc>, minutes: u32) -> FocusSession {
        let mut session = FocusSession::new(minutes, 5, None, started);
        session.complete(started + Duration::minutes(i64::from(minutes)));
        session
    }

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_history_is_all_zeroes() {
        let stats = FocusStats::calculate(&[], at(15, 9).date_naive());
        assert_eq!(stats.total_sessions, 0);
        assert!((stats.completion_rate - 0.0).abs() < f64::EPSILON);
        assert!((stats.avg_session_minutes - 0.0).abs() < f64::EPSILON);
        assert_eq!(stats.best_streak, 0);
    }

    #[test]
    fn test_lifetime_totals() {
        let mut interrupted = FocusSession::new(25, 5, None, at(15, 11));
        interrupted.interrupt(at(15, 11) + Duration::minutes(5));

        let sessions = vec![
            completed_session(at(15, 9), 25),
            completed_session(at(15, 10), 45),
            interrupted,
        ];

        let stats = FocusStats::calculate(&sessions, at(15, 12).date_naive());
        assert_eq!(stats.total_sessions, 3);
        assert_eq!(stats.completed_sessions, 2);
        assert_eq!(stats.interrupted_sessions, 1);
        assert_eq!(stats.total_focus_minutes, 70);
        assert!((stats.completion_rate - 2.0 / 3.0).abs() < 1e-9);
        assert!((stats.avg_session_minutes - 35.0).abs() < 1e-9);
    }

    #[test]
    fn test_best_streak_finds_longest_run() {
        // Runs: 3-4-5 June (3 days), 10-11 June (2 days)
        let sessions = vec![
            completed_session(at(3, 9), 25),
            completed_session(at(4, 9), 25),
            completed_session(at(5, 9), 25),
            completed_session(at(10, 9), 25),
            completed_session(at(11, 9), 25),
        ];

        let stats = FocusStats::calculate(&sessions, at(20, 9).date_naive());
        assert_eq!(stats.best_streak, 3);
        assert_eq!(stats.current_streak, 0);
    }

    #[test]
    fn test_daily_minutes_fills_gaps() {
        let sessions = vec![
            completed_session(at(15, 9), 25),
            completed_session(at(13, 9), 50),
        ];

        let days = daily_minutes(&sessions, 3, at(15, 12).date_naive());
        assert_eq!(days.len(), 3);
        assert_eq!(days[0].1, 50); // June 13
        assert_eq!(days[1].1, 0); // June 14
        assert_eq!(days[2].1, 25); // June 15
    }
}
