//! Period aggregation.
//!
//! Computes the dashboard figures for one reporting window: focus
//! minutes, completed sessions and tasks, the daily streak, a
//! productivity score, and percentage deltas against the previous
//! window.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::tasks::Task;
use crate::timer::{FocusSession, SessionStatus};

use super::Period;

/// Dashboard figures for a single reporting period.
#[derive(Debug, Clone, Serialize)]
pub struct PeriodMetrics {
    /// Sum of completed session durations in the window, in minutes.
    pub focus_minutes: u32,
    /// Completed sessions started in the window.
    pub sessions_completed: usize,
    /// Interrupted sessions started in the window.
    pub sessions_interrupted: usize,
    /// Tasks completed in the window.
    pub tasks_completed: usize,
    /// Consecutive days ending today with at least one completed session.
    pub streak_days: u32,
    /// Composite 0-100 score from focus time and completed tasks.
    pub productivity_score: u32,
    /// Focus-minutes change vs. the previous window, in percent.
    /// `None` when the previous window had no focus time.
    pub focus_delta: Option<f64>,
    /// Tasks-completed change vs. the previous window, in percent.
    /// `None` when the previous window had no completions.
    pub tasks_delta: Option<f64>,
}

/// Percentage change from `previous` to `current`.
///
/// Returns `None` when `previous` is zero; there is no meaningful
/// baseline and the caller renders "N/A" instead.
#[must_use]
pub fn percent_delta(current: f64, previous: f64) -> Option<f64> {
    if previous == 0.0 {
        None
    } else {
        Some((current - previous) / previous * 100.0)
    }
}

/// Composite 0-100 productivity score.
///
/// Two hours of focus earns 50 points and each completed task earns 10,
/// capped at 100.
#[must_use]
pub fn productivity_score(focus_minutes: u32, tasks_completed: usize) -> u32 {
    let focus_points = f64::from(focus_minutes) / 120.0 * 50.0;
    let task_points = tasks_completed as f64 * 10.0;
    let score = (focus_points + task_points).round();
    if score >= 100.0 {
        100
    } else if score <= 0.0 {
        0
    } else {
        // round() of a value in (0, 100) fits u32
        score as u32
    }
}

/// Consecutive calendar days with at least one completed session,
/// walking backward from `today` and stopping at the first empty day.
///
/// A day without completions today means the streak is zero, no matter
/// how long yesterday's run was.
#[must_use]
pub fn streak_days(sessions: &[FocusSession], today: NaiveDate) -> u32 {
    let mut dates: Vec<NaiveDate> = sessions
        .iter()
        .filter(|s| s.status == SessionStatus::Completed)
        .map(|s| s.started_at.date_naive())
        .collect();
    dates.sort_unstable();
    dates.dedup();

    let mut streak = 0;
    let mut check = today;
    while dates.binary_search(&check).is_ok() {
        streak += 1;
        check -= Duration::days(1);
    }
    streak
}

fn in_range_completed_minutes(sessions: &[FocusSession], period: &Period) -> u32 {
    sessions
        .iter()
        .filter(|s| s.status == SessionStatus::Completed && period.contains(s.started_at))
        .map(|s| s.duration_minutes)
        .sum()
}

fn in_range_by_status(sessions: &[FocusSession], period: &Period, status: SessionStatus) -> usize {
    sessions
        .iter()
        .filter(|s| s.status == status && period.contains(s.started_at))
        .count()
}

fn in_range_tasks_completed(tasks: &[Task], period: &Period) -> usize {
    tasks
        .iter()
        .filter(|t| t.is_completed())
        .filter(|t| t.completed_at.is_some_and(|at| period.contains(at)))
        .count()
}

/// Compute the dashboard figures for `period`.
///
/// `sessions` and `tasks` may span any time range; figures are filtered
/// to the window internally. The streak always walks back from `today`,
/// regardless of the window. Deltas compare against the window of the
/// same length immediately before `period`.
#[must_use]
pub fn aggregate(
    sessions: &[FocusSession],
    tasks: &[Task],
    period: &Period,
    today: NaiveDate,
) -> PeriodMetrics {
    let focus_minutes = in_range_completed_minutes(sessions, period);
    let tasks_completed = in_range_tasks_completed(tasks, period);

    let previous = period.previous();
    let previous_minutes = in_range_completed_minutes(sessions, &previous);
    let previous_tasks = in_range_tasks_completed(tasks, &previous);

    PeriodMetrics {
        focus_minutes,
        sessions_completed: in_range_by_status(sessions, period, SessionStatus::Completed),
        sessions_interrupted: in_range_by_status(sessions, period, SessionStatus::Interrupted),
        tasks_completed,
        streak_days: streak_days(sessions, today),
        productivity_score: productivity_score(focus_minutes, tasks_completed),
        focus_delta: percent_delta(f64::from(focus_minutes), f64::from(previous_minutes)),
        tasks_delta: percent_delta(tasks_completed as f64, previous_tasks as f64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::{Priority, TaskStatus};
    use chrono::{DateTime, TimeZone, Utc};

    fn completed_session(started: DateTime<Utc>, minutes: u32) -> FocusSession {
        let mut session = FocusSession::new(minutes, 5, None, started);
        session.complete(started + Duration::minutes(i64::from(minutes)));
        session
    }

    fn interrupted_session(started: DateTime<Utc>) -> FocusSession {
        let mut session = FocusSession::new(25, 5, None, started);
        session.interrupt(started + Duration::minutes(10));
        session
    }

    fn completed_task(completed_at: DateTime<Utc>) -> Task {
        Task {
            id: "t".to_string(),
            title: "done".to_string(),
            priority: Priority::Medium,
            status: TaskStatus::Completed,
            completed_at: Some(completed_at),
            estimated_minutes: None,
        }
    }

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_focus_minutes_counts_only_completed_in_range() {
        let period = Period::today(at(15, 12));
        let sessions = vec![
            completed_session(at(15, 9), 25),
            completed_session(at(15, 10), 45),
            interrupted_session(at(15, 11)),
            completed_session(at(14, 9), 60), // previous day
        ];

        let metrics = aggregate(&sessions, &[], &period, at(15, 12).date_naive());
        assert_eq!(metrics.focus_minutes, 70);
        assert_eq!(metrics.sessions_completed, 2);
        assert_eq!(metrics.sessions_interrupted, 1);
    }

    #[test]
    fn test_tasks_completed_requires_marker_in_range() {
        let period = Period::today(at(15, 12));
        let tasks = vec![
            completed_task(at(15, 10)),
            completed_task(at(14, 10)), // outside
            Task {
                id: "open".to_string(),
                title: "open".to_string(),
                priority: Priority::Low,
                status: TaskStatus::Pending,
                completed_at: None,
                estimated_minutes: None,
            },
        ];

        let metrics = aggregate(&[], &tasks, &period, at(15, 12).date_naive());
        assert_eq!(metrics.tasks_completed, 1);
    }

    #[test]
    fn test_streak_three_days_then_gap() {
        // Completed on D, D-1, D-2 but not D-3
        let sessions = vec![
            completed_session(at(15, 9), 25),
            completed_session(at(14, 9), 25),
            completed_session(at(13, 9), 25),
            completed_session(at(11, 9), 25),
        ];

        assert_eq!(streak_days(&sessions, at(15, 9).date_naive()), 3);
    }

    #[test]
    fn test_streak_breaks_without_completion_today() {
        let sessions = vec![
            completed_session(at(14, 9), 25),
            completed_session(at(13, 9), 25),
        ];

        assert_eq!(streak_days(&sessions, at(15, 9).date_naive()), 0);
    }

    #[test]
    fn test_streak_ignores_interrupted_sessions() {
        let sessions = vec![interrupted_session(at(15, 9))];
        assert_eq!(streak_days(&sessions, at(15, 9).date_naive()), 0);
    }

    #[test]
    fn test_delta_guards_zero_baseline() {
        assert_eq!(percent_delta(50.0, 0.0), None);
        assert_eq!(percent_delta(0.0, 0.0), None);

        let delta = percent_delta(75.0, 50.0).unwrap();
        assert!((delta - 50.0).abs() < f64::EPSILON);

        let delta = percent_delta(25.0, 50.0).unwrap();
        assert!((delta + 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_deltas_against_previous_window() {
        let period = Period::today(at(15, 12));
        let sessions = vec![
            completed_session(at(15, 9), 50),
            completed_session(at(14, 9), 25), // previous window
        ];

        let metrics = aggregate(&sessions, &[], &period, at(15, 12).date_naive());
        let delta = metrics.focus_delta.unwrap();
        assert!((delta - 100.0).abs() < f64::EPSILON);
        // No tasks in either window, so no baseline
        assert!(metrics.tasks_delta.is_none());
    }

    #[test]
    fn test_productivity_score_formula() {
        // 2h focus = 50 points
        assert_eq!(productivity_score(120, 0), 50);
        // Each task is 10 points
        assert_eq!(productivity_score(0, 3), 30);
        // Capped at 100
        assert_eq!(productivity_score(240, 5), 100);
        assert_eq!(productivity_score(0, 0), 0);
        // 25 min ~= 10.4 -> rounds to 10
        assert_eq!(productivity_score(25, 0), 10);
    }
}
