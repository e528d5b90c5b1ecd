//! JSON output formatting for focal.

use chrono::NaiveDate;
use serde_json::json;

use crate::error::FocalError;
use crate::metrics::{FocusStats, PeriodMetrics};
use crate::tasks::Task;
use crate::timer::FocusSession;

/// Format sessions as JSON
///
/// # Errors
///
/// Returns `FocalError::Parse` if JSON serialization fails.
pub fn format_sessions_json(sessions: &[FocusSession], title: &str) -> Result<String, FocalError> {
    let output = json!({
        "list": title,
        "count": sessions.len(),
        "items": sessions
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a single session as JSON
///
/// # Errors
///
/// Returns `FocalError::Parse` if JSON serialization fails.
pub fn format_session_json(session: &FocusSession) -> Result<String, FocalError> {
    Ok(serde_json::to_string_pretty(session)?)
}

/// Format period metrics as JSON
///
/// # Errors
///
/// Returns `FocalError::Parse` if JSON serialization fails.
pub fn format_metrics_json(metrics: &PeriodMetrics, title: &str) -> Result<String, FocalError> {
    let output = json!({
        "period": title,
        "metrics": metrics
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format lifetime stats as JSON
///
/// # Errors
///
/// Returns `FocalError::Parse` if JSON serialization fails.
pub fn format_stats_json(
    stats: &FocusStats,
    daily: &[(NaiveDate, u32)],
) -> Result<String, FocalError> {
    let daily: Vec<_> = daily
        .iter()
        .map(|(date, minutes)| json!({ "date": date, "focus_minutes": minutes }))
        .collect();
    let output = json!({
        "stats": stats,
        "daily": daily
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format tasks as JSON
///
/// # Errors
///
/// Returns `FocalError::Parse` if JSON serialization fails.
pub fn format_tasks_json(tasks: &[Task], title: &str) -> Result<String, FocalError> {
    let output = json!({
        "list": title,
        "count": tasks.len(),
        "items": tasks
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_sessions_json_shape() {
        let started = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
        let sessions = vec![FocusSession::new(25, 5, None, started)];

        let output = format_sessions_json(&sessions, "Recent").unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["list"], "Recent");
        assert_eq!(value["count"], 1);
        assert_eq!(value["items"][0]["duration_minutes"], 25);
        assert_eq!(value["items"][0]["status"], "in_progress");
    }

    #[test]
    fn test_metrics_json_renders_null_delta() {
        let metrics = PeriodMetrics {
            focus_minutes: 50,
            sessions_completed: 2,
            sessions_interrupted: 0,
            tasks_completed: 1,
            streak_days: 1,
            productivity_score: 31,
            focus_delta: None,
            tasks_delta: Some(100.0),
        };

        let output = format_metrics_json(&metrics, "today").unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert!(value["metrics"]["focus_delta"].is_null());
        assert_eq!(value["metrics"]["tasks_delta"], 100.0);
    }
}
