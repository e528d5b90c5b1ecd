use chrono::NaiveDate;
use colored::Colorize;

use crate::core::format_minutes_short;
use crate::metrics::{FocusStats, PeriodMetrics};
use crate::tasks::{Priority, Task};
use crate::timer::{FocusSession, SessionStatus};

fn status_icon(status: SessionStatus) -> colored::ColoredString {
    match status {
        SessionStatus::InProgress => "[>]".yellow(),
        SessionStatus::Completed => "[x]".green(),
        SessionStatus::Interrupted => "[-]".red(),
    }
}

fn delta_label(delta: Option<f64>) -> String {
    match delta {
        None => "N/A".dimmed().to_string(),
        Some(d) if d >= 0.0 => format!("+{d:.0}%").green().to_string(),
        Some(d) => format!("{d:.0}%").red().to_string(),
    }
}

/// Format a list of sessions as a pretty table
pub fn format_sessions_pretty(sessions: &[FocusSession], title: &str) -> String {
    if sessions.is_empty() {
        return format!("{} (0 sessions)\n  No sessions", title);
    }

    let mut output = format!("{} ({} sessions)\n", title, sessions.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for session in sessions {
        let mut line = format!(
            "{} {}  {}",
            status_icon(session.status),
            session.started_at.format("%Y-%m-%d %H:%M"),
            format_minutes_short(i64::from(session.duration_minutes)).bold()
        );

        if let Some(task_id) = &session.task_id {
            line.push_str(&format!("  task {}", task_id.dimmed()));
        }

        if session.pause_count > 0 {
            line.push_str(&format!("  {}", format!("{} pauses", session.pause_count).dimmed()));
        }

        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Format a single session as pretty output
pub fn format_session_pretty(session: &FocusSession) -> String {
    let mut output = format!(
        "{} {} session\n",
        status_icon(session.status),
        format_minutes_short(i64::from(session.duration_minutes)).bold()
    );

    if let Some(id) = &session.id {
        output.push_str(&format!("  {}: {}\n", "ID".dimmed(), id));
    }
    output.push_str(&format!("  {}: {}\n", "Status".dimmed(), session.status));
    output.push_str(&format!(
        "  {}: {}\n",
        "Started".dimmed(),
        session.started_at.format("%Y-%m-%d %H:%M")
    ));

    if let Some(ended) = session.ended_at {
        output.push_str(&format!(
            "  {}: {}\n",
            "Ended".dimmed(),
            ended.format("%Y-%m-%d %H:%M")
        ));
    }

    if session.break_minutes > 0 {
        output.push_str(&format!(
            "  {}: {}\n",
            "Break".dimmed(),
            format_minutes_short(i64::from(session.break_minutes))
        ));
    }

    if let Some(task_id) = &session.task_id {
        output.push_str(&format!("  {}: {}\n", "Task".dimmed(), task_id));
    }

    if session.pause_count > 0 {
        output.push_str(&format!("  {}: {}\n", "Pauses".dimmed(), session.pause_count));
    }

    if let Some(notes) = &session.notes {
        output.push_str(&format!("  {}: {}\n", "Notes".dimmed(), notes));
    }

    output
}

/// Format period metrics as a pretty dashboard block
pub fn format_metrics_pretty(metrics: &PeriodMetrics, title: &str) -> String {
    let mut output = format!("{}\n", title.bold());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    output.push_str(&format!(
        "  {}: {} ({})\n",
        "Focus time".dimmed(),
        format_minutes_short(i64::from(metrics.focus_minutes)).bold(),
        delta_label(metrics.focus_delta)
    ));
    output.push_str(&format!(
        "  {}: {} completed, {} interrupted\n",
        "Sessions".dimmed(),
        metrics.sessions_completed,
        metrics.sessions_interrupted
    ));
    output.push_str(&format!(
        "  {}: {} ({})\n",
        "Tasks done".dimmed(),
        metrics.tasks_completed,
        delta_label(metrics.tasks_delta)
    ));
    output.push_str(&format!(
        "  {}: {} day(s)\n",
        "Streak".dimmed(),
        metrics.streak_days
    ));
    output.push_str(&format!(
        "  {}: {}/100\n",
        "Score".dimmed(),
        metrics.productivity_score.to_string().bold()
    ));

    output
}

/// Format lifetime stats with a daily bar chart
pub fn format_stats_pretty(stats: &FocusStats, daily: &[(NaiveDate, u32)]) -> String {
    let mut output = format!("{}\n", "Focus statistics".bold());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    output.push_str(&format!(
        "  {}: {} ({} completed, {} interrupted)\n",
        "Sessions".dimmed(),
        stats.total_sessions,
        stats.completed_sessions,
        stats.interrupted_sessions
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        "Total focus".dimmed(),
        format_minutes_short(i64::from(stats.total_focus_minutes)).bold()
    ));
    output.push_str(&format!(
        "  {}: {:.0}%\n",
        "Completion rate".dimmed(),
        stats.completion_rate * 100.0
    ));
    output.push_str(&format!(
        "  {}: {:.0}m\n",
        "Avg session".dimmed(),
        stats.avg_session_minutes
    ));
    output.push_str(&format!(
        "  {}: {} day(s) (best {})\n",
        "Streak".dimmed(),
        stats.current_streak,
        stats.best_streak
    ));

    if !daily.is_empty() {
        output.push('\n');
        let max = daily.iter().map(|(_, m)| *m).max().unwrap_or(0).max(1);
        for (date, minutes) in daily {
            let width = (u64::from(*minutes) * 30 / u64::from(max)) as usize;
            output.push_str(&format!(
                "  {}  {:<30}  {}\n",
                date.format("%m-%d"),
                "█".repeat(width).cyan(),
                format_minutes_short(i64::from(*minutes)).dimmed()
            ));
        }
    }

    output
}

/// Format a list of tasks as a pretty table
pub fn format_tasks_pretty(tasks: &[Task], title: &str) -> String {
    if tasks.is_empty() {
        return format!("{} (0 tasks)\n  No tasks", title);
    }

    let mut output = format!("{} ({} tasks)\n", title, tasks.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for task in tasks {
        let icon = if task.is_completed() {
            "[x]".green()
        } else {
            "[ ]".white()
        };

        let priority = match task.priority {
            Priority::High => "high".red(),
            Priority::Medium => "medium".yellow(),
            Priority::Low => "low".dimmed(),
        };

        let mut line = format!("{} {} {}  {}", icon, task.id.dimmed(), task.title.bold(), priority);

        if let Some(estimate) = task.estimated_minutes {
            line.push_str(&format!("  ~{}", format_minutes_short(i64::from(estimate)).dimmed()));
        }

        output.push_str(&line);
        output.push('\n');
    }

    let high_impact = tasks
        .iter()
        .filter(|t| t.is_pending() && t.is_high_impact())
        .count();
    if high_impact > 0 {
        output.push_str(&format!(
            "  {} high-impact task(s) open\n",
            high_impact.to_string().red().bold()
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_empty_sessions() {
        colored::control::set_override(false);
        let output = format_sessions_pretty(&[], "Recent");
        assert!(output.contains("No sessions"));
    }

    #[test]
    fn test_session_list_shows_duration() {
        colored::control::set_override(false);
        let started = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
        let sessions = vec![FocusSession::new(25, 5, None, started)];

        let output = format_sessions_pretty(&sessions, "Recent");
        assert!(output.contains("25m"));
        assert!(output.contains("2025-06-01 09:00"));
    }

    #[test]
    fn test_metrics_shows_na_for_missing_delta() {
        colored::control::set_override(false);
        let metrics = PeriodMetrics {
            focus_minutes: 50,
            sessions_completed: 2,
            sessions_interrupted: 0,
            tasks_completed: 0,
            streak_days: 1,
            productivity_score: 21,
            focus_delta: None,
            tasks_delta: None,
        };

        let output = format_metrics_pretty(&metrics, "Today");
        assert!(output.contains("N/A"));
        assert!(output.contains("21/100"));
    }

    #[test]
    fn test_tasks_list_flags_high_impact() {
        colored::control::set_override(false);
        let tasks = crate::tasks::sample_tasks();

        let output = format_tasks_pretty(&tasks, "Open tasks");
        assert!(output.contains("2 high-impact"));
    }

    #[test]
    fn test_stats_chart_rows() {
        colored::control::set_override(false);
        let stats = FocusStats::calculate(&[], chrono::NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
        let daily = vec![
            (chrono::NaiveDate::from_ymd_opt(2025, 6, 14).unwrap(), 0),
            (chrono::NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(), 50),
        ];

        let output = format_stats_pretty(&stats, &daily);
        assert!(output.contains("06-14"));
        assert!(output.contains("06-15"));
    }
}
