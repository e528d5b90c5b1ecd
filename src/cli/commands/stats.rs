//! Stats command implementation.

use colored::Colorize;

use crate::cli::args::{OutputFormat, PeriodArg};
use crate::config::Config;
use crate::core::{format_minutes_short, Clock, SystemClock};
use crate::error::FocalError;
use crate::metrics::{aggregate, daily_minutes, FocusStats, Period};
use crate::output::{format_metrics, format_stats};
use crate::store::{SessionStore, TaskStore};

/// Execute the stats command.
///
/// Without a period, renders the lifetime overview with a daily chart.
/// With a period, renders that window's dashboard figures.
///
/// # Errors
///
/// Returns an error if the store reads or output formatting fail.
pub fn stats(
    session_store: &dyn SessionStore,
    task_store: &dyn TaskStore,
    config: &Config,
    period: Option<PeriodArg>,
    format: OutputFormat,
) -> Result<String, FocalError> {
    let now = SystemClock.now();
    let sessions = session_store.list_recent(usize::MAX)?;
    let tasks = task_store.all_tasks()?;

    match period {
        Some(arg) => {
            let (window, title) = match arg {
                PeriodArg::Today => (Period::today(now), "Today"),
                PeriodArg::Week => (Period::last_days(now, 7), "Last 7 days"),
                PeriodArg::Month => (Period::last_days(now, 30), "Last 30 days"),
            };

            let metrics = aggregate(&sessions, &tasks, &window, now.date_naive());
            let mut output = format_metrics(&metrics, title, format)?;

            // The weekly view also reports progress against the goal.
            if format == OutputFormat::Pretty && arg == PeriodArg::Week {
                let goal = config.goals.weekly_focus_minutes;
                if goal > 0 {
                    let pct = f64::from(metrics.focus_minutes) / f64::from(goal) * 100.0;
                    output.push_str(&format!(
                        "  {}: {} of {} ({pct:.0}%)\n",
                        "Weekly goal".dimmed(),
                        format_minutes_short(i64::from(metrics.focus_minutes)),
                        format_minutes_short(i64::from(goal))
                    ));
                }
            }

            Ok(output)
        }
        None => {
            let lifetime = FocusStats::calculate(&sessions, now.date_naive());
            let daily = daily_minutes(&sessions, 14, now.date_naive());
            format_stats(&lifetime, &daily, format)
        }
    }
}
