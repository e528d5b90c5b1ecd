//! Output formatting for focal.
//!
//! Every command renders through one of these formatters so the JSON
//! and pretty views never drift apart.

mod json;
mod pretty;

use chrono::NaiveDate;

use crate::cli::args::OutputFormat;
use crate::error::FocalError;
use crate::metrics::{FocusStats, PeriodMetrics};
use crate::tasks::Task;
use crate::timer::FocusSession;

pub use json::*;
pub use pretty::*;

/// Format a session list based on output format.
///
/// # Errors
///
/// Returns `FocalError::Parse` if JSON serialization fails.
pub fn format_sessions(
    sessions: &[FocusSession],
    title: &str,
    format: OutputFormat,
) -> Result<String, FocalError> {
    match format {
        OutputFormat::Pretty => Ok(format_sessions_pretty(sessions, title)),
        OutputFormat::Json => format_sessions_json(sessions, title),
    }
}

/// Format a single session based on output format.
///
/// # Errors
///
/// Returns `FocalError::Parse` if JSON serialization fails.
pub fn format_session(session: &FocusSession, format: OutputFormat) -> Result<String, FocalError> {
    match format {
        OutputFormat::Pretty => Ok(format_session_pretty(session)),
        OutputFormat::Json => format_session_json(session),
    }
}

/// Format period metrics based on output format.
///
/// # Errors
///
/// Returns `FocalError::Parse` if JSON serialization fails.
pub fn format_metrics(
    metrics: &PeriodMetrics,
    title: &str,
    format: OutputFormat,
) -> Result<String, FocalError> {
    match format {
        OutputFormat::Pretty => Ok(format_metrics_pretty(metrics, title)),
        OutputFormat::Json => format_metrics_json(metrics, title),
    }
}

/// Format lifetime stats with a daily chart based on output format.
///
/// # Errors
///
/// Returns `FocalError::Parse` if JSON serialization fails.
pub fn format_stats(
    stats: &FocusStats,
    daily: &[(NaiveDate, u32)],
    format: OutputFormat,
) -> Result<String, FocalError> {
    match format {
        OutputFormat::Pretty => Ok(format_stats_pretty(stats, daily)),
        OutputFormat::Json => format_stats_json(stats, daily),
    }
}

/// Format a task list based on output format.
///
/// # Errors
///
/// Returns `FocalError::Parse` if JSON serialization fails.
pub fn format_tasks(
    tasks: &[Task],
    title: &str,
    format: OutputFormat,
) -> Result<String, FocalError> {
    match format {
        OutputFormat::Pretty => Ok(format_tasks_pretty(tasks, title)),
        OutputFormat::Json => format_tasks_json(tasks, title),
    }
}
