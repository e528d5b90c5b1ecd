//! Start command implementation.
//!
//! Builds the timer from the parsed arguments and configuration, guards
//! against a session already running, and hands off to the interactive
//! countdown. Persistence failures never stop the countdown; they come
//! back as warnings appended to the final output.

use colored::Colorize;
use serde_json::json;

use crate::cli::args::{OutputFormat, StartArgs};
use crate::config::Config;
use crate::core::{format_minutes_short, parse_duration, SystemClock};
use crate::error::FocalError;
use crate::store::{SessionStore, TaskStore};
use crate::timer::{FocusTimer, SessionRecorder, SessionStatus, TimerEvent};
use crate::tui;

fn to_minutes(input: &str) -> Result<u32, FocalError> {
    let duration = parse_duration(input).ok_or_else(|| {
        FocalError::InvalidConfiguration(format!("Unrecognized duration '{input}'"))
    })?;

    u32::try_from(duration.num_minutes())
        .map_err(|_| FocalError::InvalidConfiguration(format!("Duration '{input}' is too long")))
}

/// Execute the start command.
///
/// # Errors
///
/// Returns an error if a session is already active, the arguments are
/// invalid, the linked task does not exist, or the terminal cannot be
/// set up for the countdown.
pub fn start(
    session_store: &dyn SessionStore,
    task_store: &dyn TaskStore,
    config: &Config,
    args: StartArgs,
    format: OutputFormat,
) -> Result<String, FocalError> {
    if let Some(active) = session_store.active()? {
        return Err(FocalError::InvalidConfiguration(format!(
            "A focus session is already in progress (started {}). Finish or cancel it first.",
            active.started_at.format("%H:%M")
        )));
    }

    let duration_minutes = match args.duration.as_deref() {
        Some(d) => to_minutes(d)?,
        None => config.focus.session_minutes,
    };
    let break_minutes = match args.break_duration.as_deref() {
        Some(b) if matches!(b.trim(), "0" | "0m" | "0s") => 0,
        Some(b) => to_minutes(b)?,
        None => config.focus.break_minutes,
    };

    // Resolve the task before the countdown begins so a typo fails fast.
    let task_title = match args.task.as_deref() {
        Some(id) => {
            let task = task_store
                .get(id)?
                .ok_or_else(|| FocalError::NotFound(format!("task {id}")))?;
            Some(task.title)
        }
        None => None,
    };

    let mut timer = FocusTimer::new(SystemClock);
    timer.start(duration_minutes, break_minutes, args.task.clone())?;
    timer.set_notes(args.notes.clone());

    let mut recorder = SessionRecorder::new(session_store);
    let mut warnings = Vec::new();

    let started = timer
        .active_session()
        .cloned()
        .map(TimerEvent::SessionStarted)
        .ok_or_else(|| FocalError::invalid_state("record", timer.phase()))?;
    if let Err(e) = recorder.record(&started) {
        warnings.push(format!("session not recorded: {e}"));
    }

    let mut outcome = tui::run(&mut timer, &mut recorder)?;
    warnings.append(&mut outcome.warnings);

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "session": outcome.session,
            "warnings": warnings,
        }))?),
        OutputFormat::Pretty => {
            let mut lines = Vec::new();

            match &outcome.session {
                Some(session) if session.status == SessionStatus::Completed => {
                    lines.push(
                        format!(
                            "Focus session complete! {} of focused work.",
                            format_minutes_short(i64::from(session.duration_minutes))
                        )
                        .green()
                        .to_string(),
                    );
                }
                Some(session) => {
                    lines.push(
                        format!(
                            "Session cancelled after {} pause(s).",
                            session.pause_count
                        )
                        .yellow()
                        .to_string(),
                    );
                }
                None => lines.push("No session was run.".dimmed().to_string()),
            }

            if let Some(title) = task_title {
                lines.push(format!("   Task: {title}"));
            }

            for warning in &warnings {
                lines.push(format!("warning: {warning}").yellow().to_string());
            }

            Ok(lines.join("\n"))
        }
    }
}
