//! Command implementations for focal.
//!
//! This module contains the implementation of all CLI commands.

mod config;
mod start;
mod stats;
mod tasks;

pub use config::config;
pub use start::start;
pub use stats::stats;
pub use tasks::tasks;

use clap::CommandFactory;
use colored::Colorize;
use serde_json::json;

use crate::cli::args::{Cli, OutputFormat};
use crate::error::FocalError;
use crate::output::{format_session_pretty, format_sessions};
use crate::store::SessionStore;

/// Execute status command
///
/// # Errors
///
/// Returns an error if the store read or output formatting fails.
pub fn status(store: &dyn SessionStore, format: OutputFormat) -> Result<String, FocalError> {
    let active = store.active()?;

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({ "active": active }))?),
        OutputFormat::Pretty => Ok(active.map_or_else(
            || "No active focus session".dimmed().to_string(),
            |session| format_session_pretty(&session),
        )),
    }
}

/// Execute history command
///
/// # Errors
///
/// Returns an error if the store read or output formatting fails.
pub fn history(
    store: &dyn SessionStore,
    limit: usize,
    format: OutputFormat,
) -> Result<String, FocalError> {
    let sessions = store.list_recent(limit)?;
    format_sessions(&sessions, "Recent sessions", format)
}

/// Execute completions command
///
/// # Errors
///
/// Returns an error if the completion script is not valid UTF-8.
pub fn completions(shell: clap_complete::Shell) -> Result<String, FocalError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "focal", &mut buf);
    String::from_utf8(buf)
        .map_err(|e| FocalError::Config(format!("Completion script was not UTF-8: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemorySessionStore;
    use crate::timer::FocusSession;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_status_without_active_session() {
        colored::control::set_override(false);
        let store = MemorySessionStore::new();

        let output = status(&store, OutputFormat::Pretty).unwrap();
        assert!(output.contains("No active focus session"));

        let output = status(&store, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(value["active"].is_null());
    }

    #[test]
    fn test_status_with_active_session() {
        colored::control::set_override(false);
        let store = MemorySessionStore::new();
        let started = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
        let mut session = FocusSession::new(25, 5, None, started);
        store.create(&mut session).unwrap();

        let output = status(&store, OutputFormat::Pretty).unwrap();
        assert!(output.contains("in progress"));
    }

    #[test]
    fn test_history_respects_limit() {
        colored::control::set_override(false);
        let store = MemorySessionStore::new();
        for hour in 9..14 {
            let started = Utc.with_ymd_and_hms(2025, 6, 1, hour, 0, 0).unwrap();
            store.create(&mut FocusSession::new(25, 5, None, started)).unwrap();
        }

        let output = history(&store, 2, OutputFormat::Pretty).unwrap();
        assert!(output.contains("2 sessions"));
    }

    #[test]
    fn test_completions_generate() {
        let script = completions(clap_complete::Shell::Bash).unwrap();
        assert!(script.contains("focal"));
    }
}
