//! Tasks command implementation.

use colored::Colorize;

use crate::cli::args::{OutputFormat, TaskCommands};
use crate::core::{Clock, SystemClock};
use crate::error::FocalError;
use crate::output::format_tasks;
use crate::store::{SqliteTaskStore, TaskStore};
use crate::tasks::Priority;

/// Writes go straight to the database, so they are refused offline.
fn writable_store(offline: bool) -> Result<SqliteTaskStore, FocalError> {
    if offline {
        return Err(FocalError::Config(
            "tasks cannot be modified in offline mode".to_string(),
        ));
    }
    SqliteTaskStore::open()
}

/// Execute task subcommands.
///
/// # Errors
///
/// Returns an error if the store read/write or output formatting fails.
pub fn tasks(
    store: &dyn TaskStore,
    offline: bool,
    cmd: Option<TaskCommands>,
    format: OutputFormat,
) -> Result<String, FocalError> {
    match cmd.unwrap_or(TaskCommands::List { all: false }) {
        TaskCommands::List { all } => {
            let (tasks, title) = if all {
                (store.all_tasks()?, "All tasks")
            } else {
                (store.pending_tasks()?, "Open tasks")
            };
            format_tasks(&tasks, title, format)
        }

        TaskCommands::Add {
            title,
            priority,
            estimate,
        } => {
            let store = writable_store(offline)?;
            let task = store.add(&title, Priority::parse(&priority), estimate)?;

            match format {
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&task)?),
                OutputFormat::Pretty => Ok(format!(
                    "{} task {} {}",
                    "Added".green(),
                    task.id.dimmed(),
                    task.title.bold()
                )),
            }
        }

        TaskCommands::Done { id } => {
            let store = writable_store(offline)?;
            store.complete(&id, SystemClock.now())?;

            match format {
                OutputFormat::Json => {
                    let task = store
                        .get(&id)?
                        .ok_or_else(|| FocalError::NotFound(format!("task {id}")))?;
                    Ok(serde_json::to_string_pretty(&task)?)
                }
                OutputFormat::Pretty => Ok(format!("{} task {}", "Completed".green(), id.dimmed())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryTaskStore;

    #[test]
    fn test_list_defaults_to_open_tasks() {
        colored::control::set_override(false);
        let store = MemoryTaskStore::with_sample_data();

        let output = tasks(&store, true, None, OutputFormat::Pretty).unwrap();
        assert!(output.contains("Open tasks"));
        assert!(output.contains("Ship the mobile app beta"));
    }

    #[test]
    fn test_offline_rejects_writes() {
        let store = MemoryTaskStore::with_sample_data();
        let cmd = TaskCommands::Add {
            title: "x".to_string(),
            priority: "low".to_string(),
            estimate: None,
        };

        let err = tasks(&store, true, Some(cmd), OutputFormat::Pretty).unwrap_err();
        assert!(err.to_string().contains("offline"));
    }
}
