//! Task model.
//!
//! Tasks are external records that sessions may link to by id. The
//! timer never owns task lifecycle; stores expose them read-only to the
//! timer and metrics code.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Priority tier. `High` is the "high-impact" tier used for
/// Pareto-style prioritization on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Parse a priority from user input, defaulting to medium.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "high" | "h" => Self::High,
            "low" | "l" => Self::Low,
            _ => Self::Medium,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

/// Task state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Blocked,
}

/// A unit of work that focus sessions can link to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Opaque identifier.
    pub id: String,
    /// Short description.
    pub title: String,
    /// Priority tier.
    pub priority: Priority,
    /// Current status.
    pub status: TaskStatus,
    /// When the task was completed. Required for range metrics; unset
    /// unless `status == Completed`.
    pub completed_at: Option<DateTime<Utc>>,
    /// Estimated effort in minutes, if known.
    pub estimated_minutes: Option<u32>,
}

impl Task {
    /// Check if the task is still open for linking.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        !matches!(self.status, TaskStatus::Completed)
    }

    /// Check if the task is done.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// Check if the task sits in the highest priority tier.
    #[must_use]
    pub fn is_high_impact(&self) -> bool {
        self.priority == Priority::High
    }
}

/// Built-in sample tasks used to seed the offline store.
#[must_use]
pub fn sample_tasks() -> Vec<Task> {
    vec![
        Task {
            id: "task-001".to_string(),
            title: "Ship the mobile app beta".to_string(),
            priority: Priority::High,
            status: TaskStatus::InProgress,
            completed_at: None,
            estimated_minutes: Some(120),
        },
        Task {
            id: "task-002".to_string(),
            title: "Prepare investor update".to_string(),
            priority: Priority::High,
            status: TaskStatus::Pending,
            completed_at: None,
            estimated_minutes: Some(50),
        },
        Task {
            id: "task-003".to_string(),
            title: "Review onboarding copy".to_string(),
            priority: Priority::Medium,
            status: TaskStatus::Pending,
            completed_at: None,
            estimated_minutes: Some(25),
        },
        Task {
            id: "task-004".to_string(),
            title: "Clear support inbox".to_string(),
            priority: Priority::Low,
            status: TaskStatus::Pending,
            completed_at: None,
            estimated_minutes: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_parse() {
        assert_eq!(Priority::parse("high"), Priority::High);
        assert_eq!(Priority::parse("H"), Priority::High);
        assert_eq!(Priority::parse("low"), Priority::Low);
        assert_eq!(Priority::parse("anything"), Priority::Medium);
    }

    #[test]
    fn test_sample_tasks_are_pending() {
        let tasks = sample_tasks();
        assert!(!tasks.is_empty());
        assert!(tasks.iter().all(Task::is_pending));
    }

    #[test]
    fn test_high_impact() {
        let tasks = sample_tasks();
        assert!(tasks.iter().any(Task::is_high_impact));
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }
}
