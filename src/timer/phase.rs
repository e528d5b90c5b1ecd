//! Timer phases.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// The timer's current mode.
///
/// Transitions: `Idle → Running` (start), `Running ⇄ Paused`
/// (pause/resume), `Running → Break → Idle` (countdown reaching zero),
/// and any non-idle phase `→ Idle` via cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// No session in progress.
    Idle,
    /// Work countdown is running.
    Running,
    /// Work countdown is suspended.
    Paused,
    /// Break countdown is running.
    Break,
}

impl Phase {
    /// Check if the countdown should advance on a tick.
    #[must_use]
    pub const fn is_counting(self) -> bool {
        matches!(self, Self::Running | Self::Break)
    }
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Running => f.write_str("running"),
            Self::Paused => f.write_str("paused"),
            Self::Break => f.write_str("break"),
        }
    }
}
