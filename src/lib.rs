//! focal - a focus session timer for the command line
//!
//! Provides Pomodoro-style focus sessions with paired breaks, session
//! history in a local `SQLite` database, optional task linking, and
//! productivity metrics.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod metrics;
pub mod output;
pub mod storage;
pub mod store;
pub mod tasks;
pub mod timer;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::FocalError;
pub use timer::{FocusSession, FocusTimer, Phase, SessionStatus};
