//! Configuration management for focal.
//!
//! This module handles loading and saving configuration from `~/.focal/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, FocusConfig, GeneralConfig, GoalsConfig};
