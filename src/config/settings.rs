//! Configuration settings for focal.
//!
//! Settings are loaded from `~/.focal/config.yaml`.

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::FocalError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Focus timer settings.
    pub focus: FocusConfig,
    /// Goal settings.
    pub goals: GoalsConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// Focus timer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusConfig {
    /// Default session duration in minutes.
    #[serde(default = "default_session_duration")]
    pub session_minutes: u32,
    /// Default break duration in minutes. Zero disables breaks.
    #[serde(default = "default_break_duration")]
    pub break_minutes: u32,
    /// Duration presets offered when picking a session length.
    #[serde(default = "default_presets")]
    pub presets: Vec<u32>,
}

/// Goal settings used by the stats dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalsConfig {
    /// Weekly focus time goal in minutes.
    #[serde(default = "default_weekly_goal")]
    pub weekly_focus_minutes: u32,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_session_duration() -> u32 {
    25
}

const fn default_break_duration() -> u32 {
    5
}

fn default_presets() -> Vec<u32> {
    vec![15, 25, 45, 60]
}

const fn default_weekly_goal() -> u32 {
    600
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            session_minutes: default_session_duration(),
            break_minutes: default_break_duration(),
            presets: default_presets(),
        }
    }
}

impl Default for GoalsConfig {
    fn default() -> Self {
        Self {
            weekly_focus_minutes: default_weekly_goal(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, FocalError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, FocalError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            FocalError::Config(format!("Failed to read config file {}: {e}", path.display()))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            FocalError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save(&self) -> Result<(), FocalError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        self.save_to_path(&paths.config_file)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), FocalError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| FocalError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            FocalError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.focus.session_minutes, 25);
        assert_eq!(config.focus.break_minutes, 5);
        assert_eq!(config.focus.presets, vec![15, 25, 45, 60]);
        assert_eq!(config.goals.weekly_focus_minutes, 600);
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.focus.session_minutes, 25);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");

        let mut config = Config::default();
        config.focus.session_minutes = 45;
        config.goals.weekly_focus_minutes = 900;
        config.save_to_path(&path).unwrap();

        let loaded = Config::load_from_path(&path).unwrap();
        assert_eq!(loaded.focus.session_minutes, 45);
        assert_eq!(loaded.goals.weekly_focus_minutes, 900);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        std::fs::write(&path, "focus:\n  session_minutes: 50\n").unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.focus.session_minutes, 50);
        assert_eq!(config.focus.break_minutes, 5);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        std::fs::write(&path, "focus: [not a map").unwrap();

        assert!(Config::load_from_path(&path).is_err());
    }
}
