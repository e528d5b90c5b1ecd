//! Path resolution for focal configuration and data files.
//!
//! All focal data is stored in `~/.focal/`:
//! - `config.yaml` - Main configuration file
//! - `focal.db` - SQLite database for session history and tasks

use std::path::PathBuf;

use crate::error::FocalError;

/// Paths to focal configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.focal/`
    pub root: PathBuf,
    /// Config file: `~/.focal/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.focal/focal.db`
    pub database: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, FocalError> {
        let home = std::env::var("HOME")
            .map_err(|_| FocalError::Config("Could not determine home directory".to_string()))?;

        let root = PathBuf::from(home).join(".focal");

        Ok(Self {
            config_file: root.join("config.yaml"),
            database: root.join("focal.db"),
            root,
        })
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("focal.db"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), FocalError> {
        std::fs::create_dir_all(&self.root).map_err(|e| {
            FocalError::Config(format!(
                "Failed to create directory {}: {e}",
                self.root.display()
            ))
        })
    }
}
