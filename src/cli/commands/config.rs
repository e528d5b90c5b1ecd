//! Config command implementation.

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::FocalError;

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the config file cannot be read, written, or
/// serialized.
pub fn config(cmd: ConfigCommands, format: OutputFormat) -> Result<String, FocalError> {
    match cmd {
        ConfigCommands::Show => {
            let config = Config::load()?;
            match format {
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&config)?),
                OutputFormat::Pretty => Ok(serde_yaml::to_string(&config)?),
            }
        }

        ConfigCommands::Init => {
            let config = Config::default();
            config.save()?;
            let paths = Paths::new()?;
            Ok(format!("Wrote {}", paths.config_file.display()))
        }
    }
}
