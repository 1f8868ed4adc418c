//! Loading and saving the status line configuration document.

use std::path::Path;

use tracing::warn;

use crate::domain::{AppError, StatuslineConfig};
use crate::ports::ReporterPort;
use crate::services::settings_store::{self, ReadOutcome};

/// Load the stored configuration, falling back to defaults when absent or unreadable.
pub fn load_or_default(path: &Path, reporter: &impl ReporterPort) -> StatuslineConfig {
    let reason = match settings_store::read_json(path) {
        ReadOutcome::Absent => return StatuslineConfig::default(),
        ReadOutcome::Found(value) => match serde_json::from_value::<StatuslineConfig>(value) {
            Ok(config) => match config.colors.validate() {
                Ok(()) => return config,
                Err(err) => err.to_string(),
            },
            Err(err) => err.to_string(),
        },
        ReadOutcome::Corrupt(reason) => reason,
    };
    warn!(path = %path.display(), %reason, "ignoring unreadable configuration");
    reporter.warn(&format!("Configuration at {} is unreadable; using defaults", path.display()));
    StatuslineConfig::default()
}

/// Load a configuration the user pointed at explicitly; any problem is fatal.
pub fn load_explicit(path: &Path) -> Result<StatuslineConfig, AppError> {
    let value = match settings_store::read_json(path) {
        ReadOutcome::Found(value) => value,
        ReadOutcome::Absent => {
            return Err(AppError::config_error(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        ReadOutcome::Corrupt(reason) => {
            return Err(AppError::config_error(format!(
                "Invalid configuration file {}: {}",
                path.display(),
                reason
            )));
        }
    };
    let config: StatuslineConfig = serde_json::from_value(value).map_err(|err| {
        AppError::config_error(format!("Invalid configuration file {}: {}", path.display(), err))
    })?;
    config.colors.validate()?;
    Ok(config)
}

/// Persist the configuration, replacing any previous document.
pub fn save(path: &Path, config: &StatuslineConfig) -> Result<(), AppError> {
    settings_store::write_json(path, config)
}
