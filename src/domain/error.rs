use std::io;

use thiserror::Error;

/// Library-wide error type for claude-status operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// The invoking user's home directory could not be determined.
    #[error("Could not determine the home directory")]
    HomeDirectoryUnavailable,

    /// The host operating system is not supported.
    #[error("This tool is designed for macOS only (detected '{platform}')")]
    UnsupportedPlatform { platform: String },

    /// External command could not be spawned or exited unsuccessfully.
    #[error("Command '{command}' failed: {details}")]
    CommandFailed { command: String, details: String },

    /// A mandatory dependency could not be installed.
    #[error("Failed to install {package}: {details}")]
    DependencyInstall { package: String, details: String },

    /// Interactive prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// Color code does not look like an ANSI escape sequence.
    #[error("Invalid color code '{0}': must start with \\033[ and contain no single quotes")]
    InvalidColor(String),

    /// Status line script template could not be rendered.
    #[error("Failed to render status line template: {0}")]
    Template(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Json(_) | AppError::Template(_) => io::ErrorKind::InvalidData,
            AppError::Configuration(_) | AppError::InvalidColor(_) => io::ErrorKind::InvalidInput,
            AppError::HomeDirectoryUnavailable => io::ErrorKind::NotFound,
            AppError::UnsupportedPlatform { .. } => io::ErrorKind::Unsupported,
            AppError::CommandFailed { .. }
            | AppError::DependencyInstall { .. }
            | AppError::Prompt(_) => io::ErrorKind::Other,
        }
    }
}
