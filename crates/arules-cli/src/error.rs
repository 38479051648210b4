//! Error types for arules-cli

use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Result type alias for CLI operations
pub(crate) type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Not a file (e.g., directory)
    #[error("Not a file: {0}")]
    NotAFile(PathBuf),

    /// Argument accepted by the parser but unusable
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Mining failed
    #[error("Mining error: {0}")]
    Mining(#[from] arules::MiningError),

    /// JSON rendering failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Get exit code for this error
    pub(crate) fn exit_code(&self) -> ExitCode {
        match self {
            Self::FileNotFound(_) | Self::NotAFile(_) => ExitCode::from(3),
            Self::InvalidArgument(_) => ExitCode::from(2),
            Self::Mining(arules::MiningError::Csv { .. } | arules::MiningError::Config(_)) => {
                ExitCode::from(4)
            }
            Self::Mining(arules::MiningError::Io(_)) => ExitCode::from(7),
            Self::Mining(_) => ExitCode::from(1),
            Self::Json(_) => ExitCode::from(5),
        }
    }
}
