//! Error types for the CLI

use std::path::PathBuf;

use crate::convert::ConvertError;
use crate::validation::ValidationError;

/// Errors reported by CLI commands
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to read {0}: {1}")]
    FileReadError(PathBuf, String),

    #[error("Failed to write {0}: {1}")]
    FileWriteError(PathBuf, String),

    #[error("Invalid config file {0}: {1}")]
    ConfigError(PathBuf, String),

    #[error("{}", .0.user_message())]
    Conversion(#[from] ConvertError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}
