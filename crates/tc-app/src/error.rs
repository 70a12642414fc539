//! Error types for the tc-app layer.

use std::path::PathBuf;
use tc_api::ApiError;
use tc_core::TcError;

/// Application error type shared by the CLI and GUI front ends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    ConfigParse(String),

    #[error("Client error: {0}")]
    Api(#[from] ApiError),

    /// Submission ended with an error shown on the form.
    #[error("{0}")]
    Calculation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for tc-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<TcError> for AppError {
    fn from(err: TcError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}
