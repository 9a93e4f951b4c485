// Rust guideline compliant 2026-10-18

//! Error handling for PetLar application services.

use petlar_core::Error as CoreError;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for command and envelope responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The requested record was not found.
    NotFound,
    /// A status literal is not one of the reservation statuses.
    InvalidStatus,
    /// A backend record failed to parse or validate.
    InvalidRecord,
    /// Configuration is invalid.
    InvalidConfig,
    /// The data directory does not exist.
    DataDirMissing,
    /// The request included invalid inputs.
    InvalidInput,
    /// IO failure while reading data files.
    IoError,
    /// JSON serialization or parsing failed.
    JsonError,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Data directory is missing.
    #[error("PetLar data directory not found at {path}")]
    DataDirMissing {
        /// Path where the data directory was expected.
        path: PathBuf,
    },

    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::DataDirMissing { .. } => ErrorCode::DataDirMissing,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Core(core) => match core {
                CoreError::NotFound(_) => ErrorCode::NotFound,
                CoreError::InvalidStatus(_) => ErrorCode::InvalidStatus,
                CoreError::InvalidRecord(_) => ErrorCode::InvalidRecord,
                CoreError::InvalidConfig(_) => ErrorCode::InvalidConfig,
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::DataDirMissing { path } => Some(serde_json::json!({
                "path": path,
            })),
            AppError::Core(CoreError::InvalidStatus(value)) => Some(serde_json::json!({
                "value": value,
                "allowed": petlar_core::ReservationStatus::ALL
                    .iter()
                    .map(|status| status.as_str())
                    .collect::<Vec<_>>(),
            })),
            _ => None,
        }
    }
}
