// Rust guideline compliant 2026-10-18

//! Error types for the PetLar core library.

use thiserror::Error;

/// Result type alias for PetLar operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for PetLar operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Value is not one of the six reservation statuses.
    #[error("Invalid reservation status: {0}")]
    InvalidStatus(String),

    /// Backend record failed to parse or validate.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Record not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Configuration file or override is invalid.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
