// Rust guideline compliant 2026-10-18

//! JSON shapes printed by `petlar --json`.
//!
//! Every JSON document carries a top-level `status` of `"ok"` or `"error"`
//! so scripts can branch on one field before reading `result` or `code`.

use crate::error::{AppError, ErrorCode};
use serde::Serialize;

const STATUS_OK: &str = "ok";
const STATUS_ERROR: &str = "error";

/// A command result: `{"status": "ok", "result": ...}`.
#[derive(Debug, Serialize)]
pub struct SuccessEnvelope<T> {
    /// Always `"ok"`.
    pub status: &'static str,
    /// Reservation views, counts, payloads or a single computed value.
    pub result: T,
}

impl<T> SuccessEnvelope<T> {
    /// Wraps a command result.
    #[must_use]
    pub fn new(result: T) -> Self {
        Self {
            status: STATUS_OK,
            result,
        }
    }
}

/// A failed command: `{"status": "error", "code": ..., "message": ...}`.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    /// Always `"error"`.
    pub status: &'static str,
    /// Machine-readable error code, e.g. `not_found`.
    pub code: ErrorCode,
    /// The error's display text.
    pub message: String,
    /// Extra context such as the missing path or the allowed statuses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&AppError> for ErrorEnvelope {
    fn from(error: &AppError) -> Self {
        Self {
            status: STATUS_ERROR,
            code: error.code(),
            message: error.to_string(),
            details: error.details(),
        }
    }
}

impl ErrorEnvelope {
    /// Describes an application error.
    #[must_use]
    pub fn from_error(error: &AppError) -> Self {
        Self::from(error)
    }
}
