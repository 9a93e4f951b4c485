// Rust guideline compliant 2026-10-18

//! Shared application services for PetLar.
//!
//! This crate provides the application context created at startup, the
//! record catalog, reservation listing and filtering, booking payload
//! preparation, and standardized response envelopes.

pub mod booking;
pub mod catalog;
pub mod context;
pub mod error;
pub mod list;
pub mod response;

pub use booking::{prepare_booking, BookingRequest};
pub use catalog::Catalog;
pub use context::AppContext;
pub use error::{AppError, ErrorCode, Result};
pub use list::{list_reservations, parse_filter_status, status_counts, ListOptions, StatusCount};
pub use response::{ErrorEnvelope, SuccessEnvelope};
