// Rust guideline compliant 2026-10-18

//! PetLar Core Library
//!
//! This crate provides the reservation domain layer of the PetLar
//! pet-sitting marketplace:
//! - Data models (Reservation, Pet, Host, User) and their boundary validation
//! - Status labels and badge colors
//! - pt-BR date and currency formatting
//! - Billable day counting
//! - Composition of backend records into display-ready reservations
//! - Record file loading and configuration

pub mod compose;
pub mod config;
pub mod days;
pub mod error;
pub mod format;
pub mod models;
pub mod records;
pub mod status;

pub use compose::{compose_view, host_summary, total_price};
pub use config::{Config, OutputFormat};
pub use days::calculate_days;
pub use error::{Error, Result};
pub use format::{format_currency, format_date, parse_calendar_date};
pub use models::{
    parse_record, FilterStatus, Host, HostSummary, NewReservation, Pet, Record, Reservation,
    ReservationStatus, ReservationView, User, UserRole,
};
pub use records::RecordFile;
pub use status::{status_colors, status_label, StatusColors};
