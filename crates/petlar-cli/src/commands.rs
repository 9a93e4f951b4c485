// Rust guideline compliant 2026-10-18

//! Command implementations for the PetLar CLI.

pub mod helpers;
pub mod list;
pub mod quote;
pub mod show;
pub mod statuses;
pub mod summary;
