// Rust guideline compliant 2026-10-18

//! PetLar CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod logging;
pub mod output;
pub mod terminal;

pub use logging::init_tracing;
pub use output::{create_formatter, OutputFormatter};
pub use terminal::{badge, should_use_color};
