// Rust guideline compliant 2026-10-18

//! Implementation of the `petlar summary` command.

use crate::OutputFormatter;
use anyhow::Result;
use petlar_app::{status_counts, AppContext};

/// Prints the number of reservations in each status.
///
/// # Errors
///
/// Returns an error if the reservation file cannot be loaded.
pub fn execute(context: &AppContext, formatter: &dyn OutputFormatter) -> Result<()> {
    let catalog = context.load_catalog()?;
    let counts = status_counts(catalog.reservations());
    println!("{}", formatter.format_summary(&counts));
    Ok(())
}
