// Rust guideline compliant 2026-10-18

//! Implementation of the `petlar quote` command.
//!
//! Builds the reservation-creation payload a tutor would submit, without
//! writing anything.

use crate::OutputFormatter;
use anyhow::Result;
use petlar_app::{prepare_booking, AppContext, BookingRequest};

/// Prepares and prints a reservation-creation payload.
///
/// # Errors
///
/// Returns an error if the record files cannot be loaded or the booking is
/// rejected (unknown host, invalid pets, bad dates).
pub fn execute(
    context: &AppContext,
    request: BookingRequest,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let catalog = context.load_catalog()?;
    let payload = prepare_booking(&catalog, context.config(), &request)?;
    println!("{}", formatter.format_quote(&payload));
    Ok(())
}
