// Rust guideline compliant 2026-10-18

//! Implementation of the `petlar show` command.

use crate::OutputFormatter;
use anyhow::Result;
use petlar_app::AppContext;

/// Shows one reservation, composed with its host and pets.
///
/// # Errors
///
/// Returns an error if the reservation does not exist or a record file
/// cannot be loaded.
pub fn execute(context: &AppContext, id: &str, formatter: &dyn OutputFormatter) -> Result<()> {
    let catalog = context.load_catalog()?;
    let view = catalog.view(id)?;
    println!("{}", formatter.format_reservation(&view));
    Ok(())
}
