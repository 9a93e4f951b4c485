// Rust guideline compliant 2026-10-18

//! Implementation of the `petlar statuses` command.

use crate::OutputFormatter;

/// Prints every reservation status with its label and colors.
pub fn execute(formatter: &dyn OutputFormatter) {
    print!("{}", formatter.format_statuses());
}
