// Rust guideline compliant 2026-10-18

//! Implementations of the `days`, `format-date` and `format-price` commands.
//!
//! These expose the formatting helpers directly and need no data directory.

use crate::OutputFormatter;
use petlar_core::{calculate_days, format_currency, format_date};
use serde_json::json;

/// Prints the number of billable days between two dates.
pub fn days(start: &str, end: &str, formatter: &dyn OutputFormatter) {
    let days = calculate_days(start, end);
    println!("{}", formatter.format_value("days", json!(days)));
}

/// Prints a date as `dd/mm/yyyy`, or unchanged when it does not parse.
pub fn format_date_value(value: &str, formatter: &dyn OutputFormatter) {
    println!("{}", formatter.format_value("date", json!(format_date(value))));
}

/// Prints an amount as Brazilian currency.
pub fn format_price(amount: f64, formatter: &dyn OutputFormatter) {
    println!(
        "{}",
        formatter.format_value("price", json!(format_currency(amount)))
    );
}
