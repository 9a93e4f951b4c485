// Rust guideline compliant 2026-10-18

//! Display formatting for dates and currency (pt-BR conventions).

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

/// Output pattern of [`format_date`].
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Parses a date string into a point in time.
///
/// Date-only inputs resolve to midnight. RFC 3339 timestamps are converted
/// to UTC so elapsed time between two of them is exact.
#[must_use]
pub fn parse_instant(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    None
}

/// Parses a date string into a calendar date.
///
/// RFC 3339 timestamps keep the date as written in their own offset.
#[must_use]
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt.date());
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

/// Formats a date string as `dd/mm/yyyy`.
///
/// Input that cannot be parsed is returned unchanged and logged as a
/// warning. The output format is itself accepted as input, so formatting
/// is idempotent.
#[must_use]
pub fn format_date(value: &str) -> String {
    match parse_calendar_date(value) {
        Some(date) => date.format(DISPLAY_DATE_FORMAT).to_string(),
        None => {
            tracing::warn!(value, "Could not parse date, displaying it unchanged");
            value.to_string()
        }
    }
}

/// Formats an amount as Brazilian reais, e.g. `R$ 10,00`.
///
/// Rounds half away from zero to whole cents. Amounts that round to zero
/// never carry a minus sign; non-finite amounts format as zero. There is no
/// upper bound: every finite amount prints all of its integer digits.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "R$ 0,00".to_string();
    }

    // Scaling by 100 overflows only where an f64 has no fractional digits left.
    let scaled = amount * 100.0;
    let rounded = if scaled.is_finite() {
        scaled.round() / 100.0
    } else {
        amount
    };

    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.2}", rounded.abs());
    format!("R$ {sign}{}", digits.replacen('.', ",", 1))
}
