// Rust guideline compliant 2026-10-18

//! Billable day count for a reservation date range.

use crate::format::parse_instant;

const DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;

/// Minimum number of billable days for any reservation.
pub const MIN_DAYS: u32 = 1;

/// Counts the whole days between two date strings.
///
/// The absolute elapsed time is rounded up to whole 24-hour days, so the
/// argument order does not matter. The result is never below [`MIN_DAYS`]:
/// a same-day or zero-length stay still bills one day. Unparseable input
/// is logged and yields [`MIN_DAYS`].
///
/// # Examples
///
/// ```
/// use petlar_core::calculate_days;
///
/// assert_eq!(calculate_days("2024-01-01", "2024-01-03"), 2);
/// assert_eq!(calculate_days("2024-01-03", "2024-01-01"), 2);
/// assert_eq!(calculate_days("2024-01-01", "2024-01-01"), 1);
/// ```
#[must_use]
pub fn calculate_days(start: &str, end: &str) -> u32 {
    let (Some(start_at), Some(end_at)) = (parse_instant(start), parse_instant(end)) else {
        tracing::warn!(start, end, "Could not parse reservation dates, counting one day");
        return MIN_DAYS;
    };

    let elapsed = (end_at - start_at).num_milliseconds().abs();
    let days = elapsed.div_euclid(DAY_MILLIS) + i64::from(elapsed.rem_euclid(DAY_MILLIS) != 0);

    u32::try_from(days).unwrap_or(u32::MAX).max(MIN_DAYS)
}
