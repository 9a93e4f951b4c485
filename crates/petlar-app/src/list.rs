// Rust guideline compliant 2026-10-18

//! Listing and filtering helpers for reservations.

use crate::catalog::Catalog;
use crate::error::{AppError, Result};
use petlar_core::{parse_calendar_date, FilterStatus, Reservation, ReservationStatus, ReservationView};
use rayon::prelude::*;
use serde::Serialize;
use std::cmp::Ordering;

/// List options for filtering and sorting reservations.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Filter by status.
    pub status: FilterStatus,
    /// Filter by tutor.
    pub tutor_id: Option<String>,
    /// Filter by host.
    pub host_id: Option<String>,
    /// Sort field override.
    pub sort: Option<String>,
}

/// Number of reservations in one status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    /// The status.
    pub status: ReservationStatus,
    /// Its display label.
    pub label: &'static str,
    /// Number of reservations in the status.
    pub count: usize,
}

/// Parses a status filter string.
///
/// Accepts the status literals and `all`, case-insensitively, with `-`
/// allowed in place of `_`.
///
/// # Errors
///
/// Returns an error if the value is not a status or `all`.
pub fn parse_filter_status(value: &str) -> Result<FilterStatus> {
    let normalized = value.trim().to_lowercase().replace('-', "_");
    normalized
        .parse()
        .map_err(|_| AppError::InvalidInput(format!("Invalid status filter: {}", value)))
}

/// Filters, composes and sorts reservations.
///
/// Without a sort field, reservations are ordered by start date, latest
/// first.
#[must_use]
pub fn list_reservations(catalog: &Catalog, options: &ListOptions) -> Vec<ReservationView> {
    let mut views: Vec<ReservationView> = apply_filters(catalog.reservations(), options)
        .into_iter()
        .map(|reservation| catalog.compose(reservation))
        .collect();

    match options.sort.as_deref() {
        Some(field) => sort_views(&mut views, field),
        None => views.sort_by(|a, b| compare_dates(&b.start_date, &a.start_date)),
    }

    views
}

/// Counts reservations per status, in lifecycle order.
#[must_use]
pub fn status_counts(reservations: &[Reservation]) -> Vec<StatusCount> {
    ReservationStatus::ALL
        .iter()
        .map(|status| StatusCount {
            status: *status,
            label: status.label(),
            count: reservations.iter().filter(|r| r.status == *status).count(),
        })
        .collect()
}

fn apply_filters<'a>(reservations: &'a [Reservation], options: &ListOptions) -> Vec<&'a Reservation> {
    const PARALLEL_THRESHOLD: usize = 1_000;

    let predicate = |r: &&Reservation| {
        if !options.status.matches(r.status) {
            return false;
        }

        if let Some(ref tutor_id) = options.tutor_id {
            if r.tutor_id != *tutor_id {
                return false;
            }
        }

        if let Some(ref host_id) = options.host_id {
            if r.host_id != *host_id {
                return false;
            }
        }

        true
    };

    if reservations.len() >= PARALLEL_THRESHOLD {
        reservations.par_iter().filter(predicate).collect()
    } else {
        reservations.iter().filter(predicate).collect()
    }
}

/// Orders date strings chronologically; unparseable dates sort last.
fn compare_dates(a: &str, b: &str) -> Ordering {
    match (parse_calendar_date(a), parse_calendar_date(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

fn sort_views(views: &mut [ReservationView], field: &str) {
    match field.to_lowercase().as_str() {
        "id" => views.sort_by(|a, b| a.id.cmp(&b.id)),
        "start_date" => views.sort_by(|a, b| compare_dates(&a.start_date, &b.start_date)),
        "end_date" => views.sort_by(|a, b| compare_dates(&a.end_date, &b.end_date)),
        "status" => views.sort_by_key(|view| view.status),
        "days" => views.sort_by_key(|view| view.days),
        "total_price" => views.sort_by(|a, b| a.total_price.total_cmp(&b.total_price)),
        "host" => views.sort_by(|a, b| a.host.name.cmp(&b.host.name)),
        _ => views.sort_by(|a, b| compare_dates(&b.start_date, &a.start_date)),
    }
}
