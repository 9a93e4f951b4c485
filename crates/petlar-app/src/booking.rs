// Rust guideline compliant 2026-10-18

//! Preparation of reservation-creation payloads.

use crate::catalog::Catalog;
use crate::error::{AppError, Result};
use petlar_core::{calculate_days, parse_calendar_date, total_price, Config, NewReservation, ReservationStatus};
use std::collections::HashSet;

/// A tutor's booking request, as entered in the booking form.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRequest {
    /// Identifier of the booking tutor.
    pub tutor_id: String,
    /// Identifier of the host to book.
    pub host_id: String,
    /// First day of the stay.
    pub start_date: String,
    /// Last day of the stay.
    pub end_date: String,
    /// Pets to include.
    pub pet_ids: Vec<String>,
}

/// Validates a booking request and builds the creation payload.
///
/// The payload always starts in `pending`; the total is
/// `price_per_day * days * pet_count`.
///
/// # Errors
///
/// Returns `InvalidInput` if:
/// - The host does not exist or has no price per day
/// - No pets, duplicate pets, or more pets than the configured limit
/// - A pet does not exist or belongs to another tutor
/// - A date does not parse, or the end precedes the start
pub fn prepare_booking(
    catalog: &Catalog,
    config: &Config,
    request: &BookingRequest,
) -> Result<NewReservation> {
    let host = catalog
        .host(&request.host_id)
        .ok_or_else(|| AppError::InvalidInput(format!("Host not found: {}", request.host_id)))?;
    let price_per_day = host.price_per_day.ok_or_else(|| {
        AppError::InvalidInput(format!("Host {} has no price per day", host.id))
    })?;

    let start = parse_calendar_date(&request.start_date).ok_or_else(|| {
        AppError::InvalidInput(format!("Invalid start date: {}", request.start_date))
    })?;
    let end = parse_calendar_date(&request.end_date).ok_or_else(|| {
        AppError::InvalidInput(format!("Invalid end date: {}", request.end_date))
    })?;
    if end < start {
        return Err(AppError::InvalidInput(format!(
            "End date {} is before start date {}",
            request.end_date, request.start_date
        )));
    }

    validate_pets(catalog, config, request)?;

    let pet_count = u32::try_from(request.pet_ids.len())
        .map_err(|_| AppError::InvalidInput("Too many pets".to_string()))?;
    let days = calculate_days(&request.start_date, &request.end_date);

    tracing::info!(
        tutor = %request.tutor_id,
        host = %request.host_id,
        days,
        pet_count,
        "Prepared reservation payload"
    );

    Ok(NewReservation {
        tutor_id: request.tutor_id.clone(),
        host_id: request.host_id.clone(),
        start_date: request.start_date.clone(),
        end_date: request.end_date.clone(),
        status: ReservationStatus::Pending,
        pet_ids: request.pet_ids.clone(),
        price_per_day,
        pet_count,
        days,
        total_price: total_price(price_per_day, days, pet_count),
    })
}

fn validate_pets(catalog: &Catalog, config: &Config, request: &BookingRequest) -> Result<()> {
    if request.pet_ids.is_empty() {
        return Err(AppError::InvalidInput(
            "Select at least one pet".to_string(),
        ));
    }

    let limit = config.max_pets_per_reservation as usize;
    if request.pet_ids.len() > limit {
        return Err(AppError::InvalidInput(format!(
            "At most {} pets per reservation, got {}",
            limit,
            request.pet_ids.len()
        )));
    }

    let mut seen = HashSet::new();
    for pet_id in &request.pet_ids {
        if !seen.insert(pet_id.as_str()) {
            return Err(AppError::InvalidInput(format!("Duplicate pet: {pet_id}")));
        }

        let pet = catalog
            .pet(pet_id)
            .ok_or_else(|| AppError::InvalidInput(format!("Pet not found: {pet_id}")))?;
        if pet.tutor_id != request.tutor_id {
            return Err(AppError::InvalidInput(format!(
                "Pet {} does not belong to tutor {}",
                pet_id, request.tutor_id
            )));
        }
    }

    Ok(())
}
