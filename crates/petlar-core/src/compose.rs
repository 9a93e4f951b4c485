// Rust guideline compliant 2026-10-18

//! Composition of backend records into display-ready reservations.

use crate::days::calculate_days;
use crate::models::{Host, HostSummary, Pet, Reservation, ReservationView};

/// Name shown when the host record or its user is unavailable.
pub const UNKNOWN_HOST_NAME: &str = "Anfitrião";

/// Location shown when the host user has no city or state.
pub const UNKNOWN_LOCATION: &str = "Local não informado";

/// Builds the host summary shown with a reservation.
///
/// # Arguments
///
/// * `host_id` - Host identifier from the reservation
/// * `host` - The host record, if it was found
#[must_use]
pub fn host_summary(host_id: &str, host: Option<&Host>) -> HostSummary {
    let user = host.and_then(|h| h.user.as_ref());

    let name = user
        .map(|u| u.name.trim())
        .filter(|name| !name.is_empty())
        .unwrap_or(UNKNOWN_HOST_NAME)
        .to_string();

    let parts: Vec<&str> = user
        .map(|u| [u.city.as_deref(), u.state.as_deref()])
        .into_iter()
        .flatten()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();
    let location = if parts.is_empty() {
        UNKNOWN_LOCATION.to_string()
    } else {
        parts.join(", ")
    };

    let avatar = user
        .and_then(|u| u.avatar.clone())
        .or_else(|| host.and_then(|h| h.photos.first().cloned()));

    HostSummary {
        id: host_id.to_string(),
        name,
        location,
        avatar,
    }
}

/// Composes a display-ready reservation.
///
/// Pets are resolved from `pets` in the order of `reservation.pet_ids`;
/// ids with no matching pet are logged and skipped. When the backend sent
/// no total, it is derived as `price_per_day * days * pet_count` from the
/// host price (zero if the host or its price is unknown).
///
/// # Arguments
///
/// * `reservation` - The backend reservation
/// * `host` - The booked host, if it was found
/// * `pets` - Candidate pets to resolve `pet_ids` against
#[must_use]
pub fn compose_view(reservation: &Reservation, host: Option<&Host>, pets: &[Pet]) -> ReservationView {
    let days = calculate_days(&reservation.start_date, &reservation.end_date);

    let resolved: Vec<Pet> = reservation
        .pet_ids
        .iter()
        .filter_map(|pet_id| {
            let pet = pets.iter().find(|pet| pet.id == *pet_id);
            if pet.is_none() {
                tracing::warn!(
                    reservation = %reservation.id,
                    pet = %pet_id,
                    "Pet referenced by reservation not found"
                );
            }
            pet.cloned()
        })
        .collect();

    if host.is_none() {
        tracing::warn!(
            reservation = %reservation.id,
            host = %reservation.host_id,
            "Host referenced by reservation not found"
        );
    }

    let total_price = reservation.total_price.unwrap_or_else(|| {
        let price_per_day = host.and_then(|h| h.price_per_day).unwrap_or(0.0);
        total_price(price_per_day, days, reservation.pet_ids.len() as u32)
    });

    ReservationView {
        id: reservation.id.clone(),
        start_date: reservation.start_date.clone(),
        end_date: reservation.end_date.clone(),
        days,
        status: reservation.status,
        total_price,
        host: host_summary(&reservation.host_id, host),
        pets: resolved,
    }
}

/// Computes the total price of a stay.
#[must_use]
pub fn total_price(price_per_day: f64, days: u32, pet_count: u32) -> f64 {
    price_per_day * f64::from(days) * f64::from(pet_count)
}
