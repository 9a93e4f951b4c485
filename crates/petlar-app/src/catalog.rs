// Rust guideline compliant 2026-10-18

//! In-memory catalog of backend records.

use crate::error::Result;
use petlar_core::{compose_view, Error, Host, Pet, Reservation, ReservationView};

/// Reservations, pets and hosts fetched from the backend.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    reservations: Vec<Reservation>,
    pets: Vec<Pet>,
    hosts: Vec<Host>,
}

impl Catalog {
    /// Creates a catalog from already validated records.
    #[must_use]
    pub fn new(reservations: Vec<Reservation>, pets: Vec<Pet>, hosts: Vec<Host>) -> Self {
        Self {
            reservations,
            pets,
            hosts,
        }
    }

    /// Returns every reservation.
    #[must_use]
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    /// Returns every pet.
    #[must_use]
    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    /// Looks up a host by id.
    #[must_use]
    pub fn host(&self, id: &str) -> Option<&Host> {
        self.hosts.iter().find(|host| host.id == id)
    }

    /// Looks up a pet by id.
    #[must_use]
    pub fn pet(&self, id: &str) -> Option<&Pet> {
        self.pets.iter().find(|pet| pet.id == id)
    }

    /// Returns the pets owned by a tutor.
    pub fn pets_of<'a>(&'a self, tutor_id: &'a str) -> impl Iterator<Item = &'a Pet> + 'a {
        self.pets.iter().filter(move |pet| pet.tutor_id == tutor_id)
    }

    /// Looks up a reservation by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no reservation has the id.
    pub fn reservation(&self, id: &str) -> Result<&Reservation> {
        self.reservations
            .iter()
            .find(|reservation| reservation.id == id)
            .ok_or_else(|| Error::NotFound(format!("reservation {id}")).into())
    }

    /// Composes the display form of a reservation.
    ///
    /// Only pets owned by the reservation's tutor are resolved.
    #[must_use]
    pub fn compose(&self, reservation: &Reservation) -> ReservationView {
        let tutor_pets: Vec<Pet> = self.pets_of(&reservation.tutor_id).cloned().collect();
        compose_view(reservation, self.host(&reservation.host_id), &tutor_pets)
    }

    /// Composes the display form of a reservation by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no reservation has the id.
    pub fn view(&self, id: &str) -> Result<ReservationView> {
        Ok(self.compose(self.reservation(id)?))
    }
}
