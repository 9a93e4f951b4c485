// Rust guideline compliant 2026-10-18

//! Core data models for PetLar.
//!
//! Backend records use camelCase field names on the wire; status literals
//! are snake_case.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    /// Awaiting the host's answer.
    Pending,
    /// Accepted by the host.
    Confirmed,
    /// Refused by the host.
    Denied,
    /// The stay has started.
    InProgress,
    /// The stay has finished.
    Completed,
    /// Withdrawn before the stay.
    Canceled,
}

impl ReservationStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [ReservationStatus; 6] = [
        ReservationStatus::Pending,
        ReservationStatus::Confirmed,
        ReservationStatus::Denied,
        ReservationStatus::InProgress,
        ReservationStatus::Completed,
        ReservationStatus::Canceled,
    ];

    /// Returns the wire literal for the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Denied => "denied",
            ReservationStatus::InProgress => "in_progress",
            ReservationStatus::Completed => "completed",
            ReservationStatus::Canceled => "canceled",
        }
    }
}

/// Client-side status filter: a concrete status or every status.
///
/// Serialized as the status literal or `"all"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FilterStatus {
    /// Matches every reservation.
    #[default]
    All,
    /// Matches reservations in exactly this status.
    Status(ReservationStatus),
}

impl FilterStatus {
    /// Returns true if a reservation in `status` passes the filter.
    #[must_use]
    pub fn matches(&self, status: ReservationStatus) -> bool {
        match self {
            FilterStatus::All => true,
            FilterStatus::Status(expected) => *expected == status,
        }
    }

    /// Returns the wire literal for the filter.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterStatus::All => "all",
            FilterStatus::Status(status) => status.as_str(),
        }
    }
}

impl From<ReservationStatus> for FilterStatus {
    fn from(status: ReservationStatus) -> Self {
        FilterStatus::Status(status)
    }
}

impl From<FilterStatus> for String {
    fn from(filter: FilterStatus) -> Self {
        filter.as_str().to_string()
    }
}

impl TryFrom<String> for FilterStatus {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Role tag attached to a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Pet owner.
    Tutor,
    /// Pet sitter.
    Host,
    /// Any tag this layer does not know about.
    #[serde(other)]
    Other,
}

/// A pet owned by a tutor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    /// Pet identifier.
    pub id: String,
    /// Identifier of the owning tutor.
    pub tutor_id: String,
    /// Pet name.
    pub name: String,
    /// Species, e.g. "dog" or "cat".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    /// Breed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    /// Age in years.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,
    /// Weight in kilograms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Sex as reported by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    /// Whether the pet is spayed or neutered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neutered: Option<bool>,
    /// Whether vaccinations are up to date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vaccinated: Option<bool>,
    /// Free-form care notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Photo URLs.
    #[serde(default)]
    pub photos: Vec<String>,
}

/// A user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Street address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// City.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// State (UF).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Role tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}

/// A host profile offering pet-sitting services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Host {
    /// Host identifier.
    pub id: String,
    /// Identifier of the owning user.
    pub user_id: String,
    /// Profile description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Price charged per pet per day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_day: Option<f64>,
    /// Whether dogs are accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepts_dogs: Option<bool>,
    /// Whether cats are accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepts_cats: Option<bool>,
    /// Largest accepted pet size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_size: Option<String>,
    /// Whether the home has a yard.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_yard: Option<bool>,
    /// Whether the home has a pool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_pool: Option<bool>,
    /// Profile status as reported by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Photo URLs.
    #[serde(default)]
    pub photos: Vec<String>,
    /// Embedded user account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// A reservation as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    /// Reservation identifier.
    pub id: String,
    /// Identifier of the booking tutor.
    pub tutor_id: String,
    /// Identifier of the booked host.
    pub host_id: String,
    /// First day of the stay.
    pub start_date: String,
    /// Last day of the stay.
    pub end_date: String,
    /// Current status.
    pub status: ReservationStatus,
    /// Identifiers of the tutor's pets included in the stay.
    #[serde(default)]
    pub pet_ids: Vec<String>,
    /// Total price computed by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_price: Option<f64>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last update timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Minimal host data shown alongside a reservation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostSummary {
    /// Host identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// "City, State" text.
    pub location: String,
    /// Avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Display-ready reservation composed from backend records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationView {
    /// Reservation identifier.
    pub id: String,
    /// First day of the stay.
    pub start_date: String,
    /// Last day of the stay.
    pub end_date: String,
    /// Number of billable days.
    pub days: u32,
    /// Current status.
    pub status: ReservationStatus,
    /// Total price.
    pub total_price: f64,
    /// Booked host.
    pub host: HostSummary,
    /// Pets included in the stay.
    pub pets: Vec<Pet>,
}

/// Payload submitted to the backend to create a reservation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReservation {
    /// Identifier of the booking tutor.
    pub tutor_id: String,
    /// Identifier of the booked host.
    pub host_id: String,
    /// First day of the stay.
    pub start_date: String,
    /// Last day of the stay.
    pub end_date: String,
    /// Always `pending` on creation.
    pub status: ReservationStatus,
    /// Pets included in the stay.
    pub pet_ids: Vec<String>,
    /// Host price per pet per day.
    pub price_per_day: f64,
    /// Number of pets.
    pub pet_count: u32,
    /// Number of billable days.
    pub days: u32,
    /// `price_per_day * days * pet_count`.
    pub total_price: f64,
}

/// A backend record that can be checked after deserialization.
pub trait Record: serde::de::DeserializeOwned {
    /// Short record kind used in error messages.
    const KIND: &'static str;

    /// Returns the record identifier.
    fn id(&self) -> &str;

    /// Validates the record data.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidRecord` describing the first violated rule.
    fn validate(&self) -> Result<()>;
}

fn require(kind: &str, id: &str, field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidRecord(format!(
            "{kind} {id}: {field} cannot be empty"
        )));
    }
    Ok(())
}

fn require_non_negative(kind: &str, id: &str, field: &str, value: Option<f64>) -> Result<()> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(Error::InvalidRecord(format!(
            "{kind} {id}: {field} must be a non-negative number, got {v}"
        ))),
        _ => Ok(()),
    }
}

impl Record for Pet {
    const KIND: &'static str = "pet";

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<()> {
        require(Self::KIND, &self.id, "id", &self.id)?;
        require(Self::KIND, &self.id, "tutorId", &self.tutor_id)?;
        require(Self::KIND, &self.id, "name", &self.name)?;
        require_non_negative(Self::KIND, &self.id, "age", self.age)?;
        require_non_negative(Self::KIND, &self.id, "weight", self.weight)
    }
}

impl Record for User {
    const KIND: &'static str = "user";

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<()> {
        require(Self::KIND, &self.id, "id", &self.id)?;
        require(Self::KIND, &self.id, "name", &self.name)?;
        if !self.email.contains('@') {
            return Err(Error::InvalidRecord(format!(
                "user {}: email is not valid: {}",
                self.id, self.email
            )));
        }
        Ok(())
    }
}

impl Record for Host {
    const KIND: &'static str = "host";

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<()> {
        require(Self::KIND, &self.id, "id", &self.id)?;
        require(Self::KIND, &self.id, "userId", &self.user_id)?;
        require_non_negative(Self::KIND, &self.id, "pricePerDay", self.price_per_day)?;
        if let Some(user) = &self.user {
            user.validate()?;
        }
        Ok(())
    }
}

impl Record for Reservation {
    const KIND: &'static str = "reservation";

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<()> {
        require(Self::KIND, &self.id, "id", &self.id)?;
        require(Self::KIND, &self.id, "tutorId", &self.tutor_id)?;
        require(Self::KIND, &self.id, "hostId", &self.host_id)?;

        for (field, value) in [("startDate", &self.start_date), ("endDate", &self.end_date)] {
            if crate::format::parse_calendar_date(value).is_none() {
                return Err(Error::InvalidRecord(format!(
                    "reservation {}: {field} is not a date: {value}",
                    self.id
                )));
            }
        }

        if self.pet_ids.is_empty() {
            return Err(Error::InvalidRecord(format!(
                "reservation {}: petIds cannot be empty",
                self.id
            )));
        }

        require_non_negative(Self::KIND, &self.id, "totalPrice", self.total_price)
    }
}

/// Parses and validates a single backend record from JSON text.
///
/// # Errors
///
/// Returns `Error::InvalidRecord` if the JSON does not match the record
/// shape or fails validation.
pub fn parse_record<T: Record>(json: &str) -> Result<T> {
    let record: T = serde_json::from_str(json)
        .map_err(|e| Error::InvalidRecord(format!("{}: {}", T::KIND, e)))?;
    record.validate()?;
    Ok(record)
}
