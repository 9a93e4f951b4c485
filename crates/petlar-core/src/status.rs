// Rust guideline compliant 2026-10-18

//! Status labels and colors for reservation display.
//!
//! Every status has a fixed pt-BR label and a (background, text) color pair:
//!
//! - Denied and Canceled share the red pair
//! - Every other status has its own pair
//! - Anything that is not a concrete status falls back to neutral gray

use crate::{Error, FilterStatus, ReservationStatus, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Background and text colors for a status badge, as hex strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusColors {
    /// Badge background color.
    pub background: &'static str,
    /// Badge text color.
    pub text: &'static str,
}

impl StatusColors {
    /// Neutral gray pair used for anything outside the six statuses.
    pub const NEUTRAL: StatusColors = StatusColors {
        background: "#E0E0E0",
        text: "#616161",
    };

    const PENDING: StatusColors = StatusColors {
        background: "#FFF3CD",
        text: "#856404",
    };
    const CONFIRMED: StatusColors = StatusColors {
        background: "#D4EDDA",
        text: "#155724",
    };
    const REFUSED: StatusColors = StatusColors {
        background: "#F8D7DA",
        text: "#721C24",
    };
    const IN_PROGRESS: StatusColors = StatusColors {
        background: "#CCE5FF",
        text: "#004085",
    };
    const COMPLETED: StatusColors = StatusColors {
        background: "#D1ECF1",
        text: "#0C5460",
    };
}

impl ReservationStatus {
    /// Returns the pt-BR label for the status.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "Pendente",
            ReservationStatus::Confirmed => "Confirmada",
            ReservationStatus::Denied => "Negada",
            ReservationStatus::InProgress => "Em andamento",
            ReservationStatus::Completed => "Concluída",
            ReservationStatus::Canceled => "Cancelada",
        }
    }

    /// Returns the badge colors for the status.
    #[must_use]
    pub fn colors(&self) -> StatusColors {
        match self {
            ReservationStatus::Pending => StatusColors::PENDING,
            ReservationStatus::Confirmed => StatusColors::CONFIRMED,
            ReservationStatus::Denied | ReservationStatus::Canceled => StatusColors::REFUSED,
            ReservationStatus::InProgress => StatusColors::IN_PROGRESS,
            ReservationStatus::Completed => StatusColors::COMPLETED,
        }
    }
}

impl FilterStatus {
    /// Returns the badge colors for the filter; `All` is neutral.
    #[must_use]
    pub fn colors(&self) -> StatusColors {
        match self {
            FilterStatus::All => StatusColors::NEUTRAL,
            FilterStatus::Status(status) => status.colors(),
        }
    }

    /// Returns the pt-BR label for the filter.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            FilterStatus::All => "Todas",
            FilterStatus::Status(status) => status.label(),
        }
    }
}

impl FromStr for ReservationStatus {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "pending" => Ok(ReservationStatus::Pending),
            "confirmed" => Ok(ReservationStatus::Confirmed),
            "denied" => Ok(ReservationStatus::Denied),
            "in_progress" => Ok(ReservationStatus::InProgress),
            "completed" => Ok(ReservationStatus::Completed),
            "canceled" => Ok(ReservationStatus::Canceled),
            other => Err(Error::InvalidStatus(other.to_string())),
        }
    }
}

impl FromStr for FilterStatus {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        if value == "all" {
            return Ok(FilterStatus::All);
        }
        value.parse().map(FilterStatus::Status)
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for FilterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a raw status literal to its label.
///
/// # Errors
///
/// Returns `Error::InvalidStatus` if `raw` is not one of the six statuses.
/// There is no default label.
pub fn status_label(raw: &str) -> Result<&'static str> {
    raw.parse::<ReservationStatus>().map(|status| status.label())
}

/// Maps a raw status literal to its badge colors.
///
/// Unknown literals, including `"all"`, resolve to [`StatusColors::NEUTRAL`].
#[must_use]
pub fn status_colors(raw: &str) -> StatusColors {
    match raw.parse::<ReservationStatus>() {
        Ok(status) => status.colors(),
        Err(_) => {
            tracing::debug!(status = raw, "Using neutral colors for non-status value");
            StatusColors::NEUTRAL
        }
    }
}
