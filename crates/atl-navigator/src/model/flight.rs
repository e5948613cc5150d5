//! Airlines, flights and flight status codes.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Concourse, UnknownCode};

/// Operational status of a flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlightStatus {
    /// Running to schedule.
    OnTime,
    /// Running late; see the flight's actual time.
    Delayed,
    /// Boarding at the gate.
    Boarding,
    /// Left the gate.
    Departed,
    /// Will not operate.
    Cancelled,
    /// Arrived at the gate.
    Arrived,
    /// Scheduled, no update yet.
    Scheduled,
    /// Touched down.
    Landed,
}

impl FlightStatus {
    /// Every status, in declaration order.
    pub const ALL: [FlightStatus; 8] = [
        Self::OnTime,
        Self::Delayed,
        Self::Boarding,
        Self::Departed,
        Self::Cancelled,
        Self::Arrived,
        Self::Scheduled,
        Self::Landed,
    ];

    /// Wire code, e.g. `ON_TIME`.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::OnTime => "ON_TIME",
            Self::Delayed => "DELAYED",
            Self::Boarding => "BOARDING",
            Self::Departed => "DEPARTED",
            Self::Cancelled => "CANCELLED",
            Self::Arrived => "ARRIVED",
            Self::Scheduled => "SCHEDULED",
            Self::Landed => "LANDED",
        }
    }
}

impl std::fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for FlightStatus {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.code().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCode::new("flight status", s))
    }
}

/// A carrier operating at the airport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airline {
    /// IATA code, e.g. `DL`.
    pub code: String,
    /// Full carrier name.
    pub name: String,
    /// Path to the carrier logo asset.
    pub logo: String,
    /// Concourses the carrier operates from.
    pub concourses: Vec<Concourse>,
}

/// A scheduled flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    /// Unique identifier.
    pub id: String,
    /// Marketing flight number, e.g. `DL404`.
    pub flight_number: String,
    /// Operating carrier.
    pub airline: Airline,
    /// Origin city.
    pub origin: String,
    /// Origin airport code.
    pub origin_code: String,
    /// Destination city.
    pub destination: String,
    /// Destination airport code.
    pub destination_code: String,
    /// Scheduled time, `HH:MM`.
    pub scheduled_time: String,
    /// Revised time when the flight is off schedule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_time: Option<String>,
    /// Gate number, e.g. `A17`.
    pub gate: String,
    /// Current status.
    pub status: FlightStatus,
    /// Baggage claim belt for arrivals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baggage_claim: Option<String>,
    /// Aircraft type.
    pub aircraft: String,
    /// Whether the flight crosses a border.
    pub is_international: bool,
}

impl Flight {
    /// The time to show on a board: the revised time if any, else the schedule.
    #[must_use]
    pub fn display_time(&self) -> &str {
        self.actual_time.as_deref().unwrap_or(&self.scheduled_time)
    }
}
