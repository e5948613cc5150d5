//! Places on the terminal map: gates, services, lounges, checkpoints and
//! infrastructure.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Concourse, Coordinates, FlightStatus, UnknownCode};

/// A boarding gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    /// Unique identifier (same as the number for generated gates).
    pub id: String,
    /// Concourse-prefixed gate number, e.g. `A17`.
    pub number: String,
    /// Concourse the gate belongs to.
    pub concourse: Concourse,
    /// Map position.
    pub coordinates: Coordinates,
    /// Status of the gate's current flight.
    pub status: FlightStatus,
    /// Minutes from the concourse center.
    pub walking_time_from_center: u32,
    /// Amenity tags near the gate.
    pub amenities: Vec<String>,
}

impl Gate {
    /// Numeric part of the gate number (`A17` -> 17), or 0 when absent.
    #[must_use]
    pub fn index(&self) -> u32 {
        self.number
            .trim_start_matches(|c: char| c.is_ascii_alphabetic())
            .parse()
            .unwrap_or(0)
    }
}

/// Category of a service location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum ServiceType {
    Restaurant,
    Cafe,
    Bar,
    Shop,
    DutyFree,
    Lounge,
    Spa,
    Service,
    Medical,
    Children,
    Business,
    Religious,
}

impl ServiceType {
    /// Every service type, in declaration order.
    pub const ALL: [ServiceType; 12] = [
        Self::Restaurant,
        Self::Cafe,
        Self::Bar,
        Self::Shop,
        Self::DutyFree,
        Self::Lounge,
        Self::Spa,
        Self::Service,
        Self::Medical,
        Self::Children,
        Self::Business,
        Self::Religious,
    ];

    /// Wire code, e.g. `DUTY_FREE`.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Restaurant => "RESTAURANT",
            Self::Cafe => "CAFE",
            Self::Bar => "BAR",
            Self::Shop => "SHOP",
            Self::DutyFree => "DUTY_FREE",
            Self::Lounge => "LOUNGE",
            Self::Spa => "SPA",
            Self::Service => "SERVICE",
            Self::Medical => "MEDICAL",
            Self::Children => "CHILDREN",
            Self::Business => "BUSINESS",
            Self::Religious => "RELIGIOUS",
        }
    }

    /// Whether the map draws this type on the dining layer.
    #[must_use]
    pub fn is_dining(self) -> bool {
        matches!(self, Self::Restaurant | Self::Cafe | Self::Bar)
    }

    /// Whether the map draws this type on the shopping layer.
    #[must_use]
    pub fn is_shopping(self) -> bool {
        matches!(self, Self::Shop | Self::DutyFree)
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ServiceType {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|t| t.code().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| UnknownCode::new("service type", s))
    }
}

/// Price band of a venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriceRange {
    /// `$`
    #[serde(rename = "$")]
    Budget,
    /// `$$`
    #[serde(rename = "$$")]
    Moderate,
    /// `$$$`
    #[serde(rename = "$$$")]
    Upscale,
    /// `$$$$`
    #[serde(rename = "$$$$")]
    Luxury,
}

impl PriceRange {
    /// Dollar-sign rendering.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Budget => "$",
            Self::Moderate => "$$",
            Self::Upscale => "$$$",
            Self::Luxury => "$$$$",
        }
    }
}

/// A dining, shopping or amenity location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Unique identifier.
    pub id: String,
    /// Venue name.
    pub name: String,
    /// Venue category.
    pub service_type: ServiceType,
    /// Concourse the venue is in.
    pub concourse: Concourse,
    /// Nearest gate or landmark.
    pub gate: String,
    /// Map position.
    pub coordinates: Coordinates,
    /// Opening hours, free text.
    pub hours: String,
    /// Average rating, 0-5.
    pub rating: f64,
    /// Number of reviews behind the rating.
    pub review_count: u32,
    /// Short description.
    pub description: String,
    /// Cuisine, for food venues.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    /// Price band, for food venues.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,
    /// Feature tags.
    pub features: Vec<String>,
}

/// How busy a lounge is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum LoungeCapacity {
    Low,
    Medium,
    High,
    Full,
}

impl LoungeCapacity {
    /// Wire code, e.g. `MEDIUM`.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Full => "FULL",
        }
    }
}

/// A premium lounge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lounge {
    /// Unique identifier.
    pub id: String,
    /// Lounge name.
    pub name: String,
    /// Concourse the lounge is in.
    pub concourse: Concourse,
    /// Nearest gate.
    pub gate: String,
    /// Map position.
    pub coordinates: Coordinates,
    /// Operating company.
    pub operator: String,
    /// Opening hours, free text.
    pub hours: String,
    /// Amenities offered.
    pub amenities: Vec<String>,
    /// Ways to get in.
    pub access_methods: Vec<String>,
    /// Current occupancy indicator.
    pub capacity: LoungeCapacity,
}

/// Whether a checkpoint is screening passengers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum CheckpointStatus {
    Open,
    Closed,
    Limited,
}

/// A TSA security checkpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityCheckpoint {
    /// Unique identifier.
    pub id: String,
    /// Checkpoint name.
    pub name: String,
    /// Concourse the checkpoint serves.
    pub concourse: Concourse,
    /// Map position.
    pub coordinates: Coordinates,
    /// Current wait in minutes.
    pub wait_time: u32,
    /// Operating status.
    pub status: CheckpointStatus,
    /// Screening programs offered (TSA PreCheck, CLEAR, ...).
    pub features: Vec<String>,
}

/// Category of a fixed facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum InfrastructureType {
    Gate,
    Security,
    Checkin,
    Baggage,
    Restroom,
    Atm,
    Charging,
    Elevator,
    Escalator,
    Exit,
    Info,
}

/// A fixed facility such as a restroom, ATM or information desk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Infrastructure {
    /// Unique identifier.
    pub id: String,
    /// Facility name.
    pub name: String,
    /// Facility category.
    pub kind: InfrastructureType,
    /// Concourse the facility is in.
    pub concourse: Concourse,
    /// Map position.
    pub coordinates: Coordinates,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Opening hours, when not always open.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
    /// Whether the facility is step-free accessible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<bool>,
}
