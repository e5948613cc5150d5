//! Search and filter logic shared by the flight board, the directory and the
//! terminal map.
//!
//! Text matching is a case-insensitive substring test and an empty query
//! matches everything. Where a category filter exists, an item must pass both
//! the text test and the category test.

use std::str::FromStr;

use serde::Serialize;

use crate::data::AirportData;
use crate::model::{
    Concourse, Coordinates, Flight, Gate, Lounge, SecurityCheckpoint, Service, ServiceType,
    UnknownCode,
};

/// Case-insensitive substring match; an empty needle always matches.
#[must_use]
pub fn matches_text(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Airline filter on the flight board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AirlineFilter {
    /// Every carrier.
    #[default]
    All,
    /// A single carrier by IATA code.
    Code(String),
}

impl AirlineFilter {
    fn accepts(&self, flight: &Flight) -> bool {
        match self {
            Self::All => true,
            Self::Code(code) => flight.airline.code.eq_ignore_ascii_case(code),
        }
    }
}

impl FromStr for AirlineFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("ALL") {
            Ok(Self::All)
        } else {
            Ok(Self::Code(trimmed.to_ascii_uppercase()))
        }
    }
}

/// Flight board search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlightQuery {
    /// Free text matched against flight number, destination, origin and gate.
    pub text: String,
    /// Carrier filter.
    pub airline: AirlineFilter,
}

impl FlightQuery {
    /// A query with text and airline filter.
    #[must_use]
    pub fn new(text: impl Into<String>, airline: AirlineFilter) -> Self {
        Self {
            text: text.into(),
            airline,
        }
    }

    /// Whether `flight` passes both the text and the airline test.
    #[must_use]
    pub fn matches(&self, flight: &Flight) -> bool {
        let text = self.text.as_str();
        let text_match = matches_text(&flight.flight_number, text)
            || matches_text(&flight.destination, text)
            || matches_text(&flight.origin, text)
            || matches_text(&flight.gate, text);
        text_match && self.airline.accepts(flight)
    }

    /// Flights passing the query, in input order.
    #[must_use]
    pub fn filter<'a>(&self, flights: &'a [Flight]) -> Vec<&'a Flight> {
        flights.iter().filter(|f| self.matches(f)).collect()
    }
}

/// One entry of the combined services-and-lounges directory.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "item", rename_all = "snake_case")]
pub enum DirectoryItem {
    /// A dining, shopping or amenity venue.
    Service(Service),
    /// A premium lounge.
    Lounge(Lounge),
}

impl DirectoryItem {
    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Service(s) => &s.name,
            Self::Lounge(l) => &l.name,
        }
    }

    /// Concourse the item is in.
    #[must_use]
    pub fn concourse(&self) -> Concourse {
        match self {
            Self::Service(s) => s.concourse,
            Self::Lounge(l) => l.concourse,
        }
    }

    /// Nearest gate.
    #[must_use]
    pub fn gate(&self) -> &str {
        match self {
            Self::Service(s) => &s.gate,
            Self::Lounge(l) => &l.gate,
        }
    }

    /// Opening hours.
    #[must_use]
    pub fn hours(&self) -> &str {
        match self {
            Self::Service(s) => &s.hours,
            Self::Lounge(l) => &l.hours,
        }
    }

    /// Category code, `LOUNGE` for lounges.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::Service(s) => s.service_type.code(),
            Self::Lounge(_) => ServiceType::Lounge.code(),
        }
    }
}

/// Category filter on the directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DirectoryFilter {
    /// Everything.
    #[default]
    All,
    /// Services of one type.
    Type(ServiceType),
    /// Lounges only.
    Lounge,
}

impl DirectoryFilter {
    /// The filter chips offered by the directory, in display order.
    pub const CHIPS: [DirectoryFilter; 7] = [
        Self::All,
        Self::Type(ServiceType::Restaurant),
        Self::Type(ServiceType::Cafe),
        Self::Type(ServiceType::Bar),
        Self::Type(ServiceType::Shop),
        Self::Type(ServiceType::DutyFree),
        Self::Lounge,
    ];

    /// Chip label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Lounge => "Lounges",
            Self::Type(ServiceType::Restaurant) => "Restaurants",
            Self::Type(ServiceType::Cafe) => "Cafes",
            Self::Type(ServiceType::Bar) => "Bars",
            Self::Type(ServiceType::Shop) => "Shops",
            Self::Type(ServiceType::DutyFree) => "Duty Free",
            Self::Type(_) => "Other",
        }
    }

    /// Whether `item` belongs to this category.
    #[must_use]
    pub fn accepts(self, item: &DirectoryItem) -> bool {
        match (self, item) {
            (Self::All, _) | (Self::Lounge, DirectoryItem::Lounge(_)) => true,
            (Self::Type(kind), DirectoryItem::Service(s)) => s.service_type == kind,
            _ => false,
        }
    }
}

impl FromStr for DirectoryFilter {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("ALL") {
            return Ok(Self::All);
        }
        match trimmed.parse::<ServiceType>() {
            Ok(ServiceType::Lounge) => Ok(Self::Lounge),
            Ok(kind) => Ok(Self::Type(kind)),
            Err(_) => Err(UnknownCode::new("directory filter", s)),
        }
    }
}

/// Services followed by lounges.
#[must_use]
pub fn directory_items(data: &AirportData) -> Vec<DirectoryItem> {
    data.services()
        .cloned()
        .map(DirectoryItem::Service)
        .chain(data.lounges().iter().cloned().map(DirectoryItem::Lounge))
        .collect()
}

/// Directory entries whose name or concourse code contains `query` and
/// that pass `filter`.
#[must_use]
pub fn search_directory<'a>(
    items: &'a [DirectoryItem],
    query: &str,
    filter: DirectoryFilter,
) -> Vec<&'a DirectoryItem> {
    items
        .iter()
        .filter(|item| {
            (matches_text(item.name(), query) || matches_text(item.concourse().code(), query))
                && filter.accepts(item)
        })
        .collect()
}

/// Anything that can be placed or found on the terminal map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "item", rename_all = "snake_case")]
pub enum MapItem {
    /// A boarding gate.
    Gate(Gate),
    /// A venue.
    Service(Service),
    /// A lounge.
    Lounge(Lounge),
    /// A security checkpoint.
    Security(SecurityCheckpoint),
}

impl MapItem {
    /// Display name (the gate number for gates).
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Gate(g) => &g.number,
            Self::Service(s) => &s.name,
            Self::Lounge(l) => &l.name,
            Self::Security(c) => &c.name,
        }
    }

    /// Map position.
    #[must_use]
    pub fn coordinates(&self) -> Coordinates {
        match self {
            Self::Gate(g) => g.coordinates,
            Self::Service(s) => s.coordinates,
            Self::Lounge(l) => l.coordinates,
            Self::Security(c) => c.coordinates,
        }
    }

    /// Short kind tag.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Gate(_) => "gate",
            Self::Service(_) => "service",
            Self::Lounge(_) => "lounge",
            Self::Security(_) => "security",
        }
    }
}

/// Search one concourse of the map.
///
/// Results are gates matched by number, then services by name, then lounges
/// by name. An empty query yields no results.
#[must_use]
pub fn map_search(data: &AirportData, concourse: Concourse, query: &str) -> Vec<MapItem> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    let gates = data
        .gates()
        .iter()
        .filter(|g| g.concourse == concourse && matches_text(&g.number, query))
        .cloned()
        .map(MapItem::Gate);
    let services = data
        .services()
        .filter(|s| s.concourse == concourse && matches_text(&s.name, query))
        .cloned()
        .map(MapItem::Service);
    let lounges = data
        .lounges()
        .iter()
        .filter(|l| l.concourse == concourse && matches_text(&l.name, query))
        .cloned()
        .map(MapItem::Lounge);

    let results: Vec<MapItem> = gates.chain(services).chain(lounges).collect();
    tracing::debug!(%concourse, query, results = results.len(), "Map search");
    results
}
