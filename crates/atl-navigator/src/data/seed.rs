//! Embedded seed tables.
//!
//! The hand-authored airport records ship inside the binary as JSON and are
//! decoded once at startup. Decoding is the only fallible step; everything
//! derived from the decoded tables is total.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::model::{
    Airline, Flight, FlightStatus, Infrastructure, Lounge, SecurityCheckpoint, Service,
};

const AIRLINES: &str = include_str!("../../data/airlines.json");
const FLIGHTS: &str = include_str!("../../data/flights.json");
const RESTAURANTS: &str = include_str!("../../data/restaurants.json");
const SHOPS: &str = include_str!("../../data/shops.json");
const LOUNGES: &str = include_str!("../../data/lounges.json");
const CHECKPOINTS: &str = include_str!("../../data/checkpoints.json");
const INFRASTRUCTURE: &str = include_str!("../../data/infrastructure.json");

/// All decoded seed tables.
#[derive(Debug, Clone)]
pub struct SeedCatalog {
    /// Carriers operating at the airport.
    pub airlines: Vec<Airline>,
    /// The fixed flight schedule.
    pub flights: Vec<Flight>,
    /// Dining venues.
    pub restaurants: Vec<Service>,
    /// Retail venues.
    pub shops: Vec<Service>,
    /// Premium lounges.
    pub lounges: Vec<Lounge>,
    /// Security checkpoints.
    pub checkpoints: Vec<SecurityCheckpoint>,
    /// Fixed facilities.
    pub infrastructure: Vec<Infrastructure>,
}

/// A flight as stored in the seed table, carrying only the airline code.
#[derive(Debug, Deserialize)]
struct FlightRecord {
    id: String,
    flight_number: String,
    airline: String,
    origin: String,
    origin_code: String,
    destination: String,
    destination_code: String,
    scheduled_time: String,
    #[serde(default)]
    actual_time: Option<String>,
    gate: String,
    status: FlightStatus,
    #[serde(default)]
    baggage_claim: Option<String>,
    aircraft: String,
    is_international: bool,
}

impl SeedCatalog {
    /// Decode every embedded table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SeedData`] if a table is malformed, or
    /// [`Error::Internal`] if a flight names an airline that is not seeded.
    pub fn decode() -> Result<Self> {
        let airlines: Vec<Airline> = decode_table("airlines", AIRLINES)?;
        let records: Vec<FlightRecord> = decode_table("flights", FLIGHTS)?;
        let flights = records
            .into_iter()
            .map(|record| resolve_flight(record, &airlines))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            flights,
            airlines,
            restaurants: decode_table("restaurants", RESTAURANTS)?,
            shops: decode_table("shops", SHOPS)?,
            lounges: decode_table("lounges", LOUNGES)?,
            checkpoints: decode_table("checkpoints", CHECKPOINTS)?,
            infrastructure: decode_table("infrastructure", INFRASTRUCTURE)?,
        })
    }
}

fn decode_table<T: DeserializeOwned>(table: &'static str, raw: &str) -> Result<Vec<T>> {
    serde_json::from_str(raw).map_err(|source| Error::SeedData { table, source })
}

fn resolve_flight(record: FlightRecord, airlines: &[Airline]) -> Result<Flight> {
    let airline = airlines
        .iter()
        .find(|a| a.code == record.airline)
        .cloned()
        .ok_or_else(|| {
            Error::internal(format!(
                "flight {} references unknown airline {}",
                record.flight_number, record.airline
            ))
        })?;

    Ok(Flight {
        id: record.id,
        flight_number: record.flight_number,
        airline,
        origin: record.origin,
        origin_code: record.origin_code,
        destination: record.destination,
        destination_code: record.destination_code,
        scheduled_time: record.scheduled_time,
        actual_time: record.actual_time,
        gate: record.gate,
        status: record.status,
        baggage_claim: record.baggage_claim,
        aircraft: record.aircraft,
        is_international: record.is_international,
    })
}
