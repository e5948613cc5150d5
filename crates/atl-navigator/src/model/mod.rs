//! Core value types for the airport model.
//!
//! Every entity here is an immutable value record. Collections are never
//! patched in place; a refresh replaces the whole collection.

mod analytics;
mod concourse;
mod flight;
mod place;

pub use analytics::{Analytics, ConcourseCount, HourlyCount};
pub use concourse::{Concourse, Coordinates};
pub use flight::{Airline, Flight, FlightStatus};
pub use place::{
    CheckpointStatus, Gate, Infrastructure, InfrastructureType, Lounge, LoungeCapacity,
    PriceRange, SecurityCheckpoint, Service, ServiceType,
};

use thiserror::Error;

/// A code string that does not name any variant of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{code}'")]
pub struct UnknownCode {
    /// Which enumeration was being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub code: String,
}

impl UnknownCode {
    pub(crate) fn new(kind: &'static str, code: &str) -> Self {
        Self {
            kind,
            code: code.to_string(),
        }
    }
}
