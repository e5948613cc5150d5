//! Mock data generators and the airport data set.
//!
//! [`AirportData`] is built once at startup and passed by reference to every
//! consumer. Generated collections are replaced wholesale by
//! [`AirportData::regenerate`]; nothing patches them in place.

mod analytics;
mod gates;
mod seed;

use std::sync::Arc;

pub use analytics::{
    generate_analytics, is_daytime, AnalyticsGenerator, DAYTIME_BOOST, HOURLY_MAX, HOURLY_MIN,
};
pub use gates::{gate_count, generate_concourse_gates, generate_gates};
pub use seed::SeedCatalog;

use crate::error::Result;
use crate::model::{Airline, Flight, Gate, Infrastructure, Lounge, SecurityCheckpoint, Service};

/// Every collection the navigator works with.
#[derive(Debug, Clone)]
pub struct AirportData {
    airlines: Vec<Airline>,
    schedule: Arc<Vec<Flight>>,
    gates: Vec<Gate>,
    flights: Vec<Flight>,
    restaurants: Vec<Service>,
    shops: Vec<Service>,
    lounges: Vec<Lounge>,
    checkpoints: Vec<SecurityCheckpoint>,
    infrastructure: Vec<Infrastructure>,
}

impl AirportData {
    /// Decode the seed tables and generate the initial collections.
    ///
    /// # Errors
    ///
    /// Returns an error if an embedded seed table cannot be decoded.
    pub fn load() -> Result<Self> {
        Ok(Self::from_catalog(SeedCatalog::decode()?))
    }

    /// Build the data set from already decoded seed tables.
    #[must_use]
    pub fn from_catalog(catalog: SeedCatalog) -> Self {
        let schedule = Arc::new(catalog.flights);
        let data = Self {
            airlines: catalog.airlines,
            gates: generate_gates(),
            flights: schedule.as_ref().clone(),
            schedule,
            restaurants: catalog.restaurants,
            shops: catalog.shops,
            lounges: catalog.lounges,
            checkpoints: catalog.checkpoints,
            infrastructure: catalog.infrastructure,
        };
        tracing::debug!(
            gates = data.gates.len(),
            flights = data.flights.len(),
            services = data.restaurants.len() + data.shops.len(),
            "Loaded airport data"
        );
        data
    }

    /// Replace the generated collections (gates and flights) with fresh ones.
    pub fn regenerate(&mut self) {
        self.gates = generate_gates();
        self.flights = self.generate_flights();
        tracing::debug!("Regenerated gates and flights");
    }

    /// A fresh copy of the flight schedule.
    #[must_use]
    pub fn generate_flights(&self) -> Vec<Flight> {
        self.schedule.as_ref().clone()
    }

    /// A shareable flight generator for timer-driven refreshes.
    #[must_use]
    pub fn flight_generator(&self) -> impl Fn() -> Vec<Flight> + Send + Sync + 'static {
        let schedule = Arc::clone(&self.schedule);
        move || schedule.as_ref().clone()
    }

    /// Carriers operating at the airport.
    #[must_use]
    pub fn airlines(&self) -> &[Airline] {
        &self.airlines
    }

    /// All generated gates.
    #[must_use]
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// The current flight list.
    #[must_use]
    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    /// Dining venues.
    #[must_use]
    pub fn restaurants(&self) -> &[Service] {
        &self.restaurants
    }

    /// Retail venues.
    #[must_use]
    pub fn shops(&self) -> &[Service] {
        &self.shops
    }

    /// Restaurants followed by shops.
    #[must_use]
    pub fn all_services(&self) -> Vec<Service> {
        self.restaurants.iter().chain(&self.shops).cloned().collect()
    }

    /// Iterate restaurants then shops without cloning.
    pub fn services(&self) -> impl Iterator<Item = &Service> {
        self.restaurants.iter().chain(&self.shops)
    }

    /// Premium lounges.
    #[must_use]
    pub fn lounges(&self) -> &[Lounge] {
        &self.lounges
    }

    /// Security checkpoints.
    #[must_use]
    pub fn checkpoints(&self) -> &[SecurityCheckpoint] {
        &self.checkpoints
    }

    /// Fixed facilities.
    #[must_use]
    pub fn infrastructure(&self) -> &[Infrastructure] {
        &self.infrastructure
    }
}
