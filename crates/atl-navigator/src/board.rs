//! The departures and arrivals board.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::lookup::{status_color, status_label};
use crate::model::Flight;
use crate::search::FlightQuery;

/// Home airport code shown on every route line.
pub const HOME_AIRPORT: &str = "ATL";

/// Default number of rows per board tab.
pub const DEFAULT_MAX_ROWS: usize = 12;

/// Which tab a flight is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Leaving the home airport.
    Departure,
    /// Arriving at the home airport.
    Arrival,
}

impl Direction {
    /// Short route line, e.g. `ATL → LGA` or `ORD → ATL`.
    #[must_use]
    pub fn route_line(self, flight: &Flight) -> String {
        match self {
            Self::Departure => format!("{HOME_AIRPORT} → {}", flight.destination_code),
            Self::Arrival => format!("{} → {HOME_AIRPORT}", flight.origin_code),
        }
    }

    /// The city on the far end of the route.
    #[must_use]
    pub fn far_city(self, flight: &Flight) -> &str {
        match self {
            Self::Departure => &flight.destination,
            Self::Arrival => &flight.origin,
        }
    }

    /// Detail line shown when a flight row is selected.
    #[must_use]
    pub fn detail_line(self, flight: &Flight) -> String {
        let preposition = match self {
            Self::Departure => "To",
            Self::Arrival => "From",
        };
        format!(
            "{} | {preposition} {} | Gate {}",
            flight.airline.name,
            self.far_city(flight),
            flight.gate
        )
    }
}

/// One rendered board row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardRow {
    /// Flight number.
    pub flight_number: String,
    /// Carrier IATA code.
    pub airline: String,
    /// Route line.
    pub route: String,
    /// Revised or scheduled time.
    pub time: String,
    /// Gate number.
    pub gate: String,
    /// Status label.
    pub status: &'static str,
    /// Status color.
    pub color: &'static str,
}

impl BoardRow {
    /// Render a flight for the given tab.
    #[must_use]
    pub fn new(flight: &Flight, direction: Direction) -> Self {
        Self {
            flight_number: flight.flight_number.clone(),
            airline: flight.airline.code.clone(),
            route: direction.route_line(flight),
            time: flight.display_time().to_string(),
            gate: flight.gate.clone(),
            status: status_label(flight.status),
            color: status_color(flight.status),
        }
    }
}

/// A snapshot of the departures and arrivals tabs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightBoard {
    departures: Vec<Flight>,
    arrivals: Vec<Flight>,
    last_updated: DateTime<Utc>,
}

impl FlightBoard {
    /// Split a flight list into the two tabs.
    ///
    /// Even positions become departures and odd positions arrivals; each tab
    /// keeps at most `max_rows` flights.
    #[must_use]
    pub fn from_flights(flights: &[Flight], max_rows: usize, now: DateTime<Utc>) -> Self {
        let departures = flights
            .iter()
            .step_by(2)
            .take(max_rows)
            .cloned()
            .collect();
        let arrivals = flights
            .iter()
            .skip(1)
            .step_by(2)
            .take(max_rows)
            .cloned()
            .collect();
        Self {
            departures,
            arrivals,
            last_updated: now,
        }
    }

    /// Departures tab.
    #[must_use]
    pub fn departures(&self) -> &[Flight] {
        &self.departures
    }

    /// Arrivals tab.
    #[must_use]
    pub fn arrivals(&self) -> &[Flight] {
        &self.arrivals
    }

    /// One tab by direction.
    #[must_use]
    pub fn tab(&self, direction: Direction) -> &[Flight] {
        match direction {
            Direction::Departure => &self.departures,
            Direction::Arrival => &self.arrivals,
        }
    }

    /// When the board was generated.
    #[must_use]
    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    /// Whole minutes since the board was generated, never negative.
    #[must_use]
    pub fn minutes_since_update(&self, now: DateTime<Utc>) -> i64 {
        (now - self.last_updated).num_minutes().max(0)
    }

    /// The freshness notice, e.g. `Updated 3 min ago`.
    #[must_use]
    pub fn updated_label(&self, now: DateTime<Utc>) -> String {
        format!("Updated {} min ago", self.minutes_since_update(now))
    }

    /// A board holding only the flights that pass `query`.
    #[must_use]
    pub fn filtered(&self, query: &FlightQuery) -> Self {
        Self {
            departures: query.filter(&self.departures).into_iter().cloned().collect(),
            arrivals: query.filter(&self.arrivals).into_iter().cloned().collect(),
            last_updated: self.last_updated,
        }
    }

    /// Rendered rows for one tab.
    #[must_use]
    pub fn rows(&self, direction: Direction) -> Vec<BoardRow> {
        self.tab(direction)
            .iter()
            .map(|f| BoardRow::new(f, direction))
            .collect()
    }

    /// Tab caption with its count, e.g. `Departures (12)`.
    #[must_use]
    pub fn tab_caption(&self, direction: Direction) -> String {
        match direction {
            Direction::Departure => format!("Departures ({})", self.departures.len()),
            Direction::Arrival => format!("Arrivals ({})", self.arrivals.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;
    use crate::data::AirportData;
    use crate::search::AirlineFilter;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
    }

    fn board() -> FlightBoard {
        let data = AirportData::load().unwrap();
        FlightBoard::from_flights(data.flights(), DEFAULT_MAX_ROWS, now())
    }

    #[test]
    fn test_split_and_truncate() {
        let board = board();
        assert_eq!(board.departures().len(), 12);
        assert_eq!(board.arrivals().len(), 12);
        assert_eq!(board.departures()[0].flight_number, "DL404");
        assert_eq!(board.arrivals()[0].flight_number, "DL8805");
        assert_eq!(board.departures()[1].flight_number, "DL8836");
    }

    #[test]
    fn test_short_list_is_not_padded() {
        let data = AirportData::load().unwrap();
        let board = FlightBoard::from_flights(&data.flights()[..3], 12, now());
        assert_eq!(board.departures().len(), 2);
        assert_eq!(board.arrivals().len(), 1);
    }

    #[test]
    fn test_minutes_since_update_floors() {
        let board = board();
        assert_eq!(board.minutes_since_update(now()), 0);
        let later = now() + Duration::seconds(179);
        assert_eq!(board.minutes_since_update(later), 2);
        assert_eq!(board.updated_label(later), "Updated 2 min ago");
        assert_eq!(board.minutes_since_update(now() - Duration::minutes(5)), 0);
    }

    #[test]
    fn test_filtered_applies_to_both_tabs() {
        let board = board();
        let query = FlightQuery::new("", AirlineFilter::Code("DL".to_string()));
        let filtered = board.filtered(&query);
        assert!(filtered
            .departures()
            .iter()
            .chain(filtered.arrivals())
            .all(|f| f.airline.code == "DL"));
        assert_eq!(filtered.last_updated(), board.last_updated());

        let everything = board.filtered(&FlightQuery::default());
        assert_eq!(everything, board);
    }

    #[test]
    fn test_route_lines() {
        let board = board();
        let departure = &board.departures()[0];
        assert_eq!(Direction::Departure.route_line(departure), "ATL → LGA");
        let arrival = &board.arrivals()[0];
        assert_eq!(
            Direction::Arrival.route_line(arrival),
            format!("{} → ATL", arrival.origin_code)
        );
        assert_eq!(
            Direction::Departure.detail_line(departure),
            "Delta Air Lines | To New York-LGA | Gate A17"
        );
    }

    #[test]
    fn test_rows_carry_status_presentation() {
        let board = board();
        let rows = board.rows(Direction::Departure);
        assert_eq!(rows[0].status, "Boarding");
        assert_eq!(rows[0].color, "#00D4FF");
        assert_eq!(board.tab_caption(Direction::Arrival), "Arrivals (12)");
    }
}
