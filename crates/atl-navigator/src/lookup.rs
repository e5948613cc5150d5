//! Derived-data accessors: per-concourse filters, point lookups and the
//! status color and label tables.

use crate::model::{
    Airline, Concourse, Flight, FlightStatus, Gate, Infrastructure, Lounge, SecurityCheckpoint,
    Service,
};

/// Color used for statuses without a dedicated color.
pub const DEFAULT_STATUS_COLOR: &str = "#8B9CAD";

/// Label used for unknown status codes.
pub const UNKNOWN_STATUS_LABEL: &str = "Unknown";

/// Services located in `concourse`.
#[must_use]
pub fn services_by_concourse(services: &[Service], concourse: Concourse) -> Vec<&Service> {
    services.iter().filter(|s| s.concourse == concourse).collect()
}

/// Lounges located in `concourse`.
#[must_use]
pub fn lounges_by_concourse(lounges: &[Lounge], concourse: Concourse) -> Vec<&Lounge> {
    lounges.iter().filter(|l| l.concourse == concourse).collect()
}

/// Gates belonging to `concourse`.
#[must_use]
pub fn gates_by_concourse(gates: &[Gate], concourse: Concourse) -> Vec<&Gate> {
    gates.iter().filter(|g| g.concourse == concourse).collect()
}

/// Checkpoints serving `concourse`.
#[must_use]
pub fn checkpoints_by_concourse(
    checkpoints: &[SecurityCheckpoint],
    concourse: Concourse,
) -> Vec<&SecurityCheckpoint> {
    checkpoints
        .iter()
        .filter(|c| c.concourse == concourse)
        .collect()
}

/// Facilities located in `concourse`.
#[must_use]
pub fn infrastructure_by_concourse(
    infrastructure: &[Infrastructure],
    concourse: Concourse,
) -> Vec<&Infrastructure> {
    infrastructure
        .iter()
        .filter(|i| i.concourse == concourse)
        .collect()
}

/// The gate with the given number, matched exactly.
#[must_use]
pub fn find_gate<'a>(gates: &'a [Gate], number: &str) -> Option<&'a Gate> {
    gates.iter().find(|g| g.number == number)
}

/// The airline with the given IATA code.
#[must_use]
pub fn airline_by_code<'a>(airlines: &'a [Airline], code: &str) -> Option<&'a Airline> {
    airlines.iter().find(|a| a.code == code)
}

/// The first flight assigned to `gate`.
#[must_use]
pub fn flight_at_gate<'a>(flights: &'a [Flight], gate: &str) -> Option<&'a Flight> {
    flights.iter().find(|f| f.gate == gate)
}

/// Hex color for a flight status.
#[must_use]
pub fn status_color(status: FlightStatus) -> &'static str {
    match status {
        FlightStatus::OnTime | FlightStatus::Arrived | FlightStatus::Landed => "#00C853",
        FlightStatus::Delayed => "#FFD600",
        FlightStatus::Cancelled => "#FF1744",
        FlightStatus::Boarding => "#00D4FF",
        FlightStatus::Departed => "#2979FF",
        FlightStatus::Scheduled => DEFAULT_STATUS_COLOR,
    }
}

/// Human-readable label for a flight status.
#[must_use]
pub fn status_label(status: FlightStatus) -> &'static str {
    match status {
        FlightStatus::OnTime => "On Time",
        FlightStatus::Delayed => "Delayed",
        FlightStatus::Cancelled => "Cancelled",
        FlightStatus::Boarding => "Boarding",
        FlightStatus::Departed => "Departed",
        FlightStatus::Arrived => "Arrived",
        FlightStatus::Landed => "Landed",
        FlightStatus::Scheduled => "Scheduled",
    }
}

/// Hex color for a raw status code; unknown codes get the default color.
#[must_use]
pub fn status_color_for_code(code: &str) -> &'static str {
    code.parse()
        .map_or(DEFAULT_STATUS_COLOR, status_color)
}

/// Label for a raw status code; unknown codes are labelled `Unknown`.
#[must_use]
pub fn status_label_for_code(code: &str) -> &'static str {
    code.parse()
        .map_or(UNKNOWN_STATUS_LABEL, status_label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::AirportData;

    #[test]
    fn test_every_status_has_color_and_label() {
        for status in FlightStatus::ALL {
            assert!(status_color(status).starts_with('#'));
            assert_eq!(status_color(status).len(), 7);
            assert!(!status_label(status).is_empty());
        }
    }

    #[test]
    fn test_status_colors() {
        assert_eq!(status_color(FlightStatus::OnTime), "#00C853");
        assert_eq!(status_color(FlightStatus::Landed), "#00C853");
        assert_eq!(status_color(FlightStatus::Delayed), "#FFD600");
        assert_eq!(status_color(FlightStatus::Cancelled), "#FF1744");
        assert_eq!(status_color(FlightStatus::Boarding), "#00D4FF");
        assert_eq!(status_color(FlightStatus::Departed), "#2979FF");
        assert_eq!(status_color(FlightStatus::Scheduled), DEFAULT_STATUS_COLOR);
    }

    #[test]
    fn test_unknown_codes_fall_back() {
        assert_eq!(status_color_for_code("DIVERTED"), "#8B9CAD");
        assert_eq!(status_label_for_code("DIVERTED"), "Unknown");
        assert_eq!(status_color_for_code("DELAYED"), "#FFD600");
        assert_eq!(status_label_for_code("ON_TIME"), "On Time");
    }

    #[test]
    fn test_by_concourse_filters() {
        let data = AirportData::load().unwrap();
        let services = data.all_services();

        let a_services = services_by_concourse(&services, Concourse::A);
        assert!(!a_services.is_empty());
        assert!(a_services.iter().all(|s| s.concourse == Concourse::A));

        let t_lounges = lounges_by_concourse(data.lounges(), Concourse::T);
        assert_eq!(t_lounges.len(), 3);

        assert_eq!(gates_by_concourse(data.gates(), Concourse::F).len(), 16);
        assert!(gates_by_concourse(data.gates(), Concourse::Domestic).is_empty());

        let domestic = checkpoints_by_concourse(data.checkpoints(), Concourse::Domestic);
        assert_eq!(domestic.len(), 4);

        assert!(infrastructure_by_concourse(data.infrastructure(), Concourse::A)
            .iter()
            .all(|i| i.concourse == Concourse::A));
    }

    #[test]
    fn test_point_lookups() {
        let data = AirportData::load().unwrap();
        assert_eq!(find_gate(data.gates(), "A17").unwrap().concourse, Concourse::A);
        assert!(find_gate(data.gates(), "a17").is_none());
        assert!(find_gate(data.gates(), "Z99").is_none());

        assert_eq!(
            airline_by_code(data.airlines(), "BA").unwrap().name,
            "British Airways"
        );
        assert!(airline_by_code(data.airlines(), "XX").is_none());

        assert_eq!(flight_at_gate(data.flights(), "A17").unwrap().flight_number, "DL404");
        // F2 hosts two flights; the first in schedule order wins.
        assert_eq!(flight_at_gate(data.flights(), "F2").unwrap().flight_number, "UA8569");
        assert!(flight_at_gate(data.flights(), "A1").is_none());
    }
}
