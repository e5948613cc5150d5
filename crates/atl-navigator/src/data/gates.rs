//! Procedural gate generation.

use crate::model::{Concourse, Coordinates, FlightStatus, Gate};

/// Layout constants for one concourse's gates.
#[derive(Debug, Clone, Copy)]
struct GateLayout {
    concourse: Concourse,
    count: u32,
    x_origin: f64,
    x_step: f64,
    y: f64,
    walk_base: u32,
    walk_divisor: u32,
    amenities: &'static [&'static str],
}

const BASIC: &[&str] = &["Charging", "Seating"];
const STANDARD: &[&str] = &["Charging", "Seating", "Restroom"];
const WITH_FOOD: &[&str] = &["Charging", "Seating", "Restroom", "Food"];
const INTERNATIONAL: &[&str] = &["Charging", "Seating", "Restroom", "Duty Free", "Lounges"];

const LAYOUTS: [GateLayout; 7] = [
    GateLayout {
        concourse: Concourse::T,
        count: 18,
        x_origin: 20.0,
        x_step: 3.0,
        y: 50.0,
        walk_base: 2,
        walk_divisor: 5,
        amenities: BASIC,
    },
    GateLayout {
        concourse: Concourse::A,
        count: 34,
        x_origin: 25.0,
        x_step: 2.0,
        y: 35.0,
        walk_base: 5,
        walk_divisor: 6,
        amenities: STANDARD,
    },
    GateLayout {
        concourse: Concourse::B,
        count: 36,
        x_origin: 25.0,
        x_step: 2.0,
        y: 65.0,
        walk_base: 6,
        walk_divisor: 6,
        amenities: STANDARD,
    },
    GateLayout {
        concourse: Concourse::C,
        count: 44,
        x_origin: 30.0,
        x_step: 1.8,
        y: 25.0,
        walk_base: 7,
        walk_divisor: 7,
        amenities: STANDARD,
    },
    GateLayout {
        concourse: Concourse::D,
        count: 46,
        x_origin: 30.0,
        x_step: 1.7,
        y: 75.0,
        walk_base: 8,
        walk_divisor: 7,
        amenities: STANDARD,
    },
    GateLayout {
        concourse: Concourse::E,
        count: 38,
        x_origin: 35.0,
        x_step: 2.0,
        y: 15.0,
        walk_base: 10,
        walk_divisor: 6,
        amenities: WITH_FOOD,
    },
    GateLayout {
        concourse: Concourse::F,
        count: 16,
        x_origin: 40.0,
        x_step: 3.5,
        y: 85.0,
        walk_base: 10,
        walk_divisor: 4,
        amenities: INTERNATIONAL,
    },
];

/// Number of gates generated for a concourse (0 for the domestic hub).
#[must_use]
pub fn gate_count(concourse: Concourse) -> u32 {
    LAYOUTS
        .iter()
        .find(|layout| layout.concourse == concourse)
        .map_or(0, |layout| layout.count)
}

/// Generate the gates of every concourse, T first and F last.
#[must_use]
pub fn generate_gates() -> Vec<Gate> {
    LAYOUTS
        .iter()
        .flat_map(|layout| (1..=layout.count).map(move |i| layout.gate(i)))
        .collect()
}

/// Generate the gates of a single concourse.
#[must_use]
pub fn generate_concourse_gates(concourse: Concourse) -> Vec<Gate> {
    LAYOUTS
        .iter()
        .filter(|layout| layout.concourse == concourse)
        .flat_map(|layout| (1..=layout.count).map(move |i| layout.gate(i)))
        .collect()
}

impl GateLayout {
    fn gate(&self, index: u32) -> Gate {
        let number = format!("{}{index}", self.concourse.code());
        Gate {
            id: number.clone(),
            number,
            concourse: self.concourse,
            coordinates: Coordinates::new(self.x_origin + f64::from(index) * self.x_step, self.y),
            status: FlightStatus::Scheduled,
            walking_time_from_center: self.walk_base + index / self.walk_divisor,
            amenities: self.amenities.iter().map(ToString::to_string).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_gate_counts() {
        let counts: Vec<u32> = Concourse::WITH_GATES.iter().map(|c| gate_count(*c)).collect();
        assert_eq!(counts, vec![18, 34, 36, 44, 46, 38, 16]);
        assert_eq!(gate_count(Concourse::Domestic), 0);
        assert_eq!(generate_gates().len(), 232);
    }

    #[test]
    fn test_generated_gates_belong_to_their_concourse() {
        for concourse in Concourse::ORDER {
            let gates = generate_concourse_gates(concourse);
            assert!(gates.iter().all(|g| g.concourse == concourse));
            assert!(gates.iter().all(|g| g.number.starts_with(concourse.code())));
        }
    }

    #[test]
    fn test_gate_numbers_unique_within_concourse() {
        for concourse in Concourse::WITH_GATES {
            let gates = generate_concourse_gates(concourse);
            let numbers: HashSet<&str> = gates.iter().map(|g| g.number.as_str()).collect();
            assert_eq!(numbers.len(), gates.len());
        }
    }

    #[test]
    fn test_walking_time_from_center() {
        let gates = generate_gates();
        let find = |n: &str| gates.iter().find(|g| g.number == n).unwrap();
        // base + floor(index / divisor)
        assert_eq!(find("T1").walking_time_from_center, 2);
        assert_eq!(find("T5").walking_time_from_center, 3);
        assert_eq!(find("A17").walking_time_from_center, 7);
        assert_eq!(find("F16").walking_time_from_center, 14);
    }

    #[test]
    fn test_coordinates_follow_layout_and_stay_in_bounds() {
        let gates = generate_gates();
        let a1 = gates.iter().find(|g| g.number == "A1").unwrap();
        assert!((a1.coordinates.x - 27.0).abs() < 1e-9);
        assert!((a1.coordinates.y - 35.0).abs() < 1e-9);
        assert!(gates.iter().all(|g| g.coordinates.in_bounds()));
    }

    #[test]
    fn test_all_gates_start_scheduled() {
        assert!(generate_gates()
            .iter()
            .all(|g| g.status == FlightStatus::Scheduled));
    }
}
