//! Walking-time estimation between gates.
//!
//! The estimate is a closed-form heuristic, not a path search:
//!
//! - same concourse: half a minute per gate index apart, never below
//!   [`MIN_SAME_CONCOURSE_MINUTES`];
//! - different concourses: [`TRANSFER_BASE_MINUTES`] plus
//!   [`MINUTES_PER_CONCOURSE`] for every step between them in
//!   [`Concourse::ORDER`](crate::model::Concourse::ORDER).
//!
//! The formula is symmetric in its two arguments.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::lookup::find_gate;
use crate::model::Gate;

/// Floor for walks within one concourse.
pub const MIN_SAME_CONCOURSE_MINUTES: f64 = 2.0;
/// Minutes per gate index within a concourse.
pub const MINUTES_PER_GATE: f64 = 0.5;
/// Fixed cost of changing concourse (the Plane Train ride).
pub const TRANSFER_BASE_MINUTES: f64 = 5.0;
/// Minutes per concourse step.
pub const MINUTES_PER_CONCOURSE: f64 = 3.0;

/// The result of a walking-time lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WalkingEstimate {
    /// Origin gate number.
    pub from: String,
    /// Destination gate number.
    pub to: String,
    /// Estimated minutes, unrounded.
    pub minutes: f64,
}

impl WalkingEstimate {
    /// Minutes rounded half away from zero, as shown to travelers.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn rounded_minutes(&self) -> u32 {
        self.minutes.round() as u32
    }

    /// The one-line notice shown under the gate selectors.
    #[must_use]
    pub fn notice(&self) -> String {
        format!(
            "Approximately {} minutes walking time",
            self.rounded_minutes()
        )
    }
}

/// Minutes between two known gates.
#[must_use]
pub fn minutes_between(a: &Gate, b: &Gate) -> f64 {
    if a.concourse == b.concourse {
        let apart = f64::from(a.index().abs_diff(b.index()));
        (apart * MINUTES_PER_GATE).max(MIN_SAME_CONCOURSE_MINUTES)
    } else {
        #[allow(clippy::cast_precision_loss)]
        let steps = a.concourse.ordinal().abs_diff(b.concourse.ordinal()) as f64;
        TRANSFER_BASE_MINUTES + steps * MINUTES_PER_CONCOURSE
    }
}

/// Estimate the walk from gate `from` to gate `to`.
///
/// # Errors
///
/// Returns [`Error::GateNotFound`] naming the first gate number that is not
/// in `gates`.
pub fn estimate_walking_time(gates: &[Gate], from: &str, to: &str) -> Result<WalkingEstimate> {
    let origin = lookup(gates, from)?;
    let destination = lookup(gates, to)?;
    let minutes = minutes_between(origin, destination);
    tracing::debug!(from, to, minutes, "Estimated walking time");
    Ok(WalkingEstimate {
        from: origin.number.clone(),
        to: destination.number.clone(),
        minutes,
    })
}

fn lookup<'a>(gates: &'a [Gate], number: &str) -> Result<&'a Gate> {
    find_gate(gates, number).ok_or_else(|| {
        tracing::warn!(gate = number, "Gate not found");
        Error::gate_not_found(number)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generate_gates;

    fn minutes(from: &str, to: &str) -> f64 {
        estimate_walking_time(&generate_gates(), from, to)
            .unwrap()
            .minutes
    }

    #[test]
    fn test_same_concourse_floor() {
        assert!((minutes("A1", "A2") - 2.0).abs() < f64::EPSILON);
        assert!((minutes("A5", "A5") - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_same_concourse_scales_with_distance() {
        assert!((minutes("A1", "A10") - 4.5).abs() < f64::EPSILON);
        assert!((minutes("D1", "D46") - 22.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cross_concourse() {
        assert!((minutes("T1", "F1") - 23.0).abs() < f64::EPSILON);
        assert!((minutes("A3", "B30") - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_symmetric() {
        let gates = generate_gates();
        for (a, b) in [("A1", "A10"), ("T1", "F16"), ("C7", "E2"), ("B4", "B4")] {
            let forward = estimate_walking_time(&gates, a, b).unwrap().minutes;
            let backward = estimate_walking_time(&gates, b, a).unwrap().minutes;
            assert!((forward - backward).abs() < f64::EPSILON, "{a} <-> {b}");
        }
    }

    #[test]
    fn test_unknown_gate() {
        let gates = generate_gates();
        let err = estimate_walking_time(&gates, "Z99", "A1").unwrap_err();
        assert!(err.is_gate_not_found());
        assert!(err.to_string().contains("Z99"));

        let err = estimate_walking_time(&gates, "A1", "A99").unwrap_err();
        assert!(err.to_string().contains("A99"));
    }

    #[test]
    fn test_first_missing_gate_is_reported() {
        let err = estimate_walking_time(&generate_gates(), "Q1", "Q2").unwrap_err();
        assert!(err.to_string().contains("Q1"));
    }

    #[test]
    fn test_notice_rounds_half_up() {
        let estimate = estimate_walking_time(&generate_gates(), "A1", "A10").unwrap();
        assert_eq!(estimate.rounded_minutes(), 5);
        assert_eq!(estimate.notice(), "Approximately 5 minutes walking time");
    }
}
