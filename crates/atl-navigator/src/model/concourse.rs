//! Concourses and map coordinates.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::UnknownCode;

/// One of the airport's terminal wings, or the shared domestic hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Concourse {
    /// Domestic terminal: check-in, security and baggage claim.
    #[serde(rename = "DOMESTIC")]
    Domestic,
    /// Concourse T.
    T,
    /// Concourse A.
    A,
    /// Concourse B.
    B,
    /// Concourse C.
    C,
    /// Concourse D.
    D,
    /// Concourse E.
    E,
    /// Concourse F, the international terminal.
    F,
}

impl Concourse {
    /// Fixed sequence used for concourse ordinals.
    pub const ORDER: [Concourse; 8] = [
        Self::Domestic,
        Self::T,
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
    ];

    /// Concourses that have gates.
    pub const WITH_GATES: [Concourse; 7] = [
        Self::T,
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
    ];

    /// Position of this concourse in [`Concourse::ORDER`].
    #[must_use]
    pub fn ordinal(self) -> usize {
        match self {
            Self::Domestic => 0,
            Self::T => 1,
            Self::A => 2,
            Self::B => 3,
            Self::C => 4,
            Self::D => 5,
            Self::E => 6,
            Self::F => 7,
        }
    }

    /// Short code as used in gate numbers and seed data.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Domestic => "DOMESTIC",
            Self::T => "T",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
        }
    }

    /// Display name for the map selector.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Domestic => "Domestic Terminal",
            Self::T => "Concourse T",
            Self::A => "Concourse A",
            Self::B => "Concourse B",
            Self::C => "Concourse C",
            Self::D => "Concourse D",
            Self::E => "Concourse E",
            Self::F => "Concourse F",
        }
    }

    /// One-line description for the map selector.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Domestic => "Main check-in and security",
            Self::T => "Delta, American, United",
            Self::A | Self::B => "Primarily Delta",
            Self::C => "Southwest, Delta",
            Self::D => "American, Southwest, Spirit",
            Self::E => "Domestic & International",
            Self::F => "International Terminal",
        }
    }
}

impl std::fmt::Display for Concourse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Concourse {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ORDER
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCode::new("concourse", s))
    }
}

/// A position on the terminal map, as percentages of width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Horizontal position, 0-100.
    pub x: f64,
    /// Vertical position, 0-100.
    pub y: f64,
}

impl Coordinates {
    /// Create coordinates, clamping both axes into `[0, 100]`.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: x.clamp(0.0, 100.0),
            y: y.clamp(0.0, 100.0),
        }
    }

    /// Whether both axes lie within `[0, 100]`.
    #[must_use]
    pub fn in_bounds(&self) -> bool {
        (0.0..=100.0).contains(&self.x) && (0.0..=100.0).contains(&self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_follow_order() {
        for (i, concourse) in Concourse::ORDER.iter().enumerate() {
            assert_eq!(concourse.ordinal(), i);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("a".parse::<Concourse>().unwrap(), Concourse::A);
        assert_eq!(" F ".parse::<Concourse>().unwrap(), Concourse::F);
        assert_eq!(
            "domestic".parse::<Concourse>().unwrap(),
            Concourse::Domestic
        );
    }

    #[test]
    fn test_parse_unknown() {
        let err = "Z".parse::<Concourse>().unwrap_err();
        assert_eq!(err.to_string(), "unknown concourse 'Z'");
    }

    #[test]
    fn test_serde_codes() {
        assert_eq!(
            serde_json::to_string(&Concourse::Domestic).unwrap(),
            "\"DOMESTIC\""
        );
        let parsed: Concourse = serde_json::from_str("\"T\"").unwrap();
        assert_eq!(parsed, Concourse::T);
    }

    #[test]
    fn test_display_uses_code() {
        assert_eq!(Concourse::E.to_string(), "E");
        assert_eq!(Concourse::Domestic.name(), "Domestic Terminal");
    }

    #[test]
    fn test_coordinates_clamp() {
        let c = Coordinates::new(106.0, -3.0);
        assert!((c.x - 100.0).abs() < f64::EPSILON);
        assert!(c.y.abs() < f64::EPSILON);
        assert!(c.in_bounds());
    }
}
