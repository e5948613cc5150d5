//! Error types for atl-navigator.
//!
//! The airport core is almost entirely total: filtering, generation and
//! formatting cannot fail. The one modeled domain failure is a gate lookup
//! miss in the walking-time estimator; the remaining variants cover
//! configuration and the embedded seed data.

use thiserror::Error;

/// The main error type for atl-navigator operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Domain Errors ===
    /// A gate identifier is not part of the generated gate collection.
    #[error("gate not found: {gate}")]
    GateNotFound {
        /// The identifier that failed to resolve.
        gate: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Seed Data Errors ===
    /// An embedded seed table could not be decoded.
    #[error("invalid seed table '{table}': {source}")]
    SeedData {
        /// Name of the seed table.
        table: &'static str,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    // === Generic Errors ===
    /// An internal error occurred (bug).
    #[error("internal error: {0}")]
    Internal(String),
}

/// A specialized Result type for atl-navigator operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a gate lookup error.
    #[must_use]
    pub fn gate_not_found(gate: impl Into<String>) -> Self {
        Self::GateNotFound { gate: gate.into() }
    }

    /// Create a new internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this error is a gate lookup miss.
    #[must_use]
    pub fn is_gate_not_found(&self) -> bool {
        matches!(self, Self::GateNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_not_found_display() {
        let err = Error::gate_not_found("Z99");
        assert_eq!(err.to_string(), "gate not found: Z99");
        assert!(err.is_gate_not_found());
    }

    #[test]
    fn test_internal_error() {
        let err = Error::internal("something went wrong");
        assert_eq!(err.to_string(), "internal error: something went wrong");
        assert!(!err.is_gate_not_found());
    }

    #[test]
    fn test_config_validation_error_display() {
        let err = Error::ConfigValidation {
            message: "flights_interval_ms must be greater than 0".to_string(),
        };
        assert!(err.to_string().contains("flights_interval_ms"));
    }

    #[test]
    fn test_seed_data_error_display() {
        let source = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err = Error::SeedData {
            table: "flights",
            source,
        };
        assert!(err.to_string().contains("flights"));
    }

    #[test]
    fn test_seed_data_error_keeps_source() {
        use std::error::Error as _;

        let source = serde_json::from_str::<Vec<u8>>("[1,").unwrap_err();
        let line = source.line();
        let err = Error::SeedData {
            table: "lounges",
            source,
        };
        let inner = err.source().unwrap().to_string();
        assert!(inner.contains(&format!("line {line}")));
    }

    #[test]
    fn test_config_load_error_from_figment() {
        let figment_err = figment::Error::from("missing field".to_string());
        let err: Error = figment_err.into();
        assert!(matches!(err, Error::ConfigLoad(_)));
        assert!(err.to_string().starts_with("failed to load configuration"));
    }
}
