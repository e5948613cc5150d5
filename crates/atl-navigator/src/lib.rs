//! `atl_navigator` - the core of an airport navigation demo for Atlanta
//! Hartsfield-Jackson
//!
//! This library provides mock terminal data (gates, flights, services,
//! lounges, analytics), lookups and search over it, a walking-time
//! estimator, and the timer-driven views that keep boards and carousels
//! moving.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod board;
pub mod carousel;
pub mod cli;
pub mod config;
pub mod content;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod live;
pub mod logging;
pub mod lookup;
pub mod map;
pub mod model;
pub mod schedule;
pub mod search;
pub mod viewport;
pub mod walking;

pub use board::{Direction, FlightBoard};
pub use config::Config;
pub use data::{AirportData, AnalyticsGenerator};
pub use error::{Error, Result};
pub use live::LiveFeed;
pub use logging::init_logging;
pub use map::TerminalMap;
pub use model::{Analytics, Concourse, Flight, FlightStatus, Gate};
pub use walking::{estimate_walking_time, WalkingEstimate};
