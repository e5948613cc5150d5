//! Operational analytics snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Concourse;

/// Passenger count for one hour of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyCount {
    /// Hour of day, 0-23.
    pub hour: u8,
    /// Passengers in that hour.
    pub count: u32,
}

/// Passenger count for one concourse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcourseCount {
    /// The concourse.
    pub concourse: Concourse,
    /// Passengers currently in it.
    pub count: u32,
}

/// A point-in-time analytics snapshot, regenerated wholesale on refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analytics {
    /// When the snapshot was generated.
    pub timestamp: DateTime<Utc>,
    /// Passengers today.
    pub passenger_volume: u32,
    /// Change against yesterday, percent.
    pub passenger_volume_change: i32,
    /// Average wait in minutes.
    pub average_wait_time: u32,
    /// Change in average wait, minutes.
    pub wait_time_change: i32,
    /// Share of flights on time, percent.
    pub on_time_rate: f64,
    /// Change in on-time share against last week, points.
    pub on_time_rate_change: f64,
    /// Overall security queue, minutes.
    pub security_queue_time: u32,
    /// North checkpoint queue, minutes.
    pub security_north_time: u32,
    /// South checkpoint queue, minutes.
    pub security_south_time: u32,
    /// One entry per hour, 0 through 23.
    pub hourly_traffic: Vec<HourlyCount>,
    /// One entry per concourse with gates.
    pub concourse_traffic: Vec<ConcourseCount>,
}

impl Analytics {
    /// The busiest hour of the day, if the histogram is non-empty.
    #[must_use]
    pub fn peak_hour(&self) -> Option<HourlyCount> {
        self.hourly_traffic
            .iter()
            .copied()
            .max_by_key(|entry| entry.count)
    }
}
