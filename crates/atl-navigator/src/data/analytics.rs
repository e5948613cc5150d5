//! Simulated analytics snapshots.

use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{Analytics, Concourse, ConcourseCount, HourlyCount};

/// Lower bound of the random hourly base count.
pub const HOURLY_MIN: u32 = 2000;
/// Exclusive upper bound of the random hourly base count.
pub const HOURLY_MAX: u32 = 10_000;
/// Extra passengers added during daytime hours.
pub const DAYTIME_BOOST: u32 = 5000;

const CONCOURSE_TRAFFIC: [(Concourse, u32); 7] = [
    (Concourse::T, 15_234),
    (Concourse::A, 18_765),
    (Concourse::B, 16_543),
    (Concourse::C, 19_876),
    (Concourse::D, 14_567),
    (Concourse::E, 12_345),
    (Concourse::F, 10_928),
];

/// Whether an hour gets the daytime boost (06:00 through 20:59).
#[must_use]
pub fn is_daytime(hour: u8) -> bool {
    (6..=20).contains(&hour)
}

/// Build one analytics snapshot from the given random source.
///
/// Only the hourly histogram is random; headline figures and concourse
/// traffic are fixed demo values.
pub fn generate_analytics<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Analytics {
    let hourly_traffic = (0..24u8)
        .map(|hour| {
            let base = rng.gen_range(HOURLY_MIN..HOURLY_MAX);
            let boost = if is_daytime(hour) { DAYTIME_BOOST } else { 0 };
            HourlyCount {
                hour,
                count: base + boost,
            }
        })
        .collect();

    let concourse_traffic = CONCOURSE_TRAFFIC
        .iter()
        .map(|&(concourse, count)| ConcourseCount { concourse, count })
        .collect();

    Analytics {
        timestamp: now,
        passenger_volume: 104_258,
        passenger_volume_change: 12,
        average_wait_time: 18,
        wait_time_change: -3,
        on_time_rate: 87.3,
        on_time_rate_change: 2.1,
        security_queue_time: 12,
        security_north_time: 8,
        security_south_time: 16,
        hourly_traffic,
        concourse_traffic,
    }
}

/// Thread-safe analytics source shared between a live feed and its timer.
#[derive(Debug)]
pub struct AnalyticsGenerator {
    rng: Mutex<StdRng>,
}

impl AnalyticsGenerator {
    /// A generator seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// A reproducible generator.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Seeded when a seed is configured, entropy-backed otherwise.
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }

    /// Produce a fresh snapshot stamped with the current time.
    pub fn generate(&self) -> Analytics {
        self.generate_at(Utc::now())
    }

    /// Produce a fresh snapshot stamped with `now`.
    pub fn generate_at(&self, now: DateTime<Utc>) -> Analytics {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let snapshot = generate_analytics(&mut *rng, now);
        tracing::debug!(timestamp = %snapshot.timestamp, "Generated analytics snapshot");
        snapshot
    }
}

impl Default for AnalyticsGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 14, 30, 0).unwrap()
    }

    #[test]
    fn test_histogram_covers_every_hour() {
        let analytics = AnalyticsGenerator::seeded(7).generate_at(fixed_time());
        assert_eq!(analytics.hourly_traffic.len(), 24);
        for (i, entry) in analytics.hourly_traffic.iter().enumerate() {
            assert_eq!(usize::from(entry.hour), i);
            assert!(entry.count >= HOURLY_MIN);
        }
    }

    #[test]
    fn test_daytime_hours_are_boosted() {
        let generator = AnalyticsGenerator::seeded(42);
        for _ in 0..20 {
            let analytics = generator.generate_at(fixed_time());
            for entry in &analytics.hourly_traffic {
                if is_daytime(entry.hour) {
                    assert!(entry.count >= HOURLY_MIN + DAYTIME_BOOST);
                    assert!(entry.count < HOURLY_MAX + DAYTIME_BOOST);
                } else {
                    assert!(entry.count < HOURLY_MAX);
                }
            }
        }
    }

    #[test]
    fn test_seeded_generators_agree() {
        let a = AnalyticsGenerator::seeded(99).generate_at(fixed_time());
        let b = AnalyticsGenerator::seeded(99).generate_at(fixed_time());
        assert_eq!(a, b);
    }

    #[test]
    fn test_fixed_headline_figures() {
        let analytics = AnalyticsGenerator::from_seed(None).generate_at(fixed_time());
        assert_eq!(analytics.timestamp, fixed_time());
        assert_eq!(analytics.passenger_volume, 104_258);
        assert_eq!(analytics.wait_time_change, -3);
        assert!((analytics.on_time_rate - 87.3).abs() < f64::EPSILON);
        assert_eq!(analytics.security_north_time, 8);
        assert_eq!(analytics.security_south_time, 16);
    }

    #[test]
    fn test_concourse_traffic_is_fixed() {
        let analytics = AnalyticsGenerator::seeded(1).generate_at(fixed_time());
        let counts: Vec<(Concourse, u32)> = analytics
            .concourse_traffic
            .iter()
            .map(|c| (c.concourse, c.count))
            .collect();
        assert_eq!(counts, CONCOURSE_TRAFFIC.to_vec());
    }

    #[test]
    fn test_is_daytime_bounds() {
        assert!(!is_daytime(5));
        assert!(is_daytime(6));
        assert!(is_daytime(20));
        assert!(!is_daytime(21));
    }
}
