//! Analytics dashboard presentation: stat cards, charts and the count-up
//! animation.

use std::time::Duration;

use serde::Serialize;

use crate::model::{Analytics, Concourse};

/// First hour shown on the hourly chart.
pub const CHART_FIRST_HOUR: u8 = 6;
/// Last hour shown on the hourly chart.
pub const CHART_LAST_HOUR: u8 = 21;

/// Format an integer with comma thousands separators.
#[must_use]
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Direction of a stat card's change arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Zero or positive change.
    Up,
    /// Negative change.
    Down,
}

/// One headline figure on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    /// Card title.
    pub title: &'static str,
    /// Formatted value, e.g. `104,258` or `18 min`.
    pub value: String,
    /// Signed change shown next to the arrow.
    pub change: f64,
    /// Caption under the value.
    pub change_label: String,
}

impl StatCard {
    /// Arrow direction.
    #[must_use]
    pub fn trend(&self) -> Trend {
        if self.change >= 0.0 {
            Trend::Up
        } else {
            Trend::Down
        }
    }

    /// Unsigned change with a percent sign, e.g. `2.1%`.
    #[must_use]
    pub fn change_text(&self) -> String {
        format!("{}%", self.change.abs())
    }

    /// The count-up animation for this card's value.
    #[must_use]
    pub fn count_up(&self) -> CountUp {
        CountUp::new(&self.value)
    }
}

/// The four headline cards, in display order.
#[must_use]
pub fn stat_cards(analytics: &Analytics) -> Vec<StatCard> {
    vec![
        StatCard {
            title: "Passenger Volume",
            value: format_thousands(u64::from(analytics.passenger_volume)),
            change: f64::from(analytics.passenger_volume_change),
            change_label: "vs yesterday".to_string(),
        },
        StatCard {
            title: "Average Wait Time",
            value: format!("{} min", analytics.average_wait_time),
            // Shorter waits read as improvement.
            change: -f64::from(analytics.wait_time_change),
            change_label: "improvement".to_string(),
        },
        StatCard {
            title: "On-Time Performance",
            value: format!("{}%", analytics.on_time_rate),
            change: analytics.on_time_rate_change,
            change_label: "vs last week".to_string(),
        },
        StatCard {
            title: "Security Queue",
            value: format!("{} min", analytics.security_queue_time),
            change: -2.0,
            change_label: format!(
                "North: {}min, South: {}min",
                analytics.security_north_time, analytics.security_south_time
            ),
        },
    ]
}

/// Clock-style hour label: `6a`, `12p`, `9p`.
#[must_use]
pub fn hour_label(hour: u8) -> String {
    let twelve = match hour % 12 {
        0 => 12,
        h => h,
    };
    let meridiem = if hour < 12 { 'a' } else { 'p' };
    format!("{twelve}{meridiem}")
}

/// Long hour label: `5:00 PM`.
#[must_use]
pub fn hour_clock_label(hour: u8) -> String {
    let twelve = match hour % 12 {
        0 => 12,
        h => h,
    };
    let meridiem = if hour < 12 { "AM" } else { "PM" };
    format!("{twelve}:00 {meridiem}")
}

/// One bar of the hourly traffic chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyBar {
    /// Hour of day.
    pub hour: u8,
    /// Axis label.
    pub label: String,
    /// Passenger count.
    pub count: u32,
    /// Bar height as a percentage of the tallest bar.
    pub height: f64,
    /// Whether this is the current hour.
    pub current: bool,
}

/// Bars for 06:00 through 21:00, scaled to the busiest hour in that window.
#[must_use]
pub fn hourly_chart(analytics: &Analytics, current_hour: u8) -> Vec<HourlyBar> {
    let window: Vec<_> = analytics
        .hourly_traffic
        .iter()
        .filter(|e| (CHART_FIRST_HOUR..=CHART_LAST_HOUR).contains(&e.hour))
        .collect();
    let max = window.iter().map(|e| e.count).max().unwrap_or(0);

    window
        .into_iter()
        .map(|entry| HourlyBar {
            hour: entry.hour,
            label: hour_label(entry.hour),
            count: entry.count,
            height: percent_of(entry.count, max),
            current: entry.hour == current_hour,
        })
        .collect()
}

/// One bar of the concourse traffic chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConcourseBar {
    /// The concourse.
    pub concourse: Concourse,
    /// Row label, e.g. `Concourse C`.
    pub label: &'static str,
    /// Passenger count.
    pub count: u32,
    /// Count with thousands separators.
    pub count_text: String,
    /// Bar width as a percentage of the busiest concourse.
    pub width: f64,
}

/// Bars for every concourse, scaled to the busiest one.
#[must_use]
pub fn concourse_chart(analytics: &Analytics) -> Vec<ConcourseBar> {
    let max = analytics
        .concourse_traffic
        .iter()
        .map(|c| c.count)
        .max()
        .unwrap_or(0);
    analytics
        .concourse_traffic
        .iter()
        .map(|c| ConcourseBar {
            concourse: c.concourse,
            label: c.concourse.name(),
            count: c.count,
            count_text: format_thousands(u64::from(c.count)),
            width: percent_of(c.count, max),
        })
        .collect()
}

/// The concourse with the most passengers.
#[must_use]
pub fn busiest_concourse(analytics: &Analytics) -> Option<Concourse> {
    analytics
        .concourse_traffic
        .iter()
        .max_by_key(|c| c.count)
        .map(|c| c.concourse)
}

fn percent_of(count: u32, max: u32) -> f64 {
    if max == 0 {
        0.0
    } else {
        f64::from(count) / f64::from(max) * 100.0
    }
}

/// The stat-card count-up animation.
///
/// The numeric part of a display value climbs from zero in equal steps; each
/// intermediate frame shows the floored running value with thousands
/// separators followed by the value's suffix, and the final frame is the
/// display value itself.
#[derive(Debug, Clone, PartialEq)]
pub struct CountUp {
    target: String,
    number: f64,
    suffix: String,
}

impl CountUp {
    /// Number of frames.
    pub const STEPS: u32 = 60;
    /// Total animation time.
    pub const DURATION: Duration = Duration::from_millis(1500);

    /// Parse a display value such as `104,258`, `18 min` or `87.3%`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        let numeric: String = value
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        let suffix_start = value
            .rfind(|c: char| c.is_ascii_digit())
            .map_or(0, |i| i + 1);
        Self {
            target: value.to_string(),
            number: numeric.parse().unwrap_or(0.0),
            suffix: value[suffix_start..].to_string(),
        }
    }

    /// Time between frames.
    #[must_use]
    pub fn frame_interval() -> Duration {
        Self::DURATION / Self::STEPS
    }

    /// Frame `step` of `1..=STEPS`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn frame(&self, step: u32) -> String {
        if step >= Self::STEPS {
            return self.target.clone();
        }
        let running = self.number * f64::from(step) / f64::from(Self::STEPS);
        format!("{}{}", format_thousands(running.floor() as u64), self.suffix)
    }

    /// Every frame in order; the last one is the display value.
    #[must_use]
    pub fn frames(&self) -> Vec<String> {
        (1..=Self::STEPS).map(|step| self.frame(step)).collect()
    }

    /// Play the animation, handing each frame to `render` on schedule.
    pub async fn play<F>(&self, mut render: F)
    where
        F: FnMut(&str),
    {
        let mut ticker = tokio::time::interval(Self::frame_interval());
        // The first tick completes immediately.
        ticker.tick().await;
        for step in 1..=Self::STEPS {
            ticker.tick().await;
            render(&self.frame(step));
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::data::AnalyticsGenerator;

    fn analytics() -> Analytics {
        AnalyticsGenerator::seeded(3).generate_at(Utc.with_ymd_and_hms(2024, 5, 1, 14, 0, 0).unwrap())
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(104_258), "104,258");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_stat_cards() {
        let cards = stat_cards(&analytics());
        assert_eq!(cards.len(), 4);

        assert_eq!(cards[0].value, "104,258");
        assert_eq!(cards[0].change_text(), "12%");
        assert_eq!(cards[0].trend(), Trend::Up);

        assert_eq!(cards[1].value, "18 min");
        assert!((cards[1].change - 3.0).abs() < f64::EPSILON);
        assert_eq!(cards[1].change_label, "improvement");

        assert_eq!(cards[2].value, "87.3%");
        assert_eq!(cards[2].change_text(), "2.1%");

        assert_eq!(cards[3].value, "12 min");
        assert_eq!(cards[3].trend(), Trend::Down);
        assert_eq!(cards[3].change_label, "North: 8min, South: 16min");
    }

    #[test]
    fn test_hour_labels() {
        assert_eq!(hour_label(6), "6a");
        assert_eq!(hour_label(12), "12p");
        assert_eq!(hour_label(0), "12a");
        assert_eq!(hour_label(21), "9p");
        assert_eq!(hour_clock_label(17), "5:00 PM");
    }

    #[test]
    fn test_hourly_chart_window() {
        let bars = hourly_chart(&analytics(), 14);
        assert_eq!(bars.len(), 16);
        assert_eq!(bars[0].hour, 6);
        assert_eq!(bars[15].hour, 21);
        assert_eq!(bars.iter().filter(|b| b.current).count(), 1);
        assert!(bars.iter().any(|b| (b.height - 100.0).abs() < f64::EPSILON));
        assert!(bars.iter().all(|b| b.height > 0.0 && b.height <= 100.0));
    }

    #[test]
    fn test_hourly_chart_outside_window_flags_nothing() {
        let bars = hourly_chart(&analytics(), 3);
        assert!(bars.iter().all(|b| !b.current));
    }

    #[test]
    fn test_concourse_chart() {
        let analytics = analytics();
        let bars = concourse_chart(&analytics);
        assert_eq!(bars.len(), 7);
        let c = bars.iter().find(|b| b.concourse == Concourse::C).unwrap();
        assert!((c.width - 100.0).abs() < f64::EPSILON);
        assert_eq!(c.count_text, "19,876");
        assert_eq!(c.label, "Concourse C");
        assert_eq!(busiest_concourse(&analytics), Some(Concourse::C));
    }

    #[test]
    fn test_count_up_frames() {
        let count_up = CountUp::new("104,258");
        let frames = count_up.frames();
        assert_eq!(frames.len(), 60);
        assert_eq!(frames[0], "1,737");
        assert_eq!(frames[59], "104,258");

        let minutes = CountUp::new("18 min").frames();
        assert_eq!(minutes[29], "9 min");
        assert_eq!(minutes[59], "18 min");

        let percent = CountUp::new("87.3%");
        assert_eq!(percent.frame(30), "43%");
        assert_eq!(percent.frame(60), "87.3%");
        assert_eq!(CountUp::frame_interval(), Duration::from_millis(25));
    }

    #[tokio::test(start_paused = true)]
    async fn test_count_up_play() {
        let start = tokio::time::Instant::now();
        let mut seen = Vec::new();
        CountUp::new("18 min")
            .play(|frame| seen.push(frame.to_string()))
            .await;
        assert_eq!(seen.len(), 60);
        assert_eq!(seen.last().map(String::as_str), Some("18 min"));
        assert_eq!(start.elapsed(), CountUp::DURATION);
    }
}
