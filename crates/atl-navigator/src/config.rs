//! Configuration management for atl-navigator.
//!
//! Configuration is assembled with figment from built-in defaults, an
//! optional TOML file and `ATLNAV_` environment variables.

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::map::ZoomLimits;
use crate::model::Concourse;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Directory under the platform config dir.
const APP_DIR_NAME: &str = "atl-navigator";

/// Prefix for environment overrides.
const ENV_PREFIX: &str = "ATLNAV_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `ATLNAV_`, sections separated by
///    `__`, e.g. `ATLNAV_REFRESH__FLIGHTS_INTERVAL_MS`)
/// 2. TOML config file at `<config dir>/atl-navigator/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Live data refresh timing.
    pub refresh: RefreshConfig,
    /// Carousel timing.
    pub carousel: CarouselConfig,
    /// Flight board layout.
    pub board: BoardConfig,
    /// Terminal map defaults.
    pub map: MapConfig,
    /// Mock data generation.
    pub data: DataConfig,
}

/// Refresh timing for the live views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    /// Flight board refresh period in milliseconds.
    pub flights_interval_ms: u64,
    /// Analytics refresh period in milliseconds.
    pub analytics_interval_ms: u64,
    /// Simulated latency of a manual refresh in milliseconds.
    pub simulated_delay_ms: u64,
}

/// Carousel timing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Auto-advance period of the features and testimonials carousels.
    pub interval_ms: u64,
    /// Rotation period of the hero search placeholder.
    pub placeholder_interval_ms: u64,
}

/// Flight board layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Rows per tab.
    pub max_rows: usize,
}

/// Terminal map defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Concourse shown when the map opens.
    pub default_concourse: Concourse,
    /// Smallest zoom factor.
    pub min_zoom: f64,
    /// Largest zoom factor.
    pub max_zoom: f64,
    /// Zoom change per step.
    pub zoom_step: f64,
}

/// Mock data generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Seed for the analytics generator; unset means entropy.
    pub seed: Option<u64>,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            flights_interval_ms: 120_000,
            analytics_interval_ms: 30_000,
            simulated_delay_ms: 1_000,
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: 6_000,
            placeholder_interval_ms: 4_000,
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self { max_rows: 12 }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        let zoom = ZoomLimits::default();
        Self {
            default_concourse: Concourse::A,
            min_zoom: zoom.min,
            max_zoom: zoom.max,
            zoom_step: zoom.step,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// A missing file is not an error; defaults and environment still apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        tracing::debug!(path = %config_file.display(), "Loaded configuration");
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(APP_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("flights_interval_ms", self.refresh.flights_interval_ms),
            ("analytics_interval_ms", self.refresh.analytics_interval_ms),
            ("interval_ms", self.carousel.interval_ms),
            (
                "placeholder_interval_ms",
                self.carousel.placeholder_interval_ms,
            ),
        ] {
            if value == 0 {
                return Err(invalid(format!("{name} must be greater than 0")));
            }
        }

        if self.board.max_rows == 0 {
            return Err(invalid("max_rows must be greater than 0"));
        }

        for (name, value) in [
            ("min_zoom", self.map.min_zoom),
            ("max_zoom", self.map.max_zoom),
            ("zoom_step", self.map.zoom_step),
        ] {
            if !value.is_finite() {
                return Err(invalid(format!("{name} must be a finite number")));
            }
        }

        if self.map.min_zoom <= 0.0 {
            return Err(invalid(format!(
                "min_zoom ({}) must be greater than 0",
                self.map.min_zoom
            )));
        }

        if self.map.min_zoom > self.map.max_zoom {
            return Err(invalid(format!(
                "min_zoom ({}) cannot be greater than max_zoom ({})",
                self.map.min_zoom, self.map.max_zoom
            )));
        }

        if self.map.zoom_step <= 0.0 {
            return Err(invalid("zoom_step must be greater than 0"));
        }

        Ok(())
    }

    /// Flight board refresh period.
    #[must_use]
    pub fn flights_interval(&self) -> Duration {
        Duration::from_millis(self.refresh.flights_interval_ms)
    }

    /// Analytics refresh period.
    #[must_use]
    pub fn analytics_interval(&self) -> Duration {
        Duration::from_millis(self.refresh.analytics_interval_ms)
    }

    /// Simulated latency of a manual refresh.
    #[must_use]
    pub fn refresh_delay(&self) -> Duration {
        Duration::from_millis(self.refresh.simulated_delay_ms)
    }

    /// Carousel auto-advance period.
    #[must_use]
    pub fn carousel_interval(&self) -> Duration {
        Duration::from_millis(self.carousel.interval_ms)
    }

    /// Search placeholder rotation period.
    #[must_use]
    pub fn placeholder_interval(&self) -> Duration {
        Duration::from_millis(self.carousel.placeholder_interval_ms)
    }

    /// Zoom bounds for the terminal map.
    #[must_use]
    pub fn zoom_limits(&self) -> ZoomLimits {
        ZoomLimits {
            min: self.map.min_zoom,
            max: self.map.max_zoom,
            step: self.map.zoom_step,
        }
    }
}

fn invalid(message: impl Into<String>) -> Error {
    Error::ConfigValidation {
        message: message.into(),
    }
}
