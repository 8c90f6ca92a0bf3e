//! Configuration management for localcast
//!
//! Loads settings from an optional TOML file and LOCALCAST-prefixed
//! environment variables, with serde-supplied defaults for everything.

use anyhow::{Context, Result, ensure};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::models::Coordinate;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocalcastConfig {
    /// Fixed coordinates for the static location provider
    #[serde(default)]
    pub location: LocationConfig,
    /// Reverse-geocoding service settings
    #[serde(default)]
    pub geocoding: GeocodingConfig,
    /// Weather service settings
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Coordinates used as the last known location fix. Both must be set
/// for the static provider to report a fix at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Latitude in decimal degrees
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees
    pub longitude: Option<f64>,
}

/// Reverse-geocoding service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Base URL of the reverse-geocoding service
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

/// Weather service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Base URL of the weather service
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_geocoding_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_weather_base_url() -> String {
    "https://api.weather.gov".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LocalcastConfig {
    /// Load configuration, layering file and environment over defaults.
    ///
    /// Without an explicit path, a `localcast.toml` next to the working
    /// directory is used when present. Environment variables use the
    /// `LOCALCAST` prefix with `__` as the section separator, e.g.
    /// `LOCALCAST_LOCATION__LATITUDE`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let builder = match path {
            Some(path) => Config::builder().add_source(File::from(path.to_path_buf())),
            None => Config::builder().add_source(File::with_name("localcast").required(false)),
        };

        let settings = builder
            .add_source(Environment::with_prefix("LOCALCAST").separator("__"))
            .build()
            .context("failed to read configuration sources")?;

        let config: Self = settings
            .try_deserialize()
            .context("invalid configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Validate value ranges.
    pub fn validate(&self) -> Result<()> {
        if let Some(latitude) = self.location.latitude {
            ensure!(
                (-90.0..=90.0).contains(&latitude),
                "latitude must be between -90 and 90, got {latitude}"
            );
        }
        if let Some(longitude) = self.location.longitude {
            ensure!(
                (-180.0..=180.0).contains(&longitude),
                "longitude must be between -180 and 180, got {longitude}"
            );
        }
        ensure!(
            self.geocoding.timeout_seconds > 0 && self.weather.timeout_seconds > 0,
            "timeout_seconds must be positive"
        );
        Ok(())
    }

    /// Coordinates for the static location provider, if configured.
    #[must_use]
    pub fn fixed_coordinate(&self) -> Option<Coordinate> {
        match (self.location.latitude, self.location.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinate::new(latitude, longitude)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn defaults_are_sane() {
        let config = LocalcastConfig::default();
        assert_eq!(config.geocoding.base_url, "https://nominatim.openstreetmap.org");
        assert_eq!(config.weather.base_url, "https://api.weather.gov");
        assert_eq!(config.geocoding.timeout_seconds, 10);
        assert_eq!(config.logging.level, "info");
        assert!(config.fixed_coordinate().is_none());
        config.validate().unwrap();
    }

    #[test]
    fn deserializes_partial_toml() {
        let toml = r#"
            [location]
            latitude = 38.8977
            longitude = -77.0365

            [weather]
            timeout_seconds = 5
        "#;
        let config: LocalcastConfig = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        let coordinate = config.fixed_coordinate().unwrap();
        assert_eq!(coordinate.latitude, 38.8977);
        assert_eq!(coordinate.longitude, -77.0365);
        assert_eq!(config.weather.timeout_seconds, 5);
        // Untouched sections keep their defaults
        assert_eq!(config.geocoding.timeout_seconds, 10);
    }

    #[test]
    fn half_configured_location_is_no_fix() {
        let config = LocalcastConfig {
            location: LocationConfig {
                latitude: Some(38.9),
                longitude: None,
            },
            ..LocalcastConfig::default()
        };
        assert!(config.fixed_coordinate().is_none());
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        let config = LocalcastConfig {
            location: LocationConfig {
                latitude: Some(91.0),
                longitude: Some(0.0),
            },
            ..LocalcastConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
