//! National Weather Service wire types
//!
//! The points endpoint answers with coordinate metadata whose useful
//! field is an absolute forecast URL; that URL is fetched as-is to get
//! the ordered forecast periods.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// Response of `GET /points/{lat},{lon}`.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherPoint {
    pub properties: PointProperties,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PointProperties {
    /// Absolute URL of the forecast resource. Opaque and service-owned;
    /// never assembled locally.
    pub forecast: String,
    #[serde(rename = "forecastHourly")]
    pub forecast_hourly: Option<String>,
    /// Issuing forecast office identifier.
    pub cwa: Option<String>,
    #[serde(rename = "radarStation")]
    pub radar_station: Option<String>,
}

/// Response of the forecast URL.
#[derive(Debug, Clone, Deserialize)]
pub struct Forecast {
    pub properties: ForecastProperties,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastProperties {
    /// Chronologically ordered; index 0 is the soonest/current period.
    pub periods: Vec<ForecastPeriod>,
}

/// One discrete forecast window ("Today", "Tonight", ...).
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastPeriod {
    pub number: i32,
    pub name: String,
    #[serde(rename = "startTime")]
    pub start_time: DateTime<FixedOffset>,
    #[serde(rename = "endTime")]
    pub end_time: DateTime<FixedOffset>,
    #[serde(rename = "isDaytime")]
    pub is_daytime: bool,
    pub temperature: i32,
    #[serde(rename = "temperatureUnit")]
    pub temperature_unit: String,
    #[serde(rename = "windSpeed")]
    pub wind_speed: String,
    #[serde(rename = "windDirection")]
    pub wind_direction: String,
    #[serde(rename = "shortForecast")]
    pub short_forecast: String,
    #[serde(rename = "detailedForecast")]
    pub detailed_forecast: String,
    #[serde(rename = "probabilityOfPrecipitation")]
    pub probability_of_precipitation: Option<PrecipitationChance>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PrecipitationChance {
    #[serde(rename = "unitCode")]
    pub unit_code: String,
    /// Percent 0-100; the service omits the value outside coverage windows.
    pub value: Option<i32>,
}
