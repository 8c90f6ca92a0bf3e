//! Short-term forecast lookup against the National Weather Service.
//!
//! Two chained calls: `points/{lat},{lon}` yields the forecast URL,
//! which is then fetched as-is for the periods. Only the first period
//! is projected into the display strings.

use anyhow::Result;
use tracing::{debug, info, instrument, warn};

use crate::config::WeatherConfig;
use crate::error::FetchError;
use crate::http;
use crate::models::{Forecast, ForecastPeriod, FormattedCoordinates, WeatherPoint};

/// Placeholder for the precipitation and wind regions on failure.
const PLACEHOLDER: &str = "--";

/// Display projection of one weather lookup: the three weather regions
/// plus the shared status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherReport {
    pub weather: String,
    pub precipitation: String,
    pub wind: String,
    pub status: String,
}

impl WeatherReport {
    fn failure(weather: &str, status: String) -> Self {
        Self {
            weather: format!("Weather: {weather}"),
            precipitation: format!("Precipitation: {PLACEHOLDER}"),
            wind: format!("Wind: {PLACEHOLDER}"),
            status,
        }
    }
}

/// Client for the NWS points and forecast endpoints.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: reqwest::Client,
    base_url: String,
}

impl WeatherClient {
    /// Create a client for the configured service.
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        Ok(Self {
            client: http::build_client(config.timeout_seconds)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the current forecast period and render it for display.
    ///
    /// Never fails: every outcome of either step becomes a report with
    /// its own status text.
    #[instrument(skip(self), fields(lat = %coords.lat, lon = %coords.lon))]
    pub async fn current_conditions(&self, coords: &FormattedCoordinates) -> WeatherReport {
        let point = match self.weather_point(coords).await {
            Ok(point) => point,
            Err(error) => {
                warn!(%error, "weather point lookup failed");
                return point_failure(&error);
            }
        };

        let forecast_url = point.properties.forecast;
        debug!(%forecast_url, "resolved forecast URL");
        forecast_report(self.forecast(&forecast_url).await)
    }

    /// Step 1: coordinate metadata.
    async fn weather_point(
        &self,
        coords: &FormattedCoordinates,
    ) -> Result<WeatherPoint, FetchError> {
        let url = format!("{}/points/{},{}", self.base_url, coords.lat, coords.lon);
        http::get_json(self.client.get(url)).await
    }

    /// Step 2: the periods, fetched from the service-provided URL as-is.
    async fn forecast(&self, url: &str) -> Result<Forecast, FetchError> {
        http::get_json(self.client.get(url)).await
    }
}

/// Report for a failed points lookup.
fn point_failure(error: &FetchError) -> WeatherReport {
    match error {
        FetchError::EmptyBody => WeatherReport::failure(
            "No data available",
            "Weather point data not available".to_string(),
        ),
        FetchError::Api { status } => {
            WeatherReport::failure("API error", format!("Weather API error: {status}"))
        }
        FetchError::Transport(message) => {
            WeatherReport::failure("Network error", format!("Weather network error: {message}"))
        }
    }
}

/// Report for the forecast lookup, success included.
fn forecast_report(outcome: Result<Forecast, FetchError>) -> WeatherReport {
    match outcome {
        Ok(forecast) => match forecast.properties.periods.first() {
            Some(period) => period_report(period),
            None => {
                warn!("forecast carried no periods");
                WeatherReport::failure(
                    "No forecast data",
                    "No forecast periods available".to_string(),
                )
            }
        },
        Err(FetchError::EmptyBody) => WeatherReport::failure(
            "No forecast available",
            "Forecast data not available".to_string(),
        ),
        Err(FetchError::Api { status }) => WeatherReport::failure(
            "Forecast API error",
            format!("Forecast API error: {status}"),
        ),
        Err(FetchError::Transport(message)) => WeatherReport::failure(
            "Forecast network error",
            format!("Forecast network error: {message}"),
        ),
    }
}

/// Render the current period.
fn period_report(period: &ForecastPeriod) -> WeatherReport {
    info!(
        temperature = period.temperature,
        forecast = %period.short_forecast,
        "forecast period received"
    );
    WeatherReport {
        weather: format!("Weather: {}", weather_line(period)),
        precipitation: format!("Precipitation: {}", precipitation_value(period)),
        wind: format!("Wind: {}", wind_line(period)),
        status: "All information updated successfully".to_string(),
    }
}

/// `<temperature>°<unit> - <shortForecast>`
fn weather_line(period: &ForecastPeriod) -> String {
    format!(
        "{}°{} - {}",
        period.temperature, period.temperature_unit, period.short_forecast
    )
}

/// Chance of precipitation as a percentage. An absent value reads "0%",
/// not "--": the field is the one place where missing data is treated
/// as zero rather than unknown.
fn precipitation_value(period: &ForecastPeriod) -> String {
    let chance = period
        .probability_of_precipitation
        .as_ref()
        .and_then(|p| p.value)
        .unwrap_or(0);
    format!("{chance}%")
}

/// `<windSpeed> <windDirection>`
fn wind_line(period: &ForecastPeriod) -> String {
    format!("{} {}", period.wind_speed, period.wind_direction)
}
