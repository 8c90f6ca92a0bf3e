//! Reverse geocoding: convert coordinates to a human-readable place name.
//!
//! Uses Nominatim (OpenStreetMap), which is free and needs no API key,
//! only an identifying User-Agent.

use anyhow::Result;
use tracing::{debug, instrument, warn};

use crate::config::GeocodingConfig;
use crate::error::FetchError;
use crate::http;
use crate::models::{FormattedCoordinates, ReverseGeocoding};

/// Label shown when the service answered but nothing usable came back.
const UNKNOWN: &str = "Unknown";
/// Label shown when the lookup failed at the network level.
const LOOKUP_FAILED: &str = "Error getting location";

/// Client for the `/reverse` endpoint.
#[derive(Debug, Clone)]
pub struct GeocodingClient {
    client: reqwest::Client,
    base_url: String,
}

impl GeocodingClient {
    /// Create a client for the configured service.
    pub fn new(config: &GeocodingConfig) -> Result<Self> {
        Ok(Self {
            client: http::build_client(config.timeout_seconds)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Reverse-geocode a formatted coordinate pair.
    #[instrument(skip(self), fields(lat = %coords.lat, lon = %coords.lon))]
    pub async fn reverse_geocode(
        &self,
        coords: &FormattedCoordinates,
    ) -> Result<ReverseGeocoding, FetchError> {
        let request = self
            .client
            .get(format!("{}/reverse", self.base_url))
            .query(&[
                ("lat", coords.lat.as_str()),
                ("lon", coords.lon.as_str()),
                ("format", "json"),
                ("addressdetails", "1"),
            ]);
        http::get_json(request).await
    }

    /// Resolve coordinates to the text for the place region.
    pub async fn place_label(&self, coords: &FormattedCoordinates) -> String {
        label_for(self.reverse_geocode(coords).await)
    }
}

/// Map a lookup outcome onto the user-facing label.
///
/// A reachable service that returned nothing usable reads "Unknown";
/// only a transport-level failure reads as an error.
fn label_for(outcome: Result<ReverseGeocoding, FetchError>) -> String {
    match outcome {
        Ok(response) => {
            let label = response.location_label();
            debug!(%label, "reverse geocoding succeeded");
            label
        }
        Err(FetchError::Api { status }) => {
            warn!(status, "reverse geocoding returned an error status");
            UNKNOWN.to_string()
        }
        Err(FetchError::EmptyBody) => {
            warn!("reverse geocoding returned an empty body");
            UNKNOWN.to_string()
        }
        Err(FetchError::Transport(message)) => {
            warn!(%message, "reverse geocoding request failed");
            LOOKUP_FAILED.to_string()
        }
    }
}
