//! Coordinate model and display formatting

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair as read from the location provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

/// Coordinates rendered for API consumption: exactly four fractional
/// digits, `.` separator regardless of host locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedCoordinates {
    pub lat: String,
    pub lon: String,
}

impl Coordinate {
    /// Create a new coordinate pair
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Format both axes to four decimal places.
    ///
    /// The weather points endpoint redirects on higher precision, so this
    /// is the one precision used for every downstream request.
    #[must_use]
    pub fn format(&self) -> FormattedCoordinates {
        FormattedCoordinates {
            lat: format_axis(self.latitude),
            lon: format_axis(self.longitude),
        }
    }
}

/// Round to four fractional digits, ties away from zero.
fn format_axis(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    format!("{rounded:.4}")
}
