//! localcast - current location, place name, and short-term forecast.
//!
//! This library wires a location provider and permission gate (platform
//! collaborators behind traits) to two remote lookups: Nominatim
//! reverse geocoding and the National Weather Service's two-step
//! point/forecast chain. Results are projected into independently
//! updated display regions; every failure becomes display text rather
//! than a propagated error.

pub mod config;
pub mod display;
pub mod error;
pub mod geocoding;
mod http;
pub mod location;
pub mod models;
pub mod screen;
pub mod weather;

// Re-export core types for public API
pub use config::LocalcastConfig;
pub use display::{Display, DisplayHandle, ScreenText};
pub use error::{FetchError, LocationError};
pub use geocoding::GeocodingClient;
pub use location::{
    Capability, LocationProvider, OpenPermissionGate, PermissionDecision, PermissionGate,
    StaticLocationProvider,
};
pub use models::{Coordinate, FormattedCoordinates};
pub use screen::{FetchState, LocationScreen};
pub use weather::{WeatherClient, WeatherReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
