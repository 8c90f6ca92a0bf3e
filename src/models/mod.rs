//! Data models for localcast
//!
//! Core domain models organized by concern:
//! - Location: raw coordinates and their display formatting
//! - Geocoding: the reverse-geocoding response and place-label rules
//! - Weather: the NWS point and forecast wire types

pub mod geocoding;
pub mod location;
pub mod weather;

// Re-export all public types for convenient access
pub use geocoding::{Address, ReverseGeocoding, UNKNOWN_PLACE};
pub use location::{Coordinate, FormattedCoordinates};
pub use weather::{
    Forecast, ForecastPeriod, ForecastProperties, PointProperties, PrecipitationChance,
    WeatherPoint,
};
