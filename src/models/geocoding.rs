//! Reverse-geocoding response model (Nominatim)

use serde::Deserialize;

/// Label used when the response carried no usable place or state field.
pub const UNKNOWN_PLACE: &str = "Location unknown";

/// Body of a successful reverse lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct ReverseGeocoding {
    /// Full formatted address line from the service.
    pub display_name: String,
    /// Structured address parts; absent for some coordinates (open sea).
    pub address: Option<Address>,
}

/// Structured address fields. The service populates whichever apply to
/// the coordinate, so every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Address {
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub county: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postcode: Option<String>,
}

impl ReverseGeocoding {
    /// Derive the place label: the first populated of city/town/village,
    /// joined with the state when both are present.
    #[must_use]
    pub fn location_label(&self) -> String {
        let Some(address) = &self.address else {
            return UNKNOWN_PLACE.to_string();
        };

        let place = address
            .city
            .as_deref()
            .or(address.town.as_deref())
            .or(address.village.as_deref());

        match (place, address.state.as_deref()) {
            (Some(place), Some(state)) => format!("{place}, {state}"),
            (Some(place), None) => place.to_string(),
            (None, Some(state)) => state.to_string(),
            (None, None) => UNKNOWN_PLACE.to_string(),
        }
    }
}
