//! Location screen orchestration.
//!
//! One refresh cycle: confirm permission, read the provider, then fan
//! out the geocoding and weather lookups as independent tasks. Neither
//! lookup blocks the other and neither feeds back into the state
//! machine; each writes its own display regions as it completes.

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::display::DisplayHandle;
use crate::geocoding::GeocodingClient;
use crate::location::{Capability, LocationProvider, PermissionDecision, PermissionGate};
use crate::weather::WeatherClient;

/// Lifecycle of a location fetch. No state is terminal; a fresh refresh
/// is accepted from any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchState {
    /// No fetch issued yet
    #[default]
    Idle,
    /// Permission confirmed, provider queried
    Requesting,
    /// Coordinate obtained, lookups dispatched
    Resolved,
    /// The permission gate refused the capability
    Denied,
    /// The provider had no fix or failed
    Unavailable,
}

/// The screen: owns the display capability for the session and drives
/// the location, geocoding, and weather lookups.
pub struct LocationScreen<P, G> {
    provider: P,
    permissions: G,
    geocoder: GeocodingClient,
    weather: WeatherClient,
    display: DisplayHandle,
    state: FetchState,
    in_flight: Vec<JoinHandle<()>>,
}

impl<P, G> LocationScreen<P, G>
where
    P: LocationProvider,
    G: PermissionGate,
{
    pub fn new(
        provider: P,
        permissions: G,
        geocoder: GeocodingClient,
        weather: WeatherClient,
        display: DisplayHandle,
    ) -> Self {
        Self {
            provider,
            permissions,
            geocoder,
            weather,
            display,
            state: FetchState::Idle,
            in_flight: Vec::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> FetchState {
        self.state
    }

    /// Run one fetch cycle.
    ///
    /// Callable from any state. Lookups still in flight from an earlier
    /// cycle are not cancelled; their writes land last-writer-wins.
    pub async fn refresh(&mut self) {
        if !self.permissions.is_granted(Capability::FineLocation) {
            debug!("location permission not granted, requesting");
            let decision = self
                .permissions
                .request(&[Capability::FineLocation, Capability::CoarseLocation])
                .await;
            match decision {
                PermissionDecision::Granted => info!("location permission granted"),
                PermissionDecision::Denied => {
                    warn!("location permission denied");
                    self.state = FetchState::Denied;
                    self.display.set_status("Location permission denied");
                    return;
                }
            }
        }

        self.state = FetchState::Requesting;
        self.display.set_status("Getting location...");

        let coordinate = match self.provider.last_known_location().await {
            Ok(Some(coordinate)) => coordinate,
            Ok(None) => {
                warn!("location provider returned no fix");
                self.state = FetchState::Unavailable;
                self.display
                    .set_status("Unable to get location. Please try again.");
                return;
            }
            Err(error) => {
                warn!(%error, "location lookup failed");
                self.state = FetchState::Unavailable;
                self.display
                    .set_status(format!("Failed to get location: {error}"));
                return;
            }
        };

        self.state = FetchState::Resolved;
        let coords = coordinate.format();
        info!(lat = %coords.lat, lon = %coords.lon, "location resolved");

        self.display.set_latitude(format!("Latitude: {}", coords.lat));
        self.display
            .set_longitude(format!("Longitude: {}", coords.lon));
        self.display.set_status("Getting location info...");

        // Independent lookups; completion order is irrelevant and each
        // writes a disjoint set of regions (status excepted).
        let geocoder = self.geocoder.clone();
        let display = self.display.clone();
        let place_coords = coords.clone();
        self.in_flight.push(tokio::spawn(async move {
            let label = geocoder.place_label(&place_coords).await;
            display.set_place(format!("Location: {label}"));
        }));

        let weather = self.weather.clone();
        let display = self.display.clone();
        self.in_flight.push(tokio::spawn(async move {
            let report = weather.current_conditions(&coords).await;
            display.set_weather(report.weather);
            display.set_precipitation(report.precipitation);
            display.set_wind(report.wind);
            display.set_status(report.status);
        }));
    }

    /// Wait for outstanding lookups to finish.
    ///
    /// Shutdown and test sequencing only; the lookups never gate each
    /// other and the state machine does not depend on their completion.
    pub async fn settled(&mut self) {
        for handle in self.in_flight.drain(..) {
            if let Err(error) = handle.await {
                warn!(%error, "lookup task aborted");
            }
        }
    }
}
