//! Platform location collaborators: the provider and the permission gate.
//!
//! Both are consumed as contracts. The binary ships a configuration-
//! backed provider standing in for a device fix, and a gate that grants
//! everything; platform ports supply their own implementations.

use async_trait::async_trait;

use crate::error::LocationError;
use crate::models::Coordinate;

/// Location capabilities the gate can grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    FineLocation,
    CoarseLocation,
}

/// Outcome of an interactive permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionDecision {
    Granted,
    Denied,
}

/// Source of the device's last known position.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Yields `None` when the provider has no fix to offer.
    async fn last_known_location(&self) -> Result<Option<Coordinate>, LocationError>;
}

/// Gatekeeper for the location capability.
#[async_trait]
pub trait PermissionGate: Send + Sync {
    fn is_granted(&self, capability: Capability) -> bool;

    /// Ask the user. Resolves exactly once with a single decision.
    async fn request(&self, capabilities: &[Capability]) -> PermissionDecision;
}

/// Provider backed by configured coordinates.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticLocationProvider {
    coordinate: Option<Coordinate>,
}

impl StaticLocationProvider {
    #[must_use]
    pub fn new(coordinate: Option<Coordinate>) -> Self {
        Self { coordinate }
    }
}

#[async_trait]
impl LocationProvider for StaticLocationProvider {
    async fn last_known_location(&self) -> Result<Option<Coordinate>, LocationError> {
        Ok(self.coordinate)
    }
}

/// Gate that grants every capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenPermissionGate;

#[async_trait]
impl PermissionGate for OpenPermissionGate {
    fn is_granted(&self, _capability: Capability) -> bool {
        true
    }

    async fn request(&self, _capabilities: &[Capability]) -> PermissionDecision {
        PermissionDecision::Granted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_provider_reports_configured_fix() {
        let provider = StaticLocationProvider::new(Some(Coordinate::new(38.8977, -77.0365)));
        let fix = provider.last_known_location().await.unwrap().unwrap();
        assert_eq!(fix.latitude, 38.8977);
    }

    #[tokio::test]
    async fn static_provider_without_coordinates_has_no_fix() {
        let provider = StaticLocationProvider::default();
        assert!(provider.last_known_location().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn open_gate_grants_everything() {
        let gate = OpenPermissionGate;
        assert!(gate.is_granted(Capability::FineLocation));
        assert_eq!(
            gate.request(&[Capability::FineLocation]).await,
            PermissionDecision::Granted
        );
    }
}
