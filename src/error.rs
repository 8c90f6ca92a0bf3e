//! Error types for the localcast lookups.

use thiserror::Error;

/// Outcome classification for a single remote fetch.
///
/// Every HTTP call resolves to a success value or exactly one of these.
/// An error is terminal for the call it occurred in; it never aborts the
/// sibling lookup and is surfaced only as display text.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// Network-level failure: connect, timeout, or an unreadable body.
    #[error("network error: {0}")]
    Transport(String),

    /// The service answered with a non-success HTTP status.
    #[error("API error: HTTP {status}")]
    Api { status: u16 },

    /// The service answered 2xx but the body carried no usable data.
    #[error("empty response body")]
    EmptyBody,
}

/// Errors surfaced by the platform location collaborators.
#[derive(Debug, Clone, Error)]
pub enum LocationError {
    /// The permission gate refused the location capability.
    #[error("Location permission denied")]
    PermissionDenied,

    /// The provider failed to produce a fix.
    #[error("{0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_display() {
        assert_eq!(
            FetchError::Transport("connection refused".into()).to_string(),
            "network error: connection refused"
        );
        assert_eq!(
            FetchError::Api { status: 503 }.to_string(),
            "API error: HTTP 503"
        );
        assert_eq!(FetchError::EmptyBody.to_string(), "empty response body");
    }

    #[test]
    fn location_error_display() {
        assert_eq!(
            LocationError::PermissionDenied.to_string(),
            "Location permission denied"
        );
        // Unavailable renders the bare provider message so the status
        // line can embed it verbatim.
        assert_eq!(
            LocationError::Unavailable("GPS is off".into()).to_string(),
            "GPS is off"
        );
    }
}
