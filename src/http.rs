//! Shared HTTP plumbing for the remote lookups.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::FetchError;

/// Identifying header sent on every request. Nominatim requires a
/// User-Agent with contact information.
pub(crate) const USER_AGENT: &str = "localcast/0.1.0 (contact@example.com)";

/// Build a client with the fixed identity and a per-request timeout.
pub(crate) fn build_client(timeout_seconds: u64) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent(USER_AGENT)
        .build()
        .context("failed to create HTTP client")
}

/// Send a GET request and decode the response into `T`.
pub(crate) async fn get_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, FetchError> {
    let response = request
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;
    read_json(response).await
}

/// Classify and decode a response.
///
/// Non-2xx is `Api`; 2xx with an empty or `null` body is `EmptyBody`.
/// A body the decoder rejects is reported as `Transport`, the same path
/// that delivers connect and timeout failures.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Api {
            status: status.as_u16(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed == "null" {
        debug!("response body carried no payload");
        return Err(FetchError::EmptyBody);
    }

    serde_json::from_str(trimmed)
        .map_err(|e| FetchError::Transport(format!("unreadable response: {e}")))
}
