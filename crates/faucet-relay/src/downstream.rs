//! Client for the downstream token-distribution service.

use crate::config::DownstreamConfig;
use crate::error::RelayResult;
use axum::{http::StatusCode, response::IntoResponse, Json};
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Claim body forwarded to the distribution service
#[derive(Debug, Serialize, Deserialize)]
pub struct ClaimRequest {
    pub wallet_address: String,
}

/// Outcome of a completed downstream exchange.
///
/// The body is an opaque JSON value: the distribution service decides its own
/// response shapes (a `txHash` on success, an error/message field on failure)
/// and the relay passes them through verbatim, status code included.
#[derive(Debug, Clone)]
pub struct ClaimOutcome {
    pub status: u16,
    pub body: serde_json::Value,
}

impl ClaimOutcome {
    /// Whether the downstream reported success
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl IntoResponse for ClaimOutcome {
    fn into_response(self) -> axum::response::Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.body)).into_response()
    }
}

/// Client for forwarding claims to the distribution service
#[derive(Debug, Clone)]
pub struct DownstreamClient {
    http_client: Client,
    claim_url: String,
}

impl DownstreamClient {
    /// Create a new downstream client
    pub fn new(config: &DownstreamConfig) -> RelayResult<Self> {
        // Transport defaults apply: no timeout override, no retries.
        let http_client = Client::builder().build()?;

        Ok(Self {
            http_client,
            claim_url: config.claim_url.clone(),
        })
    }

    /// Forward a validated claim to the distribution service.
    ///
    /// Issues exactly one POST per call and awaits exactly one response or one
    /// transport failure. Concurrent callers are forwarded independently; the
    /// relay performs no deduplication per address.
    pub async fn submit_claim(&self, wallet_address: &str) -> RelayResult<ClaimOutcome> {
        let request = ClaimRequest {
            wallet_address: wallet_address.to_string(),
        };

        debug!("Forwarding claim for {} to {}", wallet_address, self.claim_url);

        let response = self
            .http_client
            .post(&self.claim_url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status().as_u16();

        // A downstream response that is not JSON is a broken exchange, not a
        // relayable outcome; the `?` surfaces it as a transport failure.
        let body = response.json::<serde_json::Value>().await?;

        debug!("Downstream responded with status {}", status);

        Ok(ClaimOutcome { status, body })
    }

    /// URL of the claim endpoint this client forwards to
    pub fn claim_url(&self) -> &str {
        &self.claim_url
    }
}
