//! HTTP server and API endpoints for the faucet relay.

use crate::{
    address::validate_wallet_address,
    config::RelayConfig,
    downstream::{ClaimOutcome, DownstreamClient},
    error::{RelayError, RelayResult},
};
use axum::{
    extract::{ConnectInfo, State},
    response::Json,
    routing::{get, post},
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

/// Shared application state
#[derive(Debug, Clone)]
pub struct SharedState {
    pub downstream: Arc<DownstreamClient>,
}

/// Health check response
#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Create the HTTP router with all endpoints
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/claim", post(claim).fallback(claim_method_not_allowed))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Root endpoint - provides basic information
async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": "Faucet Relay",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "POST /api/claim": "Request tokens for a wallet address (provide wallet_address)",
            "GET /health": "Health check",
        }
    }))
}

/// Health check endpoint
async fn health() -> Json<HealthResponse> {
    // The relay holds no state and probes nothing; if it answers, it is healthy.
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

/// Rejection handler for non-POST calls to the claim route.
///
/// Runs before any body inspection, so a bad method is reported even when the
/// body would also have failed validation.
async fn claim_method_not_allowed() -> RelayError {
    RelayError::MethodNotAllowed
}

/// Relay a faucet claim to the distribution service
async fn claim(
    State(state): State<SharedState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    body: Option<Json<serde_json::Value>>,
) -> RelayResult<ClaimOutcome> {
    // A missing body, a missing field, or a non-string field all count as an
    // invalid address; only the method check precedes this.
    let wallet_address = body
        .as_ref()
        .and_then(|Json(value)| value.get("wallet_address"))
        .and_then(|value| value.as_str())
        .ok_or_else(|| RelayError::InvalidAddress("missing wallet_address".to_string()))?;

    validate_wallet_address(wallet_address)?;

    info!("Claim request from {}: {}", addr.ip(), wallet_address);

    match state.downstream.submit_claim(wallet_address).await {
        Ok(outcome) => {
            info!(
                "Relayed claim for {}: downstream status {}",
                wallet_address, outcome.status
            );
            Ok(outcome)
        }
        Err(e) => {
            // Logged server-side only; the caller sees a generic failure.
            error!("Error processing faucet request for {}: {}", wallet_address, e);
            Err(e)
        }
    }
}

/// Start the HTTP server
pub async fn start_server(config: &RelayConfig) -> RelayResult<()> {
    info!("Starting faucet relay...");

    let downstream = Arc::new(DownstreamClient::new(&config.downstream)?);

    let shared_state = SharedState { downstream };

    let app = create_router(shared_state);

    let bind_addr = format!("{}:{}", config.http.bind_address, config.http.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await.map_err(|e| {
        RelayError::Internal(anyhow::anyhow!("Failed to bind to {}: {}", bind_addr, e))
    })?;

    info!("Faucet relay listening on {}", bind_addr);
    info!("Forwarding claims to {}", config.downstream.claim_url);
    info!("Endpoints:");
    info!("  GET  /           - Server information");
    info!("  GET  /health     - Health check");
    info!("  POST /api/claim  - Relay a faucet claim");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|e| RelayError::Internal(anyhow::anyhow!("Server error: {}", e)))?;

    Ok(())
}
