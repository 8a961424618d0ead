//! Plugin endpoint handlers.
//!
//! The webhook handler does one outbound call per request and nothing else:
//! 1. Parse the body and pick out `payload`
//! 2. Forward it to n8n with the configured token
//! 3. Relay the raw n8n response text (or the failure message)

use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::forward::{extract_payload, N8nClient};
use crate::manifest::{build_manifest, Manifest};
use crate::web::error::WebhookError;
use crate::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub n8n: N8nClient,
}

impl AppState {
    pub fn new(config: Config, n8n: N8nClient) -> Self {
        Self {
            config: Arc::new(config),
            n8n,
        }
    }
}

// =============================================================================
// Health Check
// =============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// =============================================================================
// Manifest
// =============================================================================

/// Plugin manifest endpoint.
pub async fn manifest(State(state): State<AppState>) -> Json<Manifest> {
    Json(build_manifest(&state.config.public_base_url))
}

// =============================================================================
// Webhook
// =============================================================================

/// Outcome of a forward, serialized with both fields always present.
#[derive(Debug, Serialize)]
pub struct WebhookResponse {
    pub success: bool,
    pub error: Option<String>,
    #[serde(rename = "fromN8n")]
    pub from_n8n: Option<String>,
}

impl WebhookResponse {
    pub fn succeeded(from_n8n: String) -> Self {
        Self {
            success: true,
            error: None,
            from_n8n: Some(from_n8n),
        }
    }

    pub fn failed(error: String) -> Self {
        Self {
            success: false,
            error: Some(error),
            from_n8n: None,
        }
    }
}

/// Webhook endpoint.
///
/// The body is taken as raw bytes so a malformed body becomes a 500 failure
/// record rather than an extractor rejection.
pub async fn webhook(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<WebhookResponse>, WebhookError> {
    info!(body_length = body.len(), "webhook_received");

    let parsed: Value = serde_json::from_slice(&body)?;
    let payload = extract_payload(&parsed).ok_or(WebhookError::MissingPayload)?;

    let from_n8n = state.n8n.forward(payload).await?;

    info!(response_length = from_n8n.len(), "webhook_forwarded");

    Ok(Json(WebhookResponse::succeeded(from_n8n)))
}
