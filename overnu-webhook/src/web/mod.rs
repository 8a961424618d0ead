//! Web server module for the plugin endpoints.
//!
//! This module provides:
//! - `GET /manifest`: the plugin manifest
//! - `POST /webhook`: forwards a payload to n8n and relays the result
//! - `GET /health`: liveness probe
//!
//! The plugin routes are also mounted under `/api/plugins/overnu-webhook`.

pub mod error;
pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub use error::{ClientErrorResponse, WebhookError};
pub use handlers::{health, manifest, webhook, AppState, HealthResponse, WebhookResponse};

/// Path prefix the plugin was originally published under.
pub const PLUGIN_PREFIX: &str = "/api/plugins/overnu-webhook";

/// Build the application router.
pub fn build_app(state: AppState) -> Router {
    let plugin = Router::new()
        .route("/manifest", get(manifest))
        .route("/webhook", post(webhook));

    Router::new()
        .route("/health", get(health))
        .nest(PLUGIN_PREFIX, plugin.clone())
        .merge(plugin)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
