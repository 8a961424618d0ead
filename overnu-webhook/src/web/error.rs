//! Error responses for the webhook endpoint.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::forward::ForwardError;
use crate::web::handlers::WebhookResponse;

#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("Missing payload")]
    MissingPayload,

    #[error("Invalid JSON body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error(transparent)]
    Forward(#[from] ForwardError),
}

/// Body of a 400 response.
#[derive(Debug, Serialize)]
pub struct ClientErrorResponse {
    pub error: String,
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingPayload => {
                warn!("webhook_missing_payload");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ClientErrorResponse {
                        error: self.to_string(),
                    }),
                )
                    .into_response()
            }
            Self::MalformedBody(_) | Self::Forward(_) => {
                error!(error = %self, "webhook_forward_failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(WebhookResponse::failed(self.to_string())),
                )
                    .into_response()
            }
        }
    }
}
