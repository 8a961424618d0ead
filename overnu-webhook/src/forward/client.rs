//! Outbound client for the n8n webhook.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::Config;

/// Failure of a single forward attempt.
///
/// The `Display` output is returned to the caller as-is.
#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("n8n request failed with status {0}")]
    Status(u16),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Body posted to the n8n webhook.
#[derive(Debug, Serialize)]
struct OutboundBody<'a> {
    payload: &'a Value,
    token: &'a str,
}

/// Shared handle for posting payloads to the n8n webhook.
///
/// Cheap to clone; the underlying reqwest client and credential are shared.
#[derive(Clone)]
pub struct N8nClient {
    http: Client,
    url: Url,
    token: Arc<str>,
}

impl N8nClient {
    /// Create a client for the given destination URL and token.
    pub fn new(url: &str, token: &str, timeout: Option<Duration>) -> Result<Self> {
        let url = Url::parse(url).context("Invalid n8n webhook URL")?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            url,
            token: Arc::from(token),
        })
    }

    /// Create a client from `N8N_WEBHOOK_URL`, `N8N_WEBHOOK_TOKEN` and `N8N_TIMEOUT_MS`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let url = config
            .n8n_webhook_url
            .as_deref()
            .context("N8N_WEBHOOK_URL must be set")?;
        let token = config
            .n8n_webhook_token
            .as_deref()
            .context("N8N_WEBHOOK_TOKEN must be set")?;

        Self::new(url, token, config.n8n_timeout_ms.map(Duration::from_millis))
    }

    /// Destination URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Post `{payload, token}` and return the response body as raw text.
    ///
    /// Any status outside 200-299 is an error. The body is not interpreted.
    pub async fn forward(&self, payload: &Value) -> Result<String, ForwardError> {
        let body = OutboundBody {
            payload,
            token: &self.token,
        };

        let n8n_host = self.url.host_str();
        tracing::info!(n8n_host = ?n8n_host, "n8n_request_starting");

        // The webhook path is a credential; keep it out of error text.
        let response = self
            .http
            .post(self.url.clone())
            .json(&body)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                n8n_host = ?n8n_host,
                status_code = status.as_u16(),
                "n8n_request_rejected"
            );
            return Err(ForwardError::Status(status.as_u16()));
        }

        let text = response
            .text()
            .await
            .map_err(reqwest::Error::without_url)?;

        tracing::info!(
            n8n_host = ?n8n_host,
            status_code = status.as_u16(),
            response_length = text.len(),
            "n8n_request_complete"
        );

        Ok(text)
    }
}
