//! Configuration module for environment variable parsing.
//!
//! The destination URL and token are secrets, so they are only ever read from
//! the environment. Everything else has a default.

use std::env;
use tracing::warn;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the web server to listen on
    pub port: u16,

    /// Externally reachable base URL, advertised in the plugin manifest
    pub public_base_url: String,

    /// n8n webhook URL that receives forwarded payloads
    pub n8n_webhook_url: Option<String>,

    /// Token sent alongside every forwarded payload
    pub n8n_webhook_token: Option<String>,

    /// Outbound request timeout in milliseconds (none when unset)
    pub n8n_timeout_ms: Option<u64>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let port = parse_number("PORT").unwrap_or(8080);

        let public_base_url = non_empty("PUBLIC_BASE_URL")
            .map(|raw| normalize_base_url(&raw))
            .unwrap_or_else(|| format!("http://localhost:{}", port));

        Config {
            port,
            public_base_url,
            n8n_webhook_url: non_empty("N8N_WEBHOOK_URL"),
            n8n_webhook_token: non_empty("N8N_WEBHOOK_TOKEN"),
            n8n_timeout_ms: parse_timeout_ms("N8N_TIMEOUT_MS"),
        }
    }
}

/// Read a variable, treating blank values as unset.
///
/// The value is returned untrimmed; secrets are sent exactly as configured.
fn non_empty(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Parse a numeric variable, warning and ignoring it when malformed.
fn parse_number<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = non_empty(name)?;

    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(env_var = name, value = %raw, "Invalid number, using default");
            None
        }
    }
}

/// Parse a timeout in milliseconds. Zero would fail every request, so it is ignored.
fn parse_timeout_ms(name: &str) -> Option<u64> {
    match parse_number(name) {
        Some(0) => {
            warn!(env_var = name, "Zero timeout, leaving timeout unset");
            None
        }
        other => other,
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
