//! Forwarding of plugin payloads to the n8n webhook.
//!
//! ```text
//! Chat client → POST /webhook → payload check → N8nClient::forward → n8n
//! ```

pub mod client;

use serde_json::Value;

pub use client::{ForwardError, N8nClient};

/// Pull a usable `payload` out of a parsed request body.
///
/// Returns `None` when the body is not an object, has no `payload`, or the
/// payload is falsy (`null`, `false`, `0`, `""`).
pub fn extract_payload(body: &Value) -> Option<&Value> {
    body.get("payload").filter(|payload| !is_falsy(payload))
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
