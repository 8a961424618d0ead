//! OverNu webhook plugin.
//!
//! A chat-client plugin with two endpoints:
//! - `GET /manifest`: describes the `sendDataToWebhook` tool
//! - `POST /webhook`: forwards the tool's `payload` to an n8n workflow
//!
//! ## Flow
//!
//! ```text
//! Chat client → /webhook → N8nClient → n8n → raw text → { success, fromN8n }
//! ```

pub mod config;
pub mod forward;
pub mod manifest;
pub mod web;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use config::Config;
pub use forward::{ForwardError, N8nClient};
pub use manifest::{build_manifest, Manifest};
pub use web::{build_app, AppState};
