//! Plugin manifest advertising the webhook tool to chat clients.
//!
//! The manifest is rebuilt on every request from constants plus the public
//! base URL, so it never depends on anything mutable.

pub mod types;

use std::collections::BTreeMap;

pub use types::{Manifest, ManifestMeta, ParameterSchema, PropertySchema, ToolDescriptor};

/// Plugin identifier registered with the chat client.
pub const PLUGIN_IDENTIFIER: &str = "overnu-webhook";

/// Manifest format version.
pub const MANIFEST_VERSION: &str = "1";

/// Name of the single tool exposed by the plugin.
pub const TOOL_NAME: &str = "sendDataToWebhook";

/// Build the manifest, pointing the tool at `{public_base_url}/webhook`.
pub fn build_manifest(public_base_url: &str) -> Manifest {
    let mut properties = BTreeMap::new();
    properties.insert(
        "payload",
        PropertySchema {
            property_type: "string",
            description: "Data to send to OverNu",
        },
    );

    Manifest {
        identifier: PLUGIN_IDENTIFIER,
        version: MANIFEST_VERSION,
        meta: ManifestMeta {
            title: "OverNu Webhook Plugin",
            description: "Fully integrated plugin for sending data to OverNu (n8n)",
            avatar: "🚀",
            tags: vec!["webhook"],
        },
        api: vec![ToolDescriptor {
            name: TOOL_NAME,
            description: "Send data to OverNu from LobeChat",
            url: format!("{}/webhook", public_base_url),
            parameters: ParameterSchema {
                schema_type: "object",
                properties,
                required: vec!["payload"],
            },
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_manifest_document_shape() {
        let manifest = build_manifest("https://overnu.example.com");
        let value = serde_json::to_value(&manifest).unwrap();

        assert_eq!(
            value,
            json!({
                "identifier": "overnu-webhook",
                "version": "1",
                "meta": {
                    "title": "OverNu Webhook Plugin",
                    "description": "Fully integrated plugin for sending data to OverNu (n8n)",
                    "avatar": "🚀",
                    "tags": ["webhook"]
                },
                "api": [{
                    "name": "sendDataToWebhook",
                    "description": "Send data to OverNu from LobeChat",
                    "url": "https://overnu.example.com/webhook",
                    "parameters": {
                        "type": "object",
                        "properties": {
                            "payload": {
                                "type": "string",
                                "description": "Data to send to OverNu"
                            }
                        },
                        "required": ["payload"]
                    }
                }]
            })
        );
    }

    #[test]
    fn test_manifest_is_byte_stable() {
        let first = serde_json::to_vec(&build_manifest("http://localhost:8080")).unwrap();
        let second = serde_json::to_vec(&build_manifest("http://localhost:8080")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_manifest_serializes_identifier_first() {
        let rendered = serde_json::to_string(&build_manifest("http://localhost:8080")).unwrap();

        assert!(rendered.starts_with(r#"{"identifier":"overnu-webhook","version":"1","#));
    }
}
