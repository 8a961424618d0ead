//! Plugin manifest document types.
//!
//! Field order here is the serialization order, so the rendered document is
//! byte-for-byte stable.

use std::collections::BTreeMap;

use serde::Serialize;

/// Top-level plugin manifest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Manifest {
    pub identifier: &'static str,
    pub version: &'static str,
    pub meta: ManifestMeta,
    pub api: Vec<ToolDescriptor>,
}

/// Display metadata shown by the calling chat client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManifestMeta {
    pub title: &'static str,
    pub description: &'static str,
    /// Emoji avatar
    pub avatar: &'static str,
    pub tags: Vec<&'static str>,
}

/// A callable tool advertised by the plugin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub url: String,
    pub parameters: ParameterSchema,
}

/// JSON-Schema-like description of the tool's arguments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterSchema {
    #[serde(rename = "type")]
    pub schema_type: &'static str,
    pub properties: BTreeMap<&'static str, PropertySchema>,
    pub required: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertySchema {
    #[serde(rename = "type")]
    pub property_type: &'static str,
    pub description: &'static str,
}
