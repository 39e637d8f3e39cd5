//! Asset-catalog request bodies.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Register a new software capability in the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NewSoftwareCapabilityRequest {
    #[validate(length(min = 1, message = "qualified name cannot be empty"))]
    pub qualified_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capability_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capability_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Subtype properties stored verbatim on the new instance
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extended_properties: BTreeMap<String, String>,
}
