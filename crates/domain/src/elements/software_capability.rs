//! Software capability beans.

use serde::{Deserialize, Serialize};

use super::{ElementHeader, ExtendedProperties};

/// A deployed software capability (engine, integration daemon, API manager).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoftwareCapability {
    pub header: ElementHeader,
    pub qualified_name: Option<String>,
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
    #[serde(default, skip_serializing_if = "ExtendedProperties::is_empty")]
    pub extended_properties: ExtendedProperties,
}
