//! Asset beans.

use serde::{Deserialize, Serialize};

use super::{ElementHeader, ExtendedProperties};

/// Summary view of a cataloged asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSummary {
    pub header: ElementHeader,
    pub qualified_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub zone_membership: Vec<String>,
    #[serde(default, skip_serializing_if = "ExtendedProperties::is_empty")]
    pub extended_properties: ExtendedProperties,
}
