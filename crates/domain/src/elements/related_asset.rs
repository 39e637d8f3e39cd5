//! Related asset beans.

use serde::{Deserialize, Serialize};

use crate::ids::RelationshipGuid;

use super::{AssetSummary, ExtendedProperties};

/// An asset reached by following one relationship from an anchor asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedAsset {
    pub relationship_guid: RelationshipGuid,
    pub relationship_type_name: String,
    pub asset: AssetSummary,
    #[serde(default, skip_serializing_if = "ExtendedProperties::is_empty")]
    pub relationship_properties: ExtendedProperties,
}
