//! Element beans returned to REST callers.
//!
//! Beans are built fresh by the server-side converters for every request
//! and serialized straight into the response envelope. Subtype properties
//! the bean does not model explicitly land in `extended_properties`.

mod asset;
mod contact_method;
mod glossary;
mod lineage;
mod process_call;
mod profile;
mod project;
mod related_asset;
mod software_capability;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ids::EntityGuid;

pub use asset::AssetSummary;
pub use contact_method::{ContactMethod, ContactMethodType};
pub use glossary::{Glossary, GlossaryTerm};
pub use lineage::{LineageEdge, LineageGraph};
pub use process_call::ProcessCall;
pub use profile::{ItProfile, UserIdentity};
pub use project::Project;
pub use related_asset::RelatedAsset;
pub use software_capability::SoftwareCapability;

/// Catch-all map for properties a bean does not model explicitly.
pub type ExtendedProperties = BTreeMap<String, serde_json::Value>;

/// Common identity block shared by every bean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementHeader {
    pub guid: EntityGuid,
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classifications: Vec<ElementClassification>,
}

/// A classification rendered for REST callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementClassification {
    pub name: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: ExtendedProperties,
}

/// Minimal projection of one relationship end.
///
/// Carries only what the proxy knew: identity, type, and the unique name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementStub {
    pub guid: EntityGuid,
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_name: Option<String>,
}
