//! IT profile beans: a profile entity folded together with its linked
//! user identities and contact methods.

use serde::{Deserialize, Serialize};

use super::{ContactMethod, ElementHeader, ExtendedProperties};

/// A login identity linked to a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub header: ElementHeader,
    pub qualified_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distinguished_name: Option<String>,
    #[serde(default, skip_serializing_if = "ExtendedProperties::is_empty")]
    pub extended_properties: ExtendedProperties,
}

/// Profile of an IT system actor, with the identities it signs on with and
/// the contact methods that reach its operators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItProfile {
    pub header: ElementHeader,
    pub qualified_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_identities: Vec<UserIdentity>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contact_methods: Vec<ContactMethod>,
    #[serde(default, skip_serializing_if = "ExtendedProperties::is_empty")]
    pub extended_properties: ExtendedProperties,
}
