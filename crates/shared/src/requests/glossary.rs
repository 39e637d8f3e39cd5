//! Glossary request bodies.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Create a new glossary.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NewGlossaryRequest {
    #[validate(length(min = 1, message = "qualified name cannot be empty"))]
    pub qualified_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
}

/// Create a new term anchored to a glossary.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NewGlossaryTermRequest {
    #[validate(length(min = 1, message = "qualified name cannot be empty"))]
    pub qualified_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    /// Subtype properties stored verbatim on the new instance
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extended_properties: BTreeMap<String, String>,
}

/// Update an existing term.
///
/// With `is_replace` the supplied properties become the instance's whole
/// property bag; otherwise they merge over the existing bag.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateGlossaryTermRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "qualified name cannot be empty"))]
    pub qualified_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
}
