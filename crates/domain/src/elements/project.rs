//! Project beans.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ElementHeader, ExtendedProperties};

/// A project tracked in the metadata catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub header: ElementHeader,
    pub qualified_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned_end_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "ExtendedProperties::is_empty")]
    pub extended_properties: ExtendedProperties,
}
