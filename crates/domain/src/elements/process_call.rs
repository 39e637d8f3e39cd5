//! Process call beans.

use serde::{Deserialize, Serialize};

use crate::ids::RelationshipGuid;

use super::{ElementStub, ExtendedProperties};

/// One call edge between two processes in the lineage graph.
///
/// Built from a `ProcessCall` relationship: the caller is end one, the
/// called process is end two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessCall {
    pub guid: RelationshipGuid,
    pub caller: ElementStub,
    pub called: ElementStub,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualified_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_number: Option<i64>,
    #[serde(default, skip_serializing_if = "ExtendedProperties::is_empty")]
    pub extended_properties: ExtendedProperties,
}
