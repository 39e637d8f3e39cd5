//! Lineage graph beans.

use serde::{Deserialize, Serialize};

use crate::ids::RelationshipGuid;

use super::ElementStub;

/// One directed edge in a lineage graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineageEdge {
    pub guid: RelationshipGuid,
    pub relationship_type_name: String,
    pub source: ElementStub,
    pub target: ElementStub,
}

/// Bounded lineage neighborhood around one anchor element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineageGraph {
    pub anchor: ElementStub,
    /// Edges in breadth-first discovery order from the anchor.
    pub edges: Vec<LineageEdge>,
    /// True when the walk stopped at the depth bound with edges unexplored.
    pub truncated: bool,
}
