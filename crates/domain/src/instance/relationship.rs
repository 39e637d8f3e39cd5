//! Relationship instances.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{EntityGuid, RelationshipGuid};
use crate::instance::entity::{EntityProxy, InstanceStatus, InstanceType};
use crate::instance::properties::InstanceProperties;

/// A relationship record connecting two entities.
///
/// The two ends are proxies: enough identity to resolve the connected
/// entities without fetching them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub guid: RelationshipGuid,
    pub instance_type: InstanceType,
    pub status: InstanceStatus,
    #[serde(default)]
    pub properties: InstanceProperties,
    pub end_one: EntityProxy,
    pub end_two: EntityProxy,
    pub create_time: DateTime<Utc>,
}

impl Relationship {
    /// The requested end of the relationship.
    pub fn end(&self, use_end_one: bool) -> &EntityProxy {
        if use_end_one {
            &self.end_one
        } else {
            &self.end_two
        }
    }

    /// The proxy on the far side of the given entity, or `None` when the
    /// entity is not attached to this relationship at all.
    pub fn other_end(&self, guid: EntityGuid) -> Option<&EntityProxy> {
        if self.end_one.guid == guid {
            Some(&self.end_two)
        } else if self.end_two.guid == guid {
            Some(&self.end_one)
        } else {
            None
        }
    }

    /// Whether either end points at the given entity.
    pub fn connects(&self, guid: EntityGuid) -> bool {
        self.end_one.guid == guid || self.end_two.guid == guid
    }
}
