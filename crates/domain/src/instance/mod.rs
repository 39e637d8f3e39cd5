//! Generic repository instances: entities, relationships and their
//! property bags.

mod entity;
mod properties;
mod relationship;

pub use entity::{Classification, EntityDetail, EntityProxy, InstanceStatus, InstanceType};
pub use properties::{InstanceProperties, PropertyValue};
pub use relationship::Relationship;
