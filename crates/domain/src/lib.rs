//! Lodestone domain crate.
//!
//! The metadata instance model (entities, relationships, property bags),
//! the element beans returned to REST callers, typed guids, and the static
//! type registry. This crate has no I/O: everything here is plain data and
//! invariants.

pub mod elements;
pub mod error;
pub mod ids;
pub mod instance;
pub mod type_registry;

pub use error::DomainError;
pub use ids::{EntityGuid, RelationshipGuid, TypeDefGuid};
pub use instance::{
    Classification, EntityDetail, EntityProxy, InstanceProperties, InstanceStatus, InstanceType,
    PropertyValue, Relationship,
};
