//! Entity instances and proxies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{EntityGuid, TypeDefGuid};
use crate::instance::properties::{InstanceProperties, PropertyValue};
use crate::type_registry;

/// Type descriptor attached to every repository instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceType {
    pub type_def_guid: TypeDefGuid,
    pub type_name: String,
}

impl InstanceType {
    pub fn new(type_def_guid: TypeDefGuid, type_name: impl Into<String>) -> Self {
        Self {
            type_def_guid,
            type_name: type_name.into(),
        }
    }

    /// Inheritance-aware type check against the type registry.
    pub fn is_type_of(&self, candidate: &str) -> bool {
        type_registry::is_type_of(&self.type_name, candidate)
    }
}

/// Lifecycle status of a repository instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstanceStatus {
    Draft,
    Proposed,
    Active,
    Deleted,
    /// Unknown variant for forward compatibility
    #[serde(other)]
    Unknown,
}

/// A classification attached to an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub name: String,
    #[serde(default)]
    pub properties: InstanceProperties,
}

impl Classification {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: InstanceProperties::new(),
        }
    }

    pub fn with_properties(mut self, properties: InstanceProperties) -> Self {
        self.properties = properties;
        self
    }
}

/// A full entity record fetched from the metadata repository.
///
/// Read-only snapshot: fetched per request, converted, discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDetail {
    pub guid: EntityGuid,
    pub instance_type: InstanceType,
    pub status: InstanceStatus,
    #[serde(default)]
    pub properties: InstanceProperties,
    #[serde(default)]
    pub classifications: Vec<Classification>,
    pub create_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

impl EntityDetail {
    /// Project this entity down to the proxy form used on relationship ends.
    ///
    /// Only the unique properties (the qualified name, when present) travel
    /// with the proxy.
    pub fn as_proxy(&self) -> EntityProxy {
        let mut unique = InstanceProperties::new();
        if let Some(value) = self.properties.get(type_registry::property_names::QUALIFIED_NAME) {
            unique.set(type_registry::property_names::QUALIFIED_NAME, value.clone());
        }
        EntityProxy {
            guid: self.guid,
            instance_type: self.instance_type.clone(),
            unique_properties: unique,
        }
    }
}

/// Lightweight reference to an entity, carried on relationship ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityProxy {
    pub guid: EntityGuid,
    pub instance_type: InstanceType,
    #[serde(default)]
    pub unique_properties: InstanceProperties,
}

impl EntityProxy {
    /// The proxy's qualified name, when the repository supplied one.
    pub fn unique_name(&self) -> Option<&str> {
        self.unique_properties
            .get(type_registry::property_names::QUALIFIED_NAME)
            .and_then(PropertyValue::as_str)
    }
}
