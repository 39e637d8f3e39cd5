//! Instance-to-bean converters.
//!
//! Each converter turns repository instances into one element bean. The
//! shared protocol: consume every modeled property from a working copy of
//! the instance's bag with `remove_*` calls, then sweep the remainder into
//! the bean's extended-properties map. A property is read exactly once —
//! nothing is duplicated, nothing is dropped.

pub mod asset;
pub mod contact_method;
pub mod element_stub;
pub mod glossary;
pub mod glossary_term;
pub mod it_profile;
pub mod process_call;
pub mod project;
pub mod related_asset;
pub mod software_capability;

use lodestone_domain::elements::{ElementClassification, ElementHeader};
use lodestone_domain::{EntityDetail, Relationship};

/// Failures raised while assembling a bean.
///
/// Both variants indicate the repository handed back something the service
/// did not ask for; they surface to callers as property-server faults.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("No metadata instance supplied for a {expected} conversion in {method}")]
    MissingInstance {
        expected: &'static str,
        method: &'static str,
    },
    #[error("Conversion in {method} expected a {expected} instance but received {actual}")]
    UnexpectedType {
        method: &'static str,
        expected: &'static str,
        actual: String,
    },
}

/// Unwrap a required entity, or report which conversion was starved.
pub(crate) fn require_entity<'a>(
    entity: Option<&'a EntityDetail>,
    expected: &'static str,
    method: &'static str,
) -> Result<&'a EntityDetail, ConvertError> {
    entity.ok_or(ConvertError::MissingInstance { expected, method })
}

/// Unwrap a required relationship.
pub(crate) fn require_relationship<'a>(
    relationship: Option<&'a Relationship>,
    expected: &'static str,
    method: &'static str,
) -> Result<&'a Relationship, ConvertError> {
    relationship.ok_or(ConvertError::MissingInstance { expected, method })
}

/// Inheritance-aware guard on the entity's type.
pub(crate) fn expect_entity_type(
    entity: &EntityDetail,
    expected: &'static str,
    method: &'static str,
) -> Result<(), ConvertError> {
    if entity.instance_type.is_type_of(expected) {
        Ok(())
    } else {
        Err(ConvertError::UnexpectedType {
            method,
            expected,
            actual: entity.instance_type.type_name.clone(),
        })
    }
}

/// Inheritance-aware guard on the relationship's type.
pub(crate) fn expect_relationship_type(
    relationship: &Relationship,
    expected: &'static str,
    method: &'static str,
) -> Result<(), ConvertError> {
    if relationship.instance_type.is_type_of(expected) {
        Ok(())
    } else {
        Err(ConvertError::UnexpectedType {
            method,
            expected,
            actual: relationship.instance_type.type_name.clone(),
        })
    }
}

/// Build the common header block from an entity.
pub(crate) fn element_header(entity: &EntityDetail) -> ElementHeader {
    ElementHeader {
        guid: entity.guid,
        type_name: entity.instance_type.type_name.clone(),
        classifications: entity
            .classifications
            .iter()
            .map(|classification| ElementClassification {
                name: classification.name.clone(),
                properties: classification.properties.clone().into_extended_properties(),
            })
            .collect(),
    }
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    //! Shared builders for converter tests.

    use chrono::{TimeZone, Utc};
    use lodestone_domain::type_registry::type_def;
    use lodestone_domain::{
        EntityDetail, EntityGuid, InstanceProperties, InstanceStatus, InstanceType, Relationship,
        RelationshipGuid, TypeDefGuid,
    };

    pub fn instance_type(type_name: &str) -> InstanceType {
        let guid = type_def(type_name)
            .map(|def| def.type_def_guid())
            .unwrap_or_else(TypeDefGuid::new);
        InstanceType::new(guid, type_name)
    }

    pub fn entity(type_name: &str, properties: InstanceProperties) -> EntityDetail {
        EntityDetail {
            guid: EntityGuid::new(),
            instance_type: instance_type(type_name),
            status: InstanceStatus::Active,
            properties,
            classifications: Vec::new(),
            create_time: Utc.with_ymd_and_hms(2026, 1, 20, 8, 0, 0).unwrap(),
            update_time: None,
        }
    }

    pub fn relationship(
        type_name: &str,
        end_one: &EntityDetail,
        end_two: &EntityDetail,
        properties: InstanceProperties,
    ) -> Relationship {
        Relationship {
            guid: RelationshipGuid::new(),
            instance_type: instance_type(type_name),
            status: InstanceStatus::Active,
            properties,
            end_one: end_one.as_proxy(),
            end_two: end_two.as_proxy(),
            create_time: Utc.with_ymd_and_hms(2026, 1, 20, 8, 0, 0).unwrap(),
        }
    }
}
