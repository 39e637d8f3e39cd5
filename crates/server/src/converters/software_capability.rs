//! Software capability conversion.

use lodestone_domain::elements::SoftwareCapability;
use lodestone_domain::type_registry::type_names;
use lodestone_domain::EntityDetail;

use super::{element_header, expect_entity_type, require_entity, ConvertError};

const METHOD: &str = "software_capability::from_entity";

pub fn from_entity(entity: Option<&EntityDetail>) -> Result<SoftwareCapability, ConvertError> {
    let entity = require_entity(entity, type_names::SOFTWARE_CAPABILITY, METHOD)?;
    expect_entity_type(entity, type_names::SOFTWARE_CAPABILITY, METHOD)?;

    let mut properties = entity.properties.clone();
    Ok(SoftwareCapability {
        header: element_header(entity),
        qualified_name: properties.remove_string("qualifiedName"),
        display_name: properties.remove_string("name"),
        description: properties.remove_string("description"),
        capability_type: properties.remove_string("capabilityType"),
        capability_version: properties.remove_string("capabilityVersion"),
        patch_level: properties.remove_string("patchLevel"),
        source: properties.remove_string("source"),
        extended_properties: properties.into_extended_properties(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::test_fixtures::entity;
    use lodestone_domain::{InstanceProperties, PropertyValue};

    #[test]
    fn known_properties_map_and_the_rest_sweep_into_extended() {
        let source = entity(
            type_names::SOFTWARE_CAPABILITY,
            InstanceProperties::new()
                .with("qualifiedName", PropertyValue::string("db.schema.table"))
                .with("name", PropertyValue::string("table"))
                .with("unknownProp", PropertyValue::string("x")),
        );

        let bean = from_entity(Some(&source)).unwrap();
        assert_eq!(bean.qualified_name.as_deref(), Some("db.schema.table"));
        assert_eq!(bean.display_name.as_deref(), Some("table"));
        assert_eq!(bean.extended_properties.len(), 1);
        assert_eq!(
            bean.extended_properties.get("unknownProp"),
            Some(&serde_json::Value::String("x".to_string()))
        );
        // Consumed properties must not reappear in the extended bag
        assert!(!bean.extended_properties.contains_key("qualifiedName"));
        assert!(!bean.extended_properties.contains_key("name"));
    }

    #[test]
    fn subtypes_pass_the_type_guard() {
        let source = entity(
            type_names::SOFTWARE_SERVER_CAPABILITY,
            InstanceProperties::new()
                .with("qualifiedName", PropertyValue::string("cap::engine"))
                .with("capabilityType", PropertyValue::string("GovernanceEngine")),
        );
        let bean = from_entity(Some(&source)).unwrap();
        assert_eq!(bean.capability_type.as_deref(), Some("GovernanceEngine"));
    }

    #[test]
    fn missing_instance_is_its_own_error() {
        let err = from_entity(None).unwrap_err();
        assert!(matches!(err, ConvertError::MissingInstance { .. }));
    }

    #[test]
    fn wrong_type_is_rejected() {
        let source = entity(type_names::GLOSSARY_TERM, InstanceProperties::new());
        let err = from_entity(Some(&source)).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::UnexpectedType { expected: "SoftwareCapability", .. }
        ));
    }
}
