//! Contact method conversion.

use lodestone_domain::elements::{ContactMethod, ContactMethodType};
use lodestone_domain::type_registry::type_names;
use lodestone_domain::EntityDetail;

use super::{element_header, expect_entity_type, require_entity, ConvertError};

const METHOD: &str = "contact_method::from_entity";

pub fn from_entity(entity: Option<&EntityDetail>) -> Result<ContactMethod, ConvertError> {
    let entity = require_entity(entity, type_names::CONTACT_DETAILS, METHOD)?;
    expect_entity_type(entity, type_names::CONTACT_DETAILS, METHOD)?;

    let mut properties = entity.properties.clone();
    let method_type = properties
        .remove_enum_ordinal("contactMethodType")
        .map(ContactMethodType::from_ordinal)
        .unwrap_or_default();

    Ok(ContactMethod {
        header: element_header(entity),
        method_type,
        service: properties.remove_string("contactMethodService"),
        value: properties.remove_string("contactMethodValue"),
        extended_properties: properties.into_extended_properties(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::test_fixtures::entity;
    use lodestone_domain::{InstanceProperties, PropertyValue};

    fn contact_entity(ordinal: i32) -> lodestone_domain::EntityDetail {
        entity(
            type_names::CONTACT_DETAILS,
            InstanceProperties::new()
                .with("contactMethodType", PropertyValue::enumeration(ordinal, "?"))
                .with("contactMethodService", PropertyValue::string("smtp"))
                .with("contactMethodValue", PropertyValue::string("ops@example.org")),
        )
    }

    #[test]
    fn known_ordinal_maps_to_its_symbol() {
        let bean = from_entity(Some(&contact_entity(0))).unwrap();
        assert_eq!(bean.method_type, ContactMethodType::Email);
        assert_eq!(bean.service.as_deref(), Some("smtp"));
        assert_eq!(bean.value.as_deref(), Some("ops@example.org"));
        assert!(bean.extended_properties.is_empty());
    }

    #[test]
    fn unknown_ordinal_maps_to_other_instead_of_failing() {
        let bean = from_entity(Some(&contact_entity(42))).unwrap();
        assert_eq!(bean.method_type, ContactMethodType::Other);
    }

    #[test]
    fn absent_enum_property_defaults_to_other() {
        let source = entity(type_names::CONTACT_DETAILS, InstanceProperties::new());
        let bean = from_entity(Some(&source)).unwrap();
        assert_eq!(bean.method_type, ContactMethodType::Other);
    }
}
