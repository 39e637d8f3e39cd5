//! Related asset conversion: one relationship plus the entity on its far
//! end.

use lodestone_domain::elements::RelatedAsset;
use lodestone_domain::{EntityDetail, Relationship};

use super::{asset, require_relationship, ConvertError};

const METHOD: &str = "related_asset::from_relationship";

/// Fold a relationship and its far-end asset entity into one bean.
///
/// The relationship contributes its identity and properties; the asset
/// entity contributes the asset summary.
pub fn from_relationship(
    relationship: Option<&Relationship>,
    asset_entity: Option<&EntityDetail>,
) -> Result<RelatedAsset, ConvertError> {
    let relationship = require_relationship(relationship, "relationship", METHOD)?;
    let asset = asset::from_entity(asset_entity)?;

    Ok(RelatedAsset {
        relationship_guid: relationship.guid,
        relationship_type_name: relationship.instance_type.type_name.clone(),
        asset,
        relationship_properties: relationship.properties.clone().into_extended_properties(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::test_fixtures::{entity, relationship};
    use lodestone_domain::type_registry::type_names;
    use lodestone_domain::{InstanceProperties, PropertyValue};

    #[test]
    fn relationship_and_asset_fold_into_one_bean() {
        let anchor = entity(
            type_names::DATA_SET,
            InstanceProperties::new().with("qualifiedName", PropertyValue::string("ds::orders")),
        );
        let far = entity(
            type_names::PROCESS,
            InstanceProperties::new()
                .with("qualifiedName", PropertyValue::string("proc::load"))
                .with("name", PropertyValue::string("Load")),
        );
        let rel = relationship(
            type_names::DATA_FLOW,
            &anchor,
            &far,
            InstanceProperties::new().with("formula", PropertyValue::string("select *")),
        );

        let bean = from_relationship(Some(&rel), Some(&far)).unwrap();
        assert_eq!(bean.relationship_type_name, type_names::DATA_FLOW);
        assert_eq!(bean.asset.qualified_name.as_deref(), Some("proc::load"));
        assert_eq!(
            bean.relationship_properties.get("formula"),
            Some(&serde_json::Value::String("select *".to_string()))
        );
    }

    #[test]
    fn missing_relationship_is_reported() {
        let err = from_relationship(None, None).unwrap_err();
        assert!(matches!(err, ConvertError::MissingInstance { .. }));
    }
}
