//! Asset summary conversion.

use lodestone_domain::elements::AssetSummary;
use lodestone_domain::type_registry::type_names;
use lodestone_domain::EntityDetail;

use super::{element_header, expect_entity_type, require_entity, ConvertError};

const METHOD: &str = "asset::from_entity";

pub fn from_entity(entity: Option<&EntityDetail>) -> Result<AssetSummary, ConvertError> {
    let entity = require_entity(entity, type_names::ASSET, METHOD)?;
    expect_entity_type(entity, type_names::ASSET, METHOD)?;

    let mut properties = entity.properties.clone();
    Ok(AssetSummary {
        header: element_header(entity),
        qualified_name: properties.remove_string("qualifiedName"),
        display_name: properties.remove_string("name"),
        description: properties.remove_string("description"),
        owner: properties.remove_string("owner"),
        zone_membership: properties
            .remove_string_array("zoneMembership")
            .unwrap_or_default(),
        extended_properties: properties.into_extended_properties(),
    })
}
