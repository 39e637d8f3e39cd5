//! Glossary conversion.

use lodestone_domain::elements::Glossary;
use lodestone_domain::type_registry::type_names;
use lodestone_domain::EntityDetail;

use super::{element_header, expect_entity_type, require_entity, ConvertError};

const METHOD: &str = "glossary::from_entity";

pub fn from_entity(entity: Option<&EntityDetail>) -> Result<Glossary, ConvertError> {
    let entity = require_entity(entity, type_names::GLOSSARY, METHOD)?;
    expect_entity_type(entity, type_names::GLOSSARY, METHOD)?;

    let mut properties = entity.properties.clone();
    Ok(Glossary {
        header: element_header(entity),
        qualified_name: properties.remove_string("qualifiedName"),
        display_name: properties.remove_string("displayName"),
        description: properties.remove_string("description"),
        language: properties.remove_string("language"),
        usage: properties.remove_string("usage"),
        extended_properties: properties.into_extended_properties(),
    })
}
