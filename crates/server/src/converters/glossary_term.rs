//! Glossary term conversion.

use lodestone_domain::elements::GlossaryTerm;
use lodestone_domain::type_registry::type_names;
use lodestone_domain::EntityDetail;

use super::{element_header, expect_entity_type, require_entity, ConvertError};

const METHOD: &str = "glossary_term::from_entity";

pub fn from_entity(entity: Option<&EntityDetail>) -> Result<GlossaryTerm, ConvertError> {
    let entity = require_entity(entity, type_names::GLOSSARY_TERM, METHOD)?;
    expect_entity_type(entity, type_names::GLOSSARY_TERM, METHOD)?;

    let mut properties = entity.properties.clone();
    Ok(GlossaryTerm {
        header: element_header(entity),
        qualified_name: properties.remove_string("qualifiedName"),
        display_name: properties.remove_string("displayName"),
        summary: properties.remove_string("summary"),
        description: properties.remove_string("description"),
        abbreviation: properties.remove_string("abbreviation"),
        usage: properties.remove_string("usage"),
        extended_properties: properties.into_extended_properties(),
    })
}
