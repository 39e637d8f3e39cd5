//! Project conversion.

use lodestone_domain::elements::Project;
use lodestone_domain::type_registry::type_names;
use lodestone_domain::EntityDetail;

use super::{element_header, expect_entity_type, require_entity, ConvertError};

const METHOD: &str = "project::from_entity";

pub fn from_entity(entity: Option<&EntityDetail>) -> Result<Project, ConvertError> {
    let entity = require_entity(entity, type_names::PROJECT, METHOD)?;
    expect_entity_type(entity, type_names::PROJECT, METHOD)?;

    let mut properties = entity.properties.clone();
    Ok(Project {
        header: element_header(entity),
        qualified_name: properties.remove_string("qualifiedName"),
        name: properties.remove_string("name"),
        identifier: properties.remove_string("identifier"),
        description: properties.remove_string("description"),
        status: properties.remove_string("projectStatus"),
        start_date: properties.remove_date("startDate"),
        planned_end_date: properties.remove_date("plannedEndDate"),
        extended_properties: properties.into_extended_properties(),
    })
}
