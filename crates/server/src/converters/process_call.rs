//! Process call conversion: a relationship projected into caller/called
//! stubs plus the call's own properties.

use lodestone_domain::elements::ProcessCall;
use lodestone_domain::type_registry::type_names;
use lodestone_domain::Relationship;

use super::{element_stub, expect_relationship_type, require_relationship, ConvertError};

const METHOD: &str = "process_call::from_relationship";

pub fn from_relationship(relationship: Option<&Relationship>) -> Result<ProcessCall, ConvertError> {
    let relationship = require_relationship(relationship, type_names::PROCESS_CALL, METHOD)?;
    expect_relationship_type(relationship, type_names::PROCESS_CALL, METHOD)?;

    let mut properties = relationship.properties.clone();
    Ok(ProcessCall {
        guid: relationship.guid,
        caller: element_stub::from_relationship_end(relationship, true),
        called: element_stub::from_relationship_end(relationship, false),
        qualified_name: properties.remove_string("qualifiedName"),
        description: properties.remove_string("description"),
        formula: properties.remove_string("formula"),
        line_number: properties.remove_int("lineNumber"),
        extended_properties: properties.into_extended_properties(),
    })
}
