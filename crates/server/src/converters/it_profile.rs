//! IT profile conversion: fold a profile entity and its linked user
//! identities and contact methods into one bean graph.

use lodestone_domain::elements::{ItProfile, UserIdentity};
use lodestone_domain::type_registry::type_names;
use lodestone_domain::{EntityDetail, Relationship};

use super::{
    contact_method, element_header, expect_entity_type, require_entity, ConvertError,
};

const METHOD: &str = "it_profile::from_entity_cluster";

/// Fold an entity cluster into one profile bean.
///
/// Supplementary entities are classified by type-inheritance against the
/// registry and must be connected to the primary entity through a
/// relationship of the matching type. Unrecognized supplementary entities
/// and dangling relationships are skipped; input order of the
/// supplementary entities is preserved in the bean's list fields.
pub fn from_entity_cluster(
    primary: Option<&EntityDetail>,
    supplementary: &[EntityDetail],
    relationships: &[Relationship],
) -> Result<ItProfile, ConvertError> {
    let primary = require_entity(primary, type_names::IT_PROFILE, METHOD)?;
    expect_entity_type(primary, type_names::IT_PROFILE, METHOD)?;

    let mut properties = primary.properties.clone();
    let mut profile = ItProfile {
        header: element_header(primary),
        qualified_name: properties.remove_string("qualifiedName"),
        display_name: properties.remove_string("name"),
        description: properties.remove_string("description"),
        user_identities: Vec::new(),
        contact_methods: Vec::new(),
        extended_properties: properties.into_extended_properties(),
    };

    for entity in supplementary {
        let Some(link) = relationships
            .iter()
            .find(|rel| rel.connects(primary.guid) && rel.connects(entity.guid))
        else {
            continue;
        };

        if entity.instance_type.is_type_of(type_names::USER_IDENTITY)
            && link.instance_type.is_type_of(type_names::PROFILE_IDENTITY)
        {
            profile.user_identities.push(user_identity_from_entity(entity));
        } else if entity.instance_type.is_type_of(type_names::CONTACT_DETAILS)
            && link.instance_type.is_type_of(type_names::CONTACT_THROUGH)
        {
            profile.contact_methods.push(contact_method::from_entity(Some(entity))?);
        }
    }

    Ok(profile)
}

/// Each identity reads from its own property bag, never the profile's.
fn user_identity_from_entity(entity: &EntityDetail) -> UserIdentity {
    let mut properties = entity.properties.clone();
    UserIdentity {
        header: element_header(entity),
        qualified_name: properties.remove_string("qualifiedName"),
        user_id: properties.remove_string("userId"),
        distinguished_name: properties.remove_string("distinguishedName"),
        extended_properties: properties.into_extended_properties(),
    }
}
