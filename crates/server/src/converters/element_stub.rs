//! Element stub conversion: project one relationship end into a
//! lightweight reference.

use lodestone_domain::elements::ElementStub;
use lodestone_domain::{EntityProxy, Relationship};

/// Stub from a bare proxy.
pub fn from_proxy(proxy: &EntityProxy) -> ElementStub {
    ElementStub {
        guid: proxy.guid,
        type_name: proxy.instance_type.type_name.clone(),
        unique_name: proxy.unique_name().map(str::to_string),
    }
}

/// Stub from the chosen end of a relationship.
pub fn from_relationship_end(relationship: &Relationship, use_end_one: bool) -> ElementStub {
    from_proxy(relationship.end(use_end_one))
}

/// Batch conversion over relationships that may have gaps.
///
/// `None` entries are skipped; the survivors convert in input order. When
/// nothing converts the result is `None`, not an empty list — callers treat
/// both as "nothing found".
pub fn from_relationships(
    relationships: &[Option<Relationship>],
    use_end_one: bool,
) -> Option<Vec<ElementStub>> {
    let stubs: Vec<ElementStub> = relationships
        .iter()
        .flatten()
        .map(|relationship| from_relationship_end(relationship, use_end_one))
        .collect();
    if stubs.is_empty() {
        None
    } else {
        Some(stubs)
    }
}
