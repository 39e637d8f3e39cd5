//! In-memory metadata repository adapter.
//!
//! Backs local mode and the test suites. Instances live in concurrent maps;
//! reads hide soft-deleted instances, purges cascade to attached
//! relationships. History (`as_of_time`) is not kept: point-in-time filters
//! are ignored.

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

use lodestone_domain::type_registry;
use lodestone_domain::{
    EntityDetail, EntityGuid, InstanceProperties, InstanceStatus, PropertyValue, Relationship,
    RelationshipGuid,
};
use lodestone_shared::paging::{PageRequest, SearchFilter, Sequencing, SequencingOrder};

use super::clock::ClockPort;
use super::ports::{MetadataRepository, RepoError};

pub struct InMemoryRepository {
    entities: DashMap<EntityGuid, EntityDetail>,
    relationships: DashMap<RelationshipGuid, Relationship>,
    denied_users: Vec<String>,
    clock: Arc<dyn ClockPort>,
}

impl InMemoryRepository {
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        Self {
            entities: DashMap::new(),
            relationships: DashMap::new(),
            denied_users: Vec::new(),
            clock,
        }
    }

    /// Configure callers the adapter refuses outright. Lets local mode and
    /// tests exercise the not-authorized path without a security connector.
    pub fn with_denied_users(mut self, denied_users: Vec<String>) -> Self {
        self.denied_users = denied_users;
        self
    }

    fn authorize(&self, user_id: &str, operation: &str) -> Result<(), RepoError> {
        if self.denied_users.iter().any(|denied| denied == user_id) {
            return Err(RepoError::NotAuthorized {
                user_id: user_id.to_string(),
                operation: operation.to_string(),
            });
        }
        Ok(())
    }

    fn active_entities_of_type(&self, type_name: &str) -> Vec<EntityDetail> {
        self.entities
            .iter()
            .filter(|entry| {
                entry.status == InstanceStatus::Active
                    && type_registry::is_type_of(&entry.instance_type.type_name, type_name)
            })
            .map(|entry| entry.value().clone())
            .collect()
    }
}

/// Order a result set in place.
///
/// `Any` is repository-chosen; this adapter picks guid order so paging
/// stays stable across calls.
fn sequence(mut entities: Vec<EntityDetail>, sequencing: &Sequencing) -> Vec<EntityDetail> {
    match sequencing.order {
        SequencingOrder::Any | SequencingOrder::Guid => {
            entities.sort_by_key(|e| e.guid);
        }
        SequencingOrder::CreationDateRecent => {
            entities.sort_by_key(|e| (std::cmp::Reverse(e.create_time), e.guid));
        }
        SequencingOrder::CreationDateOldest => {
            entities.sort_by_key(|e| (e.create_time, e.guid));
        }
        SequencingOrder::Property => {
            let property = sequencing.property.clone().unwrap_or_default();
            entities.sort_by_key(|e| {
                let value = e
                    .properties
                    .get(&property)
                    .and_then(PropertyValue::as_str)
                    .map(str::to_string);
                // Entities without the property sort last
                (value.is_none(), value, e.guid)
            });
        }
    }
    entities
}

fn matches_search(entity: &EntityDetail, filter: &SearchFilter) -> bool {
    let needle = filter.search_criteria.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    entity.properties.iter().any(|(_, value)| match value {
        PropertyValue::String { value } => value.to_lowercase().contains(&needle),
        _ => false,
    })
}

#[async_trait]
impl MetadataRepository for InMemoryRepository {
    async fn add_entity(
        &self,
        user_id: &str,
        entity: EntityDetail,
    ) -> Result<EntityDetail, RepoError> {
        self.authorize(user_id, "add_entity")?;
        self.entities.insert(entity.guid, entity.clone());
        Ok(entity)
    }

    async fn get_entity(
        &self,
        user_id: &str,
        guid: EntityGuid,
    ) -> Result<Option<EntityDetail>, RepoError> {
        self.authorize(user_id, "get_entity")?;
        Ok(self
            .entities
            .get(&guid)
            .filter(|entity| entity.status == InstanceStatus::Active)
            .map(|entity| entity.value().clone()))
    }

    async fn get_entities_by_type(
        &self,
        user_id: &str,
        type_name: &str,
        paging: PageRequest,
        sequencing: &Sequencing,
    ) -> Result<Vec<EntityDetail>, RepoError> {
        self.authorize(user_id, "get_entities_by_type")?;
        let entities = sequence(self.active_entities_of_type(type_name), sequencing);
        Ok(paging.slice(entities))
    }

    async fn find_entities(
        &self,
        user_id: &str,
        type_name: &str,
        filter: &SearchFilter,
        paging: PageRequest,
        sequencing: &Sequencing,
    ) -> Result<Vec<EntityDetail>, RepoError> {
        self.authorize(user_id, "find_entities")?;
        let matching = self
            .active_entities_of_type(type_name)
            .into_iter()
            .filter(|entity| matches_search(entity, filter))
            .collect();
        Ok(paging.slice(sequence(matching, sequencing)))
    }

    async fn update_entity_properties(
        &self,
        user_id: &str,
        guid: EntityGuid,
        properties: InstanceProperties,
        replace: bool,
    ) -> Result<EntityDetail, RepoError> {
        self.authorize(user_id, "update_entity_properties")?;
        let mut entry = self
            .entities
            .get_mut(&guid)
            .filter(|entity| entity.status == InstanceStatus::Active)
            .ok_or_else(|| RepoError::NotFound {
                type_name: "entity".to_string(),
                guid: guid.to_string(),
            })?;

        if replace {
            entry.properties = properties;
        } else {
            for (name, value) in properties.iter() {
                entry.properties.set(name, value.clone());
            }
        }
        entry.update_time = Some(self.clock.now());
        Ok(entry.value().clone())
    }

    async fn delete_entity(
        &self,
        user_id: &str,
        guid: EntityGuid,
        purge: bool,
    ) -> Result<(), RepoError> {
        self.authorize(user_id, "delete_entity")?;
        if purge {
            self.entities
                .remove(&guid)
                .ok_or_else(|| RepoError::NotFound {
                    type_name: "entity".to_string(),
                    guid: guid.to_string(),
                })?;
            self.relationships
                .retain(|_, relationship| !relationship.connects(guid));
            return Ok(());
        }

        let mut entry = self
            .entities
            .get_mut(&guid)
            .filter(|entity| entity.status == InstanceStatus::Active)
            .ok_or_else(|| RepoError::NotFound {
                type_name: "entity".to_string(),
                guid: guid.to_string(),
            })?;
        entry.status = InstanceStatus::Deleted;
        entry.update_time = Some(self.clock.now());
        Ok(())
    }

    async fn add_relationship(
        &self,
        user_id: &str,
        relationship: Relationship,
    ) -> Result<Relationship, RepoError> {
        self.authorize(user_id, "add_relationship")?;
        self.relationships
            .insert(relationship.guid, relationship.clone());
        Ok(relationship)
    }

    async fn get_relationship(
        &self,
        user_id: &str,
        guid: RelationshipGuid,
    ) -> Result<Option<Relationship>, RepoError> {
        self.authorize(user_id, "get_relationship")?;
        Ok(self
            .relationships
            .get(&guid)
            .filter(|relationship| relationship.status == InstanceStatus::Active)
            .map(|relationship| relationship.value().clone()))
    }

    async fn relationships_for_entity<'a>(
        &self,
        user_id: &str,
        guid: EntityGuid,
        relationship_type: Option<&'a str>,
    ) -> Result<Vec<Relationship>, RepoError> {
        self.authorize(user_id, "relationships_for_entity")?;
        let mut attached: Vec<Relationship> = self
            .relationships
            .iter()
            .filter(|entry| entry.status == InstanceStatus::Active && entry.connects(guid))
            .filter(|entry| match relationship_type {
                Some(type_name) => {
                    type_registry::is_type_of(&entry.instance_type.type_name, type_name)
                }
                None => true,
            })
            .map(|entry| entry.value().clone())
            .collect();
        attached.sort_by_key(|relationship| (relationship.create_time, relationship.guid));
        Ok(attached)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::SystemClock;
    use crate::infrastructure::helper::RepositoryHelper;
    use lodestone_domain::type_registry::type_names;

    const USER: &str = "garygeeke";

    fn repository() -> (InMemoryRepository, RepositoryHelper) {
        let clock = Arc::new(SystemClock::new());
        (
            InMemoryRepository::new(clock.clone()).with_denied_users(vec!["evil".to_string()]),
            RepositoryHelper::new(clock),
        )
    }

    fn term(helper: &RepositoryHelper, qualified_name: &str, display_name: &str) -> EntityDetail {
        let mut entity = helper
            .new_entity_skeleton(type_names::GLOSSARY_TERM)
            .unwrap();
        entity.properties = InstanceProperties::new()
            .with("qualifiedName", PropertyValue::string(qualified_name))
            .with("displayName", PropertyValue::string(display_name));
        entity
    }

    #[tokio::test]
    async fn denied_users_are_refused() {
        let (repo, helper) = repository();
        let entity = term(&helper, "term::1", "one");
        let err = repo.add_entity("evil", entity).await.unwrap_err();
        assert!(matches!(err, RepoError::NotAuthorized { .. }));
    }

    #[tokio::test]
    async fn soft_delete_hides_purge_removes() {
        let (repo, helper) = repository();
        let entity = repo
            .add_entity(USER, term(&helper, "term::1", "one"))
            .await
            .unwrap();

        repo.delete_entity(USER, entity.guid, false).await.unwrap();
        assert!(repo.get_entity(USER, entity.guid).await.unwrap().is_none());

        // A second soft delete no longer finds the instance
        let err = repo.delete_entity(USER, entity.guid, false).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound { .. }));

        repo.delete_entity(USER, entity.guid, true).await.unwrap();
        assert!(!repo.entities.contains_key(&entity.guid));
    }

    #[tokio::test]
    async fn purge_cascades_to_relationships() {
        let (repo, helper) = repository();
        let glossary = repo
            .add_entity(USER, {
                let mut g = helper.new_entity_skeleton(type_names::GLOSSARY).unwrap();
                g.properties = InstanceProperties::new()
                    .with("qualifiedName", PropertyValue::string("glossary::main"));
                g
            })
            .await
            .unwrap();
        let entity = repo
            .add_entity(USER, term(&helper, "term::1", "one"))
            .await
            .unwrap();
        let anchor = helper
            .new_relationship_skeleton(
                type_names::TERM_ANCHOR,
                glossary.as_proxy(),
                entity.as_proxy(),
            )
            .unwrap();
        repo.add_relationship(USER, anchor.clone()).await.unwrap();

        repo.delete_entity(USER, entity.guid, true).await.unwrap();
        assert!(repo
            .get_relationship(USER, anchor.guid)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn find_matches_substrings_case_insensitively() {
        let (repo, helper) = repository();
        repo.add_entity(USER, term(&helper, "term::customer", "Customer Identifier"))
            .await
            .unwrap();
        repo.add_entity(USER, term(&helper, "term::order", "Order Number"))
            .await
            .unwrap();

        let found = repo
            .find_entities(
                USER,
                type_names::GLOSSARY_TERM,
                &SearchFilter::new("CUSTOMER"),
                PageRequest::default(),
                &Sequencing::default(),
            )
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(
            found[0].properties.get("qualifiedName").and_then(PropertyValue::as_str),
            Some("term::customer")
        );
    }

    #[tokio::test]
    async fn property_sequencing_and_paging_window_results() {
        let (repo, helper) = repository();
        for name in ["delta", "alpha", "charlie", "bravo"] {
            repo.add_entity(USER, term(&helper, &format!("term::{name}"), name))
                .await
                .unwrap();
        }

        let page = repo
            .get_entities_by_type(
                USER,
                type_names::GLOSSARY_TERM,
                PageRequest::new(1, 2),
                &Sequencing::by_property("displayName"),
            )
            .await
            .unwrap();
        let names: Vec<_> = page
            .iter()
            .map(|e| {
                e.properties
                    .get("displayName")
                    .and_then(PropertyValue::as_str)
                    .unwrap()
                    .to_string()
            })
            .collect();
        assert_eq!(names, vec!["bravo", "charlie"]);
    }

    #[tokio::test]
    async fn merge_update_keeps_unmentioned_properties() {
        let (repo, helper) = repository();
        let entity = repo
            .add_entity(USER, term(&helper, "term::1", "one"))
            .await
            .unwrap();

        let updated = repo
            .update_entity_properties(
                USER,
                entity.guid,
                InstanceProperties::new().with("displayName", PropertyValue::string("uno")),
                false,
            )
            .await
            .unwrap();
        assert_eq!(
            updated.properties.get("qualifiedName").and_then(PropertyValue::as_str),
            Some("term::1")
        );
        assert_eq!(
            updated.properties.get("displayName").and_then(PropertyValue::as_str),
            Some("uno")
        );

        let replaced = repo
            .update_entity_properties(
                USER,
                entity.guid,
                InstanceProperties::new().with("displayName", PropertyValue::string("eins")),
                true,
            )
            .await
            .unwrap();
        assert!(replaced.properties.get("qualifiedName").is_none());
    }
}
