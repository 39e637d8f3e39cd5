//! Glossary view service.

use std::sync::Arc;

use lodestone_domain::elements::{Glossary, GlossaryTerm};
use lodestone_domain::type_registry::type_names;
use lodestone_domain::{EntityGuid, InstanceProperties, PropertyValue};
use lodestone_shared::messages::AuditCode;
use lodestone_shared::paging::{PageRequest, Sequencing};
use lodestone_shared::requests::{
    NewGlossaryRequest, NewGlossaryTermRequest, UpdateGlossaryTermRequest,
};
use lodestone_shared::requests::SearchRequest;

use crate::converters::{glossary, glossary_term};
use crate::infrastructure::{MetadataRepository, RepositoryHelper};

use super::{require_user_id, require_valid_paging, validate_request, ServiceError};

pub struct GlossaryService {
    repository: Arc<dyn MetadataRepository>,
    helper: Arc<RepositoryHelper>,
}

impl GlossaryService {
    pub fn new(repository: Arc<dyn MetadataRepository>, helper: Arc<RepositoryHelper>) -> Self {
        Self { repository, helper }
    }

    pub async fn create_glossary(
        &self,
        user_id: &str,
        request: NewGlossaryRequest,
    ) -> Result<Glossary, ServiceError> {
        const METHOD: &str = "create_glossary";
        require_user_id(METHOD, user_id)?;
        validate_request(METHOD, &request)?;

        let mut skeleton = self.helper.new_entity_skeleton(type_names::GLOSSARY)?;
        skeleton.properties = InstanceProperties::new()
            .with("qualifiedName", PropertyValue::string(request.qualified_name))
            .with_optional_string("displayName", request.display_name)
            .with_optional_string("description", request.description)
            .with_optional_string("language", request.language)
            .with_optional_string("usage", request.usage);

        let stored = self.repository.add_entity(user_id, skeleton).await?;
        tracing::info!(
            message_id = AuditCode::InstanceCreated.message_id(),
            "{}",
            AuditCode::InstanceCreated.format(&[
                user_id,
                type_names::GLOSSARY,
                &stored.guid.to_string()
            ])
        );
        Ok(glossary::from_entity(Some(&stored))?)
    }

    /// Create a term and anchor it to its glossary.
    pub async fn create_term(
        &self,
        user_id: &str,
        glossary_guid: EntityGuid,
        request: NewGlossaryTermRequest,
    ) -> Result<GlossaryTerm, ServiceError> {
        const METHOD: &str = "create_term";
        require_user_id(METHOD, user_id)?;
        validate_request(METHOD, &request)?;

        let anchor = self
            .repository
            .get_entity(user_id, glossary_guid)
            .await?
            .ok_or_else(|| ServiceError::unknown_guid(type_names::GLOSSARY, glossary_guid))?;

        let mut skeleton = self.helper.new_entity_skeleton(type_names::GLOSSARY_TERM)?;
        let mut properties = InstanceProperties::new()
            .with("qualifiedName", PropertyValue::string(request.qualified_name))
            .with_optional_string("displayName", request.display_name)
            .with_optional_string("summary", request.summary)
            .with_optional_string("description", request.description)
            .with_optional_string("abbreviation", request.abbreviation)
            .with_optional_string("usage", request.usage);
        for (name, value) in request.extended_properties {
            properties.set(name, PropertyValue::string(value));
        }
        skeleton.properties = properties;

        let stored = self.repository.add_entity(user_id, skeleton).await?;
        let anchor_rel = self.helper.new_relationship_skeleton(
            type_names::TERM_ANCHOR,
            anchor.as_proxy(),
            stored.as_proxy(),
        )?;
        self.repository.add_relationship(user_id, anchor_rel).await?;

        tracing::info!(
            message_id = AuditCode::InstanceCreated.message_id(),
            "{}",
            AuditCode::InstanceCreated.format(&[
                user_id,
                type_names::GLOSSARY_TERM,
                &stored.guid.to_string()
            ])
        );
        Ok(glossary_term::from_entity(Some(&stored))?)
    }

    pub async fn get_term(
        &self,
        user_id: &str,
        term_guid: EntityGuid,
    ) -> Result<GlossaryTerm, ServiceError> {
        const METHOD: &str = "get_term";
        require_user_id(METHOD, user_id)?;

        let entity = self
            .repository
            .get_entity(user_id, term_guid)
            .await?
            .ok_or_else(|| ServiceError::unknown_guid(type_names::GLOSSARY_TERM, term_guid))?;
        Ok(glossary_term::from_entity(Some(&entity))?)
    }

    pub async fn find_terms(
        &self,
        user_id: &str,
        request: &SearchRequest,
    ) -> Result<Vec<GlossaryTerm>, ServiceError> {
        const METHOD: &str = "find_terms";
        require_user_id(METHOD, user_id)?;
        validate_request(METHOD, request)?;
        require_valid_paging(request.paging)?;

        let entities = self
            .repository
            .find_entities(
                user_id,
                type_names::GLOSSARY_TERM,
                &request.filter(),
                request.paging,
                &request.sequencing,
            )
            .await?;
        entities
            .iter()
            .map(|entity| glossary_term::from_entity(Some(entity)).map_err(ServiceError::from))
            .collect()
    }

    /// Terms anchored to a glossary, in anchor-creation order.
    pub async fn terms_for_glossary(
        &self,
        user_id: &str,
        glossary_guid: EntityGuid,
        paging: PageRequest,
    ) -> Result<Vec<GlossaryTerm>, ServiceError> {
        const METHOD: &str = "terms_for_glossary";
        require_user_id(METHOD, user_id)?;
        require_valid_paging(paging)?;

        self.repository
            .get_entity(user_id, glossary_guid)
            .await?
            .ok_or_else(|| ServiceError::unknown_guid(type_names::GLOSSARY, glossary_guid))?;

        let anchors = self
            .repository
            .relationships_for_entity(user_id, glossary_guid, Some(type_names::TERM_ANCHOR))
            .await?;

        let mut terms = Vec::new();
        for anchor in paging.slice(anchors) {
            let Some(proxy) = anchor.other_end(glossary_guid) else {
                continue;
            };
            // A dangling anchor omits the term rather than failing the list
            if let Some(entity) = self.repository.get_entity(user_id, proxy.guid).await? {
                terms.push(glossary_term::from_entity(Some(&entity))?);
            }
        }
        Ok(terms)
    }

    /// Update a term's properties; `is_replace` swaps the whole bag.
    pub async fn update_term(
        &self,
        user_id: &str,
        term_guid: EntityGuid,
        request: UpdateGlossaryTermRequest,
        is_replace: bool,
    ) -> Result<GlossaryTerm, ServiceError> {
        const METHOD: &str = "update_term";
        require_user_id(METHOD, user_id)?;
        validate_request(METHOD, &request)?;

        self.repository
            .get_entity(user_id, term_guid)
            .await?
            .ok_or_else(|| ServiceError::unknown_guid(type_names::GLOSSARY_TERM, term_guid))?;

        let properties = InstanceProperties::new()
            .with_optional_string("qualifiedName", request.qualified_name)
            .with_optional_string("displayName", request.display_name)
            .with_optional_string("summary", request.summary)
            .with_optional_string("description", request.description)
            .with_optional_string("abbreviation", request.abbreviation)
            .with_optional_string("usage", request.usage);

        let updated = self
            .repository
            .update_entity_properties(user_id, term_guid, properties, is_replace)
            .await?;
        Ok(glossary_term::from_entity(Some(&updated))?)
    }

    /// Soft-delete by default; `is_purge` removes the instance outright.
    pub async fn delete_term(
        &self,
        user_id: &str,
        term_guid: EntityGuid,
        is_purge: bool,
    ) -> Result<(), ServiceError> {
        const METHOD: &str = "delete_term";
        require_user_id(METHOD, user_id)?;

        self.repository
            .delete_entity(user_id, term_guid, is_purge)
            .await?;
        tracing::info!(
            message_id = AuditCode::InstanceDeleted.message_id(),
            "{}",
            AuditCode::InstanceDeleted.format(&[
                user_id,
                type_names::GLOSSARY_TERM,
                &term_guid.to_string()
            ])
        );
        Ok(())
    }

    /// All glossaries, for browse views.
    pub async fn list_glossaries(
        &self,
        user_id: &str,
        paging: PageRequest,
    ) -> Result<Vec<Glossary>, ServiceError> {
        const METHOD: &str = "list_glossaries";
        require_user_id(METHOD, user_id)?;
        require_valid_paging(paging)?;

        let entities = self
            .repository
            .get_entities_by_type(user_id, type_names::GLOSSARY, paging, &Sequencing::default())
            .await?;
        entities
            .iter()
            .map(|entity| glossary::from_entity(Some(entity)).map_err(ServiceError::from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{InMemoryRepository, MockMetadataRepository, RepoError, SystemClock};

    const USER: &str = "garygeeke";

    fn service() -> GlossaryService {
        let clock = Arc::new(SystemClock::new());
        GlossaryService::new(
            Arc::new(InMemoryRepository::new(clock.clone())),
            Arc::new(RepositoryHelper::new(clock)),
        )
    }

    fn term_request(name: &str) -> NewGlossaryTermRequest {
        NewGlossaryTermRequest {
            qualified_name: format!("term::{name}"),
            display_name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_term_requires_an_existing_glossary() {
        let service = service();
        let err = service
            .create_term(USER, EntityGuid::new(), term_request("customer"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::UnknownGuid { .. }));
    }

    #[tokio::test]
    async fn created_terms_list_under_their_glossary() {
        let service = service();
        let glossary = service
            .create_glossary(
                USER,
                NewGlossaryRequest {
                    qualified_name: "glossary::main".to_string(),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        for name in ["customer", "order"] {
            service
                .create_term(USER, glossary.header.guid, term_request(name))
                .await
                .unwrap();
        }

        let terms = service
            .terms_for_glossary(USER, glossary.header.guid, PageRequest::default())
            .await
            .unwrap();
        let names: Vec<_> = terms
            .iter()
            .filter_map(|t| t.display_name.as_deref())
            .collect();
        assert_eq!(names, vec!["customer", "order"]);
    }

    #[tokio::test]
    async fn blank_qualified_name_is_an_invalid_parameter() {
        let service = service();
        let glossary_guid = EntityGuid::new();
        let err = service
            .create_term(
                USER,
                glossary_guid,
                NewGlossaryTermRequest {
                    qualified_name: String::new(),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidParameter { .. }));
    }

    #[tokio::test]
    async fn empty_user_id_is_refused_before_the_repository() {
        let service = service();
        let err = service.get_term("", EntityGuid::new()).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::NullParameter { parameter: "user_id", .. }
        ));
    }

    #[tokio::test]
    async fn replace_update_drops_unmentioned_properties() {
        let service = service();
        let glossary = service
            .create_glossary(
                USER,
                NewGlossaryRequest {
                    qualified_name: "glossary::main".to_string(),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        let term = service
            .create_term(USER, glossary.header.guid, term_request("customer"))
            .await
            .unwrap();

        let updated = service
            .update_term(
                USER,
                term.header.guid,
                UpdateGlossaryTermRequest {
                    qualified_name: Some("term::customer".to_string()),
                    summary: Some("A paying party".to_string()),
                    ..Default::default()
                },
                true,
            )
            .await
            .unwrap();
        assert_eq!(updated.summary.as_deref(), Some("A paying party"));
        assert!(updated.display_name.is_none());
    }

    #[tokio::test]
    async fn backend_failures_surface_as_repository_errors() {
        let mut repository = MockMetadataRepository::new();
        repository
            .expect_get_entity()
            .returning(|_, _| Err(RepoError::Backend("connection reset".to_string())));

        let clock = Arc::new(SystemClock::new());
        let service = GlossaryService::new(
            Arc::new(repository),
            Arc::new(RepositoryHelper::new(clock)),
        );

        let err = service.get_term(USER, EntityGuid::new()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Repository { .. }));
        assert_eq!(err.fault().message_id, "LODESTONE-OMAS-500-001");
    }

    #[tokio::test]
    async fn deleted_terms_stop_resolving() {
        let service = service();
        let glossary = service
            .create_glossary(
                USER,
                NewGlossaryRequest {
                    qualified_name: "glossary::main".to_string(),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        let term = service
            .create_term(USER, glossary.header.guid, term_request("customer"))
            .await
            .unwrap();

        service
            .delete_term(USER, term.header.guid, false)
            .await
            .unwrap();
        let err = service.get_term(USER, term.header.guid).await.unwrap_err();
        assert!(matches!(err, ServiceError::UnknownGuid { .. }));
    }
}
