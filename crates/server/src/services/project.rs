//! Project view service.

use std::sync::Arc;

use lodestone_domain::elements::{ElementStub, Project};
use lodestone_domain::type_registry::type_names;
use lodestone_domain::{EntityGuid, InstanceProperties, PropertyValue};
use lodestone_shared::messages::AuditCode;
use lodestone_shared::paging::PageRequest;
use lodestone_shared::requests::{NewProjectRequest, SearchRequest, UpdateProjectRequest};

use crate::converters::{element_stub, project};
use crate::infrastructure::{MetadataRepository, RepositoryHelper};

use super::{require_user_id, require_valid_paging, validate_request, ServiceError};

pub struct ProjectService {
    repository: Arc<dyn MetadataRepository>,
    helper: Arc<RepositoryHelper>,
}

impl ProjectService {
    pub fn new(repository: Arc<dyn MetadataRepository>, helper: Arc<RepositoryHelper>) -> Self {
        Self { repository, helper }
    }

    pub async fn create_project(
        &self,
        user_id: &str,
        request: NewProjectRequest,
    ) -> Result<Project, ServiceError> {
        const METHOD: &str = "create_project";
        require_user_id(METHOD, user_id)?;
        validate_request(METHOD, &request)?;

        let mut skeleton = self.helper.new_entity_skeleton(type_names::PROJECT)?;
        let mut properties = InstanceProperties::new()
            .with("qualifiedName", PropertyValue::string(request.qualified_name))
            .with_optional_string("name", request.name)
            .with_optional_string("identifier", request.identifier)
            .with_optional_string("description", request.description)
            .with_optional_string("projectStatus", request.status);
        if let Some(start_date) = request.start_date {
            properties.set("startDate", PropertyValue::date(start_date));
        }
        if let Some(planned_end_date) = request.planned_end_date {
            properties.set("plannedEndDate", PropertyValue::date(planned_end_date));
        }
        skeleton.properties = properties;

        let stored = self.repository.add_entity(user_id, skeleton).await?;
        tracing::info!(
            message_id = AuditCode::InstanceCreated.message_id(),
            "{}",
            AuditCode::InstanceCreated.format(&[
                user_id,
                type_names::PROJECT,
                &stored.guid.to_string()
            ])
        );
        Ok(project::from_entity(Some(&stored))?)
    }

    pub async fn get_project(
        &self,
        user_id: &str,
        project_guid: EntityGuid,
    ) -> Result<Project, ServiceError> {
        const METHOD: &str = "get_project";
        require_user_id(METHOD, user_id)?;

        let entity = self
            .repository
            .get_entity(user_id, project_guid)
            .await?
            .ok_or_else(|| ServiceError::unknown_guid(type_names::PROJECT, project_guid))?;
        Ok(project::from_entity(Some(&entity))?)
    }

    pub async fn find_projects(
        &self,
        user_id: &str,
        request: &SearchRequest,
    ) -> Result<Vec<Project>, ServiceError> {
        const METHOD: &str = "find_projects";
        require_user_id(METHOD, user_id)?;
        validate_request(METHOD, request)?;
        require_valid_paging(request.paging)?;

        let entities = self
            .repository
            .find_entities(
                user_id,
                type_names::PROJECT,
                &request.filter(),
                request.paging,
                &request.sequencing,
            )
            .await?;
        entities
            .iter()
            .map(|entity| project::from_entity(Some(entity)).map_err(ServiceError::from))
            .collect()
    }

    pub async fn update_project(
        &self,
        user_id: &str,
        project_guid: EntityGuid,
        request: UpdateProjectRequest,
        is_replace: bool,
    ) -> Result<Project, ServiceError> {
        const METHOD: &str = "update_project";
        require_user_id(METHOD, user_id)?;
        validate_request(METHOD, &request)?;

        self.repository
            .get_entity(user_id, project_guid)
            .await?
            .ok_or_else(|| ServiceError::unknown_guid(type_names::PROJECT, project_guid))?;

        let properties = InstanceProperties::new()
            .with_optional_string("qualifiedName", request.qualified_name)
            .with_optional_string("name", request.name)
            .with_optional_string("identifier", request.identifier)
            .with_optional_string("description", request.description)
            .with_optional_string("projectStatus", request.status);

        let updated = self
            .repository
            .update_entity_properties(user_id, project_guid, properties, is_replace)
            .await?;
        Ok(project::from_entity(Some(&updated))?)
    }

    pub async fn delete_project(
        &self,
        user_id: &str,
        project_guid: EntityGuid,
        is_purge: bool,
    ) -> Result<(), ServiceError> {
        const METHOD: &str = "delete_project";
        require_user_id(METHOD, user_id)?;

        self.repository
            .delete_entity(user_id, project_guid, is_purge)
            .await?;
        tracing::info!(
            message_id = AuditCode::InstanceDeleted.message_id(),
            "{}",
            AuditCode::InstanceDeleted.format(&[
                user_id,
                type_names::PROJECT,
                &project_guid.to_string()
            ])
        );
        Ok(())
    }

    /// Link an actor (person, profile, ...) into the project team.
    pub async fn add_team_member(
        &self,
        user_id: &str,
        project_guid: EntityGuid,
        member_guid: EntityGuid,
    ) -> Result<(), ServiceError> {
        const METHOD: &str = "add_team_member";
        require_user_id(METHOD, user_id)?;

        let project = self
            .repository
            .get_entity(user_id, project_guid)
            .await?
            .ok_or_else(|| ServiceError::unknown_guid(type_names::PROJECT, project_guid))?;
        let member = self
            .repository
            .get_entity(user_id, member_guid)
            .await?
            .ok_or_else(|| ServiceError::unknown_guid(type_names::REFERENCEABLE, member_guid))?;

        let team = self.helper.new_relationship_skeleton(
            type_names::PROJECT_TEAM,
            project.as_proxy(),
            member.as_proxy(),
        )?;
        self.repository.add_relationship(user_id, team).await?;
        Ok(())
    }

    /// The project's team as element stubs.
    ///
    /// Returns `None` (not an empty list) when the project has no team —
    /// callers treat both the same way.
    pub async fn team_members(
        &self,
        user_id: &str,
        project_guid: EntityGuid,
    ) -> Result<Option<Vec<ElementStub>>, ServiceError> {
        const METHOD: &str = "team_members";
        require_user_id(METHOD, user_id)?;

        self.repository
            .get_entity(user_id, project_guid)
            .await?
            .ok_or_else(|| ServiceError::unknown_guid(type_names::PROJECT, project_guid))?;

        let memberships: Vec<Option<_>> = self
            .repository
            .relationships_for_entity(user_id, project_guid, Some(type_names::PROJECT_TEAM))
            .await?
            .into_iter()
            .map(Some)
            .collect();
        Ok(element_stub::from_relationships(&memberships, false))
    }
}
