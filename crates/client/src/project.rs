//! Project view client.

use std::sync::Arc;

use lodestone_domain::elements::{ElementStub, Project};
use lodestone_domain::EntityGuid;
use lodestone_shared::requests::{NewProjectRequest, SearchRequest, UpdateProjectRequest};

use crate::error::ClientError;
use crate::rest::RestClient;

pub struct ProjectClient {
    rest: Arc<RestClient>,
}

impl ProjectClient {
    pub(crate) fn new(rest: Arc<RestClient>) -> Self {
        Self { rest }
    }

    pub async fn create_project(
        &self,
        request: &NewProjectRequest,
    ) -> Result<Project, ClientError> {
        self.rest.post_element("projects", request).await
    }

    pub async fn get_project(&self, project_guid: EntityGuid) -> Result<Project, ClientError> {
        self.rest
            .get_element(&format!("projects/{project_guid}"), &[])
            .await
    }

    pub async fn find_projects(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<Project>, ClientError> {
        self.rest.post_list("projects/by-search-string", request).await
    }

    pub async fn update_project(
        &self,
        project_guid: EntityGuid,
        request: &UpdateProjectRequest,
        is_replace: bool,
    ) -> Result<Project, ClientError> {
        self.rest
            .put_element(
                &format!("projects/{project_guid}"),
                &[("is_replace", is_replace.to_string())],
                request,
            )
            .await
    }

    pub async fn delete_project(
        &self,
        project_guid: EntityGuid,
        is_purge: bool,
    ) -> Result<(), ClientError> {
        self.rest
            .delete_void(
                &format!("projects/{project_guid}"),
                &[("is_purge", is_purge.to_string())],
            )
            .await
    }

    pub async fn add_team_member(
        &self,
        project_guid: EntityGuid,
        member_guid: EntityGuid,
    ) -> Result<(), ClientError> {
        self.rest
            .put_void(&format!("projects/{project_guid}/team/{member_guid}"), &[])
            .await
    }

    /// The project's team; `None` when the project has no members — the
    /// same "nothing found" an empty list would mean.
    pub async fn team_members(
        &self,
        project_guid: EntityGuid,
    ) -> Result<Option<Vec<ElementStub>>, ClientError> {
        let members: Vec<ElementStub> = self
            .rest
            .get_list(&format!("projects/{project_guid}/team"), &[])
            .await?;
        Ok(if members.is_empty() {
            None
        } else {
            Some(members)
        })
    }
}
