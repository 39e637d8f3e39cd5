//! Project view routes.

use axum::extract::{Path, Query, State};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use std::sync::Arc;
use uuid::Uuid;

use lodestone_domain::elements::{ElementStub, Project};
use lodestone_domain::EntityGuid;
use lodestone_shared::requests::{NewProjectRequest, SearchRequest, UpdateProjectRequest};
use lodestone_shared::responses::ResponseEnvelope;

use crate::app::App;

use super::error::ApiResult;
use super::{ensure_server, CallerQuery, DeleteQuery, UpdateQuery};

pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/servers/{server_name}/api/projects", post(create_project))
        .route(
            "/servers/{server_name}/api/projects/by-search-string",
            post(find_projects),
        )
        .route(
            "/servers/{server_name}/api/projects/{project_guid}",
            get(get_project).put(update_project).delete(delete_project),
        )
        .route(
            "/servers/{server_name}/api/projects/{project_guid}/team",
            get(team_members),
        )
        .route(
            "/servers/{server_name}/api/projects/{project_guid}/team/{member_guid}",
            put(add_team_member),
        )
}

async fn create_project(
    State(app): State<Arc<App>>,
    Path(server_name): Path<String>,
    Query(caller): Query<CallerQuery>,
    Json(request): Json<NewProjectRequest>,
) -> ApiResult<Project> {
    ensure_server(&app, &server_name)?;
    let project = app
        .services
        .project
        .create_project(&caller.user_id, request)
        .await?;
    Ok(Json(ResponseEnvelope::element(project)))
}

async fn find_projects(
    State(app): State<Arc<App>>,
    Path(server_name): Path<String>,
    Query(caller): Query<CallerQuery>,
    Json(request): Json<SearchRequest>,
) -> ApiResult<Project> {
    ensure_server(&app, &server_name)?;
    let projects = app
        .services
        .project
        .find_projects(&caller.user_id, &request)
        .await?;
    Ok(Json(ResponseEnvelope::element_list(projects)))
}

async fn get_project(
    State(app): State<Arc<App>>,
    Path((server_name, project_guid)): Path<(String, Uuid)>,
    Query(caller): Query<CallerQuery>,
) -> ApiResult<Project> {
    ensure_server(&app, &server_name)?;
    let project = app
        .services
        .project
        .get_project(&caller.user_id, EntityGuid::from_uuid(project_guid))
        .await?;
    Ok(Json(ResponseEnvelope::element(project)))
}

async fn update_project(
    State(app): State<Arc<App>>,
    Path((server_name, project_guid)): Path<(String, Uuid)>,
    Query(query): Query<UpdateQuery>,
    Json(request): Json<UpdateProjectRequest>,
) -> ApiResult<Project> {
    ensure_server(&app, &server_name)?;
    let project = app
        .services
        .project
        .update_project(
            &query.user_id,
            EntityGuid::from_uuid(project_guid),
            request,
            query.is_replace,
        )
        .await?;
    Ok(Json(ResponseEnvelope::element(project)))
}

async fn delete_project(
    State(app): State<Arc<App>>,
    Path((server_name, project_guid)): Path<(String, Uuid)>,
    Query(query): Query<DeleteQuery>,
) -> ApiResult<Project> {
    ensure_server(&app, &server_name)?;
    app.services
        .project
        .delete_project(
            &query.user_id,
            EntityGuid::from_uuid(project_guid),
            query.is_purge,
        )
        .await?;
    Ok(Json(ResponseEnvelope::void()))
}

async fn team_members(
    State(app): State<Arc<App>>,
    Path((server_name, project_guid)): Path<(String, Uuid)>,
    Query(caller): Query<CallerQuery>,
) -> ApiResult<ElementStub> {
    ensure_server(&app, &server_name)?;
    let team = app
        .services
        .project
        .team_members(&caller.user_id, EntityGuid::from_uuid(project_guid))
        .await?;
    // "no team" and "empty team" are the same thing on the wire
    Ok(Json(ResponseEnvelope::element_list(
        team.unwrap_or_default(),
    )))
}

async fn add_team_member(
    State(app): State<Arc<App>>,
    Path((server_name, project_guid, member_guid)): Path<(String, Uuid, Uuid)>,
    Query(caller): Query<CallerQuery>,
) -> ApiResult<ElementStub> {
    ensure_server(&app, &server_name)?;
    app.services
        .project
        .add_team_member(
            &caller.user_id,
            EntityGuid::from_uuid(project_guid),
            EntityGuid::from_uuid(member_guid),
        )
        .await?;
    Ok(Json(ResponseEnvelope::void()))
}
