//! Asset-catalog view routes.

use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;
use uuid::Uuid;

use lodestone_domain::elements::{AssetSummary, ItProfile, RelatedAsset, SoftwareCapability};
use lodestone_domain::EntityGuid;
use lodestone_shared::requests::{NewSoftwareCapabilityRequest, SearchRequest};
use lodestone_shared::responses::ResponseEnvelope;

use crate::app::App;

use super::error::ApiResult;
use super::{ensure_server, CallerQuery, PagedQuery};

pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route(
            "/servers/{server_name}/api/assets/by-search-string",
            post(find_assets),
        )
        .route(
            "/servers/{server_name}/api/assets/{asset_guid}",
            get(get_asset),
        )
        .route(
            "/servers/{server_name}/api/assets/{asset_guid}/related",
            get(related_assets),
        )
        .route(
            "/servers/{server_name}/api/software-capabilities",
            post(create_software_capability),
        )
        .route(
            "/servers/{server_name}/api/software-capabilities/by-search-string",
            post(find_software_capabilities),
        )
        .route(
            "/servers/{server_name}/api/software-capabilities/{capability_guid}",
            get(get_software_capability),
        )
        .route(
            "/servers/{server_name}/api/profiles/{profile_guid}",
            get(get_it_profile),
        )
}

async fn get_asset(
    State(app): State<Arc<App>>,
    Path((server_name, asset_guid)): Path<(String, Uuid)>,
    Query(caller): Query<CallerQuery>,
) -> ApiResult<AssetSummary> {
    ensure_server(&app, &server_name)?;
    let asset = app
        .services
        .asset_catalog
        .get_asset(&caller.user_id, EntityGuid::from_uuid(asset_guid))
        .await?;
    Ok(Json(ResponseEnvelope::element(asset)))
}

async fn find_assets(
    State(app): State<Arc<App>>,
    Path(server_name): Path<String>,
    Query(caller): Query<CallerQuery>,
    Json(request): Json<SearchRequest>,
) -> ApiResult<AssetSummary> {
    ensure_server(&app, &server_name)?;
    let assets = app
        .services
        .asset_catalog
        .find_assets(&caller.user_id, &request)
        .await?;
    Ok(Json(ResponseEnvelope::element_list(assets)))
}

async fn related_assets(
    State(app): State<Arc<App>>,
    Path((server_name, asset_guid)): Path<(String, Uuid)>,
    Query(query): Query<PagedQuery>,
) -> ApiResult<RelatedAsset> {
    ensure_server(&app, &server_name)?;
    let related = app
        .services
        .asset_catalog
        .related_assets(
            &query.user_id,
            EntityGuid::from_uuid(asset_guid),
            query.paging(),
        )
        .await?;
    Ok(Json(ResponseEnvelope::element_list(related)))
}

async fn create_software_capability(
    State(app): State<Arc<App>>,
    Path(server_name): Path<String>,
    Query(caller): Query<CallerQuery>,
    Json(request): Json<NewSoftwareCapabilityRequest>,
) -> ApiResult<SoftwareCapability> {
    ensure_server(&app, &server_name)?;
    let capability = app
        .services
        .asset_catalog
        .create_software_capability(&caller.user_id, request)
        .await?;
    Ok(Json(ResponseEnvelope::element(capability)))
}

async fn get_software_capability(
    State(app): State<Arc<App>>,
    Path((server_name, capability_guid)): Path<(String, Uuid)>,
    Query(caller): Query<CallerQuery>,
) -> ApiResult<SoftwareCapability> {
    ensure_server(&app, &server_name)?;
    let capability = app
        .services
        .asset_catalog
        .get_software_capability(&caller.user_id, EntityGuid::from_uuid(capability_guid))
        .await?;
    Ok(Json(ResponseEnvelope::element(capability)))
}

async fn find_software_capabilities(
    State(app): State<Arc<App>>,
    Path(server_name): Path<String>,
    Query(caller): Query<CallerQuery>,
    Json(request): Json<SearchRequest>,
) -> ApiResult<SoftwareCapability> {
    ensure_server(&app, &server_name)?;
    let capabilities = app
        .services
        .asset_catalog
        .find_software_capabilities(&caller.user_id, &request)
        .await?;
    Ok(Json(ResponseEnvelope::element_list(capabilities)))
}

async fn get_it_profile(
    State(app): State<Arc<App>>,
    Path((server_name, profile_guid)): Path<(String, Uuid)>,
    Query(caller): Query<CallerQuery>,
) -> ApiResult<ItProfile> {
    ensure_server(&app, &server_name)?;
    let profile = app
        .services
        .asset_catalog
        .get_it_profile(&caller.user_id, EntityGuid::from_uuid(profile_guid))
        .await?;
    Ok(Json(ResponseEnvelope::element(profile)))
}
