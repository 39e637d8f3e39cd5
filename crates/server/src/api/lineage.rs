//! Lineage view routes.

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use lodestone_domain::elements::{LineageGraph, ProcessCall};
use lodestone_domain::EntityGuid;
use lodestone_shared::responses::ResponseEnvelope;

use crate::app::App;

use super::error::ApiResult;
use super::{ensure_server, PagedQuery};

#[derive(Debug, Deserialize)]
struct LineageQuery {
    #[serde(default)]
    user_id: String,
    #[serde(default)]
    max_depth: Option<usize>,
}

pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route(
            "/servers/{server_name}/api/processes/{process_guid}/calls",
            get(process_calls),
        )
        .route(
            "/servers/{server_name}/api/assets/{asset_guid}/lineage",
            get(lineage_graph),
        )
}

async fn process_calls(
    State(app): State<Arc<App>>,
    Path((server_name, process_guid)): Path<(String, Uuid)>,
    Query(query): Query<PagedQuery>,
) -> ApiResult<ProcessCall> {
    ensure_server(&app, &server_name)?;
    let calls = app
        .services
        .lineage
        .process_calls(
            &query.user_id,
            EntityGuid::from_uuid(process_guid),
            query.paging(),
        )
        .await?;
    Ok(Json(ResponseEnvelope::element_list(calls)))
}

async fn lineage_graph(
    State(app): State<Arc<App>>,
    Path((server_name, asset_guid)): Path<(String, Uuid)>,
    Query(query): Query<LineageQuery>,
) -> ApiResult<LineageGraph> {
    ensure_server(&app, &server_name)?;
    let graph = app
        .services
        .lineage
        .lineage_graph(
            &query.user_id,
            EntityGuid::from_uuid(asset_guid),
            query.max_depth,
        )
        .await?;
    Ok(Json(ResponseEnvelope::element(graph)))
}
