//! Glossary view routes.

use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;
use uuid::Uuid;

use lodestone_domain::elements::{Glossary, GlossaryTerm};
use lodestone_domain::EntityGuid;
use lodestone_shared::requests::{
    NewGlossaryRequest, NewGlossaryTermRequest, SearchRequest, UpdateGlossaryTermRequest,
};
use lodestone_shared::responses::ResponseEnvelope;

use crate::app::App;

use super::error::ApiResult;
use super::{ensure_server, CallerQuery, DeleteQuery, PagedQuery, UpdateQuery};

pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route(
            "/servers/{server_name}/api/glossaries",
            post(create_glossary).get(list_glossaries),
        )
        .route(
            "/servers/{server_name}/api/glossaries/{glossary_guid}/terms",
            post(create_term).get(terms_for_glossary),
        )
        .route(
            "/servers/{server_name}/api/terms/by-search-string",
            post(find_terms),
        )
        .route(
            "/servers/{server_name}/api/terms/{term_guid}",
            get(get_term).put(update_term).delete(delete_term),
        )
}

async fn create_glossary(
    State(app): State<Arc<App>>,
    Path(server_name): Path<String>,
    Query(caller): Query<CallerQuery>,
    Json(request): Json<NewGlossaryRequest>,
) -> ApiResult<Glossary> {
    ensure_server(&app, &server_name)?;
    let glossary = app
        .services
        .glossary
        .create_glossary(&caller.user_id, request)
        .await?;
    Ok(Json(ResponseEnvelope::element(glossary)))
}

async fn list_glossaries(
    State(app): State<Arc<App>>,
    Path(server_name): Path<String>,
    Query(query): Query<PagedQuery>,
) -> ApiResult<Glossary> {
    ensure_server(&app, &server_name)?;
    let glossaries = app
        .services
        .glossary
        .list_glossaries(&query.user_id, query.paging())
        .await?;
    Ok(Json(ResponseEnvelope::element_list(glossaries)))
}

async fn create_term(
    State(app): State<Arc<App>>,
    Path((server_name, glossary_guid)): Path<(String, Uuid)>,
    Query(caller): Query<CallerQuery>,
    Json(request): Json<NewGlossaryTermRequest>,
) -> ApiResult<GlossaryTerm> {
    ensure_server(&app, &server_name)?;
    let term = app
        .services
        .glossary
        .create_term(&caller.user_id, EntityGuid::from_uuid(glossary_guid), request)
        .await?;
    Ok(Json(ResponseEnvelope::element(term)))
}

async fn terms_for_glossary(
    State(app): State<Arc<App>>,
    Path((server_name, glossary_guid)): Path<(String, Uuid)>,
    Query(query): Query<PagedQuery>,
) -> ApiResult<GlossaryTerm> {
    ensure_server(&app, &server_name)?;
    let terms = app
        .services
        .glossary
        .terms_for_glossary(
            &query.user_id,
            EntityGuid::from_uuid(glossary_guid),
            query.paging(),
        )
        .await?;
    Ok(Json(ResponseEnvelope::element_list(terms)))
}

async fn find_terms(
    State(app): State<Arc<App>>,
    Path(server_name): Path<String>,
    Query(caller): Query<CallerQuery>,
    Json(request): Json<SearchRequest>,
) -> ApiResult<GlossaryTerm> {
    ensure_server(&app, &server_name)?;
    let terms = app
        .services
        .glossary
        .find_terms(&caller.user_id, &request)
        .await?;
    Ok(Json(ResponseEnvelope::element_list(terms)))
}

async fn get_term(
    State(app): State<Arc<App>>,
    Path((server_name, term_guid)): Path<(String, Uuid)>,
    Query(caller): Query<CallerQuery>,
) -> ApiResult<GlossaryTerm> {
    ensure_server(&app, &server_name)?;
    let term = app
        .services
        .glossary
        .get_term(&caller.user_id, EntityGuid::from_uuid(term_guid))
        .await?;
    Ok(Json(ResponseEnvelope::element(term)))
}

async fn update_term(
    State(app): State<Arc<App>>,
    Path((server_name, term_guid)): Path<(String, Uuid)>,
    Query(query): Query<UpdateQuery>,
    Json(request): Json<UpdateGlossaryTermRequest>,
) -> ApiResult<GlossaryTerm> {
    ensure_server(&app, &server_name)?;
    let term = app
        .services
        .glossary
        .update_term(
            &query.user_id,
            EntityGuid::from_uuid(term_guid),
            request,
            query.is_replace,
        )
        .await?;
    Ok(Json(ResponseEnvelope::element(term)))
}

async fn delete_term(
    State(app): State<Arc<App>>,
    Path((server_name, term_guid)): Path<(String, Uuid)>,
    Query(query): Query<DeleteQuery>,
) -> ApiResult<GlossaryTerm> {
    ensure_server(&app, &server_name)?;
    app.services
        .glossary
        .delete_term(&query.user_id, EntityGuid::from_uuid(term_guid), query.is_purge)
        .await?;
    Ok(Json(ResponseEnvelope::void()))
}
