//! HTTP route composition.

use axum::routing::get;
use axum::Router;
use std::sync::Arc;

use crate::app::App;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .merge(super::glossary::routes())
        .merge(super::project::routes())
        .merge(super::asset_catalog::routes())
        .merge(super::lineage::routes())
}

async fn health() -> &'static str {
    "OK"
}
