//! HTTP entry points: one router module per view plus shared query types.

pub mod asset_catalog;
pub mod error;
pub mod glossary;
pub mod http;
pub mod lineage;
pub mod project;

use std::sync::Arc;

use serde::Deserialize;

use lodestone_shared::paging::PageRequest;

use crate::app::App;
use crate::services::ServiceError;

use error::ApiError;

/// Every route identifies its caller.
#[derive(Debug, Deserialize)]
pub struct CallerQuery {
    #[serde(default)]
    pub user_id: String,
}

/// Caller plus a paging window.
#[derive(Debug, Deserialize)]
pub struct PagedQuery {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub start_from: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    PageRequest::default().page_size
}

impl PagedQuery {
    pub fn paging(&self) -> PageRequest {
        PageRequest::new(self.start_from, self.page_size)
    }
}

/// Caller plus the update mode.
#[derive(Debug, Deserialize)]
pub struct UpdateQuery {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub is_replace: bool,
}

/// Caller plus the delete mode.
#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub is_purge: bool,
}

/// Routes are scoped by server name; a request addressed to a server this
/// platform does not host is an invalid parameter.
pub(crate) fn ensure_server(app: &Arc<App>, server_name: &str) -> Result<(), ApiError> {
    if app.server_name == server_name {
        Ok(())
    } else {
        Err(ApiError(ServiceError::InvalidParameter {
            method: "route",
            parameter: "server_name".to_string(),
            message: format!("this platform does not host server {server_name}"),
        }))
    }
}
