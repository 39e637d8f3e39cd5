//! Lodestone client library.
//!
//! Typed REST stubs for the Lodestone access services: one client per view,
//! sharing a single connection pool and caller identity. Responses arrive
//! as envelopes; the detection layer unwraps the expected payload or raises
//! the matching typed error.
//!
//! ```no_run
//! use lodestone_client::{ClientConfig, LodestoneClient};
//!
//! # async fn example() -> Result<(), lodestone_client::ClientError> {
//! let config = ClientConfig::new(
//!     "https://metadata.example.org:9443",
//!     "active-metadata-store",
//!     "erinoverview",
//! )?;
//! let client = LodestoneClient::new(config)?;
//! let results = client
//!     .glossary
//!     .find_terms(&lodestone_shared::requests::SearchRequest::new("customer"))
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod asset_catalog;
mod config;
mod detect;
mod error;
mod glossary;
mod lineage;
mod project;
mod rest;

use std::sync::Arc;

pub use asset_catalog::AssetCatalogClient;
pub use config::ClientConfig;
pub use error::ClientError;
pub use glossary::GlossaryClient;
pub use lineage::LineageClient;
pub use project::ProjectClient;

/// Entry point bundling the per-view clients.
pub struct LodestoneClient {
    pub glossary: GlossaryClient,
    pub project: ProjectClient,
    pub asset_catalog: AssetCatalogClient,
    pub lineage: LineageClient,
}

impl LodestoneClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let rest = Arc::new(rest::RestClient::new(&config)?);
        Ok(Self {
            glossary: GlossaryClient::new(rest.clone()),
            project: ProjectClient::new(rest.clone()),
            asset_catalog: AssetCatalogClient::new(rest.clone()),
            lineage: LineageClient::new(rest),
        })
    }
}
