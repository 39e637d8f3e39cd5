//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{ClockPort, MetadataRepository, RepositoryHelper};
use crate::services::{AssetCatalogService, GlossaryService, LineageService, ProjectService};

/// Main application state.
///
/// Holds the repository port, the helper, and one service per view.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub server_name: String,
    pub repository: Arc<dyn MetadataRepository>,
    pub helper: Arc<RepositoryHelper>,
    pub services: Services,
}

/// Container for the view services.
pub struct Services {
    pub glossary: GlossaryService,
    pub project: ProjectService,
    pub asset_catalog: AssetCatalogService,
    pub lineage: LineageService,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(
        server_name: impl Into<String>,
        repository: Arc<dyn MetadataRepository>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        let helper = Arc::new(RepositoryHelper::new(clock));

        let services = Services {
            glossary: GlossaryService::new(repository.clone(), helper.clone()),
            project: ProjectService::new(repository.clone(), helper.clone()),
            asset_catalog: AssetCatalogService::new(repository.clone(), helper.clone()),
            lineage: LineageService::new(repository.clone()),
        };

        Self {
            server_name: server_name.into(),
            repository,
            helper,
            services,
        }
    }
}
