//! Lineage view client.

use std::sync::Arc;

use lodestone_domain::elements::{LineageGraph, ProcessCall};
use lodestone_domain::EntityGuid;
use lodestone_shared::paging::PageRequest;

use crate::error::ClientError;
use crate::rest::{paging_query, RestClient};

pub struct LineageClient {
    rest: Arc<RestClient>,
}

impl LineageClient {
    pub(crate) fn new(rest: Arc<RestClient>) -> Self {
        Self { rest }
    }

    pub async fn process_calls(
        &self,
        process_guid: EntityGuid,
        paging: PageRequest,
    ) -> Result<Vec<ProcessCall>, ClientError> {
        self.rest
            .get_list(
                &format!("processes/{process_guid}/calls"),
                &paging_query(paging),
            )
            .await
    }

    pub async fn lineage_graph(
        &self,
        asset_guid: EntityGuid,
        max_depth: Option<usize>,
    ) -> Result<LineageGraph, ClientError> {
        let mut query = Vec::new();
        if let Some(depth) = max_depth {
            query.push(("max_depth", depth.to_string()));
        }
        self.rest
            .get_element(&format!("assets/{asset_guid}/lineage"), &query)
            .await
    }
}
