//! Asset-catalog view client.

use std::sync::Arc;

use lodestone_domain::elements::{AssetSummary, ItProfile, RelatedAsset, SoftwareCapability};
use lodestone_domain::EntityGuid;
use lodestone_shared::paging::PageRequest;
use lodestone_shared::requests::{NewSoftwareCapabilityRequest, SearchRequest};

use crate::error::ClientError;
use crate::rest::{paging_query, RestClient};

pub struct AssetCatalogClient {
    rest: Arc<RestClient>,
}

impl AssetCatalogClient {
    pub(crate) fn new(rest: Arc<RestClient>) -> Self {
        Self { rest }
    }

    pub async fn get_asset(&self, asset_guid: EntityGuid) -> Result<AssetSummary, ClientError> {
        self.rest.get_element(&format!("assets/{asset_guid}"), &[]).await
    }

    pub async fn find_assets(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<AssetSummary>, ClientError> {
        self.rest.post_list("assets/by-search-string", request).await
    }

    pub async fn related_assets(
        &self,
        asset_guid: EntityGuid,
        paging: PageRequest,
    ) -> Result<Vec<RelatedAsset>, ClientError> {
        self.rest
            .get_list(&format!("assets/{asset_guid}/related"), &paging_query(paging))
            .await
    }

    pub async fn create_software_capability(
        &self,
        request: &NewSoftwareCapabilityRequest,
    ) -> Result<SoftwareCapability, ClientError> {
        self.rest.post_element("software-capabilities", request).await
    }

    pub async fn get_software_capability(
        &self,
        capability_guid: EntityGuid,
    ) -> Result<SoftwareCapability, ClientError> {
        self.rest
            .get_element(&format!("software-capabilities/{capability_guid}"), &[])
            .await
    }

    pub async fn find_software_capabilities(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<SoftwareCapability>, ClientError> {
        self.rest
            .post_list("software-capabilities/by-search-string", request)
            .await
    }

    pub async fn get_it_profile(
        &self,
        profile_guid: EntityGuid,
    ) -> Result<ItProfile, ClientError> {
        self.rest
            .get_element(&format!("profiles/{profile_guid}"), &[])
            .await
    }
}
