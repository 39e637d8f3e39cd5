//! Asset-catalog view service: assets, software capabilities and IT
//! profiles.

use std::sync::Arc;

use lodestone_domain::elements::{AssetSummary, ItProfile, RelatedAsset, SoftwareCapability};
use lodestone_domain::type_registry::type_names;
use lodestone_domain::{EntityDetail, EntityGuid, InstanceProperties, PropertyValue, Relationship};
use lodestone_shared::messages::AuditCode;
use lodestone_shared::paging::PageRequest;
use lodestone_shared::requests::{NewSoftwareCapabilityRequest, SearchRequest};

use crate::converters::{asset, it_profile, related_asset, software_capability};
use crate::infrastructure::{MetadataRepository, RepositoryHelper};

use super::{require_user_id, require_valid_paging, validate_request, ServiceError};

pub struct AssetCatalogService {
    repository: Arc<dyn MetadataRepository>,
    helper: Arc<RepositoryHelper>,
}

impl AssetCatalogService {
    pub fn new(repository: Arc<dyn MetadataRepository>, helper: Arc<RepositoryHelper>) -> Self {
        Self { repository, helper }
    }

    pub async fn get_asset(
        &self,
        user_id: &str,
        asset_guid: EntityGuid,
    ) -> Result<AssetSummary, ServiceError> {
        const METHOD: &str = "get_asset";
        require_user_id(METHOD, user_id)?;

        let entity = self
            .repository
            .get_entity(user_id, asset_guid)
            .await?
            .ok_or_else(|| ServiceError::unknown_guid(type_names::ASSET, asset_guid))?;
        Ok(asset::from_entity(Some(&entity))?)
    }

    pub async fn find_assets(
        &self,
        user_id: &str,
        request: &SearchRequest,
    ) -> Result<Vec<AssetSummary>, ServiceError> {
        const METHOD: &str = "find_assets";
        require_user_id(METHOD, user_id)?;
        validate_request(METHOD, request)?;
        require_valid_paging(request.paging)?;

        let entities = self
            .repository
            .find_entities(
                user_id,
                type_names::ASSET,
                &request.filter(),
                request.paging,
                &request.sequencing,
            )
            .await?;
        entities
            .iter()
            .map(|entity| asset::from_entity(Some(entity)).map_err(ServiceError::from))
            .collect()
    }

    /// Assets one relationship hop away from the anchor.
    ///
    /// Relationships whose far end is not an asset, or whose far-end entity
    /// no longer resolves, are omitted rather than failing the list.
    pub async fn related_assets(
        &self,
        user_id: &str,
        asset_guid: EntityGuid,
        paging: PageRequest,
    ) -> Result<Vec<RelatedAsset>, ServiceError> {
        const METHOD: &str = "related_assets";
        require_user_id(METHOD, user_id)?;
        require_valid_paging(paging)?;

        self.repository
            .get_entity(user_id, asset_guid)
            .await?
            .ok_or_else(|| ServiceError::unknown_guid(type_names::ASSET, asset_guid))?;

        let relationships = self
            .repository
            .relationships_for_entity(user_id, asset_guid, None)
            .await?;

        let mut related = Vec::new();
        for relationship in paging.slice(relationships) {
            let Some(proxy) = relationship.other_end(asset_guid) else {
                continue;
            };
            if !proxy.instance_type.is_type_of(type_names::ASSET) {
                continue;
            }
            if let Some(entity) = self.repository.get_entity(user_id, proxy.guid).await? {
                related.push(related_asset::from_relationship(
                    Some(&relationship),
                    Some(&entity),
                )?);
            }
        }
        Ok(related)
    }

    pub async fn create_software_capability(
        &self,
        user_id: &str,
        request: NewSoftwareCapabilityRequest,
    ) -> Result<SoftwareCapability, ServiceError> {
        const METHOD: &str = "create_software_capability";
        require_user_id(METHOD, user_id)?;
        validate_request(METHOD, &request)?;

        let mut skeleton = self
            .helper
            .new_entity_skeleton(type_names::SOFTWARE_CAPABILITY)?;
        let mut properties = InstanceProperties::new()
            .with("qualifiedName", PropertyValue::string(request.qualified_name))
            .with_optional_string("name", request.display_name)
            .with_optional_string("description", request.description)
            .with_optional_string("capabilityType", request.capability_type)
            .with_optional_string("capabilityVersion", request.capability_version)
            .with_optional_string("patchLevel", request.patch_level)
            .with_optional_string("source", request.source);
        for (name, value) in request.extended_properties {
            properties.set(name, PropertyValue::string(value));
        }
        skeleton.properties = properties;

        let stored = self.repository.add_entity(user_id, skeleton).await?;
        tracing::info!(
            message_id = AuditCode::InstanceCreated.message_id(),
            "{}",
            AuditCode::InstanceCreated.format(&[
                user_id,
                type_names::SOFTWARE_CAPABILITY,
                &stored.guid.to_string()
            ])
        );
        Ok(software_capability::from_entity(Some(&stored))?)
    }

    pub async fn get_software_capability(
        &self,
        user_id: &str,
        capability_guid: EntityGuid,
    ) -> Result<SoftwareCapability, ServiceError> {
        const METHOD: &str = "get_software_capability";
        require_user_id(METHOD, user_id)?;

        let entity = self
            .repository
            .get_entity(user_id, capability_guid)
            .await?
            .ok_or_else(|| {
                ServiceError::unknown_guid(type_names::SOFTWARE_CAPABILITY, capability_guid)
            })?;
        Ok(software_capability::from_entity(Some(&entity))?)
    }

    pub async fn find_software_capabilities(
        &self,
        user_id: &str,
        request: &SearchRequest,
    ) -> Result<Vec<SoftwareCapability>, ServiceError> {
        const METHOD: &str = "find_software_capabilities";
        require_user_id(METHOD, user_id)?;
        validate_request(METHOD, request)?;
        require_valid_paging(request.paging)?;

        let entities = self
            .repository
            .find_entities(
                user_id,
                type_names::SOFTWARE_CAPABILITY,
                &request.filter(),
                request.paging,
                &request.sequencing,
            )
            .await?;
        entities
            .iter()
            .map(|entity| software_capability::from_entity(Some(entity)).map_err(ServiceError::from))
            .collect()
    }

    /// An IT profile folded together with its identities and contact
    /// methods.
    pub async fn get_it_profile(
        &self,
        user_id: &str,
        profile_guid: EntityGuid,
    ) -> Result<ItProfile, ServiceError> {
        const METHOD: &str = "get_it_profile";
        require_user_id(METHOD, user_id)?;

        let primary = self
            .repository
            .get_entity(user_id, profile_guid)
            .await?
            .ok_or_else(|| ServiceError::unknown_guid(type_names::IT_PROFILE, profile_guid))?;

        let relationships = self
            .repository
            .relationships_for_entity(user_id, profile_guid, None)
            .await?;

        // Pull the far end of each profile link; a dangling proxy just
        // omits its entry from the bean.
        let mut supplementary: Vec<EntityDetail> = Vec::new();
        let mut cluster: Vec<Relationship> = Vec::new();
        for relationship in relationships {
            let is_profile_link = relationship
                .instance_type
                .is_type_of(type_names::PROFILE_IDENTITY)
                || relationship
                    .instance_type
                    .is_type_of(type_names::CONTACT_THROUGH);
            if !is_profile_link {
                continue;
            }
            let Some(proxy) = relationship.other_end(profile_guid) else {
                continue;
            };
            if let Some(entity) = self.repository.get_entity(user_id, proxy.guid).await? {
                supplementary.push(entity);
                cluster.push(relationship);
            }
        }

        Ok(it_profile::from_entity_cluster(
            Some(&primary),
            &supplementary,
            &cluster,
        )?)
    }
}
