//! Port traits for infrastructure boundaries.
//!
//! The metadata repository is an external collaborator: everything the
//! services know about it goes through [`MetadataRepository`]. The only
//! in-tree implementation is the in-memory adapter; production deployments
//! plug a real repository connector in here.

use async_trait::async_trait;

use lodestone_domain::{
    EntityDetail, EntityGuid, InstanceProperties, Relationship, RelationshipGuid,
};
use lodestone_shared::paging::{PageRequest, SearchFilter, Sequencing};

// =============================================================================
// Error Types
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Instance not found: {type_name} {guid}")]
    NotFound { type_name: String, guid: String },
    #[error("User {user_id} is not authorized to {operation}")]
    NotAuthorized { user_id: String, operation: String },
    #[error("Repository error: {0}")]
    Backend(String),
}

// =============================================================================
// Repository Port
// =============================================================================

/// Generic repository-instance provider.
///
/// Every operation is keyed by the caller's user id; the repository owns
/// authorization decisions for its own content.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetadataRepository: Send + Sync {
    /// Store a new entity and return it as stored.
    async fn add_entity(
        &self,
        user_id: &str,
        entity: EntityDetail,
    ) -> Result<EntityDetail, RepoError>;

    /// Fetch one entity; soft-deleted entities read as `None`.
    async fn get_entity(
        &self,
        user_id: &str,
        guid: EntityGuid,
    ) -> Result<Option<EntityDetail>, RepoError>;

    /// All active entities of a type (inheritance-aware), sequenced and paged.
    async fn get_entities_by_type(
        &self,
        user_id: &str,
        type_name: &str,
        paging: PageRequest,
        sequencing: &Sequencing,
    ) -> Result<Vec<EntityDetail>, RepoError>;

    /// Active entities of a type whose string properties match the filter.
    async fn find_entities(
        &self,
        user_id: &str,
        type_name: &str,
        filter: &SearchFilter,
        paging: PageRequest,
        sequencing: &Sequencing,
    ) -> Result<Vec<EntityDetail>, RepoError>;

    /// Merge or replace an entity's property bag.
    async fn update_entity_properties(
        &self,
        user_id: &str,
        guid: EntityGuid,
        properties: InstanceProperties,
        replace: bool,
    ) -> Result<EntityDetail, RepoError>;

    /// Soft-delete (default) or purge an entity. Purging also removes the
    /// relationships anchored on it.
    async fn delete_entity(
        &self,
        user_id: &str,
        guid: EntityGuid,
        purge: bool,
    ) -> Result<(), RepoError>;

    /// Store a new relationship and return it as stored.
    async fn add_relationship(
        &self,
        user_id: &str,
        relationship: Relationship,
    ) -> Result<Relationship, RepoError>;

    /// Fetch one relationship; soft-deleted relationships read as `None`.
    async fn get_relationship(
        &self,
        user_id: &str,
        guid: RelationshipGuid,
    ) -> Result<Option<Relationship>, RepoError>;

    /// Active relationships attached to an entity, optionally restricted to
    /// one relationship type, in creation order.
    async fn relationships_for_entity<'a>(
        &self,
        user_id: &str,
        guid: EntityGuid,
        relationship_type: Option<&'a str>,
    ) -> Result<Vec<Relationship>, RepoError>;
}
