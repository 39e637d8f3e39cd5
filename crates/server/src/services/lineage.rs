//! Lineage view service.

use std::collections::HashSet;
use std::sync::Arc;

use lodestone_domain::elements::{LineageEdge, LineageGraph, ProcessCall};
use lodestone_domain::type_registry::type_names;
use lodestone_domain::{EntityGuid, RelationshipGuid};
use lodestone_shared::paging::PageRequest;

use crate::converters::{element_stub, process_call};
use crate::infrastructure::MetadataRepository;

use super::{require_user_id, require_valid_paging, ServiceError};

/// Hard ceiling on lineage walks; requests above it are clamped.
pub const MAX_LINEAGE_DEPTH: usize = 20;

const DEFAULT_LINEAGE_DEPTH: usize = 5;

pub struct LineageService {
    repository: Arc<dyn MetadataRepository>,
}

impl LineageService {
    pub fn new(repository: Arc<dyn MetadataRepository>) -> Self {
        Self { repository }
    }

    /// Call edges attached to a process, in creation order.
    pub async fn process_calls(
        &self,
        user_id: &str,
        process_guid: EntityGuid,
        paging: PageRequest,
    ) -> Result<Vec<ProcessCall>, ServiceError> {
        const METHOD: &str = "process_calls";
        require_user_id(METHOD, user_id)?;
        require_valid_paging(paging)?;

        self.repository
            .get_entity(user_id, process_guid)
            .await?
            .ok_or_else(|| ServiceError::unknown_guid(type_names::PROCESS, process_guid))?;

        let relationships = self
            .repository
            .relationships_for_entity(user_id, process_guid, Some(type_names::PROCESS_CALL))
            .await?;

        paging
            .slice(relationships)
            .iter()
            .map(|relationship| {
                process_call::from_relationship(Some(relationship)).map_err(ServiceError::from)
            })
            .collect()
    }

    /// Breadth-first walk of data-flow and process-call edges around an
    /// anchor, bounded by depth.
    pub async fn lineage_graph(
        &self,
        user_id: &str,
        anchor_guid: EntityGuid,
        max_depth: Option<usize>,
    ) -> Result<LineageGraph, ServiceError> {
        const METHOD: &str = "lineage_graph";
        require_user_id(METHOD, user_id)?;

        let anchor = self
            .repository
            .get_entity(user_id, anchor_guid)
            .await?
            .ok_or_else(|| ServiceError::unknown_guid(type_names::ASSET, anchor_guid))?;

        let max_depth = max_depth
            .unwrap_or(DEFAULT_LINEAGE_DEPTH)
            .clamp(1, MAX_LINEAGE_DEPTH);

        let mut edges: Vec<LineageEdge> = Vec::new();
        let mut seen_relationships: HashSet<RelationshipGuid> = HashSet::new();
        let mut visited: HashSet<EntityGuid> = HashSet::new();
        let mut frontier = vec![anchor_guid];
        visited.insert(anchor_guid);
        let mut truncated = false;

        for _ in 0..max_depth {
            if frontier.is_empty() {
                break;
            }
            let mut next_frontier = Vec::new();
            for guid in frontier.drain(..) {
                for lineage_type in [type_names::DATA_FLOW, type_names::PROCESS_CALL] {
                    let relationships = self
                        .repository
                        .relationships_for_entity(user_id, guid, Some(lineage_type))
                        .await?;
                    for relationship in relationships {
                        if !seen_relationships.insert(relationship.guid) {
                            continue;
                        }
                        edges.push(LineageEdge {
                            guid: relationship.guid,
                            relationship_type_name: relationship.instance_type.type_name.clone(),
                            source: element_stub::from_relationship_end(&relationship, true),
                            target: element_stub::from_relationship_end(&relationship, false),
                        });
                        if let Some(far) = relationship.other_end(guid) {
                            if visited.insert(far.guid) {
                                next_frontier.push(far.guid);
                            }
                        }
                    }
                }
            }
            frontier = next_frontier;
        }
        if !frontier.is_empty() {
            truncated = true;
        }

        Ok(LineageGraph {
            anchor: element_stub::from_proxy(&anchor.as_proxy()),
            edges,
            truncated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{InMemoryRepository, RepositoryHelper, SystemClock};
    use lodestone_domain::{EntityDetail, InstanceProperties, PropertyValue};

    const USER: &str = "calliequartile";

    struct Fixture {
        service: LineageService,
        repository: Arc<InMemoryRepository>,
        helper: Arc<RepositoryHelper>,
    }

    fn fixture() -> Fixture {
        let clock = Arc::new(SystemClock::new());
        let repository = Arc::new(InMemoryRepository::new(clock.clone()));
        Fixture {
            service: LineageService::new(repository.clone()),
            repository,
            helper: Arc::new(RepositoryHelper::new(clock)),
        }
    }

    async fn process(fixture: &Fixture, qualified_name: &str) -> EntityDetail {
        let mut skeleton = fixture
            .helper
            .new_entity_skeleton(type_names::PROCESS)
            .unwrap();
        skeleton.properties = InstanceProperties::new()
            .with("qualifiedName", PropertyValue::string(qualified_name));
        fixture.repository.add_entity(USER, skeleton).await.unwrap()
    }

    async fn link(fixture: &Fixture, type_name: &str, from: &EntityDetail, to: &EntityDetail) {
        let relationship = fixture
            .helper
            .new_relationship_skeleton(type_name, from.as_proxy(), to.as_proxy())
            .unwrap();
        fixture
            .repository
            .add_relationship(USER, relationship)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn process_calls_convert_in_creation_order() {
        let fixture = fixture();
        let orchestrator = process(&fixture, "proc::orchestrator").await;
        let extract = process(&fixture, "proc::extract").await;
        let load = process(&fixture, "proc::load").await;

        link(&fixture, type_names::PROCESS_CALL, &orchestrator, &extract).await;
        link(&fixture, type_names::PROCESS_CALL, &orchestrator, &load).await;

        let calls = fixture
            .service
            .process_calls(USER, orchestrator.guid, PageRequest::default())
            .await
            .unwrap();
        let called: Vec<_> = calls
            .iter()
            .filter_map(|c| c.called.unique_name.as_deref())
            .collect();
        assert_eq!(called, vec!["proc::extract", "proc::load"]);
        assert!(calls
            .iter()
            .all(|c| c.caller.unique_name.as_deref() == Some("proc::orchestrator")));
    }

    #[tokio::test]
    async fn lineage_walk_is_depth_bounded() {
        let fixture = fixture();
        // a -> b -> c -> d as a data-flow chain
        let a = process(&fixture, "proc::a").await;
        let b = process(&fixture, "proc::b").await;
        let c = process(&fixture, "proc::c").await;
        let d = process(&fixture, "proc::d").await;
        link(&fixture, type_names::DATA_FLOW, &a, &b).await;
        link(&fixture, type_names::DATA_FLOW, &b, &c).await;
        link(&fixture, type_names::DATA_FLOW, &c, &d).await;

        let shallow = fixture
            .service
            .lineage_graph(USER, a.guid, Some(1))
            .await
            .unwrap();
        assert_eq!(shallow.edges.len(), 1);
        assert!(shallow.truncated);

        let full = fixture
            .service
            .lineage_graph(USER, a.guid, Some(10))
            .await
            .unwrap();
        assert_eq!(full.edges.len(), 3);
        assert!(!full.truncated);
        assert_eq!(full.anchor.unique_name.as_deref(), Some("proc::a"));
    }

    #[tokio::test]
    async fn cycles_do_not_loop_the_walk() {
        let fixture = fixture();
        let a = process(&fixture, "proc::a").await;
        let b = process(&fixture, "proc::b").await;
        link(&fixture, type_names::DATA_FLOW, &a, &b).await;
        link(&fixture, type_names::DATA_FLOW, &b, &a).await;

        let graph = fixture
            .service
            .lineage_graph(USER, a.guid, Some(10))
            .await
            .unwrap();
        assert_eq!(graph.edges.len(), 2);
    }
}
