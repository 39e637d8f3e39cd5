//! Repository helper: skeleton instance construction and type checks.
//!
//! Services never assemble raw instances by hand. The helper builds
//! skeletons (type + Active status + fresh guid + clock time) that the
//! caller fills with properties before handing them to the repository.

use std::sync::Arc;

use lodestone_domain::type_registry;
use lodestone_domain::{
    DomainError, EntityDetail, EntityGuid, EntityProxy, InstanceProperties, InstanceStatus,
    InstanceType, Relationship, RelationshipGuid,
};

use super::clock::ClockPort;

pub struct RepositoryHelper {
    clock: Arc<dyn ClockPort>,
}

impl RepositoryHelper {
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        Self { clock }
    }

    /// Resolve a registered type into an [`InstanceType`] descriptor.
    pub fn instance_type(&self, type_name: &str) -> Result<InstanceType, DomainError> {
        let def = type_registry::type_def(type_name)
            .ok_or_else(|| DomainError::unknown_type(type_name))?;
        Ok(InstanceType::new(def.type_def_guid(), def.type_name))
    }

    /// A new Active entity of the given type with an empty property bag.
    pub fn new_entity_skeleton(&self, type_name: &str) -> Result<EntityDetail, DomainError> {
        Ok(EntityDetail {
            guid: EntityGuid::new(),
            instance_type: self.instance_type(type_name)?,
            status: InstanceStatus::Active,
            properties: InstanceProperties::new(),
            classifications: Vec::new(),
            create_time: self.clock.now(),
            update_time: None,
        })
    }

    /// A new Active relationship of the given type between two entities.
    pub fn new_relationship_skeleton(
        &self,
        type_name: &str,
        end_one: EntityProxy,
        end_two: EntityProxy,
    ) -> Result<Relationship, DomainError> {
        Ok(Relationship {
            guid: RelationshipGuid::new(),
            instance_type: self.instance_type(type_name)?,
            status: InstanceStatus::Active,
            properties: InstanceProperties::new(),
            end_one,
            end_two,
            create_time: self.clock.now(),
        })
    }

    /// Inheritance-aware type check against the registry.
    pub fn is_type_of(&self, instance_type: &InstanceType, candidate: &str) -> bool {
        type_registry::is_type_of(&instance_type.type_name, candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::MockClockPort;
    use chrono::{TimeZone, Utc};
    use lodestone_domain::type_registry::type_names;

    fn helper_at(timestamp: chrono::DateTime<Utc>) -> RepositoryHelper {
        let mut clock = MockClockPort::new();
        clock.expect_now().returning(move || timestamp);
        RepositoryHelper::new(Arc::new(clock))
    }

    #[test]
    fn entity_skeleton_is_active_with_clock_time() {
        let t = Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();
        let skeleton = helper_at(t)
            .new_entity_skeleton(type_names::GLOSSARY_TERM)
            .unwrap();

        assert_eq!(skeleton.status, InstanceStatus::Active);
        assert_eq!(skeleton.create_time, t);
        assert_eq!(skeleton.instance_type.type_name, type_names::GLOSSARY_TERM);
        assert!(skeleton.properties.is_empty());
    }

    #[test]
    fn unknown_type_is_rejected() {
        let t = Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();
        let err = helper_at(t).new_entity_skeleton("NoSuchType").unwrap_err();
        assert!(matches!(err, DomainError::UnknownType(_)));
    }
}
