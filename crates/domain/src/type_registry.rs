//! Static registry of the open metadata types this platform works with.
//!
//! The repository tags every instance with a type name; services classify
//! instances by walking the supertype chain recorded here instead of
//! matching raw strings at each call site.

use uuid::{uuid, Uuid};

use crate::ids::TypeDefGuid;

/// Well-known type names.
pub mod type_names {
    // Entity types
    pub const REFERENCEABLE: &str = "Referenceable";
    pub const ASSET: &str = "Asset";
    pub const PROCESS: &str = "Process";
    pub const DATA_SET: &str = "DataSet";
    pub const GLOSSARY: &str = "Glossary";
    pub const GLOSSARY_TERM: &str = "GlossaryTerm";
    pub const PROJECT: &str = "Project";
    pub const CAMPAIGN: &str = "Campaign";
    pub const TASK: &str = "Task";
    pub const ACTOR_PROFILE: &str = "ActorProfile";
    pub const IT_PROFILE: &str = "ITProfile";
    pub const PERSON: &str = "Person";
    pub const USER_IDENTITY: &str = "UserIdentity";
    pub const CONTACT_DETAILS: &str = "ContactDetails";
    pub const SOFTWARE_CAPABILITY: &str = "SoftwareCapability";
    pub const SOFTWARE_SERVER_CAPABILITY: &str = "SoftwareServerCapability";

    // Relationship types
    pub const TERM_ANCHOR: &str = "TermAnchor";
    pub const SEMANTIC_ASSIGNMENT: &str = "SemanticAssignment";
    pub const PROJECT_TEAM: &str = "ProjectTeam";
    pub const PROFILE_IDENTITY: &str = "ProfileIdentity";
    pub const CONTACT_THROUGH: &str = "ContactThrough";
    pub const PROCESS_CALL: &str = "ProcessCall";
    pub const DATA_FLOW: &str = "DataFlow";
}

/// Well-known property names.
pub mod property_names {
    pub const QUALIFIED_NAME: &str = "qualifiedName";
    pub const NAME: &str = "name";
    pub const DISPLAY_NAME: &str = "displayName";
    pub const DESCRIPTION: &str = "description";
}

/// One registered type: its stable type-def guid and optional supertype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeDef {
    pub type_name: &'static str,
    pub guid: Uuid,
    pub super_type: Option<&'static str>,
}

impl TypeDef {
    pub fn type_def_guid(&self) -> TypeDefGuid {
        TypeDefGuid::from_uuid(self.guid)
    }
}

const TYPE_DEFS: &[TypeDef] = &[
    TypeDef {
        type_name: type_names::REFERENCEABLE,
        guid: uuid!("a32316b8-dc8c-48c9-8a93-af4d000d58f3"),
        super_type: None,
    },
    TypeDef {
        type_name: type_names::ASSET,
        guid: uuid!("896d14c2-7522-4f6c-8519-757711943fe6"),
        super_type: Some(type_names::REFERENCEABLE),
    },
    TypeDef {
        type_name: type_names::PROCESS,
        guid: uuid!("d8f33bd7-afa9-4a11-a8c7-07dcec83c050"),
        super_type: Some(type_names::ASSET),
    },
    TypeDef {
        type_name: type_names::DATA_SET,
        guid: uuid!("1449911c-4f44-4c22-abc0-7540154feefb"),
        super_type: Some(type_names::ASSET),
    },
    TypeDef {
        type_name: type_names::GLOSSARY,
        guid: uuid!("36f66863-9726-4b41-97ee-714fd0dc6fe4"),
        super_type: Some(type_names::REFERENCEABLE),
    },
    TypeDef {
        type_name: type_names::GLOSSARY_TERM,
        guid: uuid!("0db3e6ec-f5ef-4d75-ae38-b7ee6fd6ec0a"),
        super_type: Some(type_names::REFERENCEABLE),
    },
    TypeDef {
        type_name: type_names::PROJECT,
        guid: uuid!("0799569f-0c16-4a1f-86d9-e2e89568f7fd"),
        super_type: Some(type_names::REFERENCEABLE),
    },
    TypeDef {
        type_name: type_names::CAMPAIGN,
        guid: uuid!("41437629-8609-49ef-8930-8c435c912572"),
        super_type: Some(type_names::PROJECT),
    },
    TypeDef {
        type_name: type_names::TASK,
        guid: uuid!("93dbc58d-c826-4bc2-b36f-195148d46f86"),
        super_type: Some(type_names::PROJECT),
    },
    TypeDef {
        type_name: type_names::ACTOR_PROFILE,
        guid: uuid!("5a2f38dc-d69d-4a6f-ad26-ac86f118fa35"),
        super_type: Some(type_names::REFERENCEABLE),
    },
    TypeDef {
        type_name: type_names::IT_PROFILE,
        guid: uuid!("81394f85-6008-465b-926e-b3fae4668937"),
        super_type: Some(type_names::ACTOR_PROFILE),
    },
    TypeDef {
        type_name: type_names::PERSON,
        guid: uuid!("ac406bf8-e53e-49f1-9088-2af28bbbd285"),
        super_type: Some(type_names::ACTOR_PROFILE),
    },
    TypeDef {
        type_name: type_names::USER_IDENTITY,
        guid: uuid!("fbe95779-1f3c-4ac6-aa9d-24963ff16282"),
        super_type: Some(type_names::REFERENCEABLE),
    },
    TypeDef {
        type_name: type_names::CONTACT_DETAILS,
        guid: uuid!("79296df8-645a-4ef7-a011-912d1cdcf75a"),
        super_type: Some(type_names::REFERENCEABLE),
    },
    TypeDef {
        type_name: type_names::SOFTWARE_CAPABILITY,
        guid: uuid!("54055c38-b9ad-4a66-a75b-14dc643d4c69"),
        super_type: Some(type_names::REFERENCEABLE),
    },
    TypeDef {
        type_name: type_names::SOFTWARE_SERVER_CAPABILITY,
        guid: uuid!("fe30a033-8f86-4d17-8986-e6166fa24177"),
        super_type: Some(type_names::SOFTWARE_CAPABILITY),
    },
    TypeDef {
        type_name: type_names::TERM_ANCHOR,
        guid: uuid!("1d43d661-bdc7-4a91-a996-3239b8f82e56"),
        super_type: None,
    },
    TypeDef {
        type_name: type_names::SEMANTIC_ASSIGNMENT,
        guid: uuid!("e6670973-645f-441a-bec7-6f5570345b92"),
        super_type: None,
    },
    TypeDef {
        type_name: type_names::PROJECT_TEAM,
        guid: uuid!("746875af-2e41-4d1f-864b-35265df95add"),
        super_type: None,
    },
    TypeDef {
        type_name: type_names::PROFILE_IDENTITY,
        guid: uuid!("01664609-e777-4079-b543-6baffe910ff1"),
        super_type: None,
    },
    TypeDef {
        type_name: type_names::CONTACT_THROUGH,
        guid: uuid!("6cb9af43-184e-4dfa-854a-1572bcf0fe75"),
        super_type: None,
    },
    TypeDef {
        type_name: type_names::PROCESS_CALL,
        guid: uuid!("af904501-6347-4f52-8378-da50e8d74828"),
        super_type: None,
    },
    TypeDef {
        type_name: type_names::DATA_FLOW,
        guid: uuid!("d2490c0c-06cc-458a-add2-33cf2f5dd724"),
        super_type: None,
    },
];

/// Look up a registered type by name.
pub fn type_def(type_name: &str) -> Option<&'static TypeDef> {
    TYPE_DEFS.iter().find(|def| def.type_name == type_name)
}

/// Whether `type_name` equals `candidate` or inherits from it.
///
/// Unregistered type names match only themselves.
pub fn is_type_of(type_name: &str, candidate: &str) -> bool {
    if type_name == candidate {
        return true;
    }
    let mut current = type_def(type_name);
    while let Some(def) = current {
        if def.type_name == candidate {
            return true;
        }
        current = def.super_type.and_then(type_def);
    }
    false
}
