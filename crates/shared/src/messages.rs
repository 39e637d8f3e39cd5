//! Error and audit message catalogs.
//!
//! Every failure and audit event the platform reports carries a stable
//! message id so operators can search runbooks and dashboards by id. The
//! catalogs are plain enums: one variant per message, each resolving to a
//! [`MessageDefinition`] with a parameterized template.
//!
//! ## Versioning Policy
//!
//! - Message ids are append-only; an id is never reused for a different
//!   meaning
//! - Templates may be reworded, ids may not change

// =============================================================================
// Message Definition
// =============================================================================

/// The printable definition behind one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageDefinition {
    /// Stable identifier, e.g. `LODESTONE-GLOSSARY-400-001`
    pub message_id: &'static str,
    /// Template with `{0}`, `{1}`, ... placeholders
    pub template: &'static str,
    /// What the platform did when this occurred
    pub system_action: &'static str,
    /// What the operator or caller should do about it
    pub user_action: &'static str,
}

impl MessageDefinition {
    /// Substitute ordered parameters into the template.
    ///
    /// Placeholders without a matching parameter are left as-is; surplus
    /// parameters are ignored.
    pub fn format(&self, params: &[&str]) -> String {
        let mut message = self.template.to_string();
        for (index, param) in params.iter().enumerate() {
            message = message.replace(&format!("{{{index}}}"), param);
        }
        message
    }
}

// =============================================================================
// Error Catalog
// =============================================================================

/// Catalog of caller-visible failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogError {
    /// A required parameter was null or empty
    NullParameter,
    /// A caller-supplied guid resolved to no instance
    UnknownGuid,
    /// A type name is not in the type registry
    UnknownTypeName,
    /// The caller is not permitted to perform the operation
    UserNotAuthorized,
    /// The repository rejected or failed the request
    RepositoryFailure,
    /// A response envelope carried an unexpected category
    UnexpectedResponseCategory,
    /// A converter was handed no instance where one is required
    MissingMetadataInstance,
    /// A converter was handed an instance of the wrong type
    UnexpectedInstanceType,
    /// A supplied parameter value failed validation
    InvalidParameterValue,
    /// Paging parameters were out of range
    InvalidPaging,
    /// The remote service could not be reached
    ServiceUnavailable,
}

impl CatalogError {
    pub fn definition(&self) -> MessageDefinition {
        match self {
            Self::NullParameter => MessageDefinition {
                message_id: "LODESTONE-OMAS-400-001",
                template: "The {0} parameter passed to {1} is null or empty",
                system_action: "The request was rejected before reaching the repository.",
                user_action: "Supply a value for the parameter and retry.",
            },
            Self::UnknownGuid => MessageDefinition {
                message_id: "LODESTONE-OMAS-400-002",
                template: "No {0} instance with unique identifier {1} is known to the repository",
                system_action: "The request was rejected; no instance was read or changed.",
                user_action: "Check the identifier came from this metadata collection.",
            },
            Self::UnknownTypeName => MessageDefinition {
                message_id: "LODESTONE-OMAS-400-003",
                template: "The type name {0} is not defined in the open metadata types",
                system_action: "The request was rejected before reaching the repository.",
                user_action: "Use a type name from the supported type registry.",
            },
            Self::InvalidParameterValue => MessageDefinition {
                message_id: "LODESTONE-OMAS-400-005",
                template: "The {0} parameter passed to {1} is invalid: {2}",
                system_action: "The request was rejected before reaching the repository.",
                user_action: "Correct the parameter value and retry.",
            },
            Self::InvalidPaging => MessageDefinition {
                message_id: "LODESTONE-OMAS-400-004",
                template: "The page size {0} is outside the supported range 1..={1}",
                system_action: "The request was rejected before reaching the repository.",
                user_action: "Reduce the requested page size.",
            },
            Self::UserNotAuthorized => MessageDefinition {
                message_id: "LODESTONE-OMAS-403-001",
                template: "User {0} is not authorized to perform the {1} operation",
                system_action: "The request was refused and the refusal was audited.",
                user_action: "Request access from the metadata security administrator.",
            },
            Self::RepositoryFailure => MessageDefinition {
                message_id: "LODESTONE-OMAS-500-001",
                template: "The metadata repository reported a failure: {0}",
                system_action: "The request was abandoned; no partial result is returned.",
                user_action: "Check the repository's availability and its own audit log.",
            },
            Self::UnexpectedResponseCategory => MessageDefinition {
                message_id: "LODESTONE-OMAS-500-002",
                template: "A call to {0} returned the unexpected response category {1}",
                system_action: "The response payload was discarded.",
                user_action: "Check that client and server versions are compatible.",
            },
            Self::MissingMetadataInstance => MessageDefinition {
                message_id: "LODESTONE-OMAS-500-003",
                template: "A {0} conversion in {1} received no metadata instance",
                system_action: "The conversion was abandoned.",
                user_action: "This is a logic error in the service; report it.",
            },
            Self::UnexpectedInstanceType => MessageDefinition {
                message_id: "LODESTONE-OMAS-500-004",
                template: "A conversion in {0} expected an instance of type {1} but received {2}",
                system_action: "The conversion was abandoned.",
                user_action: "Check the repository's type assignments for the instance.",
            },
            Self::ServiceUnavailable => MessageDefinition {
                message_id: "LODESTONE-OMAS-503-001",
                template: "The {0} request to {1} could not be issued: {2}",
                system_action: "No request reached the server.",
                user_action: "Check the platform URL and that the server is running.",
            },
        }
    }

    /// Shorthand: format this catalog entry's template.
    pub fn format(&self, params: &[&str]) -> String {
        self.definition().format(params)
    }

    pub fn message_id(&self) -> &'static str {
        self.definition().message_id
    }
}

// =============================================================================
// Audit Catalog
// =============================================================================

/// Severity attached to audit events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditSeverity {
    Startup,
    Shutdown,
    Info,
    Security,
    Error,
}

/// Catalog of audit events the server records through its logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditCode {
    ServiceStarting,
    ServiceShutdown,
    InstanceCreated,
    InstanceDeleted,
    UnauthorizedRequest,
    RepositoryError,
}

impl AuditCode {
    pub fn severity(&self) -> AuditSeverity {
        match self {
            Self::ServiceStarting => AuditSeverity::Startup,
            Self::ServiceShutdown => AuditSeverity::Shutdown,
            Self::InstanceCreated | Self::InstanceDeleted => AuditSeverity::Info,
            Self::UnauthorizedRequest => AuditSeverity::Security,
            Self::RepositoryError => AuditSeverity::Error,
        }
    }

    pub fn definition(&self) -> MessageDefinition {
        match self {
            Self::ServiceStarting => MessageDefinition {
                message_id: "LODESTONE-AUDIT-0001",
                template: "The {0} access service is starting on server {1}",
                system_action: "The service is initializing its REST surface.",
                user_action: "None.",
            },
            Self::ServiceShutdown => MessageDefinition {
                message_id: "LODESTONE-AUDIT-0002",
                template: "The {0} access service on server {1} is shutting down",
                system_action: "In-flight requests complete; new requests are refused.",
                user_action: "None.",
            },
            Self::InstanceCreated => MessageDefinition {
                message_id: "LODESTONE-AUDIT-0003",
                template: "User {0} created a {1} instance with guid {2}",
                system_action: "The instance was stored in the repository.",
                user_action: "None.",
            },
            Self::InstanceDeleted => MessageDefinition {
                message_id: "LODESTONE-AUDIT-0004",
                template: "User {0} deleted the {1} instance with guid {2}",
                system_action: "The instance is no longer returned by reads.",
                user_action: "None.",
            },
            Self::UnauthorizedRequest => MessageDefinition {
                message_id: "LODESTONE-AUDIT-0005",
                template: "User {0} was refused the {1} operation",
                system_action: "The request was refused.",
                user_action: "Review whether the caller should have access.",
            },
            Self::RepositoryError => MessageDefinition {
                message_id: "LODESTONE-AUDIT-0006",
                template: "The metadata repository failed during {0}: {1}",
                system_action: "The failing request returned a property-server error.",
                user_action: "Check the repository's availability.",
            },
        }
    }

    pub fn format(&self, params: &[&str]) -> String {
        self.definition().format(params)
    }

    pub fn message_id(&self) -> &'static str {
        self.definition().message_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_substitutes_ordered_parameters() {
        let message = CatalogError::UnknownGuid.format(&["GlossaryTerm", "abc-123"]);
        assert_eq!(
            message,
            "No GlossaryTerm instance with unique identifier abc-123 is known to the repository"
        );
    }

    #[test]
    fn format_leaves_unfilled_placeholders() {
        let message = CatalogError::NullParameter.format(&["qualifiedName"]);
        assert!(message.contains("qualifiedName"));
        assert!(message.contains("{1}"));
    }

    #[test]
    fn message_ids_are_unique() {
        let errors = [
            CatalogError::NullParameter,
            CatalogError::UnknownGuid,
            CatalogError::UnknownTypeName,
            CatalogError::UserNotAuthorized,
            CatalogError::RepositoryFailure,
            CatalogError::UnexpectedResponseCategory,
            CatalogError::MissingMetadataInstance,
            CatalogError::UnexpectedInstanceType,
            CatalogError::InvalidParameterValue,
            CatalogError::InvalidPaging,
            CatalogError::ServiceUnavailable,
        ];
        for (i, a) in errors.iter().enumerate() {
            for b in &errors[i + 1..] {
                assert_ne!(a.message_id(), b.message_id());
            }
        }
    }

    #[test]
    fn audit_codes_carry_severity() {
        assert_eq!(
            AuditCode::UnauthorizedRequest.severity(),
            AuditSeverity::Security
        );
        assert_eq!(AuditCode::ServiceStarting.severity(), AuditSeverity::Startup);
    }
}
