//! View services: one per REST view, each owning the repository calls and
//! conversions behind its endpoints.
//!
//! Services are stateless per call; they hold only `Arc` references to the
//! repository port and the helper, so one instance serves every request.

pub mod asset_catalog;
pub mod glossary;
pub mod lineage;
pub mod project;

use lodestone_shared::messages::CatalogError;
use lodestone_shared::paging::{PageRequest, MAX_PAGE_SIZE};
use lodestone_shared::responses::{ServiceErrorCode, ServiceFault};
use validator::Validate;

use crate::converters::ConvertError;
use crate::infrastructure::RepoError;

pub use asset_catalog::AssetCatalogService;
pub use glossary::GlossaryService;
pub use lineage::LineageService;
pub use project::ProjectService;

// =============================================================================
// Service Error
// =============================================================================

/// Failures surfaced by the view services.
///
/// Three recognized kinds reach callers: invalid-parameter (including
/// unknown guids), not-authorized, and property-server. `fault()` renders
/// the wire form with the catalog message id.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("The {parameter} parameter passed to {method} is null or empty")]
    NullParameter {
        method: &'static str,
        parameter: &'static str,
    },
    #[error("The {parameter} parameter passed to {method} is invalid: {message}")]
    InvalidParameter {
        method: &'static str,
        parameter: String,
        message: String,
    },
    #[error("The page size {page_size} is outside the supported range 1..={MAX_PAGE_SIZE}")]
    InvalidPaging { page_size: usize },
    #[error("The type name {type_name} is not defined in the open metadata types")]
    UnknownTypeName { type_name: String },
    #[error("No {type_name} instance with unique identifier {guid} is known to the repository")]
    UnknownGuid { type_name: String, guid: String },
    #[error("User {user_id} is not authorized to perform the {operation} operation")]
    NotAuthorized { user_id: String, operation: String },
    #[error("The metadata repository reported a failure: {message}")]
    Repository { message: String },
    #[error(transparent)]
    Conversion(#[from] ConvertError),
}

impl ServiceError {
    pub fn unknown_guid(type_name: impl Into<String>, guid: impl ToString) -> Self {
        Self::UnknownGuid {
            type_name: type_name.into(),
            guid: guid.to_string(),
        }
    }

    /// Render the wire form carried inside an error envelope.
    pub fn fault(&self) -> ServiceFault {
        match self {
            Self::NullParameter { method, parameter } => ServiceFault::new(
                ServiceErrorCode::InvalidParameter,
                CatalogError::NullParameter.message_id(),
                CatalogError::NullParameter.format(&[parameter, method]),
            )
            .with_parameter(*parameter),
            Self::InvalidParameter {
                method,
                parameter,
                message,
            } => ServiceFault::new(
                ServiceErrorCode::InvalidParameter,
                CatalogError::InvalidParameterValue.message_id(),
                CatalogError::InvalidParameterValue.format(&[parameter, method, message]),
            )
            .with_parameter(parameter.clone()),
            Self::InvalidPaging { page_size } => ServiceFault::new(
                ServiceErrorCode::InvalidParameter,
                CatalogError::InvalidPaging.message_id(),
                CatalogError::InvalidPaging
                    .format(&[&page_size.to_string(), &MAX_PAGE_SIZE.to_string()]),
            )
            .with_parameter("page_size"),
            Self::UnknownTypeName { type_name } => ServiceFault::new(
                ServiceErrorCode::InvalidParameter,
                CatalogError::UnknownTypeName.message_id(),
                CatalogError::UnknownTypeName.format(&[type_name]),
            ),
            Self::UnknownGuid { type_name, guid } => ServiceFault::new(
                ServiceErrorCode::InvalidParameter,
                CatalogError::UnknownGuid.message_id(),
                CatalogError::UnknownGuid.format(&[type_name, guid]),
            )
            .with_guid(guid.clone()),
            Self::NotAuthorized { user_id, operation } => ServiceFault::new(
                ServiceErrorCode::NotAuthorized,
                CatalogError::UserNotAuthorized.message_id(),
                CatalogError::UserNotAuthorized.format(&[user_id, operation]),
            ),
            Self::Repository { message } => ServiceFault::new(
                ServiceErrorCode::PropertyServer,
                CatalogError::RepositoryFailure.message_id(),
                CatalogError::RepositoryFailure.format(&[message]),
            ),
            Self::Conversion(ConvertError::MissingInstance { expected, method }) => {
                ServiceFault::new(
                    ServiceErrorCode::PropertyServer,
                    CatalogError::MissingMetadataInstance.message_id(),
                    CatalogError::MissingMetadataInstance.format(&[expected, method]),
                )
            }
            Self::Conversion(ConvertError::UnexpectedType {
                method,
                expected,
                actual,
            }) => ServiceFault::new(
                ServiceErrorCode::PropertyServer,
                CatalogError::UnexpectedInstanceType.message_id(),
                CatalogError::UnexpectedInstanceType.format(&[method, expected, actual]),
            ),
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound { type_name, guid } => Self::UnknownGuid { type_name, guid },
            RepoError::NotAuthorized { user_id, operation } => {
                Self::NotAuthorized { user_id, operation }
            }
            RepoError::Backend(message) => Self::Repository { message },
        }
    }
}

impl From<lodestone_domain::DomainError> for ServiceError {
    fn from(err: lodestone_domain::DomainError) -> Self {
        match err {
            lodestone_domain::DomainError::UnknownType(type_name) => {
                Self::UnknownTypeName { type_name }
            }
            other => Self::Repository {
                message: other.to_string(),
            },
        }
    }
}

// =============================================================================
// Shared Guards
// =============================================================================

/// Every operation requires a caller identity.
pub(crate) fn require_user_id(method: &'static str, user_id: &str) -> Result<(), ServiceError> {
    if user_id.trim().is_empty() {
        return Err(ServiceError::NullParameter {
            method,
            parameter: "user_id",
        });
    }
    Ok(())
}

/// Page sizes outside 1..=MAX_PAGE_SIZE are refused before the repository
/// sees them.
pub(crate) fn require_valid_paging(paging: PageRequest) -> Result<(), ServiceError> {
    if paging.is_valid() {
        Ok(())
    } else {
        Err(ServiceError::InvalidPaging {
            page_size: paging.page_size,
        })
    }
}

/// Run validator derives and surface the first failure as an
/// invalid-parameter error.
pub(crate) fn validate_request(
    method: &'static str,
    request: &impl Validate,
) -> Result<(), ServiceError> {
    request.validate().map_err(|errors| {
        let (parameter, message) = errors
            .field_errors()
            .into_iter()
            .next()
            .map(|(field, field_errors)| {
                let message = field_errors
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "invalid value".to_string());
                (field.to_string(), message)
            })
            .unwrap_or_else(|| ("request".to_string(), "invalid request body".to_string()));
        ServiceError::InvalidParameter {
            method,
            parameter,
            message,
        }
    })
}
