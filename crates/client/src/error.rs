//! Client-side error types.
//!
//! Error envelopes decode into the matching typed variant so callers can
//! distinguish a bad request from a server-side failure without string
//! matching.

use thiserror::Error;

use lodestone_shared::messages::CatalogError;
use lodestone_shared::responses::{ServiceErrorCode, ServiceFault};

#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// The server rejected a caller-supplied parameter or guid
    #[error("Invalid parameter ({message_id}): {message}")]
    InvalidParameter {
        message_id: String,
        message: String,
        parameter_name: Option<String>,
        guid: Option<String>,
    },

    /// The caller's identity lacks permission for the operation
    #[error("Not authorized ({message_id}): {message}")]
    NotAuthorized { message_id: String, message: String },

    /// The server or its repository failed
    #[error("Property server failure ({message_id}): {message}")]
    PropertyServer { message_id: String, message: String },

    /// The envelope category did not match what the call expected
    #[error("The {method} call to {url} returned the unexpected response category {category}")]
    UnexpectedResponse {
        method: String,
        url: String,
        category: String,
    },

    /// The request never reached the server
    #[error("The {method} request to {url} could not be issued: {message}")]
    ServiceUnavailable {
        method: String,
        url: String,
        message: String,
    },

    /// The client itself is misconfigured (bad URL, unreadable certificate)
    #[error("Client configuration error: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Build the typed error matching a decoded fault payload.
    pub(crate) fn from_fault(fault: ServiceFault) -> Self {
        match fault.code {
            ServiceErrorCode::InvalidParameter => Self::InvalidParameter {
                message_id: fault.message_id,
                message: fault.message,
                parameter_name: fault.parameter_name,
                guid: fault.guid,
            },
            ServiceErrorCode::NotAuthorized => Self::NotAuthorized {
                message_id: fault.message_id,
                message: fault.message,
            },
            ServiceErrorCode::PropertyServer | ServiceErrorCode::Unknown => Self::PropertyServer {
                message_id: fault.message_id,
                message: fault.message,
            },
        }
    }

    /// The catalog message id behind this error, when one applies.
    pub fn message_id(&self) -> Option<&str> {
        match self {
            Self::InvalidParameter { message_id, .. }
            | Self::NotAuthorized { message_id, .. }
            | Self::PropertyServer { message_id, .. } => Some(message_id),
            Self::UnexpectedResponse { .. } => {
                Some(CatalogError::UnexpectedResponseCategory.message_id())
            }
            Self::ServiceUnavailable { .. } => Some(CatalogError::ServiceUnavailable.message_id()),
            Self::Configuration(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faults_map_to_their_typed_variant() {
        let fault = ServiceFault::new(
            ServiceErrorCode::NotAuthorized,
            "LODESTONE-OMAS-403-001",
            "User x is not authorized",
        );
        let err = ClientError::from_fault(fault);
        assert!(matches!(err, ClientError::NotAuthorized { .. }));
        assert_eq!(err.message_id(), Some("LODESTONE-OMAS-403-001"));
    }

    #[test]
    fn unknown_codes_degrade_to_property_server() {
        let fault = ServiceFault::new(ServiceErrorCode::Unknown, "LODESTONE-OMAS-999-001", "?");
        assert!(matches!(
            ClientError::from_fault(fault),
            ClientError::PropertyServer { .. }
        ));
    }
}
