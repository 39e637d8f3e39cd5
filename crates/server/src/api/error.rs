//! HTTP error mapping.
//!
//! Keep the services free of transport concerns by translating
//! [`ServiceError`] into status codes and error envelopes here.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use lodestone_shared::messages::AuditCode;
use lodestone_shared::responses::{ResponseEnvelope, ServiceErrorCode};

use crate::services::ServiceError;

/// Transport wrapper around a service failure.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let fault = self.0.fault();
        let status = match fault.code {
            ServiceErrorCode::InvalidParameter => StatusCode::BAD_REQUEST,
            ServiceErrorCode::NotAuthorized => StatusCode::FORBIDDEN,
            ServiceErrorCode::PropertyServer | ServiceErrorCode::Unknown => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        match &self.0 {
            ServiceError::NotAuthorized { user_id, operation } => {
                tracing::warn!(
                    message_id = AuditCode::UnauthorizedRequest.message_id(),
                    "{}",
                    AuditCode::UnauthorizedRequest.format(&[user_id, operation])
                );
            }
            ServiceError::Repository { message } => {
                tracing::error!(
                    message_id = AuditCode::RepositoryError.message_id(),
                    "{}",
                    AuditCode::RepositoryError.format(&["request", message])
                );
            }
            _ => {}
        }

        (
            status,
            Json(ResponseEnvelope::<serde_json::Value>::error(fault)),
        )
            .into_response()
    }
}

/// Convenience alias for HTTP handlers.
pub type ApiResult<T> = Result<Json<ResponseEnvelope<T>>, ApiError>;
