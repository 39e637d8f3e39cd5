//! Response envelope for the REST surface.
//!
//! Every endpoint returns one envelope. The `category` tag discriminates
//! the variants so clients can pattern-match exhaustively instead of
//! sniffing fields.
//!
//! ## Versioning Policy
//!
//! - New variants can be added at the end (forward compatible)
//! - Removing or renaming variants is a breaking change
//! - Unknown categories deserialize to the `Unknown` variant so older
//!   clients degrade to an "unexpected response" error instead of failing
//!   to parse

use serde::{Deserialize, Serialize};

// =============================================================================
// Error Codes
// =============================================================================

/// Error classification carried inside an error envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceErrorCode {
    /// Caller-supplied guid/name/property is null, malformed, or unknown
    InvalidParameter,
    /// The caller's identity lacks permission for the operation
    NotAuthorized,
    /// The backing repository is unreachable or returned malformed data
    PropertyServer,
    /// Unknown code for forward compatibility
    #[serde(other)]
    Unknown,
}

// =============================================================================
// Fault Payload
// =============================================================================

/// Structured error payload: stable message id plus formatted text, with
/// the offending parameter or guid when one is known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceFault {
    pub code: ServiceErrorCode,
    pub message_id: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ServiceFault {
    pub fn new(
        code: ServiceErrorCode,
        message_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message_id: message_id.into(),
            message: message.into(),
            parameter_name: None,
            guid: None,
            details: None,
        }
    }

    pub fn with_parameter(mut self, parameter_name: impl Into<String>) -> Self {
        self.parameter_name = Some(parameter_name.into());
        self
    }

    pub fn with_guid(mut self, guid: impl Into<String>) -> Self {
        self.guid = Some(guid.into());
        self
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

// =============================================================================
// Response Envelope
// =============================================================================

/// Tagged response union returned by every REST endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum ResponseEnvelope<T> {
    /// A single element payload
    Element { element: T },
    /// A list payload; an empty list means "nothing found"
    ElementList { elements: Vec<T> },
    /// Success with no payload
    Void,
    /// A recognized failure
    Error { fault: ServiceFault },
    /// Unknown category for forward compatibility
    #[serde(other)]
    Unknown,
}

impl<T> ResponseEnvelope<T> {
    pub fn element(element: T) -> Self {
        Self::Element { element }
    }

    pub fn element_list(elements: Vec<T>) -> Self {
        Self::ElementList { elements }
    }

    pub fn void() -> Self {
        Self::Void
    }

    pub fn error(fault: ServiceFault) -> Self {
        Self::Error { fault }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// The category tag, for "unexpected response" diagnostics.
    pub fn category_name(&self) -> &'static str {
        match self {
            Self::Element { .. } => "element",
            Self::ElementList { .. } => "element_list",
            Self::Void => "void",
            Self::Error { .. } => "error",
            Self::Unknown => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_envelope_round_trips() {
        let envelope = ResponseEnvelope::element(serde_json::json!({"displayName": "table"}));
        let text = serde_json::to_string(&envelope).unwrap();
        assert!(text.contains("\"category\":\"element\""));
        let back: ResponseEnvelope<serde_json::Value> = serde_json::from_str(&text).unwrap();
        assert_eq!(back, envelope);
    }

    #[test]
    fn error_envelope_keeps_fault_fields() {
        let fault = ServiceFault::new(
            ServiceErrorCode::InvalidParameter,
            "LODESTONE-OMAS-400-002",
            "Unknown guid",
        )
        .with_parameter("term_guid")
        .with_guid("3f8e");
        let text = serde_json::to_string(&ResponseEnvelope::<()>::error(fault.clone())).unwrap();
        let back: ResponseEnvelope<()> = serde_json::from_str(&text).unwrap();
        match back {
            ResponseEnvelope::Error { fault: decoded } => assert_eq!(decoded, fault),
            other => panic!("expected error envelope, got {}", other.category_name()),
        }
    }

    #[test]
    fn unknown_category_degrades_gracefully() {
        let back: ResponseEnvelope<()> =
            serde_json::from_str("{\"category\":\"element_graph\"}").unwrap();
        assert_eq!(back.category_name(), "unknown");
    }

    #[test]
    fn unknown_error_code_degrades_gracefully() {
        let code: ServiceErrorCode = serde_json::from_str("\"rate_limited\"").unwrap();
        assert_eq!(code, ServiceErrorCode::Unknown);
    }
}
