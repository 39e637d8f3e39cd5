//! Unified error type for the domain layer
//!
//! Provides a common error type usable across all instance-model operations,
//! enabling consistent error handling without forcing callers to use String
//! or anyhow.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Invalid guid format
    #[error("Invalid guid format: {0}")]
    InvalidId(String),

    /// Type name is not registered in the type registry
    #[error("Unknown open metadata type: {0}")]
    UnknownType(String),

    /// A property held a value of the wrong kind
    #[error("Property {name} is not a {expected} value")]
    PropertyKind {
        name: String,
        expected: &'static str,
    },
}

impl DomainError {
    /// Creates a validation error for invariant violations.
    ///
    /// Use this when required fields are empty or values fall outside
    /// their allowed ranges.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid guid error
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Create an unknown type error
    pub fn unknown_type(type_name: impl Into<String>) -> Self {
        Self::UnknownType(type_name.into())
    }

    /// Create a property kind mismatch error
    pub fn property_kind(name: impl Into<String>, expected: &'static str) -> Self {
        Self::PropertyKind {
            name: name.into(),
            expected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("qualified name cannot be empty");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Validation failed: qualified name cannot be empty"
        );
    }

    #[test]
    fn test_unknown_type_error() {
        let err = DomainError::unknown_type("NotARealType");
        assert!(matches!(err, DomainError::UnknownType(_)));
        assert!(err.to_string().contains("NotARealType"));
    }

    #[test]
    fn test_property_kind_error() {
        let err = DomainError::property_kind("qualifiedName", "string");
        assert_eq!(
            err.to_string(),
            "Property qualifiedName is not a string value"
        );
    }
}
