//! Resolver errors.

use thiserror::Error;

use crate::connection::PaginationError;

/// Result type returned by every resolver.
pub type ResolverResult<T> = Result<T, ResolverError>;

/// Errors a resolver can return.
///
/// Business failures (a sold-out line, a bad password) are not errors here:
/// they travel as data in the payload's `userErrors`.
#[derive(Debug, Error)]
pub enum ResolverError {
    /// The resolver map does not serve this field.
    #[error("{parent_type}.{field} is not implemented")]
    NotImplemented {
        /// Schema name of the parent type.
        parent_type: &'static str,
        /// Schema name of the field.
        field: &'static str,
    },

    /// Arguments were missing, malformed or out of range.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// No such field on the parent type.
    #[error("Unknown field {parent_type}.{field}")]
    UnknownField {
        /// Schema name of the parent type.
        parent_type: &'static str,
        /// The requested field name.
        field: String,
    },

    /// The caller may not read this field.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// A value could not be converted to or from JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A directive rejected the field or failed.
    #[error("Directive @{directive} failed: {message}")]
    Directive {
        /// Directive name without the `@`.
        directive: String,
        /// What went wrong.
        message: String,
    },

    /// Any other failure raised by resolver code.
    #[error("{0}")]
    Custom(String),
}

impl ResolverError {
    /// The field is not served by this resolver map.
    #[must_use]
    pub const fn not_implemented(parent_type: &'static str, field: &'static str) -> Self {
        Self::NotImplemented { parent_type, field }
    }

    /// A directive failure.
    #[must_use]
    pub fn directive(directive: impl Into<String>, message: impl ToString) -> Self {
        Self::Directive {
            directive: directive.into(),
            message: message.to_string(),
        }
    }

    /// A free-form resolver failure.
    #[must_use]
    pub fn custom(message: impl ToString) -> Self {
        Self::Custom(message.to_string())
    }

    /// Error code for the `extensions.code` entry of a GraphQL error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NotImplemented { .. } => "NOT_IMPLEMENTED",
            Self::InvalidArguments(_) | Self::UnknownField { .. } => "BAD_USER_INPUT",
            Self::Unauthorized(_) => "ACCESS_DENIED",
            Self::Directive { .. } => "DIRECTIVE_FAILED",
            Self::Serialization(_) | Self::Custom(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    /// Whether the caller caused the error.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidArguments(_) | Self::UnknownField { .. } | Self::Unauthorized(_)
        )
    }
}

impl From<PaginationError> for ResolverError {
    fn from(err: PaginationError) -> Self {
        Self::InvalidArguments(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_error_is_invalid_arguments() {
        let err = ResolverError::from(PaginationError::BothPageSizes);
        assert!(matches!(err, ResolverError::InvalidArguments(_)));
        assert_eq!(
            err.to_string(),
            "Invalid arguments: passing both first and last is not supported"
        );
        assert_eq!(err.code(), "BAD_USER_INPUT");
        assert!(err.is_client_error());
    }

    #[test]
    fn test_not_implemented_display() {
        let err = ResolverError::not_implemented("QueryRoot", "sitemap");
        assert_eq!(err.to_string(), "QueryRoot.sitemap is not implemented");
        assert_eq!(err.code(), "NOT_IMPLEMENTED");
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_directive_display() {
        let err = ResolverError::directive("accessRestricted", "requires a private token");
        assert_eq!(
            err.to_string(),
            "Directive @accessRestricted failed: requires a private token"
        );
    }
}
