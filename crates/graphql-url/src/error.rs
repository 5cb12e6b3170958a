//! Error types for the `Url` scalar.
//!
//! Every rejection falls into one of two kinds: the value was not a string at
//! all ([`UrlErrorKind::Type`]), or it was a string that is not a URL
//! ([`UrlErrorKind::Validation`]). Errors are returned to the host engine,
//! which turns each one into a single entry of the GraphQL response.

use async_graphql::ErrorExtensions;
use thiserror::Error;

use crate::types::ValueKind;

/// Classification of a [`UrlError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrlErrorKind {
    /// The value (or literal) is not a string.
    Type,
    /// The value is a string but not a valid URL.
    Validation,
}

/// Errors produced by the `Url` scalar hooks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    /// A non-string value reached `serialize` or `parse_value`.
    #[error("URL value must be a string")]
    NotAString { found: ValueKind },

    /// A non-string literal node reached `parse_literal`.
    #[error("Can only validate strings as URLs but got a: {found}")]
    NonStringLiteral { found: ValueKind },

    /// A string that is neither an absolute URL nor a root-relative path.
    #[error("Value is not a valid URL")]
    InvalidUrl { value: String },
}

impl UrlError {
    /// Creates an [`UrlError::InvalidUrl`].
    pub fn invalid_url(value: impl Into<String>) -> Self {
        Self::InvalidUrl {
            value: value.into(),
        }
    }

    /// Returns whether this is a type or a validation failure.
    #[must_use]
    pub fn kind(&self) -> UrlErrorKind {
        match self {
            Self::NotAString { .. } | Self::NonStringLiteral { .. } => UrlErrorKind::Type,
            Self::InvalidUrl { .. } => UrlErrorKind::Validation,
        }
    }

    /// Returns the error code for GraphQL error extensions.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self.kind() {
            UrlErrorKind::Type => "TYPE_ERROR",
            UrlErrorKind::Validation => "VALIDATION_ERROR",
        }
    }
}

impl ErrorExtensions for UrlError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.error_code();
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| {
            e.set("code", code);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            UrlError::NotAString {
                found: ValueKind::IntValue
            }
            .kind(),
            UrlErrorKind::Type
        );
        assert_eq!(
            UrlError::NonStringLiteral {
                found: ValueKind::BooleanValue
            }
            .kind(),
            UrlErrorKind::Type
        );
        assert_eq!(
            UrlError::invalid_url("not valid url").kind(),
            UrlErrorKind::Validation
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            UrlError::NotAString {
                found: ValueKind::IntValue
            }
            .to_string(),
            "URL value must be a string"
        );
        assert_eq!(
            UrlError::NonStringLiteral {
                found: ValueKind::IntValue
            }
            .to_string(),
            "Can only validate strings as URLs but got a: IntValue"
        );
        assert_eq!(
            UrlError::invalid_url("nope").to_string(),
            "Value is not a valid URL"
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            UrlError::NotAString {
                found: ValueKind::NullValue
            }
            .error_code(),
            "TYPE_ERROR"
        );
        assert_eq!(UrlError::invalid_url("x").error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_extensions_carry_code() {
        let err = UrlError::invalid_url("x").extend();
        assert_eq!(err.message, "Value is not a valid URL");

        let extensions = err.extensions.expect("extensions should be set");
        assert_eq!(
            extensions.get("code"),
            Some(&async_graphql::Value::from("VALIDATION_ERROR"))
        );
    }
}
