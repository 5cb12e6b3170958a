//! The `Url` scalar.
//!
//! A `Url` is a string that is either an absolute URL with a scheme and host
//! (`https://foo.com/bar`) or a root-relative path (`/bar`). Accepted values
//! are passed through verbatim: no trimming, no normalization of scheme or
//! host case, no trailing slash fix-ups.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use async_graphql::{InputValueError, InputValueResult, Scalar, ScalarType};
use async_graphql_value::{ConstValue, Value};
use tracing::debug;

use super::predicates::{is_root_relative_path, parse_absolute};
use super::{CustomScalar, ValueKind};
use crate::config::UrlScalarConfig;
use crate::error::UrlError;

/// Descriptor with the default configuration, backing [`Url`].
static DEFAULT_URL_SCALAR: LazyLock<UrlScalar> = LazyLock::new(UrlScalar::default);

// =============================================================================
// UrlScalar - the scalar descriptor
// =============================================================================

/// Descriptor of the `Url` scalar type.
///
/// Built once when the schema is assembled and never mutated afterwards. The
/// default descriptor accepts any absolute URL with a host and any path
/// starting with `/`; [`UrlScalar::from_config`] can narrow that down.
///
/// # Example
///
/// ```
/// use graphql_url::{CustomScalar, UrlScalar};
/// use async_graphql::Value;
///
/// let scalar = UrlScalar::default();
/// let url = scalar
///     .parse_value(&Value::String("https://foo.com/bar".into()))
///     .unwrap();
/// assert_eq!(url, "https://foo.com/bar");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlScalar {
    name: String,
    description: String,
    allow_root_relative: bool,
    /// Lowercase; empty accepts every scheme.
    allowed_schemes: Vec<String>,
}

impl Default for UrlScalar {
    fn default() -> Self {
        Self::from_valid_config(&UrlScalarConfig::default())
    }
}

impl UrlScalar {
    /// Creates a descriptor from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not validate.
    pub fn from_config(config: &UrlScalarConfig) -> Result<Self, String> {
        config.validate()?;
        let scalar = Self::from_valid_config(config);

        debug!(
            name = %scalar.name,
            allow_root_relative = scalar.allow_root_relative,
            allowed_schemes = ?scalar.allowed_schemes,
            "Configured URL scalar"
        );
        Ok(scalar)
    }

    fn from_valid_config(config: &UrlScalarConfig) -> Self {
        Self {
            name: config.name.clone(),
            description: config.description.clone(),
            allow_root_relative: config.allow_root_relative,
            allowed_schemes: config
                .allowed_schemes
                .iter()
                .map(|s| s.to_ascii_lowercase())
                .collect(),
        }
    }

    /// Returns `true` if `s` is accepted by this descriptor.
    #[must_use]
    pub fn accepts(&self, s: &str) -> bool {
        self.accepts_absolute(s) || (self.allow_root_relative && is_root_relative_path(s))
    }

    fn accepts_absolute(&self, s: &str) -> bool {
        match parse_absolute(s) {
            // The parser lowercases schemes.
            Some(url) => {
                self.allowed_schemes.is_empty()
                    || self.allowed_schemes.iter().any(|scheme| scheme == url.scheme())
            }
            None => false,
        }
    }

    fn check(&self, s: &str) -> Result<String, UrlError> {
        if self.accepts(s) {
            Ok(s.to_string())
        } else {
            Err(UrlError::invalid_url(s))
        }
    }

    fn check_value(&self, value: &ConstValue) -> Result<String, UrlError> {
        match value {
            ConstValue::String(s) => self.check(s),
            other => Err(UrlError::NotAString {
                found: ValueKind::of_value(other),
            }),
        }
    }
}

impl CustomScalar for UrlScalar {
    type Output = String;
    type Error = UrlError;

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        (!self.description.is_empty()).then_some(self.description.as_str())
    }

    fn serialize(&self, value: &ConstValue) -> Result<String, UrlError> {
        self.check_value(value)
    }

    fn parse_value(&self, value: &ConstValue) -> Result<String, UrlError> {
        self.check_value(value)
    }

    fn parse_literal(&self, node: &Value) -> Result<String, UrlError> {
        match node {
            Value::String(s) => self.check(s),
            other => Err(UrlError::NonStringLiteral {
                found: ValueKind::of_literal(other),
            }),
        }
    }
}

// =============================================================================
// Url - validated newtype for derive-based schemas
// =============================================================================

/// A validated URL string, exposed to GraphQL as the `Url` scalar.
///
/// A `Url` can only be built through validation, so returning one from a
/// resolver can never emit an invalid value. Construct it with [`Url::new`]
/// and propagate the error with `?` to reject a bad output value.
///
/// # Examples
/// - `https://foo.com/bar`
/// - `/bar`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Url(String);

impl Url {
    /// Validates `value` as a URL.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::InvalidUrl`] if `value` is neither an absolute URL
    /// nor a root-relative path.
    pub fn new(value: impl Into<String>) -> Result<Self, UrlError> {
        let value = value.into();
        if DEFAULT_URL_SCALAR.accepts(&value) {
            Ok(Self(value))
        } else {
            Err(UrlError::InvalidUrl { value })
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Url {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Url {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Url {
    type Error = UrlError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Url> for String {
    fn from(url: Url) -> Self {
        url.0
    }
}

/// A URL: either an absolute URL with a scheme and host, or a path starting with `/`
#[Scalar(name = "Url")]
impl ScalarType for Url {
    fn parse(value: ConstValue) -> InputValueResult<Self> {
        DEFAULT_URL_SCALAR
            .parse_value(&value)
            .map(Url)
            .map_err(InputValueError::custom)
    }

    fn to_value(&self) -> ConstValue {
        ConstValue::String(self.0.clone())
    }
}

// =============================================================================
// Tests
// =============================================================================
