//! `Url` scalar configuration.
//!
//! The defaults describe the standard scalar: named `Url`, accepting any
//! absolute URL with a host as well as root-relative paths. A host
//! application can narrow it from its own config file.
//!
//! # Example Configuration
//!
//! ```toml
//! [url_scalar]
//! name = "Url"
//! allow_root_relative = true
//! allowed_schemes = ["https", "http"]
//! ```

use serde::{Deserialize, Serialize};

/// Default GraphQL type name of the scalar.
pub const DEFAULT_SCALAR_NAME: &str = "Url";

/// Default description reported through introspection.
pub const DEFAULT_DESCRIPTION: &str =
    "A URL: either an absolute URL with a scheme and host, or a path starting with `/`";

/// Configuration of a `Url` scalar descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlScalarConfig {
    /// GraphQL type name.
    /// Default: "Url"
    #[serde(default = "default_name")]
    pub name: String,

    /// Human-readable description, documentation only.
    #[serde(default = "default_description")]
    pub description: String,

    /// Accept paths beginning with `/` in addition to absolute URLs.
    /// Default: true
    #[serde(default = "default_allow_root_relative")]
    pub allow_root_relative: bool,

    /// Schemes an absolute URL may use, compared case-insensitively.
    /// Empty means any scheme.
    /// Default: []
    #[serde(default)]
    pub allowed_schemes: Vec<String>,
}

fn default_name() -> String {
    DEFAULT_SCALAR_NAME.to_string()
}

fn default_description() -> String {
    DEFAULT_DESCRIPTION.to_string()
}

fn default_allow_root_relative() -> bool {
    true
}

impl Default for UrlScalarConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            description: default_description(),
            allow_root_relative: default_allow_root_relative(),
            allowed_schemes: Vec::new(),
        }
    }
}

impl UrlScalarConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the type name is not a GraphQL name or a scheme
    /// is not a valid URL scheme.
    pub fn validate(&self) -> Result<(), String> {
        if !is_graphql_name(&self.name) {
            return Err(format!(
                "url_scalar.name '{}' is not a valid GraphQL name",
                self.name
            ));
        }
        if let Some(scheme) = self.allowed_schemes.iter().find(|s| !is_scheme(s)) {
            return Err(format!(
                "url_scalar.allowed_schemes contains invalid scheme '{scheme}'"
            ));
        }
        Ok(())
    }
}

/// `[_A-Za-z][_0-9A-Za-z]*`
fn is_graphql_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

/// RFC 3986: `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
fn is_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = UrlScalarConfig::default();
        assert_eq!(config.name, "Url");
        assert_eq!(config.description, DEFAULT_DESCRIPTION);
        assert!(config.allow_root_relative);
        assert!(config.allowed_schemes.is_empty());
    }

    #[test]
    fn test_valid_config() {
        let config = UrlScalarConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_name() {
        let mut config = UrlScalarConfig::default();
        config.name = String::new();
        assert!(config.validate().is_err());

        config.name = "1Url".into();
        assert!(config.validate().is_err());

        config.name = "Web-Url".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_scheme() {
        let mut config = UrlScalarConfig::default();
        config.allowed_schemes = vec!["https".into(), "svn+ssh".into()];
        assert!(config.validate().is_ok());

        config.allowed_schemes = vec!["https".into(), "://".into()];
        assert!(config.validate().is_err());

        config.allowed_schemes = vec!["".into()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_from_toml() {
        let toml = r#"
            name = "WebUrl"
            allow_root_relative = false
            allowed_schemes = ["https"]
        "#;

        let config: UrlScalarConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.name, "WebUrl");
        assert_eq!(config.description, DEFAULT_DESCRIPTION);
        assert!(!config.allow_root_relative);
        assert_eq!(config.allowed_schemes, vec!["https".to_string()]);
    }

    #[test]
    fn test_deserialize_empty_table_uses_defaults() {
        let config: UrlScalarConfig = toml::from_str("").unwrap();
        assert_eq!(config, UrlScalarConfig::default());
    }
}
