//! # graphql-url
//!
//! A `Url` custom scalar for async-graphql schemas.
//!
//! A `Url` value is a string that is either an absolute URL with a scheme and
//! host (`https://foo.com/bar`) or a root-relative path (`/bar`). The scalar
//! validates values at all three places they cross the GraphQL boundary:
//!
//! - Literal arguments written in the query text
//! - Arguments supplied through variables
//! - Values returned by field resolvers
//!
//! Anything that is not a string is a type error; a string that is not a URL
//! is a validation error. Accepted values are returned verbatim.
//!
//! ## Derive-based schemas
//!
//! ```
//! use async_graphql::{EmptyMutation, EmptySubscription, Object, Schema};
//! use graphql_url::Url;
//!
//! struct Query;
//!
//! #[Object]
//! impl Query {
//!     async fn homepage(&self) -> async_graphql::Result<Url> {
//!         Ok(Url::new("https://foo.com/bar")?)
//!     }
//! }
//!
//! let schema = Schema::new(Query, EmptyMutation, EmptySubscription);
//! assert!(schema.sdl().contains("scalar Url"));
//! ```
//!
//! ## Dynamic schemas
//!
//! Register a [`UrlScalar`] descriptor with [`register_scalar`] and wrap
//! resolvers of `Url` fields with [`ScalarFieldResolver`].
//!
//! ## Configuration
//!
//! ```toml
//! [url_scalar]
//! allow_root_relative = true
//! allowed_schemes = ["https"]
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Configuration options
//! - [`types`] - The scalar hooks trait and the `Url` scalar
//! - [`schema`] - Dynamic schema registration
//! - [`error`] - Error types

pub mod config;
pub mod error;
pub mod schema;
pub mod types;

// Re-export main types
pub use config::UrlScalarConfig;
pub use error::{UrlError, UrlErrorKind};
pub use schema::{ScalarFieldResolver, register_scalar};
pub use types::{CustomScalar, Url, UrlScalar, ValueKind};

/// Result type for `Url` scalar operations.
pub type Result<T> = std::result::Result<T, UrlError>;
