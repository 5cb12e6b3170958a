//! Custom scalar hooks and the `Url` scalar.
//!
//! A host engine calls a scalar in three situations, each with its own hook
//! on [`CustomScalar`]:
//!
//! - `serialize`: a resolver produced a value for a field of the scalar type
//! - `parse_value`: an argument value arrived through the variables channel
//! - `parse_literal`: an argument value is written inline in the query text
//!
//! [`UrlScalar`] is the descriptor implementing these hooks for URLs, and
//! [`Url`] is the validated newtype used by derive-based schemas.

mod kind;
pub mod predicates;
mod url_scalar;

use async_graphql::ErrorExtensions;
use async_graphql_value::{ConstValue, Value};

pub use kind::ValueKind;
pub use url_scalar::{Url, UrlScalar};

/// A named leaf type with the three conversion hooks a GraphQL engine uses.
///
/// Implementations are immutable descriptors: every hook is a pure function
/// of its input and may be called concurrently.
pub trait CustomScalar: Send + Sync {
    /// Value handed back to the engine or the application on success.
    type Output: Into<ConstValue>;

    /// Rejection reported to the engine.
    type Error: std::error::Error + ErrorExtensions + Send + Sync + 'static;

    /// GraphQL type name.
    fn name(&self) -> &str;

    /// Human-readable description, if any.
    fn description(&self) -> Option<&str> {
        None
    }

    /// Checks a resolver's output value.
    fn serialize(&self, value: &ConstValue) -> Result<Self::Output, Self::Error>;

    /// Checks a value supplied through query variables.
    fn parse_value(&self, value: &ConstValue) -> Result<Self::Output, Self::Error>;

    /// Checks a literal node written in the query text.
    fn parse_literal(&self, node: &Value) -> Result<Self::Output, Self::Error>;
}
