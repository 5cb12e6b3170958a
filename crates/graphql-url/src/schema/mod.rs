//! Schema integration for custom scalars.
//!
//! Derive-based schemas use the [`Url`](crate::Url) newtype directly. This
//! module covers schemas assembled at runtime with async-graphql's dynamic API.

mod dynamic;

pub use dynamic::{
    ScalarFieldResolver, ScalarResolverFuture, create_scalar, register_scalar, scalar_argument,
};
