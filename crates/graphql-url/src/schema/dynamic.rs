//! Registration of custom scalars in async-graphql dynamic schemas.
//!
//! A dynamic scalar only carries a validator, which the engine runs on
//! argument values (literals and variables alike) during validation. The
//! validator returns a plain `bool`, so the scalar's own error is dropped and
//! the client sees the engine's generic "Invalid value for argument" message
//! instead. Output values are checked by wrapping the field resolver with
//! [`ScalarFieldResolver`], which runs the scalar's `serialize` hook on
//! whatever the resolver returns and reports the scalar's error unchanged.

use std::sync::Arc;

use async_graphql::dynamic::{
    Field, FieldFuture, InputValue, ResolverContext, Scalar, SchemaBuilder, TypeRef,
};
use async_graphql::{ErrorExtensions, Value};
use futures_util::future::BoxFuture;
use tracing::debug;

use crate::types::CustomScalar;

/// Future returned by a resolver wrapped with [`ScalarFieldResolver`].
pub type ScalarResolverFuture<'a> = BoxFuture<'a, async_graphql::Result<Option<Value>>>;

/// Creates the dynamic scalar type for a descriptor.
///
/// The validator runs the descriptor's `parse_value` hook, so a bad argument
/// fails query validation with a single error. Only the verdict is kept, not
/// the error itself.
pub fn create_scalar<S>(scalar: Arc<S>) -> Scalar
where
    S: CustomScalar + 'static,
{
    let mut dynamic_scalar = Scalar::new(scalar.name());
    if let Some(description) = scalar.description() {
        dynamic_scalar = dynamic_scalar.description(description);
    }
    dynamic_scalar.validator(move |value| scalar.parse_value(value).is_ok())
}

/// Registers the dynamic scalar type for a descriptor.
pub fn register_scalar<S>(builder: SchemaBuilder, scalar: Arc<S>) -> SchemaBuilder
where
    S: CustomScalar + 'static,
{
    debug!(scalar = scalar.name(), "Registering custom scalar");
    builder.register(create_scalar(scalar))
}

/// Declares an argument typed with the scalar.
pub fn scalar_argument<S>(name: impl Into<String>, scalar: &S, required: bool) -> InputValue
where
    S: CustomScalar + ?Sized,
{
    let ty = if required {
        TypeRef::named_nn(scalar.name())
    } else {
        TypeRef::named(scalar.name())
    };
    InputValue::new(name, ty)
}

/// Resolver wrapper applying a scalar's `serialize` hook to field output.
pub struct ScalarFieldResolver;

impl ScalarFieldResolver {
    /// Wraps `resolver` so that every non-null value it returns is checked by
    /// `scalar.serialize` before the engine sees it.
    ///
    /// A rejected value becomes a field error carrying the scalar's error
    /// extensions; `None` passes through as `null`.
    pub fn resolve<S, F>(
        scalar: Arc<S>,
        resolver: F,
    ) -> impl Fn(ResolverContext<'_>) -> FieldFuture<'_> + Send + Sync + Clone
    where
        S: CustomScalar + 'static,
        F: for<'a> Fn(ResolverContext<'a>) -> ScalarResolverFuture<'a> + Send + Sync + 'static,
    {
        let resolver = Arc::new(resolver);
        move |ctx| {
            let scalar = scalar.clone();
            let output = resolver(ctx);
            FieldFuture::new(async move {
                match output.await? {
                    Some(value) => {
                        let serialized = scalar.serialize(&value).map_err(|e| e.extend())?;
                        let value: Value = serialized.into();
                        Ok(Some(value))
                    }
                    None => Ok(None),
                }
            })
        }
    }

    /// Builds a nullable field of the scalar type with a wrapped resolver.
    pub fn field<S, F>(name: impl Into<String>, scalar: Arc<S>, resolver: F) -> Field
    where
        S: CustomScalar + 'static,
        F: for<'a> Fn(ResolverContext<'a>) -> ScalarResolverFuture<'a> + Send + Sync + 'static,
    {
        let ty = TypeRef::named(scalar.name());
        Field::new(name, ty, Self::resolve(scalar, resolver))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UrlScalar;
    use async_graphql::dynamic::{Object, Schema};

    fn schema_with(field: Field) -> Schema {
        let scalar = Arc::new(UrlScalar::default());
        let query = Object::new("Query").field(field);
        register_scalar(Schema::build("Query", None, None), scalar)
            .register(query)
            .finish()
            .unwrap()
    }

    #[test]
    fn test_wrapped_resolver_passes_valid_output() {
        let scalar = Arc::new(UrlScalar::default());
        let schema = schema_with(ScalarFieldResolver::field("home", scalar, |_| {
            Box::pin(async { Ok(Some(Value::from("/bar"))) })
        }));

        let response = tokio_test::block_on(schema.execute("{ home }"));
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        assert_eq!(
            response.data.into_json().unwrap(),
            serde_json::json!({ "home": "/bar" })
        );
    }

    #[test]
    fn test_wrapped_resolver_rejects_invalid_output() {
        let scalar = Arc::new(UrlScalar::default());
        let schema = schema_with(ScalarFieldResolver::field("home", scalar, |_| {
            Box::pin(async { Ok(Some(Value::from("not valid url"))) })
        }));

        let response = tokio_test::block_on(schema.execute("{ home }"));
        assert_eq!(response.errors.len(), 1);
        assert_eq!(response.errors[0].message, "Value is not a valid URL");

        let code = response.errors[0]
            .extensions
            .as_ref()
            .and_then(|ext| ext.get("code"));
        assert_eq!(code, Some(&Value::from("VALIDATION_ERROR")));
    }

    #[test]
    fn test_wrapped_resolver_passes_null() {
        let scalar = Arc::new(UrlScalar::default());
        let schema = schema_with(ScalarFieldResolver::field("home", scalar, |_| {
            Box::pin(async { Ok(None) })
        }));

        let response = tokio_test::block_on(schema.execute("{ home }"));
        assert!(response.errors.is_empty());
        assert_eq!(
            response.data.into_json().unwrap(),
            serde_json::json!({ "home": null })
        );
    }

    #[test]
    fn test_sdl_declares_scalar_and_arguments() {
        let scalar = Arc::new(UrlScalar::default());
        let field = Field::new("foo", TypeRef::named(TypeRef::STRING), |_| {
            FieldFuture::new(async { Ok(Some(Value::from("does-not-matter"))) })
        })
        .argument(scalar_argument("required", scalar.as_ref(), true))
        .argument(scalar_argument("optional", scalar.as_ref(), false));

        let sdl = schema_with(field).sdl();
        assert!(sdl.contains("scalar Url"), "{sdl}");
        assert!(sdl.contains("required: Url!"), "{sdl}");
        assert!(sdl.contains("optional: Url"), "{sdl}");
    }
}
