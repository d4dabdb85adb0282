//! Schema directives and the directive resolver contract.
//!
//! A directive resolver wraps field resolution: it receives a [`Next`]
//! continuation that runs the rest of the chain and may call it, skip it
//! or post-process its result.

use futures::future::BoxFuture;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use storefront_schema_core::Id;

use super::error::{ResolverError, ResolverResult};
use super::info::ResolveInfo;
use crate::enums::{CountryCode, LanguageCode};
use crate::inputs::BuyerInput;

/// Arguments of `@accessRestricted`.
///
/// Marks an element as inaccessible to the current API client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessRestrictedDirectiveArgs {
    /// Provides a reason for the access restriction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Arguments of `@defer`.
///
/// Defers the fragment it decorates to a later response payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeferDirectiveArgs {
    /// Defer when `true`. Defaults to `true`.
    #[serde(rename = "if", default = "default_true")]
    pub condition: bool,
    /// A unique label for the deferred fragment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Default for DeferDirectiveArgs {
    fn default() -> Self {
        Self {
            condition: true,
            label: None,
        }
    }
}

const fn default_true() -> bool {
    true
}

/// Arguments of `@inContext`.
///
/// Contextualizes an operation to a buyer, country, language and location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InContextDirectiveArgs {
    /// The buyer's identity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer: Option<BuyerInput>,
    /// The country code for context. For example, `CA`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<CountryCode>,
    /// The language code for context. For example, `EN`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<LanguageCode>,
    /// The identifier of the customer's preferred location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_location_id: Option<Id>,
}

/// The future a resolver chain produces.
pub type ResolverFuture<'a> = BoxFuture<'a, ResolverResult<Value>>;

/// Continuation running the rest of a directive chain.
pub type Next<'a> = Box<dyn FnOnce() -> ResolverFuture<'a> + Send + 'a>;

/// Resolver for a schema directive.
///
/// # Example
///
/// ```
/// use async_trait::async_trait;
/// use serde_json::Value;
/// use storefront_schema::resolvers::{
///     AccessRestrictedDirectiveArgs, DirectiveResolver, Next, ResolveInfo, ResolverError,
///     ResolverResult,
/// };
///
/// struct DenyRestricted;
///
/// #[async_trait]
/// impl DirectiveResolver<()> for DenyRestricted {
///     const NAME: &'static str = "accessRestricted";
///     type Args = AccessRestrictedDirectiveArgs;
///
///     async fn resolve<'a>(
///         &'a self,
///         _next: Next<'a>,
///         args: Self::Args,
///         _ctx: &'a (),
///         _info: &'a ResolveInfo,
///     ) -> ResolverResult<Value> {
///         Err(ResolverError::Unauthorized(args.reason.unwrap_or_default()))
///     }
/// }
/// ```
#[async_trait::async_trait]
pub trait DirectiveResolver<C: Send + Sync>: Send + Sync {
    /// Directive name without the `@`.
    const NAME: &'static str;

    /// Typed directive arguments.
    type Args: DeserializeOwned + Send;

    /// Resolve the decorated field, usually by awaiting `next()`.
    async fn resolve<'a>(
        &'a self,
        next: Next<'a>,
        args: Self::Args,
        ctx: &'a C,
        info: &'a ResolveInfo,
    ) -> ResolverResult<Value>;
}

/// Object-safe form of [`DirectiveResolver`] taking JSON arguments.
pub(crate) trait DirectiveHandler<C>: Send + Sync {
    fn call<'a>(
        &'a self,
        next: Next<'a>,
        args: Value,
        ctx: &'a C,
        info: &'a ResolveInfo,
    ) -> ResolverFuture<'a>;
}

impl<C, D> DirectiveHandler<C> for D
where
    C: Send + Sync,
    D: DirectiveResolver<C>,
{
    fn call<'a>(
        &'a self,
        next: Next<'a>,
        args: Value,
        ctx: &'a C,
        info: &'a ResolveInfo,
    ) -> ResolverFuture<'a> {
        Box::pin(async move {
            let args = parse_directive_args::<D::Args>(D::NAME, args)?;
            self.resolve(next, args, ctx, info).await
        })
    }
}

/// Deserialize directive arguments; `null` reads as no arguments.
///
/// # Errors
///
/// Returns [`ResolverError::Directive`] if the arguments do not match.
pub fn parse_directive_args<T: DeserializeOwned>(name: &str, args: Value) -> ResolverResult<T> {
    let args = if args.is_null() {
        Value::Object(serde_json::Map::new())
    } else {
        args
    };
    serde_json::from_value(args).map_err(|err| ResolverError::directive(name, err))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defer_defaults_to_true() {
        let args: DeferDirectiveArgs = parse_directive_args("defer", Value::Null).unwrap();
        assert_eq!(args, DeferDirectiveArgs::default());
        assert!(args.condition);

        let args: DeferDirectiveArgs =
            parse_directive_args("defer", serde_json::json!({ "if": false, "label": "reviews" }))
                .unwrap();
        assert!(!args.condition);
        assert_eq!(args.label.as_deref(), Some("reviews"));
    }

    #[test]
    fn test_in_context_args() {
        let args: InContextDirectiveArgs = parse_directive_args(
            "inContext",
            serde_json::json!({
                "country": "CA",
                "language": "FR",
                "buyer": { "customerAccessToken": "tok" }
            }),
        )
        .unwrap();

        assert_eq!(args.country, Some(CountryCode::Ca));
        assert_eq!(args.language, Some(LanguageCode::Fr));
        assert_eq!(args.buyer.unwrap().customer_access_token, "tok");
        assert!(args.preferred_location_id.is_none());
    }

    #[test]
    fn test_bad_directive_args() {
        let err = parse_directive_args::<InContextDirectiveArgs>(
            "inContext",
            serde_json::json!({ "country": "NOWHERE" }),
        )
        .unwrap_err();
        assert!(matches!(err, ResolverError::Directive { ref directive, .. } if directive == "inContext"));
    }
}
