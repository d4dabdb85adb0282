//! Root field dispatch.
//!
//! The [`Executor`] maps a root field name and JSON arguments onto the
//! typed resolver traits: it deserializes and validates the arguments,
//! runs the request's directive chain around the call and serializes the
//! result. It does not parse GraphQL documents or apply selection sets.
//!
//! # Example
//!
//! ```
//! use async_trait::async_trait;
//! use storefront_schema::resolvers::{
//!     Executor, FieldRequest, QueryRootResolvers, ResolveInfo, ResolverResult, Unimplemented,
//! };
//! use storefront_schema::types::ApiVersion;
//!
//! struct Versions;
//!
//! #[async_trait]
//! impl QueryRootResolvers<()> for Versions {
//!     async fn public_api_versions(
//!         &self,
//!         _ctx: &(),
//!         _info: &ResolveInfo,
//!     ) -> ResolverResult<Vec<ApiVersion>> {
//!         Ok(Vec::new())
//!     }
//! }
//!
//! # futures::executor::block_on(async {
//! let executor = Executor::new(Versions, Unimplemented);
//! let value = executor
//!     .execute(&(), FieldRequest::query("publicApiVersions", serde_json::Value::Null))
//!     .await
//!     .unwrap();
//! assert_eq!(value, serde_json::json!([]));
//! # });
//! ```

use std::collections::HashMap;
use std::fmt;

use futures::FutureExt;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::directives::{DirectiveHandler, DirectiveResolver, Next, parse_directive_args};
use super::error::{ResolverError, ResolverResult};
use super::info::ResolveInfo;
use super::mutation::MutationResolvers;
use super::query::QueryRootResolvers;
use crate::args::{PaginatedArgs, QueryRootProductTagsArgs, QueryRootProductTypesArgs};
use crate::config::ExecutorConfig;
use crate::connection::PaginationArgs;
use crate::registry;

/// The root type a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    /// A `query` operation, resolved against `QueryRoot`.
    Query,
    /// A `mutation` operation, resolved against `Mutation`.
    Mutation,
}

impl OperationType {
    /// Schema name of the root type.
    #[must_use]
    pub const fn root_type(self) -> &'static str {
        match self {
            Self::Query => "QueryRoot",
            Self::Mutation => "Mutation",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Query => f.write_str("query"),
            Self::Mutation => f.write_str("mutation"),
        }
    }
}

/// A directive applied to the requested field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectiveInvocation {
    /// Directive name without the `@`.
    pub name: String,
    /// Directive arguments as a JSON object.
    #[serde(default)]
    pub arguments: Value,
}

/// One root field to resolve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRequest {
    /// Query or mutation.
    pub operation: OperationType,
    /// Schema name of the root field (`products`, `cartLinesAdd`).
    pub field: String,
    /// Field arguments as a JSON object.
    #[serde(default)]
    pub arguments: Value,
    /// Directives, outermost first.
    #[serde(default)]
    pub directives: Vec<DirectiveInvocation>,
}

impl FieldRequest {
    /// A `QueryRoot` field request.
    #[must_use]
    pub fn query(field: &str, arguments: Value) -> Self {
        Self {
            operation: OperationType::Query,
            field: field.to_owned(),
            arguments,
            directives: Vec::new(),
        }
    }

    /// A `Mutation` field request.
    #[must_use]
    pub fn mutation(field: &str, arguments: Value) -> Self {
        Self {
            operation: OperationType::Mutation,
            field: field.to_owned(),
            arguments,
            directives: Vec::new(),
        }
    }

    /// Apply a directive inside those already applied.
    #[must_use]
    pub fn with_directive(mut self, name: &str, arguments: Value) -> Self {
        self.directives.push(DirectiveInvocation {
            name: name.to_owned(),
            arguments,
        });
        self
    }
}

/// A resolver map that serves nothing.
///
/// Use it for the root you do not implement, e.g. a read-only storefront's
/// mutations.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unimplemented;

impl<C: Send + Sync> QueryRootResolvers<C> for Unimplemented {}

impl<C: Send + Sync> MutationResolvers<C> for Unimplemented {}

/// Dispatches root fields to a query and a mutation resolver map.
pub struct Executor<C, Q, M> {
    query: Q,
    mutation: M,
    directives: HashMap<&'static str, Box<dyn DirectiveHandler<C>>>,
    config: ExecutorConfig,
}

impl<C, Q, M> Executor<C, Q, M>
where
    C: Send + Sync,
    Q: QueryRootResolvers<C>,
    M: MutationResolvers<C>,
{
    /// Create an executor with the default configuration.
    #[must_use]
    pub fn new(query: Q, mutation: M) -> Self {
        Self {
            query,
            mutation,
            directives: HashMap::new(),
            config: ExecutorConfig::default(),
        }
    }

    /// Replace the configuration.
    #[must_use]
    pub fn with_config(mut self, config: ExecutorConfig) -> Self {
        self.config = config;
        self
    }

    /// Register the resolver for a directive, replacing any earlier one.
    ///
    /// Directives without a registered resolver pass through.
    #[must_use]
    pub fn with_directive<D>(mut self, directive: D) -> Self
    where
        D: DirectiveResolver<C> + 'static,
    {
        self.directives.insert(D::NAME, Box::new(directive));
        self
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Resolve one root field.
    ///
    /// `@inContext` values are made available on [`ResolveInfo`] before any
    /// directive or resolver runs.
    ///
    /// # Errors
    ///
    /// Returns [`ResolverError::UnknownField`] for a field the root type does
    /// not have, [`ResolverError::Directive`] for an undeclared or repeated
    /// directive,
    /// [`ResolverError::InvalidArguments`] when arguments fail to parse or
    /// validate, and whatever the resolver or a directive returns.
    #[instrument(skip_all, fields(operation = %request.operation, field = %request.field))]
    pub async fn execute(&self, ctx: &C, request: FieldRequest) -> ResolverResult<Value> {
        let FieldRequest {
            operation,
            field,
            arguments,
            directives,
        } = request;

        let mut info = ResolveInfo::root(operation.root_type(), &field);
        for (index, directive) in directives.iter().enumerate() {
            let Some(definition) = registry::directive(&directive.name) else {
                warn!(directive = %directive.name, "Unknown directive");
                return Err(ResolverError::directive(&directive.name, "unknown directive"));
            };
            let repeated = directives
                .iter()
                .take(index)
                .any(|earlier| earlier.name == directive.name);
            if repeated && !definition.repeatable {
                warn!(directive = %directive.name, "Repeated directive");
                return Err(ResolverError::directive(&directive.name, "directive is not repeatable"));
            }
            if directive.name == "inContext" {
                info.in_context = Some(parse_directive_args(
                    &directive.name,
                    directive.arguments.clone(),
                )?);
            }
        }

        debug!(
            parent_type = %info.parent_type,
            directives = directives.len(),
            "Resolving root field"
        );

        let info = &info;
        let field = field.as_str();
        let mut next: Next<'_> =
            Box::new(move || self.dispatch(ctx, operation, field, arguments, info).boxed());

        for directive in directives.iter().rev() {
            let Some(handler) = self.directives.get(directive.name.as_str()) else {
                continue;
            };
            debug!(directive = %directive.name, "Applying directive");
            let handler: &dyn DirectiveHandler<C> = &**handler;
            let args = directive.arguments.clone();
            let inner = next;
            next = Box::new(move || handler.call(inner, args, ctx, info));
        }

        next().await
    }

    async fn dispatch(
        &self,
        ctx: &C,
        operation: OperationType,
        field: &str,
        arguments: Value,
        info: &ResolveInfo,
    ) -> ResolverResult<Value> {
        match operation {
            OperationType::Query => self.resolve_query(ctx, field, arguments, info).await,
            OperationType::Mutation => self.resolve_mutation(ctx, field, arguments, info).await,
        }
    }

    #[allow(clippy::too_many_lines)]
    async fn resolve_query(
        &self,
        ctx: &C,
        field: &str,
        arguments: Value,
        info: &ResolveInfo,
    ) -> ResolverResult<Value> {
        let query = &self.query;
        match field {
            "article" => {
                let args = parse_args(field, arguments)?;
                respond(query.article(ctx, args, info).await)
            }
            "articles" => {
                let args = self.paginated_args(field, arguments)?;
                respond(query.articles(ctx, args, info).await)
            }
            "blog" => {
                let args = parse_args(field, arguments)?;
                respond(query.blog(ctx, args, info).await)
            }
            "blogByHandle" => {
                let args = parse_args(field, arguments)?;
                respond(query.blog_by_handle(ctx, args, info).await)
            }
            "blogs" => {
                let args = self.paginated_args(field, arguments)?;
                respond(query.blogs(ctx, args, info).await)
            }
            "cart" => {
                let args = parse_args(field, arguments)?;
                respond(query.cart(ctx, args, info).await)
            }
            "cartCompletionAttempt" => {
                let args = parse_args(field, arguments)?;
                respond(query.cart_completion_attempt(ctx, args, info).await)
            }
            "collection" => {
                let args = parse_args(field, arguments)?;
                respond(query.collection(ctx, args, info).await)
            }
            "collectionByHandle" => {
                let args = parse_args(field, arguments)?;
                respond(query.collection_by_handle(ctx, args, info).await)
            }
            "collections" => {
                let args = self.paginated_args(field, arguments)?;
                respond(query.collections(ctx, args, info).await)
            }
            "customer" => {
                let args = parse_args(field, arguments)?;
                respond(query.customer(ctx, args, info).await)
            }
            "localization" => {
                no_args(field, arguments)?;
                respond(query.localization(ctx, info).await)
            }
            "locations" => {
                let args = self.paginated_args(field, arguments)?;
                respond(query.locations(ctx, args, info).await)
            }
            "menu" => {
                let args = parse_args(field, arguments)?;
                respond(query.menu(ctx, args, info).await)
            }
            "metaobject" => {
                let args = parse_args(field, arguments)?;
                respond(query.metaobject(ctx, args, info).await)
            }
            "metaobjects" => {
                let args = self.paginated_args(field, arguments)?;
                respond(query.metaobjects(ctx, args, info).await)
            }
            "node" => {
                let args = parse_args(field, arguments)?;
                respond(query.node(ctx, args, info).await)
            }
            "nodes" => {
                let args = parse_args(field, arguments)?;
                respond(query.nodes(ctx, args, info).await)
            }
            "page" => {
                let args = parse_args(field, arguments)?;
                respond(query.page(ctx, args, info).await)
            }
            "pageByHandle" => {
                let args = parse_args(field, arguments)?;
                respond(query.page_by_handle(ctx, args, info).await)
            }
            "pages" => {
                let args = self.paginated_args(field, arguments)?;
                respond(query.pages(ctx, args, info).await)
            }
            "paymentSettings" => {
                no_args(field, arguments)?;
                respond(query.payment_settings(ctx, info).await)
            }
            "predictiveSearch" => {
                let args = parse_args(field, arguments)?;
                respond(query.predictive_search(ctx, args, info).await)
            }
            "product" => {
                let args = parse_args(field, arguments)?;
                respond(query.product(ctx, args, info).await)
            }
            "productByHandle" => {
                let args = parse_args(field, arguments)?;
                respond(query.product_by_handle(ctx, args, info).await)
            }
            "productRecommendations" => {
                let args = parse_args(field, arguments)?;
                respond(query.product_recommendations(ctx, args, info).await)
            }
            "productTags" => {
                let args: QueryRootProductTagsArgs = parse_args(field, arguments)?;
                self.check_page(field, &PaginationArgs::forward(args.first, None))?;
                respond(query.product_tags(ctx, args, info).await)
            }
            "productTypes" => {
                let args: QueryRootProductTypesArgs = parse_args(field, arguments)?;
                self.check_page(field, &PaginationArgs::forward(args.first, None))?;
                respond(query.product_types(ctx, args, info).await)
            }
            "products" => {
                let args = self.paginated_args(field, arguments)?;
                respond(query.products(ctx, args, info).await)
            }
            "publicApiVersions" => {
                no_args(field, arguments)?;
                respond(query.public_api_versions(ctx, info).await)
            }
            "search" => {
                let args = self.paginated_args(field, arguments)?;
                respond(query.search(ctx, args, info).await)
            }
            "shop" => {
                no_args(field, arguments)?;
                respond(query.shop(ctx, info).await)
            }
            "sitemap" => {
                let args = parse_args(field, arguments)?;
                respond(query.sitemap(ctx, args, info).await)
            }
            "urlRedirects" => {
                let args = self.paginated_args(field, arguments)?;
                respond(query.url_redirects(ctx, args, info).await)
            }
            other => {
                warn!(field = other, "Unknown QueryRoot field");
                Err(ResolverError::UnknownField {
                    parent_type: "QueryRoot",
                    field: other.to_owned(),
                })
            }
        }
    }

    #[allow(clippy::too_many_lines)]
    async fn resolve_mutation(
        &self,
        ctx: &C,
        field: &str,
        arguments: Value,
        info: &ResolveInfo,
    ) -> ResolverResult<Value> {
        let mutation = &self.mutation;
        match field {
            "cartAttributesUpdate" => {
                let args = parse_args(field, arguments)?;
                respond(mutation.cart_attributes_update(ctx, args, info).await)
            }
            "cartBuyerIdentityUpdate" => {
                let args = parse_args(field, arguments)?;
                respond(mutation.cart_buyer_identity_update(ctx, args, info).await)
            }
            "cartCreate" => {
                let args = parse_args(field, arguments)?;
                respond(mutation.cart_create(ctx, args, info).await)
            }
            "cartDiscountCodesUpdate" => {
                let args = parse_args(field, arguments)?;
                respond(mutation.cart_discount_codes_update(ctx, args, info).await)
            }
            "cartGiftCardCodesUpdate" => {
                let args = parse_args(field, arguments)?;
                respond(mutation.cart_gift_card_codes_update(ctx, args, info).await)
            }
            "cartLinesAdd" => {
                let args = parse_args(field, arguments)?;
                respond(mutation.cart_lines_add(ctx, args, info).await)
            }
            "cartLinesRemove" => {
                let args = parse_args(field, arguments)?;
                respond(mutation.cart_lines_remove(ctx, args, info).await)
            }
            "cartLinesUpdate" => {
                let args = parse_args(field, arguments)?;
                respond(mutation.cart_lines_update(ctx, args, info).await)
            }
            "cartMetafieldDelete" => {
                let args = parse_args(field, arguments)?;
                respond(mutation.cart_metafield_delete(ctx, args, info).await)
            }
            "cartMetafieldsSet" => {
                let args = parse_args(field, arguments)?;
                respond(mutation.cart_metafields_set(ctx, args, info).await)
            }
            "cartNoteUpdate" => {
                let args = parse_args(field, arguments)?;
                respond(mutation.cart_note_update(ctx, args, info).await)
            }
            "cartPaymentUpdate" => {
                let args = parse_args(field, arguments)?;
                respond(mutation.cart_payment_update(ctx, args, info).await)
            }
            "cartPrepareForCompletion" => {
                let args = parse_args(field, arguments)?;
                respond(mutation.cart_prepare_for_completion(ctx, args, info).await)
            }
            "cartSelectedDeliveryOptionsUpdate" => {
                let args = parse_args(field, arguments)?;
                respond(mutation.cart_selected_delivery_options_update(ctx, args, info).await)
            }
            "cartSubmitForCompletion" => {
                let args = parse_args(field, arguments)?;
                respond(mutation.cart_submit_for_completion(ctx, args, info).await)
            }
            "customerAccessTokenCreate" => {
                let args = parse_args(field, arguments)?;
                respond(mutation.customer_access_token_create(ctx, args, info).await)
            }
            "customerAccessTokenCreateWithMultipass" => {
                let args = parse_args(field, arguments)?;
                respond(mutation.customer_access_token_create_with_multipass(ctx, args, info).await)
            }
            "customerAccessTokenDelete" => {
                let args = parse_args(field, arguments)?;
                respond(mutation.customer_access_token_delete(ctx, args, info).await)
            }
            "customerAccessTokenRenew" => {
                let args = parse_args(field, arguments)?;
                respond(mutation.customer_access_token_renew(ctx, args, info).await)
            }
            "customerActivate" => {
                let args = parse_args(field, arguments)?;
                respond(mutation.customer_activate(ctx, args, info).await)
            }
            "customerActivateByUrl" => {
                let args = parse_args(field, arguments)?;
                respond(mutation.customer_activate_by_url(ctx, args, info).await)
            }
            "customerAddressCreate" => {
                let args = parse_args(field, arguments)?;
                respond(mutation.customer_address_create(ctx, args, info).await)
            }
            "customerAddressDelete" => {
                let args = parse_args(field, arguments)?;
                respond(mutation.customer_address_delete(ctx, args, info).await)
            }
            "customerAddressUpdate" => {
                let args = parse_args(field, arguments)?;
                respond(mutation.customer_address_update(ctx, args, info).await)
            }
            "customerCreate" => {
                let args = parse_args(field, arguments)?;
                respond(mutation.customer_create(ctx, args, info).await)
            }
            "customerDefaultAddressUpdate" => {
                let args = parse_args(field, arguments)?;
                respond(mutation.customer_default_address_update(ctx, args, info).await)
            }
            "customerRecover" => {
                let args = parse_args(field, arguments)?;
                respond(mutation.customer_recover(ctx, args, info).await)
            }
            "customerReset" => {
                let args = parse_args(field, arguments)?;
                respond(mutation.customer_reset(ctx, args, info).await)
            }
            "customerResetByUrl" => {
                let args = parse_args(field, arguments)?;
                respond(mutation.customer_reset_by_url(ctx, args, info).await)
            }
            "customerUpdate" => {
                let args = parse_args(field, arguments)?;
                respond(mutation.customer_update(ctx, args, info).await)
            }
            "shopPayPaymentRequestSessionCreate" => {
                let args = parse_args(field, arguments)?;
                respond(mutation.shop_pay_payment_request_session_create(ctx, args, info).await)
            }
            "shopPayPaymentRequestSessionSubmit" => {
                let args = parse_args(field, arguments)?;
                respond(mutation.shop_pay_payment_request_session_submit(ctx, args, info).await)
            }
            other => {
                warn!(field = other, "Unknown Mutation field");
                Err(ResolverError::UnknownField {
                    parent_type: "Mutation",
                    field: other.to_owned(),
                })
            }
        }
    }

    fn paginated_args<T>(&self, field: &str, arguments: Value) -> ResolverResult<T>
    where
        T: DeserializeOwned + PaginatedArgs,
    {
        let args: T = parse_args(field, arguments)?;
        self.check_page(field, args.pagination())?;
        Ok(args)
    }

    fn check_page(&self, field: &str, pagination: &PaginationArgs) -> ResolverResult<()> {
        pagination
            .validate(self.config.max_page_size)
            .map_err(|err| ResolverError::InvalidArguments(format!("{field}: {err}")))
    }
}

/// Deserialize field arguments; `null` reads as no arguments.
///
/// # Errors
///
/// Returns [`ResolverError::InvalidArguments`] naming the field.
pub fn parse_args<T: DeserializeOwned>(field: &str, arguments: Value) -> ResolverResult<T> {
    let arguments = if arguments.is_null() {
        Value::Object(serde_json::Map::new())
    } else {
        arguments
    };
    serde_json::from_value(arguments)
        .map_err(|err| ResolverError::InvalidArguments(format!("{field}: {err}")))
}

fn no_args(field: &str, arguments: Value) -> ResolverResult<()> {
    match arguments {
        Value::Null => Ok(()),
        Value::Object(map) if map.is_empty() => Ok(()),
        _ => Err(ResolverError::InvalidArguments(format!(
            "{field} takes no arguments"
        ))),
    }
}

fn respond<T: Serialize>(result: ResolverResult<T>) -> ResolverResult<Value> {
    Ok(serde_json::to_value(result?)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::args::MutationCartNoteUpdateArgs;
    use crate::connection::{Connection, StringConnection};
    use crate::resolvers::{AccessRestrictedDirectiveArgs, DeferDirectiveArgs};
    use crate::types::CartNoteUpdatePayload;

    struct Tags(Vec<&'static str>);

    #[async_trait]
    impl QueryRootResolvers<()> for Tags {
        async fn product_tags(
            &self,
            _ctx: &(),
            args: QueryRootProductTagsArgs,
            info: &ResolveInfo,
        ) -> ResolverResult<StringConnection> {
            let take = usize::try_from(args.first).map_err(ResolverError::custom)?;
            let tags = self
                .0
                .iter()
                .take(take)
                .map(|tag| match info.country() {
                    Some(country) => format!("{country}:{tag}"),
                    None => (*tag).to_owned(),
                })
                .collect();
            Ok(Connection::from_nodes(tags))
        }
    }

    struct Notes;

    #[async_trait]
    impl MutationResolvers<()> for Notes {
        async fn cart_note_update(
            &self,
            _ctx: &(),
            _args: MutationCartNoteUpdateArgs,
            _info: &ResolveInfo,
        ) -> ResolverResult<Option<CartNoteUpdatePayload>> {
            Ok(Some(CartNoteUpdatePayload::default()))
        }
    }

    struct Wrap;

    #[async_trait]
    impl DirectiveResolver<()> for Wrap {
        const NAME: &'static str = "defer";
        type Args = DeferDirectiveArgs;

        async fn resolve<'a>(
            &'a self,
            next: Next<'a>,
            args: DeferDirectiveArgs,
            _ctx: &'a (),
            _info: &'a ResolveInfo,
        ) -> ResolverResult<Value> {
            let data = next().await?;
            if args.condition {
                Ok(serde_json::json!({ "label": args.label, "data": data }))
            } else {
                Ok(data)
            }
        }
    }

    struct Deny;

    #[async_trait]
    impl DirectiveResolver<()> for Deny {
        const NAME: &'static str = "accessRestricted";
        type Args = AccessRestrictedDirectiveArgs;

        async fn resolve<'a>(
            &'a self,
            _next: Next<'a>,
            args: AccessRestrictedDirectiveArgs,
            _ctx: &'a (),
            _info: &'a ResolveInfo,
        ) -> ResolverResult<Value> {
            Err(ResolverError::Unauthorized(
                args.reason.unwrap_or_else(|| "restricted".to_owned()),
            ))
        }
    }

    fn executor() -> Executor<(), Tags, Notes> {
        Executor::new(Tags(vec!["summer", "linen", "sale"]), Notes)
    }

    #[tokio::test]
    async fn test_dispatches_query_field() {
        let value = executor()
            .execute(&(), FieldRequest::query("productTags", serde_json::json!({ "first": 2 })))
            .await
            .unwrap();

        let tags: StringConnection = serde_json::from_value(value).unwrap();
        assert_eq!(tags.nodes, vec!["summer", "linen"]);
        assert_eq!(tags.page_info.end_cursor.as_deref(), Some("1"));
    }

    #[tokio::test]
    async fn test_dispatches_mutation_field() {
        let value = executor()
            .execute(
                &(),
                FieldRequest::mutation(
                    "cartNoteUpdate",
                    serde_json::json!({ "cartId": "gid://shopify/Cart/c1", "note": "hi" }),
                ),
            )
            .await
            .unwrap();
        assert_eq!(value["userErrors"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_unserved_field_not_implemented() {
        let err = executor()
            .execute(&(), FieldRequest::query("products", serde_json::json!({ "first": 10 })))
            .await
            .unwrap_err();
        assert!(matches!(err, ResolverError::NotImplemented { field: "products", .. }));
    }

    #[tokio::test]
    async fn test_pagination_validated_before_resolving() {
        let err = executor()
            .execute(&(), FieldRequest::query("products", serde_json::json!({ "first": 300 })))
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid arguments: products: first cannot exceed 250, got 300"
        );

        let err = executor()
            .execute(&(), FieldRequest::query("productTags", serde_json::json!({ "first": 0 })))
            .await
            .unwrap_err();
        assert!(matches!(err, ResolverError::InvalidArguments(_)));

        let err = executor()
            .execute(&(), FieldRequest::query("collections", Value::Null))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("you must provide one of first or last"));
    }

    #[tokio::test]
    async fn test_max_page_size_from_config() {
        let executor = executor().with_config(ExecutorConfig {
            max_page_size: 2,
            ..ExecutorConfig::default()
        });
        assert_eq!(executor.config().max_page_size, 2);

        let result = executor
            .execute(&(), FieldRequest::query("productTags", serde_json::json!({ "first": 3 })))
            .await;
        assert!(matches!(result, Err(ResolverError::InvalidArguments(_))));
    }

    #[tokio::test]
    async fn test_unknown_field_and_arguments() {
        let err = executor()
            .execute(&(), FieldRequest::query("productTag", Value::Null))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ResolverError::UnknownField { parent_type: "QueryRoot", ref field } if field == "productTag"
        ));

        let err = executor()
            .execute(&(), FieldRequest::query("shop", serde_json::json!({ "id": 1 })))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid arguments: shop takes no arguments");

        let err = executor()
            .execute(&(), FieldRequest::mutation("cartNoteUpdate", serde_json::json!({})))
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("Invalid arguments: cartNoteUpdate: missing field"));
    }

    #[tokio::test]
    async fn test_in_context_reaches_resolver() {
        let request = FieldRequest::query("productTags", serde_json::json!({ "first": 1 }))
            .with_directive("inContext", serde_json::json!({ "country": "CA" }));

        let value = executor().execute(&(), request).await.unwrap();
        assert_eq!(value["nodes"], serde_json::json!(["CA:summer"]));
    }

    #[tokio::test]
    async fn test_directive_chain() {
        let executor = executor().with_directive(Wrap).with_directive(Deny);

        let request = FieldRequest::query("productTags", serde_json::json!({ "first": 1 }))
            .with_directive("defer", serde_json::json!({ "label": "tags" }));
        let value = executor.execute(&(), request).await.unwrap();
        assert_eq!(value["label"], "tags");
        assert_eq!(value["data"]["nodes"], serde_json::json!(["summer"]));

        let request = FieldRequest::query("productTags", serde_json::json!({ "first": 1 }))
            .with_directive("defer", serde_json::json!({ "if": false }));
        let value = executor.execute(&(), request).await.unwrap();
        assert_eq!(value["nodes"], serde_json::json!(["summer"]));

        let request = FieldRequest::query("productTags", serde_json::json!({ "first": 1 }))
            .with_directive("defer", Value::Null)
            .with_directive("accessRestricted", serde_json::json!({ "reason": "staff only" }));
        let err = executor.execute(&(), request).await.unwrap_err();
        assert!(matches!(err, ResolverError::Unauthorized(ref reason) if reason == "staff only"));
    }

    #[tokio::test]
    async fn test_directive_without_resolver_passes_through() {
        let request = FieldRequest::query("productTags", serde_json::json!({ "first": 1 }))
            .with_directive("defer", Value::Null);
        let value = executor().execute(&(), request).await.unwrap();
        assert_eq!(value["nodes"], serde_json::json!(["summer"]));
    }

    #[tokio::test]
    async fn test_unknown_directive_rejected() {
        let request = FieldRequest::query("productTags", serde_json::json!({ "first": 1 }))
            .with_directive("cached", Value::Null);
        let err = executor().execute(&(), request).await.unwrap_err();
        assert_eq!(err.to_string(), "Directive @cached failed: unknown directive");
    }

    #[tokio::test]
    async fn test_repeated_directive_rejected() {
        let request = FieldRequest::query("productTags", serde_json::json!({ "first": 1 }))
            .with_directive("inContext", serde_json::json!({ "country": "CA" }))
            .with_directive("inContext", serde_json::json!({ "country": "FR" }));
        let err = executor().execute(&(), request).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Directive @inContext failed: directive is not repeatable"
        );

        let request = FieldRequest::query("productTags", serde_json::json!({ "first": 1 }))
            .with_directive("defer", Value::Null)
            .with_directive("inContext", serde_json::json!({ "country": "CA" }))
            .with_directive("defer", Value::Null);
        assert!(matches!(
            executor().execute(&(), request).await,
            Err(ResolverError::Directive { .. })
        ));
    }

    #[test]
    fn test_field_request_wire_form() {
        let request: FieldRequest = serde_json::from_value(serde_json::json!({
            "operation": "mutation",
            "field": "cartCreate"
        }))
        .unwrap();
        assert_eq!(request, FieldRequest::mutation("cartCreate", Value::Null));
        assert_eq!(request.operation.root_type(), "Mutation");
        assert_eq!(request.operation.to_string(), "mutation");
    }
}
