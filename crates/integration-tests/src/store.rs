//! An in-memory resolver map over the fixture catalogue.

use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal as RawDecimal;
use serde_json::Value;
use storefront_schema::args::{
    MutationCustomerAccessTokenCreateArgs, MutationCustomerAccessTokenDeleteArgs,
    QueryRootNodeArgs, QueryRootProductArgs, QueryRootProductTagsArgs, QueryRootProductsArgs,
};
use storefront_schema::connection::{Connection, Edge, PageInfo, ProductConnection, StringConnection};
use storefront_schema::enums::{CountryCode, CurrencyCode, CustomerErrorCode, ProductSortKeys};
use storefront_schema::interfaces::AnyNode;
use storefront_schema::resolvers::{
    AccessRestrictedDirectiveArgs, DirectiveResolver, MutationResolvers, Next, QueryRootResolvers,
    ResolveInfo, ResolverError, ResolverResult,
};
use storefront_schema::types::{
    CustomerAccessToken, CustomerAccessTokenCreatePayload, CustomerAccessTokenDeletePayload,
    CustomerUserError, MoneyV2, Product, ProductVariant, UserError,
};
use storefront_schema_core::{DateTime, Decimal, GlobalId};
use tokio::sync::Mutex;

/// Per-request context.
#[derive(Debug, Clone, Default)]
pub struct StoreContext {
    /// Storefront access token sent with the request.
    pub access_token: Option<String>,
}

impl StoreContext {
    /// A request carrying an access token.
    #[must_use]
    pub fn authenticated(token: impl Into<String>) -> Self {
        Self {
            access_token: Some(token.into()),
        }
    }
}

/// Fixture products plus the customer tokens issued so far.
pub struct FixtureStore {
    products: Vec<Product>,
    /// Presentment currency and USD rate per market country.
    markets: HashMap<CountryCode, (CurrencyCode, RawDecimal)>,
    password: String,
    tokens: Mutex<Vec<String>>,
}

impl FixtureStore {
    /// A store serving `products`. Customers log in with `password`.
    #[must_use]
    pub fn new(products: Vec<Product>, password: impl Into<String>) -> Self {
        Self {
            products,
            markets: HashMap::new(),
            password: password.into(),
            tokens: Mutex::new(Vec::new()),
        }
    }

    /// Present prices in `currency` for buyers in `country`, converting
    /// from USD at `rate`.
    #[must_use]
    pub fn with_market(mut self, country: CountryCode, currency: CurrencyCode, rate: RawDecimal) -> Self {
        self.markets.insert(country, (currency, rate));
        self
    }

    /// Tokens currently valid.
    pub async fn issued_tokens(&self) -> Vec<String> {
        self.tokens.lock().await.clone()
    }

    fn find(&self, predicate: impl Fn(&Product) -> bool) -> Option<&Product> {
        self.products.iter().find(|product| predicate(product))
    }

    /// Rewrite prices for the `@inContext` country, if it is a market.
    fn localize(&self, mut product: Product, info: &ResolveInfo) -> Product {
        let Some((currency, rate)) = info.country().and_then(|country| self.markets.get(&country))
        else {
            return product;
        };

        let convert = |money: &mut MoneyV2| {
            *money = MoneyV2::new(
                Decimal::new((money.amount.value() * *rate).round_dp(2)),
                *currency,
            );
        };
        for range in [&mut product.price_range, &mut product.compare_at_price_range] {
            convert(&mut range.min_variant_price);
            convert(&mut range.max_variant_price);
        }
        for variant in &mut product.variants.nodes {
            localize_variant(variant, &convert);
        }
        product
    }
}

fn localize_variant(variant: &mut ProductVariant, convert: &impl Fn(&mut MoneyV2)) {
    convert(&mut variant.price);
    if let Some(compare_at) = variant.compare_at_price.as_mut() {
        convert(compare_at);
    }
}

/// Slice `items` into a page using index cursors.
fn paginate<T: Clone>(items: &[T], first: Option<i32>, after: Option<&str>) -> ResolverResult<Connection<T>> {
    let start = match after {
        Some(cursor) => cursor
            .parse::<usize>()
            .map(|index| index + 1)
            .map_err(|_| ResolverError::InvalidArguments(format!("invalid cursor {cursor:?}")))?,
        None => 0,
    };
    let take = first
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(items.len());

    let edges: Vec<Edge<T>> = items
        .iter()
        .enumerate()
        .skip(start)
        .take(take)
        .map(|(index, node)| Edge {
            cursor: index.to_string(),
            node: node.clone(),
        })
        .collect();

    let page_info = PageInfo {
        start_cursor: edges.first().map(|edge| edge.cursor.clone()),
        end_cursor: edges.last().map(|edge| edge.cursor.clone()),
        has_next_page: start + edges.len() < items.len(),
        has_previous_page: start > 0,
    };

    Ok(Connection {
        nodes: edges.iter().map(|edge| edge.node.clone()).collect(),
        edges,
        page_info,
    })
}

#[async_trait]
impl QueryRootResolvers<StoreContext> for FixtureStore {
    async fn node(
        &self,
        _ctx: &StoreContext,
        args: QueryRootNodeArgs,
        info: &ResolveInfo,
    ) -> ResolverResult<Option<AnyNode>> {
        let gid = GlobalId::parse(args.id.as_str())
            .map_err(|err| ResolverError::InvalidArguments(err.to_string()))?;

        if gid.is("Product") {
            return Ok(self
                .find(|product| product.id == args.id)
                .map(|product| AnyNode::Product(Box::new(self.localize(product.clone(), info)))));
        }
        if gid.is("ProductVariant") {
            return Ok(self
                .products
                .iter()
                .flat_map(|product| product.variants.nodes.iter())
                .find(|variant| variant.id == args.id)
                .map(|variant| AnyNode::ProductVariant(Box::new(variant.clone()))));
        }

        tracing::debug!(resource_type = gid.resource_type(), "No fixtures for resource type");
        Ok(None)
    }

    async fn product(
        &self,
        _ctx: &StoreContext,
        args: QueryRootProductArgs,
        info: &ResolveInfo,
    ) -> ResolverResult<Option<Product>> {
        let found = match (&args.id, &args.handle) {
            (Some(id), _) => self.find(|product| &product.id == id),
            (None, Some(handle)) => self.find(|product| &product.handle == handle),
            (None, None) => {
                return Err(ResolverError::InvalidArguments(
                    "product requires an id or a handle".to_owned(),
                ));
            }
        };
        Ok(found.map(|product| self.localize(product.clone(), info)))
    }

    async fn product_tags(
        &self,
        _ctx: &StoreContext,
        args: QueryRootProductTagsArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<StringConnection> {
        let mut tags: Vec<String> = self
            .products
            .iter()
            .flat_map(|product| product.tags.iter().cloned())
            .collect();
        tags.sort_unstable();
        tags.dedup();
        paginate(&tags, Some(args.first), None)
    }

    async fn products(
        &self,
        _ctx: &StoreContext,
        args: QueryRootProductsArgs,
        info: &ResolveInfo,
    ) -> ResolverResult<ProductConnection> {
        let needle = args.query.as_deref().map(str::to_lowercase);
        let mut matches: Vec<Product> = self
            .products
            .iter()
            .filter(|product| {
                needle
                    .as_deref()
                    .is_none_or(|needle| product.title.to_lowercase().contains(needle))
            })
            .map(|product| self.localize(product.clone(), info))
            .collect();

        match args.sort_key {
            ProductSortKeys::Title => matches.sort_by(|a, b| a.title.cmp(&b.title)),
            ProductSortKeys::Price => matches.sort_by(|a, b| {
                a.price_range
                    .min_variant_price
                    .amount
                    .value()
                    .cmp(&b.price_range.min_variant_price.amount.value())
            }),
            // Fixtures are stored in id order
            _ => {}
        }
        if args.reverse {
            matches.reverse();
        }

        let page = paginate(
            &matches,
            args.pagination.first,
            args.pagination.after.as_deref(),
        )?;
        Ok(ProductConnection {
            edges: page.edges,
            filters: Vec::new(),
            nodes: page.nodes,
            page_info: page.page_info,
        })
    }
}

#[async_trait]
impl MutationResolvers<StoreContext> for FixtureStore {
    async fn customer_access_token_create(
        &self,
        _ctx: &StoreContext,
        args: MutationCustomerAccessTokenCreateArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<CustomerAccessTokenCreatePayload>> {
        if args.input.password != self.password {
            tracing::info!(email = %args.input.email, "Rejected customer login");
            return Ok(Some(CustomerAccessTokenCreatePayload {
                customer_user_errors: vec![CustomerUserError {
                    code: Some(CustomerErrorCode::UnidentifiedCustomer),
                    field: None,
                    message: "Unidentified customer".to_owned(),
                }],
                ..CustomerAccessTokenCreatePayload::default()
            }));
        }

        let mut tokens = self.tokens.lock().await;
        let access_token = format!("token-{}", tokens.len() + 1);
        tokens.push(access_token.clone());

        let expires_at = DateTime::parse("2030-01-01T00:00:00Z").map_err(ResolverError::custom)?;
        Ok(Some(CustomerAccessTokenCreatePayload {
            customer_access_token: Some(CustomerAccessToken {
                access_token,
                expires_at,
            }),
            ..CustomerAccessTokenCreatePayload::default()
        }))
    }

    async fn customer_access_token_delete(
        &self,
        _ctx: &StoreContext,
        args: MutationCustomerAccessTokenDeleteArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<CustomerAccessTokenDeletePayload>> {
        let mut tokens = self.tokens.lock().await;
        let before = tokens.len();
        tokens.retain(|token| token != &args.customer_access_token);

        if tokens.len() == before {
            return Ok(Some(CustomerAccessTokenDeletePayload {
                user_errors: vec![UserError {
                    field: None,
                    message: "Access token does not exist".to_owned(),
                }],
                ..CustomerAccessTokenDeletePayload::default()
            }));
        }

        Ok(Some(CustomerAccessTokenDeletePayload {
            deleted_access_token: Some(args.customer_access_token),
            ..CustomerAccessTokenDeletePayload::default()
        }))
    }
}

/// `@accessRestricted`: requests without an access token are denied.
pub struct RequireToken;

#[async_trait]
impl DirectiveResolver<StoreContext> for RequireToken {
    const NAME: &'static str = "accessRestricted";
    type Args = AccessRestrictedDirectiveArgs;

    async fn resolve<'a>(
        &'a self,
        next: Next<'a>,
        args: AccessRestrictedDirectiveArgs,
        ctx: &'a StoreContext,
        info: &'a ResolveInfo,
    ) -> ResolverResult<Value> {
        if ctx.access_token.is_none() {
            tracing::warn!(field = %info.field_name, "Denied restricted field");
            return Err(ResolverError::Unauthorized(
                args.reason.unwrap_or_else(|| "access token required".to_owned()),
            ));
        }
        next().await
    }
}
