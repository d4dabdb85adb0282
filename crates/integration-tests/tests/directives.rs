//! Directive chains around root fields.

#![allow(clippy::unwrap_used)]

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use storefront_schema::enums::{CountryCode, CurrencyCode};
use storefront_schema::resolvers::{
    DeferDirectiveArgs, DirectiveResolver, Executor, FieldRequest, Next, ResolveInfo,
    ResolverError, ResolverResult,
};
use storefront_schema::types::Product;
use storefront_schema_integration_tests::fixtures;
use storefront_schema_integration_tests::store::{FixtureStore, RequireToken, StoreContext};

fn store() -> FixtureStore {
    FixtureStore::new(fixtures::catalogue().unwrap(), "hunter2").with_market(
        CountryCode::Ca,
        CurrencyCode::Cad,
        Decimal::new(135, 2),
    )
}

fn dried_pineapple() -> FieldRequest {
    FieldRequest::query("product", json!({ "handle": "dried-pineapple" }))
}

/// `@defer` that wraps the result with its label.
struct Label;

#[async_trait]
impl DirectiveResolver<StoreContext> for Label {
    const NAME: &'static str = "defer";
    type Args = DeferDirectiveArgs;

    async fn resolve<'a>(
        &'a self,
        next: Next<'a>,
        args: DeferDirectiveArgs,
        _ctx: &'a StoreContext,
        info: &'a ResolveInfo,
    ) -> ResolverResult<Value> {
        let data = next().await?;
        Ok(json!({ "label": args.label, "path": info.path_string(), "data": data }))
    }
}

#[tokio::test]
async fn test_in_context_localizes_prices() {
    let executor = Executor::new(store(), store());
    let request = dried_pineapple().with_directive("inContext", json!({ "country": "CA" }));

    let value = executor.execute(&StoreContext::default(), request).await.unwrap();
    let product: Product = serde_json::from_value(value).unwrap();

    let min = &product.price_range.min_variant_price;
    assert_eq!(min.currency_code, CurrencyCode::Cad);
    assert_eq!(min.amount.to_string(), "10.80");

    let large = product
        .variant_matching(&[("size", "large"), ("flavor", "original")])
        .unwrap();
    assert_eq!(large.price.amount.to_string(), "18.90");
    assert_eq!(large.compare_at_price.as_ref().unwrap().amount.to_string(), "21.60");
}

#[tokio::test]
async fn test_in_context_outside_markets_keeps_prices() {
    let executor = Executor::new(store(), store());
    let request = dried_pineapple().with_directive("inContext", json!({ "country": "FR" }));

    let value = executor.execute(&StoreContext::default(), request).await.unwrap();
    assert_eq!(value["priceRange"]["minVariantPrice"], json!({ "amount": "8.00", "currencyCode": "USD" }));
}

#[tokio::test]
async fn test_in_context_rejects_unknown_country() {
    let executor = Executor::new(store(), store());
    let request = dried_pineapple().with_directive("inContext", json!({ "country": "ATLANTIS" }));

    let err = executor.execute(&StoreContext::default(), request).await.unwrap_err();
    assert!(matches!(err, ResolverError::Directive { ref directive, .. } if directive == "inContext"));
    assert_eq!(err.code(), "DIRECTIVE_FAILED");
}

#[tokio::test]
async fn test_access_restricted_requires_token() {
    let executor = Executor::new(store(), store()).with_directive(RequireToken);
    let request = || {
        dried_pineapple().with_directive("accessRestricted", json!({ "reason": "Members only" }))
    };

    let err = executor
        .execute(&StoreContext::default(), request())
        .await
        .unwrap_err();
    assert!(matches!(err, ResolverError::Unauthorized(ref reason) if reason == "Members only"));

    let value = executor
        .execute(&StoreContext::authenticated("token-1"), request())
        .await
        .unwrap();
    assert_eq!(value["handle"], "dried-pineapple");
}

#[tokio::test]
async fn test_directive_without_handler_passes_through() {
    let executor = Executor::new(store(), store());

    let plain = executor
        .execute(&StoreContext::default(), dried_pineapple())
        .await
        .unwrap();
    let deferred = executor
        .execute(
            &StoreContext::default(),
            dried_pineapple().with_directive("defer", json!({ "label": "pdp" })),
        )
        .await
        .unwrap();
    assert_eq!(plain, deferred);
}

#[tokio::test]
async fn test_undeclared_directive_rejected() {
    let executor = Executor::new(store(), store());
    let err = executor
        .execute(
            &StoreContext::default(),
            dried_pineapple().with_directive("cached", json!({ "ttl": 60 })),
        )
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Directive @cached failed: unknown directive");
}

#[tokio::test]
async fn test_directives_apply_outermost_first() {
    let executor = Executor::new(store(), store())
        .with_directive(RequireToken)
        .with_directive(Label);

    // The denial happens inside the label wrapper, so the error surfaces as is
    let err = executor
        .execute(
            &StoreContext::default(),
            dried_pineapple()
                .with_directive("defer", json!({ "label": "pdp" }))
                .with_directive("accessRestricted", json!({})),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ResolverError::Unauthorized(ref reason) if reason == "access token required"));

    let value = executor
        .execute(
            &StoreContext::authenticated("token-1"),
            dried_pineapple()
                .with_directive("defer", json!({ "label": "pdp" }))
                .with_directive("accessRestricted", json!({})),
        )
        .await
        .unwrap();
    assert_eq!(value["label"], "pdp");
    assert_eq!(value["path"], "product");
    assert_eq!(value["data"]["title"], "Dried Pineapple");
}
