//! Root fields dispatched through the executor to the fixture store.

#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use serde_json::json;
use storefront_schema::config::ExecutorConfig;
use storefront_schema::connection::{Paginated, ProductConnection, StringConnection};
use storefront_schema::interfaces::{AnyNode, Node};
use storefront_schema::resolvers::{Executor, FieldRequest, ResolverError, TypeResolver};
use storefront_schema::types::{
    CustomerAccessTokenCreatePayload, CustomerAccessTokenDeletePayload, Payload, Product,
};
use storefront_schema_integration_tests::fixtures;
use storefront_schema_integration_tests::store::{FixtureStore, StoreContext};

type StoreExecutor = Executor<StoreContext, FixtureStore, FixtureStore>;

fn store() -> FixtureStore {
    FixtureStore::new(fixtures::catalogue().unwrap(), "hunter2")
}

fn executor() -> StoreExecutor {
    Executor::new(store(), store())
}

// ============================================================================
// Queries
// ============================================================================

#[tokio::test]
async fn test_product_by_handle() {
    let value = executor()
        .execute(
            &StoreContext::default(),
            FieldRequest::query("product", json!({ "handle": "mango-chips" })),
        )
        .await
        .unwrap();

    let product: Product = serde_json::from_value(value).unwrap();
    assert_eq!(product.title, "Mango Chips");
    assert_eq!(product.id.as_str(), "gid://shopify/Product/2");
    assert_eq!(product.variants.len(), 1);
}

#[tokio::test]
async fn test_missing_product_is_null() {
    let value = executor()
        .execute(
            &StoreContext::default(),
            FieldRequest::query("product", json!({ "handle": "pineapple-rings" })),
        )
        .await
        .unwrap();
    assert!(value.is_null());
}

#[tokio::test]
async fn test_products_paginate_forward() {
    let executor = executor();
    let ctx = StoreContext::default();

    let first: ProductConnection = serde_json::from_value(
        executor
            .execute(&ctx, FieldRequest::query("products", json!({ "first": 3 })))
            .await
            .unwrap(),
    )
    .unwrap();
    assert_eq!(first.len(), 3);
    assert!(first.page_info.has_next_page);

    let next = first.next_page(3).unwrap();
    let second: ProductConnection = serde_json::from_value(
        executor
            .execute(
                &ctx,
                FieldRequest::query("products", serde_json::to_value(&next).unwrap()),
            )
            .await
            .unwrap(),
    )
    .unwrap();

    let handles: Vec<&str> = second.node_refs().iter().map(|p| p.handle.as_str()).collect();
    assert_eq!(handles, vec!["gift-box"]);
    assert!(!second.page_info.has_next_page);
    assert!(second.page_info.has_previous_page);
}

#[tokio::test]
async fn test_products_sort_and_query() {
    let value = executor()
        .execute(
            &StoreContext::default(),
            FieldRequest::query(
                "products",
                json!({ "first": 10, "sortKey": "PRICE", "reverse": true, "query": "o" }),
            ),
        )
        .await
        .unwrap();

    let page: ProductConnection = serde_json::from_value(value).unwrap();
    let titles: Vec<&str> = page.nodes.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Coconut Bites", "Mango Chips", "Gift Box"]);
}

#[tokio::test]
async fn test_page_size_rules_checked_before_resolver() {
    let executor = executor();
    let ctx = StoreContext::default();

    for args in [json!({}), json!({ "first": 251 }), json!({ "first": 2, "last": 2 })] {
        let err = executor
            .execute(&ctx, FieldRequest::query("products", args.clone()))
            .await
            .unwrap_err();
        assert!(
            matches!(err, ResolverError::InvalidArguments(ref msg) if msg.starts_with("products:")),
            "{args}: {err}"
        );
    }
}

#[tokio::test]
async fn test_configured_page_size_limit() {
    let executor = executor().with_config(ExecutorConfig {
        max_page_size: 2,
        ..ExecutorConfig::default()
    });

    let err = executor
        .execute(
            &StoreContext::default(),
            FieldRequest::query("products", json!({ "first": 3 })),
        )
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid arguments: products: first cannot exceed 2, got 3");
}

#[tokio::test]
async fn test_product_tags() {
    let value = executor()
        .execute(
            &StoreContext::default(),
            FieldRequest::query("productTags", json!({ "first": 250 })),
        )
        .await
        .unwrap();

    let tags: StringConnection = serde_json::from_value(value).unwrap();
    assert_eq!(tags.nodes, vec!["snack", "tropical", "vegan"]);
}

#[tokio::test]
async fn test_node_resolves_type() {
    let value = executor()
        .execute(
            &StoreContext::default(),
            FieldRequest::query("node", json!({ "id": "gid://shopify/ProductVariant/13" })),
        )
        .await
        .unwrap();

    assert_eq!(value["__typename"], "ProductVariant");
    let node: AnyNode = serde_json::from_value(value).unwrap();
    assert_eq!(node.typename(), "ProductVariant");
    assert!(AnyNode::is_type_of(node.typename()));
    assert_eq!(node.id().as_str(), "gid://shopify/ProductVariant/13");
}

#[tokio::test]
async fn test_node_rejects_malformed_id() {
    let err = executor()
        .execute(&StoreContext::default(), FieldRequest::query("node", json!({ "id": "42" })))
        .await
        .unwrap_err();
    assert!(err.is_client_error());
}

#[tokio::test]
async fn test_unserved_field_not_implemented() {
    let err = executor()
        .execute(&StoreContext::default(), FieldRequest::query("shop", json!(null)))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "NOT_IMPLEMENTED");
    assert_eq!(err.to_string(), "QueryRoot.shop is not implemented");
}

#[tokio::test]
async fn test_unknown_field() {
    let err = executor()
        .execute(&StoreContext::default(), FieldRequest::query("checkout", json!({})))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ResolverError::UnknownField { parent_type: "QueryRoot", ref field } if field == "checkout"
    ));
}

// ============================================================================
// Mutations
// ============================================================================

fn login(password: &str) -> FieldRequest {
    FieldRequest::mutation(
        "customerAccessTokenCreate",
        json!({ "input": { "email": "ada@example.com", "password": password } }),
    )
}

#[tokio::test]
async fn test_login_and_logout() {
    let executor = executor();
    let ctx = StoreContext::default();

    let created: CustomerAccessTokenCreatePayload =
        serde_json::from_value(executor.execute(&ctx, login("hunter2")).await.unwrap()).unwrap();
    assert!(!created.has_errors());
    let token = created.customer_access_token.unwrap().access_token;
    assert_eq!(token, "token-1");

    let deleted: CustomerAccessTokenDeletePayload = serde_json::from_value(
        executor
            .execute(
                &ctx,
                FieldRequest::mutation(
                    "customerAccessTokenDelete",
                    json!({ "customerAccessToken": token }),
                ),
            )
            .await
            .unwrap(),
    )
    .unwrap();
    assert_eq!(deleted.deleted_access_token.as_deref(), Some("token-1"));
    assert!(deleted.user_errors.is_empty());
}

#[tokio::test]
async fn test_bad_password_is_user_error() {
    let value = executor()
        .execute(&StoreContext::default(), login("password"))
        .await
        .unwrap();

    assert_eq!(value["customerUserErrors"][0]["code"], "UNIDENTIFIED_CUSTOMER");
    let payload: CustomerAccessTokenCreatePayload = serde_json::from_value(value).unwrap();
    assert!(payload.customer_access_token.is_none());
    assert_eq!(payload.error_messages(), vec!["Unidentified customer"]);
}

#[tokio::test]
async fn test_mutation_arguments_validated() {
    let err = executor()
        .execute(
            &StoreContext::default(),
            FieldRequest::mutation("customerAccessTokenCreate", json!({ "input": { "email": "x" } })),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ResolverError::InvalidArguments(ref msg) if msg.contains("password")));
}

#[tokio::test]
async fn test_concurrent_logins_issue_distinct_tokens() {
    let executor = Executor::new(store(), store());
    let ctx = StoreContext::default();

    let (a, b) = tokio::join!(
        executor.execute(&ctx, login("hunter2")),
        executor.execute(&ctx, login("hunter2")),
    );
    let mut tokens = vec![
        a.unwrap()["customerAccessToken"]["accessToken"].clone(),
        b.unwrap()["customerAccessToken"]["accessToken"].clone(),
    ];
    tokens.sort_by_key(ToString::to_string);
    assert_eq!(tokens, vec![json!("token-1"), json!("token-2")]);
}
