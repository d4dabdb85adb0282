//! The runtime catalogue agrees with the Rust types.

#![allow(clippy::unwrap_used)]

use std::collections::BTreeSet;

use pretty_assertions::assert_eq;
use storefront_schema::config::ExecutorConfig;
use storefront_schema::connection::{
    ArticleConnection, BaseCartLineConnection, BlogConnection, CartDeliveryGroupConnection,
    CollectionConnection, CommentConnection, DiscountApplicationConnection,
    FulfillmentLineItemConnection, ImageConnection, LocationConnection, MailingAddressConnection,
    MediaConnection, MetafieldReferenceConnection, MetaobjectConnection, OrderConnection,
    OrderLineItemConnection, PageConnection, Paginated, ProductConnection,
    ProductVariantComponentConnection, ProductVariantConnection, QuantityPriceBreakConnection,
    SearchResultItemConnection, SellingPlanAllocationConnection, SellingPlanConnection,
    SellingPlanGroupConnection, StoreAvailabilityConnection, StringConnection,
    UrlRedirectConnection,
};
use storefront_schema::enums::{
    CartErrorCode, CartWarningCode, CountryCode, CurrencyCode, LanguageCode,
    MetafieldDeleteErrorCode, SchemaEnum, SearchSortKeys,
};
use storefront_schema::interfaces::{
    AnyBaseCartLine, AnyCartDiscountAllocation, AnyDiscountApplication, AnyMedia, AnyNode,
    AnySitemapResource,
};
use storefront_schema::registry::{self, TypeKind};
use storefront_schema::resolvers::TypeResolver;
use storefront_schema::unions;
use strum::VariantArray;

const fn paginated<T: Paginated>() {}

#[test]
fn test_every_connection_is_paginated() {
    paginated::<ArticleConnection>();
    paginated::<BaseCartLineConnection>();
    paginated::<BlogConnection>();
    paginated::<CartDeliveryGroupConnection>();
    paginated::<CollectionConnection>();
    paginated::<CommentConnection>();
    paginated::<DiscountApplicationConnection>();
    paginated::<FulfillmentLineItemConnection>();
    paginated::<ImageConnection>();
    paginated::<LocationConnection>();
    paginated::<MailingAddressConnection>();
    paginated::<MediaConnection>();
    paginated::<MetafieldReferenceConnection>();
    paginated::<MetaobjectConnection>();
    paginated::<OrderConnection>();
    paginated::<OrderLineItemConnection>();
    paginated::<PageConnection>();
    paginated::<ProductConnection>();
    paginated::<ProductVariantComponentConnection>();
    paginated::<ProductVariantConnection>();
    paginated::<QuantityPriceBreakConnection>();
    paginated::<SearchResultItemConnection>();
    paginated::<SellingPlanAllocationConnection>();
    paginated::<SellingPlanConnection>();
    paginated::<SellingPlanGroupConnection>();
    paginated::<StoreAvailabilityConnection>();
    paginated::<StringConnection>();
    paginated::<UrlRedirectConnection>();

    let connections = registry::by_kind(TypeKind::Object)
        .filter(|entry| entry.name.ends_with("Connection"))
        .count();
    assert_eq!(connections, 28);
}

#[test]
fn test_union_members_registered() {
    for (union, members) in unions::all() {
        let entry = registry::lookup(union).unwrap();
        assert_eq!(entry.kind, TypeKind::Union);
        for member in members {
            assert_eq!(
                registry::lookup(member).map(|e| e.kind),
                Some(TypeKind::Object),
                "{union} member {member}"
            );
        }
    }
}

fn assert_interface_members(interface: &str, members: &[&str]) {
    let declared: BTreeSet<_> = members.iter().copied().collect();
    let implementers: BTreeSet<_> = registry::implementers(interface)
        .into_iter()
        .filter(|name| registry::lookup(name).is_some_and(|e| e.kind == TypeKind::Object))
        .collect();
    assert_eq!(declared, implementers, "{interface}");
}

#[test]
fn test_interface_value_enums_match_implementers() {
    assert_interface_members("Node", AnyNode::POSSIBLE_TYPES);
    assert_interface_members("Media", AnyMedia::POSSIBLE_TYPES);
    assert_interface_members("DiscountApplication", AnyDiscountApplication::POSSIBLE_TYPES);
    assert_interface_members("BaseCartLine", AnyBaseCartLine::POSSIBLE_TYPES);
    assert_interface_members("CartDiscountAllocation", AnyCartDiscountAllocation::POSSIBLE_TYPES);
    assert_interface_members("SitemapResourceInterface", AnySitemapResource::POSSIBLE_TYPES);
}

fn assert_enum<E: SchemaEnum>() {
    let entry = registry::lookup(E::NAME).unwrap();
    assert_eq!(entry.kind, TypeKind::Enum);
    assert_eq!(entry.values(), E::values());
    for value in E::values() {
        assert!(value.parse::<E>().is_ok(), "{}::{value}", E::NAME);
    }
}

#[test]
fn test_enum_values_match() {
    assert_enum::<CartErrorCode>();
    assert_enum::<CountryCode>();
    assert_enum::<CurrencyCode>();
    assert_enum::<LanguageCode>();
    assert_enum::<SearchSortKeys>();
}

#[test]
fn test_directive_argument_types_registered() {
    for directive in registry::DIRECTIVES {
        for argument in directive.arguments {
            let named = argument.type_ref.trim_end_matches('!');
            assert!(registry::lookup(named).is_some(), "@{} {}", directive.name, named);
        }
    }
}

#[test]
fn test_export_is_idempotent() {
    let api_version = ExecutorConfig::default().api_version;
    let first = registry::export_json(&api_version, true).unwrap();
    let second = registry::export_json(&api_version, true).unwrap();
    assert_eq!(first, second);

    let parsed: serde_json::Value = serde_json::from_str(&first).unwrap();
    let types = parsed["types"].as_array().unwrap();
    assert_eq!(types.len(), registry::TYPES.len());
    assert!(types.iter().any(|t| t["name"] == "Merchandise" && t["kind"] == "UNION"));
    assert_eq!(parsed["mutationType"], "Mutation");
}

const fn warning_severity(code: CartWarningCode) -> u8 {
    // No wildcard: a new schema value must be handled here
    match code {
        CartWarningCode::MerchandiseNotEnoughStock => 1,
        CartWarningCode::MerchandiseOutOfStock => 2,
        CartWarningCode::PaymentsGiftCardsUnavailable => 0,
    }
}

#[test]
fn test_error_codes_match_exhaustively() {
    let severities: Vec<u8> = CartWarningCode::VARIANTS
        .iter()
        .map(|code| warning_severity(*code))
        .collect();
    assert_eq!(severities, vec![1, 2, 0]);

    let messages: Vec<&str> = MetafieldDeleteErrorCode::VARIANTS
        .iter()
        .map(|code| match code {
            MetafieldDeleteErrorCode::InvalidOwner => "owner",
            MetafieldDeleteErrorCode::MetafieldDoesNotExist => "missing",
        })
        .collect();
    assert_eq!(messages, vec!["owner", "missing"]);
}

#[test]
fn test_connections_share_wire_shape() {
    let shapes = [
        serde_json::to_value(StringConnection::default()).unwrap(),
        serde_json::to_value(ProductVariantConnection::default()).unwrap(),
        serde_json::to_value(ProductConnection::default()).unwrap(),
        serde_json::to_value(SearchResultItemConnection::default()).unwrap(),
    ];
    for shape in shapes {
        assert!(shape["edges"].is_array(), "{shape}");
        assert!(shape["nodes"].is_array(), "{shape}");
        assert_eq!(shape["pageInfo"]["hasNextPage"], false);
    }
}
