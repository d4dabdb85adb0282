//! Variant selection on a decoded product.

#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use storefront_schema::args::ProductVariantBySelectedOptionsArgs;
use storefront_schema::connection::Paginated;
use storefront_schema::interfaces::{HasMetafields, Node, OnlineStorePublishable, Trackable};
use storefront_schema::types::Product;
use storefront_schema_integration_tests::fixtures;

fn dried_pineapple() -> Product {
    fixtures::catalogue().unwrap().into_iter().next().unwrap()
}

#[test]
fn test_catalogue_decodes() {
    let catalogue = fixtures::catalogue().unwrap();
    assert_eq!(catalogue.len(), 4);

    let gift_box = catalogue.last().unwrap();
    assert!(gift_box.variants.is_empty());
    assert!(!gift_box.available_for_sale);
}

#[test]
fn test_matches_options_case_insensitively() {
    let product = dried_pineapple();
    let variants = product.variants.node_refs();
    let chili = variants.last().unwrap();

    assert!(chili.matches_options(&[("Flavor", "Chili")]));
    assert!(chili.matches_options(&[("SIZE", "large"), ("flavor", "CHILI")]));
    assert!(chili.matches_options(&[]));
    assert!(!chili.matches_options(&[("Flavor", "Original")]));
    assert!(!chili.matches_options(&[("Color", "Red")]));
}

#[test]
fn test_variant_matching() {
    let product = dried_pineapple();

    let small = product.variant_matching(&[("Size", "Small")]).unwrap();
    assert_eq!(small.title, "Small / Original");

    // First variant wins when the selection is partial
    let large = product.variant_matching(&[("Size", "Large")]).unwrap();
    assert_eq!(large.id.as_str(), "gid://shopify/ProductVariant/12");

    assert!(product.variant_matching(&[("Size", "Medium")]).is_none());
}

#[test]
fn test_variant_matching_from_field_arguments() {
    let product = dried_pineapple();
    let args: ProductVariantBySelectedOptionsArgs = serde_json::from_value(serde_json::json!({
        "selectedOptions": [
            { "name": "Size", "value": "Large" },
            { "name": "Flavor", "value": "Chili" }
        ]
    }))
    .unwrap();

    let owned = args.option_pairs();
    let pairs: Vec<(&str, &str)> = owned.iter().map(|(n, v)| (n.as_str(), v.as_str())).collect();
    let variant = product.variant_matching(&pairs).unwrap();
    assert_eq!(variant.title, "Large / Chili");
    assert!(!args.case_insensitive_match);
}

#[test]
fn test_sale_prices() {
    let product = dried_pineapple();
    let large = product.variant_matching(&[("Size", "Large"), ("Flavor", "Original")]).unwrap();
    assert!(large.is_on_sale());

    let small = product.variant_matching(&[("Size", "Small")]).unwrap();
    assert!(!small.is_on_sale());
}

#[test]
fn test_variants_read_from_edges() {
    let mut json = fixtures::product_json(
        9,
        "edges-only",
        "Edges Only",
        &[],
        &[fixtures::variant_json(91, "Default Title", "1.00", None, &[("Title", "Default Title")])],
    );
    let nodes = json["variants"]["nodes"].take();
    json["variants"] = serde_json::json!({
        "edges": [{ "cursor": "c1", "node": nodes[0] }],
        "pageInfo": { "hasNextPage": false, "hasPreviousPage": false }
    });

    let product: Product = serde_json::from_value(json).unwrap();
    assert!(product.variants.nodes.is_empty());
    assert_eq!(product.variants.end_cursor(), Some("c1"));
    assert!(product.variant_matching(&[("title", "default title")]).is_some());
}

#[test]
fn test_product_interfaces() {
    let product = dried_pineapple();
    assert_eq!(product.id().as_str(), "gid://shopify/Product/1");
    assert!(product.metafields().is_empty());
    assert!(product.find_metafield(None, "tagline").is_none());
    assert!(product.online_store_url().is_none());
    assert!(product.tracking_parameters().is_none());
}
