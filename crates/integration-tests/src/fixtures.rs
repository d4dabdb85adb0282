//! JSON builders for schema-complete objects.
//!
//! Object types require every non-null field, so fixtures spell them all
//! out. Connections are left empty unless the test needs them.

use serde_json::{Value, json};
use storefront_schema::types::Product;

const TIMESTAMP: &str = "2024-05-01T12:00:00Z";

/// A `MoneyV2` value.
#[must_use]
pub fn money(amount: &str, currency: &str) -> Value {
    json!({ "amount": amount, "currencyCode": currency })
}

/// A product variant with the given selected options.
///
/// The variant's `product` is a stub product with no variants.
#[must_use]
pub fn variant_json(
    id: u64,
    title: &str,
    price: &str,
    compare_at: Option<&str>,
    options: &[(&str, &str)],
) -> Value {
    let selected_options: Vec<Value> = options
        .iter()
        .map(|(name, value)| json!({ "name": name, "value": value }))
        .collect();

    json!({
        "availableForSale": true,
        "compareAtPrice": compare_at.map(|amount| money(amount, "USD")),
        "components": {},
        "groupedBy": {},
        "id": format!("gid://shopify/ProductVariant/{id}"),
        "metafields": [],
        "price": money(price, "USD"),
        "product": product_json(0, "stub", "Stub", &[], &[]),
        "quantityAvailable": 10,
        "quantityPriceBreaks": {},
        "quantityRule": { "increment": 1, "minimum": 1 },
        "requiresComponents": false,
        "requiresShipping": true,
        "selectedOptions": selected_options,
        "sellingPlanAllocations": {},
        "storeAvailability": {},
        "taxable": true,
        "title": title,
        "weightUnit": "GRAMS"
    })
}

/// A product with the given variants, listed under `variants.nodes`.
#[must_use]
pub fn product_json(id: u64, handle: &str, title: &str, tags: &[&str], variants: &[Value]) -> Value {
    let prices: Vec<&str> = variants
        .iter()
        .filter_map(|variant| variant["price"]["amount"].as_str())
        .collect();
    let min = prices.iter().min_by(|a, b| compare_amounts(a, b)).copied().unwrap_or("0.00");
    let max = prices.iter().max_by(|a, b| compare_amounts(a, b)).copied().unwrap_or("0.00");

    json!({
        "adjacentVariants": [],
        "availableForSale": !variants.is_empty(),
        "collections": { "totalCount": "0" },
        "compareAtPriceRange": {
            "maxVariantPrice": money(max, "USD"),
            "minVariantPrice": money(min, "USD")
        },
        "createdAt": TIMESTAMP,
        "description": format!("{title} from the fixture store."),
        "descriptionHtml": format!("<p>{title} from the fixture store.</p>"),
        "handle": handle,
        "id": format!("gid://shopify/Product/{id}"),
        "images": {},
        "isGiftCard": false,
        "media": {},
        "metafields": [],
        "options": [],
        "priceRange": {
            "maxVariantPrice": money(max, "USD"),
            "minVariantPrice": money(min, "USD")
        },
        "productType": "Snacks",
        "publishedAt": TIMESTAMP,
        "requiresSellingPlan": false,
        "sellingPlanGroups": {},
        "seo": {},
        "tags": tags,
        "title": title,
        "updatedAt": TIMESTAMP,
        "variants": { "nodes": variants },
        "vendor": "Naked Pineapple"
    })
}

fn compare_amounts(a: &str, b: &str) -> std::cmp::Ordering {
    let parse = |s: &str| s.parse::<rust_decimal::Decimal>().unwrap_or_default();
    parse(a).cmp(&parse(b))
}

/// The catalogue the fixture store serves, in id order.
///
/// # Errors
///
/// Returns an error if a fixture does not decode as a `Product`.
pub fn catalogue() -> serde_json::Result<Vec<Product>> {
    [
        product_json(
            1,
            "dried-pineapple",
            "Dried Pineapple",
            &["snack", "tropical"],
            &[
                variant_json(11, "Small / Original", "8.00", None, &[("Size", "Small"), ("Flavor", "Original")]),
                variant_json(12, "Large / Original", "14.00", Some("16.00"), &[("Size", "Large"), ("Flavor", "Original")]),
                variant_json(13, "Large / Chili", "15.00", None, &[("Size", "Large"), ("Flavor", "Chili")]),
            ],
        ),
        product_json(
            2,
            "mango-chips",
            "Mango Chips",
            &["snack"],
            &[variant_json(21, "Default Title", "6.50", None, &[("Title", "Default Title")])],
        ),
        product_json(
            3,
            "coconut-bites",
            "Coconut Bites",
            &["tropical", "vegan"],
            &[variant_json(31, "Default Title", "7.25", None, &[("Title", "Default Title")])],
        ),
        product_json(4, "gift-box", "Gift Box", &[], &[]),
    ]
    .into_iter()
    .map(serde_json::from_value)
    .collect()
}
