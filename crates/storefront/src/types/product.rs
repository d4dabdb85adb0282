//! Products, variants and their options.

use serde::{Deserialize, Serialize};
use storefront_schema_core::{Color, DateTime, Html, Id, Url};

use super::{
    Count, Image, Metafield, MoneyV2, QuantityRule, SelectedOption, Seo,
    ShopPayInstallmentsProductVariantPricing, UnitPriceMeasurement,
};
use crate::connection::{
    CollectionConnection, ImageConnection, MediaConnection, Paginated,
    ProductVariantComponentConnection, ProductVariantConnection, QuantityPriceBreakConnection,
    SellingPlanAllocationConnection, SellingPlanGroupConnection, StoreAvailabilityConnection,
};
use crate::enums::WeightUnit;
use crate::interfaces::AnyMedia;

// =============================================================================
// Product
// =============================================================================

/// The `Product` object lets you manage products in a merchant’s store.
///
/// Products are the goods and services that merchants offer to customers.
/// They can include various details such as title, description, price,
/// images, and options such as size or color. You can use product variants
/// to create or update different versions of the same product. You can also
/// add or update product media. Products can be organized by grouping them
/// into collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// A list of variants whose selected options differ with the provided selected options by one, ordered by variant id.
    /// If selected options are not provided, adjacent variants to the first available variant is returned.
    pub adjacent_variants: Vec<ProductVariant>,
    /// Indicates if at least one product variant is available for sale.
    pub available_for_sale: bool,
    /// The category of a product from [Shopify's Standard Product Taxonomy](https://shopify.github.io/product-taxonomy/releases/unstable/?categoryId=sg-4-17-2-17).
    pub category: Option<TaxonomyCategory>,
    /// A list of [collections](/docs/api/storefront/latest/objects/Collection) that include the product.
    pub collections: CollectionConnection,
    /// The [compare-at price range](https://help.shopify.com/manual/products/details/product-pricing/sale-pricing) of the product in the shop's default currency.
    pub compare_at_price_range: ProductPriceRange,
    /// The date and time when the product was created.
    pub created_at: DateTime,
    /// A single-line description of the product, with [HTML tags](https://developer.mozilla.org/en-US/docs/Web/HTML) removed.
    pub description: String,
    /// The description of the product, with
    /// HTML tags. For example, the description might include
    /// bold `<strong></strong>` and italic `<i></i>` text.
    pub description_html: Html,
    /// An encoded string containing all option value combinations
    /// with a corresponding variant that is currently available for sale.
    pub encoded_variant_availability: Option<String>,
    /// An encoded string containing all option value combinations with a corresponding variant.
    pub encoded_variant_existence: Option<String>,
    /// The featured image for the product.
    ///
    /// This field is functionally equivalent to `images(first: 1)`.
    pub featured_image: Option<Image>,
    /// A unique, human-readable string of the product's title.
    /// A handle can contain letters, hyphens (`-`), and numbers, but no spaces.
    /// The handle is used in the online store URL for the product.
    pub handle: String,
    /// A globally-unique ID.
    pub id: Id,
    /// List of images associated with the product.
    pub images: ImageConnection,
    /// Whether the product is a gift card.
    pub is_gift_card: bool,
    /// The [media](/docs/apps/build/online-store/product-media) that are associated with the product. Valid media are images, 3D models, videos.
    pub media: MediaConnection,
    /// A [custom field](https://shopify.dev/docs/apps/build/custom-data), including its `namespace` and `key`, that's associated with a Shopify resource for the purposes of adding and storing additional information.
    pub metafield: Option<Metafield>,
    /// A list of [custom fields](/docs/apps/build/custom-data) that a merchant associates with a Shopify resource.
    pub metafields: Vec<Option<Metafield>>,
    /// The product's URL on the online store.
    /// If `null`, then the product isn't published to the online store sales channel.
    pub online_store_url: Option<Url>,
    /// A list of product options. The limit is defined by the [shop's resource limits for product options](/docs/api/admin-graphql/latest/objects/Shop#field-resourcelimits) (`Shop.resourceLimits.maxProductOptions`).
    pub options: Vec<ProductOption>,
    /// The minimum and maximum prices of a product, expressed in decimal numbers.
    /// For example, if the product is priced between $10.00 and $50.00,
    /// then the price range is $10.00 - $50.00.
    pub price_range: ProductPriceRange,
    /// The [product type](https://help.shopify.com/manual/products/details/product-type)
    /// that merchants define.
    pub product_type: String,
    /// The date and time when the product was published to the channel.
    pub published_at: DateTime,
    /// Whether the product can only be purchased with a [selling plan](/docs/apps/build/purchase-options/subscriptions/selling-plans). Products that are sold on subscription (`requiresSellingPlan: true`) can be updated only for online stores. If you update a product to be subscription-only (`requiresSellingPlan:false`), then the product is unpublished from all channels, except the online store.
    pub requires_selling_plan: bool,
    /// Find an active product variant based on selected options, availability or the first variant.
    ///
    /// All arguments are optional. If no selected options are provided, the first available variant is returned.
    /// If no variants are available, the first variant is returned.
    pub selected_or_first_available_variant: Option<Box<ProductVariant>>,
    /// A list of all [selling plan groups](/docs/apps/build/purchase-options/subscriptions/selling-plans/build-a-selling-plan) that are associated with the product either directly, or through the product's variants.
    pub selling_plan_groups: SellingPlanGroupConnection,
    /// The [SEO title and description](https://help.shopify.com/manual/promoting-marketing/seo/adding-keywords)
    /// that are associated with a product.
    pub seo: Seo,
    /// A comma-separated list of searchable keywords that are
    /// associated with the product. For example, a merchant might apply the `sports`
    /// and `summer` tags to products that are associated with sportwear for summer.
    pub tags: Vec<String>,
    /// The name for the product that displays to customers. The title is used to construct the product's handle.
    /// For example, if a product is titled "Black Sunglasses", then the handle is `black-sunglasses`.
    pub title: String,
    /// The quantity of inventory that's in stock.
    pub total_inventory: Option<i32>,
    /// URL parameters to be added to a page URL to track the origin of on-site search traffic for [analytics reporting](https://help.shopify.com/manual/reports-and-analytics/shopify-reports/report-types/default-reports/behaviour-reports). Returns a result when accessed through the [search](https://shopify.dev/docs/api/storefront/current/queries/search) or [predictiveSearch](https://shopify.dev/docs/api/storefront/current/queries/predictiveSearch) queries, otherwise returns null.
    pub tracking_parameters: Option<String>,
    /// The date and time when the product was last modified.
    /// A product's `updatedAt` value can change for different reasons. For example, if an order
    /// is placed for a product that has inventory tracking set up, then the inventory adjustment
    /// is counted as an update.
    pub updated_at: DateTime,
    /// Find a product’s variant based on its selected options.
    /// This is useful for converting a user’s selection of product options into a single matching variant.
    /// If there is not a variant for the selected options, `null` will be returned.
    pub variant_by_selected_options: Option<Box<ProductVariant>>,
    /// A list of [variants](/docs/api/storefront/latest/objects/ProductVariant) that are associated with the product.
    pub variants: ProductVariantConnection,
    /// The number of [variants](/docs/api/storefront/latest/objects/ProductVariant) that are associated with the product.
    pub variants_count: Option<Count>,
    /// The name of the product's vendor.
    pub vendor: String,
}

/// The price range of the product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPriceRange {
    /// The highest variant's price.
    pub max_variant_price: MoneyV2,
    /// The lowest variant's price.
    pub min_variant_price: MoneyV2,
}

/// Product property names like "Size", "Color", and "Material" that the customers can select.
/// Variants are selected based on permutations of these options.
/// 255 characters limit each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductOption {
    /// A globally-unique ID.
    pub id: Id,
    /// The product option’s name.
    pub name: String,
    /// The corresponding option value to the product option.
    pub option_values: Vec<ProductOptionValue>,
    /// The corresponding value to the product option name.
    ///
    /// Deprecated: use `optionValues` instead.
    pub values: Vec<String>,
}

/// The product option value names. For example, "Red", "Blue", and "Green" for a "Color" option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductOptionValue {
    /// The product variant that combines this option value with the
    /// lowest-position option values for all other options.
    ///
    /// This field will always return a variant, provided a variant including this option value exists.
    pub first_selectable_variant: Option<Box<ProductVariant>>,
    /// A globally-unique ID.
    pub id: Id,
    /// The name of the product option value.
    pub name: String,
    /// The swatch of the product option value.
    pub swatch: Option<ProductOptionValueSwatch>,
}

/// The product option value swatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductOptionValueSwatch {
    /// The swatch color.
    pub color: Option<Color>,
    /// The swatch image.
    pub image: Option<AnyMedia>,
}

/// A taxonomy category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonomyCategory {
    /// All parent nodes of the current taxonomy category.
    pub ancestors: Vec<TaxonomyCategory>,
    /// A static identifier for the taxonomy category.
    pub id: Id,
    /// The localized name of the taxonomy category.
    pub name: String,
}

// =============================================================================
// Product Variant
// =============================================================================

/// A product variant represents a different version of a product, such as differing sizes or differing colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    /// Indicates if the product variant is available for sale.
    pub available_for_sale: bool,
    /// The barcode (for example, ISBN, UPC, or GTIN) associated with the variant.
    pub barcode: Option<String>,
    /// The compare at price of the variant. This can be used to mark a variant as on sale, when `compareAtPrice` is higher than `price`.
    pub compare_at_price: Option<MoneyV2>,
    /// List of bundles components included in the variant considering only fixed bundles.
    pub components: ProductVariantComponentConnection,
    /// List of bundles that include this variant considering only fixed bundles.
    pub grouped_by: ProductVariantConnection,
    /// A globally-unique ID.
    pub id: Id,
    /// Image associated with the product variant. This field falls back to the product image if no image is available.
    pub image: Option<Image>,
    /// A [custom field](https://shopify.dev/docs/apps/build/custom-data), including its `namespace` and `key`, that's associated with a Shopify resource for the purposes of adding and storing additional information.
    pub metafield: Option<Metafield>,
    /// A list of [custom fields](/docs/apps/build/custom-data) that a merchant associates with a Shopify resource.
    pub metafields: Vec<Option<Metafield>>,
    /// The product variant’s price.
    pub price: MoneyV2,
    /// The product object that the product variant belongs to.
    pub product: Box<Product>,
    /// The total sellable quantity of the variant for online sales channels.
    pub quantity_available: Option<i32>,
    /// A list of quantity breaks for the product variant.
    pub quantity_price_breaks: QuantityPriceBreakConnection,
    /// The quantity rule for the product variant in a given context.
    pub quantity_rule: QuantityRule,
    /// Whether a product variant requires components. The default value is `false`.
    /// If `true`, then the product variant can only be purchased as a parent bundle with components.
    pub requires_components: bool,
    /// Whether a customer needs to provide a shipping address when placing an order for the product variant.
    pub requires_shipping: bool,
    /// List of product options applied to the variant.
    pub selected_options: Vec<SelectedOption>,
    /// Represents an association between a variant and a selling plan. Selling plan allocations describe which selling plans are available for each variant, and what their impact is on pricing.
    pub selling_plan_allocations: SellingPlanAllocationConnection,
    /// The Shop Pay Installments pricing information for the product variant.
    pub shop_pay_installments_pricing: Option<ShopPayInstallmentsProductVariantPricing>,
    /// The SKU (stock keeping unit) associated with the variant.
    pub sku: Option<String>,
    /// The in-store pickup availability of this variant by location.
    pub store_availability: StoreAvailabilityConnection,
    /// Whether tax is charged when the product variant is sold.
    pub taxable: bool,
    /// The product variant’s title.
    pub title: String,
    /// The unit price value for the variant based on the variant's measurement.
    pub unit_price: Option<MoneyV2>,
    /// The unit price measurement for the variant.
    pub unit_price_measurement: Option<UnitPriceMeasurement>,
    /// The weight of the product variant in the unit system specified with `weight_unit`.
    pub weight: Option<f64>,
    /// Unit of measurement for weight.
    pub weight_unit: WeightUnit,
}

/// Represents a component of a bundle variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariantComponent {
    /// The product variant object that the component belongs to.
    pub product_variant: Box<ProductVariant>,
    /// The quantity of component present in the bundle.
    pub quantity: i32,
}

impl Product {
    /// The variant matching every `(name, value)` pair, compared
    /// case-insensitively, among the variants loaded on this product.
    #[must_use]
    pub fn variant_matching(&self, selected: &[(&str, &str)]) -> Option<&ProductVariant> {
        self.variants
            .node_refs()
            .into_iter()
            .find(|variant| variant.matches_options(selected))
    }

    /// Whether the product is discounted (its lowest compare-at price is
    /// above its lowest price).
    #[must_use]
    pub fn is_on_sale(&self) -> bool {
        self.compare_at_price_range.min_variant_price.amount > self.price_range.min_variant_price.amount
    }
}

impl ProductVariant {
    /// Whether the variant's selected options include every `(name, value)`
    /// pair, compared case-insensitively.
    #[must_use]
    pub fn matches_options(&self, selected: &[(&str, &str)]) -> bool {
        selected.iter().all(|(name, value)| {
            self.selected_options.iter().any(|option| {
                option.name.eq_ignore_ascii_case(name) && option.value.eq_ignore_ascii_case(value)
            })
        })
    }

    /// Whether the variant is discounted against its compare-at price.
    #[must_use]
    pub fn is_on_sale(&self) -> bool {
        self.compare_at_price
            .as_ref()
            .is_some_and(|compare_at| compare_at.amount > self.price.amount)
    }
}

impl TaxonomyCategory {
    /// The category's full path from the root, e.g.
    /// `Apparel & Accessories > Clothing > Shirts`.
    #[must_use]
    pub fn breadcrumb(&self) -> String {
        self.ancestors
            .iter()
            .rev()
            .map(|ancestor| ancestor.name.as_str())
            .chain(std::iter::once(self.name.as_str()))
            .collect::<Vec<_>>()
            .join(" > ")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_taxonomy_breadcrumb() {
        let category: TaxonomyCategory = serde_json::from_value(serde_json::json!({
            "ancestors": [
                { "ancestors": [], "id": "gid://shopify/TaxonomyCategory/aa-1", "name": "Clothing" },
                { "ancestors": [], "id": "gid://shopify/TaxonomyCategory/aa", "name": "Apparel & Accessories" }
            ],
            "id": "gid://shopify/TaxonomyCategory/aa-1-13",
            "name": "Shirts"
        }))
        .unwrap();

        assert_eq!(
            category.breadcrumb(),
            "Apparel & Accessories > Clothing > Shirts"
        );
    }

    #[test]
    fn test_option_value_swatch_color() {
        let swatch: ProductOptionValueSwatch = serde_json::from_value(serde_json::json!({
            "color": "#FFD700",
            "image": null
        }))
        .unwrap();
        assert_eq!(swatch.color.unwrap().rgb(), (255, 215, 0));
        assert!(swatch.image.is_none());
    }
}
