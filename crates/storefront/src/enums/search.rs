//! Search, predictive search and filter enums.

use serde::{Deserialize, Serialize};

use super::impl_schema_enum;

/// Defines how to present the filter values, specifies the presentation of the filter.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum FilterPresentation {
    /// Image presentation, filter values display an image.
    Image,
    /// Swatch presentation, filter values display color or image patterns.
    Swatch,
    /// Text presentation, no additional visual display for filter values.
    Text,
}

/// The type of data that the filter group represents.
///
/// For more information, refer to
/// [Filter products in a collection with the Storefront API](https://shopify.dev/custom-storefronts/products-collections/filter-products).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum FilterType {
    /// A boolean value.
    Boolean,
    /// A list of selectable values.
    List,
    /// A range of prices.
    PriceRange,
}

/// Decides the distribution of results.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PredictiveSearchLimitScope {
    /// Return results up to limit across all types.
    All,
    /// Return results up to limit per type.
    Each,
}

/// The types of search items to perform predictive search on.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PredictiveSearchType {
    /// Returns matching articles.
    Article,
    /// Returns matching collections.
    Collection,
    /// Returns matching pages.
    Page,
    /// Returns matching products.
    Product,
    /// Returns matching query strings.
    Query,
}

/// The recommendation intent that is used to generate product recommendations.
/// You can use intent to generate product recommendations according to different strategies.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductRecommendationIntent {
    /// Offer customers products that are complementary to a product for which recommendations are to be fetched. An example is add-on products that display in a Pair it with section.
    Complementary,
    /// Offer customers a mix of products that are similar or complementary to a product for which recommendations are to be fetched. An example is substitutable products that display in a You may also like section.
    #[default]
    Related,
}

/// Specifies whether to perform a partial word match on the last search term.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchPrefixQueryType {
    /// Perform a partial word match on the last search term.
    Last,
    /// Don't perform a partial word match on the last search term.
    None,
}

/// The types of search items to perform search within.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchType {
    /// Returns matching articles.
    Article,
    /// Returns matching pages.
    Page,
    /// Returns matching products.
    Product,
}

/// Specifies whether to display results for unavailable products.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchUnavailableProductsType {
    /// Exclude unavailable products.
    Hide,
    /// Show unavailable products after all other matching results. This is the default.
    Last,
    /// Show unavailable products in the order that they're found.
    Show,
}

/// Specifies the list of resource fields to search.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchableField {
    /// Author of the page or article.
    Author,
    /// Body of the page or article or product description or collection description.
    Body,
    /// Product type.
    ProductType,
    /// Tag associated with the product or article.
    Tag,
    /// Title of the page or article or product title or collection title.
    Title,
    /// Variant barcode.
    VariantsBarcode,
    /// Variant SKU.
    VariantsSku,
    /// Variant title.
    VariantsTitle,
    /// Product vendor.
    Vendor,
}

impl_schema_enum!(
    FilterPresentation,
    FilterType,
    PredictiveSearchLimitScope,
    PredictiveSearchType,
    ProductRecommendationIntent,
    SearchPrefixQueryType,
    SearchType,
    SearchUnavailableProductsType,
    SearchableField,
);
