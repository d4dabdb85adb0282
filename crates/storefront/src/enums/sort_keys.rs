//! Sort keys accepted by connection fields.
//!
//! Each enum's `Default` is the sort key the schema applies when the
//! argument is omitted.

use serde::{Deserialize, Serialize};

use super::impl_schema_enum;

/// The set of valid sort keys for the Article query.
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
pub enum ArticleSortKeys {
    /// Sort by the `author` value.
    Author,
    /// Sort by the `blog_title` value.
    BlogTitle,
    /// Sort by the `id` value.
    #[default]
    Id,
    /// Sort by the `published_at` value.
    PublishedAt,
    /// Sort by relevance to the search terms when the `query` parameter is specified on the connection.
    /// Don't use this sort key when no search query is specified.
    Relevance,
    /// Sort by the `title` value.
    Title,
    /// Sort by the `updated_at` value.
    UpdatedAt,
}

/// The set of valid sort keys for the Blog query.
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
pub enum BlogSortKeys {
    /// Sort by the `handle` value.
    Handle,
    /// Sort by the `id` value.
    #[default]
    Id,
    /// Sort by relevance to the search terms when the `query` parameter is specified on the connection.
    /// Don't use this sort key when no search query is specified.
    Relevance,
    /// Sort by the `title` value.
    Title,
}

/// The set of valid sort keys for the Collection query.
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
pub enum CollectionSortKeys {
    /// Sort by the `id` value.
    #[default]
    Id,
    /// Sort by relevance to the search terms when the `query` parameter is specified on the connection.
    /// Don't use this sort key when no search query is specified.
    Relevance,
    /// Sort by the `title` value.
    Title,
    /// Sort by the `updated_at` value.
    UpdatedAt,
}

/// The set of valid sort keys for the Location query.
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
pub enum LocationSortKeys {
    /// Sort by the `city` value.
    City,
    /// Sort by the `distance` value.
    Distance,
    /// Sort by the `id` value.
    #[default]
    Id,
    /// Sort by the `name` value.
    Name,
}

/// The set of valid sort keys for the Order query.
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
pub enum OrderSortKeys {
    /// Sort by the `id` value.
    #[default]
    Id,
    /// Sort by the `processed_at` value.
    ProcessedAt,
    /// Sort by relevance to the search terms when the `query` parameter is specified on the connection.
    /// Don't use this sort key when no search query is specified.
    Relevance,
    /// Sort by the `total_price` value.
    TotalPrice,
}

/// The set of valid sort keys for the Page query.
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
pub enum PageSortKeys {
    /// Sort by the `id` value.
    #[default]
    Id,
    /// Sort by relevance to the search terms when the `query` parameter is specified on the connection.
    /// Don't use this sort key when no search query is specified.
    Relevance,
    /// Sort by the `title` value.
    Title,
    /// Sort by the `updated_at` value.
    UpdatedAt,
}

/// The set of valid sort keys for the ProductCollection query.
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
pub enum ProductCollectionSortKeys {
    /// Sort by the `best-selling` value.
    BestSelling,
    /// Sort by the `collection-default` value.
    #[default]
    CollectionDefault,
    /// Sort by the `created` value.
    Created,
    /// Sort by the `id` value.
    Id,
    /// Sort by the `manual` value.
    Manual,
    /// Sort by the `price` value.
    Price,
    /// Sort by relevance to the search terms when the `query` parameter is specified on the connection.
    /// Don't use this sort key when no search query is specified.
    Relevance,
    /// Sort by the `title` value.
    Title,
}

/// The set of valid sort keys for the ProductImage query.
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
pub enum ProductImageSortKeys {
    /// Sort by the `created_at` value.
    CreatedAt,
    /// Sort by the `id` value.
    Id,
    /// Sort by the `position` value.
    #[default]
    Position,
    /// Sort by relevance to the search terms when the `query` parameter is specified on the connection.
    /// Don't use this sort key when no search query is specified.
    Relevance,
}

/// The set of valid sort keys for the ProductMedia query.
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
pub enum ProductMediaSortKeys {
    /// Sort by the `id` value.
    Id,
    /// Sort by the `position` value.
    #[default]
    Position,
    /// Sort by relevance to the search terms when the `query` parameter is specified on the connection.
    /// Don't use this sort key when no search query is specified.
    Relevance,
}

/// The set of valid sort keys for the Product query.
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
pub enum ProductSortKeys {
    /// Sort by the `best_selling` value.
    BestSelling,
    /// Sort by the `created_at` value.
    CreatedAt,
    /// Sort by the `id` value.
    #[default]
    Id,
    /// Sort by the `price` value.
    Price,
    /// Sort by the `product_type` value.
    ProductType,
    /// Sort by relevance to the search terms when the `query` parameter is specified on the connection.
    /// Don't use this sort key when no search query is specified.
    Relevance,
    /// Sort by the `title` value.
    Title,
    /// Sort by the `updated_at` value.
    UpdatedAt,
    /// Sort by the `vendor` value.
    Vendor,
}

/// The set of valid sort keys for the ProductVariant query.
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
pub enum ProductVariantSortKeys {
    /// Sort by the `id` value.
    Id,
    /// Sort by the `position` value.
    #[default]
    Position,
    /// Sort by relevance to the search terms when the `query` parameter is specified on the connection.
    /// Don't use this sort key when no search query is specified.
    Relevance,
    /// Sort by the `sku` value.
    Sku,
    /// Sort by the `title` value.
    Title,
}

/// The set of valid sort keys for the search query.
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
pub enum SearchSortKeys {
    /// Sort by the `price` value.
    Price,
    /// Sort by relevance to the search terms.
    #[default]
    Relevance,
}

impl_schema_enum!(
    ArticleSortKeys,
    BlogSortKeys,
    CollectionSortKeys,
    LocationSortKeys,
    OrderSortKeys,
    PageSortKeys,
    ProductCollectionSortKeys,
    ProductImageSortKeys,
    ProductMediaSortKeys,
    ProductSortKeys,
    ProductVariantSortKeys,
    SearchSortKeys,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_defaults() {
        assert_eq!(ProductSortKeys::default(), ProductSortKeys::Id);
        assert_eq!(
            ProductCollectionSortKeys::default(),
            ProductCollectionSortKeys::CollectionDefault
        );
        assert_eq!(ProductVariantSortKeys::default(), ProductVariantSortKeys::Position);
        assert_eq!(SearchSortKeys::default(), SearchSortKeys::Relevance);
        assert_eq!(OrderSortKeys::default(), OrderSortKeys::Id);
    }
}
