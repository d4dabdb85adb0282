//! Arguments of `QueryRoot` fields.

use serde::{Deserialize, Serialize};
use storefront_schema_core::Id;

use super::impl_paginated_args;
use crate::connection::PaginationArgs;
use crate::enums::{
    ArticleSortKeys, BlogSortKeys, CollectionSortKeys, LocationSortKeys, PageSortKeys,
    PredictiveSearchLimitScope, PredictiveSearchType, ProductRecommendationIntent,
    ProductSortKeys, SearchPrefixQueryType, SearchSortKeys, SearchType,
    SearchUnavailableProductsType, SearchableField, SitemapType,
};
use crate::inputs::{GeoCoordinateInput, MetaobjectHandleInput, ProductFilter};

// =============================================================================
// Query Root
// =============================================================================

/// Arguments of `QueryRoot.article`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRootArticleArgs {
    /// The ID of the `Article`.
    pub id: Id,
}

/// Arguments of `QueryRoot.articles`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRootArticlesArgs {
    /// Cursor window.
    #[serde(flatten)]
    pub pagination: PaginationArgs,
    /// Apply one or multiple filters to the query.
    /// [Refer to the detailed search syntax](https://shopify.dev/api/usage/search-syntax) for more information about using filters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Reverse the order of the underlying list.
    #[serde(default)]
    pub reverse: bool,
    /// Sort the underlying list by the given key.
    #[serde(default)]
    pub sort_key: ArticleSortKeys,
}

/// Arguments of `QueryRoot.blog`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRootBlogArgs {
    /// The handle of the `Blog`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    /// The ID of the `Blog`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
}

/// Arguments of `QueryRoot.blogByHandle`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRootBlogByHandleArgs {
    /// The handle of the blog.
    pub handle: String,
}

/// Arguments of `QueryRoot.blogs`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRootBlogsArgs {
    /// Cursor window.
    #[serde(flatten)]
    pub pagination: PaginationArgs,
    /// Apply one or multiple filters to the query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Reverse the order of the underlying list.
    #[serde(default)]
    pub reverse: bool,
    /// Sort the underlying list by the given key.
    #[serde(default)]
    pub sort_key: BlogSortKeys,
}

/// Arguments of `QueryRoot.cart`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRootCartArgs {
    /// The ID of the cart.
    pub id: Id,
}

/// Arguments of `QueryRoot.cartCompletionAttempt`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRootCartCompletionAttemptArgs {
    /// The ID of the attempt.
    pub attempt_id: String,
}

/// Arguments of `QueryRoot.collection`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRootCollectionArgs {
    /// The handle of the `Collection`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    /// The ID of the `Collection`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
}

/// Arguments of `QueryRoot.collectionByHandle`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRootCollectionByHandleArgs {
    /// The handle of the collection.
    pub handle: String,
}

/// Arguments of `QueryRoot.collections`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRootCollectionsArgs {
    /// Cursor window.
    #[serde(flatten)]
    pub pagination: PaginationArgs,
    /// Apply one or multiple filters to the query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Reverse the order of the underlying list.
    #[serde(default)]
    pub reverse: bool,
    /// Sort the underlying list by the given key.
    #[serde(default)]
    pub sort_key: CollectionSortKeys,
}

/// Arguments of `QueryRoot.customer`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRootCustomerArgs {
    /// The customer access token.
    pub customer_access_token: String,
}

/// Arguments of `QueryRoot.locations`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRootLocationsArgs {
    /// Cursor window.
    #[serde(flatten)]
    pub pagination: PaginationArgs,
    /// Used to sort results based on proximity to the provided location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub near: Option<GeoCoordinateInput>,
    /// Reverse the order of the underlying list.
    #[serde(default)]
    pub reverse: bool,
    /// Sort the underlying list by the given key.
    #[serde(default)]
    pub sort_key: LocationSortKeys,
}

/// Arguments of `QueryRoot.menu`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRootMenuArgs {
    /// Returns a specific menu by handle.
    pub handle: String,
}

/// Arguments of `QueryRoot.metaobject`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRootMetaobjectArgs {
    /// The handle and type of the metaobject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<MetaobjectHandleInput>,
    /// The ID of the metaobject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
}

/// Arguments of `QueryRoot.metaobjects`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRootMetaobjectsArgs {
    /// Cursor window.
    #[serde(flatten)]
    pub pagination: PaginationArgs,
    /// Reverse the order of the underlying list.
    #[serde(default)]
    pub reverse: bool,
    /// The key of a field to sort with. Supports "id", "type", "updated_at", and "display_name".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_key: Option<String>,
    /// The type of metaobject to retrieve.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Arguments of `QueryRoot.node`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRootNodeArgs {
    /// The ID of the Node to return.
    pub id: Id,
}

/// Arguments of `QueryRoot.nodes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRootNodesArgs {
    /// The IDs of the Nodes to return.
    ///
    /// The input must not contain more than `250` values.
    pub ids: Vec<Id>,
}

/// Arguments of `QueryRoot.page`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRootPageArgs {
    /// The handle of the `Page`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    /// The ID of the `Page`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
}

/// Arguments of `QueryRoot.pageByHandle`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRootPageByHandleArgs {
    /// The handle of the page.
    pub handle: String,
}

/// Arguments of `QueryRoot.pages`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRootPagesArgs {
    /// Cursor window.
    #[serde(flatten)]
    pub pagination: PaginationArgs,
    /// Apply one or multiple filters to the query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Reverse the order of the underlying list.
    #[serde(default)]
    pub reverse: bool,
    /// Sort the underlying list by the given key.
    #[serde(default)]
    pub sort_key: PageSortKeys,
}

/// Arguments of `QueryRoot.predictiveSearch`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRootPredictiveSearchArgs {
    /// Limits the number of results based on `limit_scope`. The value can range from 1 to 10, and the default is 10.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    /// Decides the distribution of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_scope: Option<PredictiveSearchLimitScope>,
    /// The search query.
    pub query: String,
    /// Specifies the list of resource fields to use for search. The default fields searched on are TITLE, PRODUCT_TYPE, VARIANT_TITLE, and VENDOR.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub searchable_fields: Option<Vec<SearchableField>>,
    /// The types of resources to search for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<PredictiveSearchType>>,
    /// Specifies how unavailable products are displayed in the search results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unavailable_products: Option<SearchUnavailableProductsType>,
}

/// Arguments of `QueryRoot.product`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRootProductArgs {
    /// The handle of the `Product`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    /// The ID of the `Product`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
}

/// Arguments of `QueryRoot.productByHandle`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRootProductByHandleArgs {
    /// A unique, human-readable string of the product's title.
    /// A handle can contain letters, hyphens (`-`), and numbers, but no spaces.
    pub handle: String,
}

/// Arguments of `QueryRoot.productRecommendations`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRootProductRecommendationsArgs {
    /// The recommendation intent that is used to generate product recommendations. You can use intent to generate product recommendations on various pages across the channels, according to different strategies.
    #[serde(default)]
    pub intent: ProductRecommendationIntent,
    /// The handle of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_handle: Option<String>,
    /// The id of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<Id>,
}

/// Arguments of `QueryRoot.productTags`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRootProductTagsArgs {
    /// Returns up to the first `n` elements from the list.
    pub first: i32,
}

/// Arguments of `QueryRoot.productTypes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRootProductTypesArgs {
    /// Returns up to the first `n` elements from the list.
    pub first: i32,
}

/// Arguments of `QueryRoot.products`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRootProductsArgs {
    /// Cursor window.
    #[serde(flatten)]
    pub pagination: PaginationArgs,
    /// Apply one or multiple filters to the query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Reverse the order of the underlying list.
    #[serde(default)]
    pub reverse: bool,
    /// Sort the underlying list by the given key.
    #[serde(default)]
    pub sort_key: ProductSortKeys,
}

/// Arguments of `QueryRoot.search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRootSearchArgs {
    /// Cursor window.
    #[serde(flatten)]
    pub pagination: PaginationArgs,
    /// Specifies whether to perform a partial word match on the last search term.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<SearchPrefixQueryType>,
    /// Returns a subset of products matching all product filters.
    ///
    /// The input must not contain more than `250` values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_filters: Option<Vec<ProductFilter>>,
    /// The search query.
    pub query: String,
    /// Reverse the order of the underlying list.
    #[serde(default)]
    pub reverse: bool,
    /// Sort the underlying list by the given key.
    #[serde(default)]
    pub sort_key: SearchSortKeys,
    /// The types of resources to search for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<SearchType>>,
    /// Specifies how unavailable products or variants are displayed in the search results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unavailable_products: Option<SearchUnavailableProductsType>,
}

/// Arguments of `QueryRoot.sitemap`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRootSitemapArgs {
    /// The type of the resource for the sitemap.
    #[serde(rename = "type")]
    pub kind: SitemapType,
}

/// Arguments of `QueryRoot.urlRedirects`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRootUrlRedirectsArgs {
    /// Cursor window.
    #[serde(flatten)]
    pub pagination: PaginationArgs,
    /// Apply one or multiple filters to the query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Reverse the order of the underlying list.
    #[serde(default)]
    pub reverse: bool,
}

impl_paginated_args!(
    QueryRootArticlesArgs,
    QueryRootBlogsArgs,
    QueryRootCollectionsArgs,
    QueryRootLocationsArgs,
    QueryRootMetaobjectsArgs,
    QueryRootPagesArgs,
    QueryRootProductsArgs,
    QueryRootSearchArgs,
    QueryRootUrlRedirectsArgs,
);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_applied_when_absent() {
        let args: QueryRootProductsArgs =
            serde_json::from_value(serde_json::json!({ "first": 10 })).unwrap();
        assert_eq!(args.pagination.first, Some(10));
        assert!(!args.reverse);
        assert_eq!(args.sort_key, ProductSortKeys::Id);

        let args: QueryRootSearchArgs =
            serde_json::from_value(serde_json::json!({ "query": "shirt", "last": 5 })).unwrap();
        assert_eq!(args.sort_key, SearchSortKeys::Relevance);
        assert_eq!(args.pagination.last, Some(5));

        let args: QueryRootProductRecommendationsArgs =
            serde_json::from_value(serde_json::json!({ "productHandle": "tee" })).unwrap();
        assert_eq!(args.intent, ProductRecommendationIntent::Related);
    }

    #[test]
    fn test_pagination_flattened() {
        let args = QueryRootArticlesArgs {
            pagination: PaginationArgs::forward(20, Some("abc".to_owned())),
            sort_key: ArticleSortKeys::PublishedAt,
            ..QueryRootArticlesArgs::default()
        };
        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            serde_json::json!({
                "after": "abc",
                "first": 20,
                "reverse": false,
                "sortKey": "PUBLISHED_AT"
            })
        );
    }

    #[test]
    fn test_missing_required_argument() {
        assert!(serde_json::from_value::<QueryRootCartArgs>(serde_json::json!({})).is_err());
        let sitemap: QueryRootSitemapArgs =
            serde_json::from_value(serde_json::json!({ "type": "PRODUCT" })).unwrap();
        assert_eq!(sitemap.kind, SitemapType::Product);
    }
}
