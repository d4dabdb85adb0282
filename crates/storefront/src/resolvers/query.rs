//! Resolvers for the `QueryRoot` type.

use super::error::{ResolverError, ResolverResult};
use super::info::ResolveInfo;
use crate::args::{
    QueryRootArticleArgs, QueryRootArticlesArgs, QueryRootBlogArgs, QueryRootBlogByHandleArgs,
    QueryRootBlogsArgs, QueryRootCartArgs, QueryRootCartCompletionAttemptArgs,
    QueryRootCollectionArgs, QueryRootCollectionByHandleArgs, QueryRootCollectionsArgs,
    QueryRootCustomerArgs, QueryRootLocationsArgs, QueryRootMenuArgs, QueryRootMetaobjectArgs,
    QueryRootMetaobjectsArgs, QueryRootNodeArgs, QueryRootNodesArgs, QueryRootPageArgs,
    QueryRootPageByHandleArgs, QueryRootPagesArgs, QueryRootPredictiveSearchArgs,
    QueryRootProductArgs, QueryRootProductByHandleArgs, QueryRootProductRecommendationsArgs,
    QueryRootProductTagsArgs, QueryRootProductTypesArgs, QueryRootProductsArgs,
    QueryRootSearchArgs, QueryRootSitemapArgs, QueryRootUrlRedirectsArgs,
};
use crate::connection::{
    ArticleConnection, BlogConnection, CollectionConnection, LocationConnection,
    MetaobjectConnection, PageConnection, ProductConnection, SearchResultItemConnection,
    StringConnection, UrlRedirectConnection,
};
use crate::interfaces::AnyNode;
use crate::types::{
    ApiVersion, Article, Blog, Cart, Collection, Customer, Localization, Menu, Metaobject, Page,
    PaymentSettings, PredictiveSearchResult, Product, Shop, Sitemap,
};
use crate::unions::CartCompletionAttemptResult;

/// Resolvers for every `QueryRoot` field.
///
/// Each method has a default body returning
/// [`ResolverError::NotImplemented`], so an implementation overrides only
/// the fields it serves. `C` is the per-request context.
///
/// # Example
///
/// ```
/// use async_trait::async_trait;
/// use storefront_schema::resolvers::{QueryRootResolvers, ResolveInfo, ResolverResult};
/// use storefront_schema::types::ApiVersion;
///
/// struct Versions;
///
/// #[async_trait]
/// impl QueryRootResolvers<()> for Versions {
///     async fn public_api_versions(
///         &self,
///         _ctx: &(),
///         _info: &ResolveInfo,
///     ) -> ResolverResult<Vec<ApiVersion>> {
///         Ok(vec![ApiVersion {
///             display_name: "2025-01".to_owned(),
///             handle: "2025-01".to_owned(),
///             supported: true,
///         }])
///     }
/// }
/// ```
#[async_trait::async_trait]
pub trait QueryRootResolvers<C: Send + Sync>: Send + Sync {
    /// Fetch a specific Article by its ID.
    async fn article(
        &self,
        _ctx: &C,
        _args: QueryRootArticleArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<Article>> {
        Err(ResolverError::not_implemented("QueryRoot", "article"))
    }

    /// List of the shop's articles.
    async fn articles(
        &self,
        _ctx: &C,
        _args: QueryRootArticlesArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<ArticleConnection> {
        Err(ResolverError::not_implemented("QueryRoot", "articles"))
    }

    /// Fetch a specific `Blog` by one of its unique attributes.
    async fn blog(
        &self,
        _ctx: &C,
        _args: QueryRootBlogArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<Blog>> {
        Err(ResolverError::not_implemented("QueryRoot", "blog"))
    }

    /// Find a blog by its handle.
    async fn blog_by_handle(
        &self,
        _ctx: &C,
        _args: QueryRootBlogByHandleArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<Blog>> {
        Err(ResolverError::not_implemented("QueryRoot", "blogByHandle"))
    }

    /// List of the shop's blogs.
    async fn blogs(
        &self,
        _ctx: &C,
        _args: QueryRootBlogsArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<BlogConnection> {
        Err(ResolverError::not_implemented("QueryRoot", "blogs"))
    }

    /// Retrieve a cart by its ID. For more information, refer to
    /// [Manage a cart with the Storefront API](https://shopify.dev/custom-storefronts/cart/manage).
    async fn cart(
        &self,
        _ctx: &C,
        _args: QueryRootCartArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<Cart>> {
        Err(ResolverError::not_implemented("QueryRoot", "cart"))
    }

    /// A poll for the status of the cart checkout completion and order creation.
    async fn cart_completion_attempt(
        &self,
        _ctx: &C,
        _args: QueryRootCartCompletionAttemptArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<CartCompletionAttemptResult>> {
        Err(ResolverError::not_implemented("QueryRoot", "cartCompletionAttempt"))
    }

    /// Fetch a specific `Collection` by one of its unique attributes.
    async fn collection(
        &self,
        _ctx: &C,
        _args: QueryRootCollectionArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<Collection>> {
        Err(ResolverError::not_implemented("QueryRoot", "collection"))
    }

    /// Find a collection by its handle.
    async fn collection_by_handle(
        &self,
        _ctx: &C,
        _args: QueryRootCollectionByHandleArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<Collection>> {
        Err(ResolverError::not_implemented("QueryRoot", "collectionByHandle"))
    }

    /// List of the shop’s collections.
    async fn collections(
        &self,
        _ctx: &C,
        _args: QueryRootCollectionsArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<CollectionConnection> {
        Err(ResolverError::not_implemented("QueryRoot", "collections"))
    }

    /// The customer associated with the given access token. Tokens are obtained by using the
    /// [`customerAccessTokenCreate` mutation](https://shopify.dev/docs/api/storefront/latest/mutations/customerAccessTokenCreate).
    async fn customer(
        &self,
        _ctx: &C,
        _args: QueryRootCustomerArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<Customer>> {
        Err(ResolverError::not_implemented("QueryRoot", "customer"))
    }

    /// Returns the localized experiences configured for the shop.
    async fn localization(
        &self,
        _ctx: &C,
        _info: &ResolveInfo,
    ) -> ResolverResult<Localization> {
        Err(ResolverError::not_implemented("QueryRoot", "localization"))
    }

    /// List of the shop's locations that support in-store pickup.
    ///
    /// When sorting by distance, you must specify a location via the `near` argument.
    async fn locations(
        &self,
        _ctx: &C,
        _args: QueryRootLocationsArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<LocationConnection> {
        Err(ResolverError::not_implemented("QueryRoot", "locations"))
    }

    /// Retrieve a [navigation menu](https://help.shopify.com/manual/online-store/menus-and-links) by its handle.
    async fn menu(
        &self,
        _ctx: &C,
        _args: QueryRootMenuArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<Menu>> {
        Err(ResolverError::not_implemented("QueryRoot", "menu"))
    }

    /// Fetch a specific Metaobject by one of its unique identifiers.
    async fn metaobject(
        &self,
        _ctx: &C,
        _args: QueryRootMetaobjectArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<Metaobject>> {
        Err(ResolverError::not_implemented("QueryRoot", "metaobject"))
    }

    /// All active metaobjects for the shop.
    async fn metaobjects(
        &self,
        _ctx: &C,
        _args: QueryRootMetaobjectsArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<MetaobjectConnection> {
        Err(ResolverError::not_implemented("QueryRoot", "metaobjects"))
    }

    /// Returns a specific node by ID.
    async fn node(
        &self,
        _ctx: &C,
        _args: QueryRootNodeArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<AnyNode>> {
        Err(ResolverError::not_implemented("QueryRoot", "node"))
    }

    /// Returns the list of nodes with the given IDs.
    async fn nodes(
        &self,
        _ctx: &C,
        _args: QueryRootNodesArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Vec<Option<AnyNode>>> {
        Err(ResolverError::not_implemented("QueryRoot", "nodes"))
    }

    /// Fetch a specific `Page` by one of its unique attributes.
    async fn page(
        &self,
        _ctx: &C,
        _args: QueryRootPageArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<Page>> {
        Err(ResolverError::not_implemented("QueryRoot", "page"))
    }

    /// Find a page by its handle.
    async fn page_by_handle(
        &self,
        _ctx: &C,
        _args: QueryRootPageByHandleArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<Page>> {
        Err(ResolverError::not_implemented("QueryRoot", "pageByHandle"))
    }

    /// List of the shop's pages.
    async fn pages(
        &self,
        _ctx: &C,
        _args: QueryRootPagesArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<PageConnection> {
        Err(ResolverError::not_implemented("QueryRoot", "pages"))
    }

    /// Settings related to payments.
    async fn payment_settings(
        &self,
        _ctx: &C,
        _info: &ResolveInfo,
    ) -> ResolverResult<PaymentSettings> {
        Err(ResolverError::not_implemented("QueryRoot", "paymentSettings"))
    }

    /// List of the predictive search results.
    async fn predictive_search(
        &self,
        _ctx: &C,
        _args: QueryRootPredictiveSearchArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<PredictiveSearchResult>> {
        Err(ResolverError::not_implemented("QueryRoot", "predictiveSearch"))
    }

    /// Fetch a specific `Product` by one of its unique attributes.
    async fn product(
        &self,
        _ctx: &C,
        _args: QueryRootProductArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<Product>> {
        Err(ResolverError::not_implemented("QueryRoot", "product"))
    }

    /// Find a product by its handle.
    async fn product_by_handle(
        &self,
        _ctx: &C,
        _args: QueryRootProductByHandleArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<Product>> {
        Err(ResolverError::not_implemented("QueryRoot", "productByHandle"))
    }

    /// Find recommended products related to a given `product_id`.
    /// To learn more about how recommendations are generated, see
    /// [*Showing product recommendations on product pages*](https://help.shopify.com/themes/development/recommended-products).
    async fn product_recommendations(
        &self,
        _ctx: &C,
        _args: QueryRootProductRecommendationsArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<Vec<Product>>> {
        Err(ResolverError::not_implemented("QueryRoot", "productRecommendations"))
    }

    /// Tags added to products.
    /// Additional access scope required: unauthenticated_read_product_tags.
    async fn product_tags(
        &self,
        _ctx: &C,
        _args: QueryRootProductTagsArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<StringConnection> {
        Err(ResolverError::not_implemented("QueryRoot", "productTags"))
    }

    /// List of product types for the shop's products that are published to your app.
    async fn product_types(
        &self,
        _ctx: &C,
        _args: QueryRootProductTypesArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<StringConnection> {
        Err(ResolverError::not_implemented("QueryRoot", "productTypes"))
    }

    /// Returns a list of the shop's products. For storefront search, use the [`search` query](https://shopify.dev/docs/api/storefront/latest/queries/search).
    async fn products(
        &self,
        _ctx: &C,
        _args: QueryRootProductsArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<ProductConnection> {
        Err(ResolverError::not_implemented("QueryRoot", "products"))
    }

    /// The list of public Storefront API versions, including supported, release candidate and unstable versions.
    async fn public_api_versions(
        &self,
        _ctx: &C,
        _info: &ResolveInfo,
    ) -> ResolverResult<Vec<ApiVersion>> {
        Err(ResolverError::not_implemented("QueryRoot", "publicApiVersions"))
    }

    /// List of the search results.
    async fn search(
        &self,
        _ctx: &C,
        _args: QueryRootSearchArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<SearchResultItemConnection> {
        Err(ResolverError::not_implemented("QueryRoot", "search"))
    }

    /// The shop associated with the storefront access token.
    async fn shop(
        &self,
        _ctx: &C,
        _info: &ResolveInfo,
    ) -> ResolverResult<Shop> {
        Err(ResolverError::not_implemented("QueryRoot", "shop"))
    }

    /// Contains all fields required to generate sitemaps.
    async fn sitemap(
        &self,
        _ctx: &C,
        _args: QueryRootSitemapArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Sitemap> {
        Err(ResolverError::not_implemented("QueryRoot", "sitemap"))
    }

    /// A list of redirects for a shop.
    async fn url_redirects(
        &self,
        _ctx: &C,
        _args: QueryRootUrlRedirectsArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<UrlRedirectConnection> {
        Err(ResolverError::not_implemented("QueryRoot", "urlRedirects"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    struct Empty;

    impl QueryRootResolvers<()> for Empty {}

    #[tokio::test]
    async fn test_defaults_not_implemented() {
        let info = ResolveInfo::root("QueryRoot", "shop");
        let err = Empty.shop(&(), &info).await.unwrap_err();
        assert!(matches!(
            err,
            ResolverError::NotImplemented {
                parent_type: "QueryRoot",
                field: "shop"
            }
        ));

        let args = QueryRootProductByHandleArgs {
            handle: "tee".to_owned(),
        };
        let err = Empty.product_by_handle(&(), args, &info).await.unwrap_err();
        assert_eq!(err.to_string(), "QueryRoot.productByHandle is not implemented");
    }
}
