//! Arguments of fields on object types.
//!
//! `metafield` and `metafields` take the same arguments on every
//! `HasMetafields` implementer; the per-type names are aliases of
//! [`HasMetafieldsMetafieldArgs`] and [`HasMetafieldsMetafieldsArgs`].

use serde::{Deserialize, Serialize};

use super::impl_paginated_args;
use crate::connection::PaginationArgs;
use crate::enums::{
    ArticleSortKeys, OrderSortKeys, ProductCollectionSortKeys, ProductImageSortKeys,
    ProductMediaSortKeys, ProductVariantSortKeys,
};
use crate::inputs::{
    GeoCoordinateInput, HasMetafieldsIdentifier, ImageTransformInput, ProductFilter,
    SelectedOptionInput,
};

// =============================================================================
// Metafields
// =============================================================================

/// Arguments of `HasMetafields.metafield`, shared by every implementer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HasMetafieldsMetafieldArgs {
    /// The identifier for the metafield.
    pub key: String,
    /// The container the metafield belongs to. If omitted, the app-reserved namespace will be used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

/// Arguments of `HasMetafields.metafields`, shared by every implementer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HasMetafieldsMetafieldsArgs {
    /// The list of metafields to retrieve by namespace and key.
    ///
    /// The input must not contain more than `250` values.
    pub identifiers: Vec<HasMetafieldsIdentifier>,
}

/// Arguments of `Metafield.references`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetafieldReferencesArgs {
    /// Cursor window.
    #[serde(flatten)]
    pub pagination: PaginationArgs,
}

/// Arguments of `Metaobject.field`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaobjectFieldArgs {
    /// The key of the field.
    pub key: String,
}

// =============================================================================
// Content
// =============================================================================

/// Arguments of `Article.comments`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleCommentsArgs {
    /// Cursor window.
    #[serde(flatten)]
    pub pagination: PaginationArgs,
    /// Reverse the order of the underlying list.
    #[serde(default)]
    pub reverse: bool,
}

/// Arguments of `Article.content`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleContentArgs {
    /// Truncates a string after the given length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncate_at: Option<i32>,
}

/// Arguments of `Article.excerpt`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleExcerptArgs {
    /// Truncates a string after the given length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncate_at: Option<i32>,
}

/// Arguments of `Blog.articleByHandle`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogArticleByHandleArgs {
    /// The handle of the article.
    pub handle: String,
}

/// Arguments of `Blog.articles`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogArticlesArgs {
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
    pub sort_key: ArticleSortKeys,
}

/// Arguments of `Sitemap.resources`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapResourcesArgs {
    /// The page number to fetch.
    pub page: i32,
}

// =============================================================================
// Cart
// =============================================================================

/// Arguments of `Cart.deliveryGroups`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartDeliveryGroupsArgs {
    /// Cursor window.
    #[serde(flatten)]
    pub pagination: PaginationArgs,
    /// Reverse the order of the underlying list.
    #[serde(default)]
    pub reverse: bool,
    /// Whether to include [carrier-calculated delivery rates](https://help.shopify.com/en/manual/shipping/setting-up-and-managing-your-shipping/enabling-shipping-carriers) in the response.
    #[serde(default)]
    pub with_carrier_rates: bool,
}

/// Arguments of `Cart.lines`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLinesArgs {
    /// Cursor window.
    #[serde(flatten)]
    pub pagination: PaginationArgs,
    /// Reverse the order of the underlying list.
    #[serde(default)]
    pub reverse: bool,
}

/// Arguments of `CartDeliveryGroup.cartLines`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartDeliveryGroupCartLinesArgs {
    /// Cursor window.
    #[serde(flatten)]
    pub pagination: PaginationArgs,
    /// Reverse the order of the underlying list.
    #[serde(default)]
    pub reverse: bool,
}

// =============================================================================
// Collections
// =============================================================================

/// Arguments of `Collection.description`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionDescriptionArgs {
    /// Truncates a string after the given length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncate_at: Option<i32>,
}

/// Arguments of `Collection.products`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionProductsArgs {
    /// Cursor window.
    #[serde(flatten)]
    pub pagination: PaginationArgs,
    /// Returns a subset of products matching all product filters.
    ///
    /// The input must not contain more than `250` values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<ProductFilter>>,
    /// Reverse the order of the underlying list.
    #[serde(default)]
    pub reverse: bool,
    /// Sort the underlying list by the given key.
    #[serde(default)]
    pub sort_key: ProductCollectionSortKeys,
}

// =============================================================================
// Customers & Orders
// =============================================================================

/// Arguments of `Customer.addresses`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerAddressesArgs {
    /// Cursor window.
    #[serde(flatten)]
    pub pagination: PaginationArgs,
    /// Reverse the order of the underlying list.
    #[serde(default)]
    pub reverse: bool,
}

/// Arguments of `Customer.orders`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerOrdersArgs {
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
    pub sort_key: OrderSortKeys,
}

/// Arguments of `Order.discountApplications`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDiscountApplicationsArgs {
    /// Cursor window.
    #[serde(flatten)]
    pub pagination: PaginationArgs,
    /// Reverse the order of the underlying list.
    #[serde(default)]
    pub reverse: bool,
}

/// Arguments of `Order.successfulFulfillments`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFulfillmentsArgs {
    /// Truncate the array result to this size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<i32>,
}

/// Arguments of `Order.lineItems`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItemsArgs {
    /// Cursor window.
    #[serde(flatten)]
    pub pagination: PaginationArgs,
    /// Reverse the order of the underlying list.
    #[serde(default)]
    pub reverse: bool,
}

/// Arguments of `Fulfillment.fulfillmentLineItems`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FulfillmentFulfillmentLineItemsArgs {
    /// Cursor window.
    #[serde(flatten)]
    pub pagination: PaginationArgs,
    /// Reverse the order of the underlying list.
    #[serde(default)]
    pub reverse: bool,
}

/// Arguments of `Fulfillment.trackingInfo`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FulfillmentTrackingInfoArgs {
    /// Truncate the array result to this size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<i32>,
}

// =============================================================================
// Media
// =============================================================================

/// Arguments of `Image.url`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageUrlArgs {
    /// A set of options to transform the original image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<ImageTransformInput>,
}

// =============================================================================
// Products
// =============================================================================

/// Arguments of `Product.adjacentVariants`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAdjacentVariantsArgs {
    /// Whether to perform case insensitive match on option names and values.
    #[serde(default)]
    pub case_insensitive_match: bool,
    /// Whether to ignore product options that are not present on the requested product.
    #[serde(default)]
    pub ignore_unknown_options: bool,
    /// The input fields used for a selected option.
    ///
    /// The input must not contain more than `250` values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_options: Option<Vec<SelectedOptionInput>>,
}

/// Arguments of `Product.collections`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCollectionsArgs {
    /// Cursor window.
    #[serde(flatten)]
    pub pagination: PaginationArgs,
    /// Reverse the order of the underlying list.
    #[serde(default)]
    pub reverse: bool,
}

/// Arguments of `Product.description`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDescriptionArgs {
    /// Truncates a string after the given length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncate_at: Option<i32>,
}

/// Arguments of `Product.images`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImagesArgs {
    /// Cursor window.
    #[serde(flatten)]
    pub pagination: PaginationArgs,
    /// Reverse the order of the underlying list.
    #[serde(default)]
    pub reverse: bool,
    /// Sort the underlying list by the given key.
    #[serde(default)]
    pub sort_key: ProductImageSortKeys,
}

/// Arguments of `Product.media`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductMediaArgs {
    /// Cursor window.
    #[serde(flatten)]
    pub pagination: PaginationArgs,
    /// Reverse the order of the underlying list.
    #[serde(default)]
    pub reverse: bool,
    /// Sort the underlying list by the given key.
    #[serde(default)]
    pub sort_key: ProductMediaSortKeys,
}

/// Arguments of `Product.options`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductOptionsArgs {
    /// Truncate the array result to this size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<i32>,
}

/// Arguments of `Product.selectedOrFirstAvailableVariant`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSelectedOrFirstAvailableVariantArgs {
    /// Whether to perform case insensitive match on option names and values.
    #[serde(default)]
    pub case_insensitive_match: bool,
    /// Whether to ignore product options that are not present on the requested product.
    #[serde(default)]
    pub ignore_unknown_options: bool,
    /// The input fields used for a selected option.
    ///
    /// The input must not contain more than `250` values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_options: Option<Vec<SelectedOptionInput>>,
}

/// Arguments of `Product.sellingPlanGroups`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSellingPlanGroupsArgs {
    /// Cursor window.
    #[serde(flatten)]
    pub pagination: PaginationArgs,
    /// Reverse the order of the underlying list.
    #[serde(default)]
    pub reverse: bool,
}

/// Arguments of `Product.variantBySelectedOptions`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariantBySelectedOptionsArgs {
    /// Whether to perform case insensitive match on option names and values.
    #[serde(default)]
    pub case_insensitive_match: bool,
    /// Whether to ignore product options that are not present on the requested product.
    #[serde(default)]
    pub ignore_unknown_options: bool,
    /// The input fields used for a selected option.
    ///
    /// The input must not contain more than `250` values.
    pub selected_options: Vec<SelectedOptionInput>,
}

/// Arguments of `Product.variants`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariantsArgs {
    /// Cursor window.
    #[serde(flatten)]
    pub pagination: PaginationArgs,
    /// Reverse the order of the underlying list.
    #[serde(default)]
    pub reverse: bool,
    /// Sort the underlying list by the given key.
    #[serde(default)]
    pub sort_key: ProductVariantSortKeys,
}

/// Arguments of `ProductVariant.components`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariantComponentsArgs {
    /// Cursor window.
    #[serde(flatten)]
    pub pagination: PaginationArgs,
}

/// Arguments of `ProductVariant.groupedBy`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariantGroupedByArgs {
    /// Cursor window.
    #[serde(flatten)]
    pub pagination: PaginationArgs,
}

/// Arguments of `ProductVariant.quantityPriceBreaks`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariantQuantityPriceBreaksArgs {
    /// Cursor window.
    #[serde(flatten)]
    pub pagination: PaginationArgs,
}

/// Arguments of `ProductVariant.sellingPlanAllocations`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariantSellingPlanAllocationsArgs {
    /// Cursor window.
    #[serde(flatten)]
    pub pagination: PaginationArgs,
    /// Reverse the order of the underlying list.
    #[serde(default)]
    pub reverse: bool,
}

/// Arguments of `ProductVariant.storeAvailability`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariantStoreAvailabilityArgs {
    /// Cursor window.
    #[serde(flatten)]
    pub pagination: PaginationArgs,
    /// Used to sort results based on proximity to the provided location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub near: Option<GeoCoordinateInput>,
    /// Reverse the order of the underlying list.
    #[serde(default)]
    pub reverse: bool,
}

/// Arguments of `SellingPlanGroup.sellingPlans`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellingPlanGroupSellingPlansArgs {
    /// Cursor window.
    #[serde(flatten)]
    pub pagination: PaginationArgs,
    /// Reverse the order of the underlying list.
    #[serde(default)]
    pub reverse: bool,
}

/// Declare `<Type>MetafieldArgs` and `<Type>MetafieldsArgs` aliases.
macro_rules! metafield_args {
    ($($single:ident, $many:ident;)+) => {
        $(
            #[doc = concat!("Arguments of `", stringify!($single), "`.")]
            pub type $single = HasMetafieldsMetafieldArgs;
            #[doc = concat!("Arguments of `", stringify!($many), "`.")]
            pub type $many = HasMetafieldsMetafieldsArgs;
        )+
    };
}

metafield_args! {
    ArticleMetafieldArgs, ArticleMetafieldsArgs;
    BlogMetafieldArgs, BlogMetafieldsArgs;
    CartMetafieldArgs, CartMetafieldsArgs;
    CollectionMetafieldArgs, CollectionMetafieldsArgs;
    CompanyMetafieldArgs, CompanyMetafieldsArgs;
    CompanyLocationMetafieldArgs, CompanyLocationMetafieldsArgs;
    CustomerMetafieldArgs, CustomerMetafieldsArgs;
    LocationMetafieldArgs, LocationMetafieldsArgs;
    MarketMetafieldArgs, MarketMetafieldsArgs;
    OrderMetafieldArgs, OrderMetafieldsArgs;
    PageMetafieldArgs, PageMetafieldsArgs;
    ProductMetafieldArgs, ProductMetafieldsArgs;
    ProductVariantMetafieldArgs, ProductVariantMetafieldsArgs;
    SellingPlanMetafieldArgs, SellingPlanMetafieldsArgs;
    ShopMetafieldArgs, ShopMetafieldsArgs;
}

/// `Order.fulfillments` takes the same arguments as `successfulFulfillments`.
pub type OrderSuccessfulFulfillmentsArgs = OrderFulfillmentsArgs;

impl_paginated_args!(
    ArticleCommentsArgs,
    BlogArticlesArgs,
    CartDeliveryGroupsArgs,
    CartLinesArgs,
    CartDeliveryGroupCartLinesArgs,
    CollectionProductsArgs,
    CustomerAddressesArgs,
    CustomerOrdersArgs,
    FulfillmentFulfillmentLineItemsArgs,
    MetafieldReferencesArgs,
    OrderDiscountApplicationsArgs,
    OrderLineItemsArgs,
    ProductCollectionsArgs,
    ProductImagesArgs,
    ProductMediaArgs,
    ProductSellingPlanGroupsArgs,
    ProductVariantsArgs,
    ProductVariantComponentsArgs,
    ProductVariantGroupedByArgs,
    ProductVariantQuantityPriceBreaksArgs,
    ProductVariantSellingPlanAllocationsArgs,
    ProductVariantStoreAvailabilityArgs,
    SellingPlanGroupSellingPlansArgs,
);

impl ProductVariantBySelectedOptionsArgs {
    /// The selected options as `(name, value)` pairs, lowercased when
    /// matching is case insensitive.
    #[must_use]
    pub fn option_pairs(&self) -> Vec<(String, String)> {
        self.selected_options
            .iter()
            .map(|option| {
                if self.case_insensitive_match {
                    (option.name.to_lowercase(), option.value.to_lowercase())
                } else {
                    (option.name.clone(), option.value.clone())
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_variant_sort_key_defaults_to_position() {
        let args: ProductVariantsArgs =
            serde_json::from_value(serde_json::json!({ "first": 3 })).unwrap();
        assert_eq!(args.sort_key, ProductVariantSortKeys::Position);

        let args: CollectionProductsArgs = serde_json::from_value(serde_json::json!({
            "first": 12,
            "filters": [{ "available": true }]
        }))
        .unwrap();
        assert_eq!(args.sort_key, ProductCollectionSortKeys::CollectionDefault);
        assert_eq!(args.filters.unwrap().len(), 1);
    }

    #[test]
    fn test_selected_options_case_insensitive() {
        let args: ProductVariantBySelectedOptionsArgs = serde_json::from_value(serde_json::json!({
            "caseInsensitiveMatch": true,
            "selectedOptions": [{ "name": "Size", "value": "XL" }]
        }))
        .unwrap();

        assert!(!args.ignore_unknown_options);
        assert_eq!(
            args.option_pairs(),
            vec![("size".to_owned(), "xl".to_owned())]
        );
    }

    #[test]
    fn test_metafield_aliases_share_shape() {
        let args: ProductMetafieldArgs = serde_json::from_value(serde_json::json!({
            "namespace": "custom",
            "key": "care_guide"
        }))
        .unwrap();
        let shop_args: ShopMetafieldArgs = args.clone();
        assert_eq!(shop_args.namespace.as_deref(), Some("custom"));
    }
}
