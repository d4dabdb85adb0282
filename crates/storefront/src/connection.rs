//! Relay cursor connections.
//!
//! Every paginated field returns a connection with `edges { cursor node }`,
//! `nodes` and `pageInfo`. Most connections are plain [`Connection<T>`]
//! aliases; the four that carry extra fields (`filters`, `totalCount`,
//! `productFilters`) are named structs. All of them implement
//! [`Paginated`].
//!
//! # Example
//!
//! ```
//! use storefront_schema::connection::{Paginated, StringConnection};
//!
//! let tags: StringConnection = serde_json::from_value(serde_json::json!({
//!     "edges": [{ "cursor": "c1", "node": "summer" }],
//!     "pageInfo": { "hasNextPage": true, "hasPreviousPage": false, "endCursor": "c1" }
//! }))
//! .unwrap();
//!
//! let next = tags.next_page(50).unwrap();
//! assert_eq!(next.first, Some(50));
//! assert_eq!(next.after.as_deref(), Some("c1"));
//! ```

use serde::{Deserialize, Serialize};

use crate::interfaces::{AnyBaseCartLine, AnyDiscountApplication, AnyMedia};
use crate::types::{
    Article, Blog, CartDeliveryGroup, Collection, Comment, Filter, FulfillmentLineItem, Image,
    Location, MailingAddress, Metaobject, Order, OrderLineItem, Page, Product, ProductVariant,
    ProductVariantComponent, QuantityPriceBreak, SellingPlan, SellingPlanAllocation,
    SellingPlanGroup, StoreAvailability, UrlRedirect,
};
use crate::unions::{MetafieldReference, SearchResultItem};

/// Largest page the Storefront API serves for a single connection.
pub const MAX_PAGE_SIZE: i32 = 250;

// =============================================================================
// Page Info
// =============================================================================

/// Returns information about pagination in a connection, in accordance with
/// the [Relay specification](https://relay.dev/graphql/connections.htm#sec-undefined.PageInfo).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// The cursor corresponding to the last node in edges.
    pub end_cursor: Option<String>,
    /// Whether there are more pages to fetch following the current page.
    pub has_next_page: bool,
    /// Whether there are any pages prior to the current page.
    pub has_previous_page: bool,
    /// The cursor corresponding to the first node in edges.
    pub start_cursor: Option<String>,
}

// =============================================================================
// Pagination Arguments
// =============================================================================

/// Errors from validating cursor pagination arguments.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    /// Neither `first` nor `last` was given.
    #[error("you must provide one of first or last")]
    MissingPageSize,
    /// Both `first` and `last` were given.
    #[error("passing both first and last is not supported")]
    BothPageSizes,
    /// A page size was zero or negative.
    #[error("{argument} must be greater than 0, got {value}")]
    NotPositive {
        /// `first` or `last`.
        argument: &'static str,
        /// The rejected value.
        value: i32,
    },
    /// A page size exceeded the maximum.
    #[error("{argument} cannot exceed {max}, got {value}")]
    TooLarge {
        /// `first` or `last`.
        argument: &'static str,
        /// The rejected value.
        value: i32,
        /// The maximum page size.
        max: i32,
    },
}

/// The `first`/`last`/`after`/`before` arguments shared by every connection
/// field.
///
/// Field argument structs flatten this in, so `args.pagination` always holds
/// the cursor window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationArgs {
    /// Returns the elements that come after the specified cursor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    /// Returns the elements that come before the specified cursor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    /// Returns up to the first `n` elements from the list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<i32>,
    /// Returns up to the last `n` elements from the list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<i32>,
}

impl PaginationArgs {
    /// Page forwards: `first` elements after `after`.
    #[must_use]
    pub const fn forward(first: i32, after: Option<String>) -> Self {
        Self {
            after,
            before: None,
            first: Some(first),
            last: None,
        }
    }

    /// Page backwards: `last` elements before `before`.
    #[must_use]
    pub const fn backward(last: i32, before: Option<String>) -> Self {
        Self {
            after: None,
            before,
            first: None,
            last: Some(last),
        }
    }

    /// The requested page size, whichever direction it was given in.
    #[must_use]
    pub const fn page_size(&self) -> Option<i32> {
        match (self.first, self.last) {
            (Some(n), _) | (None, Some(n)) => Some(n),
            (None, None) => None,
        }
    }

    /// Check the window against Shopify's rules: exactly one of `first` and
    /// `last`, greater than zero and no larger than `max_page_size`.
    ///
    /// # Errors
    ///
    /// Returns a [`PaginationError`] describing the first rule broken.
    pub const fn validate(&self, max_page_size: i32) -> Result<(), PaginationError> {
        let (argument, value) = match (self.first, self.last) {
            (None, None) => return Err(PaginationError::MissingPageSize),
            (Some(_), Some(_)) => return Err(PaginationError::BothPageSizes),
            (Some(first), None) => ("first", first),
            (None, Some(last)) => ("last", last),
        };

        if value <= 0 {
            return Err(PaginationError::NotPositive { argument, value });
        }
        if value > max_page_size {
            return Err(PaginationError::TooLarge {
                argument,
                value,
                max: max_page_size,
            });
        }
        Ok(())
    }
}

// =============================================================================
// Generic Connection
// =============================================================================

/// An auto-generated type which holds one `T` and a cursor during
/// pagination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge<T> {
    /// A cursor for use in pagination.
    pub cursor: String,
    /// The item at the end of the edge.
    pub node: T,
}

/// An auto-generated type for paginating through multiple `T`s.
///
/// Clients usually select either `edges` or `nodes`, so a missing list
/// decodes as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    /// A list of edges.
    #[serde(default = "Vec::new")]
    pub edges: Vec<Edge<T>>,
    /// A list of the nodes contained in the edges.
    #[serde(default = "Vec::new")]
    pub nodes: Vec<T>,
    /// Information to aid in pagination.
    #[serde(default)]
    pub page_info: PageInfo,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self {
            edges: Vec::new(),
            nodes: Vec::new(),
            page_info: PageInfo::default(),
        }
    }
}

impl<T: Clone> Connection<T> {
    /// Build a single-page connection from nodes, using each node's index as
    /// its cursor.
    #[must_use]
    pub fn from_nodes(nodes: Vec<T>) -> Self {
        let edges = nodes
            .iter()
            .enumerate()
            .map(|(i, node)| Edge {
                cursor: i.to_string(),
                node: node.clone(),
            })
            .collect::<Vec<_>>();
        let page_info = PageInfo {
            start_cursor: edges.first().map(|e| e.cursor.clone()),
            end_cursor: edges.last().map(|e| e.cursor.clone()),
            has_next_page: false,
            has_previous_page: false,
        };
        Self {
            edges,
            nodes,
            page_info,
        }
    }
}

/// Shared behaviour of every connection type.
pub trait Paginated {
    /// The node type of the connection.
    type Node;

    /// A list of edges.
    fn edges(&self) -> &[Edge<Self::Node>];

    /// A list of the nodes contained in the edges.
    fn nodes(&self) -> &[Self::Node];

    /// Information to aid in pagination.
    fn page_info(&self) -> &PageInfo;

    /// The nodes of this page, read from `nodes` or, when only edges were
    /// selected, from `edges`.
    fn node_refs(&self) -> Vec<&Self::Node> {
        if self.nodes().is_empty() {
            self.edges().iter().map(|edge| &edge.node).collect()
        } else {
            self.nodes().iter().collect()
        }
    }

    /// Number of nodes on this page.
    fn len(&self) -> usize {
        self.nodes().len().max(self.edges().len())
    }

    /// Whether this page holds no nodes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cursor of the last node on the page.
    fn end_cursor(&self) -> Option<&str> {
        self.page_info()
            .end_cursor
            .as_deref()
            .or_else(|| self.edges().last().map(|edge| edge.cursor.as_str()))
    }

    /// Cursor of the first node on the page.
    fn start_cursor(&self) -> Option<&str> {
        self.page_info()
            .start_cursor
            .as_deref()
            .or_else(|| self.edges().first().map(|edge| edge.cursor.as_str()))
    }

    /// Arguments for the page after this one, if there is one.
    fn next_page(&self, first: i32) -> Option<PaginationArgs> {
        self.page_info()
            .has_next_page
            .then(|| PaginationArgs::forward(first, self.end_cursor().map(str::to_owned)))
    }

    /// Arguments for the page before this one, if there is one.
    fn previous_page(&self, last: i32) -> Option<PaginationArgs> {
        self.page_info()
            .has_previous_page
            .then(|| PaginationArgs::backward(last, self.start_cursor().map(str::to_owned)))
    }
}

impl<T> Paginated for Connection<T> {
    type Node = T;

    fn edges(&self) -> &[Edge<T>] {
        &self.edges
    }

    fn nodes(&self) -> &[T] {
        &self.nodes
    }

    fn page_info(&self) -> &PageInfo {
        &self.page_info
    }
}

// =============================================================================
// Connection Aliases
// =============================================================================

/// An auto-generated type for paginating through multiple Articles.
pub type ArticleConnection = Connection<Article>;
/// An auto-generated type which holds one Article and a cursor during pagination.
pub type ArticleEdge = Edge<Article>;
/// An auto-generated type for paginating through multiple BaseCartLines.
pub type BaseCartLineConnection = Connection<AnyBaseCartLine>;
/// An auto-generated type which holds one BaseCartLine and a cursor during pagination.
pub type BaseCartLineEdge = Edge<AnyBaseCartLine>;
/// An auto-generated type for paginating through multiple Blogs.
pub type BlogConnection = Connection<Blog>;
/// An auto-generated type which holds one Blog and a cursor during pagination.
pub type BlogEdge = Edge<Blog>;
/// An auto-generated type for paginating through multiple CartDeliveryGroups.
pub type CartDeliveryGroupConnection = Connection<CartDeliveryGroup>;
/// An auto-generated type which holds one CartDeliveryGroup and a cursor during pagination.
pub type CartDeliveryGroupEdge = Edge<CartDeliveryGroup>;
/// An auto-generated type which holds one Collection and a cursor during pagination.
pub type CollectionEdge = Edge<Collection>;
/// An auto-generated type for paginating through multiple Comments.
pub type CommentConnection = Connection<Comment>;
/// An auto-generated type which holds one Comment and a cursor during pagination.
pub type CommentEdge = Edge<Comment>;
/// An auto-generated type for paginating through multiple DiscountApplications.
pub type DiscountApplicationConnection = Connection<AnyDiscountApplication>;
/// An auto-generated type which holds one DiscountApplication and a cursor during pagination.
pub type DiscountApplicationEdge = Edge<AnyDiscountApplication>;
/// An auto-generated type for paginating through multiple FulfillmentLineItems.
pub type FulfillmentLineItemConnection = Connection<FulfillmentLineItem>;
/// An auto-generated type which holds one FulfillmentLineItem and a cursor during pagination.
pub type FulfillmentLineItemEdge = Edge<FulfillmentLineItem>;
/// An auto-generated type for paginating through multiple Images.
pub type ImageConnection = Connection<Image>;
/// An auto-generated type which holds one Image and a cursor during pagination.
pub type ImageEdge = Edge<Image>;
/// An auto-generated type for paginating through multiple Locations.
pub type LocationConnection = Connection<Location>;
/// An auto-generated type which holds one Location and a cursor during pagination.
pub type LocationEdge = Edge<Location>;
/// An auto-generated type for paginating through multiple MailingAddresses.
pub type MailingAddressConnection = Connection<MailingAddress>;
/// An auto-generated type which holds one MailingAddress and a cursor during pagination.
pub type MailingAddressEdge = Edge<MailingAddress>;
/// An auto-generated type for paginating through multiple Media.
pub type MediaConnection = Connection<AnyMedia>;
/// An auto-generated type which holds one Media and a cursor during pagination.
pub type MediaEdge = Edge<AnyMedia>;
/// An auto-generated type for paginating through multiple MetafieldReferences.
pub type MetafieldReferenceConnection = Connection<MetafieldReference>;
/// An auto-generated type which holds one MetafieldReference and a cursor during pagination.
pub type MetafieldReferenceEdge = Edge<MetafieldReference>;
/// An auto-generated type for paginating through multiple Metaobjects.
pub type MetaobjectConnection = Connection<Metaobject>;
/// An auto-generated type which holds one Metaobject and a cursor during pagination.
pub type MetaobjectEdge = Edge<Metaobject>;
/// An auto-generated type which holds one Order and a cursor during pagination.
pub type OrderEdge = Edge<Order>;
/// An auto-generated type for paginating through multiple OrderLineItems.
pub type OrderLineItemConnection = Connection<OrderLineItem>;
/// An auto-generated type which holds one OrderLineItem and a cursor during pagination.
pub type OrderLineItemEdge = Edge<OrderLineItem>;
/// An auto-generated type for paginating through multiple Pages.
pub type PageConnection = Connection<Page>;
/// An auto-generated type which holds one Page and a cursor during pagination.
pub type PageEdge = Edge<Page>;
/// An auto-generated type which holds one Product and a cursor during pagination.
pub type ProductEdge = Edge<Product>;
/// An auto-generated type for paginating through multiple ProductVariants.
pub type ProductVariantConnection = Connection<ProductVariant>;
/// An auto-generated type which holds one ProductVariant and a cursor during pagination.
pub type ProductVariantEdge = Edge<ProductVariant>;
/// An auto-generated type for paginating through multiple ProductVariantComponents.
pub type ProductVariantComponentConnection = Connection<ProductVariantComponent>;
/// An auto-generated type which holds one ProductVariantComponent and a cursor during pagination.
pub type ProductVariantComponentEdge = Edge<ProductVariantComponent>;
/// An auto-generated type for paginating through multiple QuantityPriceBreaks.
pub type QuantityPriceBreakConnection = Connection<QuantityPriceBreak>;
/// An auto-generated type which holds one QuantityPriceBreak and a cursor during pagination.
pub type QuantityPriceBreakEdge = Edge<QuantityPriceBreak>;
/// An auto-generated type which holds one SearchResultItem and a cursor during pagination.
pub type SearchResultItemEdge = Edge<SearchResultItem>;
/// An auto-generated type for paginating through multiple SellingPlanAllocations.
pub type SellingPlanAllocationConnection = Connection<SellingPlanAllocation>;
/// An auto-generated type which holds one SellingPlanAllocation and a cursor during pagination.
pub type SellingPlanAllocationEdge = Edge<SellingPlanAllocation>;
/// An auto-generated type for paginating through multiple SellingPlans.
pub type SellingPlanConnection = Connection<SellingPlan>;
/// An auto-generated type which holds one SellingPlan and a cursor during pagination.
pub type SellingPlanEdge = Edge<SellingPlan>;
/// An auto-generated type for paginating through multiple SellingPlanGroups.
pub type SellingPlanGroupConnection = Connection<SellingPlanGroup>;
/// An auto-generated type which holds one SellingPlanGroup and a cursor during pagination.
pub type SellingPlanGroupEdge = Edge<SellingPlanGroup>;
/// An auto-generated type for paginating through multiple StoreAvailabilities.
pub type StoreAvailabilityConnection = Connection<StoreAvailability>;
/// An auto-generated type which holds one StoreAvailability and a cursor during pagination.
pub type StoreAvailabilityEdge = Edge<StoreAvailability>;
/// An auto-generated type for paginating through a list of Strings.
pub type StringConnection = Connection<String>;
/// An auto-generated type which holds one String and a cursor during pagination.
pub type StringEdge = Edge<String>;
/// An auto-generated type for paginating through multiple UrlRedirects.
pub type UrlRedirectConnection = Connection<UrlRedirect>;
/// An auto-generated type which holds one UrlRedirect and a cursor during pagination.
pub type UrlRedirectEdge = Edge<UrlRedirect>;

// =============================================================================
// Connections With Extra Fields
// =============================================================================

/// An auto-generated type for paginating through multiple Collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionConnection {
    /// A list of edges.
    #[serde(default)]
    pub edges: Vec<CollectionEdge>,
    /// A list of the nodes contained in CollectionEdge.
    #[serde(default)]
    pub nodes: Vec<Collection>,
    /// Information to aid in pagination.
    #[serde(default)]
    pub page_info: PageInfo,
    /// The total count of Collections.
    pub total_count: storefront_schema_core::UnsignedInt64,
}

/// An auto-generated type for paginating through multiple Orders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConnection {
    /// A list of edges.
    #[serde(default)]
    pub edges: Vec<OrderEdge>,
    /// A list of the nodes contained in OrderEdge.
    #[serde(default)]
    pub nodes: Vec<Order>,
    /// Information to aid in pagination.
    #[serde(default)]
    pub page_info: PageInfo,
    /// The total count of Orders.
    pub total_count: storefront_schema_core::UnsignedInt64,
}

/// An auto-generated type for paginating through multiple Products.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductConnection {
    /// A list of edges.
    #[serde(default)]
    pub edges: Vec<ProductEdge>,
    /// A list of available filters.
    #[serde(default)]
    pub filters: Vec<Filter>,
    /// A list of the nodes contained in ProductEdge.
    #[serde(default)]
    pub nodes: Vec<Product>,
    /// Information to aid in pagination.
    #[serde(default)]
    pub page_info: PageInfo,
}

/// An auto-generated type for paginating through multiple SearchResultItems.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultItemConnection {
    /// A list of edges.
    #[serde(default)]
    pub edges: Vec<SearchResultItemEdge>,
    /// A list of the nodes contained in SearchResultItemEdge.
    #[serde(default)]
    pub nodes: Vec<SearchResultItem>,
    /// Information to aid in pagination.
    #[serde(default)]
    pub page_info: PageInfo,
    /// A list of available filters.
    #[serde(default)]
    pub product_filters: Vec<Filter>,
    /// The total number of results.
    pub total_count: i32,
}

macro_rules! impl_paginated {
    ($($ty:ty => $node:ty),* $(,)?) => {
        $(
            impl Paginated for $ty {
                type Node = $node;

                fn edges(&self) -> &[Edge<$node>] {
                    &self.edges
                }

                fn nodes(&self) -> &[$node] {
                    &self.nodes
                }

                fn page_info(&self) -> &PageInfo {
                    &self.page_info
                }
            }
        )*
    };
}

impl_paginated!(
    CollectionConnection => Collection,
    OrderConnection => Order,
    ProductConnection => Product,
    SearchResultItemConnection => SearchResultItem,
);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn page(has_next: bool, has_previous: bool) -> StringConnection {
        serde_json::from_value(serde_json::json!({
            "edges": [
                { "cursor": "a", "node": "red" },
                { "cursor": "b", "node": "green" }
            ],
            "pageInfo": {
                "hasNextPage": has_next,
                "hasPreviousPage": has_previous,
                "startCursor": "a",
                "endCursor": "b"
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_validate_requires_one_page_size() {
        assert_eq!(
            PaginationArgs::default().validate(MAX_PAGE_SIZE),
            Err(PaginationError::MissingPageSize)
        );

        let both = PaginationArgs {
            first: Some(1),
            last: Some(1),
            ..PaginationArgs::default()
        };
        assert_eq!(
            both.validate(MAX_PAGE_SIZE),
            Err(PaginationError::BothPageSizes)
        );
    }

    #[test]
    fn test_validate_bounds() {
        assert!(PaginationArgs::forward(250, None).validate(MAX_PAGE_SIZE).is_ok());
        assert_eq!(
            PaginationArgs::forward(251, None).validate(MAX_PAGE_SIZE),
            Err(PaginationError::TooLarge {
                argument: "first",
                value: 251,
                max: 250
            })
        );
        assert_eq!(
            PaginationArgs::backward(0, None).validate(MAX_PAGE_SIZE),
            Err(PaginationError::NotPositive {
                argument: "last",
                value: 0
            })
        );
    }

    #[test]
    fn test_pagination_error_messages() {
        assert_eq!(
            PaginationError::MissingPageSize.to_string(),
            "you must provide one of first or last"
        );
    }

    #[test]
    fn test_next_and_previous_page() {
        let tags = page(true, true);
        assert_eq!(
            tags.next_page(10),
            Some(PaginationArgs::forward(10, Some("b".to_owned())))
        );
        assert_eq!(
            tags.previous_page(10),
            Some(PaginationArgs::backward(10, Some("a".to_owned())))
        );

        let last = page(false, false);
        assert!(last.next_page(10).is_none());
        assert!(last.previous_page(10).is_none());
    }

    #[test]
    fn test_nodes_fall_back_to_edges() {
        let tags = page(false, false);
        assert!(tags.nodes.is_empty());
        assert_eq!(tags.node_refs(), vec!["red", "green"]);
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn test_from_nodes() {
        let tags = Connection::from_nodes(vec!["a".to_owned(), "b".to_owned()]);
        assert_eq!(tags.edges.len(), 2);
        assert_eq!(tags.end_cursor(), Some("1"));
        assert!(!tags.page_info.has_next_page);
    }

    #[test]
    fn test_serializes_relay_shape() {
        let value = serde_json::to_value(Connection::from_nodes(vec![1, 2])).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["edges", "nodes", "pageInfo"]);
        assert_eq!(value["edges"][0], serde_json::json!({ "cursor": "0", "node": 1 }));
    }

    #[test]
    fn test_pagination_args_skip_absent() {
        let value = serde_json::to_value(PaginationArgs::forward(5, None)).unwrap();
        assert_eq!(value, serde_json::json!({ "first": 5 }));
    }
}
