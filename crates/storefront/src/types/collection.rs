//! Product collections.

use serde::{Deserialize, Serialize};
use storefront_schema_core::{DateTime, Html, Id, Url};

use super::{Image, Metafield, Seo};
use crate::connection::ProductConnection;

/// A collection represents a grouping of products that a shop owner can create to
/// organize them or make their shops easier to browse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    /// Stripped description of the collection, single line with HTML tags removed.
    pub description: String,
    /// The description of the collection, complete with HTML formatting.
    pub description_html: Html,
    /// A human-friendly unique string for the collection automatically generated from its title.
    /// Limit of 255 characters.
    pub handle: String,
    /// A globally-unique ID.
    pub id: Id,
    /// Image associated with the collection.
    pub image: Option<Image>,
    /// A [custom field](https://shopify.dev/docs/apps/build/custom-data), including its `namespace` and `key`, that's associated with a Shopify resource for the purposes of adding and storing additional information.
    pub metafield: Option<Metafield>,
    /// A list of [custom fields](/docs/apps/build/custom-data) that a merchant associates with a Shopify resource.
    pub metafields: Vec<Option<Metafield>>,
    /// The URL used for viewing the resource on the shop's Online Store. Returns `null` if the resource is currently not published to the Online Store sales channel.
    pub online_store_url: Option<Url>,
    /// List of products in the collection.
    pub products: ProductConnection,
    /// The collection's SEO information.
    pub seo: Seo,
    /// The collection’s name. Limit of 255 characters.
    pub title: String,
    /// URL parameters to be added to a page URL to track the origin of on-site search traffic for [analytics reporting](https://help.shopify.com/manual/reports-and-analytics/shopify-reports/report-types/default-reports/behaviour-reports). Returns a result when accessed through the [search](https://shopify.dev/docs/api/storefront/current/queries/search) or [predictiveSearch](https://shopify.dev/docs/api/storefront/current/queries/predictiveSearch) queries, otherwise returns null.
    pub tracking_parameters: Option<String>,
    /// The date and time when the collection was last modified.
    pub updated_at: DateTime,
}

impl Collection {
    /// Whether the collection is published to the online store.
    #[must_use]
    pub const fn is_published(&self) -> bool {
        self.online_store_url.is_some()
    }
}
