//! Search filters and predictive search results.

use serde::{Deserialize, Serialize};
use storefront_schema_core::{Color, Json};

use super::{Article, Collection, MediaImage, Page, Product};
use crate::enums::{FilterPresentation, FilterType};

// =============================================================================
// Filters
// =============================================================================

/// A filter that is supported on the parent field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    /// A unique identifier.
    pub id: String,
    /// A human-friendly string for this filter.
    pub label: String,
    /// Describes how to present the filter values.
    /// Returns a value only for filters of type `LIST`. Returns null for other types.
    pub presentation: Option<FilterPresentation>,
    /// An enumeration that denotes the type of data this filter represents.
    #[serde(rename = "type")]
    pub kind: FilterType,
    /// The list of values for this filter.
    pub values: Vec<FilterValue>,
}

/// A selectable value within a filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterValue {
    /// The number of results that match this filter value.
    pub count: i32,
    /// A unique identifier.
    pub id: String,
    /// The visual representation when the filter's presentation is `IMAGE`.
    pub image: Option<MediaImage>,
    /// An input object that can be used to filter by this value on the parent field.
    ///
    /// The value is provided as a helper for building dynamic filtering UI. For
    /// example, if you have a list of selected `FilterValue` objects, you can combine
    /// their respective `input` values to use in a subsequent query.
    pub input: Json,
    /// A human-friendly string for this filter value.
    pub label: String,
    /// The visual representation when the filter's presentation is `SWATCH`.
    pub swatch: Option<Swatch>,
}

/// Color and image for visual representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Swatch {
    /// The swatch color.
    pub color: Option<Color>,
    /// The swatch image.
    pub image: Option<MediaImage>,
}

// =============================================================================
// Predictive Search
// =============================================================================

/// A predictive search result represents a list of products, collections, pages, articles, and query suggestions
/// that matches the predictive search query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictiveSearchResult {
    /// The articles that match the search query.
    pub articles: Vec<Article>,
    /// The articles that match the search query.
    pub collections: Vec<Collection>,
    /// The pages that match the search query.
    pub pages: Vec<Page>,
    /// The products that match the search query.
    pub products: Vec<Product>,
    /// The query suggestions that are relevant to the search query.
    pub queries: Vec<SearchQuerySuggestion>,
}

/// A search query suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuerySuggestion {
    /// The text of the search query suggestion with highlighted HTML tags.
    pub styled_text: String,
    /// The text of the search query suggestion.
    pub text: String,
    /// URL parameters to be added to a page URL to track the origin of on-site search traffic for [analytics reporting](https://help.shopify.com/manual/reports-and-analytics/shopify-reports/report-types/default-reports/behaviour-reports). Returns a result when accessed through the [search](https://shopify.dev/docs/api/storefront/current/queries/search) or [predictiveSearch](https://shopify.dev/docs/api/storefront/current/queries/predictiveSearch) queries, otherwise returns null.
    pub tracking_parameters: Option<String>,
}

impl Filter {
    /// Values that still match at least one result.
    pub fn available_values(&self) -> impl Iterator<Item = &FilterValue> {
        self.values.iter().filter(|value| value.count > 0)
    }
}

impl PredictiveSearchResult {
    /// Whether nothing matched the query.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
            && self.collections.is_empty()
            && self.pages.is_empty()
            && self.products.is_empty()
            && self.queries.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_values() {
        let filter: Filter = serde_json::from_value(serde_json::json!({
            "id": "filter.v.availability",
            "label": "Availability",
            "presentation": null,
            "type": "LIST",
            "values": [
                { "count": 12, "id": "filter.v.availability.1", "image": null, "input": "{\"available\":true}", "label": "In stock", "swatch": null },
                { "count": 0, "id": "filter.v.availability.0", "image": null, "input": "{\"available\":false}", "label": "Out of stock", "swatch": null }
            ]
        }))
        .unwrap();

        assert_eq!(filter.kind, FilterType::List);
        let labels: Vec<&str> = filter.available_values().map(|v| v.label.as_str()).collect();
        assert_eq!(labels, vec!["In stock"]);
    }

    #[test]
    fn test_empty_predictive_result() {
        let result: PredictiveSearchResult = serde_json::from_value(serde_json::json!({
            "articles": [], "collections": [], "pages": [], "products": [], "queries": []
        }))
        .unwrap();
        assert!(result.is_empty());
    }
}
