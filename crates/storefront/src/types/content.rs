//! Online store content: blogs, articles, comments and pages.

use serde::{Deserialize, Serialize};
use storefront_schema_core::{DateTime, Html, Id, Url};

use super::{Image, Metafield, Seo};
use crate::connection::{ArticleConnection, CommentConnection};

// =============================================================================
// Blogs & Articles
// =============================================================================

/// An article in an online store blog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// The article's author.
    ///
    /// Deprecated: use `authorV2` instead.
    pub author: ArticleAuthor,
    /// The article's author.
    pub author_v2: Option<ArticleAuthor>,
    /// The blog that the article belongs to.
    pub blog: Box<Blog>,
    /// List of comments posted on the article.
    pub comments: CommentConnection,
    /// Stripped content of the article, single line with HTML tags removed.
    pub content: String,
    /// The content of the article, complete with HTML formatting.
    pub content_html: Html,
    /// Stripped excerpt of the article, single line with HTML tags removed.
    pub excerpt: Option<String>,
    /// The excerpt of the article, complete with HTML formatting.
    pub excerpt_html: Option<Html>,
    /// A human-friendly unique string for the Article automatically generated from its title.
    pub handle: String,
    /// A globally-unique ID.
    pub id: Id,
    /// The image associated with the article.
    pub image: Option<Image>,
    /// A [custom field](https://shopify.dev/docs/apps/build/custom-data), including its `namespace` and `key`, that's associated with a Shopify resource for the purposes of adding and storing additional information.
    pub metafield: Option<Metafield>,
    /// A list of [custom fields](/docs/apps/build/custom-data) that a merchant associates with a Shopify resource.
    pub metafields: Vec<Option<Metafield>>,
    /// The URL used for viewing the resource on the shop's Online Store. Returns `null` if the resource is currently not published to the Online Store sales channel.
    pub online_store_url: Option<Url>,
    /// The date and time when the article was published.
    pub published_at: DateTime,
    /// The article’s SEO information.
    pub seo: Option<Seo>,
    /// A categorization that a article can be tagged with.
    pub tags: Vec<String>,
    /// The article’s name.
    pub title: String,
    /// URL parameters to be added to a page URL to track the origin of on-site search traffic for [analytics reporting](https://help.shopify.com/manual/reports-and-analytics/shopify-reports/report-types/default-reports/behaviour-reports). Returns a result when accessed through the [search](https://shopify.dev/docs/api/storefront/current/queries/search) or [predictiveSearch](https://shopify.dev/docs/api/storefront/current/queries/predictiveSearch) queries, otherwise returns null.
    pub tracking_parameters: Option<String>,
}

/// The author of an article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleAuthor {
    /// The author's bio.
    pub bio: Option<String>,
    /// The author’s email.
    pub email: String,
    /// The author's first name.
    pub first_name: String,
    /// The author's last name.
    pub last_name: String,
    /// The author's full name.
    pub name: String,
}

/// An online store blog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    /// Find an article by its handle.
    pub article_by_handle: Option<Box<Article>>,
    /// List of the blog's articles.
    pub articles: ArticleConnection,
    /// The authors who have contributed to the blog.
    pub authors: Vec<ArticleAuthor>,
    /// A human-friendly unique string for the Blog automatically generated from its title.
    pub handle: String,
    /// A globally-unique ID.
    pub id: Id,
    /// A [custom field](https://shopify.dev/docs/apps/build/custom-data), including its `namespace` and `key`, that's associated with a Shopify resource for the purposes of adding and storing additional information.
    pub metafield: Option<Metafield>,
    /// A list of [custom fields](/docs/apps/build/custom-data) that a merchant associates with a Shopify resource.
    pub metafields: Vec<Option<Metafield>>,
    /// The URL used for viewing the resource on the shop's Online Store. Returns `null` if the resource is currently not published to the Online Store sales channel.
    pub online_store_url: Option<Url>,
    /// The blog's SEO information.
    pub seo: Option<Seo>,
    /// The blogs’s title.
    pub title: String,
}

/// A comment on an article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// The comment’s author.
    pub author: CommentAuthor,
    /// Stripped content of the comment, single line with HTML tags removed.
    pub content: String,
    /// The content of the comment, complete with HTML formatting.
    pub content_html: Html,
    /// A globally-unique ID.
    pub id: Id,
}

/// The author of a comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentAuthor {
    /// The author's email.
    pub email: String,
    /// The author’s name.
    pub name: String,
}

// =============================================================================
// Pages
// =============================================================================

/// Shopify merchants can create pages to hold static HTML content. Each Page object represents a custom page on the online store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// The description of the page, complete with HTML formatting.
    pub body: Html,
    /// Summary of the page body.
    pub body_summary: String,
    /// The timestamp of the page creation.
    pub created_at: DateTime,
    /// A human-friendly unique string for the page automatically generated from its title.
    pub handle: String,
    /// A globally-unique ID.
    pub id: Id,
    /// A [custom field](https://shopify.dev/docs/apps/build/custom-data), including its `namespace` and `key`, that's associated with a Shopify resource for the purposes of adding and storing additional information.
    pub metafield: Option<Metafield>,
    /// A list of [custom fields](/docs/apps/build/custom-data) that a merchant associates with a Shopify resource.
    pub metafields: Vec<Option<Metafield>>,
    /// The URL used for viewing the resource on the shop's Online Store. Returns `null` if the resource is currently not published to the Online Store sales channel.
    pub online_store_url: Option<Url>,
    /// The page's SEO information.
    pub seo: Option<Seo>,
    /// The title of the page.
    pub title: String,
    /// URL parameters to be added to a page URL to track the origin of on-site search traffic for [analytics reporting](https://help.shopify.com/manual/reports-and-analytics/shopify-reports/report-types/default-reports/behaviour-reports). Returns a result when accessed through the [search](https://shopify.dev/docs/api/storefront/current/queries/search) or [predictiveSearch](https://shopify.dev/docs/api/storefront/current/queries/predictiveSearch) queries, otherwise returns null.
    pub tracking_parameters: Option<String>,
    /// The timestamp of the latest page update.
    pub updated_at: DateTime,
}

impl Article {
    /// The author, preferring `authorV2` over the deprecated `author`.
    #[must_use]
    pub fn byline(&self) -> &ArticleAuthor {
        self.author_v2.as_ref().unwrap_or(&self.author)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_from_response() {
        let comment: Comment = serde_json::from_value(serde_json::json!({
            "author": { "email": "ana@example.com", "name": "Ana" },
            "content": "Lovely!",
            "contentHtml": "<p>Lovely!</p>",
            "id": "gid://shopify/Comment/5"
        }))
        .unwrap();

        assert_eq!(comment.author.name, "Ana");
        assert_eq!(comment.content_html.as_str(), "<p>Lovely!</p>");
    }

    #[test]
    fn test_page_body_is_html() {
        let page: Page = serde_json::from_value(serde_json::json!({
            "body": "<h1>About</h1>",
            "bodySummary": "About",
            "createdAt": "2023-01-01T00:00:00Z",
            "handle": "about",
            "id": "gid://shopify/Page/1",
            "metafield": null,
            "metafields": [],
            "onlineStoreUrl": "https://shop.example.com/pages/about",
            "seo": { "description": null, "title": "About us" },
            "title": "About",
            "trackingParameters": null,
            "updatedAt": "2023-02-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(page.body.as_str(), "<h1>About</h1>");
        assert_eq!(page.seo.unwrap().title.as_deref(), Some("About us"));
    }
}
