//! Shop settings, branding, policies and sitemaps.

use serde::{Deserialize, Serialize};
use storefront_schema_core::{Color, DateTime, Id, Url};

use super::{Count, Domain, MediaImage, Metafield, ShopPayInstallmentsPricing};
use crate::enums::{CardBrand, CountryCode, CurrencyCode, DigitalWallet};
use crate::interfaces::AnySitemapResource;

// =============================================================================
// Shop
// =============================================================================

/// Shop represents a collection of the general settings and information about the shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    /// The shop's branding configuration.
    pub brand: Option<Brand>,
    /// A description of the shop.
    pub description: Option<String>,
    /// A globally-unique ID.
    pub id: Id,
    /// A [custom field](https://shopify.dev/docs/apps/build/custom-data), including its `namespace` and `key`, that's associated with a Shopify resource for the purposes of adding and storing additional information.
    pub metafield: Option<Metafield>,
    /// A list of [custom fields](/docs/apps/build/custom-data) that a merchant associates with a Shopify resource.
    pub metafields: Vec<Option<Metafield>>,
    /// A string representing the way currency is formatted when the currency isn’t specified.
    pub money_format: String,
    /// The shop’s name.
    pub name: String,
    /// Settings related to payments.
    pub payment_settings: PaymentSettings,
    /// The primary domain of the shop’s Online Store.
    pub primary_domain: Domain,
    /// The shop’s privacy policy.
    pub privacy_policy: Option<ShopPolicy>,
    /// The shop’s refund policy.
    pub refund_policy: Option<ShopPolicy>,
    /// The shop’s shipping policy.
    pub shipping_policy: Option<ShopPolicy>,
    /// Countries that the shop ships to.
    pub ships_to_countries: Vec<CountryCode>,
    /// The Shop Pay Installments pricing information for the shop.
    pub shop_pay_installments_pricing: Option<ShopPayInstallmentsPricing>,
    /// The shop’s subscription policy.
    pub subscription_policy: Option<ShopPolicyWithDefault>,
    /// The shop’s terms of service.
    pub terms_of_service: Option<ShopPolicy>,
}

/// The store's [branding configuration](https://help.shopify.com/en/manual/promoting-marketing/managing-brand-assets).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    /// The colors of the store's brand.
    pub colors: BrandColors,
    /// The store's cover image.
    pub cover_image: Option<MediaImage>,
    /// The store's default logo.
    pub logo: Option<MediaImage>,
    /// The store's short description.
    pub short_description: Option<String>,
    /// The store's slogan.
    pub slogan: Option<String>,
    /// The store's preferred logo for square UI elements.
    pub square_logo: Option<MediaImage>,
}

/// The colors of the shop's brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandColors {
    /// The shop's primary brand colors.
    pub primary: Vec<BrandColorGroup>,
    /// The shop's secondary brand colors.
    pub secondary: Vec<BrandColorGroup>,
}

/// A group of related colors for the shop's brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandColorGroup {
    /// The background color.
    pub background: Option<Color>,
    /// The foreground color.
    pub foreground: Option<Color>,
}

/// Settings related to payments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSettings {
    /// List of the card brands which the business entity accepts.
    pub accepted_card_brands: Vec<CardBrand>,
    /// The url pointing to the endpoint to vault credit cards.
    pub card_vault_url: Url,
    /// The country where the shop is located. When multiple business entities operate within the shop, then this will represent the country of the business entity that's serving the specified buyer context.
    pub country_code: CountryCode,
    /// The three-letter code for the shop's primary currency.
    pub currency_code: CurrencyCode,
    /// A list of enabled currencies (ISO 4217 format) that the shop accepts.
    /// Merchants can enable currencies from their Shopify Payments settings in the Shopify admin.
    pub enabled_presentment_currencies: Vec<CurrencyCode>,
    /// The shop’s Shopify Payments account ID.
    pub shopify_payments_account_id: Option<String>,
    /// List of the digital wallets which the business entity supports.
    pub supported_digital_wallets: Vec<DigitalWallet>,
}

/// Policy that a merchant has configured for their store, such as their refund or privacy policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopPolicy {
    /// Policy text, maximum size of 64kb.
    pub body: String,
    /// Policy’s handle.
    pub handle: String,
    /// A globally-unique ID.
    pub id: Id,
    /// Policy’s title.
    pub title: String,
    /// Public URL to the policy.
    pub url: Url,
}

/// A policy for the store that comes with a default value, such as a subscription policy.
/// If the merchant hasn't configured a policy for their store, then the policy will return the default value.
/// Otherwise, the policy will return the merchant-configured value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopPolicyWithDefault {
    /// The text of the policy. Maximum size: 64KB.
    pub body: String,
    /// The handle of the policy.
    pub handle: String,
    /// The unique ID of the policy. A default policy doesn't have an ID.
    pub id: Option<Id>,
    /// The title of the policy.
    pub title: String,
    /// Public URL to the policy.
    pub url: Url,
}

/// A redirect on the online store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlRedirect {
    /// The ID of the URL redirect.
    pub id: Id,
    /// The old path to be redirected from. When the user visits this path, they'll be redirected to the target location.
    pub path: String,
    /// The target location where the user will be redirected to.
    pub target: String,
}

// =============================================================================
// Sitemap
// =============================================================================

/// Contains all fields required to generate sitemaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sitemap {
    /// The number of sitemap's pages for a given type.
    pub pages_count: Option<Count>,
    /// A list of sitemap's resources for a given type.
    ///
    /// Important Notes:
    ///   - The number of items per page varies from 0 to 250.
    ///   - Empty pages (0 items) may occur and do not necessarily indicate the end of results.
    ///   - Always check `hasNextPage` to determine if more pages are available.
    pub resources: Option<PaginatedSitemapResources>,
}

/// Type for paginating through multiple sitemap's resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedSitemapResources {
    /// Whether there is a next page or not.
    pub has_next_page: bool,
    /// List of sitemap resources for the current page.
    /// Note: The number of items varies between 0 and 250 per page.
    pub items: Vec<AnySitemapResource>,
}

/// Represents a sitemap's image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapImage {
    /// Image's alt text.
    pub alt: Option<String>,
    /// Path to the image.
    pub filepath: Option<String>,
    /// The date and time when the image was updated.
    pub updated_at: DateTime,
}

/// Represents a sitemap resource that is not a metaobject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapResource {
    /// Resource's handle.
    pub handle: String,
    /// Resource's image.
    pub image: Option<SitemapImage>,
    /// Resource's title.
    pub title: Option<String>,
    /// The date and time when the resource was updated.
    pub updated_at: DateTime,
}

/// A SitemapResourceMetaobject represents a metaobject with
/// [the `renderable` capability](https://shopify.dev/docs/apps/build/custom-data/metaobjects/use-metaobject-capabilities#render-metaobjects-as-web-pages).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapResourceMetaobject {
    /// Resource's handle.
    pub handle: String,
    /// The URL handle for accessing pages of this metaobject type in the Online Store.
    pub online_store_url_handle: Option<String>,
    /// The type of the metaobject. Defines the namespace of its associated metafields.
    #[serde(rename = "type")]
    pub kind: String,
    /// The date and time when the resource was updated.
    pub updated_at: DateTime,
}

impl Shop {
    /// The merchant-configured policies, in footer order.
    pub fn policies(&self) -> impl Iterator<Item = &ShopPolicy> {
        [
            &self.privacy_policy,
            &self.refund_policy,
            &self.shipping_policy,
            &self.terms_of_service,
        ]
        .into_iter()
        .flatten()
    }
}

impl PaymentSettings {
    /// Whether buyers can check out with the given wallet.
    #[must_use]
    pub fn supports_wallet(&self, wallet: DigitalWallet) -> bool {
        self.supported_digital_wallets.contains(&wallet)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_settings_wallets() {
        let settings: PaymentSettings = serde_json::from_value(serde_json::json!({
            "acceptedCardBrands": ["VISA", "MASTERCARD", "AMERICAN_EXPRESS"],
            "cardVaultUrl": "https://elb.deposit.shopifycs.com/sessions",
            "countryCode": "CA",
            "currencyCode": "CAD",
            "enabledPresentmentCurrencies": ["CAD", "USD"],
            "shopifyPaymentsAccountId": null,
            "supportedDigitalWallets": ["APPLE_PAY", "SHOPIFY_PAY"]
        }))
        .unwrap();

        assert!(settings.supports_wallet(DigitalWallet::ApplePay));
        assert!(!settings.supports_wallet(DigitalWallet::GooglePay));
        assert_eq!(settings.accepted_card_brands.len(), 3);
    }

    #[test]
    fn test_default_policy_has_no_id() {
        let policy: ShopPolicyWithDefault = serde_json::from_value(serde_json::json!({
            "body": "",
            "handle": "subscription-policy",
            "id": null,
            "title": "Subscription policy",
            "url": "https://shop.example.com/policies/subscription-policy"
        }))
        .unwrap();
        assert!(policy.id.is_none());
    }
}
