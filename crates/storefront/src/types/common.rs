//! Money, images and the small value types shared across the catalogue.

use core::fmt;

use serde::{Deserialize, Serialize};
use storefront_schema_core::{Decimal, Id, Url};

use crate::enums::{
    CountPrecision, CurrencyCode, UnitPriceMeasurementMeasuredType,
    UnitPriceMeasurementMeasuredUnit,
};

// =============================================================================
// Money
// =============================================================================

/// A monetary value with currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyV2 {
    /// Decimal money amount.
    pub amount: Decimal,
    /// Currency of the money.
    pub currency_code: CurrencyCode,
}

/// The value of the percentage pricing object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPercentageValue {
    /// The percentage value of the object.
    pub percentage: f64,
}

/// The measurement used to calculate a unit price for a product variant (e.g. $9.99 / 100ml).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitPriceMeasurement {
    /// The type of unit of measurement for the unit price measurement.
    pub measured_type: Option<UnitPriceMeasurementMeasuredType>,
    /// The quantity unit for the unit price measurement.
    pub quantity_unit: Option<UnitPriceMeasurementMeasuredUnit>,
    /// The quantity value for the unit price measurement.
    pub quantity_value: f64,
    /// The reference unit for the unit price measurement.
    pub reference_unit: Option<UnitPriceMeasurementMeasuredUnit>,
    /// The reference value for the unit price measurement.
    pub reference_value: i32,
}

/// Quantity price breaks lets you offer different rates that are based on the
/// amount of a specific variant being ordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantityPriceBreak {
    /// Minimum quantity required to reach new quantity break price.
    pub minimum_quantity: i32,
    /// The price of variant after reaching the minimum quanity.
    pub price: MoneyV2,
}

/// The quantity rule for the product variant in a given context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantityRule {
    /// The value that specifies the quantity increment between minimum and maximum of the rule.
    /// Only quantities divisible by this value will be considered valid.
    ///
    /// The increment must be lower than or equal to the minimum and the maximum, and both minimum and maximum
    /// must be divisible by this value.
    pub increment: i32,
    /// An optional value that defines the highest allowed quantity purchased by the customer.
    /// If defined, maximum must be lower than or equal to the minimum and must be a multiple of the increment.
    pub maximum: Option<i32>,
    /// The value that defines the lowest allowed quantity purchased by the customer.
    /// The minimum must be a multiple of the quantity rule's increment.
    pub minimum: i32,
}

// =============================================================================
// Images
// =============================================================================

/// Represents an image resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// A word or phrase to share the nature or contents of an image.
    pub alt_text: Option<String>,
    /// The original height of the image in pixels. Returns `null` if the image isn't hosted by Shopify.
    pub height: Option<i32>,
    /// A unique ID for the image.
    pub id: Option<Id>,
    /// The location of the original image as a URL.
    ///
    /// Deprecated: use `url` instead.
    pub original_src: Url,
    /// The location of the image as a URL.
    ///
    /// Deprecated: use `url` instead.
    pub src: Url,
    /// The location of the transformed image as a URL.
    ///
    /// Deprecated: use `url(transform:)` instead.
    pub transformed_src: Url,
    /// The location of the image as a URL.
    ///
    /// If no transform options are specified, then the original image will be preserved including any pre-applied transforms.
    pub url: Url,
    /// The original width of the image in pixels. Returns `null` if the image isn't hosted by Shopify.
    pub width: Option<i32>,
}

// =============================================================================
// Misc
// =============================================================================

/// Represents a generic custom attribute, such as whether an order is a customer's first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    /// The key or name of the attribute. For example, `"customersFirstOrder"`.
    pub key: String,
    /// The value of the attribute. For example, `"true"`.
    pub value: Option<String>,
}

/// Details for count of elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Count {
    /// Count of elements.
    pub count: i32,
    /// Precision of count, how exact is the value.
    pub precision: CountPrecision,
}

/// SEO information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seo {
    /// The meta description.
    pub description: Option<String>,
    /// The SEO title.
    pub title: Option<String>,
}

/// Properties used by customers to select a product variant.
/// Products can have multiple options, like different sizes or colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedOption {
    /// The product option’s name.
    pub name: String,
    /// The product option’s value.
    pub value: String,
}

/// Represents an error in the input of a mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserError {
    /// The path to the input field that caused the error.
    pub field: Option<Vec<String>>,
    /// The error message.
    pub message: String,
}

/// Represents a web address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    /// The host name of the domain (eg: `example.com`).
    pub host: String,
    /// Whether SSL is enabled or not.
    pub ssl_enabled: bool,
    /// The URL of the domain (eg: `https://example.com`).
    pub url: Url,
}

/// A version of the API, as defined by [Shopify API versioning](https://shopify.dev/api/usage/versioning).
/// Versions are commonly referred to by their handle (for example, `2021-10`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiVersion {
    /// The human-readable name of the version.
    pub display_name: String,
    /// The unique identifier of an ApiVersion. All supported API versions have a date-based (YYYY-MM) or `unstable` handle.
    pub handle: String,
    /// Whether the version is actively supported by Shopify. Supported API versions are guaranteed to be stable. Unsupported API versions include unstable, release candidate, and end-of-life versions that are marked as unsupported. For more information, refer to [Versioning](https://shopify.dev/api/usage/versioning).
    pub supported: bool,
}

impl MoneyV2 {
    /// Create a money value.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Whether the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl fmt::Display for MoneyV2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency_code)
    }
}

impl QuantityRule {
    /// Whether `quantity` satisfies the rule's minimum, maximum and
    /// increment.
    #[must_use]
    pub fn allows(&self, quantity: i32) -> bool {
        quantity >= self.minimum
            && self.maximum.is_none_or(|max| quantity <= max)
            && (self.increment <= 1 || quantity % self.increment == 0)
    }
}

impl Attribute {
    /// Create an attribute.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }
}

impl ApiVersion {
    /// Whether this is the `unstable` version.
    #[must_use]
    pub fn is_unstable(&self) -> bool {
        self.handle == "unstable"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_response() {
        let money: MoneyV2 = serde_json::from_value(serde_json::json!({
            "amount": "29.99",
            "currencyCode": "CAD"
        }))
        .unwrap();

        assert_eq!(money.currency_code, CurrencyCode::Cad);
        assert_eq!(money.to_string(), "29.99 CAD");
        assert!(!money.is_zero());
    }

    #[test]
    fn test_money_serializes_amount_as_string() {
        let money = MoneyV2::new(Decimal::parse("0.00").unwrap(), CurrencyCode::Usd);
        assert!(money.is_zero());
        assert_eq!(
            serde_json::to_value(&money).unwrap(),
            serde_json::json!({ "amount": "0.00", "currencyCode": "USD" })
        );
    }

    #[test]
    fn test_quantity_rule() {
        let rule = QuantityRule {
            increment: 6,
            maximum: Some(24),
            minimum: 6,
        };
        assert!(rule.allows(12));
        assert!(!rule.allows(3));
        assert!(!rule.allows(13));
        assert!(!rule.allows(30));

        let open = QuantityRule {
            increment: 1,
            maximum: None,
            minimum: 1,
        };
        assert!(open.allows(1000));
    }

    #[test]
    fn test_image_field_names() {
        let image: Image = serde_json::from_value(serde_json::json!({
            "altText": "Pineapple",
            "height": 800,
            "id": "gid://shopify/ProductImage/1",
            "originalSrc": "https://cdn.shopify.com/p.jpg",
            "src": "https://cdn.shopify.com/p.jpg",
            "transformedSrc": "https://cdn.shopify.com/p_400x.jpg",
            "url": "https://cdn.shopify.com/p.jpg",
            "width": 600
        }))
        .unwrap();
        assert_eq!(image.alt_text.as_deref(), Some("Pineapple"));
        assert_eq!(image.url.host(), Some("cdn.shopify.com"));
    }

    #[test]
    fn test_user_error_field_path() {
        let error: UserError = serde_json::from_value(serde_json::json!({
            "field": ["input", "email"],
            "message": "Email is invalid"
        }))
        .unwrap();
        assert_eq!(error.field.unwrap(), ["input", "email"]);
    }
}
