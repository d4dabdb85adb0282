//! Customer orders, their line items and fulfillments.

use serde::{Deserialize, Serialize};
use storefront_schema_core::{DateTime, Id, Url};

use super::{Attribute, DiscountAllocation, MailingAddress, Metafield, MoneyV2, ProductVariant};
use crate::connection::{
    DiscountApplicationConnection, FulfillmentLineItemConnection, OrderLineItemConnection,
};
use crate::enums::{CurrencyCode, OrderCancelReason, OrderFinancialStatus, OrderFulfillmentStatus};

// =============================================================================
// Orders
// =============================================================================

/// An order is a customer’s completed request to purchase one or more products from a shop. An order is created when a customer completes the checkout process, during which time they provides an email address, billing address and payment information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// The address associated with the payment method.
    pub billing_address: Option<MailingAddress>,
    /// The reason for the order's cancellation. Returns `null` if the order wasn't canceled.
    pub cancel_reason: Option<OrderCancelReason>,
    /// The date and time when the order was canceled. Returns null if the order wasn't canceled.
    pub canceled_at: Option<DateTime>,
    /// The code of the currency used for the payment.
    pub currency_code: CurrencyCode,
    /// The subtotal of line items and their discounts, excluding line items that have been removed. Does not contain order-level discounts, duties, shipping costs, or shipping discounts. Taxes aren't included unless the order is a taxes-included order.
    pub current_subtotal_price: MoneyV2,
    /// The total cost of duties for the order, including refunds.
    pub current_total_duties: Option<MoneyV2>,
    /// The total amount of the order, including duties, taxes and discounts, minus amounts for line items that have been removed.
    pub current_total_price: MoneyV2,
    /// The total cost of shipping, excluding shipping lines that have been refunded or removed. Taxes aren't included unless the order is a taxes-included order.
    pub current_total_shipping_price: MoneyV2,
    /// The total of all taxes applied to the order, excluding taxes for returned line items.
    pub current_total_tax: MoneyV2,
    /// A list of the custom attributes added to the order. For example, whether an order is a customer's first.
    pub custom_attributes: Vec<Attribute>,
    /// The locale code in which this specific order happened.
    pub customer_locale: Option<String>,
    /// The unique URL that the customer can use to access the order.
    pub customer_url: Option<Url>,
    /// Discounts that have been applied on the order.
    pub discount_applications: DiscountApplicationConnection,
    /// Whether the order has had any edits applied or not.
    pub edited: bool,
    /// The customer's email address.
    pub email: Option<String>,
    /// The financial status of the order.
    pub financial_status: Option<OrderFinancialStatus>,
    /// The fulfillment status for the order.
    pub fulfillment_status: OrderFulfillmentStatus,
    /// A globally-unique ID.
    pub id: Id,
    /// List of the order’s line items.
    pub line_items: OrderLineItemConnection,
    /// A [custom field](https://shopify.dev/docs/apps/build/custom-data), including its `namespace` and `key`, that's associated with a Shopify resource for the purposes of adding and storing additional information.
    pub metafield: Option<Metafield>,
    /// A list of [custom fields](/docs/apps/build/custom-data) that a merchant associates with a Shopify resource.
    pub metafields: Vec<Option<Metafield>>,
    /// Unique identifier for the order that appears on the order.
    /// For example, _#1000_ or _Store1001.
    pub name: String,
    /// A unique numeric identifier for the order for use by shop owner and customer.
    pub order_number: i32,
    /// The total cost of duties charged at checkout.
    pub original_total_duties: Option<MoneyV2>,
    /// The total price of the order before any applied edits.
    pub original_total_price: MoneyV2,
    /// The customer's phone number for receiving SMS notifications.
    pub phone: Option<String>,
    /// The date and time when the order was imported.
    /// This value can be set to dates in the past when importing from other systems.
    /// If no value is provided, it will be auto-generated based on current date and time.
    pub processed_at: DateTime,
    /// The address to where the order will be shipped.
    pub shipping_address: Option<MailingAddress>,
    /// The discounts that have been allocated onto the shipping line by discount applications.
    pub shipping_discount_allocations: Vec<DiscountAllocation>,
    /// The unique URL for the order's status page.
    pub status_url: Url,
    /// Price of the order before shipping and taxes.
    pub subtotal_price: Option<MoneyV2>,
    /// List of the order’s successful fulfillments.
    pub successful_fulfillments: Option<Vec<Fulfillment>>,
    /// The sum of all the prices of all the items in the order, duties, taxes and discounts included (must be positive).
    pub total_price: MoneyV2,
    /// The total amount that has been refunded.
    pub total_refunded: MoneyV2,
    /// The total cost of shipping.
    pub total_shipping_price: MoneyV2,
    /// The total cost of taxes.
    pub total_tax: Option<MoneyV2>,
}

/// Represents a single line in an order. There is one line item for each distinct product variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItem {
    /// The number of entries associated to the line item minus the items that have been removed.
    pub current_quantity: i32,
    /// List of custom attributes associated to the line item.
    pub custom_attributes: Vec<Attribute>,
    /// The discounts that have been allocated onto the order line item by discount applications.
    pub discount_allocations: Vec<DiscountAllocation>,
    /// The total price of the line item, including discounts, and displayed in the presentment currency.
    pub discounted_total_price: MoneyV2,
    /// The total price of the line item, not including any discounts. The total price is calculated using the original unit price multiplied by the quantity, and it's displayed in the presentment currency.
    pub original_total_price: MoneyV2,
    /// The number of products variants associated to the line item.
    pub quantity: i32,
    /// The title of the product combined with title of the variant.
    pub title: String,
    /// The product variant object associated to the line item.
    pub variant: Option<Box<ProductVariant>>,
}

// =============================================================================
// Fulfillments
// =============================================================================

/// Represents a single fulfillment in an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fulfillment {
    /// List of the fulfillment's line items.
    pub fulfillment_line_items: FulfillmentLineItemConnection,
    /// The name of the tracking company.
    pub tracking_company: Option<String>,
    /// Tracking information associated with the fulfillment,
    /// such as the tracking number and tracking URL.
    pub tracking_info: Vec<FulfillmentTrackingInfo>,
}

/// Represents a single line item in a fulfillment. There is at most one fulfillment line item for each order line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FulfillmentLineItem {
    /// The associated order's line item.
    pub line_item: OrderLineItem,
    /// The amount fulfilled in this fulfillment.
    pub quantity: i32,
}

/// Tracking information associated with the fulfillment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FulfillmentTrackingInfo {
    /// The tracking number of the fulfillment.
    pub number: Option<String>,
    /// The URL to track the fulfillment.
    pub url: Option<Url>,
}

impl Order {
    /// Whether the order was canceled.
    #[must_use]
    pub const fn is_canceled(&self) -> bool {
        self.canceled_at.is_some()
    }

    /// Tracking links across all successful fulfillments.
    pub fn tracking_urls(&self) -> impl Iterator<Item = &Url> {
        self.successful_fulfillments
            .iter()
            .flatten()
            .flat_map(|fulfillment| &fulfillment.tracking_info)
            .filter_map(|info| info.url.as_ref())
    }
}

impl OrderLineItem {
    /// Units removed from the line after the order was placed.
    #[must_use]
    pub const fn removed_quantity(&self) -> i32 {
        self.quantity - self.current_quantity
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_fulfillment_tracking() {
        let fulfillment: Fulfillment = serde_json::from_value(serde_json::json!({
            "fulfillmentLineItems": { "edges": [], "nodes": [], "pageInfo": { "hasNextPage": false, "hasPreviousPage": false } },
            "trackingCompany": "Canada Post",
            "trackingInfo": [
                { "number": "1Z999", "url": "https://track.example.com/1Z999" },
                { "number": "1Z998", "url": null }
            ]
        }))
        .unwrap();

        assert_eq!(fulfillment.tracking_info.len(), 2);
        assert!(fulfillment.fulfillment_line_items.edges.is_empty());
    }

    #[test]
    fn test_removed_quantity() {
        let line: OrderLineItem = serde_json::from_value(serde_json::json!({
            "currentQuantity": 1,
            "customAttributes": [],
            "discountAllocations": [],
            "discountedTotalPrice": { "amount": "30.0", "currencyCode": "USD" },
            "originalTotalPrice": { "amount": "30.0", "currencyCode": "USD" },
            "quantity": 3,
            "title": "Pineapple Tee - M",
            "variant": null
        }))
        .unwrap();

        assert_eq!(line.removed_quantity(), 2);
    }
}
