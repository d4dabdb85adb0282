//! Shop Pay Installments pricing and Shop Pay payment request sessions.

use serde::{Deserialize, Serialize};
use storefront_schema_core::{Id, Iso8601DateTime, Url};

use super::{Count, MoneyV2};
use crate::enums::{
    CurrencyCode, ShopPayInstallmentsFinancingPlanFrequency, ShopPayInstallmentsLoan,
    ShopPayPaymentRequestDeliveryMethodType, UserErrorsShopPayPaymentRequestSessionUserErrorsCode,
};

// =============================================================================
// Installments
// =============================================================================

/// The financing plan in Shop Pay Installments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopPayInstallmentsFinancingPlan {
    /// A globally-unique ID.
    pub id: Id,
    /// The maximum price to qualify for the financing plan.
    pub max_price: MoneyV2,
    /// The minimum price to qualify for the financing plan.
    pub min_price: MoneyV2,
    /// The terms of the financing plan.
    pub terms: Vec<ShopPayInstallmentsFinancingPlanTerm>,
}

/// The terms of the financing plan in Shop Pay Installments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopPayInstallmentsFinancingPlanTerm {
    /// The annual percentage rate (APR) of the financing plan.
    pub apr: i32,
    /// The payment frequency for the financing plan.
    pub frequency: ShopPayInstallmentsFinancingPlanFrequency,
    /// A globally-unique ID.
    pub id: Id,
    /// The number of installments for the financing plan.
    pub installments_count: Option<Count>,
    /// The type of loan for the financing plan.
    pub loan_type: ShopPayInstallmentsLoan,
}

/// The result for a Shop Pay Installments pricing request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopPayInstallmentsPricing {
    /// The financing plans available for the given price range.
    pub available_plans: Vec<ShopPayInstallmentsFinancingPlan>,
    /// A globally-unique ID.
    pub id: Id,
    /// The maximum price to qualify for financing.
    pub max_price: MoneyV2,
    /// The minimum price to qualify for financing.
    pub min_price: MoneyV2,
}

/// The shop pay installments pricing information for a product variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopPayInstallmentsProductVariantPricing {
    /// Whether the product variant is available.
    pub available: bool,
    /// Whether the product variant is eligible for Shop Pay Installments.
    pub eligible: bool,
    /// The full price of the product variant.
    pub full_price: MoneyV2,
    /// The ID of the product variant.
    pub id: Id,
    /// The number of payment terms available for the product variant.
    pub installments_count: Option<Count>,
    /// The price per term for the product variant.
    pub price_per_term: MoneyV2,
}

// =============================================================================
// Payment Requests
// =============================================================================

/// Represents a Shop Pay payment request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopPayPaymentRequest {
    /// The delivery methods for the payment request.
    pub delivery_methods: Vec<ShopPayPaymentRequestDeliveryMethod>,
    /// The discount codes for the payment request.
    pub discount_codes: Vec<String>,
    /// The discounts for the payment request order.
    pub discounts: Option<Vec<ShopPayPaymentRequestDiscount>>,
    /// The line items for the payment request.
    pub line_items: Vec<ShopPayPaymentRequestLineItem>,
    /// The locale for the payment request.
    pub locale: String,
    /// The presentment currency for the payment request.
    pub presentment_currency: CurrencyCode,
    /// The delivery method type for the payment request.
    pub selected_delivery_method_type: ShopPayPaymentRequestDeliveryMethodType,
    /// The shipping address for the payment request.
    pub shipping_address: Option<ShopPayPaymentRequestContactField>,
    /// The shipping lines for the payment request.
    pub shipping_lines: Vec<ShopPayPaymentRequestShippingLine>,
    /// The subtotal amount for the payment request.
    pub subtotal: MoneyV2,
    /// The total amount for the payment request.
    pub total: MoneyV2,
    /// The total shipping price for the payment request.
    pub total_shipping_price: Option<ShopPayPaymentRequestTotalShippingPrice>,
    /// The total tax for the payment request.
    pub total_tax: Option<MoneyV2>,
}

/// Represents a contact field for a Shop Pay payment request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopPayPaymentRequestContactField {
    /// The first address line of the contact field.
    pub address1: String,
    /// The second address line of the contact field.
    pub address2: Option<String>,
    /// The city of the contact field.
    pub city: String,
    /// The company name of the contact field.
    pub company_name: Option<String>,
    /// The country of the contact field.
    pub country_code: String,
    /// The email of the contact field.
    pub email: Option<String>,
    /// The first name of the contact field.
    pub first_name: String,
    /// The first name of the contact field.
    pub last_name: String,
    /// The phone number of the contact field.
    pub phone: Option<String>,
    /// The postal code of the contact field.
    pub postal_code: Option<String>,
    /// The province of the contact field.
    pub province_code: Option<String>,
}

/// Represents a delivery method for a Shop Pay payment request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopPayPaymentRequestDeliveryMethod {
    /// The amount for the delivery method.
    pub amount: MoneyV2,
    /// The code of the delivery method.
    pub code: String,
    /// The detail about when the delivery may be expected.
    pub delivery_expectation_label: Option<String>,
    /// The detail of the delivery method.
    pub detail: Option<String>,
    /// The label of the delivery method.
    pub label: String,
    /// The maximum delivery date for the delivery method.
    pub max_delivery_date: Option<Iso8601DateTime>,
    /// The minimum delivery date for the delivery method.
    pub min_delivery_date: Option<Iso8601DateTime>,
}

/// Represents a discount for a Shop Pay payment request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopPayPaymentRequestDiscount {
    /// The amount of the discount.
    pub amount: MoneyV2,
    /// The label of the discount.
    pub label: String,
}

/// Represents an image for a Shop Pay payment request line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopPayPaymentRequestImage {
    /// The alt text of the image.
    pub alt: Option<String>,
    /// The source URL of the image.
    pub url: String,
}

/// Represents a line item for a Shop Pay payment request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopPayPaymentRequestLineItem {
    /// The final item price for the line item.
    pub final_item_price: MoneyV2,
    /// The final line price for the line item.
    pub final_line_price: MoneyV2,
    /// The image of the line item.
    pub image: Option<ShopPayPaymentRequestImage>,
    /// The item discounts for the line item.
    pub item_discounts: Option<Vec<ShopPayPaymentRequestDiscount>>,
    /// The label of the line item.
    pub label: String,
    /// The line discounts for the line item.
    pub line_discounts: Option<Vec<ShopPayPaymentRequestDiscount>>,
    /// The original item price for the line item.
    pub original_item_price: Option<MoneyV2>,
    /// The original line price for the line item.
    pub original_line_price: Option<MoneyV2>,
    /// The quantity of the line item.
    pub quantity: i32,
    /// Whether the line item requires shipping.
    pub requires_shipping: Option<bool>,
    /// The SKU of the line item.
    pub sku: Option<String>,
}

/// Represents a receipt for a Shop Pay payment request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopPayPaymentRequestReceipt {
    /// The payment request object.
    pub payment_request: ShopPayPaymentRequest,
    /// The processing status.
    pub processing_status_type: String,
    /// The token of the receipt.
    pub token: String,
}

/// Represents a Shop Pay payment request session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopPayPaymentRequestSession {
    /// The checkout URL of the Shop Pay payment request session.
    pub checkout_url: Url,
    /// The payment request associated with the Shop Pay payment request session.
    pub payment_request: ShopPayPaymentRequest,
    /// The source identifier of the Shop Pay payment request session.
    pub source_identifier: String,
    /// The token of the Shop Pay payment request session.
    pub token: String,
}

/// Represents a shipping line for a Shop Pay payment request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopPayPaymentRequestShippingLine {
    /// The amount for the shipping line.
    pub amount: MoneyV2,
    /// The code of the shipping line.
    pub code: String,
    /// The label of the shipping line.
    pub label: String,
}

/// Represents a shipping total for a Shop Pay payment request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopPayPaymentRequestTotalShippingPrice {
    /// The discounts for the shipping total.
    pub discounts: Vec<ShopPayPaymentRequestDiscount>,
    /// The final total for the shipping total.
    pub final_total: MoneyV2,
    /// The original total for the shipping total.
    pub original_total: Option<MoneyV2>,
}

/// Error codes for failed Shop Pay payment request session mutations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserErrorsShopPayPaymentRequestSessionUserErrors {
    /// The error code.
    pub code: Option<UserErrorsShopPayPaymentRequestSessionUserErrorsCode>,
    /// The path to the input field that caused the error.
    pub field: Option<Vec<String>>,
    /// The error message.
    pub message: String,
}

impl ShopPayInstallmentsPricing {
    /// Whether a price falls inside the financing window.
    #[must_use]
    pub fn qualifies(&self, price: &MoneyV2) -> bool {
        price.currency_code == self.min_price.currency_code
            && price.amount >= self.min_price.amount
            && price.amount <= self.max_price.amount
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::enums::CurrencyCode;

    fn usd(amount: &str) -> MoneyV2 {
        MoneyV2::new(amount.parse().unwrap(), CurrencyCode::Usd)
    }

    #[test]
    fn test_installments_window() {
        let pricing = ShopPayInstallmentsPricing {
            available_plans: Vec::new(),
            id: Id::new("gid://shopify/ShopPayInstallmentsPricing/1"),
            max_price: usd("17500.00"),
            min_price: usd("50.00"),
        };

        assert!(pricing.qualifies(&usd("50.00")));
        assert!(pricing.qualifies(&usd("129.99")));
        assert!(!pricing.qualifies(&usd("49.99")));
        assert!(!pricing.qualifies(&MoneyV2::new(
            "129.99".parse().unwrap(),
            CurrencyCode::Cad
        )));
    }
}
