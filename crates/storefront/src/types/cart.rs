//! Carts, cart lines, costs and delivery groups.

use serde::{Deserialize, Serialize};
use storefront_schema_core::{DateTime, Id, Url};

use super::{Attribute, Customer, MailingAddress, Metafield, MoneyV2, PurchasingCompany, SellingPlanAllocation};
use crate::connection::{BaseCartLineConnection, CartDeliveryGroupConnection};
use crate::enums::{
    CartDeliveryGroupType, CartErrorCode, CartWarningCode, CountryCode, DeliveryMethodType,
    PreferenceDeliveryMethodType,
};
use crate::interfaces::AnyCartDiscountAllocation;
use crate::unions::{DeliveryAddress, Merchandise};

// =============================================================================
// Cart
// =============================================================================

/// A cart represents the merchandise that a buyer intends to purchase,
/// and the estimated cost associated with the cart. Learn how to
/// [interact with a cart](https://shopify.dev/custom-storefronts/internationalization/international-pricing)
/// during a customer's session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// The gift cards that have been applied to the cart.
    pub applied_gift_cards: Vec<AppliedGiftCard>,
    /// An attribute associated with the cart.
    pub attribute: Option<Attribute>,
    /// The attributes associated with the cart. Attributes are represented as key-value pairs.
    pub attributes: Vec<Attribute>,
    /// Information about the buyer that's interacting with the cart.
    pub buyer_identity: CartBuyerIdentity,
    /// The URL of the checkout for the cart.
    pub checkout_url: Url,
    /// The estimated costs that the buyer will pay at checkout. The costs are subject to change and changes will be reflected at checkout. The `cost` field uses the `buyerIdentity` field to determine [international pricing](https://shopify.dev/custom-storefronts/internationalization/international-pricing).
    pub cost: CartCost,
    /// The date and time when the cart was created.
    pub created_at: DateTime,
    /// The delivery groups available for the cart, based on the buyer identity default
    /// delivery address preference or the default address of the logged-in customer.
    pub delivery_groups: CartDeliveryGroupConnection,
    /// The discounts that have been applied to the entire cart.
    pub discount_allocations: Vec<AnyCartDiscountAllocation>,
    /// The case-insensitive discount codes that the customer added at checkout.
    pub discount_codes: Vec<CartDiscountCode>,
    /// The estimated costs that the buyer will pay at checkout.
    ///
    /// Deprecated: use `cost` instead.
    pub estimated_cost: CartEstimatedCost,
    /// A globally-unique ID.
    pub id: Id,
    /// A list of lines containing information about the items the customer intends to purchase.
    pub lines: BaseCartLineConnection,
    /// A [custom field](https://shopify.dev/docs/apps/build/custom-data), including its `namespace` and `key`, that's associated with a Shopify resource for the purposes of adding and storing additional information.
    pub metafield: Option<Metafield>,
    /// A list of [custom fields](/docs/apps/build/custom-data) that a merchant associates with a Shopify resource.
    pub metafields: Vec<Option<Metafield>>,
    /// A note that's associated with the cart. For example, the note can be a personalized message to the buyer.
    pub note: Option<String>,
    /// The total number of items in the cart.
    pub total_quantity: i32,
    /// The date and time when the cart was updated.
    pub updated_at: DateTime,
}

/// Details about the gift card used on the checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedGiftCard {
    /// The amount that was taken from the gift card by applying it.
    ///
    /// Deprecated: use `amountUsedV2` instead.
    pub amount_used: MoneyV2,
    /// The amount that was taken from the gift card by applying it.
    pub amount_used_v2: MoneyV2,
    /// The amount left on the gift card.
    ///
    /// Deprecated: use `balanceV2` instead.
    pub balance: MoneyV2,
    /// The amount left on the gift card.
    pub balance_v2: MoneyV2,
    /// A globally-unique ID.
    pub id: Id,
    /// The last characters of the gift card.
    pub last_characters: String,
    /// The amount that was applied to the checkout in its currency.
    pub presentment_amount_used: MoneyV2,
}

/// The costs that the buyer will pay at checkout.
/// The cart cost uses [`CartBuyerIdentity`](https://shopify.dev/api/storefront/reference/cart/cartbuyeridentity) to determine
/// [international pricing](https://shopify.dev/custom-storefronts/internationalization/international-pricing).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartCost {
    /// The estimated amount, before taxes and discounts, for the customer to pay at checkout. The checkout charge amount doesn't include any deferred payments that'll be paid at a later date. If the cart has no deferred payments, then the checkout charge amount is equivalent to `subtotalAmount`.
    pub checkout_charge_amount: MoneyV2,
    /// The amount, before taxes and cart-level discounts, for the customer to pay.
    pub subtotal_amount: MoneyV2,
    /// Whether the subtotal amount is estimated.
    pub subtotal_amount_estimated: bool,
    /// The total amount for the customer to pay.
    pub total_amount: MoneyV2,
    /// Whether the total amount is estimated.
    pub total_amount_estimated: bool,
    /// The duty amount for the customer to pay at checkout.
    ///
    /// Deprecated: tax and duty amounts are no longer available and will be removed in a future version.
    pub total_duty_amount: Option<MoneyV2>,
    /// Whether the total duty amount is estimated.
    ///
    /// Deprecated: tax and duty amounts are no longer available and will be removed in a future version.
    pub total_duty_amount_estimated: bool,
    /// The tax amount for the customer to pay at checkout.
    ///
    /// Deprecated: tax and duty amounts are no longer available and will be removed in a future version.
    pub total_tax_amount: Option<MoneyV2>,
    /// Whether the total tax amount is estimated.
    ///
    /// Deprecated: tax and duty amounts are no longer available and will be removed in a future version.
    pub total_tax_amount_estimated: bool,
}

/// The estimated costs that the buyer will pay at checkout.
/// The estimated cost uses [`CartBuyerIdentity`](https://shopify.dev/api/storefront/reference/cart/cartbuyeridentity) to determine
/// [international pricing](https://shopify.dev/custom-storefronts/internationalization/international-pricing).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEstimatedCost {
    /// The estimated amount, before taxes and discounts, for the customer to pay at checkout. The checkout charge amount doesn't include any deferred payments that'll be paid at a later date. If the cart has no deferred payments, then the checkout charge amount is equivalent to `subtotal_amount`.
    pub checkout_charge_amount: MoneyV2,
    /// The estimated amount, before taxes and discounts, for the customer to pay.
    pub subtotal_amount: MoneyV2,
    /// The estimated total amount for the customer to pay.
    pub total_amount: MoneyV2,
    /// The estimated duty amount for the customer to pay at checkout.
    pub total_duty_amount: Option<MoneyV2>,
    /// The estimated tax amount for the customer to pay at checkout.
    pub total_tax_amount: Option<MoneyV2>,
}

/// The discount codes applied to the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartDiscountCode {
    /// Whether the discount code is applicable to the cart's current contents.
    pub applicable: bool,
    /// The code for the discount.
    pub code: String,
}

/// Represents an error that happens during execution of a cart mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartUserError {
    /// The error code.
    pub code: Option<CartErrorCode>,
    /// The path to the input field that caused the error.
    pub field: Option<Vec<String>>,
    /// The error message.
    pub message: String,
}

/// A warning that occurred during a cart mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartWarning {
    /// The code of the warning.
    pub code: CartWarningCode,
    /// The message text of the warning.
    pub message: String,
    /// The target of the warning.
    pub target: Id,
}

// =============================================================================
// Buyer Identity
// =============================================================================

/// Represents information about the buyer that is interacting with the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartBuyerIdentity {
    /// The country where the buyer is located.
    pub country_code: Option<CountryCode>,
    /// The customer account associated with the cart.
    pub customer: Option<Box<Customer>>,
    /// An ordered set of delivery addresses tied to the buyer that is interacting with the cart.
    /// The rank of the preferences is determined by the order of the addresses in the array. Preferences
    /// can be used to populate relevant fields in the checkout flow.
    ///
    /// As of the `2025-01` release, `buyerIdentity.deliveryAddressPreferences` is deprecated.
    /// Delivery addresses are now part of the `CartDelivery` object and managed with three new mutations.
    pub delivery_address_preferences: Vec<DeliveryAddress>,
    /// The email address of the buyer that's interacting with the cart.
    pub email: Option<String>,
    /// The phone number of the buyer that's interacting with the cart.
    pub phone: Option<String>,
    /// A set of preferences tied to the buyer interacting with the cart. Preferences are used to prefill fields in at checkout to streamline information collection.
    /// Preferences are not synced back to the cart if they are overwritten.
    pub preferences: Option<CartPreferences>,
    /// The purchasing company associated with the cart.
    pub purchasing_company: Option<PurchasingCompany>,
}

/// A set of preferences tied to the buyer interacting with the cart. Preferences are used to prefill fields in at checkout to streamline information collection.
/// Preferences are not synced back to the cart if they are overwritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartPreferences {
    /// Delivery preferences can be used to prefill the delivery section in at checkout.
    pub delivery: Option<CartDeliveryPreference>,
    /// Wallet preferences are used to populate relevant payment fields in the checkout flow.
    /// Accepted value: `["shop_pay"]`.
    pub wallet: Option<Vec<String>>,
}

/// A set of preferences tied to the buyer interacting with the cart. Preferences are used to prefill fields in at checkout to streamline information collection.
/// Preferences are not synced back to the cart if they are overwritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartDeliveryPreference {
    /// Preferred location used to find the closest pick up point based on coordinates.
    pub coordinates: Option<CartDeliveryCoordinatesPreference>,
    /// The preferred delivery methods such as shipping, local pickup or through pickup points.
    pub delivery_method: Vec<PreferenceDeliveryMethodType>,
    /// The pickup handle prefills checkout fields with the location for either local pickup or pickup points delivery methods.
    /// It accepts both location ID for local pickup and external IDs for pickup points.
    pub pickup_handle: Vec<String>,
}

/// Preferred location used to find the closest pick up point based on coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartDeliveryCoordinatesPreference {
    /// The two-letter code for the country of the preferred location.
    ///
    /// For example, US.
    pub country_code: CountryCode,
    /// The geographic latitude for a given location. Coordinates are required in order to set pickUpHandle for pickup points.
    pub latitude: f64,
    /// The geographic longitude for a given location. Coordinates are required in order to set pickUpHandle for pickup points.
    pub longitude: f64,
}

// =============================================================================
// Delivery
// =============================================================================

/// Information about the options available for one or more line items to be delivered to a specific address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartDeliveryGroup {
    /// A list of cart lines for the delivery group.
    pub cart_lines: BaseCartLineConnection,
    /// The destination address for the delivery group.
    pub delivery_address: MailingAddress,
    /// The delivery options available for the delivery group.
    pub delivery_options: Vec<CartDeliveryOption>,
    /// The type of merchandise in the delivery group.
    pub group_type: CartDeliveryGroupType,
    /// The ID for the delivery group.
    pub id: Id,
    /// The selected delivery option for the delivery group.
    pub selected_delivery_option: Option<CartDeliveryOption>,
}

/// Information about a delivery option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartDeliveryOption {
    /// The code of the delivery option.
    pub code: Option<String>,
    /// The method for the delivery option.
    pub delivery_method_type: DeliveryMethodType,
    /// The description of the delivery option.
    pub description: Option<String>,
    /// The estimated cost for the delivery option.
    pub estimated_cost: MoneyV2,
    /// The unique identifier of the delivery option.
    pub handle: String,
    /// The title of the delivery option.
    pub title: Option<String>,
}

// =============================================================================
// Lines
// =============================================================================

/// Represents information about the merchandise in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// An attribute associated with the cart line.
    pub attribute: Option<Attribute>,
    /// The attributes associated with the cart line. Attributes are represented as key-value pairs.
    pub attributes: Vec<Attribute>,
    /// The cost of the merchandise that the buyer will pay for at checkout. The costs are subject to change and changes will be reflected at checkout.
    pub cost: CartLineCost,
    /// The discounts that have been applied to the cart line.
    pub discount_allocations: Vec<AnyCartDiscountAllocation>,
    /// The estimated cost of the merchandise that the buyer will pay for at checkout. The estimated costs are subject to change and changes will be reflected at checkout.
    ///
    /// Deprecated: use `cost` instead.
    pub estimated_cost: CartLineEstimatedCost,
    /// A globally-unique ID.
    pub id: Id,
    /// The merchandise that the buyer intends to purchase.
    pub merchandise: Merchandise,
    /// The quantity of the merchandise that the customer intends to purchase.
    pub quantity: i32,
    /// The selling plan associated with the cart line and the effect that each selling plan has on variants when they're purchased.
    pub selling_plan_allocation: Option<SellingPlanAllocation>,
}

/// Represents information about the grouped merchandise in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentizableCartLine {
    /// An attribute associated with the cart line.
    pub attribute: Option<Attribute>,
    /// The attributes associated with the cart line. Attributes are represented as key-value pairs.
    pub attributes: Vec<Attribute>,
    /// The cost of the merchandise that the buyer will pay for at checkout. The costs are subject to change and changes will be reflected at checkout.
    pub cost: CartLineCost,
    /// The discounts that have been applied to the cart line.
    pub discount_allocations: Vec<AnyCartDiscountAllocation>,
    /// The estimated cost of the merchandise that the buyer will pay for at checkout. The estimated costs are subject to change and changes will be reflected at checkout.
    ///
    /// Deprecated: use `cost` instead.
    pub estimated_cost: CartLineEstimatedCost,
    /// A globally-unique ID.
    pub id: Id,
    /// The components of the line item.
    pub line_components: Vec<CartLine>,
    /// The merchandise that the buyer intends to purchase.
    pub merchandise: Merchandise,
    /// The quantity of the merchandise that the customer intends to purchase.
    pub quantity: i32,
    /// The selling plan associated with the cart line and the effect that each selling plan has on variants when they're purchased.
    pub selling_plan_allocation: Option<SellingPlanAllocation>,
}

/// The cost of the merchandise line that the buyer will pay at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineCost {
    /// The amount of the merchandise line.
    pub amount_per_quantity: MoneyV2,
    /// The compare at amount of the merchandise line.
    pub compare_at_amount_per_quantity: Option<MoneyV2>,
    /// The cost of the merchandise line before line-level discounts.
    pub subtotal_amount: MoneyV2,
    /// The total cost of the merchandise line.
    pub total_amount: MoneyV2,
}

/// The estimated cost of the merchandise line that the buyer will pay at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineEstimatedCost {
    /// The amount of the merchandise line.
    pub amount: MoneyV2,
    /// The compare at amount of the merchandise line.
    pub compare_at_amount: Option<MoneyV2>,
    /// The estimated cost of the merchandise line before discounts.
    pub subtotal_amount: MoneyV2,
    /// The estimated total cost of the merchandise line.
    pub total_amount: MoneyV2,
}

impl Cart {
    /// Whether the cart holds no merchandise.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_quantity == 0
    }

    /// Discount codes that currently apply to the cart's contents.
    pub fn applicable_discount_codes(&self) -> impl Iterator<Item = &str> {
        self.discount_codes
            .iter()
            .filter(|discount| discount.applicable)
            .map(|discount| discount.code.as_str())
    }

    /// Look up a cart attribute by key.
    #[must_use]
    pub fn attribute_value(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attribute| attribute.key == key)
            .and_then(|attribute| attribute.value.as_deref())
    }
}

impl CartLineCost {
    /// Whether the line sells below its compare-at amount.
    #[must_use]
    pub fn is_discounted(&self) -> bool {
        self.compare_at_amount_per_quantity
            .as_ref()
            .is_some_and(|compare_at| compare_at.amount > self.amount_per_quantity.amount)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_user_error_code() {
        let error: CartUserError = serde_json::from_value(serde_json::json!({
            "code": "MERCHANDISE_OUT_OF_STOCK",
            "field": ["input", "lines", "0", "quantity"],
            "message": "The product is out of stock."
        }))
        .unwrap();

        assert_eq!(error.code, Some(CartErrorCode::MerchandiseOutOfStock));
        assert_eq!(error.field.unwrap().len(), 4);
    }

    #[test]
    fn test_line_cost_discounted() {
        let cost: CartLineCost = serde_json::from_value(serde_json::json!({
            "amountPerQuantity": { "amount": "20.0", "currencyCode": "USD" },
            "compareAtAmountPerQuantity": { "amount": "25.0", "currencyCode": "USD" },
            "subtotalAmount": { "amount": "40.0", "currencyCode": "USD" },
            "totalAmount": { "amount": "40.0", "currencyCode": "USD" }
        }))
        .unwrap();
        assert!(cost.is_discounted());

        let full_price = CartLineCost {
            compare_at_amount_per_quantity: None,
            ..cost
        };
        assert!(!full_price.is_discounted());
    }

    #[test]
    fn test_delivery_preference_defaults() {
        let preference: CartDeliveryPreference = serde_json::from_value(serde_json::json!({
            "coordinates": { "countryCode": "CA", "latitude": 45.5, "longitude": -73.6 },
            "deliveryMethod": ["PICK_UP"],
            "pickupHandle": []
        }))
        .unwrap();

        let coordinates = preference.coordinates.unwrap();
        assert_eq!(coordinates.country_code, CountryCode::Ca);
        assert!(coordinates.latitude > 45.0);
        assert_eq!(
            preference.delivery_method,
            vec![PreferenceDeliveryMethodType::PickUp]
        );
    }
}
