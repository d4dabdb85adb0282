//! Input object types of the Storefront API.
//!
//! Optional fields are omitted from the serialized form when `None`, so an
//! input built in Rust sends only what was set.
//!
//! # Example
//!
//! ```
//! use storefront_schema::inputs::{CartInput, CartLineInput};
//!
//! let input = CartInput {
//!     lines: Some(vec![CartLineInput::new("gid://shopify/ProductVariant/1", 2)]),
//!     note: Some("Gift wrap please".to_owned()),
//!     ..CartInput::default()
//! };
//!
//! let json = serde_json::to_value(&input).unwrap();
//! assert_eq!(json["lines"][0]["quantity"], 2);
//! assert!(json.get("buyerIdentity").is_none());
//! ```

use serde::{Deserialize, Serialize};
use storefront_schema_core::{Decimal, Id, Iso8601DateTime};

use crate::enums::{
    CartCardSource, CountryCode, CropRegion, CurrencyCode, DeliveryAddressValidationStrategy,
    ImageContentType, PreferenceDeliveryMethodType, ShopPayPaymentRequestDeliveryMethodType,
};
use crate::types::MoneyV2;

// =============================================================================
// Cart
// =============================================================================

/// The input fields to create a cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartInput {
    /// An array of key-value pairs that contains additional information about the cart.
    ///
    /// The input must not contain more than `250` values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<AttributeInput>>,
    /// The customer associated with the cart. Used to determine [international pricing]
    /// (https://shopify.dev/custom-storefronts/internationalization/international-pricing).
    /// Buyer identity should match the customer's shipping address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_identity: Option<CartBuyerIdentityInput>,
    /// The case-insensitive discount codes that the customer added at checkout.
    ///
    /// The input must not contain more than `250` values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_codes: Option<Vec<String>>,
    /// The case-insensitive gift card codes.
    ///
    /// The input must not contain more than `250` values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gift_card_codes: Option<Vec<String>>,
    /// A list of merchandise lines to add to the cart.
    ///
    /// The input must not contain more than `250` values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<Vec<CartLineInput>>,
    /// The metafields to associate with this cart.
    ///
    /// The input must not contain more than `250` values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metafields: Option<Vec<CartInputMetafieldInput>>,
    /// A note that's associated with the cart. For example, the note can be a personalized message to the buyer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// The input fields for a cart metafield value to set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartInputMetafieldInput {
    /// The key name of the metafield.
    pub key: String,
    /// The type of data that the cart metafield stores.
    /// The type of data must be a [supported type](https://shopify.dev/apps/metafields/types).
    #[serde(rename = "type")]
    pub kind: String,
    /// The data to store in the cart metafield. The data is always stored as a string, regardless of the metafield's type.
    pub value: String,
}

/// The input fields to create a merchandise line on a cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineInput {
    /// An array of key-value pairs that contains additional information about the merchandise line.
    ///
    /// The input must not contain more than `250` values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<AttributeInput>>,
    /// The ID of the merchandise that the buyer intends to purchase.
    pub merchandise_id: Id,
    /// The quantity of the merchandise. Defaults to `1`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
    /// The ID of the selling plan that the merchandise is being purchased with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selling_plan_id: Option<Id>,
}

/// The input fields to update a line item on a cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineUpdateInput {
    /// An array of key-value pairs that contains additional information about the merchandise line.
    ///
    /// The input must not contain more than `250` values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<AttributeInput>>,
    /// The ID of the merchandise line.
    pub id: Id,
    /// The ID of the merchandise for the line item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchandise_id: Option<Id>,
    /// The quantity of the line item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
    /// The ID of the selling plan that the merchandise is being purchased with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selling_plan_id: Option<Id>,
}

/// The input fields for updating the selected delivery options for a delivery group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSelectedDeliveryOptionInput {
    /// The ID of the cart delivery group.
    pub delivery_group_id: Id,
    /// The handle of the selected delivery option.
    pub delivery_option_handle: String,
}

/// The input fields to delete a cart metafield.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartMetafieldDeleteInput {
    /// The key name of the cart metafield. Can either be a composite key (`namespace.key`) or a simple key
    ///  that relies on the default app-reserved namespace.
    pub key: String,
    /// The ID of the cart resource.
    pub owner_id: Id,
}

/// The input fields for a cart metafield value to set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartMetafieldsSetInput {
    /// The key name of the cart metafield.
    pub key: String,
    /// The ID of the cart resource.
    pub owner_id: Id,
    /// The type of data that the cart metafield stores.
    /// The type of data must be a [supported type](https://shopify.dev/apps/metafields/types).
    #[serde(rename = "type")]
    pub kind: String,
    /// The data to store in the cart metafield. The data is always stored as a string, regardless of the metafield's type.
    pub value: String,
}

/// The input fields for an attribute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeInput {
    /// Key or name of the attribute.
    pub key: String,
    /// Value of the attribute.
    pub value: String,
}

// =============================================================================
// Buyer Identity
// =============================================================================

/// Specifies the input fields to update the buyer information associated with a cart.
/// Buyer identity is used to determine
/// [international pricing](https://shopify.dev/custom-storefronts/internationalization/international-pricing)
/// and should match the customer's shipping address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartBuyerIdentityInput {
    /// The company location of the buyer that is interacting with the cart.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_location_id: Option<Id>,
    /// The country where the buyer is located.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<CountryCode>,
    /// The access token used to identify the customer associated with the cart.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_access_token: Option<String>,
    /// An ordered set of delivery addresses tied to the buyer that is interacting with the cart.
    /// The rank of the preferences is determined by the order of the addresses in the array. Preferences
    /// can be used to populate relevant fields in the checkout flow.
    ///
    /// The input must not contain more than `250` values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_address_preferences: Option<Vec<DeliveryAddressInput>>,
    /// The email address of the buyer that is interacting with the cart.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// The phone number of the buyer that is interacting with the cart.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// A set of preferences tied to the buyer interacting with the cart. Preferences are used to prefill fields in at checkout to streamline information collection.
    /// Preferences are not synced back to the cart if they are overwritten.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<CartPreferencesInput>,
}

/// The input fields represent preferences for the buyer that is interacting with the cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartPreferencesInput {
    /// Delivery preferences can be used to prefill the delivery section in at checkout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery: Option<CartDeliveryPreferenceInput>,
    /// Wallet preferences are used to populate relevant payment fields in the checkout flow.
    /// Accepted value: `["shop_pay"]`.
    ///
    /// The input must not contain more than `250` values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet: Option<Vec<String>>,
}

/// Delivery preferences can be used to prefill the delivery section at checkout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartDeliveryPreferenceInput {
    /// The coordinates of a delivery location in order of preference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<CartDeliveryCoordinatesPreferenceInput>,
    /// The preferred delivery methods such as shipping, local pickup or through pickup points.
    ///
    /// The input must not contain more than `250` values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_method: Option<Vec<PreferenceDeliveryMethodType>>,
    /// The pickup handle prefills checkout fields with the location for either local pickup or pickup points delivery methods.
    /// It accepts both location ID for local pickup and external IDs for pickup points.
    ///
    /// The input must not contain more than `250` values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_handle: Option<Vec<String>>,
}

/// Preferred location used to find the closest pick up point based on coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartDeliveryCoordinatesPreferenceInput {
    /// The two-letter code for the country of the preferred location.
    ///
    /// For example, US.
    pub country_code: CountryCode,
    /// The geographic latitude for a given location. Coordinates are required in order to set pickUpHandle for pickup points.
    pub latitude: f64,
    /// The geographic longitude for a given location. Coordinates are required in order to set pickUpHandle for pickup points.
    pub longitude: f64,
}

/// The input fields for delivery address preferences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryAddressInput {
    /// The ID of a customer address that is associated with the buyer that is interacting with the cart.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_address_id: Option<Id>,
    /// A delivery address preference of a buyer that is interacting with the cart.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<MailingAddressInput>,
    /// Defines what kind of address validation is requested. Defaults to `COUNTRY_CODE_ONLY`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_address_validation_strategy: Option<DeliveryAddressValidationStrategy>,
    /// Whether the given delivery address is considered to be a one-time use address. One-time use addresses do not
    /// get persisted to the buyer's personal addresses when checking out. Defaults to `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_time_use: Option<bool>,
}

/// The input fields for obtaining the buyer's identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyerInput {
    /// The identifier of the company location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_location_id: Option<Id>,
    /// The customer access token retrieved from the [Customer Accounts API](https://shopify.dev/docs/api/customer#step-obtain-access-token).
    pub customer_access_token: String,
}

// =============================================================================
// Payments
// =============================================================================

/// The input fields for updating the payment method that will be used to checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartPaymentInput {
    /// The amount that the customer will be charged at checkout.
    pub amount: MoneyInput,
    /// The input fields to use to checkout a cart without providing a payment method.
    /// Use this payment method input if the total cost of the cart is 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct_payment_method: Option<CartDirectPaymentMethodInput>,
    /// The input fields to use when checking out a cart with a direct payment method (like a credit card).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_payment_method: Option<CartFreePaymentMethodInput>,
    /// An ID of the order placed on the originating platform.
    /// Note that this value doesn't correspond to the Shopify Order ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_identifier: Option<String>,
    /// The input fields to use when checking out a cart with a wallet payment method (like Shop Pay or Apple Pay).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_payment_method: Option<CartWalletPaymentMethodInput>,
}

/// The input fields for submitting direct payment method information for checkout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartDirectPaymentMethodInput {
    /// Indicates if the customer has accepted the subscription terms. Defaults to `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted_subscription_terms: Option<bool>,
    /// The customer's billing address.
    pub billing_address: MailingAddressInput,
    /// The source of the credit card payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_source: Option<CartCardSource>,
    /// The session ID for the direct payment method used to create the payment.
    pub session_id: String,
}

/// The input fields for submitting a billing address without a selected payment method.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartFreePaymentMethodInput {
    /// The customer's billing address.
    pub billing_address: MailingAddressInput,
}

/// The input fields for submitting wallet payment method information for checkout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartWalletPaymentMethodInput {
    /// The payment method information for the Apple Pay wallet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apple_pay_wallet_content: Option<ApplePayWalletContentInput>,
    /// The payment method information for the Shop Pay wallet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_pay_wallet_content: Option<ShopPayWalletContentInput>,
}

/// The input fields for submitting Apple Pay payment method information for checkout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplePayWalletContentInput {
    /// The customer's billing address.
    pub billing_address: MailingAddressInput,
    /// The data for the Apple Pay wallet.
    pub data: String,
    /// The header data for the Apple Pay wallet.
    pub header: ApplePayWalletHeaderInput,
    /// The last digits of the card used to create the payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_digits: Option<String>,
    /// The signature for the Apple Pay wallet.
    pub signature: String,
    /// The version for the Apple Pay wallet.
    pub version: String,
}

/// The input fields for submitting wallet payment method information for checkout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplePayWalletHeaderInput {
    /// The application data for the Apple Pay wallet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_data: Option<String>,
    /// The ephemeral public key for the Apple Pay wallet.
    pub ephemeral_public_key: String,
    /// The public key hash for the Apple Pay wallet.
    pub public_key_hash: String,
    /// The transaction ID for the Apple Pay wallet.
    pub transaction_id: String,
}

/// The input fields for submitting Shop Pay payment method information for checkout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopPayWalletContentInput {
    /// The customer's billing address.
    pub billing_address: MailingAddressInput,
    /// Session token for transaction.
    pub session_token: String,
}

/// The input fields for a monetary value with currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyInput {
    /// Decimal money amount.
    pub amount: Decimal,
    /// Currency of the money.
    pub currency_code: CurrencyCode,
}

// =============================================================================
// Customers
// =============================================================================

/// The input fields required to create a customer access token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerAccessTokenCreateInput {
    /// The email associated to the customer.
    pub email: String,
    /// The login password to be used by the customer.
    pub password: String,
}

/// The input fields to activate a customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerActivateInput {
    /// The activation token required to activate the customer.
    pub activation_token: String,
    /// New password that will be set during activation.
    pub password: String,
}

/// The fields used to create a new customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCreateInput {
    /// Indicates whether the customer has consented to be sent marketing material via email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepts_marketing: Option<bool>,
    /// The customer’s email.
    pub email: String,
    /// The customer’s first name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// The customer’s last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// The login password used by the customer.
    pub password: String,
    /// A unique phone number for the customer.
    ///
    /// Formatted using E.164 standard. For example, _+16135551111_.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// The input fields to reset a customer's password.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResetInput {
    /// New password that will be set as part of the reset password process.
    pub password: String,
    /// The reset token required to reset the customer’s password.
    pub reset_token: String,
}

/// The input fields to update the Customer information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUpdateInput {
    /// Indicates whether the customer has consented to be sent marketing material via email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepts_marketing: Option<bool>,
    /// The customer’s email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// The customer’s first name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// The customer’s last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// The login password used by the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// A unique phone number for the customer.
    ///
    /// Formatted using E.164 standard. For example, _+16135551111_. To remove the phone number, specify `null`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// The input fields to create or update a mailing address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MailingAddressInput {
    /// The first line of the address. Typically the street address or PO Box number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    /// The second line of the address. Typically the number of the apartment, suite, or unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    /// The name of the city, district, village, or town.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// The name of the customer's company or organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// The name of the country.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// The first name of the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// The last name of the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// A unique phone number for the customer.
    ///
    /// Formatted using E.164 standard. For example, _+16135551111_.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// The region of the address, such as the province, state, or district.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    /// The zip or postal code of the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

// =============================================================================
// Products & Search
// =============================================================================

/// The input fields for a filter used to view a subset of products in a collection.
/// By default, the `available` and `price` filters are enabled. Filters are customized with the Shopify Search & Discovery app.
/// Learn more about [customizing storefront filtering](https://help.shopify.com/manual/online-store/themes/customizing-themes/storefront-filters).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    /// Filter on if the product is available for sale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    /// A product category to filter on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryFilter>,
    /// A range of prices to filter with-in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceRangeFilter>,
    /// A product metafield to filter on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_metafield: Option<MetafieldFilter>,
    /// The product type to filter on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    /// The product vendor to filter on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_vendor: Option<String>,
    /// A product tag to filter on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// A standard product attribute metafield to filter on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxonomy_metafield: Option<TaxonomyMetafieldFilter>,
    /// A variant metafield to filter on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_metafield: Option<MetafieldFilter>,
    /// A variant option to filter on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_option: Option<VariantOptionFilter>,
}

/// A filter used to view a subset of products in a collection matching a specific category value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryFilter {
    /// The id of the category to filter on.
    pub id: String,
}

/// A filter used to view a subset of products in a collection matching a specific metafield value.
///
/// Only the following metafield types are currently supported:
/// - `number_integer`
/// - `number_decimal`
/// - `single_line_text_field`
/// - `boolean` as of 2022-04.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetafieldFilter {
    /// The key of the metafield to filter on.
    pub key: String,
    /// The namespace of the metafield to filter on.
    pub namespace: String,
    /// The value of the metafield.
    pub value: String,
}

/// The input fields for a filter used to view a subset of products in a collection matching a specific price range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRangeFilter {
    /// The maximum price in the range. Empty indicates no max price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// The minimum price in the range. Defaults to zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
}

/// A filter used to view a subset of products in a collection matching a specific taxonomy metafield value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonomyMetafieldFilter {
    /// The key of the metafield to filter on.
    pub key: String,
    /// The namespace of the metafield to filter on.
    pub namespace: String,
    /// The value of the metafield.
    pub value: String,
}

/// The input fields for a filter used to view a subset of products in a collection matching a specific variant option.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantOptionFilter {
    /// The name of the variant option to filter on.
    pub name: String,
    /// The value of the variant option to filter on.
    pub value: String,
}

/// The input fields required for a selected option.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedOptionInput {
    /// The product option’s name.
    pub name: String,
    /// The product option’s value.
    pub value: String,
}

/// The input fields to identify a metafield on an owner resource by namespace and key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HasMetafieldsIdentifier {
    /// The identifier for the metafield.
    pub key: String,
    /// The container the metafield belongs to. If omitted, the app-reserved namespace will be used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

/// The available options for transforming an image.
///
/// All transformation options are considered best effort. Any transformation
/// that the original image type doesn't support will be ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageTransformInput {
    /// The region of the image to remain after cropping.
    /// Must be used in conjunction with the `maxWidth` and/or `maxHeight` fields,
    /// where the `maxWidth` and `maxHeight` aren't equal.
    /// The `crop` argument should coincide with the smaller value. A smaller `maxWidth` indicates a `LEFT` or `RIGHT` crop, while
    /// a smaller `maxHeight` indicates a `TOP` or `BOTTOM` crop. For example, `{
    /// maxWidth: 5, maxHeight: 10, crop: LEFT }` will result
    /// in an image with a width of 5 and height of 10, where the right side of the image
    /// is removed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop: Option<CropRegion>,
    /// Image height in pixels between 1 and 5760.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<i32>,
    /// Image width in pixels between 1 and 5760.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<i32>,
    /// Convert the source image into the preferred content type.
    /// Supported conversions: `.svg` to `.png`, any file type to `.jpg`, and any file type to `.webp`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_content_type: Option<ImageContentType>,
    /// Image size multiplier for high-resolution retina displays. Must be within 1..3. Defaults to `1`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<i32>,
}

/// The input fields used to specify a geographical location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoCoordinateInput {
    /// The coordinate's latitude value.
    pub latitude: f64,
    /// The coordinate's longitude value.
    pub longitude: f64,
}

/// The input fields used to retrieve a metaobject by handle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaobjectHandleInput {
    /// The handle of the metaobject.
    pub handle: String,
    /// The type of the metaobject.
    #[serde(rename = "type")]
    pub kind: String,
}

// =============================================================================
// Shop Pay Payment Requests
// =============================================================================

/// The input fields represent a Shop Pay payment request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopPayPaymentRequestInput {
    /// The delivery methods for the payment request.
    ///
    /// The input must not contain more than `250` values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_methods: Option<Vec<ShopPayPaymentRequestDeliveryMethodInput>>,
    /// The discount codes for the payment request.
    ///
    /// The input must not contain more than `250` values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_codes: Option<Vec<String>>,
    /// The discounts for the payment request order.
    ///
    /// The input must not contain more than `250` values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounts: Option<Vec<ShopPayPaymentRequestDiscountInput>>,
    /// The line items for the payment request.
    ///
    /// The input must not contain more than `250` values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<ShopPayPaymentRequestLineItemInput>>,
    /// The locale for the payment request.
    pub locale: String,
    /// The encrypted payment method for the payment request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    /// The presentment currency for the payment request.
    pub presentment_currency: CurrencyCode,
    /// The delivery method type for the payment request. Defaults to `SHIPPING`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_delivery_method_type: Option<ShopPayPaymentRequestDeliveryMethodType>,
    /// The shipping lines for the payment request.
    ///
    /// The input must not contain more than `250` values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_lines: Option<Vec<ShopPayPaymentRequestShippingLineInput>>,
    /// The subtotal amount for the payment request.
    pub subtotal: MoneyInput,
    /// The total amount for the payment request.
    pub total: MoneyInput,
    /// The total shipping price for the payment request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_shipping_price: Option<ShopPayPaymentRequestTotalShippingPriceInput>,
    /// The total tax for the payment request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax: Option<MoneyInput>,
}

/// The input fields to create a delivery method for a Shop Pay payment request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopPayPaymentRequestDeliveryMethodInput {
    /// The amount for the delivery method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<MoneyInput>,
    /// The code of the delivery method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// The detail about when the delivery may be expected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_expectation_label: Option<String>,
    /// The detail of the delivery method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// The label of the delivery method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// The maximum delivery date for the delivery method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_delivery_date: Option<Iso8601DateTime>,
    /// The minimum delivery date for the delivery method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_delivery_date: Option<Iso8601DateTime>,
}

/// The input fields to create a discount for a Shop Pay payment request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopPayPaymentRequestDiscountInput {
    /// The amount of the discount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<MoneyInput>,
    /// The label of the discount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// The input fields to create an image for a Shop Pay payment request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopPayPaymentRequestImageInput {
    /// The alt text of the image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    /// The source URL of the image.
    pub url: String,
}

/// The input fields to create a line item for a Shop Pay payment request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopPayPaymentRequestLineItemInput {
    /// The final item price for the line item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_item_price: Option<MoneyInput>,
    /// The final line price for the line item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_line_price: Option<MoneyInput>,
    /// The image of the line item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ShopPayPaymentRequestImageInput>,
    /// The item discounts for the line item.
    ///
    /// The input must not contain more than `250` values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_discounts: Option<Vec<ShopPayPaymentRequestDiscountInput>>,
    /// The label of the line item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// The line discounts for the line item.
    ///
    /// The input must not contain more than `250` values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_discounts: Option<Vec<ShopPayPaymentRequestDiscountInput>>,
    /// The original item price for the line item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_item_price: Option<MoneyInput>,
    /// The original line price for the line item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_line_price: Option<MoneyInput>,
    /// The quantity of the line item.
    pub quantity: i32,
    /// Whether the line item requires shipping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_shipping: Option<bool>,
    /// The SKU of the line item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
}

/// The input fields to create a shipping line for a Shop Pay payment request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopPayPaymentRequestShippingLineInput {
    /// The amount for the shipping line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<MoneyInput>,
    /// The code of the shipping line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// The label of the shipping line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// The input fields to create a shipping total for a Shop Pay payment request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopPayPaymentRequestTotalShippingPriceInput {
    /// The discounts for the shipping total.
    ///
    /// The input must not contain more than `250` values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounts: Option<Vec<ShopPayPaymentRequestDiscountInput>>,
    /// The final total for the shipping total.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_total: Option<MoneyInput>,
    /// The original total for the shipping total.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_total: Option<MoneyInput>,
}

impl AttributeInput {
    /// Create an attribute from a key and value.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl CartLineInput {
    /// A line for `quantity` units of a merchandise.
    #[must_use]
    pub fn new(merchandise_id: impl Into<Id>, quantity: i32) -> Self {
        Self {
            merchandise_id: merchandise_id.into(),
            quantity: Some(quantity),
            ..Self::default()
        }
    }

    /// The quantity to add, applying the schema default of one.
    #[must_use]
    pub fn quantity_or_default(&self) -> i32 {
        self.quantity.unwrap_or(1)
    }
}

impl HasMetafieldsIdentifier {
    /// Identify a metafield by namespace and key.
    #[must_use]
    pub fn new(namespace: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            namespace: Some(namespace.into()),
        }
    }
}

impl SelectedOptionInput {
    /// Select an option value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl ProductFilter {
    /// Filter on products available for sale.
    #[must_use]
    pub fn available() -> Self {
        Self {
            available: Some(true),
            ..Self::default()
        }
    }

    /// Filter on a price range.
    #[must_use]
    pub fn price(min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            price: Some(PriceRangeFilter { max, min }),
            ..Self::default()
        }
    }
}

impl From<MoneyV2> for MoneyInput {
    fn from(money: MoneyV2) -> Self {
        Self {
            amount: money.amount,
            currency_code: money.currency_code,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unset_fields_are_omitted() {
        let input = CustomerUpdateInput {
            first_name: Some("Ana".to_owned()),
            ..CustomerUpdateInput::default()
        };
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            serde_json::json!({ "firstName": "Ana" })
        );
    }

    #[test]
    fn test_required_fields_always_present() {
        let input = CartMetafieldsSetInput {
            key: "custom.gift_message".to_owned(),
            owner_id: Id::new("gid://shopify/Cart/c1"),
            kind: "single_line_text_field".to_owned(),
            value: "Happy birthday".to_owned(),
        };
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            serde_json::json!({
                "key": "custom.gift_message",
                "ownerId": "gid://shopify/Cart/c1",
                "type": "single_line_text_field",
                "value": "Happy birthday"
            })
        );
    }

    #[test]
    fn test_product_filter_shapes() {
        assert_eq!(
            serde_json::to_value(ProductFilter::price(Some(10.0), None)).unwrap(),
            serde_json::json!({ "price": { "min": 10.0 } })
        );
        assert_eq!(
            serde_json::to_value(ProductFilter::available()).unwrap(),
            serde_json::json!({ "available": true })
        );
    }

    #[test]
    fn test_cart_line_default_quantity() {
        let line: CartLineInput = serde_json::from_value(serde_json::json!({
            "merchandiseId": "gid://shopify/ProductVariant/1"
        }))
        .unwrap();
        assert_eq!(line.quantity, None);
        assert_eq!(line.quantity_or_default(), 1);
    }

    #[test]
    fn test_money_input_from_money() {
        let money = MoneyV2::new("12.50".parse().unwrap(), CurrencyCode::Eur);
        let input = MoneyInput::from(money);
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            serde_json::json!({ "amount": "12.50", "currencyCode": "EUR" })
        );
    }
}
