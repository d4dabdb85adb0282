//! Cart, checkout and discount enums.

use serde::{Deserialize, Serialize};

use super::impl_schema_enum;

/// Card brand, such as Visa or Mastercard, which can be used for payments.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CardBrand {
    /// American Express.
    AmericanExpress,
    /// Diners Club.
    DinersClub,
    /// Discover.
    Discover,
    /// JCB.
    Jcb,
    /// Mastercard.
    Mastercard,
    /// Visa.
    Visa,
}

/// The card source used for a cart payment.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CartCardSource {
    /// The credit card was provided by a third party and vaulted on their system.
    /// Using this value requires a separate permission from Shopify.
    SavedCreditCard,
}

/// Defines what type of merchandise is in the delivery group.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CartDeliveryGroupType {
    /// The delivery group only contains merchandise that is either a one time purchase or a first delivery of
    /// subscription merchandise.
    OneTimePurchase,
    /// The delivery group only contains subscription merchandise.
    Subscription,
}

/// Possible error codes that can be returned by `CartUserError`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CartErrorCode {
    /// The specified address field contains emojis.
    AddressFieldContainsEmojis,
    /// The specified address field contains HTML tags.
    AddressFieldContainsHtmlTags,
    /// The specified address field contains a URL.
    AddressFieldContainsUrl,
    /// The specified address field does not match the expected pattern.
    AddressFieldDoesNotMatchExpectedPattern,
    /// The specified address field is required.
    AddressFieldIsRequired,
    /// The specified address field is too long.
    AddressFieldIsTooLong,
    /// The input value is invalid.
    Invalid,
    /// Company location not found or not allowed.
    InvalidCompanyLocation,
    /// The delivery address was not found.
    InvalidDeliveryAddressId,
    /// Delivery group was not found in cart.
    InvalidDeliveryGroup,
    /// Delivery option was not valid.
    InvalidDeliveryOption,
    /// The quantity must be a multiple of the specified increment.
    InvalidIncrement,
    /// Merchandise line was not found in cart.
    InvalidMerchandiseLine,
    /// The metafields were not valid.
    InvalidMetafields,
    /// The payment wasn't valid.
    InvalidPayment,
    /// Cannot update payment on an empty cart.
    InvalidPaymentEmptyCart,
    /// The given zip code is invalid for the provided country.
    InvalidZipCodeForCountry,
    /// The given zip code is invalid for the provided province.
    InvalidZipCodeForProvince,
    /// The input value should be less than the maximum value allowed.
    LessThan,
    /// The quantity must be below the specified maximum for the item.
    MaximumExceeded,
    /// The merchandise does not have enough stock.
    MerchandiseNotEnoughStock,
    /// The merchandise is out of stock.
    MerchandiseOutOfStock,
    /// The quantity must be above the specified minimum for the item.
    MinimumNotMet,
    /// The customer access token is required when setting a company location.
    MissingCustomerAccessToken,
    /// Missing discount code.
    MissingDiscountCode,
    /// Missing note.
    MissingNote,
    /// The note length must be below the specified maximum.
    NoteTooLong,
    /// Only one delivery address can be selected.
    OnlyOneDeliveryAddressCanBeSelected,
    /// The payment method is not supported.
    PaymentMethodNotSupported,
    /// The given province cannot be found.
    ProvinceNotFound,
    /// The selling plan is not applicable.
    SellingPlanNotApplicable,
    /// An error occurred while saving the cart.
    ServiceUnavailable,
    /// Too many delivery addresses on Cart.
    TooManyDeliveryAddresses,
    /// A general error occurred during address validation.
    UnspecifiedAddressError,
    /// Validation failed.
    ValidationCustom,
    /// The given zip code is unsupported.
    ZipCodeNotSupported,
}

/// The code for the cart warning.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CartWarningCode {
    /// The merchandise does not have enough stock.
    MerchandiseNotEnoughStock,
    /// The merchandise is out of stock.
    MerchandiseOutOfStock,
    /// Gift cards are not available as a payment method.
    PaymentsGiftCardsUnavailable,
}

/// The code of the error that occurred during a cart completion attempt.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CompletionErrorCode {
    Error,
    InventoryReservationError,
    PaymentAmountTooSmall,
    PaymentCallIssuer,
    PaymentCardDeclined,
    PaymentError,
    PaymentGatewayNotEnabledError,
    PaymentInsufficientFunds,
    PaymentInvalidBillingAddress,
    PaymentInvalidCreditCard,
    PaymentInvalidCurrency,
    PaymentInvalidPaymentMethod,
    PaymentTransientError,
}

/// Defines the types of available validation strategies for delivery addresses.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryAddressValidationStrategy {
    /// Only the country code is validated.
    CountryCodeOnly,
    /// No validation is performed.
    NoValidation,
    /// Validate the country code, province code, and zip code against the address.
    Strict,
}

/// List of different delivery method types.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryMethodType {
    /// Local Delivery.
    Local,
    /// None.
    None,
    /// Shipping to a Pickup Point.
    PickupPoint,
    /// Local Pickup.
    PickUp,
    /// Retail.
    Retail,
    /// Shipping.
    Shipping,
}

/// Digital wallet, such as Apple Pay, which can be used for accelerated checkouts.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DigitalWallet {
    /// Android Pay.
    AndroidPay,
    /// Apple Pay.
    ApplePay,
    /// Facebook Pay.
    FacebookPay,
    /// Google Pay.
    GooglePay,
    /// Shopify Pay.
    ShopifyPay,
}

/// The method by which the discount's value is allocated onto its entitled lines.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountApplicationAllocationMethod {
    /// The value is spread across all entitled lines.
    Across,
    /// The value is applied onto every entitled line.
    Each,
    /// The value is specifically applied onto a particular line.
    ///
    /// Deprecated: use `ACROSS` instead.
    One,
}

/// The lines on the order to which the discount is applied, of the type defined by
/// the discount application's `targetType`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountApplicationTargetSelection {
    /// The discount is allocated onto all the lines.
    All,
    /// The discount is allocated onto only the lines that it's entitled for.
    Entitled,
    /// The discount is allocated onto explicitly chosen lines.
    Explicit,
}

/// The type of line (i.e. line item or shipping line) on an order that the discount is applicable towards.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountApplicationTargetType {
    /// The discount applies onto line items.
    LineItem,
    /// The discount applies onto shipping lines.
    ShippingLine,
}

/// The preferred delivery methods such as shipping, local pickup or through pickup points.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PreferenceDeliveryMethodType {
    /// A delivery method used to let buyers collect purchases at designated locations like parcel lockers.
    PickupPoint,
    /// A delivery method used to let buyers receive items directly from a specific location within an area.
    PickUp,
    /// A delivery method used to send items directly to a buyer’s specified address.
    Shipping,
}

/// The code of the error that occurred during cart submit for completion.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionErrorCode {
    BuyerIdentityEmailIsInvalid,
    BuyerIdentityEmailRequired,
    BuyerIdentityPhoneIsInvalid,
    #[serde(rename = "DELIVERY_ADDRESS1_INVALID")]
    #[strum(serialize = "DELIVERY_ADDRESS1_INVALID")]
    DeliveryAddress1Invalid,
    #[serde(rename = "DELIVERY_ADDRESS1_REQUIRED")]
    #[strum(serialize = "DELIVERY_ADDRESS1_REQUIRED")]
    DeliveryAddress1Required,
    #[serde(rename = "DELIVERY_ADDRESS1_TOO_LONG")]
    #[strum(serialize = "DELIVERY_ADDRESS1_TOO_LONG")]
    DeliveryAddress1TooLong,
    #[serde(rename = "DELIVERY_ADDRESS2_INVALID")]
    #[strum(serialize = "DELIVERY_ADDRESS2_INVALID")]
    DeliveryAddress2Invalid,
    #[serde(rename = "DELIVERY_ADDRESS2_REQUIRED")]
    #[strum(serialize = "DELIVERY_ADDRESS2_REQUIRED")]
    DeliveryAddress2Required,
    #[serde(rename = "DELIVERY_ADDRESS2_TOO_LONG")]
    #[strum(serialize = "DELIVERY_ADDRESS2_TOO_LONG")]
    DeliveryAddress2TooLong,
    DeliveryAddressRequired,
    DeliveryCityInvalid,
    DeliveryCityRequired,
    DeliveryCityTooLong,
    DeliveryCompanyInvalid,
    DeliveryCompanyRequired,
    DeliveryCompanyTooLong,
    DeliveryCountryRequired,
    DeliveryFirstNameInvalid,
    DeliveryFirstNameRequired,
    DeliveryFirstNameTooLong,
    DeliveryInvalidPostalCodeForCountry,
    DeliveryInvalidPostalCodeForZone,
    DeliveryLastNameInvalid,
    DeliveryLastNameRequired,
    DeliveryLastNameTooLong,
    DeliveryNoDeliveryAvailable,
    DeliveryNoDeliveryAvailableForMerchandiseLine,
    DeliveryOptionsPhoneNumberInvalid,
    DeliveryOptionsPhoneNumberRequired,
    DeliveryPhoneNumberInvalid,
    DeliveryPhoneNumberRequired,
    DeliveryPostalCodeInvalid,
    DeliveryPostalCodeRequired,
    DeliveryZoneNotFound,
    DeliveryZoneRequiredForCountry,
    Error,
    MerchandiseLineLimitReached,
    MerchandiseNotApplicable,
    MerchandiseNotEnoughStockAvailable,
    MerchandiseOutOfStock,
    MerchandiseProductNotPublished,
    NoDeliveryGroupSelected,
    #[serde(rename = "PAYMENTS_ADDRESS1_INVALID")]
    #[strum(serialize = "PAYMENTS_ADDRESS1_INVALID")]
    PaymentsAddress1Invalid,
    #[serde(rename = "PAYMENTS_ADDRESS1_REQUIRED")]
    #[strum(serialize = "PAYMENTS_ADDRESS1_REQUIRED")]
    PaymentsAddress1Required,
    #[serde(rename = "PAYMENTS_ADDRESS1_TOO_LONG")]
    #[strum(serialize = "PAYMENTS_ADDRESS1_TOO_LONG")]
    PaymentsAddress1TooLong,
    #[serde(rename = "PAYMENTS_ADDRESS2_INVALID")]
    #[strum(serialize = "PAYMENTS_ADDRESS2_INVALID")]
    PaymentsAddress2Invalid,
    #[serde(rename = "PAYMENTS_ADDRESS2_REQUIRED")]
    #[strum(serialize = "PAYMENTS_ADDRESS2_REQUIRED")]
    PaymentsAddress2Required,
    #[serde(rename = "PAYMENTS_ADDRESS2_TOO_LONG")]
    #[strum(serialize = "PAYMENTS_ADDRESS2_TOO_LONG")]
    PaymentsAddress2TooLong,
    PaymentsBillingAddressZoneNotFound,
    PaymentsBillingAddressZoneRequiredForCountry,
    PaymentsCityInvalid,
    PaymentsCityRequired,
    PaymentsCityTooLong,
    PaymentsCompanyInvalid,
    PaymentsCompanyRequired,
    PaymentsCompanyTooLong,
    PaymentsCountryRequired,
    PaymentsCreditCardBaseExpired,
    PaymentsCreditCardBaseGatewayNotSupported,
    PaymentsCreditCardBaseInvalidStartDateOrIssueNumberForDebit,
    PaymentsCreditCardBrandNotSupported,
    PaymentsCreditCardFirstNameBlank,
    PaymentsCreditCardGeneric,
    PaymentsCreditCardLastNameBlank,
    PaymentsCreditCardMonthInclusion,
    PaymentsCreditCardNameInvalid,
    PaymentsCreditCardNumberInvalid,
    PaymentsCreditCardNumberInvalidFormat,
    PaymentsCreditCardSessionId,
    PaymentsCreditCardVerificationValueBlank,
    PaymentsCreditCardVerificationValueInvalidForCardType,
    PaymentsCreditCardYearExpired,
    PaymentsCreditCardYearInvalidExpiryYear,
    PaymentsFirstNameInvalid,
    PaymentsFirstNameRequired,
    PaymentsFirstNameTooLong,
    PaymentsInvalidPostalCodeForCountry,
    PaymentsInvalidPostalCodeForZone,
    PaymentsLastNameInvalid,
    PaymentsLastNameRequired,
    PaymentsLastNameTooLong,
    PaymentsMethodUnavailable,
    PaymentsMethodUnsupported,
    PaymentsPhoneNumberInvalid,
    PaymentsPhoneNumberRequired,
    PaymentsPostalCodeInvalid,
    PaymentsPostalCodeRequired,
    PaymentsShopifyPaymentsRequired,
    PaymentsUnacceptablePaymentAmount,
    PaymentsWalletContentMissing,
    TaxesDeliveryGroupIdNotFound,
    TaxesLineIdNotFound,
    TaxesMustBeDefined,
}

impl_schema_enum!(
    CardBrand,
    CartCardSource,
    CartDeliveryGroupType,
    CartErrorCode,
    CartWarningCode,
    CompletionErrorCode,
    DeliveryAddressValidationStrategy,
    DeliveryMethodType,
    DigitalWallet,
    DiscountApplicationAllocationMethod,
    DiscountApplicationTargetSelection,
    DiscountApplicationTargetType,
    PreferenceDeliveryMethodType,
    SubmissionErrorCode,
);

impl CartErrorCode {
    /// Whether the error concerns the stock level of a merchandise line.
    #[must_use]
    pub const fn is_stock_error(self) -> bool {
        matches!(
            self,
            Self::MerchandiseNotEnoughStock | Self::MerchandiseOutOfStock
        )
    }
}

impl SubmissionErrorCode {
    /// Whether the error is about the delivery address or delivery options.
    #[must_use]
    pub fn is_delivery_error(self) -> bool {
        let literal: &'static str = self.into();
        literal.starts_with("DELIVERY_") || literal == "NO_DELIVERY_GROUP_SELECTED"
    }

    /// Whether the error is about payment details.
    #[must_use]
    pub fn is_payment_error(self) -> bool {
        let literal: &'static str = self.into();
        literal.starts_with("PAYMENTS_")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_error_code_from_response() {
        let code: CartErrorCode = serde_json::from_str("\"MERCHANDISE_OUT_OF_STOCK\"").unwrap();
        assert_eq!(code, CartErrorCode::MerchandiseOutOfStock);
        assert!(code.is_stock_error());
        assert!(!CartErrorCode::Invalid.is_stock_error());
    }

    #[test]
    fn test_submission_error_groups() {
        assert!(SubmissionErrorCode::DeliveryAddress2TooLong.is_delivery_error());
        assert!(SubmissionErrorCode::NoDeliveryGroupSelected.is_delivery_error());
        assert!(SubmissionErrorCode::PaymentsCreditCardGeneric.is_payment_error());
        assert!(!SubmissionErrorCode::Error.is_payment_error());
    }

    #[test]
    fn test_pick_up_literal() {
        assert_eq!(DeliveryMethodType::PickUp.to_string(), "PICK_UP");
        assert_eq!(DeliveryMethodType::PickupPoint.to_string(), "PICKUP_POINT");
    }
}
