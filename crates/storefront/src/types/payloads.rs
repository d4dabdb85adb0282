//! Mutation payloads.
//!
//! Every mutation returns a payload carrying its result next to a list of
//! user errors. Business failures (an out-of-stock line, a bad password)
//! arrive as data in that list, never as GraphQL errors. [`Payload`] gives
//! uniform access to it.

use serde::{Deserialize, Serialize};
use storefront_schema_core::Id;

use super::{
    Cart, CartUserError, CartWarning, Customer, CustomerAccessToken, CustomerUserError,
    MailingAddress, Metafield, MetafieldDeleteUserError, MetafieldsSetUserError,
    ShopPayPaymentRequestReceipt, ShopPayPaymentRequestSession, UserError,
    UserErrorsShopPayPaymentRequestSessionUserErrors,
};
use crate::interfaces::DisplayableError;
use crate::unions::{CartPrepareForCompletionResult, CartSubmitForCompletionResult};

/// A mutation payload and the user errors it reports.
pub trait Payload {
    /// The user error type of this payload.
    type Error: DisplayableError;

    /// The errors that occurred while executing the mutation.
    ///
    /// Customer payloads return `customerUserErrors`; the deprecated
    /// `userErrors` list carries no error codes.
    fn user_errors(&self) -> &[Self::Error];

    /// Whether the mutation reported any user error.
    fn has_errors(&self) -> bool {
        !self.user_errors().is_empty()
    }

    /// The messages of every user error, in order.
    fn error_messages(&self) -> Vec<&str> {
        self.user_errors().iter().map(DisplayableError::message).collect()
    }
}

macro_rules! impl_payload {
    ($name:ident, $field:ident: $error:ty) => {
        impl Payload for $name {
            type Error = $error;

            fn user_errors(&self) -> &[$error] {
                &self.$field
            }
        }
    };
}

/// Declare a payload of the shared cart mutation shape.
macro_rules! cart_payload {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            /// The updated cart.
            pub cart: Option<Cart>,
            /// The list of errors that occurred from executing the mutation.
            pub user_errors: Vec<CartUserError>,
            /// A list of warnings that occurred during the mutation.
            pub warnings: Vec<CartWarning>,
        }

        impl_payload!($name, user_errors: CartUserError);
    };
}

// =============================================================================
// Cart
// =============================================================================

cart_payload! {
    /// Return type for `cartAttributesUpdate` mutation.
    CartAttributesUpdatePayload
}

cart_payload! {
    /// Return type for `cartBuyerIdentityUpdate` mutation.
    CartBuyerIdentityUpdatePayload
}

cart_payload! {
    /// Return type for `cartCreate` mutation.
    CartCreatePayload
}

cart_payload! {
    /// Return type for `cartDiscountCodesUpdate` mutation.
    CartDiscountCodesUpdatePayload
}

cart_payload! {
    /// Return type for `cartGiftCardCodesUpdate` mutation.
    CartGiftCardCodesUpdatePayload
}

cart_payload! {
    /// Return type for `cartLinesAdd` mutation.
    CartLinesAddPayload
}

cart_payload! {
    /// Return type for `cartLinesRemove` mutation.
    CartLinesRemovePayload
}

cart_payload! {
    /// Return type for `cartLinesUpdate` mutation.
    CartLinesUpdatePayload
}

cart_payload! {
    /// Return type for `cartNoteUpdate` mutation.
    CartNoteUpdatePayload
}

cart_payload! {
    /// Return type for `cartPaymentUpdate` mutation.
    CartPaymentUpdatePayload
}

cart_payload! {
    /// Return type for `cartSelectedDeliveryOptionsUpdate` mutation.
    CartSelectedDeliveryOptionsUpdatePayload
}

// =============================================================================
// Cart Metafields & Completion
// =============================================================================

/// Return type for `cartMetafieldDelete` mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartMetafieldDeletePayload {
    /// The ID of the deleted cart metafield.
    pub deleted_id: Option<Id>,
    /// The list of errors that occurred from executing the mutation.
    pub user_errors: Vec<MetafieldDeleteUserError>,
}

/// Return type for `cartMetafieldsSet` mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartMetafieldsSetPayload {
    /// The list of cart metafields that were set.
    pub metafields: Option<Vec<Metafield>>,
    /// The list of errors that occurred from executing the mutation.
    pub user_errors: Vec<MetafieldsSetUserError>,
}

/// Return type for `cartPrepareForCompletion` mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartPrepareForCompletionPayload {
    /// The result of cart preparation for completion.
    pub result: Option<CartPrepareForCompletionResult>,
    /// The list of errors that occurred from executing the mutation.
    pub user_errors: Vec<CartUserError>,
}

/// Return type for `cartSubmitForCompletion` mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSubmitForCompletionPayload {
    /// The result of cart submission for completion.
    pub result: CartSubmitForCompletionResult,
    /// The list of errors that occurred from executing the mutation.
    pub user_errors: Vec<CartUserError>,
}

// =============================================================================
// Customer Access Tokens
// =============================================================================

/// Return type for `customerAccessTokenCreate` mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerAccessTokenCreatePayload {
    /// The newly created customer access token object.
    pub customer_access_token: Option<CustomerAccessToken>,
    /// The list of errors that occurred from executing the mutation.
    pub customer_user_errors: Vec<CustomerUserError>,
    /// The list of errors that occurred from executing the mutation.
    ///
    /// Deprecated: use `customerUserErrors` instead.
    pub user_errors: Vec<UserError>,
}

/// Return type for `customerAccessTokenCreateWithMultipass` mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerAccessTokenCreateWithMultipassPayload {
    /// An access token object associated with the customer.
    pub customer_access_token: Option<CustomerAccessToken>,
    /// The list of errors that occurred from executing the mutation.
    pub customer_user_errors: Vec<CustomerUserError>,
}

/// Return type for `customerAccessTokenDelete` mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerAccessTokenDeletePayload {
    /// The destroyed access token.
    pub deleted_access_token: Option<String>,
    /// ID of the destroyed customer access token.
    pub deleted_customer_access_token_id: Option<String>,
    /// The list of errors that occurred from executing the mutation.
    pub user_errors: Vec<UserError>,
}

/// Return type for `customerAccessTokenRenew` mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerAccessTokenRenewPayload {
    /// The renewed customer access token object.
    pub customer_access_token: Option<CustomerAccessToken>,
    /// The list of errors that occurred from executing the mutation.
    pub user_errors: Vec<UserError>,
}

// =============================================================================
// Customer Accounts
// =============================================================================

/// Return type for `customerActivate` mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerActivatePayload {
    /// The customer object.
    pub customer: Option<Customer>,
    /// A newly created customer access token object for the customer.
    pub customer_access_token: Option<CustomerAccessToken>,
    /// The list of errors that occurred from executing the mutation.
    pub customer_user_errors: Vec<CustomerUserError>,
    /// The list of errors that occurred from executing the mutation.
    ///
    /// Deprecated: use `customerUserErrors` instead.
    pub user_errors: Vec<UserError>,
}

/// Return type for `customerActivateByUrl` mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerActivateByUrlPayload {
    /// The customer that was activated.
    pub customer: Option<Customer>,
    /// A new customer access token for the customer.
    pub customer_access_token: Option<CustomerAccessToken>,
    /// The list of errors that occurred from executing the mutation.
    pub customer_user_errors: Vec<CustomerUserError>,
}

/// Return type for `customerCreate` mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCreatePayload {
    /// The created customer object.
    pub customer: Option<Customer>,
    /// The list of errors that occurred from executing the mutation.
    pub customer_user_errors: Vec<CustomerUserError>,
    /// The list of errors that occurred from executing the mutation.
    ///
    /// Deprecated: use `customerUserErrors` instead.
    pub user_errors: Vec<UserError>,
}

/// Return type for `customerRecover` mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecoverPayload {
    /// The list of errors that occurred from executing the mutation.
    pub customer_user_errors: Vec<CustomerUserError>,
    /// The list of errors that occurred from executing the mutation.
    ///
    /// Deprecated: use `customerUserErrors` instead.
    pub user_errors: Vec<UserError>,
}

/// Return type for `customerReset` mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResetPayload {
    /// The customer object which was reset.
    pub customer: Option<Customer>,
    /// A newly created customer access token object for the customer.
    pub customer_access_token: Option<CustomerAccessToken>,
    /// The list of errors that occurred from executing the mutation.
    pub customer_user_errors: Vec<CustomerUserError>,
    /// The list of errors that occurred from executing the mutation.
    ///
    /// Deprecated: use `customerUserErrors` instead.
    pub user_errors: Vec<UserError>,
}

/// Return type for `customerResetByUrl` mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResetByUrlPayload {
    /// The customer object which was reset.
    pub customer: Option<Customer>,
    /// A newly created customer access token object for the customer.
    pub customer_access_token: Option<CustomerAccessToken>,
    /// The list of errors that occurred from executing the mutation.
    pub customer_user_errors: Vec<CustomerUserError>,
    /// The list of errors that occurred from executing the mutation.
    ///
    /// Deprecated: use `customerUserErrors` instead.
    pub user_errors: Vec<UserError>,
}

/// Return type for `customerUpdate` mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUpdatePayload {
    /// The updated customer object.
    pub customer: Option<Customer>,
    /// The newly created customer access token. If the customer's password is updated, all previous access tokens
    /// (including the one used to perform this mutation) become invalid, and a new token is generated.
    pub customer_access_token: Option<CustomerAccessToken>,
    /// The list of errors that occurred from executing the mutation.
    pub customer_user_errors: Vec<CustomerUserError>,
    /// The list of errors that occurred from executing the mutation.
    ///
    /// Deprecated: use `customerUserErrors` instead.
    pub user_errors: Vec<UserError>,
}

// =============================================================================
// Customer Addresses
// =============================================================================

/// Return type for `customerAddressCreate` mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerAddressCreatePayload {
    /// The new customer address object.
    pub customer_address: Option<MailingAddress>,
    /// The list of errors that occurred from executing the mutation.
    pub customer_user_errors: Vec<CustomerUserError>,
    /// The list of errors that occurred from executing the mutation.
    ///
    /// Deprecated: use `customerUserErrors` instead.
    pub user_errors: Vec<UserError>,
}

/// Return type for `customerAddressDelete` mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerAddressDeletePayload {
    /// The list of errors that occurred from executing the mutation.
    pub customer_user_errors: Vec<CustomerUserError>,
    /// ID of the deleted customer address.
    pub deleted_customer_address_id: Option<String>,
    /// The list of errors that occurred from executing the mutation.
    ///
    /// Deprecated: use `customerUserErrors` instead.
    pub user_errors: Vec<UserError>,
}

/// Return type for `customerAddressUpdate` mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerAddressUpdatePayload {
    /// The customer’s updated mailing address.
    pub customer_address: Option<MailingAddress>,
    /// The list of errors that occurred from executing the mutation.
    pub customer_user_errors: Vec<CustomerUserError>,
    /// The list of errors that occurred from executing the mutation.
    ///
    /// Deprecated: use `customerUserErrors` instead.
    pub user_errors: Vec<UserError>,
}

/// Return type for `customerDefaultAddressUpdate` mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDefaultAddressUpdatePayload {
    /// The updated customer object.
    pub customer: Option<Customer>,
    /// The list of errors that occurred from executing the mutation.
    pub customer_user_errors: Vec<CustomerUserError>,
    /// The list of errors that occurred from executing the mutation.
    ///
    /// Deprecated: use `customerUserErrors` instead.
    pub user_errors: Vec<UserError>,
}

// =============================================================================
// Shop Pay
// =============================================================================

/// Return type for `shopPayPaymentRequestSessionCreate` mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopPayPaymentRequestSessionCreatePayload {
    /// The new Shop Pay payment request session object.
    pub shop_pay_payment_request_session: Option<ShopPayPaymentRequestSession>,
    /// Error codes for failed Shop Pay payment request session mutations.
    pub user_errors: Vec<UserErrorsShopPayPaymentRequestSessionUserErrors>,
}

/// Return type for `shopPayPaymentRequestSessionSubmit` mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopPayPaymentRequestSessionSubmitPayload {
    /// The checkout on which the payment was applied.
    pub payment_request_receipt: Option<ShopPayPaymentRequestReceipt>,
    /// Error codes for failed Shop Pay payment request session mutations.
    pub user_errors: Vec<UserErrorsShopPayPaymentRequestSessionUserErrors>,
}

impl_payload!(CartMetafieldDeletePayload, user_errors: MetafieldDeleteUserError);
impl_payload!(CartMetafieldsSetPayload, user_errors: MetafieldsSetUserError);
impl_payload!(CartPrepareForCompletionPayload, user_errors: CartUserError);
impl_payload!(CartSubmitForCompletionPayload, user_errors: CartUserError);
impl_payload!(CustomerAccessTokenCreatePayload, customer_user_errors: CustomerUserError);
impl_payload!(CustomerAccessTokenCreateWithMultipassPayload, customer_user_errors: CustomerUserError);
impl_payload!(CustomerAccessTokenDeletePayload, user_errors: UserError);
impl_payload!(CustomerAccessTokenRenewPayload, user_errors: UserError);
impl_payload!(CustomerActivatePayload, customer_user_errors: CustomerUserError);
impl_payload!(CustomerActivateByUrlPayload, customer_user_errors: CustomerUserError);
impl_payload!(CustomerAddressCreatePayload, customer_user_errors: CustomerUserError);
impl_payload!(CustomerAddressDeletePayload, customer_user_errors: CustomerUserError);
impl_payload!(CustomerAddressUpdatePayload, customer_user_errors: CustomerUserError);
impl_payload!(CustomerCreatePayload, customer_user_errors: CustomerUserError);
impl_payload!(CustomerDefaultAddressUpdatePayload, customer_user_errors: CustomerUserError);
impl_payload!(CustomerRecoverPayload, customer_user_errors: CustomerUserError);
impl_payload!(CustomerResetPayload, customer_user_errors: CustomerUserError);
impl_payload!(CustomerResetByUrlPayload, customer_user_errors: CustomerUserError);
impl_payload!(CustomerUpdatePayload, customer_user_errors: CustomerUserError);
impl_payload!(ShopPayPaymentRequestSessionCreatePayload, user_errors: UserErrorsShopPayPaymentRequestSessionUserErrors);
impl_payload!(ShopPayPaymentRequestSessionSubmitPayload, user_errors: UserErrorsShopPayPaymentRequestSessionUserErrors);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::enums::{CartErrorCode, CustomerErrorCode};

    #[test]
    fn test_cart_payload_errors() {
        let payload: CartLinesAddPayload = serde_json::from_value(serde_json::json!({
            "cart": null,
            "userErrors": [{
                "code": "INVALID_MERCHANDISE_LINE",
                "field": ["lines", "0", "merchandiseId"],
                "message": "The merchandise with id gid://shopify/ProductVariant/1 does not exist."
            }],
            "warnings": []
        }))
        .unwrap();

        assert!(payload.has_errors());
        let error = payload.user_errors().first().unwrap();
        assert_eq!(error.code, Some(CartErrorCode::InvalidMerchandiseLine));
        assert_eq!(error.code(), Some("INVALID_MERCHANDISE_LINE"));
        assert_eq!(payload.error_messages().len(), 1);
    }

    #[test]
    fn test_customer_payload_reads_customer_user_errors() {
        let payload = CustomerCreatePayload {
            customer_user_errors: vec![CustomerUserError {
                code: Some(CustomerErrorCode::Taken),
                field: Some(vec!["input".to_owned(), "email".to_owned()]),
                message: "Email has already been taken".to_owned(),
            }],
            ..CustomerCreatePayload::default()
        };

        assert!(payload.has_errors());
        assert_eq!(payload.error_messages(), vec!["Email has already been taken"]);
        assert_eq!(payload.user_errors().first().unwrap().code(), Some("TAKEN"));
    }

    #[test]
    fn test_empty_payload_has_no_errors() {
        assert!(!CartCreatePayload::default().has_errors());
        assert!(!CustomerAccessTokenRenewPayload::default().has_errors());
    }
}
