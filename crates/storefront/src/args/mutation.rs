//! Arguments of `Mutation` fields.

use serde::{Deserialize, Serialize};
use storefront_schema_core::{Id, Url};

use crate::inputs::{
    AttributeInput, CartBuyerIdentityInput, CartInput, CartLineInput, CartLineUpdateInput,
    CartMetafieldDeleteInput, CartMetafieldsSetInput, CartPaymentInput,
    CartSelectedDeliveryOptionInput, CustomerAccessTokenCreateInput, CustomerActivateInput,
    CustomerCreateInput, CustomerResetInput, CustomerUpdateInput, MailingAddressInput,
    ShopPayPaymentRequestInput,
};

// =============================================================================
// Cart
// =============================================================================

/// Arguments of `Mutation.cartAttributesUpdate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationCartAttributesUpdateArgs {
    /// An array of key-value pairs that contains additional information about the cart.
    ///
    /// The input must not contain more than `250` values.
    pub attributes: Vec<AttributeInput>,
    /// The ID of the cart.
    pub cart_id: Id,
}

/// Arguments of `Mutation.cartBuyerIdentityUpdate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationCartBuyerIdentityUpdateArgs {
    /// The customer associated with the cart. Used to determine
    /// [international pricing](https://shopify.dev/custom-storefronts/internationalization/international-pricing).
    /// Buyer identity should match the customer's shipping address.
    pub buyer_identity: CartBuyerIdentityInput,
    /// The ID of the cart.
    pub cart_id: Id,
}

/// Arguments of `Mutation.cartCreate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationCartCreateArgs {
    /// The fields used to create a cart.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<CartInput>,
}

/// Arguments of `Mutation.cartDiscountCodesUpdate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationCartDiscountCodesUpdateArgs {
    /// The ID of the cart.
    pub cart_id: Id,
    /// The case-insensitive discount codes that the customer added at checkout.
    ///
    /// The input must not contain more than `250` values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_codes: Option<Vec<String>>,
}

/// Arguments of `Mutation.cartGiftCardCodesUpdate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationCartGiftCardCodesUpdateArgs {
    /// The ID of the cart.
    pub cart_id: Id,
    /// The case-insensitive gift card codes.
    ///
    /// The input must not contain more than `250` values.
    pub gift_card_codes: Vec<String>,
}

/// Arguments of `Mutation.cartLinesAdd`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationCartLinesAddArgs {
    /// The ID of the cart.
    pub cart_id: Id,
    /// A list of merchandise lines to add to the cart.
    ///
    /// The input must not contain more than `250` values.
    pub lines: Vec<CartLineInput>,
}

/// Arguments of `Mutation.cartLinesRemove`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationCartLinesRemoveArgs {
    /// The ID of the cart.
    pub cart_id: Id,
    /// The merchandise line IDs to remove.
    ///
    /// The input must not contain more than `250` values.
    pub line_ids: Vec<Id>,
}

/// Arguments of `Mutation.cartLinesUpdate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationCartLinesUpdateArgs {
    /// The ID of the cart.
    pub cart_id: Id,
    /// The merchandise lines to update.
    ///
    /// The input must not contain more than `250` values.
    pub lines: Vec<CartLineUpdateInput>,
}

/// Arguments of `Mutation.cartMetafieldDelete`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationCartMetafieldDeleteArgs {
    /// The input fields used to delete a cart metafield.
    pub input: CartMetafieldDeleteInput,
}

/// Arguments of `Mutation.cartMetafieldsSet`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationCartMetafieldsSetArgs {
    /// The list of Cart metafield values to set. Maximum of 25.
    ///
    /// The input must not contain more than `250` values.
    pub metafields: Vec<CartMetafieldsSetInput>,
}

/// Arguments of `Mutation.cartNoteUpdate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationCartNoteUpdateArgs {
    /// The ID of the cart.
    pub cart_id: Id,
    /// The note on the cart.
    pub note: String,
}

/// Arguments of `Mutation.cartPaymentUpdate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationCartPaymentUpdateArgs {
    /// The ID of the cart.
    pub cart_id: Id,
    /// The payment information for the cart that will be used at checkout.
    pub payment: CartPaymentInput,
}

/// Arguments of `Mutation.cartPrepareForCompletion`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationCartPrepareForCompletionArgs {
    /// The ID of the cart.
    pub cart_id: Id,
}

/// Arguments of `Mutation.cartSelectedDeliveryOptionsUpdate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationCartSelectedDeliveryOptionsUpdateArgs {
    /// The ID of the cart.
    pub cart_id: Id,
    /// The selected delivery options.
    ///
    /// The input must not contain more than `250` values.
    pub selected_delivery_options: Vec<CartSelectedDeliveryOptionInput>,
}

/// Arguments of `Mutation.cartSubmitForCompletion`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationCartSubmitForCompletionArgs {
    /// The attemptToken is used to guarantee an idempotent result.
    /// If more than one call uses the same attemptToken within a short period of time, only one will be accepted.
    pub attempt_token: String,
    /// The ID of the cart.
    pub cart_id: Id,
}

// =============================================================================
// Customer
// =============================================================================

/// Arguments of `Mutation.customerAccessTokenCreate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationCustomerAccessTokenCreateArgs {
    /// The fields used to create a customer access token.
    pub input: CustomerAccessTokenCreateInput,
}

/// Arguments of `Mutation.customerAccessTokenCreateWithMultipass`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationCustomerAccessTokenCreateWithMultipassArgs {
    /// A valid [multipass token](https://shopify.dev/api/multipass) to be authenticated.
    pub multipass_token: String,
}

/// Arguments of `Mutation.customerAccessTokenDelete`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationCustomerAccessTokenDeleteArgs {
    /// The access token used to identify the customer.
    pub customer_access_token: String,
}

/// Arguments of `Mutation.customerAccessTokenRenew`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationCustomerAccessTokenRenewArgs {
    /// The access token used to identify the customer.
    pub customer_access_token: String,
}

/// Arguments of `Mutation.customerActivate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationCustomerActivateArgs {
    /// Specifies the customer to activate.
    pub id: Id,
    /// The fields used to activate a customer.
    pub input: CustomerActivateInput,
}

/// Arguments of `Mutation.customerActivateByUrl`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationCustomerActivateByUrlArgs {
    /// The customer activation URL.
    pub activation_url: Url,
    /// A new password set during activation.
    pub password: String,
}

/// Arguments of `Mutation.customerAddressCreate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationCustomerAddressCreateArgs {
    /// The customer mailing address to create.
    pub address: MailingAddressInput,
    /// The access token used to identify the customer.
    pub customer_access_token: String,
}

/// Arguments of `Mutation.customerAddressDelete`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationCustomerAddressDeleteArgs {
    /// The access token used to identify the customer.
    pub customer_access_token: String,
    /// Specifies the address to delete.
    pub id: Id,
}

/// Arguments of `Mutation.customerAddressUpdate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationCustomerAddressUpdateArgs {
    /// The customer’s mailing address.
    pub address: MailingAddressInput,
    /// The access token used to identify the customer.
    pub customer_access_token: String,
    /// Specifies the customer address to update.
    pub id: Id,
}

/// Arguments of `Mutation.customerCreate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationCustomerCreateArgs {
    /// The fields used to create a new customer.
    pub input: CustomerCreateInput,
}

/// Arguments of `Mutation.customerDefaultAddressUpdate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationCustomerDefaultAddressUpdateArgs {
    /// ID of the address to set as the new default for the customer.
    pub address_id: Id,
    /// The access token used to identify the customer.
    pub customer_access_token: String,
}

/// Arguments of `Mutation.customerRecover`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationCustomerRecoverArgs {
    /// The email address of the customer to recover.
    pub email: String,
}

/// Arguments of `Mutation.customerReset`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationCustomerResetArgs {
    /// Specifies the customer to reset.
    pub id: Id,
    /// The fields used to reset a customer’s password.
    pub input: CustomerResetInput,
}

/// Arguments of `Mutation.customerResetByUrl`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationCustomerResetByUrlArgs {
    /// New password that will be set as part of the reset password process.
    pub password: String,
    /// The customer's reset password url.
    pub reset_url: Url,
}

/// Arguments of `Mutation.customerUpdate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationCustomerUpdateArgs {
    /// The customer object input.
    pub customer: CustomerUpdateInput,
    /// The access token used to identify the customer.
    pub customer_access_token: String,
}

// =============================================================================
// Shop Pay
// =============================================================================

/// Arguments of `Mutation.shopPayPaymentRequestSessionCreate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationShopPayPaymentRequestSessionCreateArgs {
    /// A payment request object.
    pub payment_request: ShopPayPaymentRequestInput,
    /// A unique identifier for the payment request session.
    pub source_identifier: String,
}

/// Arguments of `Mutation.shopPayPaymentRequestSessionSubmit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationShopPayPaymentRequestSessionSubmitArgs {
    /// The idempotency key is used to guarantee an idempotent result.
    pub idempotency_key: String,
    /// The order name to be used for the order created from the payment request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_name: Option<String>,
    /// The final and complete payment request object.
    pub payment_request: ShopPayPaymentRequestInput,
    /// A token representing a payment session request.
    pub token: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_lines_add_args() {
        let args: MutationCartLinesAddArgs = serde_json::from_value(serde_json::json!({
            "cartId": "gid://shopify/Cart/c1?key=k",
            "lines": [
                { "merchandiseId": "gid://shopify/ProductVariant/1", "quantity": 2 },
                { "merchandiseId": "gid://shopify/ProductVariant/2" }
            ]
        }))
        .unwrap();

        assert_eq!(args.cart_id.global_id().unwrap().param("key"), Some("k"));
        assert_eq!(args.lines.len(), 2);
        assert_eq!(args.lines.last().unwrap().quantity_or_default(), 1);
    }

    #[test]
    fn test_url_arguments_parsed() {
        let args: MutationCustomerResetByUrlArgs = serde_json::from_value(serde_json::json!({
            "password": "hunter22",
            "resetUrl": "https://shop.example.com/account/reset/1/abc"
        }))
        .unwrap();
        assert_eq!(args.reset_url.as_url().host_str(), Some("shop.example.com"));

        let bad = serde_json::from_value::<MutationCustomerResetByUrlArgs>(serde_json::json!({
            "password": "hunter22",
            "resetUrl": "not a url"
        }));
        assert!(bad.is_err());
    }

    #[test]
    fn test_optional_cart_input() {
        let args: MutationCartCreateArgs = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(args.input.is_none());
    }
}
