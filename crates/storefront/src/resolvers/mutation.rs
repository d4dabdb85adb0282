//! Resolvers for the `Mutation` type.

use super::error::{ResolverError, ResolverResult};
use super::info::ResolveInfo;
use crate::args::{
    MutationCartAttributesUpdateArgs, MutationCartBuyerIdentityUpdateArgs,
    MutationCartCreateArgs, MutationCartDiscountCodesUpdateArgs,
    MutationCartGiftCardCodesUpdateArgs, MutationCartLinesAddArgs, MutationCartLinesRemoveArgs,
    MutationCartLinesUpdateArgs, MutationCartMetafieldDeleteArgs,
    MutationCartMetafieldsSetArgs, MutationCartNoteUpdateArgs, MutationCartPaymentUpdateArgs,
    MutationCartPrepareForCompletionArgs, MutationCartSelectedDeliveryOptionsUpdateArgs,
    MutationCartSubmitForCompletionArgs, MutationCustomerAccessTokenCreateArgs,
    MutationCustomerAccessTokenCreateWithMultipassArgs, MutationCustomerAccessTokenDeleteArgs,
    MutationCustomerAccessTokenRenewArgs, MutationCustomerActivateArgs,
    MutationCustomerActivateByUrlArgs, MutationCustomerAddressCreateArgs,
    MutationCustomerAddressDeleteArgs, MutationCustomerAddressUpdateArgs,
    MutationCustomerCreateArgs, MutationCustomerDefaultAddressUpdateArgs,
    MutationCustomerRecoverArgs, MutationCustomerResetArgs, MutationCustomerResetByUrlArgs,
    MutationCustomerUpdateArgs, MutationShopPayPaymentRequestSessionCreateArgs,
    MutationShopPayPaymentRequestSessionSubmitArgs,
};
use crate::types::{
    CartAttributesUpdatePayload, CartBuyerIdentityUpdatePayload, CartCreatePayload,
    CartDiscountCodesUpdatePayload, CartGiftCardCodesUpdatePayload, CartLinesAddPayload,
    CartLinesRemovePayload, CartLinesUpdatePayload, CartMetafieldDeletePayload,
    CartMetafieldsSetPayload, CartNoteUpdatePayload, CartPaymentUpdatePayload,
    CartPrepareForCompletionPayload, CartSelectedDeliveryOptionsUpdatePayload,
    CartSubmitForCompletionPayload, CustomerAccessTokenCreatePayload,
    CustomerAccessTokenCreateWithMultipassPayload, CustomerAccessTokenDeletePayload,
    CustomerAccessTokenRenewPayload, CustomerActivateByUrlPayload, CustomerActivatePayload,
    CustomerAddressCreatePayload, CustomerAddressDeletePayload, CustomerAddressUpdatePayload,
    CustomerCreatePayload, CustomerDefaultAddressUpdatePayload, CustomerRecoverPayload,
    CustomerResetByUrlPayload, CustomerResetPayload, CustomerUpdatePayload,
    ShopPayPaymentRequestSessionCreatePayload, ShopPayPaymentRequestSessionSubmitPayload,
};

/// Resolvers for every `Mutation` field.
///
/// Payloads carry business failures in their `userErrors`; return
/// `Err` only when the mutation could not run at all.
#[async_trait::async_trait]
pub trait MutationResolvers<C: Send + Sync>: Send + Sync {
    /// Updates the attributes on a cart.
    async fn cart_attributes_update(
        &self,
        _ctx: &C,
        _args: MutationCartAttributesUpdateArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<CartAttributesUpdatePayload>> {
        Err(ResolverError::not_implemented("Mutation", "cartAttributesUpdate"))
    }

    /// Updates customer information associated with a cart.
    /// Buyer identity is used to determine
    /// [international pricing](https://shopify.dev/custom-storefronts/internationalization/international-pricing)
    /// and should match the customer's shipping address.
    async fn cart_buyer_identity_update(
        &self,
        _ctx: &C,
        _args: MutationCartBuyerIdentityUpdateArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<CartBuyerIdentityUpdatePayload>> {
        Err(ResolverError::not_implemented("Mutation", "cartBuyerIdentityUpdate"))
    }

    /// Creates a new cart.
    async fn cart_create(
        &self,
        _ctx: &C,
        _args: MutationCartCreateArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<CartCreatePayload>> {
        Err(ResolverError::not_implemented("Mutation", "cartCreate"))
    }

    /// Updates the discount codes applied to the cart.
    async fn cart_discount_codes_update(
        &self,
        _ctx: &C,
        _args: MutationCartDiscountCodesUpdateArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<CartDiscountCodesUpdatePayload>> {
        Err(ResolverError::not_implemented("Mutation", "cartDiscountCodesUpdate"))
    }

    /// Updates the gift card codes applied to the cart.
    async fn cart_gift_card_codes_update(
        &self,
        _ctx: &C,
        _args: MutationCartGiftCardCodesUpdateArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<CartGiftCardCodesUpdatePayload>> {
        Err(ResolverError::not_implemented("Mutation", "cartGiftCardCodesUpdate"))
    }

    /// Adds a merchandise line to the cart.
    async fn cart_lines_add(
        &self,
        _ctx: &C,
        _args: MutationCartLinesAddArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<CartLinesAddPayload>> {
        Err(ResolverError::not_implemented("Mutation", "cartLinesAdd"))
    }

    /// Removes one or more merchandise lines from the cart.
    async fn cart_lines_remove(
        &self,
        _ctx: &C,
        _args: MutationCartLinesRemoveArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<CartLinesRemovePayload>> {
        Err(ResolverError::not_implemented("Mutation", "cartLinesRemove"))
    }

    /// Updates one or more merchandise lines on a cart.
    async fn cart_lines_update(
        &self,
        _ctx: &C,
        _args: MutationCartLinesUpdateArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<CartLinesUpdatePayload>> {
        Err(ResolverError::not_implemented("Mutation", "cartLinesUpdate"))
    }

    /// Deletes a cart metafield.
    async fn cart_metafield_delete(
        &self,
        _ctx: &C,
        _args: MutationCartMetafieldDeleteArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<CartMetafieldDeletePayload>> {
        Err(ResolverError::not_implemented("Mutation", "cartMetafieldDelete"))
    }

    /// Sets cart metafield values. Cart metafield values will be set regardless if they were previously created or not.
    ///
    /// Allows a maximum of 25 cart metafields to be set at a time.
    async fn cart_metafields_set(
        &self,
        _ctx: &C,
        _args: MutationCartMetafieldsSetArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<CartMetafieldsSetPayload>> {
        Err(ResolverError::not_implemented("Mutation", "cartMetafieldsSet"))
    }

    /// Updates the note on the cart.
    async fn cart_note_update(
        &self,
        _ctx: &C,
        _args: MutationCartNoteUpdateArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<CartNoteUpdatePayload>> {
        Err(ResolverError::not_implemented("Mutation", "cartNoteUpdate"))
    }

    /// Update the customer's payment method that will be used to checkout.
    async fn cart_payment_update(
        &self,
        _ctx: &C,
        _args: MutationCartPaymentUpdateArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<CartPaymentUpdatePayload>> {
        Err(ResolverError::not_implemented("Mutation", "cartPaymentUpdate"))
    }

    /// Prepare the cart for cart checkout completion.
    async fn cart_prepare_for_completion(
        &self,
        _ctx: &C,
        _args: MutationCartPrepareForCompletionArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<CartPrepareForCompletionPayload>> {
        Err(ResolverError::not_implemented("Mutation", "cartPrepareForCompletion"))
    }

    /// Update the selected delivery options for a delivery group.
    async fn cart_selected_delivery_options_update(
        &self,
        _ctx: &C,
        _args: MutationCartSelectedDeliveryOptionsUpdateArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<CartSelectedDeliveryOptionsUpdatePayload>> {
        Err(ResolverError::not_implemented("Mutation", "cartSelectedDeliveryOptionsUpdate"))
    }

    /// Submit the cart for checkout completion.
    async fn cart_submit_for_completion(
        &self,
        _ctx: &C,
        _args: MutationCartSubmitForCompletionArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<CartSubmitForCompletionPayload>> {
        Err(ResolverError::not_implemented("Mutation", "cartSubmitForCompletion"))
    }

    /// Creates a customer access token.
    /// The customer access token is required to modify the customer object in any way.
    async fn customer_access_token_create(
        &self,
        _ctx: &C,
        _args: MutationCustomerAccessTokenCreateArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<CustomerAccessTokenCreatePayload>> {
        Err(ResolverError::not_implemented("Mutation", "customerAccessTokenCreate"))
    }

    /// Creates a customer access token using a
    /// [multipass token](https://shopify.dev/api/multipass) instead of email and
    /// password. A customer record is created if the customer doesn't exist. If a customer
    /// record already exists but the record is disabled, then the customer record is enabled.
    async fn customer_access_token_create_with_multipass(
        &self,
        _ctx: &C,
        _args: MutationCustomerAccessTokenCreateWithMultipassArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<CustomerAccessTokenCreateWithMultipassPayload>> {
        Err(ResolverError::not_implemented("Mutation", "customerAccessTokenCreateWithMultipass"))
    }

    /// Permanently destroys a customer access token.
    async fn customer_access_token_delete(
        &self,
        _ctx: &C,
        _args: MutationCustomerAccessTokenDeleteArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<CustomerAccessTokenDeletePayload>> {
        Err(ResolverError::not_implemented("Mutation", "customerAccessTokenDelete"))
    }

    /// Renews a customer access token.
    ///
    /// Access token renewal must happen *before* a token expires.
    /// If a token has already expired, a new one should be created instead via `customerAccessTokenCreate`.
    async fn customer_access_token_renew(
        &self,
        _ctx: &C,
        _args: MutationCustomerAccessTokenRenewArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<CustomerAccessTokenRenewPayload>> {
        Err(ResolverError::not_implemented("Mutation", "customerAccessTokenRenew"))
    }

    /// Activates a customer.
    async fn customer_activate(
        &self,
        _ctx: &C,
        _args: MutationCustomerActivateArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<CustomerActivatePayload>> {
        Err(ResolverError::not_implemented("Mutation", "customerActivate"))
    }

    /// Activates a customer with the activation url received from `customerCreate`.
    async fn customer_activate_by_url(
        &self,
        _ctx: &C,
        _args: MutationCustomerActivateByUrlArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<CustomerActivateByUrlPayload>> {
        Err(ResolverError::not_implemented("Mutation", "customerActivateByUrl"))
    }

    /// Creates a new address for a customer.
    async fn customer_address_create(
        &self,
        _ctx: &C,
        _args: MutationCustomerAddressCreateArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<CustomerAddressCreatePayload>> {
        Err(ResolverError::not_implemented("Mutation", "customerAddressCreate"))
    }

    /// Permanently deletes the address of an existing customer.
    async fn customer_address_delete(
        &self,
        _ctx: &C,
        _args: MutationCustomerAddressDeleteArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<CustomerAddressDeletePayload>> {
        Err(ResolverError::not_implemented("Mutation", "customerAddressDelete"))
    }

    /// Updates the address of an existing customer.
    async fn customer_address_update(
        &self,
        _ctx: &C,
        _args: MutationCustomerAddressUpdateArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<CustomerAddressUpdatePayload>> {
        Err(ResolverError::not_implemented("Mutation", "customerAddressUpdate"))
    }

    /// Creates a new customer.
    async fn customer_create(
        &self,
        _ctx: &C,
        _args: MutationCustomerCreateArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<CustomerCreatePayload>> {
        Err(ResolverError::not_implemented("Mutation", "customerCreate"))
    }

    /// Updates the default address of an existing customer.
    async fn customer_default_address_update(
        &self,
        _ctx: &C,
        _args: MutationCustomerDefaultAddressUpdateArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<CustomerDefaultAddressUpdatePayload>> {
        Err(ResolverError::not_implemented("Mutation", "customerDefaultAddressUpdate"))
    }

    /// Sends a reset password email to the customer. The reset password
    /// email contains a reset password URL and token that you can pass to
    /// the [`customerResetByUrl`](https://shopify.dev/api/storefront/latest/mutations/customerResetByUrl) or
    /// [`customerReset`](https://shopify.dev/api/storefront/latest/mutations/customerReset) mutation to reset the
    /// customer password.
    async fn customer_recover(
        &self,
        _ctx: &C,
        _args: MutationCustomerRecoverArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<CustomerRecoverPayload>> {
        Err(ResolverError::not_implemented("Mutation", "customerRecover"))
    }

    /// Resets a customer’s password with the token received from a reset password email. You can send a reset password email with the [`customerRecover`](https://shopify.dev/api/storefront/latest/mutations/customerRecover) mutation.
    async fn customer_reset(
        &self,
        _ctx: &C,
        _args: MutationCustomerResetArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<CustomerResetPayload>> {
        Err(ResolverError::not_implemented("Mutation", "customerReset"))
    }

    /// Resets a customer’s password with the reset password URL received from a reset password email. You can send a reset password email with the [`customerRecover`](https://shopify.dev/api/storefront/latest/mutations/customerRecover) mutation.
    async fn customer_reset_by_url(
        &self,
        _ctx: &C,
        _args: MutationCustomerResetByUrlArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<CustomerResetByUrlPayload>> {
        Err(ResolverError::not_implemented("Mutation", "customerResetByUrl"))
    }

    /// Updates an existing customer.
    async fn customer_update(
        &self,
        _ctx: &C,
        _args: MutationCustomerUpdateArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<CustomerUpdatePayload>> {
        Err(ResolverError::not_implemented("Mutation", "customerUpdate"))
    }

    /// Create a new Shop Pay payment request session.
    async fn shop_pay_payment_request_session_create(
        &self,
        _ctx: &C,
        _args: MutationShopPayPaymentRequestSessionCreateArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<ShopPayPaymentRequestSessionCreatePayload>> {
        Err(ResolverError::not_implemented("Mutation", "shopPayPaymentRequestSessionCreate"))
    }

    /// Submits a Shop Pay payment request session.
    async fn shop_pay_payment_request_session_submit(
        &self,
        _ctx: &C,
        _args: MutationShopPayPaymentRequestSessionSubmitArgs,
        _info: &ResolveInfo,
    ) -> ResolverResult<Option<ShopPayPaymentRequestSessionSubmitPayload>> {
        Err(ResolverError::not_implemented("Mutation", "shopPayPaymentRequestSessionSubmit"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::Payload;

    struct NoteOnly;

    #[async_trait::async_trait]
    impl MutationResolvers<()> for NoteOnly {
        async fn cart_note_update(
            &self,
            _ctx: &(),
            args: MutationCartNoteUpdateArgs,
            _info: &ResolveInfo,
        ) -> ResolverResult<Option<CartNoteUpdatePayload>> {
            if args.note.len() > 5000 {
                return Err(ResolverError::InvalidArguments("note is too long".to_owned()));
            }
            Ok(Some(CartNoteUpdatePayload::default()))
        }
    }

    #[tokio::test]
    async fn test_only_overridden_fields_resolve() {
        let info = ResolveInfo::root("Mutation", "cartNoteUpdate");
        let args = MutationCartNoteUpdateArgs {
            cart_id: "gid://shopify/Cart/c1".into(),
            note: "Leave at the door".to_owned(),
        };
        let payload = NoteOnly.cart_note_update(&(), args, &info).await.unwrap().unwrap();
        assert!(!payload.has_errors());

        let err = NoteOnly
            .customer_recover(
                &(),
                MutationCustomerRecoverArgs {
                    email: "ana@example.com".to_owned(),
                },
                &info,
            )
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Mutation.customerRecover is not implemented");
    }
}
