//! Union types of the Storefront API.
//!
//! Unions are enums tagged by `__typename`, so responses must select
//! `__typename` on every union-valued field. Entity members are boxed:
//! several unions reference types that can reference the union back
//! (`Product.metafield.parentResource`).

use crate::resolvers::TypeResolver;
use crate::types::{
    Article, Blog, Cart, CartCompletionActionRequired, CartCompletionFailed,
    CartCompletionProcessing, CartCompletionSuccess, CartStatusNotReady, CartStatusReady,
    CartThrottled, Collection, Company, CompanyLocation, CompletePaymentChallenge, Customer,
    GenericFile, Location, MailingAddress, Market, MediaImage, Metaobject, Model3d, MoneyV2, Order,
    Page, PricingPercentageValue, Product, ProductVariant, SellingPlan,
    SellingPlanCheckoutChargePercentageValue, SellingPlanFixedAmountPriceAdjustment,
    SellingPlanFixedPriceAdjustment, SellingPlanPercentagePriceAdjustment,
    SellingPlanRecurringBillingPolicy, SellingPlanRecurringDeliveryPolicy, Shop, ShopPolicy,
    SubmitAlreadyAccepted, SubmitFailed, SubmitSuccess, SubmitThrottled, Video,
};

/// Declare an enum tagged by `__typename` and its [`TypeResolver`].
///
/// Variant names must equal the schema names of the member types. Also used
/// for the `Any*` interface value enums.
macro_rules! schema_union {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident($ty:ty)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(tag = "__typename")]
        pub enum $name {
            $(
                #[doc = concat!("A `", stringify!($variant), "`.")]
                $variant($ty),
            )+
        }

        impl $crate::resolvers::TypeResolver for $name {
            const POSSIBLE_TYPES: &'static [&'static str] = &[$(stringify!($variant)),+];

            fn typename(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => stringify!($variant),)+
                }
            }
        }
    };
}

pub(crate) use schema_union;

// =============================================================================
// Cart Completion
// =============================================================================

schema_union! {
    /// The completion action to checkout a cart.
    CartCompletionAction {
        CompletePaymentChallenge(CompletePaymentChallenge),
    }
}

schema_union! {
    /// The result of a cart completion attempt.
    CartCompletionAttemptResult {
        CartCompletionActionRequired(CartCompletionActionRequired),
        CartCompletionFailed(CartCompletionFailed),
        CartCompletionProcessing(CartCompletionProcessing),
        CartCompletionSuccess(CartCompletionSuccess),
    }
}

schema_union! {
    /// The result of cart preparation.
    CartPrepareForCompletionResult {
        CartStatusNotReady(CartStatusNotReady),
        CartStatusReady(CartStatusReady),
        CartThrottled(CartThrottled),
    }
}

schema_union! {
    /// The result of cart submit completion.
    CartSubmitForCompletionResult {
        SubmitAlreadyAccepted(SubmitAlreadyAccepted),
        SubmitFailed(SubmitFailed),
        SubmitSuccess(SubmitSuccess),
        SubmitThrottled(SubmitThrottled),
    }
}

// =============================================================================
// Cart
// =============================================================================

schema_union! {
    /// A delivery address of the buyer that is interacting with the cart.
    DeliveryAddress {
        MailingAddress(MailingAddress),
    }
}

schema_union! {
    /// The merchandise to be purchased at checkout.
    Merchandise {
        ProductVariant(Box<ProductVariant>),
    }
}

impl Merchandise {
    /// The product variant being purchased.
    #[must_use]
    pub fn variant(&self) -> &ProductVariant {
        match self {
            Self::ProductVariant(variant) => variant,
        }
    }
}

// =============================================================================
// Content
// =============================================================================

schema_union! {
    /// The list of possible resources a `MenuItem` can reference.
    MenuItemResource {
        Article(Box<Article>),
        Blog(Box<Blog>),
        Collection(Box<Collection>),
        Metaobject(Box<Metaobject>),
        Page(Box<Page>),
        Product(Box<Product>),
        ShopPolicy(Box<ShopPolicy>),
    }
}

schema_union! {
    /// A resource that the metafield belongs to.
    MetafieldParentResource {
        Article(Box<Article>),
        Blog(Box<Blog>),
        Cart(Box<Cart>),
        Collection(Box<Collection>),
        Company(Box<Company>),
        CompanyLocation(Box<CompanyLocation>),
        Customer(Box<Customer>),
        Location(Box<Location>),
        Market(Box<Market>),
        Order(Box<Order>),
        Page(Box<Page>),
        Product(Box<Product>),
        ProductVariant(Box<ProductVariant>),
        SellingPlan(Box<SellingPlan>),
        Shop(Box<Shop>),
    }
}

schema_union! {
    /// Returns the resource which is being referred to by a metafield.
    MetafieldReference {
        Collection(Box<Collection>),
        GenericFile(Box<GenericFile>),
        MediaImage(Box<MediaImage>),
        Metaobject(Box<Metaobject>),
        Model3d(Box<Model3d>),
        Page(Box<Page>),
        Product(Box<Product>),
        ProductVariant(Box<ProductVariant>),
        Video(Box<Video>),
    }
}

schema_union! {
    /// A search result that matches the search query.
    SearchResultItem {
        Article(Box<Article>),
        Page(Box<Page>),
        Product(Box<Product>),
    }
}

// =============================================================================
// Pricing
// =============================================================================

schema_union! {
    /// The price value (fixed or percentage) for a discount application.
    PricingValue {
        MoneyV2(MoneyV2),
        PricingPercentageValue(PricingPercentageValue),
    }
}

schema_union! {
    /// The selling plan billing policy.
    SellingPlanBillingPolicy {
        SellingPlanRecurringBillingPolicy(SellingPlanRecurringBillingPolicy),
    }
}

schema_union! {
    /// The portion of the price to be charged at checkout.
    SellingPlanCheckoutChargeValue {
        MoneyV2(MoneyV2),
        SellingPlanCheckoutChargePercentageValue(SellingPlanCheckoutChargePercentageValue),
    }
}

schema_union! {
    /// The selling plan delivery policy.
    SellingPlanDeliveryPolicy {
        SellingPlanRecurringDeliveryPolicy(SellingPlanRecurringDeliveryPolicy),
    }
}

schema_union! {
    /// Represents by how much the price of a variant associated with a selling plan is adjusted. Each variant can have up to two price adjustments.
    SellingPlanPriceAdjustmentValue {
        SellingPlanFixedAmountPriceAdjustment(SellingPlanFixedAmountPriceAdjustment),
        SellingPlanFixedPriceAdjustment(SellingPlanFixedPriceAdjustment),
        SellingPlanPercentagePriceAdjustment(SellingPlanPercentagePriceAdjustment),
    }
}

/// Every union of the schema with its member types.
#[must_use]
pub fn all() -> Vec<(&'static str, &'static [&'static str])> {
    vec![
        ("CartCompletionAction", CartCompletionAction::POSSIBLE_TYPES),
        ("CartCompletionAttemptResult", CartCompletionAttemptResult::POSSIBLE_TYPES),
        ("CartPrepareForCompletionResult", CartPrepareForCompletionResult::POSSIBLE_TYPES),
        ("CartSubmitForCompletionResult", CartSubmitForCompletionResult::POSSIBLE_TYPES),
        ("DeliveryAddress", DeliveryAddress::POSSIBLE_TYPES),
        ("Merchandise", Merchandise::POSSIBLE_TYPES),
        ("MenuItemResource", MenuItemResource::POSSIBLE_TYPES),
        ("MetafieldParentResource", MetafieldParentResource::POSSIBLE_TYPES),
        ("MetafieldReference", MetafieldReference::POSSIBLE_TYPES),
        ("PricingValue", PricingValue::POSSIBLE_TYPES),
        ("SearchResultItem", SearchResultItem::POSSIBLE_TYPES),
        ("SellingPlanBillingPolicy", SellingPlanBillingPolicy::POSSIBLE_TYPES),
        ("SellingPlanCheckoutChargeValue", SellingPlanCheckoutChargeValue::POSSIBLE_TYPES),
        ("SellingPlanDeliveryPolicy", SellingPlanDeliveryPolicy::POSSIBLE_TYPES),
        ("SellingPlanPriceAdjustmentValue", SellingPlanPriceAdjustmentValue::POSSIBLE_TYPES),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_value_tagged_by_typename() {
        let value: PricingValue = serde_json::from_value(serde_json::json!({
            "__typename": "MoneyV2",
            "amount": "5.00",
            "currencyCode": "EUR"
        }))
        .unwrap();

        assert_eq!(value.typename(), "MoneyV2");
        assert!(matches!(value, PricingValue::MoneyV2(ref money) if money.amount.to_string() == "5.00"));

        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json["__typename"], "MoneyV2");
        assert_eq!(json["currencyCode"], "EUR");
    }

    #[test]
    fn test_missing_typename_rejected() {
        let result = serde_json::from_value::<PricingValue>(serde_json::json!({
            "percentage": 10.0
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_member_rejected() {
        let result = serde_json::from_value::<SearchResultItem>(serde_json::json!({
            "__typename": "Collection",
            "id": "gid://shopify/Collection/1"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_is_type_of() {
        assert!(SearchResultItem::is_type_of("Article"));
        assert!(!SearchResultItem::is_type_of("Blog"));
        assert_eq!(
            MetafieldReference::POSSIBLE_TYPES,
            &[
                "Collection",
                "GenericFile",
                "MediaImage",
                "Metaobject",
                "Model3d",
                "Page",
                "Product",
                "ProductVariant",
                "Video"
            ]
        );
    }

    #[test]
    fn test_all_unions_listed() {
        let unions = all();
        assert_eq!(unions.len(), 15);
        assert!(unions.iter().all(|(_, members)| !members.is_empty()));
    }
}
