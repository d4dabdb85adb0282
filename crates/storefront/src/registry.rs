//! Runtime catalogue of every named type and directive in the schema.
//!
//! The Rust types in [`crate::types`], [`crate::enums`], [`crate::inputs`],
//! [`crate::unions`] and [`crate::interfaces`] are the compile-time view of
//! the schema. This module is the runtime view: one [`TypeEntry`] per
//! schema type, keyed by its schema name, with the relationships
//! introspection and `__resolveType` need (interfaces implemented, possible
//! types, enum values).
//!
//! Union and enum entries read their members from the Rust types, so the
//! two views cannot drift apart. Interface implementations are additionally
//! checked at compile time.
//!
//! # Example
//!
//! ```
//! use storefront_schema::registry::{self, TypeKind};
//!
//! let product = registry::lookup("Product").unwrap();
//! assert_eq!(product.kind, TypeKind::Object);
//! assert!(product.interfaces.contains(&"Node"));
//!
//! assert!(registry::implementers("Media").contains(&"Video"));
//! assert_eq!(registry::possible_types("PricingValue").len(), 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::enums::SchemaEnum;
use crate::interfaces::{
    AnyBaseCartLine, AnyCartDiscountAllocation, AnyDiscountApplication, AnyMedia, AnyNode,
    AnySitemapResource,
};
use crate::resolvers::TypeResolver;

// =============================================================================
// Types
// =============================================================================

/// The kind of a named schema type, as reported by `__Type.kind`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum TypeKind {
    /// A leaf value, built in or custom.
    Scalar,
    /// A concrete type with fields.
    Object,
    /// An abstract type implemented by objects.
    Interface,
    /// An abstract type listing its member objects.
    Union,
    /// A closed set of values.
    Enum,
    /// A type only accepted as an argument.
    InputObject,
}

/// A named type of the schema.
#[derive(Debug, Clone, Copy)]
pub struct TypeEntry {
    /// Schema name.
    pub name: &'static str,
    /// What sort of type this is.
    pub kind: TypeKind,
    /// Interfaces an object or interface implements.
    pub interfaces: &'static [&'static str],
    /// Concrete members of a union or interface.
    pub possible_types: &'static [&'static str],
    /// Value list of an enum.
    pub enum_values: Option<fn() -> Vec<&'static str>>,
}

impl TypeEntry {
    /// Whether `typename` is a concrete member of this abstract type.
    #[must_use]
    pub fn is_possible_type(&self, typename: &str) -> bool {
        self.possible_types.contains(&typename)
    }

    /// Enum values, empty for every other kind.
    #[must_use]
    pub fn values(&self) -> Vec<&'static str> {
        self.enum_values.map(|values| values()).unwrap_or_default()
    }
}

/// A serializable view of a [`TypeEntry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescription {
    /// Schema name.
    pub name: &'static str,
    /// What sort of type this is.
    pub kind: TypeKind,
    /// Implemented interfaces, omitted when there are none.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<&'static str>,
    /// Members of a union or interface, omitted for other kinds.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub possible_types: Vec<&'static str>,
    /// Values of an enum, omitted for other kinds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<&'static str>>,
}

impl From<&TypeEntry> for TypeDescription {
    fn from(entry: &TypeEntry) -> Self {
        Self {
            name: entry.name,
            kind: entry.kind,
            interfaces: entry.interfaces.to_vec(),
            possible_types: entry.possible_types.to_vec(),
            enum_values: entry.enum_values.map(|values| values()),
        }
    }
}

// =============================================================================
// Directives
// =============================================================================

/// An argument of a directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectiveArgument {
    /// Argument name.
    pub name: &'static str,
    /// Type reference in SDL notation (`String!`, `CountryCode`).
    #[serde(rename = "type")]
    pub type_ref: &'static str,
    /// Default as a GraphQL literal, if the argument has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<&'static str>,
}

/// A directive declared by the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectiveDefinition {
    /// Name without the `@`.
    pub name: &'static str,
    /// Schema description.
    pub description: &'static str,
    /// Declared arguments, in schema order.
    pub arguments: &'static [DirectiveArgument],
    /// Whether the directive may appear more than once at one location.
    pub repeatable: bool,
    /// Locations the directive may be applied to (`QUERY`, `FIELD_DEFINITION`).
    pub locations: &'static [&'static str],
}

/// Every directive of the schema.
pub static DIRECTIVES: &[DirectiveDefinition] = &[
    DirectiveDefinition {
        name: "accessRestricted",
        description: "Marks an element of a GraphQL schema as having restricted access.",
        arguments: &[DirectiveArgument {
            name: "reason",
            type_ref: "String",
            default_value: None,
        }],
        repeatable: false,
        locations: &["FIELD_DEFINITION", "OBJECT"],
    },
    DirectiveDefinition {
        name: "defer",
        description: "Informs the server to delay the execution of the current fragment, potentially resulting in multiple responses from the server. Non-deferred data is delivered in the initial response and data deferred is delivered in subsequent responses. Only available on development stores with the Checkout and Customer Accounts Extensibility developer preview enabled.",
        arguments: &[
            DirectiveArgument {
                name: "if",
                type_ref: "Boolean",
                default_value: Some("true"),
            },
            DirectiveArgument {
                name: "label",
                type_ref: "String",
                default_value: None,
            },
        ],
        repeatable: false,
        locations: &["FRAGMENT_SPREAD", "INLINE_FRAGMENT"],
    },
    DirectiveDefinition {
        name: "inContext",
        description: "Contextualizes data based on the additional information provided by the directive. For example, you can use the `@inContext(country: CA)` directive to [query a product's price](https://shopify.dev/custom-storefronts/internationalization/international-pricing) in a storefront within the context of Canada.",
        arguments: &[
            DirectiveArgument {
                name: "buyer",
                type_ref: "BuyerInput",
                default_value: None,
            },
            DirectiveArgument {
                name: "country",
                type_ref: "CountryCode",
                default_value: None,
            },
            DirectiveArgument {
                name: "language",
                type_ref: "LanguageCode",
                default_value: None,
            },
            DirectiveArgument {
                name: "preferredLocationId",
                type_ref: "ID",
                default_value: None,
            },
        ],
        repeatable: false,
        locations: &["QUERY", "MUTATION"],
    },
];

// =============================================================================
// Catalogue
// =============================================================================

macro_rules! scalar_type {
    ($name:literal) => {
        TypeEntry {
            name: $name,
            kind: TypeKind::Scalar,
            interfaces: &[],
            possible_types: &[],
            enum_values: None,
        }
    };
}

macro_rules! object_type {
    ($name:literal) => {
        object_type!($name, [])
    };
    ($name:literal, [$($iface:literal),*]) => {
        TypeEntry {
            name: $name,
            kind: TypeKind::Object,
            interfaces: &[$($iface),*],
            possible_types: &[],
            enum_values: None,
        }
    };
}

macro_rules! interface_type {
    ($name:literal, [$($iface:literal),*], $members:expr) => {
        TypeEntry {
            name: $name,
            kind: TypeKind::Interface,
            interfaces: &[$($iface),*],
            possible_types: $members,
            enum_values: None,
        }
    };
}

macro_rules! union_type {
    ($ty:ident) => {
        TypeEntry {
            name: stringify!($ty),
            kind: TypeKind::Union,
            interfaces: &[],
            possible_types: <$crate::unions::$ty as TypeResolver>::POSSIBLE_TYPES,
            enum_values: None,
        }
    };
}

macro_rules! enum_type {
    ($ty:ident) => {
        TypeEntry {
            name: <$crate::enums::$ty as SchemaEnum>::NAME,
            kind: TypeKind::Enum,
            interfaces: &[],
            possible_types: &[],
            enum_values: Some(<$crate::enums::$ty as SchemaEnum>::values),
        }
    };
}

macro_rules! input_type {
    ($name:literal) => {
        TypeEntry {
            name: $name,
            kind: TypeKind::InputObject,
            interfaces: &[],
            possible_types: &[],
            enum_values: None,
        }
    };
}

/// Every named type of the schema, sorted by name.
pub static TYPES: &[TypeEntry] = &[
    object_type!("ApiVersion"),
    input_type!("ApplePayWalletContentInput"),
    input_type!("ApplePayWalletHeaderInput"),
    object_type!("AppliedGiftCard", ["Node"]),
    object_type!("Article", ["HasMetafields", "Node", "OnlineStorePublishable", "Trackable"]),
    object_type!("ArticleAuthor"),
    object_type!("ArticleConnection"),
    object_type!("ArticleEdge"),
    enum_type!(ArticleSortKeys),
    object_type!("Attribute"),
    input_type!("AttributeInput"),
    object_type!("AutomaticDiscountApplication", ["DiscountApplication"]),
    interface_type!("BaseCartLine", ["Node"], AnyBaseCartLine::POSSIBLE_TYPES),
    object_type!("BaseCartLineConnection"),
    object_type!("BaseCartLineEdge"),
    object_type!("Blog", ["HasMetafields", "Node", "OnlineStorePublishable"]),
    object_type!("BlogConnection"),
    object_type!("BlogEdge"),
    enum_type!(BlogSortKeys),
    scalar_type!("Boolean"),
    object_type!("Brand"),
    object_type!("BrandColorGroup"),
    object_type!("BrandColors"),
    input_type!("BuyerInput"),
    enum_type!(CardBrand),
    object_type!("Cart", ["HasMetafields", "Node"]),
    object_type!("CartAttributesUpdatePayload"),
    object_type!("CartAutomaticDiscountAllocation", ["CartDiscountAllocation"]),
    object_type!("CartBuyerIdentity"),
    input_type!("CartBuyerIdentityInput"),
    object_type!("CartBuyerIdentityUpdatePayload"),
    enum_type!(CartCardSource),
    object_type!("CartCodeDiscountAllocation", ["CartDiscountAllocation"]),
    union_type!(CartCompletionAction),
    object_type!("CartCompletionActionRequired"),
    union_type!(CartCompletionAttemptResult),
    object_type!("CartCompletionFailed"),
    object_type!("CartCompletionProcessing"),
    object_type!("CartCompletionSuccess"),
    object_type!("CartCost"),
    object_type!("CartCreatePayload"),
    object_type!("CartCustomDiscountAllocation", ["CartDiscountAllocation"]),
    object_type!("CartDeliveryCoordinatesPreference"),
    input_type!("CartDeliveryCoordinatesPreferenceInput"),
    object_type!("CartDeliveryGroup"),
    object_type!("CartDeliveryGroupConnection"),
    object_type!("CartDeliveryGroupEdge"),
    enum_type!(CartDeliveryGroupType),
    object_type!("CartDeliveryOption"),
    object_type!("CartDeliveryPreference"),
    input_type!("CartDeliveryPreferenceInput"),
    input_type!("CartDirectPaymentMethodInput"),
    interface_type!("CartDiscountAllocation", [], AnyCartDiscountAllocation::POSSIBLE_TYPES),
    object_type!("CartDiscountApplication"),
    object_type!("CartDiscountCode"),
    object_type!("CartDiscountCodesUpdatePayload"),
    enum_type!(CartErrorCode),
    object_type!("CartEstimatedCost"),
    input_type!("CartFreePaymentMethodInput"),
    object_type!("CartGiftCardCodesUpdatePayload"),
    input_type!("CartInput"),
    input_type!("CartInputMetafieldInput"),
    object_type!("CartLine", ["BaseCartLine", "Node"]),
    object_type!("CartLineCost"),
    object_type!("CartLineEstimatedCost"),
    input_type!("CartLineInput"),
    input_type!("CartLineUpdateInput"),
    object_type!("CartLinesAddPayload"),
    object_type!("CartLinesRemovePayload"),
    object_type!("CartLinesUpdatePayload"),
    input_type!("CartMetafieldDeleteInput"),
    object_type!("CartMetafieldDeletePayload"),
    input_type!("CartMetafieldsSetInput"),
    object_type!("CartMetafieldsSetPayload"),
    object_type!("CartNoteUpdatePayload"),
    object_type!("CartOperationError"),
    input_type!("CartPaymentInput"),
    object_type!("CartPaymentUpdatePayload"),
    object_type!("CartPreferences"),
    input_type!("CartPreferencesInput"),
    object_type!("CartPrepareForCompletionPayload"),
    union_type!(CartPrepareForCompletionResult),
    input_type!("CartSelectedDeliveryOptionInput"),
    object_type!("CartSelectedDeliveryOptionsUpdatePayload"),
    object_type!("CartStatusNotReady"),
    object_type!("CartStatusReady"),
    object_type!("CartSubmitForCompletionPayload"),
    union_type!(CartSubmitForCompletionResult),
    object_type!("CartThrottled"),
    object_type!("CartUserError", ["DisplayableError"]),
    input_type!("CartWalletPaymentMethodInput"),
    object_type!("CartWarning"),
    enum_type!(CartWarningCode),
    input_type!("CategoryFilter"),
    object_type!("Collection", ["HasMetafields", "Node", "OnlineStorePublishable", "Trackable"]),
    object_type!("CollectionConnection"),
    object_type!("CollectionEdge"),
    enum_type!(CollectionSortKeys),
    scalar_type!("Color"),
    object_type!("Comment", ["Node"]),
    object_type!("CommentAuthor"),
    object_type!("CommentConnection"),
    object_type!("CommentEdge"),
    object_type!("Company", ["HasMetafields", "Node"]),
    object_type!("CompanyContact", ["Node"]),
    object_type!("CompanyLocation", ["HasMetafields", "Node"]),
    object_type!("CompletePaymentChallenge"),
    object_type!("CompletionError"),
    enum_type!(CompletionErrorCode),
    object_type!("ComponentizableCartLine", ["BaseCartLine", "Node"]),
    object_type!("Count"),
    enum_type!(CountPrecision),
    object_type!("Country"),
    enum_type!(CountryCode),
    enum_type!(CropRegion),
    object_type!("Currency"),
    enum_type!(CurrencyCode),
    object_type!("Customer", ["HasMetafields"]),
    object_type!("CustomerAccessToken"),
    input_type!("CustomerAccessTokenCreateInput"),
    object_type!("CustomerAccessTokenCreatePayload"),
    object_type!("CustomerAccessTokenCreateWithMultipassPayload"),
    object_type!("CustomerAccessTokenDeletePayload"),
    object_type!("CustomerAccessTokenRenewPayload"),
    object_type!("CustomerActivateByUrlPayload"),
    input_type!("CustomerActivateInput"),
    object_type!("CustomerActivatePayload"),
    object_type!("CustomerAddressCreatePayload"),
    object_type!("CustomerAddressDeletePayload"),
    object_type!("CustomerAddressUpdatePayload"),
    input_type!("CustomerCreateInput"),
    object_type!("CustomerCreatePayload"),
    object_type!("CustomerDefaultAddressUpdatePayload"),
    enum_type!(CustomerErrorCode),
    object_type!("CustomerRecoverPayload"),
    object_type!("CustomerResetByUrlPayload"),
    input_type!("CustomerResetInput"),
    object_type!("CustomerResetPayload"),
    input_type!("CustomerUpdateInput"),
    object_type!("CustomerUpdatePayload"),
    object_type!("CustomerUserError", ["DisplayableError"]),
    scalar_type!("DateTime"),
    scalar_type!("Decimal"),
    union_type!(DeliveryAddress),
    input_type!("DeliveryAddressInput"),
    enum_type!(DeliveryAddressValidationStrategy),
    enum_type!(DeliveryMethodType),
    enum_type!(DigitalWallet),
    object_type!("DiscountAllocation"),
    interface_type!("DiscountApplication", [], AnyDiscountApplication::POSSIBLE_TYPES),
    enum_type!(DiscountApplicationAllocationMethod),
    object_type!("DiscountApplicationConnection"),
    object_type!("DiscountApplicationEdge"),
    enum_type!(DiscountApplicationTargetSelection),
    enum_type!(DiscountApplicationTargetType),
    object_type!("DiscountCodeApplication", ["DiscountApplication"]),
    interface_type!("DisplayableError", [], &["CartUserError", "CustomerUserError", "MetafieldDeleteUserError", "MetafieldsSetUserError", "UserErrorsShopPayPaymentRequestSessionUserErrors", "UserError"]),
    object_type!("Domain"),
    object_type!("ExternalVideo", ["Media", "Node"]),
    object_type!("Filter"),
    enum_type!(FilterPresentation),
    enum_type!(FilterType),
    object_type!("FilterValue"),
    scalar_type!("Float"),
    object_type!("Fulfillment"),
    object_type!("FulfillmentLineItem"),
    object_type!("FulfillmentLineItemConnection"),
    object_type!("FulfillmentLineItemEdge"),
    object_type!("FulfillmentTrackingInfo"),
    object_type!("GenericFile", ["Node"]),
    input_type!("GeoCoordinateInput"),
    scalar_type!("HTML"),
    interface_type!("HasMetafields", [], &["Article", "Blog", "Cart", "Collection", "Company", "CompanyLocation", "Customer", "Location", "Market", "Order", "Page", "Product", "ProductVariant", "SellingPlan", "Shop"]),
    input_type!("HasMetafieldsIdentifier"),
    scalar_type!("ID"),
    scalar_type!("ISO8601DateTime"),
    object_type!("Image"),
    object_type!("ImageConnection"),
    enum_type!(ImageContentType),
    object_type!("ImageEdge"),
    input_type!("ImageTransformInput"),
    scalar_type!("Int"),
    scalar_type!("JSON"),
    object_type!("Language"),
    enum_type!(LanguageCode),
    object_type!("Localization"),
    object_type!("Location", ["HasMetafields", "Node"]),
    object_type!("LocationAddress"),
    object_type!("LocationConnection"),
    object_type!("LocationEdge"),
    enum_type!(LocationSortKeys),
    object_type!("MailingAddress", ["Node"]),
    object_type!("MailingAddressConnection"),
    object_type!("MailingAddressEdge"),
    input_type!("MailingAddressInput"),
    object_type!("ManualDiscountApplication", ["DiscountApplication"]),
    object_type!("Market", ["HasMetafields", "Node"]),
    interface_type!("Media", ["Node"], AnyMedia::POSSIBLE_TYPES),
    object_type!("MediaConnection"),
    enum_type!(MediaContentType),
    object_type!("MediaEdge"),
    enum_type!(MediaHost),
    object_type!("MediaImage", ["Media", "Node"]),
    object_type!("MediaPresentation", ["Node"]),
    enum_type!(MediaPresentationFormat),
    object_type!("Menu", ["Node"]),
    object_type!("MenuItem", ["Node"]),
    union_type!(MenuItemResource),
    enum_type!(MenuItemType),
    union_type!(Merchandise),
    object_type!("Metafield", ["Node"]),
    enum_type!(MetafieldDeleteErrorCode),
    object_type!("MetafieldDeleteUserError", ["DisplayableError"]),
    input_type!("MetafieldFilter"),
    union_type!(MetafieldParentResource),
    union_type!(MetafieldReference),
    object_type!("MetafieldReferenceConnection"),
    object_type!("MetafieldReferenceEdge"),
    object_type!("MetafieldsSetUserError", ["DisplayableError"]),
    enum_type!(MetafieldsSetUserErrorCode),
    object_type!("Metaobject", ["Node", "OnlineStorePublishable"]),
    object_type!("MetaobjectConnection"),
    object_type!("MetaobjectEdge"),
    object_type!("MetaobjectField"),
    input_type!("MetaobjectHandleInput"),
    object_type!("MetaobjectSeo"),
    object_type!("Model3d", ["Media", "Node"]),
    object_type!("Model3dSource"),
    input_type!("MoneyInput"),
    object_type!("MoneyV2"),
    object_type!("Mutation"),
    interface_type!("Node", [], AnyNode::POSSIBLE_TYPES),
    interface_type!("OnlineStorePublishable", [], &["Article", "Blog", "Collection", "Metaobject", "Page", "Product"]),
    object_type!("Order", ["HasMetafields", "Node"]),
    enum_type!(OrderCancelReason),
    object_type!("OrderConnection"),
    object_type!("OrderEdge"),
    enum_type!(OrderFinancialStatus),
    enum_type!(OrderFulfillmentStatus),
    object_type!("OrderLineItem"),
    object_type!("OrderLineItemConnection"),
    object_type!("OrderLineItemEdge"),
    enum_type!(OrderSortKeys),
    object_type!("Page", ["HasMetafields", "Node", "OnlineStorePublishable", "Trackable"]),
    object_type!("PageConnection"),
    object_type!("PageEdge"),
    object_type!("PageInfo"),
    enum_type!(PageSortKeys),
    object_type!("PaginatedSitemapResources"),
    object_type!("PaymentSettings"),
    enum_type!(PredictiveSearchLimitScope),
    object_type!("PredictiveSearchResult"),
    enum_type!(PredictiveSearchType),
    enum_type!(PreferenceDeliveryMethodType),
    input_type!("PriceRangeFilter"),
    object_type!("PricingPercentageValue"),
    union_type!(PricingValue),
    object_type!("Product", ["HasMetafields", "Node", "OnlineStorePublishable", "Trackable"]),
    enum_type!(ProductCollectionSortKeys),
    object_type!("ProductConnection"),
    object_type!("ProductEdge"),
    input_type!("ProductFilter"),
    enum_type!(ProductImageSortKeys),
    enum_type!(ProductMediaSortKeys),
    object_type!("ProductOption", ["Node"]),
    object_type!("ProductOptionValue", ["Node"]),
    object_type!("ProductOptionValueSwatch"),
    object_type!("ProductPriceRange"),
    enum_type!(ProductRecommendationIntent),
    enum_type!(ProductSortKeys),
    object_type!("ProductVariant", ["HasMetafields", "Node"]),
    object_type!("ProductVariantComponent"),
    object_type!("ProductVariantComponentConnection"),
    object_type!("ProductVariantComponentEdge"),
    object_type!("ProductVariantConnection"),
    object_type!("ProductVariantEdge"),
    enum_type!(ProductVariantSortKeys),
    object_type!("PurchasingCompany"),
    object_type!("QuantityPriceBreak"),
    object_type!("QuantityPriceBreakConnection"),
    object_type!("QuantityPriceBreakEdge"),
    object_type!("QuantityRule"),
    object_type!("QueryRoot"),
    object_type!("ScriptDiscountApplication", ["DiscountApplication"]),
    enum_type!(SearchPrefixQueryType),
    object_type!("SearchQuerySuggestion", ["Trackable"]),
    union_type!(SearchResultItem),
    object_type!("SearchResultItemConnection"),
    object_type!("SearchResultItemEdge"),
    enum_type!(SearchSortKeys),
    enum_type!(SearchType),
    enum_type!(SearchUnavailableProductsType),
    enum_type!(SearchableField),
    object_type!("SelectedOption"),
    input_type!("SelectedOptionInput"),
    object_type!("SellingPlan", ["HasMetafields"]),
    object_type!("SellingPlanAllocation"),
    object_type!("SellingPlanAllocationConnection"),
    object_type!("SellingPlanAllocationEdge"),
    object_type!("SellingPlanAllocationPriceAdjustment"),
    union_type!(SellingPlanBillingPolicy),
    object_type!("SellingPlanCheckoutCharge"),
    object_type!("SellingPlanCheckoutChargePercentageValue"),
    enum_type!(SellingPlanCheckoutChargeType),
    union_type!(SellingPlanCheckoutChargeValue),
    object_type!("SellingPlanConnection"),
    union_type!(SellingPlanDeliveryPolicy),
    object_type!("SellingPlanEdge"),
    object_type!("SellingPlanFixedAmountPriceAdjustment"),
    object_type!("SellingPlanFixedPriceAdjustment"),
    object_type!("SellingPlanGroup"),
    object_type!("SellingPlanGroupConnection"),
    object_type!("SellingPlanGroupEdge"),
    object_type!("SellingPlanGroupOption"),
    enum_type!(SellingPlanInterval),
    object_type!("SellingPlanOption"),
    object_type!("SellingPlanPercentagePriceAdjustment"),
    object_type!("SellingPlanPriceAdjustment"),
    union_type!(SellingPlanPriceAdjustmentValue),
    object_type!("SellingPlanRecurringBillingPolicy"),
    object_type!("SellingPlanRecurringDeliveryPolicy"),
    object_type!("Seo"),
    object_type!("Shop", ["HasMetafields", "Node"]),
    object_type!("ShopPayInstallmentsFinancingPlan", ["Node"]),
    enum_type!(ShopPayInstallmentsFinancingPlanFrequency),
    object_type!("ShopPayInstallmentsFinancingPlanTerm", ["Node"]),
    enum_type!(ShopPayInstallmentsLoan),
    object_type!("ShopPayInstallmentsPricing", ["Node"]),
    object_type!("ShopPayInstallmentsProductVariantPricing", ["Node"]),
    object_type!("ShopPayPaymentRequest"),
    object_type!("ShopPayPaymentRequestContactField"),
    object_type!("ShopPayPaymentRequestDeliveryMethod"),
    input_type!("ShopPayPaymentRequestDeliveryMethodInput"),
    enum_type!(ShopPayPaymentRequestDeliveryMethodType),
    object_type!("ShopPayPaymentRequestDiscount"),
    input_type!("ShopPayPaymentRequestDiscountInput"),
    object_type!("ShopPayPaymentRequestImage"),
    input_type!("ShopPayPaymentRequestImageInput"),
    input_type!("ShopPayPaymentRequestInput"),
    object_type!("ShopPayPaymentRequestLineItem"),
    input_type!("ShopPayPaymentRequestLineItemInput"),
    object_type!("ShopPayPaymentRequestReceipt"),
    object_type!("ShopPayPaymentRequestSession"),
    object_type!("ShopPayPaymentRequestSessionCreatePayload"),
    object_type!("ShopPayPaymentRequestSessionSubmitPayload"),
    object_type!("ShopPayPaymentRequestShippingLine"),
    input_type!("ShopPayPaymentRequestShippingLineInput"),
    object_type!("ShopPayPaymentRequestTotalShippingPrice"),
    input_type!("ShopPayPaymentRequestTotalShippingPriceInput"),
    input_type!("ShopPayWalletContentInput"),
    object_type!("ShopPolicy", ["Node"]),
    object_type!("ShopPolicyWithDefault"),
    object_type!("Sitemap"),
    object_type!("SitemapImage"),
    object_type!("SitemapResource", ["SitemapResourceInterface"]),
    interface_type!("SitemapResourceInterface", [], AnySitemapResource::POSSIBLE_TYPES),
    object_type!("SitemapResourceMetaobject", ["SitemapResourceInterface"]),
    enum_type!(SitemapType),
    object_type!("StoreAvailability"),
    object_type!("StoreAvailabilityConnection"),
    object_type!("StoreAvailabilityEdge"),
    scalar_type!("String"),
    object_type!("StringConnection"),
    object_type!("StringEdge"),
    object_type!("SubmissionError"),
    enum_type!(SubmissionErrorCode),
    object_type!("SubmitAlreadyAccepted"),
    object_type!("SubmitFailed"),
    object_type!("SubmitSuccess"),
    object_type!("SubmitThrottled"),
    object_type!("Swatch"),
    object_type!("TaxonomyCategory", ["Node"]),
    input_type!("TaxonomyMetafieldFilter"),
    interface_type!("Trackable", [], &["Article", "Collection", "Page", "Product", "SearchQuerySuggestion"]),
    scalar_type!("URL"),
    object_type!("UnitPriceMeasurement"),
    enum_type!(UnitPriceMeasurementMeasuredType),
    enum_type!(UnitPriceMeasurementMeasuredUnit),
    enum_type!(UnitSystem),
    scalar_type!("UnsignedInt64"),
    object_type!("UrlRedirect", ["Node"]),
    object_type!("UrlRedirectConnection"),
    object_type!("UrlRedirectEdge"),
    object_type!("UserError", ["DisplayableError"]),
    object_type!("UserErrorsShopPayPaymentRequestSessionUserErrors", ["DisplayableError"]),
    enum_type!(UserErrorsShopPayPaymentRequestSessionUserErrorsCode),
    input_type!("VariantOptionFilter"),
    object_type!("Video", ["Media", "Node"]),
    object_type!("VideoSource"),
    enum_type!(WeightUnit),
];

// Objects listed under an interface must implement its Rust trait.
macro_rules! assert_implements {
    ($iface:ident { $($ty:ident),+ $(,)? }) => {
        const _: () = {
            const fn implements<T: $crate::interfaces::$iface>() {}
            $(implements::<$crate::types::$ty>();)+
        };
    };
}

assert_implements!(Node {
    AppliedGiftCard,
    Article,
    Blog,
    Cart,
    CartLine,
    Collection,
    Comment,
    Company,
    CompanyContact,
    CompanyLocation,
    ComponentizableCartLine,
    ExternalVideo,
    GenericFile,
    Location,
    MailingAddress,
    Market,
    MediaImage,
    MediaPresentation,
    Menu,
    MenuItem,
    Metafield,
    Metaobject,
    Model3d,
    Order,
    Page,
    Product,
    ProductOption,
    ProductOptionValue,
    ProductVariant,
    Shop,
    ShopPayInstallmentsFinancingPlan,
    ShopPayInstallmentsFinancingPlanTerm,
    ShopPayInstallmentsPricing,
    ShopPayInstallmentsProductVariantPricing,
    ShopPolicy,
    TaxonomyCategory,
    UrlRedirect,
    Video,
});

assert_implements!(HasMetafields {
    Article,
    Blog,
    Cart,
    Collection,
    Company,
    CompanyLocation,
    Customer,
    Location,
    Market,
    Order,
    Page,
    Product,
    ProductVariant,
    SellingPlan,
    Shop,
});

assert_implements!(OnlineStorePublishable {
    Article,
    Blog,
    Collection,
    Metaobject,
    Page,
    Product,
});

assert_implements!(Trackable {
    Article,
    Collection,
    Page,
    Product,
    SearchQuerySuggestion,
});

assert_implements!(Media {
    ExternalVideo,
    MediaImage,
    Model3d,
    Video,
});

assert_implements!(DiscountApplication {
    AutomaticDiscountApplication,
    DiscountCodeApplication,
    ManualDiscountApplication,
    ScriptDiscountApplication,
});

assert_implements!(CartDiscountAllocation {
    CartAutomaticDiscountAllocation,
    CartCodeDiscountAllocation,
    CartCustomDiscountAllocation,
});

assert_implements!(BaseCartLine {
    CartLine,
    ComponentizableCartLine,
});

assert_implements!(SitemapResourceInterface {
    SitemapResource,
    SitemapResourceMetaobject,
});

assert_implements!(DisplayableError {
    CartUserError,
    CustomerUserError,
    MetafieldDeleteUserError,
    MetafieldsSetUserError,
    UserErrorsShopPayPaymentRequestSessionUserErrors,
    UserError,
});
// =============================================================================
// Lookups
// =============================================================================

/// Look up a type by schema name.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static TypeEntry> {
    TYPES
        .binary_search_by(|entry| entry.name.cmp(name))
        .ok()
        .and_then(|index| TYPES.get(index))
}

/// Every type of one kind, sorted by name.
pub fn by_kind(kind: TypeKind) -> impl Iterator<Item = &'static TypeEntry> {
    TYPES.iter().filter(move |entry| entry.kind == kind)
}

/// Concrete members of a union or interface. Empty for unknown names and
/// concrete types.
#[must_use]
pub fn possible_types(name: &str) -> &'static [&'static str] {
    lookup(name)
        .map(|entry| entry.possible_types)
        .unwrap_or_default()
}

/// Objects and interfaces declaring that they implement `interface`.
#[must_use]
pub fn implementers(interface: &str) -> Vec<&'static str> {
    TYPES
        .iter()
        .filter(|entry| entry.interfaces.contains(&interface))
        .map(|entry| entry.name)
        .collect()
}

/// Look up a directive by name (without the `@`).
#[must_use]
pub fn directive(name: &str) -> Option<&'static DirectiveDefinition> {
    DIRECTIVES.iter().find(|directive| directive.name == name)
}

/// Describe a type by schema name.
#[must_use]
pub fn describe(name: &str) -> Option<TypeDescription> {
    lookup(name).map(TypeDescription::from)
}

// =============================================================================
// Export
// =============================================================================

/// The whole catalogue in serializable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaExport {
    /// API version the catalogue is served as (`2025-01`, `unstable`).
    pub api_version: String,
    /// Name of the query root type.
    pub query_type: &'static str,
    /// Name of the mutation root type.
    pub mutation_type: &'static str,
    /// Every named type, sorted by name.
    pub types: Vec<TypeDescription>,
    /// Every declared directive.
    pub directives: &'static [DirectiveDefinition],
}

/// Snapshot the catalogue for an API version, usually
/// [`ExecutorConfig::api_version`](crate::config::ExecutorConfig::api_version).
#[must_use]
pub fn export(api_version: &str) -> SchemaExport {
    SchemaExport {
        api_version: api_version.to_owned(),
        query_type: "QueryRoot",
        mutation_type: "Mutation",
        types: TYPES.iter().map(TypeDescription::from).collect(),
        directives: DIRECTIVES,
    }
}

/// Snapshot the catalogue as JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn export_json(api_version: &str, pretty: bool) -> Result<String, serde_json::Error> {
    let export = export(api_version);
    if pretty {
        serde_json::to_string_pretty(&export)
    } else {
        serde_json::to_string(&export)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use storefront_schema_core::{BUILT_IN_SCALARS, CUSTOM_SCALARS};

    use crate::config::DEFAULT_API_VERSION;

    use super::*;
    use crate::enums::{CountryCode, ProductSortKeys};
    use crate::unions;

    fn sorted(mut names: Vec<&'static str>) -> Vec<&'static str> {
        names.sort_unstable();
        names
    }

    #[test]
    fn test_types_sorted_and_unique() {
        assert!(TYPES.windows(2).all(|pair| match pair {
            [a, b] => a.name < b.name,
            _ => true,
        }));
    }

    #[test]
    fn test_kind_counts() {
        assert_eq!(by_kind(TypeKind::Scalar).count(), 13);
        assert_eq!(by_kind(TypeKind::Interface).count(), 10);
        assert_eq!(by_kind(TypeKind::Union).count(), unions::all().len());
        assert_eq!(by_kind(TypeKind::Enum).count(), 62);
        assert_eq!(by_kind(TypeKind::InputObject).count(), 46);
    }

    #[test]
    fn test_scalars_match_core() {
        let scalars: HashSet<_> = by_kind(TypeKind::Scalar).map(|e| e.name).collect();
        let expected: HashSet<_> = BUILT_IN_SCALARS
            .iter()
            .chain(CUSTOM_SCALARS)
            .copied()
            .collect();
        assert_eq!(scalars, expected);
    }

    #[test]
    fn test_lookup() {
        let entry = lookup("CountryCode").unwrap();
        assert_eq!(entry.kind, TypeKind::Enum);
        assert_eq!(entry.values(), CountryCode::values());

        assert_eq!(lookup("CartInput").unwrap().kind, TypeKind::InputObject);
        assert_eq!(lookup("QueryRoot").unwrap().kind, TypeKind::Object);
        assert!(lookup("Checkout").is_none());
        assert!(lookup("product").is_none());
    }

    #[test]
    fn test_union_members_are_objects() {
        for (union, members) in unions::all() {
            assert_eq!(possible_types(union), members);
            for member in members {
                let entry = lookup(member).unwrap();
                assert_eq!(entry.kind, TypeKind::Object, "{union} member {member}");
            }
        }
    }

    #[test]
    fn test_interface_possible_types_match_implementers() {
        for interface in by_kind(TypeKind::Interface) {
            let objects: Vec<_> = implementers(interface.name)
                .into_iter()
                .filter(|name| lookup(name).is_some_and(|e| e.kind == TypeKind::Object))
                .collect();
            assert_eq!(
                sorted(interface.possible_types.to_vec()),
                objects,
                "{}",
                interface.name
            );
        }
    }

    #[test]
    fn test_declared_interfaces_exist() {
        for entry in TYPES {
            for interface in entry.interfaces {
                assert_eq!(lookup(interface).unwrap().kind, TypeKind::Interface);
            }
        }
    }

    #[test]
    fn test_media_implements_node() {
        assert_eq!(lookup("Media").unwrap().interfaces, &["Node"]);
        assert!(implementers("Node").contains(&"Media"));
        assert!(implementers("Node").contains(&"Video"));
        assert!(!implementers("Node").contains(&"Customer"));
    }

    #[test]
    fn test_enum_entries_match_rust_enums() {
        for entry in by_kind(TypeKind::Enum) {
            assert!(!entry.values().is_empty(), "{}", entry.name);
        }
        assert_eq!(
            lookup("ProductSortKeys").unwrap().values(),
            ProductSortKeys::values()
        );
    }

    #[test]
    fn test_type_kind_parses_case_insensitively() {
        assert_eq!("input_object".parse::<TypeKind>().unwrap(), TypeKind::InputObject);
        assert_eq!(TypeKind::InputObject.to_string(), "INPUT_OBJECT");
        assert!("table".parse::<TypeKind>().is_err());
    }

    #[test]
    fn test_directives() {
        let defer = directive("defer").unwrap();
        assert_eq!(defer.arguments.first().unwrap().default_value, Some("true"));
        assert!(directive("inContext").is_some());
        assert!(directive("skip").is_none());
        assert!(DIRECTIVES.iter().all(|directive| !directive.repeatable));
    }

    #[test]
    fn test_describe() {
        let json = serde_json::to_value(describe("PricingValue").unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "PricingValue",
                "kind": "UNION",
                "possibleTypes": ["MoneyV2", "PricingPercentageValue"]
            })
        );
        assert!(describe("Nope").is_none());
    }

    #[test]
    fn test_export_is_stable() {
        let first = export_json(DEFAULT_API_VERSION, false).unwrap();
        let second = export_json(DEFAULT_API_VERSION, false).unwrap();
        assert_eq!(first, second);

        let export = export(DEFAULT_API_VERSION);
        assert_eq!(export.types.len(), TYPES.len());
        assert_eq!(export.directives.len(), 3);
        assert_eq!(export.api_version, "2025-01");
    }

    #[test]
    fn test_export_carries_api_version() {
        let json: serde_json::Value =
            serde_json::from_str(&export_json("unstable", true).unwrap()).unwrap();
        assert_eq!(json["apiVersion"], "unstable");
        assert_eq!(json["queryType"], "QueryRoot");
    }
}
