//! Interface types of the Storefront API.
//!
//! Each interface is a trait stating the fields its implementers share.
//! Interfaces that appear in value position (`Product.media`, `Query.node`,
//! `Cart.lines`, ...) also get an `Any*` enum tagged by `__typename` that
//! implements the trait by delegating to the concrete member.
//!
//! # Example
//!
//! ```
//! use storefront_schema::interfaces::{AnyMedia, Media, Node};
//! use storefront_schema::resolvers::TypeResolver;
//!
//! let media: AnyMedia = serde_json::from_value(serde_json::json!({
//!     "__typename": "MediaImage",
//!     "alt": "Front view",
//!     "id": "gid://shopify/MediaImage/1",
//!     "image": null,
//!     "mediaContentType": "IMAGE",
//!     "presentation": null,
//!     "previewImage": null
//! }))
//! .unwrap();
//!
//! assert_eq!(media.typename(), "MediaImage");
//! assert_eq!(media.alt(), Some("Front view"));
//! assert_eq!(media.id().as_str(), "gid://shopify/MediaImage/1");
//! ```

use storefront_schema_core::{DateTime, Id, Url};

use crate::enums::{
    DiscountApplicationAllocationMethod, DiscountApplicationTargetSelection,
    DiscountApplicationTargetType, MediaContentType,
};
use crate::types::{
    AppliedGiftCard, Article, Attribute, AutomaticDiscountApplication, Blog, Cart,
    CartAutomaticDiscountAllocation, CartCodeDiscountAllocation, CartCustomDiscountAllocation,
    CartDiscountApplication, CartLine, CartLineCost, CartLineEstimatedCost, CartUserError,
    Collection, Comment, Company, CompanyContact, CompanyLocation, ComponentizableCartLine,
    Customer, CustomerUserError, DiscountCodeApplication, ExternalVideo, GenericFile, Image,
    Location, MailingAddress, ManualDiscountApplication, Market, MediaImage, MediaPresentation,
    Menu, MenuItem, Metafield, MetafieldDeleteUserError, MetafieldsSetUserError, Metaobject,
    Model3d, MoneyV2, Order, Page, Product, ProductOption, ProductOptionValue, ProductVariant,
    ScriptDiscountApplication, SearchQuerySuggestion, SellingPlan, SellingPlanAllocation, Shop,
    ShopPayInstallmentsFinancingPlan, ShopPayInstallmentsFinancingPlanTerm,
    ShopPayInstallmentsPricing, ShopPayInstallmentsProductVariantPricing, ShopPolicy,
    SitemapResource, SitemapResourceMetaobject, TaxonomyCategory, UrlRedirect, UserError,
    UserErrorsShopPayPaymentRequestSessionUserErrors, Video,
};
use crate::unions::{Merchandise, PricingValue, schema_union};

// =============================================================================
// Traits
// =============================================================================

/// An object with an ID field to support global identification, in accordance with the
/// [Relay specification](https://relay.dev/graphql/objectidentification.htm#sec-Node-Interface).
/// This interface is used by the [node](/docs/api/storefront/latest/queries/node)
/// and [nodes](/docs/api/storefront/latest/queries/nodes) queries.
pub trait Node {
    /// A globally-unique ID.
    fn id(&self) -> &Id;
}

/// Represents information about the metafields associated to the specified resource.
pub trait HasMetafields {
    /// The metafield selected by the `metafield(namespace, key)` field.
    fn metafield(&self) -> Option<&Metafield>;

    /// The metafields selected by the `metafields(identifiers)` field, in
    /// identifier order. Unset identifiers are `None`.
    fn metafields(&self) -> &[Option<Metafield>];

    /// Find a loaded metafield by namespace and key.
    ///
    /// Without a namespace, the app-reserved namespace applies on Shopify's
    /// side; locally any namespace matches the key.
    fn find_metafield(&self, namespace: Option<&str>, key: &str) -> Option<&Metafield> {
        self.metafield()
            .into_iter()
            .chain(self.metafields().iter().flatten())
            .find(|metafield| {
                metafield.key == key && namespace.is_none_or(|ns| metafield.namespace == ns)
            })
    }
}

/// Represents a resource that can be published to the Online Store sales channel.
pub trait OnlineStorePublishable {
    /// The URL used for viewing the resource on the shop's Online Store. Returns `null` if the resource is currently not published to the Online Store sales channel.
    fn online_store_url(&self) -> Option<&Url>;
}

/// Represents a resource that you can track the origin of the search traffic.
pub trait Trackable {
    /// URL parameters to be added to a page URL to track the origin of on-site search traffic.
    fn tracking_parameters(&self) -> Option<&str>;
}

/// Represents a media interface.
pub trait Media: Node {
    /// A word or phrase to share the nature or contents of a media.
    fn alt(&self) -> Option<&str>;
    /// The media content type.
    fn media_content_type(&self) -> MediaContentType;
    /// The presentation for a media.
    fn presentation(&self) -> Option<&MediaPresentation>;
    /// The preview image for the media.
    fn preview_image(&self) -> Option<&Image>;
}

/// Discount applications capture the intentions of a discount source at
/// the time of application.
pub trait DiscountApplication {
    /// The method by which the discount's value is allocated to its entitled items.
    fn allocation_method(&self) -> DiscountApplicationAllocationMethod;
    /// Which lines of targetType that the discount is allocated over.
    fn target_selection(&self) -> DiscountApplicationTargetSelection;
    /// The type of line that the discount is applicable towards.
    fn target_type(&self) -> DiscountApplicationTargetType;
    /// The value of the discount application.
    fn value(&self) -> &PricingValue;
}

/// The discounts that have been applied to the cart line.
pub trait CartDiscountAllocation {
    /// The discount that have been applied on the cart line.
    fn discount_application(&self) -> &CartDiscountApplication;
    /// The discounted amount that has been applied to the cart line.
    fn discounted_amount(&self) -> &MoneyV2;
    /// The type of line that the discount is applicable towards.
    fn target_type(&self) -> DiscountApplicationTargetType;
}

/// Represents a cart line common fields.
pub trait BaseCartLine: Node {
    /// An attribute associated with the cart line.
    fn attribute(&self) -> Option<&Attribute>;
    /// The attributes associated with the cart line.
    fn attributes(&self) -> &[Attribute];
    /// The cost of the merchandise that the buyer will pay for at checkout.
    fn cost(&self) -> &CartLineCost;
    /// The discounts that have been applied to the cart line.
    fn discount_allocations(&self) -> &[AnyCartDiscountAllocation];
    /// The estimated cost of the merchandise that the buyer will pay for at checkout.
    fn estimated_cost(&self) -> &CartLineEstimatedCost;
    /// The merchandise that the buyer intends to purchase.
    fn merchandise(&self) -> &Merchandise;
    /// The quantity of the merchandise that the customer intends to purchase.
    fn quantity(&self) -> i32;
    /// The selling plan associated with the cart line.
    fn selling_plan_allocation(&self) -> Option<&SellingPlanAllocation>;
}

/// Represents the common fields for all sitemap resource types.
pub trait SitemapResourceInterface {
    /// Resource's handle.
    fn handle(&self) -> &str;
    /// The date and time when the resource was updated.
    fn updated_at(&self) -> &DateTime;
}

/// Represents an error in the input of a mutation.
pub trait DisplayableError {
    /// The path to the input field that caused the error.
    fn field(&self) -> Option<&[String]>;
    /// The error message.
    fn message(&self) -> &str;
    /// The schema literal of the error code, for error types that carry one.
    fn code(&self) -> Option<&'static str> {
        None
    }
}

// =============================================================================
// Value Enums
// =============================================================================

schema_union! {
    /// A value of the `Media` interface.
    AnyMedia {
        ExternalVideo(Box<ExternalVideo>),
        MediaImage(Box<MediaImage>),
        Model3d(Box<Model3d>),
        Video(Box<Video>),
    }
}

schema_union! {
    /// A value of the `Node` interface, as returned by `node` and `nodes`.
    AnyNode {
        AppliedGiftCard(Box<AppliedGiftCard>),
        Article(Box<Article>),
        Blog(Box<Blog>),
        Cart(Box<Cart>),
        CartLine(Box<CartLine>),
        Collection(Box<Collection>),
        Comment(Box<Comment>),
        Company(Box<Company>),
        CompanyContact(Box<CompanyContact>),
        CompanyLocation(Box<CompanyLocation>),
        ComponentizableCartLine(Box<ComponentizableCartLine>),
        ExternalVideo(Box<ExternalVideo>),
        GenericFile(Box<GenericFile>),
        Location(Box<Location>),
        MailingAddress(Box<MailingAddress>),
        Market(Box<Market>),
        MediaImage(Box<MediaImage>),
        MediaPresentation(Box<MediaPresentation>),
        Menu(Box<Menu>),
        MenuItem(Box<MenuItem>),
        Metafield(Box<Metafield>),
        Metaobject(Box<Metaobject>),
        Model3d(Box<Model3d>),
        Order(Box<Order>),
        Page(Box<Page>),
        Product(Box<Product>),
        ProductOption(Box<ProductOption>),
        ProductOptionValue(Box<ProductOptionValue>),
        ProductVariant(Box<ProductVariant>),
        Shop(Box<Shop>),
        ShopPayInstallmentsFinancingPlan(Box<ShopPayInstallmentsFinancingPlan>),
        ShopPayInstallmentsFinancingPlanTerm(Box<ShopPayInstallmentsFinancingPlanTerm>),
        ShopPayInstallmentsPricing(Box<ShopPayInstallmentsPricing>),
        ShopPayInstallmentsProductVariantPricing(Box<ShopPayInstallmentsProductVariantPricing>),
        ShopPolicy(Box<ShopPolicy>),
        TaxonomyCategory(Box<TaxonomyCategory>),
        UrlRedirect(Box<UrlRedirect>),
        Video(Box<Video>),
    }
}

schema_union! {
    /// A value of the `DiscountApplication` interface.
    AnyDiscountApplication {
        AutomaticDiscountApplication(Box<AutomaticDiscountApplication>),
        DiscountCodeApplication(Box<DiscountCodeApplication>),
        ManualDiscountApplication(Box<ManualDiscountApplication>),
        ScriptDiscountApplication(Box<ScriptDiscountApplication>),
    }
}

schema_union! {
    /// A value of the `BaseCartLine` interface.
    AnyBaseCartLine {
        CartLine(Box<CartLine>),
        ComponentizableCartLine(Box<ComponentizableCartLine>),
    }
}

schema_union! {
    /// A value of the `CartDiscountAllocation` interface.
    AnyCartDiscountAllocation {
        CartAutomaticDiscountAllocation(Box<CartAutomaticDiscountAllocation>),
        CartCodeDiscountAllocation(Box<CartCodeDiscountAllocation>),
        CartCustomDiscountAllocation(Box<CartCustomDiscountAllocation>),
    }
}

schema_union! {
    /// A value of the `SitemapResourceInterface` interface.
    AnySitemapResource {
        SitemapResource(Box<SitemapResource>),
        SitemapResourceMetaobject(Box<SitemapResourceMetaobject>),
    }
}

/// Borrow the boxed member of an `Any*` enum as a trait object.
macro_rules! delegate_inner {
    ($any:ident as $trait:path { $($variant:ident),+ $(,)? }) => {
        impl $any {
            fn inner(&self) -> &dyn $trait {
                match self {
                    $(Self::$variant(value) => &**value,)+
                }
            }
        }
    };
}

delegate_inner!(AnyMedia as Media {
    ExternalVideo,
    MediaImage,
    Model3d,
    Video,
});

delegate_inner!(AnyNode as Node {
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

delegate_inner!(AnyDiscountApplication as DiscountApplication {
    AutomaticDiscountApplication,
    DiscountCodeApplication,
    ManualDiscountApplication,
    ScriptDiscountApplication,
});

delegate_inner!(AnyBaseCartLine as BaseCartLine {
    CartLine,
    ComponentizableCartLine,
});

delegate_inner!(AnyCartDiscountAllocation as CartDiscountAllocation {
    CartAutomaticDiscountAllocation,
    CartCodeDiscountAllocation,
    CartCustomDiscountAllocation,
});

delegate_inner!(AnySitemapResource as SitemapResourceInterface {
    SitemapResource,
    SitemapResourceMetaobject,
});

impl Node for AnyMedia {
    fn id(&self) -> &Id {
        self.inner().id()
    }
}

impl Media for AnyMedia {
    fn alt(&self) -> Option<&str> {
        self.inner().alt()
    }

    fn media_content_type(&self) -> MediaContentType {
        self.inner().media_content_type()
    }

    fn presentation(&self) -> Option<&MediaPresentation> {
        self.inner().presentation()
    }

    fn preview_image(&self) -> Option<&Image> {
        self.inner().preview_image()
    }
}

impl Node for AnyNode {
    fn id(&self) -> &Id {
        self.inner().id()
    }
}

impl DiscountApplication for AnyDiscountApplication {
    fn allocation_method(&self) -> DiscountApplicationAllocationMethod {
        self.inner().allocation_method()
    }

    fn target_selection(&self) -> DiscountApplicationTargetSelection {
        self.inner().target_selection()
    }

    fn target_type(&self) -> DiscountApplicationTargetType {
        self.inner().target_type()
    }

    fn value(&self) -> &PricingValue {
        self.inner().value()
    }
}

impl Node for AnyBaseCartLine {
    fn id(&self) -> &Id {
        self.inner().id()
    }
}

impl BaseCartLine for AnyBaseCartLine {
    fn attribute(&self) -> Option<&Attribute> {
        self.inner().attribute()
    }

    fn attributes(&self) -> &[Attribute] {
        self.inner().attributes()
    }

    fn cost(&self) -> &CartLineCost {
        self.inner().cost()
    }

    fn discount_allocations(&self) -> &[AnyCartDiscountAllocation] {
        self.inner().discount_allocations()
    }

    fn estimated_cost(&self) -> &CartLineEstimatedCost {
        self.inner().estimated_cost()
    }

    fn merchandise(&self) -> &Merchandise {
        self.inner().merchandise()
    }

    fn quantity(&self) -> i32 {
        self.inner().quantity()
    }

    fn selling_plan_allocation(&self) -> Option<&SellingPlanAllocation> {
        self.inner().selling_plan_allocation()
    }
}

impl CartDiscountAllocation for AnyCartDiscountAllocation {
    fn discount_application(&self) -> &CartDiscountApplication {
        self.inner().discount_application()
    }

    fn discounted_amount(&self) -> &MoneyV2 {
        self.inner().discounted_amount()
    }

    fn target_type(&self) -> DiscountApplicationTargetType {
        self.inner().target_type()
    }
}

impl SitemapResourceInterface for AnySitemapResource {
    fn handle(&self) -> &str {
        self.inner().handle()
    }

    fn updated_at(&self) -> &DateTime {
        self.inner().updated_at()
    }
}

// =============================================================================
// Implementations
// =============================================================================

macro_rules! impl_node {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Node for $ty {
                fn id(&self) -> &Id {
                    &self.id
                }
            }
        )+
    };
}

macro_rules! impl_has_metafields {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl HasMetafields for $ty {
                fn metafield(&self) -> Option<&Metafield> {
                    self.metafield.as_ref()
                }

                fn metafields(&self) -> &[Option<Metafield>] {
                    &self.metafields
                }
            }
        )+
    };
}

macro_rules! impl_online_store_publishable {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl OnlineStorePublishable for $ty {
                fn online_store_url(&self) -> Option<&Url> {
                    self.online_store_url.as_ref()
                }
            }
        )+
    };
}

macro_rules! impl_trackable {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Trackable for $ty {
                fn tracking_parameters(&self) -> Option<&str> {
                    self.tracking_parameters.as_deref()
                }
            }
        )+
    };
}

macro_rules! impl_media {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Media for $ty {
                fn alt(&self) -> Option<&str> {
                    self.alt.as_deref()
                }

                fn media_content_type(&self) -> MediaContentType {
                    self.media_content_type
                }

                fn presentation(&self) -> Option<&MediaPresentation> {
                    self.presentation.as_ref()
                }

                fn preview_image(&self) -> Option<&Image> {
                    self.preview_image.as_ref()
                }
            }
        )+
    };
}

macro_rules! impl_discount_application {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl DiscountApplication for $ty {
                fn allocation_method(&self) -> DiscountApplicationAllocationMethod {
                    self.allocation_method
                }

                fn target_selection(&self) -> DiscountApplicationTargetSelection {
                    self.target_selection
                }

                fn target_type(&self) -> DiscountApplicationTargetType {
                    self.target_type
                }

                fn value(&self) -> &PricingValue {
                    &self.value
                }
            }
        )+
    };
}

macro_rules! impl_cart_discount_allocation {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl CartDiscountAllocation for $ty {
                fn discount_application(&self) -> &CartDiscountApplication {
                    &self.discount_application
                }

                fn discounted_amount(&self) -> &MoneyV2 {
                    &self.discounted_amount
                }

                fn target_type(&self) -> DiscountApplicationTargetType {
                    self.target_type
                }
            }
        )+
    };
}

macro_rules! impl_base_cart_line {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl BaseCartLine for $ty {
                fn attribute(&self) -> Option<&Attribute> {
                    self.attribute.as_ref()
                }

                fn attributes(&self) -> &[Attribute] {
                    &self.attributes
                }

                fn cost(&self) -> &CartLineCost {
                    &self.cost
                }

                fn discount_allocations(&self) -> &[AnyCartDiscountAllocation] {
                    &self.discount_allocations
                }

                fn estimated_cost(&self) -> &CartLineEstimatedCost {
                    &self.estimated_cost
                }

                fn merchandise(&self) -> &Merchandise {
                    &self.merchandise
                }

                fn quantity(&self) -> i32 {
                    self.quantity
                }

                fn selling_plan_allocation(&self) -> Option<&SellingPlanAllocation> {
                    self.selling_plan_allocation.as_ref()
                }
            }
        )+
    };
}

macro_rules! impl_sitemap_resource {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl SitemapResourceInterface for $ty {
                fn handle(&self) -> &str {
                    &self.handle
                }

                fn updated_at(&self) -> &DateTime {
                    &self.updated_at
                }
            }
        )+
    };
}

macro_rules! impl_displayable_error {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl DisplayableError for $ty {
                fn field(&self) -> Option<&[String]> {
                    self.field.as_deref()
                }

                fn message(&self) -> &str {
                    &self.message
                }

                fn code(&self) -> Option<&'static str> {
                    self.code.map(Into::into)
                }
            }
        )+
    };
}

impl_node!(
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
);

impl_has_metafields!(
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
);

impl_online_store_publishable!(Article, Blog, Collection, Metaobject, Page, Product);

impl_trackable!(Article, Collection, Page, Product, SearchQuerySuggestion);

impl_media!(ExternalVideo, MediaImage, Model3d, Video);

impl_discount_application!(
    AutomaticDiscountApplication,
    DiscountCodeApplication,
    ManualDiscountApplication,
    ScriptDiscountApplication,
);

impl_cart_discount_allocation!(
    CartAutomaticDiscountAllocation,
    CartCodeDiscountAllocation,
    CartCustomDiscountAllocation,
);

impl_base_cart_line!(CartLine, ComponentizableCartLine);

impl_sitemap_resource!(SitemapResource, SitemapResourceMetaobject);

impl_displayable_error!(
    CartUserError,
    CustomerUserError,
    MetafieldDeleteUserError,
    MetafieldsSetUserError,
    UserErrorsShopPayPaymentRequestSessionUserErrors,
);

impl DisplayableError for UserError {
    fn field(&self) -> Option<&[String]> {
        self.field.as_deref()
    }

    fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::resolvers::TypeResolver;

    fn metafield(namespace: &str, key: &str, value: &str) -> serde_json::Value {
        serde_json::json!({
            "createdAt": "2024-01-01T00:00:00Z",
            "description": null,
            "id": format!("gid://shopify/Metafield/{key}"),
            "key": key,
            "namespace": namespace,
            "parentResource": { "__typename": "Market", "handle": "us", "id": "gid://shopify/Market/1", "metafield": null, "metafields": [] },
            "reference": null,
            "references": null,
            "type": "single_line_text_field",
            "updatedAt": "2024-01-01T00:00:00Z",
            "value": value
        })
    }

    fn market() -> Market {
        serde_json::from_value(serde_json::json!({
            "handle": "ca",
            "id": "gid://shopify/Market/2",
            "metafield": metafield("custom", "tagline", "Hello Canada"),
            "metafields": [
                metafield("custom", "banner", "Free shipping"),
                null,
                metafield("reviews", "banner", "4.8 stars")
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_find_metafield_by_namespace() {
        let market = market();
        assert_eq!(
            market.find_metafield(Some("reviews"), "banner").unwrap().value,
            "4.8 stars"
        );
        assert_eq!(
            market.find_metafield(Some("custom"), "tagline").unwrap().value,
            "Hello Canada"
        );
        assert!(market.find_metafield(Some("custom"), "missing").is_none());
    }

    #[test]
    fn test_find_metafield_without_namespace_matches_key() {
        let market = market();
        assert_eq!(
            market.find_metafield(None, "banner").unwrap().value,
            "Free shipping"
        );
    }

    #[test]
    fn test_any_discount_application_delegates() {
        let application: AnyDiscountApplication = serde_json::from_value(serde_json::json!({
            "__typename": "ManualDiscountApplication",
            "allocationMethod": "EACH",
            "description": null,
            "targetSelection": "EXPLICIT",
            "targetType": "SHIPPING_LINE",
            "title": "Staff discount",
            "value": { "__typename": "MoneyV2", "amount": "5.00", "currencyCode": "USD" }
        }))
        .unwrap();

        assert_eq!(application.typename(), "ManualDiscountApplication");
        assert_eq!(
            application.allocation_method(),
            DiscountApplicationAllocationMethod::Each
        );
        assert_eq!(
            application.target_type(),
            DiscountApplicationTargetType::ShippingLine
        );
        assert!(matches!(application.value(), PricingValue::MoneyV2(_)));
    }

    #[test]
    fn test_any_sitemap_resource_delegates() {
        let resource: AnySitemapResource = serde_json::from_value(serde_json::json!({
            "__typename": "SitemapResourceMetaobject",
            "handle": "spring-lookbook",
            "onlineStoreUrlHandle": "lookbooks",
            "type": "lookbook",
            "updatedAt": "2024-03-20T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(resource.handle(), "spring-lookbook");
        assert_eq!(resource.updated_at().to_string(), "2024-03-20T10:00:00Z");
    }

    #[test]
    fn test_user_error_has_no_code() {
        let error = UserError {
            field: None,
            message: "Something went wrong".to_owned(),
        };
        assert_eq!(error.code(), None);
        assert_eq!(error.message(), "Something went wrong");
    }

    #[test]
    fn test_any_node_possible_types_are_sorted() {
        let mut sorted = AnyNode::POSSIBLE_TYPES.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, AnyNode::POSSIBLE_TYPES);
    }
}
