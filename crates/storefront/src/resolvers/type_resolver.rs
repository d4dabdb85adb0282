//! `__resolveType` for abstract types.

/// Resolve the concrete type of a union or interface value.
///
/// Implemented by every union and `Any*` interface enum. The typename is
/// the value's `__typename` on the wire.
///
/// # Example
///
/// ```
/// use storefront_schema::resolvers::TypeResolver;
/// use storefront_schema::unions::PricingValue;
///
/// assert!(PricingValue::is_type_of("MoneyV2"));
/// assert!(!PricingValue::is_type_of("Product"));
/// ```
pub trait TypeResolver {
    /// Schema names of the member types, in declaration order.
    const POSSIBLE_TYPES: &'static [&'static str];

    /// Schema name of this value's concrete type.
    fn typename(&self) -> &'static str;

    /// Whether `typename` is a member of this abstract type.
    #[must_use]
    fn is_type_of(typename: &str) -> bool {
        Self::POSSIBLE_TYPES.contains(&typename)
    }
}
