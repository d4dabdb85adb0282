//! Enum types of the Storefront API schema.
//!
//! Every enum serializes to the exact schema literal
//! (`SCREAMING_SNAKE_CASE`), parses back with `FromStr`, and exposes its full
//! value list through [`SchemaEnum`].
//!
//! # Example
//!
//! ```
//! use storefront_schema::enums::{CountryCode, SchemaEnum};
//!
//! assert_eq!(CountryCode::Ca.as_str(), "CA");
//! assert_eq!("CA".parse::<CountryCode>().unwrap(), CountryCode::Ca);
//! assert!(CountryCode::values().contains(&"ZZ"));
//! ```

use std::str::FromStr;

use strum::VariantArray;

/// Implement [`SchemaEnum`] using the Rust type name as the schema name.
macro_rules! impl_schema_enum {
    ($($ty:ident),* $(,)?) => {
        $(
            impl $crate::enums::SchemaEnum for $ty {
                const NAME: &'static str = stringify!($ty);
            }
        )*
    };
}

pub(crate) use impl_schema_enum;

pub mod cart;
pub mod country;
pub mod currency;
pub mod customer;
pub mod language;
pub mod media;
pub mod order;
pub mod search;
pub mod selling_plan;
pub mod shop;
pub mod sort_keys;

pub use cart::*;
pub use country::*;
pub use currency::*;
pub use customer::*;
pub use language::*;
pub use media::*;
pub use order::*;
pub use search::*;
pub use selling_plan::*;
pub use shop::*;
pub use sort_keys::*;

/// A closed set of schema enum values.
pub trait SchemaEnum:
    Copy + Eq + core::hash::Hash + FromStr + Into<&'static str> + VariantArray + 'static
{
    /// Schema name of the enum (e.g. `"CountryCode"`).
    const NAME: &'static str;

    /// The schema literal for this value.
    fn as_str(self) -> &'static str {
        self.into()
    }

    /// Every schema literal, in declaration order.
    #[must_use]
    fn values() -> Vec<&'static str> {
        Self::VARIANTS.iter().map(|v| (*v).into()).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn assert_round_trips<E>()
    where
        E: SchemaEnum + core::fmt::Debug + serde::Serialize + serde::de::DeserializeOwned,
        <E as FromStr>::Err: core::fmt::Debug,
    {
        for variant in E::VARIANTS {
            let literal = variant.as_str();
            assert_eq!(
                literal,
                literal.to_ascii_uppercase(),
                "{}::{variant:?} is not upper case",
                E::NAME
            );
            assert_eq!(literal.parse::<E>().unwrap(), *variant);

            let json = serde_json::to_string(variant).unwrap();
            assert_eq!(json, format!("\"{literal}\""));
            assert_eq!(serde_json::from_str::<E>(&json).unwrap(), *variant);
        }

        let values = E::values();
        let unique: std::collections::HashSet<_> = values.iter().collect();
        assert_eq!(unique.len(), values.len(), "{} has duplicates", E::NAME);
    }

    #[test]
    fn test_large_enums_round_trip() {
        assert_round_trips::<CountryCode>();
        assert_round_trips::<CurrencyCode>();
        assert_round_trips::<LanguageCode>();
    }

    #[test]
    fn test_error_code_enums_round_trip() {
        assert_round_trips::<CartErrorCode>();
        assert_round_trips::<CartWarningCode>();
        assert_round_trips::<CompletionErrorCode>();
        assert_round_trips::<CustomerErrorCode>();
        assert_round_trips::<MetafieldDeleteErrorCode>();
        assert_round_trips::<MetafieldsSetUserErrorCode>();
        assert_round_trips::<SubmissionErrorCode>();
        assert_round_trips::<UserErrorsShopPayPaymentRequestSessionUserErrorsCode>();
    }

    #[test]
    fn test_sort_key_enums_round_trip() {
        assert_round_trips::<ArticleSortKeys>();
        assert_round_trips::<BlogSortKeys>();
        assert_round_trips::<CollectionSortKeys>();
        assert_round_trips::<LocationSortKeys>();
        assert_round_trips::<OrderSortKeys>();
        assert_round_trips::<PageSortKeys>();
        assert_round_trips::<ProductCollectionSortKeys>();
        assert_round_trips::<ProductImageSortKeys>();
        assert_round_trips::<ProductMediaSortKeys>();
        assert_round_trips::<ProductSortKeys>();
        assert_round_trips::<ProductVariantSortKeys>();
        assert_round_trips::<SearchSortKeys>();
    }

    #[test]
    fn test_digit_literals() {
        assert_eq!(MediaContentType::Model3d.as_str(), "MODEL_3D");
        assert_eq!(UnitPriceMeasurementMeasuredUnit::M2.as_str(), "M2");
        assert_eq!(
            SubmissionErrorCode::DeliveryAddress1Required.as_str(),
            "DELIVERY_ADDRESS1_REQUIRED"
        );
        assert_eq!(LanguageCode::PtBr.as_str(), "PT_BR");
    }

    #[test]
    fn test_unknown_literal_rejected() {
        assert!("NARNIA".parse::<CountryCode>().is_err());
        assert!(serde_json::from_str::<CurrencyCode>("\"DOGE\"").is_err());
    }
}
