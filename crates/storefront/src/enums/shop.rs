//! Shop, Shop Pay, sitemap and measurement enums.

use serde::{Deserialize, Serialize};

use super::impl_schema_enum;

/// The precision of the value returned by a count field.
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
pub enum CountPrecision {
    /// The count is at least the value. A count precision of `AT_LEAST` is returned when the count exceeds the limit.
    AtLeast,
    /// The count is exactly the value.
    Exact,
}

/// A menu item type.
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
pub enum MenuItemType {
    /// An article link.
    Article,
    /// A blog link.
    Blog,
    /// A catalog link.
    Catalog,
    /// A collection link.
    Collection,
    /// A collection link.
    Collections,
    /// A customer account page link.
    CustomerAccountPage,
    /// A frontpage link.
    Frontpage,
    /// An http link.
    Http,
    /// A metaobject page link.
    Metaobject,
    /// A page link.
    Page,
    /// A product link.
    Product,
    /// A search link.
    Search,
    /// A shop policy link.
    ShopPolicy,
}

/// The payment frequency for a Shop Pay Installments Financing Plan.
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
pub enum ShopPayInstallmentsFinancingPlanFrequency {
    /// Monthly payment frequency.
    Monthly,
    /// Weekly payment frequency.
    Weekly,
}

/// The loan type for a Shop Pay Installments Financing Plan Term.
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
pub enum ShopPayInstallmentsLoan {
    /// An interest-bearing loan type.
    Interest,
    /// A split-pay loan type.
    SplitPay,
    /// A zero-percent loan type.
    ZeroPercent,
}

/// Represents the delivery method type for a Shop Pay payment request.
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
pub enum ShopPayPaymentRequestDeliveryMethodType {
    /// The delivery method type is pickup.
    Pickup,
    /// The delivery method type is shipping.
    Shipping,
}

/// The types of resources potentially present in a sitemap.
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
pub enum SitemapType {
    /// Articles present in the sitemap.
    Article,
    /// Blogs present in the sitemap.
    Blog,
    /// Collections present in the sitemap.
    Collection,
    /// Metaobjects present in the sitemap. Only [publishable](https://shopify.dev/docs/apps/build/custom-data/metaobjects/use-metaobject-capabilities#make-metaobjects-publishable) metaobjects are shown.
    Metaobject,
    /// Pages present in the sitemap.
    Page,
    /// Products present in the sitemap.
    Product,
}

/// The accepted types of unit of measurement.
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
pub enum UnitPriceMeasurementMeasuredType {
    /// Unit of measurements representing areas.
    Area,
    /// Unit of measurements representing counts.
    Count,
    /// Unit of measurements representing lengths.
    Length,
    /// Unit of measurements representing volumes.
    Volume,
    /// Unit of measurements representing weights.
    Weight,
}

/// The valid units of measurement for a unit price measurement.
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
pub enum UnitPriceMeasurementMeasuredUnit {
    /// 100 centiliters equals 1 liter.
    Cl,
    /// 100 centimeters equals 1 meter.
    Cm,
    /// Metric system unit of weight.
    G,
    /// 1 item, a unit of count.
    Item,
    /// 1 kilogram equals 1000 grams.
    Kg,
    /// Metric system unit of volume.
    L,
    /// Metric system unit of length.
    M,
    /// Metric system unit of area.
    #[serde(rename = "M2")]
    #[strum(serialize = "M2")]
    M2,
    /// 1 cubic meter equals 1000 liters.
    #[serde(rename = "M3")]
    #[strum(serialize = "M3")]
    M3,
    /// 1000 milligrams equals 1 gram.
    Mg,
    /// 1000 milliliters equals 1 liter.
    Ml,
    /// 1000 millimeters equals 1 meter.
    Mm,
}

/// Systems of weights and measures.
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
pub enum UnitSystem {
    /// Imperial system of weights and measures.
    ImperialSystem,
    /// Metric system of weights and measures.
    MetricSystem,
}

/// Possible error codes that can be returned by `ShopPayPaymentRequestSessionUserErrors`.
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
pub enum UserErrorsShopPayPaymentRequestSessionUserErrorsCode {
    /// Idempotency key has already been used.
    IdempotencyKeyAlreadyUsed,
    /// Payment request input is invalid.
    PaymentRequestInvalidInput,
    /// Payment request not found.
    PaymentRequestNotFound,
}

/// Units of measurement for weight.
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
pub enum WeightUnit {
    /// Metric system unit of mass.
    Grams,
    /// 1 kilogram equals 1000 grams.
    Kilograms,
    /// Imperial system unit of mass.
    Ounces,
    /// 1 pound equals 16 ounces.
    Pounds,
}

impl_schema_enum!(
    CountPrecision,
    MenuItemType,
    ShopPayInstallmentsFinancingPlanFrequency,
    ShopPayInstallmentsLoan,
    ShopPayPaymentRequestDeliveryMethodType,
    SitemapType,
    UnitPriceMeasurementMeasuredType,
    UnitPriceMeasurementMeasuredUnit,
    UnitSystem,
    UserErrorsShopPayPaymentRequestSessionUserErrorsCode,
    WeightUnit,
);

impl WeightUnit {
    /// Grams per one of this unit.
    #[must_use]
    pub const fn grams(self) -> f64 {
        match self {
            Self::Grams => 1.0,
            Self::Kilograms => 1000.0,
            Self::Ounces => 28.349_523_125,
            Self::Pounds => 453.592_37,
        }
    }

    /// Convert a weight in this unit to another unit.
    #[must_use]
    pub fn convert(self, weight: f64, to: Self) -> f64 {
        weight * self.grams() / to.grams()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_area_and_volume_units() {
        assert_eq!(UnitPriceMeasurementMeasuredUnit::M3.to_string(), "M3");
        assert_eq!(
            "M2".parse::<UnitPriceMeasurementMeasuredUnit>().unwrap(),
            UnitPriceMeasurementMeasuredUnit::M2
        );
    }

    #[test]
    fn test_weight_conversion() {
        let grams = WeightUnit::Kilograms.convert(1.5, WeightUnit::Grams);
        assert!((grams - 1500.0).abs() < f64::EPSILON);

        let ounces = WeightUnit::Pounds.convert(1.0, WeightUnit::Ounces);
        assert!((ounces - 16.0).abs() < 1e-9);
    }
}
