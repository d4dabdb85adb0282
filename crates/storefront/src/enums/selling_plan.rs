//! Selling plan enums.

use serde::{Deserialize, Serialize};

use super::impl_schema_enum;

/// The checkout charge when the full amount isn't charged at checkout.
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
pub enum SellingPlanCheckoutChargeType {
    /// The checkout charge is a percentage of the product or variant price.
    Percentage,
    /// The checkout charge is a fixed price amount.
    Price,
}

/// Represents a valid selling plan interval.
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
pub enum SellingPlanInterval {
    /// Day interval.
    Day,
    /// Month interval.
    Month,
    /// Week interval.
    Week,
    /// Year interval.
    Year,
}

impl_schema_enum!(
    SellingPlanCheckoutChargeType,
    SellingPlanInterval,
);

impl SellingPlanInterval {
    /// Approximate length of one interval in days.
    #[must_use]
    pub const fn approximate_days(self) -> u32 {
        match self {
            Self::Day => 1,
            Self::Week => 7,
            Self::Month => 30,
            Self::Year => 365,
        }
    }
}
