//! Selling plans: subscriptions, pre-orders and deferred purchase options.

use serde::{Deserialize, Serialize};
use storefront_schema_core::Id;

use super::{Metafield, MoneyV2};
use crate::connection::SellingPlanConnection;
use crate::enums::{SellingPlanCheckoutChargeType, SellingPlanInterval};
use crate::unions::{
    SellingPlanBillingPolicy, SellingPlanCheckoutChargeValue, SellingPlanDeliveryPolicy,
    SellingPlanPriceAdjustmentValue,
};

// =============================================================================
// Selling Plans
// =============================================================================

/// Represents how products and variants can be sold and purchased.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellingPlan {
    /// The billing policy for the selling plan.
    pub billing_policy: Option<SellingPlanBillingPolicy>,
    /// The initial payment due for the purchase.
    pub checkout_charge: SellingPlanCheckoutCharge,
    /// The delivery policy for the selling plan.
    pub delivery_policy: Option<SellingPlanDeliveryPolicy>,
    /// The description of the selling plan.
    pub description: Option<String>,
    /// A globally-unique ID.
    pub id: Id,
    /// A [custom field](https://shopify.dev/docs/apps/build/custom-data), including its `namespace` and `key`, that's associated with a Shopify resource for the purposes of adding and storing additional information.
    pub metafield: Option<Metafield>,
    /// A list of [custom fields](/docs/apps/build/custom-data) that a merchant associates with a Shopify resource.
    pub metafields: Vec<Option<Metafield>>,
    /// The name of the selling plan. For example, '6 weeks of prepaid granola, delivered weekly'.
    pub name: String,
    /// The selling plan options available in the drop-down list in the storefront. For example, 'Delivery every week' or 'Delivery every 2 weeks' specifies the delivery frequency options for the product. Individual selling plans contribute their options to the associated selling plan group. For example, a selling plan group might have an option called `option1: Delivery every`. One selling plan in that group could contribute `option1: 2 weeks` with the pricing for that option, and another selling plan could contribute `option1: 4 weeks`, with different pricing.
    pub options: Vec<SellingPlanOption>,
    /// The price adjustments that a selling plan makes when a variant is purchased with a selling plan.
    pub price_adjustments: Vec<SellingPlanPriceAdjustment>,
    /// Whether purchasing the selling plan will result in multiple deliveries.
    pub recurring_deliveries: bool,
}

/// Represents a selling method. For example, 'Subscribe and save' is a selling method where customers pay for goods or services per delivery. A selling plan group contains individual selling plans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellingPlanGroup {
    /// A display friendly name for the app that created the selling plan group.
    pub app_name: Option<String>,
    /// The name of the selling plan group.
    pub name: String,
    /// Represents the selling plan options available in the drop-down list in the storefront. For example, 'Delivery every week' or 'Delivery every 2 weeks' specifies the delivery frequency options for the product.
    pub options: Vec<SellingPlanGroupOption>,
    /// A list of selling plans in a selling plan group. A selling plan is a representation of how products and variants can be sold and purchased. For example, an individual selling plan could be '6 weeks of prepaid granola, delivered weekly'.
    pub selling_plans: SellingPlanConnection,
}

/// Represents an option on a selling plan group that's available in the drop-down list in the storefront.
///
/// Individual selling plans contribute their options to the associated selling plan group. For example, a selling plan group might have an option called `option1: Delivery every`. One selling plan in that group could contribute `option1: 2 weeks` with the pricing for that option, and another selling plan could contribute `option1: 4 weeks`, with different pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellingPlanGroupOption {
    /// The name of the option. For example, 'Delivery every'.
    pub name: String,
    /// The values for the options specified by the selling plans in the selling plan group. For example, '1 week', '2 weeks', '3 weeks'.
    pub values: Vec<String>,
}

/// An option provided by a Selling Plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellingPlanOption {
    /// The name of the option (ie "Delivery every").
    pub name: Option<String>,
    /// The value of the option (ie "Month").
    pub value: Option<String>,
}

// =============================================================================
// Allocations
// =============================================================================

/// Represents an association between a variant and a selling plan. Selling plan allocations describe the options offered for each variant, and the price of the variant when purchased with a selling plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellingPlanAllocation {
    /// The checkout charge amount due for the purchase.
    pub checkout_charge_amount: MoneyV2,
    /// A list of price adjustments, with a maximum of two. When there are two, the first price adjustment goes into effect at the time of purchase, while the second one starts after a certain number of orders. A price adjustment represents how a selling plan affects pricing when a variant is purchased with a selling plan. Prices display in the customer's currency if the shop is configured for it.
    pub price_adjustments: Vec<SellingPlanAllocationPriceAdjustment>,
    /// The remaining balance charge amount due for the purchase.
    pub remaining_balance_charge_amount: MoneyV2,
    /// A representation of how products and variants can be sold and purchased. For example, an individual selling plan could be '6 weeks of prepaid granola, delivered weekly'.
    pub selling_plan: SellingPlan,
}

/// The resulting prices for variants when they're purchased with a specific selling plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellingPlanAllocationPriceAdjustment {
    /// The price of the variant when it's purchased without a selling plan for the same number of deliveries. For example, if a customer purchases 6 deliveries of $10.00 granola separately, then the price is 6 x $10.00 = $60.00.
    pub compare_at_price: MoneyV2,
    /// The effective price for a single delivery. For example, for a prepaid subscription plan that includes 6 deliveries at the price of $48.00, the per delivery price is $8.00.
    pub per_delivery_price: MoneyV2,
    /// The price of the variant when it's purchased with a selling plan For example, for a prepaid subscription plan that includes 6 deliveries of $10.00 granola, where the customer gets 20% off, the price is 6 x $10.00 x 0.80 = $48.00.
    pub price: MoneyV2,
    /// The resulting price per unit for the variant associated with the selling plan. If the variant isn't sold by quantity or measurement, then this field returns `null`.
    pub unit_price: Option<MoneyV2>,
}

// =============================================================================
// Charges & Adjustments
// =============================================================================

/// The initial payment due for the purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellingPlanCheckoutCharge {
    /// The charge type for the checkout charge.
    #[serde(rename = "type")]
    pub kind: SellingPlanCheckoutChargeType,
    /// The charge value for the checkout charge.
    pub value: SellingPlanCheckoutChargeValue,
}

/// The percentage value of the price used for checkout charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellingPlanCheckoutChargePercentageValue {
    /// The percentage value of the price used for checkout charge.
    pub percentage: f64,
}

/// Represents by how much the price of a variant associated with a selling plan is adjusted. Each variant can have up to two price adjustments. If a variant has multiple price adjustments, then the first price adjustment applies when the variant is initially purchased. The second price adjustment applies after a certain number of orders (specified by the `orderCount` field) are made. If a selling plan doesn't have any price adjustments, then the unadjusted price of the variant is the effective price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellingPlanPriceAdjustment {
    /// The type of price adjustment. An adjustment value can have one of three types: percentage, amount off, or a new price.
    pub adjustment_value: SellingPlanPriceAdjustmentValue,
    /// The number of orders that the price adjustment applies to. If the price adjustment always applies, then this field is `null`.
    pub order_count: Option<i32>,
}

/// A fixed amount that's deducted from the original variant price. For example, $10.00 off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellingPlanFixedAmountPriceAdjustment {
    /// The money value of the price adjustment.
    pub adjustment_amount: MoneyV2,
}

/// A fixed price adjustment for a variant that's purchased with a selling plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellingPlanFixedPriceAdjustment {
    /// A new price of the variant when it's purchased with the selling plan.
    pub price: MoneyV2,
}

/// A percentage amount that's deducted from the original variant price. For example, 10% off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellingPlanPercentagePriceAdjustment {
    /// The percentage value of the price adjustment.
    pub adjustment_percentage: i32,
}

// =============================================================================
// Policies
// =============================================================================

/// The recurring billing policy for the selling plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellingPlanRecurringBillingPolicy {
    /// The billing frequency, it can be either: day, week, month or year.
    pub interval: SellingPlanInterval,
    /// The number of intervals between billings.
    pub interval_count: i32,
}

/// The recurring delivery policy for the selling plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellingPlanRecurringDeliveryPolicy {
    /// The delivery frequency, it can be either: day, week, month or year.
    pub interval: SellingPlanInterval,
    /// The number of intervals between deliveries.
    pub interval_count: i32,
}

impl SellingPlanRecurringDeliveryPolicy {
    /// Approximate number of days between deliveries.
    #[must_use]
    pub fn approximate_days(&self) -> i64 {
        i64::from(self.interval.approximate_days()) * i64::from(self.interval_count)
    }
}

impl SellingPlanRecurringBillingPolicy {
    /// Approximate number of days between billings.
    #[must_use]
    pub fn approximate_days(&self) -> i64 {
        i64::from(self.interval.approximate_days()) * i64::from(self.interval_count)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_price_adjustment_value() {
        let adjustment: SellingPlanPriceAdjustment = serde_json::from_value(serde_json::json!({
            "adjustmentValue": {
                "__typename": "SellingPlanPercentagePriceAdjustment",
                "adjustmentPercentage": 15
            },
            "orderCount": null
        }))
        .unwrap();

        assert!(matches!(
            adjustment.adjustment_value,
            SellingPlanPriceAdjustmentValue::SellingPlanPercentagePriceAdjustment(ref value)
                if value.adjustment_percentage == 15
        ));
    }

    #[test]
    fn test_delivery_cadence() {
        let policy = SellingPlanRecurringDeliveryPolicy {
            interval: SellingPlanInterval::Week,
            interval_count: 2,
        };
        assert_eq!(policy.approximate_days(), 14);
    }
}
