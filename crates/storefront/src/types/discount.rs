//! Discount applications and the allocations they produce on order and cart lines.

use serde::{Deserialize, Serialize};

use super::MoneyV2;
use crate::enums::{
    DiscountApplicationAllocationMethod, DiscountApplicationTargetSelection,
    DiscountApplicationTargetType,
};
use crate::interfaces::AnyDiscountApplication;
use crate::unions::PricingValue;

// =============================================================================
// Discount Applications
// =============================================================================

/// Automatic discount applications capture the intentions of a discount that was automatically applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomaticDiscountApplication {
    /// The method by which the discount's value is allocated to its entitled items.
    pub allocation_method: DiscountApplicationAllocationMethod,
    /// Which lines of targetType that the discount is allocated over.
    pub target_selection: DiscountApplicationTargetSelection,
    /// The type of line that the discount is applicable towards.
    pub target_type: DiscountApplicationTargetType,
    /// The title of the application.
    pub title: String,
    /// The value of the discount application.
    pub value: PricingValue,
}

/// Discount code applications capture the intentions of a discount code at
/// the time that it is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountCodeApplication {
    /// The method by which the discount's value is allocated to its entitled items.
    pub allocation_method: DiscountApplicationAllocationMethod,
    /// Specifies whether the discount code was applied successfully.
    pub applicable: bool,
    /// The string identifying the discount code that was used at the time of application.
    pub code: String,
    /// Which lines of targetType that the discount is allocated over.
    pub target_selection: DiscountApplicationTargetSelection,
    /// The type of line that the discount is applicable towards.
    pub target_type: DiscountApplicationTargetType,
    /// The value of the discount application.
    pub value: PricingValue,
}

/// Manual discount applications capture the intentions of a discount that was manually created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualDiscountApplication {
    /// The method by which the discount's value is allocated to its entitled items.
    pub allocation_method: DiscountApplicationAllocationMethod,
    /// The description of the application.
    pub description: Option<String>,
    /// Which lines of targetType that the discount is allocated over.
    pub target_selection: DiscountApplicationTargetSelection,
    /// The type of line that the discount is applicable towards.
    pub target_type: DiscountApplicationTargetType,
    /// The title of the application.
    pub title: String,
    /// The value of the discount application.
    pub value: PricingValue,
}

/// Script discount applications capture the intentions of a discount that
/// was created by a Shopify Script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptDiscountApplication {
    /// The method by which the discount's value is allocated to its entitled items.
    pub allocation_method: DiscountApplicationAllocationMethod,
    /// Which lines of targetType that the discount is allocated over.
    pub target_selection: DiscountApplicationTargetSelection,
    /// The type of line that the discount is applicable towards.
    pub target_type: DiscountApplicationTargetType,
    /// The title of the application as defined by the Script.
    pub title: String,
    /// The value of the discount application.
    pub value: PricingValue,
}

/// An amount discounting the line that has been allocated by a discount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountAllocation {
    /// Amount of discount allocated.
    pub allocated_amount: MoneyV2,
    /// The discount this allocated amount originated from.
    pub discount_application: AnyDiscountApplication,
}

// =============================================================================
// Cart Discounts
// =============================================================================

/// The discount application capture the intentions of a discount source at
/// the time of application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartDiscountApplication {
    /// The method by which the discount's value is allocated to its entitled items.
    pub allocation_method: DiscountApplicationAllocationMethod,
    /// Which lines of targetType that the discount is allocated over.
    pub target_selection: DiscountApplicationTargetSelection,
    /// The type of line that the discount is applicable towards.
    pub target_type: DiscountApplicationTargetType,
    /// The value of the discount application.
    pub value: PricingValue,
}

/// The discounts automatically applied to the cart line based on prerequisites that have been met.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartAutomaticDiscountAllocation {
    /// The discount that have been applied on the cart line.
    pub discount_application: CartDiscountApplication,
    /// The discounted amount that has been applied to the cart line.
    pub discounted_amount: MoneyV2,
    /// The type of line that the discount is applicable towards.
    pub target_type: DiscountApplicationTargetType,
    /// The title of the allocated discount.
    pub title: String,
}

/// The discount that has been applied to the cart line using a discount code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartCodeDiscountAllocation {
    /// The code used to apply the discount.
    pub code: String,
    /// The discount that have been applied on the cart line.
    pub discount_application: CartDiscountApplication,
    /// The discounted amount that has been applied to the cart line.
    pub discounted_amount: MoneyV2,
    /// The type of line that the discount is applicable towards.
    pub target_type: DiscountApplicationTargetType,
}

/// The discounts automatically applied to the cart line based on prerequisites that have been met.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartCustomDiscountAllocation {
    /// The discount that have been applied on the cart line.
    pub discount_application: CartDiscountApplication,
    /// The discounted amount that has been applied to the cart line.
    pub discounted_amount: MoneyV2,
    /// The type of line that the discount is applicable towards.
    pub target_type: DiscountApplicationTargetType,
    /// The title of the allocated discount.
    pub title: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_code_application_percentage() {
        let application: DiscountCodeApplication = serde_json::from_value(serde_json::json!({
            "allocationMethod": "ACROSS",
            "applicable": true,
            "code": "SUMMER10",
            "targetSelection": "ALL",
            "targetType": "LINE_ITEM",
            "value": { "__typename": "PricingPercentageValue", "percentage": 10.0 }
        }))
        .unwrap();

        assert_eq!(application.code, "SUMMER10");
        assert!(matches!(
            application.value,
            PricingValue::PricingPercentageValue(ref value) if (value.percentage - 10.0).abs() < f64::EPSILON
        ));
    }
}
