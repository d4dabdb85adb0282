//! Order status enums.

use serde::{Deserialize, Serialize};

use super::impl_schema_enum;

/// Represents the reason for the order's cancellation.
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
pub enum OrderCancelReason {
    /// The customer wanted to cancel the order.
    Customer,
    /// Payment was declined.
    Declined,
    /// The order was fraudulent.
    Fraud,
    /// There was insufficient inventory.
    Inventory,
    /// The order was canceled for an unlisted reason.
    Other,
    /// Staff made an error.
    Staff,
}

/// Represents the order's current financial status.
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
pub enum OrderFinancialStatus {
    /// Displayed as **Authorized**.
    Authorized,
    /// Displayed as **Paid**.
    Paid,
    /// Displayed as **Partially paid**.
    PartiallyPaid,
    /// Displayed as **Partially refunded**.
    PartiallyRefunded,
    /// Displayed as **Pending**.
    Pending,
    /// Displayed as **Refunded**.
    Refunded,
    /// Displayed as **Voided**.
    Voided,
}

/// Represents the order's aggregated fulfillment status for display purposes.
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
pub enum OrderFulfillmentStatus {
    /// Displayed as **Fulfilled**. All of the items in the order have been fulfilled.
    Fulfilled,
    /// Displayed as **In progress**. Some of the items in the order have been fulfilled, or a request for fulfillment has been sent to the fulfillment service.
    InProgress,
    /// Displayed as **On hold**. All of the unfulfilled items in this order are on hold.
    OnHold,
    /// Displayed as **Open**. None of the items in the order have been fulfilled. Replaced by `UNFULFILLED`.
    Open,
    /// Displayed as **Partially fulfilled**. Some of the items in the order have been fulfilled.
    PartiallyFulfilled,
    /// Displayed as **Pending fulfillment**. A request for fulfillment of some items awaits a response from the fulfillment service. Replaced by `IN_PROGRESS`.
    PendingFulfillment,
    /// Displayed as **Restocked**. All of the items in the order have been restocked. Replaced by `UNFULFILLED`.
    Restocked,
    /// Displayed as **Scheduled**. All of the unfulfilled items in this order are scheduled for fulfillment at later time.
    Scheduled,
    /// Displayed as **Unfulfilled**. None of the items in the order have been fulfilled.
    Unfulfilled,
}

impl_schema_enum!(
    OrderCancelReason,
    OrderFinancialStatus,
    OrderFulfillmentStatus,
);

impl OrderFinancialStatus {
    /// Whether money has been captured for the order, in full or in part.
    #[must_use]
    pub const fn is_paid(self) -> bool {
        matches!(
            self,
            Self::Paid | Self::PartiallyPaid | Self::PartiallyRefunded | Self::Refunded
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_paid() {
        assert!(OrderFinancialStatus::Paid.is_paid());
        assert!(OrderFinancialStatus::PartiallyRefunded.is_paid());
        assert!(!OrderFinancialStatus::Authorized.is_paid());
        assert!(!OrderFinancialStatus::Voided.is_paid());
    }
}
