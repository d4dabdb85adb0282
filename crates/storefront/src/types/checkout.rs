//! Cart checkout completion: preparation, submission and completion attempts.

use serde::{Deserialize, Serialize};
use storefront_schema_core::{DateTime, Id, Url};

use super::Cart;
use crate::enums::{CompletionErrorCode, SubmissionErrorCode};
use crate::unions::{CartCompletionAction, CartCompletionAttemptResult, CartSubmitForCompletionResult};

// =============================================================================
// Completion Attempts
// =============================================================================

/// The required completion action to checkout a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartCompletionActionRequired {
    /// The action required to complete the cart completion attempt.
    pub action: Option<CartCompletionAction>,
    /// The ID of the cart completion attempt.
    pub id: String,
}

/// A failed completion to checkout a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartCompletionFailed {
    /// The errors that caused the checkout to fail.
    pub errors: Vec<CompletionError>,
    /// The ID of the cart completion attempt.
    pub id: String,
}

/// A cart checkout completion that's still processing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartCompletionProcessing {
    /// The ID of the cart completion attempt.
    pub id: String,
    /// The number of milliseconds to wait before polling again.
    pub poll_delay: i32,
}

/// A successful completion to checkout a cart and a created order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartCompletionSuccess {
    /// The date and time when the job completed.
    pub completed_at: Option<DateTime>,
    /// The ID of the cart completion attempt.
    pub id: String,
    /// The ID of the order that's created in Shopify.
    pub order_id: Id,
    /// The URL of the order confirmation in Shopify.
    pub order_url: Url,
}

/// The action for the 3DS payment redirect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletePaymentChallenge {
    /// The URL for the 3DS payment redirect.
    pub redirect_url: Option<Url>,
}

/// An error that occurred during a cart completion attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionError {
    /// The error code.
    pub code: CompletionErrorCode,
    /// The error message.
    pub message: Option<String>,
}

// =============================================================================
// Preparing For Completion
// =============================================================================

/// Cart is ready for checkout completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartStatusReady {
    /// The result of cart preparation for completion.
    pub cart: Option<Cart>,
}

/// Cart is not ready for payment update and completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartStatusNotReady {
    /// The result of cart preparation for completion.
    pub cart: Option<Cart>,
    /// The list of errors that caused the cart to not be ready for payment update and completion.
    pub errors: Vec<CartOperationError>,
}

/// An error occurred during the cart operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartOperationError {
    /// The error code.
    pub code: String,
    /// The error message.
    pub message: Option<String>,
}

/// Response signifying that the access to cart submission is currently throttled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartThrottled {
    /// The result of cart preparation for completion.
    pub cart: Option<Cart>,
    /// The polling delay.
    pub poll_after: DateTime,
}

// =============================================================================
// Submission
// =============================================================================

/// Cart submit for checkout completion is successful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAlreadyAccepted {
    /// The ID of the cart completion attempt that will be used for polling for the result.
    pub attempt_id: String,
}

/// Cart submit for checkout completion failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFailed {
    /// The URL of the checkout for the cart.
    pub checkout_url: Option<Url>,
    /// The list of errors that occurred from executing the mutation.
    pub errors: Vec<SubmissionError>,
}

/// Cart submit for checkout completion is already accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitSuccess {
    /// The ID of the cart completion attempt that will be used for polling for the result.
    pub attempt_id: String,
    /// The url to which the buyer should be redirected after the cart is successfully submitted.
    pub redirect_url: Url,
}

/// Cart submit for checkout completion is throttled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitThrottled {
    /// UTC date time string that indicates the time after which clients should make their next
    /// poll request. Any poll requests sent before this time will be ignored. Use this value to schedule the
    /// next poll request.
    pub poll_after: DateTime,
}

/// An error that occurred during cart submit for completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionError {
    /// The error code.
    pub code: SubmissionErrorCode,
    /// The error message.
    pub message: Option<String>,
}

impl CartCompletionAttemptResult {
    /// The completion attempt ID shared by every outcome.
    #[must_use]
    pub fn attempt_id(&self) -> &str {
        match self {
            Self::CartCompletionActionRequired(result) => &result.id,
            Self::CartCompletionFailed(result) => &result.id,
            Self::CartCompletionProcessing(result) => &result.id,
            Self::CartCompletionSuccess(result) => &result.id,
        }
    }

    /// Whether the attempt has reached a final outcome and polling can stop.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        matches!(
            self,
            Self::CartCompletionFailed(_) | Self::CartCompletionSuccess(_)
        )
    }
}

impl CartSubmitForCompletionResult {
    /// The attempt ID to poll with `cartCompletionAttempt`, when the submission was taken.
    #[must_use]
    pub fn attempt_id(&self) -> Option<&str> {
        match self {
            Self::SubmitAlreadyAccepted(result) => Some(&result.attempt_id),
            Self::SubmitSuccess(result) => Some(&result.attempt_id),
            Self::SubmitFailed(_) | Self::SubmitThrottled(_) => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_attempt_outcomes() {
        let processing: CartCompletionAttemptResult = serde_json::from_value(serde_json::json!({
            "__typename": "CartCompletionProcessing",
            "id": "attempt-1",
            "pollDelay": 500
        }))
        .unwrap();
        assert_eq!(processing.attempt_id(), "attempt-1");
        assert!(!processing.is_settled());

        let failed: CartCompletionAttemptResult = serde_json::from_value(serde_json::json!({
            "__typename": "CartCompletionFailed",
            "id": "attempt-1",
            "errors": [{ "code": "PAYMENT_CARD_DECLINED", "message": null }]
        }))
        .unwrap();
        assert!(failed.is_settled());
    }

    #[test]
    fn test_submit_result_attempt_id() {
        let accepted: CartSubmitForCompletionResult = serde_json::from_value(serde_json::json!({
            "__typename": "SubmitSuccess",
            "attemptId": "attempt-9",
            "redirectUrl": "https://shop.example.com/thank-you"
        }))
        .unwrap();
        assert_eq!(accepted.attempt_id(), Some("attempt-9"));

        let throttled: CartSubmitForCompletionResult = serde_json::from_value(serde_json::json!({
            "__typename": "SubmitThrottled",
            "pollAfter": "2025-01-01T00:00:05Z"
        }))
        .unwrap();
        assert_eq!(throttled.attempt_id(), None);
    }
}
