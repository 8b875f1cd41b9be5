//! Normalized payment outcome.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::method::PaymentMethod;

/// The single shape every dispatch returns, whatever happened.
///
/// Results are immutable once built. The two constructors keep the
/// invariants: an approved result always has a transaction id and a
/// non-negative fee, a declined one has neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaymentResult {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "CC_1a2b3c4d")]
    transaction_id: Option<String>,
    #[schema(example = "Credit card payment processed successfully")]
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "3.20")]
    processing_fee: Option<Decimal>,
    #[schema(example = "CreditCard")]
    payment_method: String,
    processed_at: DateTime<Utc>,
}

impl PaymentResult {
    /// A completed payment.
    pub fn approved(
        method: PaymentMethod,
        transaction_id: impl Into<String>,
        message: impl Into<String>,
        fee: Decimal,
    ) -> Self {
        let transaction_id = transaction_id.into();
        debug_assert!(!transaction_id.is_empty(), "approved without transaction id");
        debug_assert!(fee >= Decimal::ZERO, "negative processing fee");

        Self {
            success: true,
            transaction_id: Some(transaction_id),
            message: message.into(),
            processing_fee: Some(fee),
            payment_method: method.to_string(),
            processed_at: Utc::now(),
        }
    }

    /// A payment that did not go through, for any reason.
    pub fn declined(method: PaymentMethod, message: impl Into<String>) -> Self {
        Self {
            success: false,
            transaction_id: None,
            message: message.into(),
            processing_fee: None,
            payment_method: method.to_string(),
            processed_at: Utc::now(),
        }
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn transaction_id(&self) -> Option<&str> {
        self.transaction_id.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn processing_fee(&self) -> Option<Decimal> {
        self.processing_fee
    }

    pub fn payment_method(&self) -> &str {
        &self.payment_method
    }

    pub fn processed_at(&self) -> DateTime<Utc> {
        self.processed_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_approved_result_carries_id_and_fee() {
        let result = PaymentResult::approved(
            PaymentMethod::PayPal,
            "PP_0badf00d",
            "PayPal payment processed successfully",
            dec!(3.89),
        );

        assert!(result.success());
        assert_eq!(result.transaction_id(), Some("PP_0badf00d"));
        assert_eq!(result.processing_fee(), Some(dec!(3.89)));
        assert_eq!(result.payment_method(), "PayPal");
    }

    #[test]
    fn test_declined_result_has_no_id_or_fee() {
        let result = PaymentResult::declined(PaymentMethod::CreditCard, "Payment validation failed");

        assert!(!result.success());
        assert!(result.transaction_id().is_none());
        assert!(result.processing_fee().is_none());
        assert_eq!(result.message(), "Payment validation failed");
    }

    #[test]
    fn test_declined_result_serialization_omits_absent_fields() {
        let result = PaymentResult::declined(PaymentMethod::Stripe, "nope");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["payment_method"], "Stripe");
        assert!(json.get("transaction_id").is_none());
        assert!(json.get("processing_fee").is_none());
    }

    #[test]
    fn test_result_json_round_trip_keeps_fee_exact() {
        let result = PaymentResult::approved(PaymentMethod::Stripe, "pi_0123456789", "ok", dec!(0.59));
        let json = serde_json::to_string(&result).unwrap();
        let back: PaymentResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
