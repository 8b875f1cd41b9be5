//! Error types for the payment dispatch engine.
//!
//! Only registry resolution produces a structurally distinct error. Everything
//! that happens after a strategy is resolved is folded into a failed
//! `PaymentResult` by the dispatcher.

use crate::domain::PaymentMethod;

/// A method name that does not correspond to any `PaymentMethod`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid payment method: {0}")]
pub struct ParseMethodError(pub String);

/// Strategy resolution failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    #[error("Payment method {0} is not supported")]
    UnsupportedMethod(PaymentMethod),
}

/// Unexpected failures raised by a strategy while processing.
///
/// These never reach the caller verbatim; the dispatcher logs them and
/// returns a generic failed result.
#[derive(Debug, thiserror::Error)]
pub enum StrategyError {
    #[error("Gateway error: {0}")]
    Gateway(String),
}

/// Registry construction failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("A strategy for {0} is already registered")]
    DuplicateStrategy(PaymentMethod),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<ParseMethodError> for AppError {
    fn from(err: ParseMethodError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_method_message() {
        let err = DispatchError::UnsupportedMethod(PaymentMethod::GooglePay);
        assert_eq!(err.to_string(), "Payment method GooglePay is not supported");
    }

    #[test]
    fn test_parse_error_maps_to_bad_request() {
        let err: AppError = ParseMethodError("venmo".into()).into();
        assert!(matches!(err, AppError::BadRequest(msg) if msg == "Invalid payment method: venmo"));
    }
}
