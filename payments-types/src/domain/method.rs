//! Payment method tags and their discovery metadata.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ParseMethodError;

/// The closed set of payment methods the engine knows about.
///
/// Adding a variant forces every exhaustive `match` over this enum
/// (descriptions, registry wiring) to be updated.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
pub enum PaymentMethod {
    CreditCard,
    PayPal,
    Stripe,
    BankTransfer,
    Cryptocurrency,
    ApplePay,
    GooglePay,
}

impl PaymentMethod {
    /// Every method, in declaration order.
    pub const ALL: [PaymentMethod; 7] = [
        PaymentMethod::CreditCard,
        PaymentMethod::PayPal,
        PaymentMethod::Stripe,
        PaymentMethod::BankTransfer,
        PaymentMethod::Cryptocurrency,
        PaymentMethod::ApplePay,
        PaymentMethod::GooglePay,
    ];

    /// Canonical identifier, as echoed in `PaymentResult::payment_method`.
    pub fn name(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "CreditCard",
            PaymentMethod::PayPal => "PayPal",
            PaymentMethod::Stripe => "Stripe",
            PaymentMethod::BankTransfer => "BankTransfer",
            PaymentMethod::Cryptocurrency => "Cryptocurrency",
            PaymentMethod::ApplePay => "ApplePay",
            PaymentMethod::GooglePay => "GooglePay",
        }
    }

    /// Human-readable name for listings.
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::PayPal => "PayPal",
            PaymentMethod::Stripe => "Stripe",
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::Cryptocurrency => "Cryptocurrency",
            PaymentMethod::ApplePay => "Apple Pay",
            PaymentMethod::GooglePay => "Google Pay",
        }
    }

    /// Static description shown by the discovery endpoint.
    pub fn description(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Pay with Credit or Debit Card",
            PaymentMethod::PayPal => "Pay with your PayPal account",
            PaymentMethod::Stripe => "Secure payment processing via Stripe",
            PaymentMethod::BankTransfer => "Direct bank account transfer",
            PaymentMethod::Cryptocurrency => "Pay with cryptocurrency",
            PaymentMethod::ApplePay => "Pay with Apple Pay",
            PaymentMethod::GooglePay => "Pay with Google Pay",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = ParseMethodError;

    /// Case-insensitive; `-`, `_` and spaces are ignored, so `credit-card`,
    /// `credit_card` and `CreditCard` are all accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();

        PaymentMethod::ALL
            .into_iter()
            .find(|method| method.name().to_ascii_lowercase() == normalized)
            .ok_or_else(|| ParseMethodError(s.to_string()))
    }
}

/// Descriptive entry for the supported-methods listing. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaymentMethodInfo {
    pub payment_method: PaymentMethod,
    /// Display name
    #[schema(example = "Credit Card")]
    pub name: String,
    #[schema(example = "Pay with Credit or Debit Card")]
    pub description: String,
}

impl From<PaymentMethod> for PaymentMethodInfo {
    fn from(method: PaymentMethod) -> Self {
        Self {
            payment_method: method,
            name: method.display_name().to_string(),
            description: method.description().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_and_separator_insensitive() {
        assert_eq!(
            "credit-card".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::CreditCard
        );
        assert_eq!(
            "PAYPAL".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::PayPal
        );
        assert_eq!(
            "bank_transfer".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::BankTransfer
        );
        assert_eq!(
            "Google Pay".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::GooglePay
        );
    }

    #[test]
    fn test_parse_unknown_method_fails() {
        let err = "cheque".parse::<PaymentMethod>().unwrap_err();
        assert_eq!(err, ParseMethodError("cheque".into()));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for method in PaymentMethod::ALL {
            assert_eq!(method.to_string().parse::<PaymentMethod>().unwrap(), method);
        }
    }

    #[test]
    fn test_method_info_uses_static_text() {
        let info = PaymentMethodInfo::from(PaymentMethod::BankTransfer);
        assert_eq!(info.name, "Bank Transfer");
        assert_eq!(info.description, "Direct bank account transfer");
    }
}
