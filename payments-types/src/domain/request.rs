//! Payment request domain model.

use std::collections::HashMap;

use rust_decimal::Decimal;

/// Currency used when a request does not name one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// A single payment attempt, built per incoming call and used once.
///
/// Only the credential field relevant to the selected method is looked at;
/// the others are carried along and ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    pub amount: Decimal,
    pub currency: String,
    pub card_token: Option<String>,
    pub email: Option<String>,
    pub account_number: Option<String>,
    pub wallet_address: Option<String>,
    pub metadata: HashMap<String, serde_json::Value>,
}

impl PaymentRequest {
    /// Creates a request for `amount` in the default currency with no credentials.
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount,
            currency: DEFAULT_CURRENCY.to_string(),
            card_token: None,
            email: None,
            account_number: None,
            wallet_address: None,
            metadata: HashMap::new(),
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn with_card_token(mut self, token: impl Into<String>) -> Self {
        self.card_token = Some(token.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_account_number(mut self, account_number: impl Into<String>) -> Self {
        self.account_number = Some(account_number.into());
        self
    }

    pub fn with_wallet_address(mut self, address: impl Into<String>) -> Self {
        self.wallet_address = Some(address.into());
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}

/// True when an optional credential field carries a non-empty value.
pub fn is_present(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|value| !value.is_empty())
}
