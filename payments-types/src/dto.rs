//! Data Transfer Objects (DTOs) for requests and responses.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{DEFAULT_CURRENCY, PaymentMethod, PaymentRequest};
use crate::error::ParseMethodError;

/// Request to process a payment.
///
/// `payment_method` is a free-form name; it is parsed at the boundary so an
/// unknown name becomes a client error before the dispatcher is involved.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProcessPaymentRequest {
    #[schema(example = "CreditCard")]
    pub payment_method: String,
    #[schema(value_type = String, example = "100.00")]
    pub amount: Decimal,
    #[serde(default = "default_currency")]
    #[schema(example = "USD")]
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "tok_visa")]
    pub card_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_address: Option<String>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub metadata: HashMap<String, serde_json::Value>,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl ProcessPaymentRequest {
    /// Creates a request body for `method` with no credentials.
    pub fn new(method: PaymentMethod, amount: Decimal) -> Self {
        Self {
            payment_method: method.to_string(),
            amount,
            currency: default_currency(),
            email: None,
            card_token: None,
            account_number: None,
            wallet_address: None,
            metadata: HashMap::new(),
        }
    }

    /// Splits the body into the parsed method and the domain request.
    pub fn into_parts(self) -> Result<(PaymentMethod, PaymentRequest), ParseMethodError> {
        let method = self.payment_method.parse()?;
        let request = PaymentRequest {
            amount: self.amount,
            currency: self.currency,
            card_token: self.card_token,
            email: self.email,
            account_number: self.account_number,
            wallet_address: self.wallet_address,
            metadata: self.metadata,
        };
        Ok((method, request))
    }
}
