//! Account-based and mobile wallets: PayPal, Apple Pay, Google Pay.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use payments_types::domain::is_present;
use payments_types::{
    Delay, PaymentMethod, PaymentRequest, PaymentResult, PaymentStrategy, StrategyError,
};
use rust_decimal::Decimal;

use crate::rules::{self, APPLE_PAY_MAXIMUM, MOBILE_WALLET_FEES, PAYPAL_FEES};
use crate::txid;

/// PayPal checkout, keyed by the payer's email.
pub struct PayPalStrategy {
    delay: Arc<dyn Delay>,
}

impl PayPalStrategy {
    pub const LATENCY: Duration = Duration::from_millis(1500);

    pub fn new(delay: Arc<dyn Delay>) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl PaymentStrategy for PayPalStrategy {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::PayPal
    }

    fn validate(&self, request: &PaymentRequest) -> bool {
        is_present(&request.email) && rules::is_positive(request.amount)
    }

    async fn process(&self, request: &PaymentRequest) -> Result<PaymentResult, StrategyError> {
        self.delay.wait(Self::LATENCY).await;

        Ok(PaymentResult::approved(
            self.method(),
            txid::random_hex("PP_", 8),
            "PayPal payment processed successfully",
            self.calculate_fee(request.amount),
        ))
    }

    fn calculate_fee(&self, amount: Decimal) -> Decimal {
        PAYPAL_FEES.apply(amount)
    }
}

/// Apple Pay. The device token is checked upstream, so only the amount
/// window is validated here.
pub struct ApplePayStrategy {
    delay: Arc<dyn Delay>,
}

impl ApplePayStrategy {
    pub const LATENCY: Duration = Duration::from_millis(600);

    pub fn new(delay: Arc<dyn Delay>) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl PaymentStrategy for ApplePayStrategy {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::ApplePay
    }

    fn validate(&self, request: &PaymentRequest) -> bool {
        rules::is_positive(request.amount) && request.amount <= APPLE_PAY_MAXIMUM
    }

    async fn process(&self, request: &PaymentRequest) -> Result<PaymentResult, StrategyError> {
        self.delay.wait(Self::LATENCY).await;

        Ok(PaymentResult::approved(
            self.method(),
            txid::random_hex("AP_", 8),
            "Apple Pay payment processed successfully",
            self.calculate_fee(request.amount),
        ))
    }

    fn calculate_fee(&self, amount: Decimal) -> Decimal {
        MOBILE_WALLET_FEES.apply(amount)
    }
}

/// Google Pay. The payment token travels in the card token field.
pub struct GooglePayStrategy {
    delay: Arc<dyn Delay>,
}

impl GooglePayStrategy {
    pub const LATENCY: Duration = Duration::from_millis(600);

    pub fn new(delay: Arc<dyn Delay>) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl PaymentStrategy for GooglePayStrategy {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::GooglePay
    }

    fn validate(&self, request: &PaymentRequest) -> bool {
        is_present(&request.card_token) && rules::is_positive(request.amount)
    }

    async fn process(&self, request: &PaymentRequest) -> Result<PaymentResult, StrategyError> {
        self.delay.wait(Self::LATENCY).await;

        Ok(PaymentResult::approved(
            self.method(),
            txid::random_hex("GP_", 8),
            "Google Pay payment processed successfully",
            self.calculate_fee(request.amount),
        ))
    }

    fn calculate_fee(&self, amount: Decimal) -> Decimal {
        MOBILE_WALLET_FEES.apply(amount)
    }
}
