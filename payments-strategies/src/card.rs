//! Card-based strategies: direct credit card and Stripe.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use payments_types::domain::is_present;
use payments_types::{
    Delay, PaymentMethod, PaymentRequest, PaymentResult, PaymentStrategy, StrategyError,
};
use rust_decimal::Decimal;

use crate::rules::{self, CARD_FEES, CREDIT_CARD_LIMIT};
use crate::txid;

/// Card payments through the in-house acquirer. Enforces a per-payment cap.
pub struct CreditCardStrategy {
    delay: Arc<dyn Delay>,
}

impl CreditCardStrategy {
    pub const LATENCY: Duration = Duration::from_millis(1000);

    pub fn new(delay: Arc<dyn Delay>) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl PaymentStrategy for CreditCardStrategy {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::CreditCard
    }

    fn validate(&self, request: &PaymentRequest) -> bool {
        is_present(&request.card_token) && rules::is_positive(request.amount)
    }

    async fn process(&self, request: &PaymentRequest) -> Result<PaymentResult, StrategyError> {
        self.delay.wait(Self::LATENCY).await;

        if request.amount > CREDIT_CARD_LIMIT {
            tracing::debug!(amount = %request.amount, "credit card limit exceeded");
            return Ok(PaymentResult::declined(
                self.method(),
                "Amount exceeds credit card limit",
            ));
        }

        Ok(PaymentResult::approved(
            self.method(),
            txid::random_hex("CC_", 8),
            "Credit card payment processed successfully",
            self.calculate_fee(request.amount),
        ))
    }

    fn calculate_fee(&self, amount: Decimal) -> Decimal {
        CARD_FEES.apply(amount)
    }
}

/// Card payments routed through Stripe.
pub struct StripeStrategy {
    delay: Arc<dyn Delay>,
}

impl StripeStrategy {
    pub const LATENCY: Duration = Duration::from_millis(800);

    pub fn new(delay: Arc<dyn Delay>) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl PaymentStrategy for StripeStrategy {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::Stripe
    }

    fn validate(&self, request: &PaymentRequest) -> bool {
        is_present(&request.card_token) && rules::is_positive(request.amount)
    }

    async fn process(&self, request: &PaymentRequest) -> Result<PaymentResult, StrategyError> {
        self.delay.wait(Self::LATENCY).await;

        Ok(PaymentResult::approved(
            self.method(),
            txid::random_hex("pi_", 10),
            "Stripe payment processed successfully",
            self.calculate_fee(request.amount),
        ))
    }

    fn calculate_fee(&self, amount: Decimal) -> Decimal {
        CARD_FEES.apply(amount)
    }
}
