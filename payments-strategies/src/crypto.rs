//! On-chain cryptocurrency payments.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use payments_types::domain::is_present;
use payments_types::{
    Delay, PaymentMethod, PaymentRequest, PaymentResult, PaymentStrategy, StrategyError,
};
use rust_decimal::Decimal;

use crate::rules::{self, CRYPTO_FEES};
use crate::txid;

pub struct CryptocurrencyStrategy {
    delay: Arc<dyn Delay>,
}

impl CryptocurrencyStrategy {
    pub const LATENCY: Duration = Duration::from_millis(3000);

    pub fn new(delay: Arc<dyn Delay>) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl PaymentStrategy for CryptocurrencyStrategy {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::Cryptocurrency
    }

    fn validate(&self, request: &PaymentRequest) -> bool {
        is_present(&request.wallet_address) && rules::is_positive(request.amount)
    }

    async fn process(&self, request: &PaymentRequest) -> Result<PaymentResult, StrategyError> {
        self.delay.wait(Self::LATENCY).await;

        Ok(PaymentResult::approved(
            self.method(),
            txid::random_hex("0x", 32),
            "Cryptocurrency payment processed successfully",
            self.calculate_fee(request.amount),
        ))
    }

    fn calculate_fee(&self, amount: Decimal) -> Decimal {
        CRYPTO_FEES.apply(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NoDelay;
    use crate::txid::has_hex_suffix;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_crypto_payment() {
        let strategy = CryptocurrencyStrategy::new(Arc::new(NoDelay));
        let req = PaymentRequest::new(dec!(0.5)).with_wallet_address("bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh");

        assert!(strategy.validate(&req));
        let result = strategy.process(&req).await.unwrap();
        assert!(has_hex_suffix(result.transaction_id().unwrap(), "0x", 32));
        assert_eq!(result.processing_fee(), Some(dec!(0.01)));
    }

    #[test]
    fn test_crypto_requires_wallet() {
        let strategy = CryptocurrencyStrategy::new(Arc::new(NoDelay));
        assert!(!strategy.validate(&PaymentRequest::new(dec!(1)).with_card_token("tok_1")));
    }
}
