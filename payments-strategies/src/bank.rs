//! Direct bank transfers.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use payments_types::domain::is_present;
use payments_types::{
    Delay, PaymentMethod, PaymentRequest, PaymentResult, PaymentStrategy, StrategyError,
};
use rust_decimal::Decimal;

use crate::rules::{BANK_TRANSFER_FEES, BANK_TRANSFER_MINIMUM};
use crate::txid;

/// Bank transfer initiation. Ids are timestamp based, so two transfers
/// started within the same second share an id.
pub struct BankTransferStrategy {
    delay: Arc<dyn Delay>,
}

impl BankTransferStrategy {
    pub const LATENCY: Duration = Duration::from_millis(2000);

    pub fn new(delay: Arc<dyn Delay>) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl PaymentStrategy for BankTransferStrategy {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::BankTransfer
    }

    fn validate(&self, request: &PaymentRequest) -> bool {
        is_present(&request.account_number) && request.amount >= BANK_TRANSFER_MINIMUM
    }

    async fn process(&self, request: &PaymentRequest) -> Result<PaymentResult, StrategyError> {
        self.delay.wait(Self::LATENCY).await;

        Ok(PaymentResult::approved(
            self.method(),
            txid::timestamped("BT_", Utc::now()),
            "Bank transfer initiated successfully",
            self.calculate_fee(request.amount),
        ))
    }

    fn calculate_fee(&self, amount: Decimal) -> Decimal {
        BANK_TRANSFER_FEES.apply(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NoDelay;
    use rust_decimal_macros::dec;

    fn strategy() -> BankTransferStrategy {
        BankTransferStrategy::new(Arc::new(NoDelay))
    }

    #[test]
    fn test_validate_minimum_amount() {
        let base = PaymentRequest::new(dec!(10)).with_account_number("DE89370400440532013000");
        assert!(strategy().validate(&base));

        let below = PaymentRequest {
            amount: dec!(9.99),
            ..base.clone()
        };
        assert!(!strategy().validate(&below));
    }

    #[test]
    fn test_validate_requires_account_number() {
        assert!(!strategy().validate(&PaymentRequest::new(dec!(50))));
        assert!(!strategy().validate(&PaymentRequest::new(dec!(50)).with_account_number("")));
    }

    #[tokio::test]
    async fn test_process_uses_timestamp_id() {
        let req = PaymentRequest::new(dec!(500)).with_account_number("12345678");
        let result = strategy().process(&req).await.unwrap();

        let id = result.transaction_id().unwrap();
        let stamp = id.strip_prefix("BT_").unwrap();
        assert_eq!(stamp.len(), 14);
        assert!(stamp.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(result.processing_fee(), Some(dec!(2.50)));
        assert_eq!(result.message(), "Bank transfer initiated successfully");
    }
}
