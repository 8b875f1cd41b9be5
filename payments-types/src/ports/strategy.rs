//! Payment strategy port.
//!
//! One implementation per `PaymentMethod`. Strategies are built once at
//! startup and shared across concurrent dispatches, so they must not keep
//! per-call mutable state.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::{PaymentMethod, PaymentRequest, PaymentResult};
use crate::error::StrategyError;

#[async_trait::async_trait]
pub trait PaymentStrategy: Send + Sync + 'static {
    /// The method this strategy handles.
    fn method(&self) -> PaymentMethod;

    /// Checks the method-specific required field and amount bounds.
    ///
    /// Invalid input is a normal `false`, never an error.
    fn validate(&self, request: &PaymentRequest) -> bool;

    /// Executes the payment. Callers must validate first.
    ///
    /// Business limits are reported with `success = false`; an `Err` means
    /// something unexpected went wrong.
    async fn process(&self, request: &PaymentRequest) -> Result<PaymentResult, StrategyError>;

    /// Deterministic processing fee for `amount`.
    fn calculate_fee(&self, amount: Decimal) -> Decimal;
}

/// Shared handle to a strategy.
pub type SharedStrategy = Arc<dyn PaymentStrategy>;
