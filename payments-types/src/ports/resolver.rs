//! Strategy resolver port.

use std::collections::HashSet;

use crate::domain::PaymentMethod;
use crate::error::DispatchError;

use super::SharedStrategy;

/// Lookup from method to strategy. Read-only after construction.
pub trait StrategyResolver: Send + Sync + 'static {
    /// Returns the strategy for `method`, or `UnsupportedMethod`.
    ///
    /// Implementations must never fall back to a default strategy.
    fn resolve(&self, method: PaymentMethod) -> Result<SharedStrategy, DispatchError>;

    /// Exactly the methods `resolve` succeeds for.
    fn supported_methods(&self) -> HashSet<PaymentMethod>;
}
