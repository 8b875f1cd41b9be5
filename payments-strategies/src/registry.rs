//! Method → strategy lookup table.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use payments_types::{
    Delay, DispatchError, PaymentMethod, RegistryError, SharedStrategy, StrategyResolver,
};

use crate::bank::BankTransferStrategy;
use crate::card::{CreditCardStrategy, StripeStrategy};
use crate::crypto::CryptocurrencyStrategy;
use crate::wallet::{ApplePayStrategy, GooglePayStrategy, PayPalStrategy};

/// Closed mapping from `PaymentMethod` to its strategy, built once at startup.
///
/// Lookups that miss are reported as `UnsupportedMethod`; there is no
/// fallback strategy.
pub struct StrategyRegistry {
    strategies: HashMap<PaymentMethod, SharedStrategy>,
}

impl StrategyRegistry {
    /// Registry with a strategy for every `PaymentMethod`.
    pub fn standard(delay: Arc<dyn Delay>) -> Self {
        let strategies = PaymentMethod::ALL
            .into_iter()
            .map(|method| (method, strategy_for(method, delay.clone())))
            .collect();
        Self { strategies }
    }

    /// Starts an empty registry for hand-picked strategies.
    pub fn builder() -> StrategyRegistryBuilder {
        StrategyRegistryBuilder::default()
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

/// Exhaustive wiring: a new `PaymentMethod` variant fails to compile here
/// until it has a strategy.
fn strategy_for(method: PaymentMethod, delay: Arc<dyn Delay>) -> SharedStrategy {
    match method {
        PaymentMethod::CreditCard => Arc::new(CreditCardStrategy::new(delay)),
        PaymentMethod::PayPal => Arc::new(PayPalStrategy::new(delay)),
        PaymentMethod::Stripe => Arc::new(StripeStrategy::new(delay)),
        PaymentMethod::BankTransfer => Arc::new(BankTransferStrategy::new(delay)),
        PaymentMethod::Cryptocurrency => Arc::new(CryptocurrencyStrategy::new(delay)),
        PaymentMethod::ApplePay => Arc::new(ApplePayStrategy::new(delay)),
        PaymentMethod::GooglePay => Arc::new(GooglePayStrategy::new(delay)),
    }
}

impl StrategyResolver for StrategyRegistry {
    fn resolve(&self, method: PaymentMethod) -> Result<SharedStrategy, DispatchError> {
        self.strategies
            .get(&method)
            .cloned()
            .ok_or(DispatchError::UnsupportedMethod(method))
    }

    fn supported_methods(&self) -> HashSet<PaymentMethod> {
        self.strategies.keys().copied().collect()
    }
}

impl std::fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut methods: Vec<_> = self.strategies.keys().collect();
        methods.sort();
        f.debug_struct("StrategyRegistry")
            .field("methods", &methods)
            .finish()
    }
}

/// Builder for a partial registry.
#[derive(Default)]
pub struct StrategyRegistryBuilder {
    strategies: HashMap<PaymentMethod, SharedStrategy>,
}

impl StrategyRegistryBuilder {
    /// Adds `strategy` under the method it reports. Each method may be
    /// registered once.
    pub fn register(mut self, strategy: SharedStrategy) -> Result<Self, RegistryError> {
        let method = strategy.method();
        if self.strategies.contains_key(&method) {
            return Err(RegistryError::DuplicateStrategy(method));
        }
        self.strategies.insert(method, strategy);
        Ok(self)
    }

    pub fn build(self) -> StrategyRegistry {
        StrategyRegistry {
            strategies: self.strategies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NoDelay;

    #[test]
    fn test_standard_registry_covers_every_method() {
        let registry = StrategyRegistry::standard(Arc::new(NoDelay));
        let supported = registry.supported_methods();

        assert_eq!(registry.len(), PaymentMethod::ALL.len());
        for method in PaymentMethod::ALL {
            assert!(supported.contains(&method));
            assert_eq!(registry.resolve(method).unwrap().method(), method);
        }
    }

    #[test]
    fn test_resolve_missing_method_is_reported() {
        let registry = StrategyRegistry::builder()
            .register(Arc::new(CreditCardStrategy::new(Arc::new(NoDelay))))
            .unwrap()
            .build();

        let err = registry.resolve(PaymentMethod::PayPal).err();
        assert_eq!(err, Some(DispatchError::UnsupportedMethod(PaymentMethod::PayPal)));
        assert_eq!(
            registry.supported_methods(),
            HashSet::from([PaymentMethod::CreditCard])
        );
    }

    #[test]
    fn test_duplicate_registration_is_rejected() {
        let delay: Arc<dyn Delay> = Arc::new(NoDelay);
        let result = StrategyRegistry::builder()
            .register(Arc::new(StripeStrategy::new(delay.clone())))
            .unwrap()
            .register(Arc::new(StripeStrategy::new(delay)));

        assert!(matches!(
            result,
            Err(RegistryError::DuplicateStrategy(PaymentMethod::Stripe))
        ));
    }

    #[test]
    fn test_empty_builder() {
        let registry = StrategyRegistry::builder().build();
        assert!(registry.is_empty());
        assert!(registry.supported_methods().is_empty());
    }
}
