//! # Payments Strategies
//!
//! Concrete `PaymentStrategy` implementations (adapters), one per
//! `PaymentMethod`, and the `StrategyRegistry` that resolves them.
//!
//! Gateway calls are simulated: each strategy waits through the `Delay`
//! port and then applies its own rules from [`rules`].

use std::sync::Arc;
use std::time::Duration;

use payments_types::Delay;

pub mod bank;
pub mod card;
pub mod crypto;
pub mod delay;
pub mod registry;
pub mod rules;
pub mod txid;
pub mod wallet;

pub use bank::BankTransferStrategy;
pub use card::{CreditCardStrategy, StripeStrategy};
pub use crypto::CryptocurrencyStrategy;
pub use delay::{NoDelay, TokioDelay};
pub use registry::{StrategyRegistry, StrategyRegistryBuilder};
pub use wallet::{ApplePayStrategy, GooglePayStrategy, PayPalStrategy};

/// Knobs for the simulated gateway latency.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// When false, strategies complete without waiting.
    pub simulate_latency: bool,
    /// Upper bound of random latency added to each call.
    pub max_jitter: Duration,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            simulate_latency: true,
            max_jitter: Duration::ZERO,
        }
    }
}

/// Build the standard registry from configuration.
///
/// # Examples
///
/// ```
/// use payments_strategies::{RegistryConfig, build_registry};
///
/// let registry = build_registry(&RegistryConfig {
///     simulate_latency: false,
///     ..Default::default()
/// });
/// assert_eq!(registry.len(), 7);
/// ```
pub fn build_registry(config: &RegistryConfig) -> StrategyRegistry {
    let delay: Arc<dyn Delay> = if config.simulate_latency {
        Arc::new(TokioDelay::with_jitter(config.max_jitter))
    } else {
        Arc::new(NoDelay)
    };

    tracing::debug!(
        simulate_latency = config.simulate_latency,
        max_jitter_ms = config.max_jitter.as_millis() as u64,
        "building strategy registry"
    );

    StrategyRegistry::standard(delay)
}
