//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The dispatcher depends on these traits, not on concrete strategies.

mod delay;
mod resolver;
mod strategy;

pub use delay::Delay;
pub use resolver::StrategyResolver;
pub use strategy::{PaymentStrategy, SharedStrategy};
