//! # Payments Hex
//!
//! Application service layer and HTTP adapter for the payment dispatch engine.
//!
//! ## Architecture
//!
//! - `service/` - Payment dispatcher (resolve, validate, process, contain)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The dispatcher is generic over `R: StrategyResolver`, allowing
//! different registries to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;


pub use service::PaymentDispatcher;
