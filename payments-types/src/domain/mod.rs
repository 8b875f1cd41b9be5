//! Domain models for the payment dispatch engine.

pub mod method;
pub mod request;
pub mod result;

pub use method::{PaymentMethod, PaymentMethodInfo};
pub use request::{DEFAULT_CURRENCY, PaymentRequest, is_present};
pub use result::PaymentResult;
