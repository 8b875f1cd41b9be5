//! Fee and validation rules per payment method.
//!
//! Everything here is pure: no I/O, no clock, no randomness.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Largest amount a single credit card payment may carry.
pub const CREDIT_CARD_LIMIT: Decimal = dec!(5000);

/// Smallest amount accepted for a bank transfer.
pub const BANK_TRANSFER_MINIMUM: Decimal = dec!(10);

/// Largest amount accepted for an Apple Pay payment.
pub const APPLE_PAY_MAXIMUM: Decimal = dec!(10000);

/// How a method turns an amount into a processing fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeSchedule {
    /// `amount * rate + fixed`
    Percentage { rate: Decimal, fixed: Decimal },
    /// `max(minimum, amount * rate)`
    Floor { rate: Decimal, minimum: Decimal },
}

impl FeeSchedule {
    /// Computes the fee, rounded to currency precision.
    pub fn apply(&self, amount: Decimal) -> Decimal {
        let fee = match *self {
            FeeSchedule::Percentage { rate, fixed } => amount * rate + fixed,
            FeeSchedule::Floor { rate, minimum } => minimum.max(amount * rate),
        };
        round_currency(fee)
    }
}

pub const CARD_FEES: FeeSchedule = FeeSchedule::Percentage {
    rate: dec!(0.029),
    fixed: dec!(0.30),
};

pub const PAYPAL_FEES: FeeSchedule = FeeSchedule::Percentage {
    rate: dec!(0.034),
    fixed: dec!(0.49),
};

pub const BANK_TRANSFER_FEES: FeeSchedule = FeeSchedule::Floor {
    rate: dec!(0.005),
    minimum: dec!(1.00),
};

pub const CRYPTO_FEES: FeeSchedule = FeeSchedule::Percentage {
    rate: dec!(0.015),
    fixed: Decimal::ZERO,
};

pub const MOBILE_WALLET_FEES: FeeSchedule = FeeSchedule::Percentage {
    rate: dec!(0.025),
    fixed: Decimal::ZERO,
};

/// Rounds to two decimal places, halves away from zero.
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

pub fn is_positive(amount: Decimal) -> bool {
    amount > Decimal::ZERO
}
