//! Non-negative money amounts accepted by top-ups and withdrawals.

use std::{borrow::Borrow, fmt, ops::Deref};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Non-negative amount of money
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    /// Amount with no value
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    /// Create amount from unsigned mantissa `num` and decimal `scale`, e.g. `Amount::new(1050, 2)`
    /// is `10.50`. Panics if `scale` is greater than 28.
    pub fn new(num: u64, scale: u32) -> Amount {
        let inner = Decimal::from_i128_with_scale(num.into(), scale);
        Self(inner)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("amount is negative")]
/// returned when a negative decimal is used as an [`Amount`]
pub struct NegativeAmountErr;

impl TryFrom<Decimal> for Amount {
    type Error = NegativeAmountErr;
    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value.is_sign_negative() && !value.is_zero() {
            Err(NegativeAmountErr)
        } else {
            // `-0` becomes plain zero
            Ok(Self(value.abs()))
        }
    }
}

impl From<Amount> for Decimal {
    fn from(this: Amount) -> Self {
        this.0
    }
}

impl Borrow<Decimal> for Amount {
    fn borrow(&self) -> &Decimal {
        &self.0
    }
}

impl Deref for Amount {
    type Target = Decimal;
    fn deref(&self) -> &Self::Target {
        self.borrow()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod test {
    use super::{Amount, NegativeAmountErr};
    use rust_decimal::Decimal;

    #[test]
    fn negative_decimal_is_rejected() {
        let e = Amount::try_from(Decimal::new(-1, 2)).unwrap_err();
        assert_eq!(e, NegativeAmountErr);
    }

    #[test]
    fn negative_zero_is_plain_zero() {
        let mut neg_zero = Decimal::ZERO;
        neg_zero.set_sign_negative(true);

        let a = Amount::try_from(neg_zero).unwrap();
        assert_eq!(a, Amount::ZERO);
        assert!(!a.is_sign_negative());
    }

    #[test]
    fn scale_is_kept() {
        let a = Amount::new(1050, 2);
        assert_eq!(*a, Decimal::new(105, 1));
        assert_eq!(a.to_string(), "10.50");
    }
}
