use crate::{
    amount::Amount,
    errors::{ArithmeticOverflow, InsufficientFunds},
};
use rust_decimal::Decimal;

/// Represents current card balance
///
/// Every method leaves the balance untouched when it returns an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Balance {
    available: Decimal,
}

impl Balance {
    pub fn new(opening: Amount) -> Self {
        Self {
            available: opening.into(),
        }
    }

    pub fn try_top_up(&mut self, amount: &Amount) -> Result<(), ArithmeticOverflow> {
        self.available = self
            .available
            .checked_add(**amount)
            .ok_or(ArithmeticOverflow)?;
        Ok(())
    }

    pub fn try_withdraw(&mut self, amount: &Amount) -> Result<(), InsufficientFunds> {
        if self.available < **amount {
            return Err(InsufficientFunds);
        }

        self.available -= **amount;
        debug_assert!(self.available >= Decimal::ZERO);
        Ok(())
    }

    pub fn available(&self) -> Decimal {
        self.available
    }
}

#[cfg(test)]
mod test {
    use super::Balance;
    use crate::{
        amount::Amount,
        errors::{ArithmeticOverflow, InsufficientFunds},
    };
    use rust_decimal::Decimal;

    #[test]
    fn preventing_debt_withdraw() {
        let mut b = Balance::default();
        let e = b.try_withdraw(&Amount::new(100, 0)).unwrap_err();

        assert_eq!(e, InsufficientFunds);
        assert_eq!(b.available(), Decimal::ZERO);
    }

    #[test]
    fn withdraw_whole_balance() {
        let mut b = Balance::new(Amount::new(1450, 2));
        b.try_withdraw(&Amount::new(145, 1)).unwrap();

        assert_eq!(b.available(), Decimal::ZERO);
    }

    #[test]
    fn top_up_and_withdraw() {
        let mut b = Balance::default();
        b.try_top_up(&Amount::new(100, 1)).unwrap();
        b.try_top_up(&Amount::new(50, 1)).unwrap();

        b.try_withdraw(&Amount::new(145, 1)).unwrap();
        b.try_withdraw(&Amount::new(145, 1)).unwrap_err();

        assert_eq!(b.available(), Decimal::new(5, 1));
    }

    #[test]
    fn overflow_keeps_balance() {
        let mut b = Balance::new(Amount::new(1000, 0));
        let max = Amount::try_from(Decimal::MAX).unwrap();

        let e = b.try_top_up(&max).unwrap_err();
        assert_eq!(e, ArithmeticOverflow);
        assert_eq!(b.available(), Decimal::new(1000, 0));
    }
}
