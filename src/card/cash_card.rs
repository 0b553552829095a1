use super::balance::Balance;
use super::Card;
use crate::{
    amount::Amount,
    errors::{ArithmeticOverflow, InsufficientFunds},
    pin::{validate_within, PinValidator},
    Pin,
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::{
    sync::{Mutex, MutexGuard, PoisonError},
    time::Duration,
};

/// Default time budget for a single PIN validation
pub const DEFAULT_PIN_TIMEOUT: Duration = Duration::from_secs(10);

/// Card balance shared between concurrent callers and guarded by `V`
///
/// PIN validation always happens before the balance lock is taken, so a slow validator never
/// blocks other operations. Check and mutation of the balance happen under one lock.
#[derive(Debug)]
pub struct CashCard<V> {
    balance: Mutex<Balance>,
    validator: V,
    pin_timeout: Duration,
}

impl<V: PinValidator> CashCard<V> {
    /// Create new empty card
    pub fn new(validator: V) -> Self {
        Self::with_balance(validator, Amount::ZERO)
    }

    /// Create card with `opening` balance already on it
    pub fn with_balance(validator: V, opening: Amount) -> Self {
        Self {
            balance: Mutex::new(Balance::new(opening)),
            validator,
            pin_timeout: DEFAULT_PIN_TIMEOUT,
        }
    }

    /// Replace the PIN validation time budget
    pub fn with_pin_timeout(mut self, pin_timeout: Duration) -> Self {
        self.pin_timeout = pin_timeout;
        self
    }

    /// PIN validation time budget
    pub fn pin_timeout(&self) -> Duration {
        self.pin_timeout
    }

    /// Current balance
    pub fn balance(&self) -> Decimal {
        self.lock_balance().available()
    }

    /// Add `amount` to balance.
    ///
    /// `Ok(false)` when the PIN was rejected or its validation timed out. On error the balance is
    /// not changed.
    pub async fn top_up(&self, pin: Pin, amount: Amount) -> Result<bool, ArithmeticOverflow> {
        if !self.authorize(pin).await {
            tracing::info!(%amount, "top-up denied");
            return Ok(false);
        }

        let applied = {
            let mut balance = self.lock_balance();
            balance.try_top_up(&amount).map(|()| balance.available())
        };

        match applied {
            Ok(balance) => {
                tracing::debug!(%amount, %balance, "top-up applied");
                Ok(true)
            }
            Err(e) => {
                tracing::info!(%amount, "top-up refused: {e}");
                Err(e)
            }
        }
    }

    /// Take `amount` from balance.
    ///
    /// `Ok(false)` when the PIN was rejected or its validation timed out. On error the balance is
    /// not changed.
    pub async fn withdraw(&self, pin: Pin, amount: Amount) -> Result<bool, InsufficientFunds> {
        if !self.authorize(pin).await {
            tracing::info!(%amount, "withdrawal denied");
            return Ok(false);
        }

        let applied = {
            let mut balance = self.lock_balance();
            balance.try_withdraw(&amount).map(|()| balance.available())
        };

        match applied {
            Ok(balance) => {
                tracing::debug!(%amount, %balance, "withdrawal applied");
                Ok(true)
            }
            Err(e) => {
                tracing::info!(%amount, "withdrawal refused: {e}");
                Err(e)
            }
        }
    }

    async fn authorize(&self, pin: Pin) -> bool {
        validate_within(&self.validator, pin, self.pin_timeout).await
    }

    // balance is replaced only after checked arithmetic succeeds, so a poisoned lock still holds a
    // consistent value
    fn lock_balance(&self) -> MutexGuard<'_, Balance> {
        self.balance.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl<V: PinValidator> Card for CashCard<V> {
    fn balance(&self) -> Decimal {
        CashCard::balance(self)
    }

    async fn top_up(&self, pin: Pin, amount: Amount) -> Result<bool, ArithmeticOverflow> {
        CashCard::top_up(self, pin, amount).await
    }

    async fn withdraw(&self, pin: Pin, amount: Amount) -> Result<bool, InsufficientFunds> {
        CashCard::withdraw(self, pin, amount).await
    }
}
