//! Card traits and structs
use crate::{
    amount::Amount,
    errors::{ArithmeticOverflow, InsufficientFunds},
    Pin,
};
use async_trait::async_trait;
use rust_decimal::Decimal;

pub(crate) mod balance;
pub(crate) mod cash_card;

pub use cash_card::{CashCard, DEFAULT_PIN_TIMEOUT};

/// PIN protected balance that can be topped up and withdrawn from
#[async_trait]
pub trait Card: Send + Sync {
    /// current balance
    fn balance(&self) -> Decimal;
    /// add `amount`, `Ok(false)` if the PIN was not accepted
    async fn top_up(&self, pin: Pin, amount: Amount) -> Result<bool, ArithmeticOverflow>;
    /// take `amount`, `Ok(false)` if the PIN was not accepted
    async fn withdraw(&self, pin: Pin, amount: Amount) -> Result<bool, InsufficientFunds>;
}
