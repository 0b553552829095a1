//! Possible errors

use thiserror::Error;

/// Withdrawal asked for more than the card balance
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("not enough funds available for this withdrawal")]
pub struct InsufficientFunds;

/// Top-up would exceed the range of the balance decimal
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("top-up would overflow card balance")]
pub struct ArithmeticOverflow;

/// Group all errors that a card operation can fail with
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CardErr {
    #[error("card withdrawal error")]
    Funds(#[from] InsufficientFunds),
    #[error("card top-up error")]
    Overflow(#[from] ArithmeticOverflow),
}

/// Environment configuration could not be parsed
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid value `{value}` for {key}: {reason}")]
pub struct ConfigErr {
    /// environment variable name
    pub key: &'static str,
    /// raw value that was rejected
    pub value: String,
    /// why the value was rejected
    pub reason: String,
}
