//! Concurrent PIN protected cash card balance
//!
//! ```no_run
//! # async fn example() -> Result<(), cash_card::errors::InsufficientFunds> {
//! use cash_card::{amount::Amount, card::CashCard, pin::FixedPin};
//!
//! let card = CashCard::with_balance(FixedPin::new(1234), Amount::new(10_000, 0));
//! assert!(card.withdraw(1234, Amount::new(100, 0)).await?);
//! assert!(!card.withdraw(4321, Amount::new(100, 0)).await?);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]

pub mod amount;
pub mod card;
pub mod config;
pub mod csv;
pub mod errors;
pub mod pin;
pub mod replay;

/// Card credential, usually four digits
pub type Pin = u16;
