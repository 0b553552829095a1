//! Apply a stream of [`RawOperation`]s to a single card

use std::num::NonZeroUsize;

use futures::{pin_mut, Stream, StreamExt};

use crate::{
    amount::Amount,
    card::Card,
    csv::{CardSummary, RawOperation, RawOperationType},
    errors::CardErr,
};

/// How a single operation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// balance changed
    Applied,
    /// PIN rejected or not validated in time
    Denied,
    /// withdrawal larger than balance
    InsufficientFunds,
    /// top-up would overflow balance
    Overflow,
    /// amount was negative, card was not touched
    Rejected,
}

impl CardSummary {
    /// count `outcome` in matching column
    pub fn record(&mut self, outcome: Outcome) {
        let counter = match outcome {
            Outcome::Applied => &mut self.applied,
            Outcome::Denied => &mut self.denied,
            Outcome::InsufficientFunds => &mut self.insufficient,
            Outcome::Overflow => &mut self.overflow,
            Outcome::Rejected => &mut self.rejected,
        };
        *counter += 1;
    }
}

/// Apply one operation to `card`
pub async fn apply_operation<C: Card + ?Sized>(card: &C, op: RawOperation) -> Outcome {
    let amount = match Amount::try_from(op.amount) {
        Ok(amount) => amount,
        Err(e) => {
            tracing::info!(amount = %op.amount, "operation rejected: {e}");
            return Outcome::Rejected;
        }
    };

    let res = match op.r#type {
        RawOperationType::TopUp => card.top_up(op.pin, amount).await.map_err(CardErr::from),
        RawOperationType::Withdraw => card.withdraw(op.pin, amount).await.map_err(CardErr::from),
    };

    match res {
        Ok(true) => Outcome::Applied,
        Ok(false) => Outcome::Denied,
        Err(CardErr::Funds(_)) => Outcome::InsufficientFunds,
        Err(CardErr::Overflow(_)) => Outcome::Overflow,
    }
}

/// Apply every operation from `operations` to `card` with at most `concurrency` of them in flight.
///
/// With `concurrency` of one operations are applied strictly in stream order.
pub async fn replay<C: Card + ?Sized>(
    card: &C,
    operations: impl Stream<Item = RawOperation>,
    concurrency: NonZeroUsize,
) -> CardSummary {
    let outcomes = operations
        .map(|op| apply_operation(card, op))
        .buffered(concurrency.get());
    pin_mut!(outcomes);

    let mut summary = CardSummary::default();
    while let Some(outcome) = outcomes.next().await {
        summary.record(outcome);
    }
    summary.balance = card.balance();

    tracing::debug!(?summary, "replay finished");
    summary
}
