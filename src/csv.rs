//! csv input/output format and functions

use csv_async::{AsyncWriterBuilder, Terminator};
use rust_decimal::Decimal;

use crate::Pin;
use serde::{Deserialize, Serialize};

use tokio::{
    io::{AsyncRead, AsyncWrite},
    sync::mpsc::Sender,
};
use tokio_stream::StreamExt;

// Allowed operation types
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum RawOperationType {
    TopUp,
    Withdraw,
}

/// Single card operation as read from input. Amount sign is not checked yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct RawOperation {
    pub r#type: RawOperationType,
    pub pin: Pin,
    pub amount: Decimal,
}

/// take a reader and continuously deserialize operations from it into `sender`
pub async fn deserialize_operations_from_csv_reader<'r, R: AsyncRead + Unpin + Send + 'r>(
    input: R,
    sender: Sender<RawOperation>,
) -> anyhow::Result<()> {
    let mut builder = csv_async::AsyncReaderBuilder::new();
    builder.trim(csv_async::Trim::All);

    let mut rdr = builder.create_deserializer(input);

    let _headers = rdr.headers().await?;

    let mut records = rdr.deserialize::<RawOperation>();
    while let Some(record) = records.next().await {
        let record: RawOperation = record?;
        sender.send(record).await?;
    }

    Ok(())
}

/// final card balance and how replayed operations ended
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardSummary {
    /// balance after all operations
    pub balance: Decimal,
    /// operations that changed the balance
    pub applied: u64,
    /// operations with rejected or timed out PIN
    pub denied: u64,
    /// withdrawals larger than balance
    pub insufficient: u64,
    /// top-ups that would overflow balance
    pub overflow: u64,
    /// operations with negative amount
    pub rejected: u64,
}

/// save `summary` with headers into `wr`. Balance is rounded to 4 decimal places.
pub async fn write_summary(summary: &CardSummary, wr: impl AsyncWrite + Unpin) -> anyhow::Result<()> {
    let rp = 4; // round precision

    let mut builder = AsyncWriterBuilder::new();
    builder.terminator(Terminator::CRLF);

    let mut wr = builder.create_serializer(wr);

    let rounded = CardSummary {
        balance: summary.balance.round_dp(rp),
        ..summary.clone()
    };
    wr.serialize(rounded).await?;

    wr.flush().await?;
    Ok(())
}
