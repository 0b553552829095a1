//! # cash-card
//! Application replays card operations from input csv file against one fresh card and prints a
//! summary of the outcome to output.
//!
//! ## Input format
//! csv with columns `type`, `pin`, `amount`
//!
//! ```csv
//! type, pin, amount
//! topup, 1234, 100.0
//! withdraw, 1234, 25.5
//! ```
//!
//! Card PIN, PIN validation timeout and concurrency are read from `CASH_CARD_*` environment
//! variables, see [`cash_card::config`]. Logs go to stderr and are filtered with `RUST_LOG`.

#![deny(missing_docs)]

use anyhow::Context;
use cash_card::{
    config::CardConfig,
    csv::{self, RawOperation},
    replay::replay,
};
use std::env;
use tokio::{
    io::{stdout, BufReader},
    spawn,
    sync::mpsc::{channel, Sender},
};
use tokio_stream::wrappers::ReceiverStream;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

async fn read_operations_from_file(
    filename: String,
    sender: Sender<RawOperation>,
) -> anyhow::Result<()> {
    let f = tokio::fs::File::open(filename)
        .await
        .context("access input file")?;

    let bf = BufReader::new(f);
    csv::deserialize_operations_from_csv_reader(bf, sender)
        .await
        .context("improper content of file")
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn,cash_card=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    // CLI handle
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        return Err(anyhow::Error::msg("expected exactly one path to csv file"));
    }

    let config = CardConfig::from_env().context("invalid configuration")?;
    tracing::debug!(?config, "configuration loaded");
    let card = config.card();

    // read operations from csv file
    let (tx_raw_ops, rx_raw_ops) = channel(8192);
    let task_read_csv = spawn(read_operations_from_file(args[1].clone(), tx_raw_ops));

    // apply operations while they are being read
    let summary = replay(&card, ReceiverStream::new(rx_raw_ops), config.concurrency).await;

    // operations read before a failure were applied, but no summary is written for a broken file
    task_read_csv.await??;
    tracing::info!(balance = %summary.balance, applied = summary.applied, "card replayed");

    csv::write_summary(&summary, stdout())
        .await
        .context("failed to save output")?;

    Ok(())
}
