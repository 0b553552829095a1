use cash_card::{
    csv::{RawOperation, RawOperationType},
    pin::DEFAULT_PIN,
};
use rand::Rng;
use rust_decimal::Decimal;

fn main() -> anyhow::Result<()> {
    let loop_end = 1_000_000;

    let b = csv::WriterBuilder::new();
    let mut wr = b.from_path("massive_operations.csv")?;

    let mut wr_op = |op: RawOperation| wr.serialize(op);

    wr_op(RawOperation {
        r#type: RawOperationType::TopUp,
        pin: DEFAULT_PIN,
        amount: Decimal::new(1_000_000, 0),
    })?;

    let mut rng = rand::thread_rng();
    for _ in 0..loop_end {
        let r#type = if rng.gen_bool(0.40) {
            RawOperationType::TopUp
        } else {
            RawOperationType::Withdraw
        };
        // roughly one in twenty operations uses a wrong pin
        let pin = if rng.gen_bool(0.05) {
            rng.gen_range(0..10_000)
        } else {
            DEFAULT_PIN
        };

        wr_op(RawOperation {
            r#type,
            pin,
            amount: Decimal::new(rng.gen_range(1..100_000), 2),
        })?;
    }

    wr.flush()?;
    Ok(())
}
