use std::{fs::File, io::Read};

use assert_cmd::Command;
use cash_card::csv::CardSummary;

fn executable() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

fn read_summary(reader: impl Read) -> anyhow::Result<Vec<CardSummary>> {
    let mut b = csv::ReaderBuilder::new();
    b.trim(csv::Trim::All);
    let mut rdr = b.from_reader(reader);

    let mut rows = Vec::new();
    for summary in rdr.deserialize() {
        let summary: CardSummary = summary?;
        rows.push(summary);
    }

    Ok(rows)
}

#[test]
fn system_test() {
    let tests = vec![1, 2];

    for test_no in tests {
        let in_file = format!("./tests/csvs/in{test_no}.csv");
        let out_file = format!("./tests/csvs/out{test_no}.csv");

        let out = executable()
            .arg(in_file)
            .env_remove("CASH_CARD_PIN")
            .env_remove("CASH_CARD_CONCURRENCY")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        //deserialize_output
        let out = read_summary(out.as_slice()).unwrap();
        let exp = read_summary(File::open(out_file).unwrap()).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out, exp);
    }
}

#[test]
fn configured_pin_is_used() {
    let out = executable()
        .arg("./tests/csvs/in1.csv")
        .env("CASH_CARD_PIN", "4321")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let out = read_summary(out.as_slice()).unwrap();
    assert_eq!(out[0].denied, 6);
    assert_eq!(out[0].balance, rust_decimal::Decimal::ZERO);
}

#[test]
fn missing_input_fails() {
    executable().assert().failure();
    executable()
        .arg("./tests/csvs/does_not_exist.csv")
        .assert()
        .failure();
}

#[test]
fn invalid_config_fails() {
    executable()
        .arg("./tests/csvs/in1.csv")
        .env("CASH_CARD_PIN_TIMEOUT_MS", "soon")
        .assert()
        .failure();
}
