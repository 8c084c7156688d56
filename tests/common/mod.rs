#![allow(dead_code)]

use assert_cmd::Command;
use cashflow_domain::{AssetHolding, Ledger, TransactionRecord};
use chrono::NaiveDate;
use tempfile::TempDir;

pub const BIN_NAME: &str = "cashflow_cli";
pub const TODAY: &str = "2024-07-15";

/// Script-mode command isolated to `home`, with the clock pinned to [`TODAY`].
pub fn script_command(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("CASHFLOW_CLI_SCRIPT", "1")
        .env("CASHFLOW_HOME", home.path())
        .env("CASHFLOW_CLI_TODAY", TODAY)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// 5000 in cash (two regular months of +1000 plus an old deposit) and 5000 in holdings.
pub fn steady_ledger() -> Ledger {
    let mut ledger = Ledger::new("Steady");
    ledger.add_transaction(TransactionRecord::income(date(2020, 1, 1), 3000.0));
    ledger.add_transaction(
        TransactionRecord::income(date(2024, 5, 25), 3000.0).with_category(None, "Salary"),
    );
    ledger.add_transaction(
        TransactionRecord::expense(date(2024, 5, 2), 2000.0).with_category(None, "Rent"),
    );
    ledger.add_transaction(
        TransactionRecord::income(date(2024, 6, 25), 3000.0).with_category(None, "Salary"),
    );
    ledger.add_transaction(
        TransactionRecord::expense(date(2024, 6, 2), 2000.0).with_category(None, "Rent"),
    );
    ledger.add_holding(AssetHolding::new("Index Fund", 50.0, 100.0).with_ticker("IDX"));
    ledger
}
