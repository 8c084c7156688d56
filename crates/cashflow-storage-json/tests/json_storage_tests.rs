use cashflow_core::{storage::LedgerStorage, CoreError};
use cashflow_domain::{AssetHolding, Ledger, TransactionRecord};
use cashflow_storage_json::{load_ledger_from_path, save_ledger_to_path, JsonLedgerStorage};
use chrono::NaiveDate;
use std::fs;
use tempfile::tempdir;

fn sample_ledger() -> Ledger {
    let mut ledger = Ledger::new("StorageTest");
    let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    ledger.add_transaction(TransactionRecord::income(date, 3200.0));
    ledger.add_transaction(
        TransactionRecord::expense(date, 900.0)
            .extraordinary()
            .with_category(None, "Repairs"),
    );
    ledger.add_holding(AssetHolding::new("Index Fund", 10.0, 150.0).with_ticker("IDX"));
    ledger
}

#[test]
fn json_storage_can_save_and_load_ledger() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonLedgerStorage::new(dir.path().join("ledgers")).expect("create storage");

    let ledger = sample_ledger();
    storage
        .save_ledger("test-ledger", &ledger)
        .expect("save ledger");
    let loaded = storage.load_ledger("test-ledger").expect("load ledger");

    assert_eq!(loaded.name, "StorageTest");
    assert_eq!(loaded.id, ledger.id);
    assert_eq!(loaded.transactions, ledger.transactions);
    assert_eq!(loaded.holdings_value(), 1500.0);
    let path = storage.ledger_path("test-ledger");
    assert_eq!(path.extension().and_then(|ext| ext.to_str()), Some("json"));
    assert!(path.exists());
    assert_eq!(
        storage.list_ledgers().expect("list ledgers"),
        vec!["test-ledger".to_string()]
    );
}

#[test]
fn missing_ledger_is_reported_by_name() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonLedgerStorage::new(dir.path().join("ledgers")).expect("create storage");

    let err = storage.load_ledger("nowhere").expect_err("missing ledger");
    assert!(matches!(err, CoreError::LedgerNotFound(name) if name == "nowhere"));
}

#[test]
fn list_ignores_non_json_files() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonLedgerStorage::new(dir.path().join("ledgers")).expect("create storage");
    storage
        .save_ledger("Old Plan", &Ledger::new("Old Plan"))
        .expect("save ledger");
    std::fs::write(storage.ledgers_dir().join("notes.txt"), "scratch").expect("write");

    assert_eq!(storage.list_ledgers().unwrap(), vec!["old_plan".to_string()]);
}

#[test]
fn path_helpers_round_trip_and_leave_no_tmp_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("snapshot.json");

    save_ledger_to_path(&sample_ledger(), &path).expect("save to path");
    let loaded = load_ledger_from_path(&path).expect("load from path");

    assert_eq!(loaded.holdings.len(), 1);
    assert!(!dir.path().join("nested").join("snapshot.json.tmp").exists());
}

#[test]
fn snapshot_without_optional_fields_loads() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("minimal.json");
    fs::write(
        &path,
        r#"{
            "id": "5f0c6f52-3f0e-4c59-9a43-6f9f3e0c7b10",
            "name": "Minimal",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z",
            "transactions": [
                { "id": "0c2e8f0e-8d7b-4b4b-9f5e-3f6c1b2a9d01", "date": "2024-01-02",
                  "amount": 120.0, "direction": "EXPENSE" }
            ]
        }"#,
    )
    .expect("write snapshot");

    let ledger = load_ledger_from_path(&path).expect("load minimal");
    assert_eq!(ledger.schema_version, 1);
    assert!(ledger.holdings.is_empty());
    assert!(!ledger.transactions[0].is_future);
    assert!(!ledger.transactions[0].is_extraordinary);
}

#[test]
fn corrupt_snapshot_reports_serde_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ nope").expect("write");

    assert!(matches!(
        load_ledger_from_path(&path),
        Err(CoreError::Serde(_))
    ));
}
