use cashflow_core::{FixedClock, ProjectionService, RngSource};
use cashflow_domain::{AssetHolding, Ledger, TransactionRecord};
use cashflow_storage_json::{load_ledger_from_path, save_ledger_to_path};
use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tempfile::tempdir;

fn build_sample_ledger(txn_count: usize) -> Ledger {
    let mut ledger = Ledger::new("Benchmark");
    let start_date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();

    for idx in 0..txn_count {
        let date = start_date + Duration::days((idx % 540) as i64);
        let amount = 20.0 + (idx % 250) as f64;
        let mut record = if idx % 4 == 0 {
            TransactionRecord::income(date, amount * 3.0)
        } else {
            TransactionRecord::expense(date, amount)
        };
        if idx % 97 == 0 {
            record = record.extraordinary();
        }
        if idx % 211 == 0 {
            record = record.future();
        }
        ledger.add_transaction(record);
    }
    ledger.add_holding(AssetHolding::new("Index Fund", 120.0, 95.0));
    ledger
}

fn bench_projection(c: &mut Criterion) {
    let ledger = build_sample_ledger(black_box(10_000));
    let service = ProjectionService::default();
    let clock = FixedClock::on(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());

    c.bench_function("project_10k_12_months", |b| {
        b.iter(|| {
            let mut rng = RngSource::seeded(7);
            let result = service
                .project_view(&ledger, Some(12), &clock, &mut rng)
                .expect("projection");
            black_box(result);
        })
    });

    c.bench_function("project_10k_600_months", |b| {
        b.iter(|| {
            let mut rng = RngSource::seeded(7);
            let result = service
                .project_view(&ledger, Some(600), &clock, &mut rng)
                .expect("projection");
            black_box(result);
        })
    });
}

fn bench_ledger_io(c: &mut Criterion) {
    let ledger = build_sample_ledger(black_box(10_000));
    let dir = tempdir().expect("tempdir");
    let file_path = dir.path().join("ledger.json");

    c.bench_function("ledger_save_10k", |b| {
        b.iter(|| save_ledger_to_path(&ledger, &file_path).expect("save ledger"))
    });

    save_ledger_to_path(&ledger, &file_path).expect("seed");
    c.bench_function("ledger_load_10k", |b| {
        b.iter(|| black_box(load_ledger_from_path(&file_path).expect("load ledger")))
    });
}

criterion_group!(benches, bench_projection, bench_ledger_io);
criterion_main!(benches);
