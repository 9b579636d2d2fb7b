use criterion::{black_box, criterion_group, criterion_main, Criterion};

use learnledger_core::ledger::{CsvLedger, Ledger, MemoryLedger};
use learnledger_core::model::LedgerEntry;
use learnledger_core::rebuild::rebuild;

fn make_entries(users: usize, weeks: u32) -> Vec<LedgerEntry> {
    let mut entries = Vec::with_capacity(users * weeks as usize);
    for week in 1..=weeks {
        for u in 0..users {
            entries.push(LedgerEntry {
                user: format!("user-{u}"),
                week,
                learning_points: 568,
                bonus: 568,
                application_points: 511,
                certificate_points: 22,
                total_eval_points: 1101,
            });
        }
    }
    entries
}

fn bench_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebuild");

    let small = MemoryLedger::with_entries(make_entries(10, 52));
    group.bench_function("memory_10x52", |b| b.iter(|| rebuild(black_box(&small))));

    let large = MemoryLedger::with_entries(make_entries(200, 52));
    group.bench_function("memory_200x52", |b| b.iter(|| rebuild(black_box(&large))));

    let dir = tempfile::tempdir().expect("tempdir");
    let mut csv = CsvLedger::open(dir.path().join("bench.csv")).expect("open ledger");
    for entry in make_entries(10, 52) {
        csv.append(entry).expect("append");
    }
    group.bench_function("csv_10x52", |b| b.iter(|| rebuild(black_box(&csv))));

    group.finish();
}

criterion_group!(benches, bench_rebuild);
criterion_main!(benches);
