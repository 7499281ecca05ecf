//! Performance benchmarks for the payroll engine.
//!
//! This benchmark suite verifies that the core paths meet performance targets:
//! - Single payroll computation: < 10μs mean
//! - Batch of 100 staff through the runner: < 50ms mean
//! - Batch of 1000 staff through the runner: < 500ms mean
//! - A full day of cadence evaluations: < 1ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;
use std::sync::Arc;

use payroll_engine::batch::BatchRunner;
use payroll_engine::calculation::compute_payroll;
use payroll_engine::models::{PayFrequency, Staff};
use payroll_engine::schedule::due_cadences;
use payroll_engine::store::{InMemoryLedger, InMemoryStaffDirectory};

/// Creates a staff member with all compensation fields populated.
fn create_staff(id: usize) -> Staff {
    Staff {
        id: format!("staff_{:04}", id),
        name: format!("Staff Member {}", id),
        pay_frequency: PayFrequency::Monthly,
        salary: "3000.00".to_string(),
        allowances: Some("200.50".to_string()),
        deductions: Some("150.25".to_string()),
    }
}

fn run_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 29).unwrap()
}

/// Benchmark: single net pay computation.
///
/// Target: < 10μs mean
fn bench_compute_payroll(c: &mut Criterion) {
    let staff = create_staff(1);
    let period = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();

    c.bench_function("compute_payroll", |b| {
        b.iter(|| black_box(compute_payroll(black_box(&staff), period).unwrap()))
    });
}

/// Benchmark: batch runs over populated in-memory stores.
///
/// Targets: 100 staff < 50ms, 1000 staff < 500ms mean. A fresh ledger per
/// iteration keeps every run on the insert path rather than the duplicate
/// path.
fn bench_batch_runs(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    let mut group = c.benchmark_group("batch_processing");

    for staff_count in [100usize, 1000] {
        let directory = Arc::new(InMemoryStaffDirectory::new());
        rt.block_on(async {
            for i in 0..staff_count {
                directory.insert(create_staff(i)).await;
            }
        });

        group.throughput(Throughput::Elements(staff_count as u64));
        if staff_count >= 1000 {
            group.sample_size(10);
        }
        group.bench_with_input(
            BenchmarkId::new("staff", staff_count),
            &staff_count,
            |b, _| {
                b.to_async(&rt).iter(|| {
                    let directory = directory.clone();
                    async move {
                        let runner =
                            BatchRunner::new(directory, Arc::new(InMemoryLedger::new()));
                        let result = runner
                            .run(PayFrequency::Monthly, run_date())
                            .await
                            .unwrap();
                        black_box(result)
                    }
                })
            },
        );
    }

    group.finish();
}

/// Benchmark: cadence predicate evaluation for every minute of one day.
///
/// Target: < 1ms mean
fn bench_cadence_sweep(c: &mut Criterion) {
    let day = NaiveDate::from_ymd_opt(2026, 6, 28).unwrap();
    let minutes: Vec<_> = (0u32..24 * 60)
        .map(|m| {
            day.and_hms_opt(m / 60, m % 60, 0)
                .expect("valid time of day")
        })
        .collect();

    c.bench_function("cadence_sweep_one_day", |b| {
        b.iter(|| {
            let mut fired = 0usize;
            for now in &minutes {
                fired += due_cadences(black_box(*now)).len();
            }
            black_box(fired)
        })
    });
}

criterion_group!(
    benches,
    bench_compute_payroll,
    bench_batch_runs,
    bench_cadence_sweep,
);
criterion_main!(benches);
