//! Criterion micro-benchmarks for shifting operations and display.

use std::hint::black_box;

use collection_bench::filled;
use collection_core::GrowthPolicy;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

/// Benchmark: `insert_at(0)` then `remove_at(0)` on arrays of growing size.
///
/// Both operations shift every element, so cost should scale linearly.
fn bench_front_insert_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("front_insert_remove");
    for n in [100usize, 1_000, 10_000] {
        let mut array = filled(GrowthPolicy::doubling(), n);
        array.reserve(1);
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| {
                array.insert_at(0, black_box(-1)).unwrap();
                black_box(array.remove_at(0).unwrap());
            });
        });
    }
    group.finish();
}

/// Benchmark: `exchange()` first and last over a 10K array.
fn bench_exchange_ends(c: &mut Criterion) {
    let mut array = filled(GrowthPolicy::doubling(), 10_000);
    let last = array.count() - 1;
    c.bench_function("exchange_ends_10k", |b| {
        b.iter(|| {
            array.exchange(black_box(0), black_box(last)).unwrap();
        });
    });
}

/// Benchmark: render a 2K array with `to_display_string()`.
fn bench_display_2k(c: &mut Criterion) {
    let array = filled(GrowthPolicy::doubling(), 2_000);
    c.bench_function("display_2k", |b| {
        b.iter(|| black_box(array.to_display_string()));
    });
}

criterion_group!(
    benches,
    bench_front_insert_remove,
    bench_exchange_ends,
    bench_display_2k
);
criterion_main!(benches);
