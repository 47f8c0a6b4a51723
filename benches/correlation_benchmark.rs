//! Benchmark comparing dense vs pairwise correlation matrix computation
//!
//! Run with: cargo bench --bench correlation_benchmark

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use rand::SeedableRng;

use fitcorr::pipeline::{rank_against_target, CleanedTable, CorrelationMatrix, NumericColumn};

/// Generate a synthetic cleaned table with a `target` column and features
/// that are partly derived from it
fn generate_test_table(n_rows: usize, n_features: usize, seed: u64) -> CleanedTable {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let target: Vec<f64> = (0..n_rows).map(|_| 5.0 + rng.gen::<f64>() * 40.0).collect();
    let mut columns: Vec<NumericColumn> = Vec::with_capacity(n_features + 1);

    for i in 0..n_features {
        let values: Vec<f64> = match i % 3 {
            // Linear in the target plus noise
            0 => target
                .iter()
                .map(|t| 1.5 * t + 50.0 + rng.gen::<f64>() * 10.0)
                .collect(),
            // Inverse relationship
            1 => target
                .iter()
                .map(|t| 80.0 - t + rng.gen::<f64>() * 20.0)
                .collect(),
            // Unrelated
            _ => (0..n_rows).map(|_| rng.gen::<f64>() * 100.0).collect(),
        };
        columns.push(NumericColumn::from_values(format!("feature_{}", i), &values));
    }

    columns.push(NumericColumn::from_values("target", &target));
    CleanedTable::new("target", columns)
}

/// Dense vs pairwise for varying column counts
fn benchmark_correlation_by_columns(c: &mut Criterion) {
    let mut group = c.benchmark_group("correlation_by_columns");
    group.sample_size(30);

    let n_rows = 10_000;
    let column_counts = [10, 25, 50, 100];

    for n_cols in column_counts {
        let table = generate_test_table(n_rows, n_cols, 42);

        group.throughput(Throughput::Elements(((n_cols * (n_cols + 1)) / 2) as u64));

        group.bench_with_input(BenchmarkId::new("pairwise", n_cols), &table, |b, table| {
            b.iter(|| CorrelationMatrix::compute_pairwise(black_box(table)));
        });

        group.bench_with_input(BenchmarkId::new("dense", n_cols), &table, |b, table| {
            b.iter(|| CorrelationMatrix::compute_dense(black_box(table)));
        });
    }

    group.finish();
}

/// Dense vs pairwise for varying row counts
fn benchmark_correlation_by_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("correlation_by_rows");
    group.sample_size(20);

    let n_cols = 30;
    let row_counts = [1_000, 10_000, 100_000];

    for n_rows in row_counts {
        let table = generate_test_table(n_rows, n_cols, 42);

        group.throughput(Throughput::Elements(n_rows as u64));

        group.bench_with_input(BenchmarkId::new("pairwise", n_rows), &table, |b, table| {
            b.iter(|| CorrelationMatrix::compute_pairwise(black_box(table)));
        });

        group.bench_with_input(BenchmarkId::new("dense", n_rows), &table, |b, table| {
            b.iter(|| CorrelationMatrix::compute_dense(black_box(table)));
        });
    }

    group.finish();
}

/// Ranking cost on top of a precomputed matrix
fn benchmark_ranking(c: &mut Criterion) {
    let table = generate_test_table(5_000, 200, 7);
    let matrix = CorrelationMatrix::compute(&table);

    c.bench_function("rank_against_target_200", |b| {
        b.iter(|| rank_against_target(black_box(&matrix), black_box("target")));
    });
}

criterion_group!(
    benches,
    benchmark_correlation_by_columns,
    benchmark_correlation_by_rows,
    benchmark_ranking,
);
criterion_main!(benches);
