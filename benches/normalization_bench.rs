#![allow(unused)]
//! Normalizer throughput benchmarks.
//!
//! Measures how fast forecast lines become `DayRecord` values. Every line runs
//! all five catalog matchers, so the cost is dominated by regex search over
//! the condition and compass alternations.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `extract_line` | Single-line extraction: compact, spaced wind, placeholder high, garbled |
//! | `batch` | Whole batches of 10, 1 000 and 10 000 lines with one in ten garbled |
//! | `catalog` | One-off cost of compiling the pattern catalog |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench normalization_bench
//! open target/criterion/report/index.html
//! ```

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tenday_core::{extract_line, Normalizer, PatternCatalog};

fn high_volume(n: usize) -> Vec<String> {
    const GOOD: &[&str] = &[
        "Today Mostly Sunny 72°/55° WindNW9mph Rain10%",
        "Tonight Partly Cloudy --/54° WindWNW6mph Rain5%",
        "Sun 18 Rain and Snow 38°/29° WindN 18 mph Rain80%",
        "Fri 23 Scattered Thunderstorms 77°/60° WindSW15mph Rain45%",
    ];
    (0..n)
        .map(|i| {
            if i % 10 == 9 {
                format!("garbled line {i}")
            } else {
                GOOD[i % GOOD.len()].to_string()
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Single lines
// ---------------------------------------------------------------------------

fn extract_line_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_line");
    group.throughput(Throughput::Elements(1));

    let cases = [
        ("compact", "Mon 14 Rain 68°/54° WindNNE12mph Rain40%"),
        ("spaced_wind", "Sun 18 Rain and Snow 38°/29° WindN 18 mph Rain80%"),
        ("placeholder_high", "Tonight Partly Cloudy --/54° WindWNW6mph"),
        ("garbled", "Garbled nonsense with no recognizable fields at all"),
    ];

    // compile outside the timed loop
    PatternCatalog::global();

    for (name, line) in cases {
        group.bench_with_input(BenchmarkId::new(name, ""), &line, |b, line| {
            b.iter(|| black_box(extract_line(black_box(line))))
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Batches
// ---------------------------------------------------------------------------

fn batch_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let normalizer = Normalizer::default();

    for size in [10usize, 1_000, 10_000] {
        let lines = high_volume(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &lines, |b, lines| {
            b.iter(|| {
                normalizer
                    .normalize_with_diagnostics(black_box(lines))
                    .unwrap()
            })
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

fn catalog_bench(c: &mut Criterion) {
    c.bench_function("catalog/compile", |b| {
        b.iter(|| PatternCatalog::new().unwrap())
    });
}

criterion_group!(benches, extract_line_bench, batch_bench, catalog_bench);
criterion_main!(benches);
