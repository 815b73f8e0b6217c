//! Benchmarks for layout classification.
//!
//! Classification runs on every metrics read, so it has to stay cheap
//! enough that recompute-on-demand beats caching. These benchmarks cover
//! representative device sizes on both sides of each breakpoint.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use responsive_layout::{Breakpoints, classify};

const SIZES: [(&str, f64, f64); 5] = [
    ("phone-portrait", 375.0, 667.0),
    ("tablet-portrait", 768.0, 1024.0),
    ("tablet-landscape", 1366.0, 1024.0),
    ("small-tablet-landscape", 900.0, 600.0),
    ("desktop", 2560.0, 1440.0),
];

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    for (name, width, height) in SIZES {
        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &(width, height),
            |b, &(width, height)| b.iter(|| classify(black_box(width), black_box(height))),
        );
    }
    group.finish();
}

fn bench_classify_with_injected_table(c: &mut Criterion) {
    let breakpoints = Breakpoints {
        tablet: 600.0,
        ..Breakpoints::default()
    };
    c.bench_function("classify/injected-table", |b| {
        b.iter(|| breakpoints.classify(black_box((1366.0, 1024.0))))
    });
}

criterion_group!(benches, bench_classify, bench_classify_with_injected_table);
criterion_main!(benches);
