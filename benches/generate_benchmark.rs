//! Benchmarks for fixture generation.
//!
//! Run with: cargo bench
//!
//! Measures composition, package serialization and inspection as the
//! stress document grows.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mkdocx::{build_package, compose, FixtureOptions, OoxmlContainer};

/// Benchmark composing the stress document at various section counts.
fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");

    for sections in [1u32, 8, 32, 128].iter() {
        let options = FixtureOptions::stress_test().with_sections(*sections);
        group.bench_with_input(
            BenchmarkId::new("sections", sections),
            &options,
            |b, options| {
                b.iter(|| {
                    let _ = compose(black_box(options));
                });
            },
        );
    }

    group.finish();
}

/// Benchmark building and zipping the whole package.
fn bench_package_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("package_bytes");

    for sections in [8u32, 32, 128].iter() {
        let options = FixtureOptions::stress_test().with_sections(*sections);
        let size = build_package(&options)
            .and_then(|p| p.to_bytes())
            .map(|b| b.len() as u64)
            .unwrap_or(0);

        group.throughput(Throughput::Bytes(size));
        group.bench_with_input(
            BenchmarkId::new("sections", sections),
            &options,
            |b, options| {
                b.iter(|| {
                    let _ = build_package(black_box(options)).and_then(|p| p.to_bytes());
                });
            },
        );
    }

    group.finish();
}

/// Benchmark reading a written package back.
fn bench_inspect(c: &mut Criterion) {
    let mut group = c.benchmark_group("inspect");

    for sections in [8u32, 32].iter() {
        let options = FixtureOptions::stress_test().with_sections(*sections);
        let data = build_package(&options).unwrap().to_bytes().unwrap();

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("sections", sections), &data, |b, data| {
            b.iter(|| {
                let container = OoxmlContainer::from_bytes(black_box(data.clone())).unwrap();
                let _ = mkdocx::inspect(&container);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compose, bench_package_bytes, bench_inspect);
criterion_main!(benches);
