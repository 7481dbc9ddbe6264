// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for registry operations.
//!
//! Measures the performance of:
//! - Creating notifications (id allocation, timer arming, snapshot publish)
//! - Hover pause/resume on a crowded registry
//! - Bulk clear

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use std::hint::black_box;
use toast_registry::config::Config;
use toast_registry::notifications::Registry;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .build()
        .unwrap()
}

/// Benchmark a single create followed by a clear.
fn bench_create(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");
    let rt = runtime();
    let _guard = rt.enter();
    let registry = Registry::new(&Config::default()).unwrap();

    group.bench_function("create_and_clear", |b| {
        b.iter(|| {
            let id = registry.info(black_box("Saved"));
            registry.clear_all();
            black_box(id);
        });
    });

    group.finish();
}

/// Benchmark pause/resume with 100 live notifications around.
fn bench_pause_resume(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");
    let rt = runtime();
    let _guard = rt.enter();
    let registry = Registry::new(&Config::default()).unwrap();

    let ids: Vec<_> = (0..100).map(|i| registry.info(format!("n{i}"))).collect();
    let target = ids[50];

    group.bench_function("pause_resume", |b| {
        b.iter(|| {
            black_box(registry.pause(target));
            black_box(registry.resume(target));
        });
    });

    registry.clear_all();
    group.finish();
}

/// Benchmark clearing a full registry.
fn bench_clear_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");
    let rt = runtime();
    let _guard = rt.enter();
    let registry = Registry::new(&Config::default()).unwrap();

    group.bench_function("clear_all_100", |b| {
        b.iter_batched(
            || {
                for i in 0..100 {
                    registry.info(format!("n{i}"));
                }
            },
            |()| registry.clear_all(),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_create, bench_pause_resume, bench_clear_all);
criterion_main!(benches);
