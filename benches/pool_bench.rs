use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};

use blockpool::{Manager, PoolConfig};

/// Benchmark the steady-state reuse path: one block churning in one class.
fn bench_reuse_cycle(c: &mut Criterion) {
    let pool = Manager::new();

    let mut group = c.benchmark_group("reuse_cycle");
    group.throughput(Throughput::Elements(1));

    for size in [1024usize, 16 * 1024, 256 * 1024] {
        group.bench_function(format!("acquire_release_{}", size), |b| {
            b.iter(|| {
                let block = pool.acquire(black_box(size)).unwrap();
                pool.release(block);
            })
        });
    }

    group.finish();
}

/// Benchmark the linear free-block scan with many outstanding blocks.
fn bench_scan_with_population(c: &mut Criterion) {
    let pool = Manager::new();

    // Populate the 1024 class with held blocks so each acquire scans past
    // them before finding the free one at the end.
    let held: Vec<_> = (0..1000).map(|_| pool.acquire(1000).unwrap()).collect();
    let spare = pool.acquire(1000).unwrap();
    pool.release(spare);

    let mut group = c.benchmark_group("free_block_scan");
    group.throughput(Throughput::Elements(1));

    group.bench_function("scan_1000_used", |b| {
        b.iter(|| {
            let block = pool.acquire(black_box(1000)).unwrap();
            pool.release(block);
        })
    });

    group.finish();
    drop(held);
}

/// Benchmark a fresh allocation per iteration (class keeps growing).
fn bench_cold_allocation(c: &mut Criterion) {
    let mut group = c.benchmark_group("cold_allocation");
    group.throughput(Throughput::Bytes(4096));

    group.bench_function("acquire_new_4096", |b| {
        b.iter_batched(
            || {
                Manager::with_config(PoolConfig {
                    min_block_size: 4096,
                    class_count: 1,
                })
                .unwrap()
            },
            |pool| {
                black_box(pool.acquire(4096).unwrap());
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_reuse_cycle,
    bench_scan_with_population,
    bench_cold_allocation
);
criterion_main!(benches);
