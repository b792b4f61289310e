//! Benchmarks for 1D medians and the parallel reductions.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use ordstat::{Reducer, ReduceConfig, median1d, row_median, stack_median_combine};

fn noise(n: usize, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(0.0..1000.0)).collect()
}

fn bench_median1d(c: &mut Criterion) {
    let mut group = c.benchmark_group("median1d");
    for n in [9usize, 25, 100, 1024, 16_384] {
        let data = noise(n, n as u64);
        group.bench_with_input(BenchmarkId::from_parameter(n), &data, |b, data| {
            let mut scratch = data.clone();
            b.iter(|| {
                scratch.copy_from_slice(data);
                black_box(median1d(black_box(&mut scratch)))
            })
        });
    }
    group.finish();
}

fn bench_row_median(c: &mut Criterion) {
    let (nx, ny) = (2048, 2048);
    let data = noise(nx * ny, 7);
    let mask: Vec<u8> = (0..nx * ny).map(|i| (i % 17 == 0) as u8).collect();
    let mut output = vec![0.0f32; ny];

    c.bench_function("row_median_2048x2048", |b| {
        b.iter(|| row_median(black_box(&data), Some(&mask), nx, ny, &mut output))
    });
}

fn bench_stack_median_combine(c: &mut Criterion) {
    let (nx, ny) = (512, 512);
    let mut group = c.benchmark_group("stack_median_combine_512x512");
    for nimages in [5usize, 16, 25] {
        let data = noise(nx * ny * nimages, nimages as u64);
        let mut output = vec![0.0f32; nx * ny];
        group.bench_with_input(BenchmarkId::from_parameter(nimages), &data, |b, data| {
            b.iter(|| stack_median_combine(black_box(data), nx, ny, nimages, &mut output))
        });
    }
    group.finish();
}

fn bench_dedicated_pool(c: &mut Criterion) {
    let (nx, ny) = (1024, 1024);
    let data = noise(nx * ny, 11);
    let mut output = vec![0.0f32; nx];
    let reducer = Reducer::new(ReduceConfig {
        threads: Some(2),
        ..ReduceConfig::default()
    })
    .expect("Failed to build benchmark thread pool");

    c.bench_function("column_median_1024x1024_2_threads", |b| {
        b.iter(|| reducer.column_median(black_box(&data), None, nx, ny, &mut output))
    });
}

criterion_group!(
    benches,
    bench_median1d,
    bench_row_median,
    bench_stack_median_combine,
    bench_dedicated_pool
);
criterion_main!(benches);
