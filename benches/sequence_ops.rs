// Criterion benchmarks for the single-pass operations, compared against the
// equivalent hand-written iterator chains.

use cowabunga::{count, each_cons, filter, filter_map, group_by, map};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn benchmark_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    for size in [100usize, 10_000] {
        let data: Vec<i32> = (0..size as i32).collect();

        group.bench_with_input(BenchmarkId::new("cowabunga", size), &data, |b, data| {
            b.iter(|| filter(black_box(data), |&n| n % 3 == 0))
        });

        group.bench_with_input(BenchmarkId::new("iterator", size), &data, |b, data| {
            b.iter(|| {
                black_box(data)
                    .iter()
                    .filter(|&&n| n % 3 == 0)
                    .cloned()
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

fn benchmark_map_and_count(c: &mut Criterion) {
    let data: Vec<i32> = (0..1000).collect();

    c.bench_function("map_to_string", |b| {
        b.iter(|| map(black_box(&data), |n| n.to_string()))
    });

    c.bench_function("filter_map_even", |b| {
        b.iter(|| filter_map(black_box(&data), |&n| if n % 2 == 0 { Some(n * 2) } else { None }))
    });

    c.bench_function("count_even", |b| {
        b.iter(|| count(black_box(&data), |&n| n % 2 == 0))
    });
}

fn benchmark_grouping_and_windows(c: &mut Criterion) {
    let data: Vec<u32> = (0..1000).collect();

    c.bench_function("group_by_mod_16", |b| {
        b.iter(|| group_by(black_box(&data), |n| n % 16))
    });

    c.bench_function("each_cons_sum_4", |b| {
        b.iter(|| {
            let mut total = 0u64;
            each_cons(black_box(&data), 4, |w| {
                total += w.iter().map(|&n| u64::from(n)).sum::<u64>();
            })
            .map(|_| total)
        })
    });
}

criterion_group!(
    benches,
    benchmark_filter,
    benchmark_map_and_count,
    benchmark_grouping_and_windows
);
criterion_main!(benches);
