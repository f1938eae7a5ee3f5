use classic_algos::prelude::*;
use classic_algos::sorting::{heap_sort, radix_sort_lsd, shell_sort};
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::Rng;
use std::hint::black_box;

fn bench_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("String Sort");
    group.sample_size(10);

    let mut rng = rand::rng();
    let count = 10_000;

    let random_strings: Vec<String> = (0..count)
        .map(|_| {
            let len = rng.random_range(5..20);
            (0..len).map(|_| rng.random::<char>()).collect()
        })
        .collect();

    group.bench_function("radix_sort_bytes", |b| {
        b.iter_batched(
            || random_strings.clone(),
            |mut data| radix_sort_bytes(black_box(&mut data)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("merge_sort", |b| {
        b.iter_batched(
            || random_strings.clone(),
            |mut data| merge_sort(black_box(&mut data)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("slice::sort (stable)", |b| {
        b.iter_batched(
            || random_strings.clone(),
            |mut data| data.sort(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_long_prefix(c: &mut Criterion) {
    let mut group = c.benchmark_group("Long Common Prefix");
    group.sample_size(10);

    let mut rng = rand::rng();
    let count = 10_000;
    let prefix = "common_prefix_which_is_quite_long_indeed_";

    let input: Vec<String> = (0..count)
        .map(|_| {
            let suffix: String = (0..5).map(|_| rng.random::<char>()).collect();
            format!("{prefix}{suffix}")
        })
        .collect();

    group.bench_function("radix_sort_bytes", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| radix_sort_bytes(black_box(&mut data)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("slice::sort (stable)", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_integers(c: &mut Criterion) {
    let mut group = c.benchmark_group("Integer Sort");
    group.sample_size(10);

    let mut rng = rand::rng();
    let input: Vec<u32> = (0..100_000).map(|_| rng.random()).collect();

    let sorts: [(&str, fn(&mut [u32])); 5] = [
        ("merge_sort", merge_sort),
        ("quick_sort", quick_sort),
        ("heap_sort", heap_sort),
        ("shell_sort", shell_sort),
        ("radix_sort_lsd", radix_sort_lsd),
    ];
    for (name, sort) in sorts {
        group.bench_function(name, |b| {
            b.iter_batched(
                || input.clone(),
                |mut data| sort(black_box(&mut data)),
                BatchSize::SmallInput,
            )
        });
    }

    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_strings, bench_long_prefix, bench_integers);
criterion_main!(benches);
