//! Criterion benchmarks for expression building and evaluation.

use criterion::{Criterion, criterion_group, criterion_main};
use enumars::lambda::ARG;
use enumars::pipeline::Sequence;
use std::hint::black_box;

fn bench_build(criterion: &mut Criterion) {
    criterion.bench_function("build multiply_add", |bencher| {
        bencher.iter(|| black_box(ARG * 2 + 1));
    });
}

fn bench_evaluate(criterion: &mut Criterion) {
    let transform = ARG * 2 + 1;
    criterion.bench_function("evaluate multiply_add", |bencher| {
        bencher.iter(|| transform.apply(black_box(5)));
    });

    let predicate = (ARG * ARG).gt(100);
    criterion.bench_function("evaluate squared_comparison", |bencher| {
        bencher.iter(|| predicate.test(black_box(11)));
    });
}

fn bench_pipeline_filter(criterion: &mut Criterion) {
    let elements: Sequence<i64> = (0..1_000).collect();
    let over_500 = ARG.gt(500);

    criterion.bench_function("sequence try_filter with expression", |bencher| {
        bencher.iter(|| {
            elements
                .try_filter(|&element| over_500.test(element))
                .unwrap()
        });
    });

    criterion.bench_function("sequence filter with closure", |bencher| {
        bencher.iter(|| elements.filter(|&element| element > 500));
    });
}

criterion_group!(
    benches,
    bench_build,
    bench_evaluate,
    bench_pipeline_filter
);
criterion_main!(benches);
