use criterion::{criterion_group, BatchSize, Criterion};
use pprof::criterion::{Output, PProfProfiler};
use std::hint::black_box;

use exact_arith_coder::{train, ProbabilityTableBuilder};

use crate::benchmarks::{zipfian_text, CORPUS_LENGTH};

fn training_benchmark(c: &mut Criterion) {
    let corpus = zipfian_text(0, CORPUS_LENGTH);
    let mut group = c.benchmark_group("model builder");

    group.sample_size(20);
    group.bench_function("train", |b| b.iter(|| train(black_box(&corpus)).unwrap()));
    group.bench_function("build", |b| {
        b.iter_batched(
            || {
                let mut builder = ProbabilityTableBuilder::new();
                builder.push_text(&corpus).unwrap();
                builder
            },
            |builder| builder.build(),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group! {
    name = model_builder_benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = training_benchmark
}
