use criterion::{criterion_group, BenchmarkId, Criterion};
use pprof::criterion::{Output, PProfProfiler};
use std::hint::black_box;

use exact_arith_coder::{encode, train};

use crate::benchmarks::{zipfian_text, CORPUS_LENGTH, MESSAGE_LENGTH};

fn encoding_benchmark(c: &mut Criterion) {
    let table = train(&zipfian_text(0, CORPUS_LENGTH)).unwrap();
    let message = zipfian_text(1, MESSAGE_LENGTH);
    let mut group = c.benchmark_group("encoder");

    // rationals get bigger with every symbol: look at how the cost grows with the length.
    group.sample_size(10);
    for length in [MESSAGE_LENGTH / 4, MESSAGE_LENGTH / 2, MESSAGE_LENGTH] {
        let prefix = message.chars().take(length).collect::<String>();
        group.bench_with_input(BenchmarkId::new("encode", length), &prefix, |b, prefix| {
            b.iter(|| encode(black_box(prefix), &table).unwrap())
        });
    }
    group.finish();
}

criterion_group! {
    name = encoder_benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = encoding_benchmark
}
