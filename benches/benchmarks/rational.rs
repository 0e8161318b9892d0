use criterion::{criterion_group, Criterion};
use num_bigint::BigInt;
use pprof::criterion::{Output, PProfProfiler};
use std::hint::black_box;

use exact_arith_coder::{parse, Rational};

fn rational_benchmark(c: &mut Criterion) {
    let a = Rational::new(1_000_000_007, 998_244_353).unwrap().powi(200).unwrap();
    let b = Rational::new(-31_415_926, 27_182_818).unwrap().powi(150).unwrap();
    let max_d = BigInt::from(1_u64 << 53);
    let mut group = c.benchmark_group("rational");

    group.bench_function("add", |bench| bench.iter(|| black_box(&a) + black_box(&b)));
    group.bench_function("mul", |bench| bench.iter(|| black_box(&a) * black_box(&b)));
    group.bench_function("trim", |bench| bench.iter(|| black_box(&a).trim(&max_d).unwrap()));
    group.bench_function("to_f64", |bench| bench.iter(|| black_box(&b).to_f64()));
    group.bench_function("parse", |bench| {
        bench.iter(|| parse(black_box("-12345.6789e-12/3.5")).unwrap())
    });
    group.finish();
}

criterion_group! {
    name = rational_benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = rational_benchmark
}
