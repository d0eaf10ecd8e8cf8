use blur1d::signal::*;
use blur1d::solver::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn sawtooth(samples: usize) -> blur1d::Signal {
    let time_domain = TimeDomain::linspace(1.0, samples).unwrap();
    generate_signal(&time_domain, &Sawtooth::default()).unwrap()
}

fn bench_variants(c: &mut Criterion) {
    let signal = sawtooth(500);
    let mut group = c.benchmark_group("diffuse_variants");
    for variant in Variant::ALL {
        let solver = DiffusionSolver::with_variant(variant);
        group.bench_with_input(
            BenchmarkId::from_parameter(variant.name()),
            &signal,
            |b, s| b.iter(|| solver.apply(black_box(s), black_box(DEFAULT_STEPS))),
        );
    }
    group.finish();
}

fn bench_buffering(c: &mut Criterion) {
    let signal = sawtooth(500);
    let mut group = c.benchmark_group("diffuse_buffering");
    for buffering in Buffering::ALL {
        let solver = DiffusionSolver::new(Variant::Compiled, buffering, DEFAULT_CHUNK_SIZE);
        group.bench_with_input(
            BenchmarkId::from_parameter(buffering.name()),
            &signal,
            |b, s| b.iter(|| solver.apply(black_box(s), black_box(DEFAULT_STEPS))),
        );
    }
    group.finish();
}

fn bench_parallel_chunks(c: &mut Criterion) {
    let signal = sawtooth(1_000_000);
    let mut group = c.benchmark_group("parallel_chunk_size");
    group.sample_size(10);
    for chunk_size in [10_000, 50_000, 250_000] {
        let solver = DiffusionSolver::new(Variant::Parallel, Buffering::DoubleBuffer, chunk_size);
        group.bench_with_input(BenchmarkId::from_parameter(chunk_size), &signal, |b, s| {
            b.iter(|| solver.apply(black_box(s), black_box(16)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_variants, bench_buffering, bench_parallel_chunks);
criterion_main!(benches);
