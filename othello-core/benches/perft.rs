use criterion::*;

use othello_core::test_utils::{run_perft, run_perft_env};

fn criterion_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.sample_size(50);

    for depth in 1..6 {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| run_perft(black_box(depth)))
        });
    }

    group.finish();
}

fn criterion_perft_env(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft_env");
    group.sample_size(20);

    for depth in 1..5 {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| run_perft_env(black_box(depth)))
        });
    }

    group.finish();
}

criterion_group!(perft, criterion_perft, criterion_perft_env);
criterion_main!(perft);
