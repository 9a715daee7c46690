//! Criterion benchmarks for segment transforms and queries.
//! Inputs are replayable draws: `draw_lines(Bounds2::centered(100.0), seed, n)`.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use planar::prelude::*;

fn bench_line(c: &mut Criterion) {
    let bounds = Bounds2::centered(100.0);
    let mut group = c.benchmark_group("line");
    for &n in &[16usize, 256, 4096] {
        group.bench_with_input(BenchmarkId::new("extend_length", n), &n, |b, &n| {
            b.iter_batched(
                || draw_lines(bounds, 11, n),
                |mut lines| {
                    for l in &mut lines {
                        l.extend_length(1.5).reverse_extend_length(-0.5);
                    }
                    lines
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("rotate", n), &n, |b, &n| {
            b.iter_batched(
                || draw_lines(bounds, 12, n),
                |mut lines| {
                    for l in &mut lines {
                        l.rotate(30.0);
                    }
                    lines
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("contains_point", n), &n, |b, &n| {
            let lines = draw_lines(bounds, 13, n);
            let probe = draw_point(bounds, ReplayToken::new(13, u64::MAX));
            b.iter(|| {
                lines
                    .iter()
                    .filter(|l| l.contains_point_eps(black_box(probe), EPS))
                    .count()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_line);
criterion_main!(benches);
