//! Criterion benchmarks: every strategy over a range of square sizes.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tilemul::{Operand, Shape, Strategy, multiply, transpose};

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");
    group.sample_size(20);

    for &size in &[64usize, 128, 256, 512] {
        let shape = Shape::new(size, size, size);

        let mut rng = StdRng::seed_from_u64(size as u64);
        let a: Vec<f32> = (0..shape.left_len())
            .map(|_| rng.gen_range(0.0..1.0))
            .collect();
        let b: Vec<f32> = (0..shape.right_len())
            .map(|_| rng.gen_range(0.0..1.0))
            .collect();

        let mut at = vec![0.0f32; shape.left_len()];
        transpose(&a, &mut at, size, size);
        let mut bt = vec![0.0f32; shape.right_len()];
        transpose(&b, &mut bt, size, size);

        // Two reads and a fused multiply-add per inner step.
        group.throughput(Throughput::Elements(2 * (size * size * size) as u64));

        let cases: [(&str, Strategy, Operand<'_>, Operand<'_>); 5] = [
            (
                "naive",
                Strategy::Naive,
                Operand::row_major(&a),
                Operand::row_major(&b),
            ),
            (
                "unrolled",
                Strategy::UnrolledInner,
                Operand::row_major(&a),
                Operand::transposed(&bt),
            ),
            (
                "output-tiled",
                Strategy::OutputTiled,
                Operand::transposed(&at),
                Operand::row_major(&b),
            ),
            (
                "grid-tiled",
                Strategy::GridTiled,
                Operand::transposed(&at),
                Operand::row_major(&b),
            ),
            (
                "packed-tiled",
                Strategy::PackedTiled,
                Operand::transposed(&at),
                Operand::row_major(&b),
            ),
        ];

        for (name, strategy, left, right) in cases {
            group.bench_with_input(BenchmarkId::new(name, size), &size, |bench, _| {
                let mut out = vec![0.0f32; shape.out_len()];
                bench.iter(|| {
                    multiply(strategy, left, right, black_box(&mut out), shape).unwrap();
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
