//! Benchmark runner comparing the multiply strategies.

use std::time::Instant;

use rand::{Rng, SeedableRng, rngs::StdRng};
use tilemul::{Operand, Shape, Strategy, first_mismatch, multiply, transpose};

/// Timed runs per strategy, after one warmup.
const ITERATIONS: usize = 3;

fn main() {
    println!("=== Tiled Matrix Multiplication Benchmark ===\n");

    tiny_example();

    // Tall, narrow A against a wide B. The short contraction dimension
    // keeps f32 reordering noise well inside the comparison tolerance.
    let shape = Shape::new(4096, 128, 1024);
    println!(
        "Random benchmark: ({} x {}) * ({} x {}), {} iterations each\n",
        shape.m, shape.k, shape.k, shape.n, ITERATIONS
    );

    let mut rng = StdRng::seed_from_u64(0x7113);
    let a: Vec<f32> = (0..shape.left_len())
        .map(|_| rng.gen_range(0.0..1.0))
        .collect();
    let b: Vec<f32> = (0..shape.right_len())
        .map(|_| rng.gen_range(0.0..1.0))
        .collect();

    let mut at = vec![0.0f32; shape.left_len()];
    transpose(&a, &mut at, shape.m, shape.k);
    let mut bt = vec![0.0f32; shape.right_len()];
    transpose(&b, &mut bt, shape.k, shape.n);

    let (reference, baseline_ms) = bench_strategy(
        Strategy::Naive,
        Operand::row_major(&a),
        Operand::row_major(&b),
        shape,
    );
    print_result(1, "naive (row-major)", baseline_ms, baseline_ms, shape);

    let variants: [(&str, Strategy, Operand<'_>, Operand<'_>); 5] = [
        (
            "naive (B transposed)",
            Strategy::Naive,
            Operand::row_major(&a),
            Operand::transposed(&bt),
        ),
        (
            "unrolled-inner",
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

    for (idx, (name, strategy, left, right)) in variants.into_iter().enumerate() {
        let (result, ms) = bench_strategy(strategy, left, right, shape);

        if let Some(mm) = first_mismatch(&reference, &result) {
            println!(
                "   {name} DIVERGED from naive at index {}: {} vs {}",
                mm.index, mm.left, mm.right
            );
        }
        print_result(idx + 2, name, ms, baseline_ms, shape);
    }
}

/// The hand-checked example: a 3×2 times a 2×4, B given as its transpose.
fn tiny_example() {
    let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let bt = [6.0, 5.0, 4.0, 3.0, 2.0, 1.0, 1.0, 2.0];
    let mut c = [0.0f32; 12];

    multiply(
        Strategy::Naive,
        Operand::row_major(&a),
        Operand::transposed(&bt),
        &mut c,
        Shape::new(3, 2, 4),
    )
    .expect("hand-checked shape is valid");

    println!("(3x2) * (2x4):");
    for row in c.chunks_exact(4) {
        let cells: Vec<String> = row.iter().map(|v| format!("{v:>3.0}")).collect();
        println!("  {}", cells.join(" "));
    }
    println!();
}

/// Warm up once, then average wall-clock time over [`ITERATIONS`] runs.
///
/// Returns the computed product (for cross-variant validation) and the
/// average duration in milliseconds.
fn bench_strategy(
    strategy: Strategy,
    left: Operand<'_>,
    right: Operand<'_>,
    shape: Shape,
) -> (Vec<f32>, f64) {
    let mut c = vec![0.0f32; shape.out_len()];
    multiply(strategy, left, right, &mut c, shape)
        .expect("benchmark shape satisfies kernel preconditions");

    let mut total = 0.0;
    for _ in 0..ITERATIONS {
        let mut out = vec![0.0f32; shape.out_len()];
        let start = Instant::now();
        multiply(strategy, left, right, &mut out, shape)
            .expect("benchmark shape satisfies kernel preconditions");
        total += start.elapsed().as_secs_f64();
    }

    (c, total / ITERATIONS as f64 * 1000.0)
}

fn print_result(idx: usize, name: &str, ms: f64, baseline_ms: f64, shape: Shape) {
    let gflops = 2.0 * (shape.m * shape.n * shape.k) as f64 / (ms / 1000.0) / 1e9;
    println!(
        "{idx}. {name:<22} {ms:>9.2} ms  {gflops:>6.2} GFLOPS  ({:.1}x)",
        baseline_ms / ms
    );
}
