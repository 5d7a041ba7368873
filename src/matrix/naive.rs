//! Naive triple-loop kernels, one per operand-layout combination.
//!
//! Same mathematics in every function; only the index formula changes with
//! the storage convention. These are the correctness baselines, not the
//! fast path. Every output element is computed into a local accumulator
//! and stored exactly once, so the output buffer never needs pre-zeroing.

/// Naive multiplication with both operands row-major.
///
/// The textbook triple loop. The innermost loop reads a column of `b`
/// with stride `n`, missing cache on nearly every step, which is exactly
/// why this is the baseline everything else is measured against.
///
/// # Arguments
///
/// * `a` - Left operand (m × k), row-major
/// * `b` - Right operand (k × n), row-major
/// * `c` - Output (m × n), row-major, fully overwritten
/// * `m` - Rows of A and C
/// * `n` - Columns of B and C
/// * `k` - Columns of A, rows of B (the contraction dimension)
pub fn multiply_row_major(a: &[f32], b: &[f32], c: &mut [f32], m: usize, n: usize, k: usize) {
    debug_assert_eq!(a.len(), m * k);
    debug_assert_eq!(b.len(), k * n);
    debug_assert_eq!(c.len(), m * n);

    for i in 0..m {
        for j in 0..n {
            let mut sum = 0.0;
            for p in 0..k {
                // c[i, j] += a[i, p] * b[p, j]
                sum += a[i * k + p] * b[p * n + j];
            }
            c[i * n + j] = sum;
        }
    }
}

/// Naive multiplication with the right operand stored transposed.
///
/// `bt` holds B's transpose row-major (n × k), so both operands walk the
/// contraction dimension in unit strides: each output element is a dot
/// product of two contiguous rows.
pub fn multiply_transposed_right(
    a: &[f32],
    bt: &[f32],
    c: &mut [f32],
    m: usize,
    n: usize,
    k: usize,
) {
    debug_assert_eq!(a.len(), m * k);
    debug_assert_eq!(bt.len(), n * k);
    debug_assert_eq!(c.len(), m * n);

    for i in 0..m {
        for j in 0..n {
            let mut sum = 0.0;
            for p in 0..k {
                // b[p, j] lives at bt[j, p]
                sum += a[i * k + p] * bt[j * k + p];
            }
            c[i * n + j] = sum;
        }
    }
}

/// Naive multiplication with the left operand stored transposed.
///
/// `at` holds A's transpose row-major (k × m), the layout the output-tiled
/// kernels are written for: `at[p * m + i]` reads a column of the logical
/// A with unit stride in `p`'s outer loop direction.
pub fn multiply_transposed_left(
    at: &[f32],
    b: &[f32],
    c: &mut [f32],
    m: usize,
    n: usize,
    k: usize,
) {
    debug_assert_eq!(at.len(), k * m);
    debug_assert_eq!(b.len(), k * n);
    debug_assert_eq!(c.len(), m * n);

    for i in 0..m {
        for j in 0..n {
            let mut sum = 0.0;
            for p in 0..k {
                // a[i, p] lives at at[p, i]
                sum += at[p * m + i] * b[p * n + j];
            }
            c[i * n + j] = sum;
        }
    }
}

/// Naive multiplication with both operands stored transposed.
pub fn multiply_transposed_both(
    at: &[f32],
    bt: &[f32],
    c: &mut [f32],
    m: usize,
    n: usize,
    k: usize,
) {
    debug_assert_eq!(at.len(), k * m);
    debug_assert_eq!(bt.len(), n * k);
    debug_assert_eq!(c.len(), m * n);

    for i in 0..m {
        for j in 0..n {
            let mut sum = 0.0;
            for p in 0..k {
                sum += at[p * m + i] * bt[j * k + p];
            }
            c[i * n + j] = sum;
        }
    }
}
