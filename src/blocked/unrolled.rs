//! Contraction-loop unrolling over a transposed right operand.

/// Multiply with the contraction loop split into tile-width chunks.
///
/// Mathematically identical to the naive transposed-right kernel: each
/// output element is a dot product of a row of `a` and a row of `bt`. The
/// dot product is taken one tile-width chunk at a time, so each outer step
/// is a fixed-length multiply-accumulate the compiler lowers to vector
/// instructions.
///
/// `c` is fully overwritten; no pre-zeroing needed.
///
/// # Arguments
///
/// * `a` - Left operand (m × k), row-major
/// * `bt` - Right operand stored transposed (n × k), row-major
/// * `c` - Output (m × n), row-major
/// * `tile` - Chunk width; `k` must be an exact multiple of it
pub fn multiply_unrolled(
    a: &[f32],
    bt: &[f32],
    c: &mut [f32],
    m: usize,
    n: usize,
    k: usize,
    tile: usize,
) {
    debug_assert_eq!(a.len(), m * k);
    debug_assert_eq!(bt.len(), n * k);
    debug_assert_eq!(c.len(), m * n);
    debug_assert_eq!(k % tile, 0);

    for i in 0..m {
        let a_row = &a[i * k..(i + 1) * k];
        for j in 0..n {
            let bt_row = &bt[j * k..(j + 1) * k];

            let mut sum = 0.0;
            for (a_chunk, b_chunk) in a_row.chunks_exact(tile).zip(bt_row.chunks_exact(tile)) {
                for (&x, &y) in a_chunk.iter().zip(b_chunk) {
                    sum += x * y;
                }
            }
            c[i * n + j] = sum;
        }
    }
}
