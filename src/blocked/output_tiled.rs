//! Output-row tiling with the contraction loop hoisted.

/// Multiply by accumulating into tile-width slices of each output row.
///
/// Loop order is row, output tile, contraction, lane: for one tile-width
/// slice of an output row, the whole contraction dimension streams through
/// before the slice is left behind. The innermost loop touches contiguous
/// slices of both `b` and `c`, so it vectorizes, and the slice of `c`
/// stays in registers/L1 across all of `k`.
///
/// Accumulate semantics: partial sums are scattered into `c` throughout,
/// so `c` must be all zeros on entry. [`crate::Kernel::multiply`] zeroes
/// it before calling; direct callers own that contract.
///
/// # Arguments
///
/// * `at` - Left operand stored transposed (k × m), row-major
/// * `b` - Right operand (k × n), row-major
/// * `c` - Output (m × n), row-major, zeroed on entry
/// * `tile` - Slice width; `n` must be an exact multiple of it
pub fn multiply_output_tiled(
    at: &[f32],
    b: &[f32],
    c: &mut [f32],
    m: usize,
    n: usize,
    k: usize,
    tile: usize,
) {
    debug_assert_eq!(at.len(), k * m);
    debug_assert_eq!(b.len(), k * n);
    debug_assert_eq!(c.len(), m * n);
    debug_assert_eq!(n % tile, 0);

    for i in 0..m {
        for j0 in (0..n).step_by(tile) {
            for p in 0..k {
                let a_ip = at[p * m + i];
                let b_lane = &b[p * n + j0..p * n + j0 + tile];
                let c_lane = &mut c[i * n + j0..i * n + j0 + tile];

                for (cv, &bv) in c_lane.iter_mut().zip(b_lane) {
                    *cv += a_ip * bv;
                }
            }
        }
    }
}
