//! Two-dimensional output tiling.

/// Multiply block-by-block over an M-tile × N-tile grid of the output.
///
/// On top of the output-row tiling this also tiles M, and hoists the
/// contraction loop above the tile's row loop: one M-tile × N-tile block
/// of `c` is fully accumulated across all of `k` before the next block
/// starts. The payoff is reuse: for each `p`, the same tile-width slice
/// of `b` feeds every row of the tile while it is still in cache. This is
/// the fastest strategy here.
///
/// Accumulate semantics: `c` must be all zeros on entry.
/// [`crate::Kernel::multiply`] zeroes it before calling; direct callers
/// own that contract.
///
/// # Arguments
///
/// * `at` - Left operand stored transposed (k × m), row-major
/// * `b` - Right operand (k × n), row-major
/// * `c` - Output (m × n), row-major, zeroed on entry
/// * `tile` - Tile width; both `m` and `n` must be exact multiples of it
pub fn multiply_grid_tiled(
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
    debug_assert_eq!(m % tile, 0);
    debug_assert_eq!(n % tile, 0);

    for i0 in (0..m).step_by(tile) {
        for j0 in (0..n).step_by(tile) {
            for p in 0..k {
                let b_lane = &b[p * n + j0..p * n + j0 + tile];

                for i in i0..i0 + tile {
                    let a_ip = at[p * m + i];
                    let c_lane = &mut c[i * n + j0..i * n + j0 + tile];

                    for (cv, &bv) in c_lane.iter_mut().zip(b_lane) {
                        *cv += a_ip * bv;
                    }
                }
            }
        }
    }
}
