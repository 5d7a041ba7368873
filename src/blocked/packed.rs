//! Grid tiling over a packed copy of the right operand.

/// Multiply over a privately packed B for fully sequential inner reads.
///
/// Grid tiling still jumps `n` elements between the B lanes of successive
/// `p` values. Packing rewrites B from k × n row-major into tile-column
/// slabs (flat layout `[n / tile][k][tile]`) so that within one output
/// tile the kernel reads its slab front to back, one cache line after the
/// next. The pack is a one-time O(k·n) copy amortized over all of `m`.
///
/// This is the only kernel that allocates: the packed buffer is internal
/// scratch, `k * n` elements.
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
pub fn multiply_packed(
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

    let packed = pack_right(b, n, k, tile);

    for i0 in (0..m).step_by(tile) {
        for (jt, slab) in packed.chunks_exact(k * tile).enumerate() {
            let j0 = jt * tile;

            for p in 0..k {
                let b_lane = &slab[p * tile..(p + 1) * tile];

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

// Repack k × n row-major B into [n / tile][k][tile]: one slab per tile of
// columns, each slab holding its k rows of tile values back to back.
fn pack_right(b: &[f32], n: usize, k: usize, tile: usize) -> Vec<f32> {
    let mut packed = vec![0.0; k * n];

    for (jt, slab) in packed.chunks_exact_mut(k * tile).enumerate() {
        let j0 = jt * tile;
        for p in 0..k {
            slab[p * tile..(p + 1) * tile].copy_from_slice(&b[p * n + j0..p * n + j0 + tile]);
        }
    }

    packed
}
