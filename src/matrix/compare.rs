//! Tolerance-based comparison of kernel outputs.
//!
//! Reordered floating-point sums don't match bit for bit, so cross-variant
//! validation compares elementwise against a fixed absolute tolerance and
//! reports where the first disagreement sits.

/// Absolute tolerance for [`approx_eq`].
pub const TOLERANCE: f32 = 1e-4;

/// True iff `x` and `y` differ by less than [`TOLERANCE`].
pub fn approx_eq(x: f32, y: f32) -> bool {
    (x - y).abs() < TOLERANCE
}

/// The first elementwise disagreement between two buffers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mismatch {
    /// Flat index of the disagreeing element.
    pub index: usize,
    /// Value in the first buffer.
    pub left: f32,
    /// Value in the second buffer.
    pub right: f32,
}

/// Scan two same-shaped buffers and return the first pair of elements that
/// fail [`approx_eq`], or `None` if the buffers agree everywhere.
///
/// # Panics
///
/// Panics if the buffers have different lengths; differently-shaped
/// outputs are a harness bug, not a numerical divergence.
///
/// # Example
///
/// ```
/// use tilemul::first_mismatch;
///
/// let x = [1.0, 2.0, 3.0];
/// let y = [1.0, 2.5, 3.0];
///
/// let mismatch = first_mismatch(&x, &y).unwrap();
/// assert_eq!(mismatch.index, 1);
/// ```
pub fn first_mismatch(xs: &[f32], ys: &[f32]) -> Option<Mismatch> {
    assert_eq!(xs.len(), ys.len(), "compared buffers must be the same length");

    xs.iter()
        .zip(ys)
        .enumerate()
        .find_map(|(index, (&left, &right))| {
            (!approx_eq(left, right)).then_some(Mismatch { index, left, right })
        })
}
