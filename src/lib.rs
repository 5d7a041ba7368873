//! Cache-tiled matrix multiplication in Rust, built from scratch.
//!
//! I built this to see how far loop order and cache blocking alone can take
//! a single-precision matmul before reaching for intrinsics or threads.
//! Turns out it's over an order of magnitude: the same C = A·B, computed
//! with a transposed operand layout and tiled loops, keeps the inner loop
//! in unit strides over data that is still in cache, and the compiler does
//! the vectorizing.
//!
//! ## Usage
//!
//! ```
//! use tilemul::{multiply, Operand, Shape, Strategy};
//!
//! let a = vec![1.0f32; 32 * 16];
//! let b = vec![1.0f32; 16 * 48];
//! let mut c = vec![0.0f32; 32 * 48];
//!
//! multiply(
//!     Strategy::Naive,
//!     Operand::row_major(&a),
//!     Operand::row_major(&b),
//!     &mut c,
//!     Shape::new(32, 16, 48),
//! )
//! .unwrap();
//!
//! assert!(c.iter().all(|&x| x == 16.0));
//! ```
//!
//! The tiled strategies want one operand stored transposed so the loops
//! they reorder run over contiguous memory:
//!
//! ```
//! use tilemul::{multiply, transpose, Operand, Shape, Strategy};
//!
//! let a = vec![0.5f32; 32 * 16];
//! let b = vec![0.5f32; 16 * 48];
//!
//! let mut at = vec![0.0f32; 16 * 32];
//! transpose(&a, &mut at, 32, 16);
//!
//! let mut c = vec![0.0f32; 32 * 48];
//! multiply(
//!     Strategy::GridTiled,
//!     Operand::transposed(&at),
//!     Operand::row_major(&b),
//!     &mut c,
//!     Shape::new(32, 16, 48),
//! )
//! .unwrap();
//! ```
//!
//! ## What's inside
//!
//! - Naive triple loops for every operand-layout combination
//! - An unrolled dot-product kernel over transposed B
//! - Output-row tiling and two-dimensional grid tiling
//! - A packed-B variant that rearranges B for sequential reads
//! - A transpose utility and a tolerance-based equivalence check
//!
//! Kernels are pure functions over caller-owned buffers: inputs are shared
//! borrows, the output an exclusive borrow, so calls never alias and can
//! run from separate threads given separate output buffers.

use std::fmt;

pub mod blocked;
pub mod error;
pub mod layout;
pub mod matrix;

pub use error::MatmulError;
pub use layout::{Layout, Operand, Shape};
pub use matrix::compare::{Mismatch, TOLERANCE, approx_eq, first_mismatch};
pub use matrix::transpose::transpose;

/// Default tile width, in elements.
///
/// Sixteen f32 lanes is one 512-bit vector register, and the inner loops of
/// every tiled strategy are written to process exactly one tile per step.
/// Narrower targets still benefit: the compiler splits a 16-lane tile into
/// however many registers the target has.
pub const TILE_WIDTH: usize = 16;

/// Which multiply implementation to run.
///
/// All strategies compute the same product; they differ in loop structure,
/// in which operand layouts their index arithmetic is written for, and in
/// which dimensions must be exact multiples of the tile width.
///
/// | Strategy | Left | Right | Tile-aligned dims |
/// |---|---|---|---|
/// | `Naive` | any | any | none |
/// | `UnrolledInner` | row-major | transposed | K |
/// | `OutputTiled` | transposed | row-major | N |
/// | `GridTiled` | transposed | row-major | M, N |
/// | `PackedTiled` | transposed | row-major | M, N |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Reference triple loop. Works for every layout combination.
    Naive,
    /// Contraction loop split into fixed-width chunks the compiler can
    /// turn into vector multiply-accumulates.
    UnrolledInner,
    /// Fixed-width slices of each output row accumulated across the whole
    /// contraction dimension.
    OutputTiled,
    /// Output tiled in both dimensions; the fastest strategy, because one
    /// tile-width slice of B is reused across a full tile of rows.
    GridTiled,
    /// Grid tiling over a privately packed copy of B whose flattened
    /// layout matches the loop order exactly.
    PackedTiled,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strategy::Naive => "naive",
            Strategy::UnrolledInner => "unrolled-inner",
            Strategy::OutputTiled => "output-tiled",
            Strategy::GridTiled => "grid-tiled",
            Strategy::PackedTiled => "packed-tiled",
        })
    }
}

/// A multiply strategy paired with a tile width.
///
/// [`Kernel::new`] uses [`TILE_WIDTH`]; [`Kernel::with_tile`] lets tests
/// and callers on other vector widths pick their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel {
    strategy: Strategy,
    tile: usize,
}

impl Kernel {
    /// A kernel running `strategy` at the default tile width.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            tile: TILE_WIDTH,
        }
    }

    /// A kernel running `strategy` at a caller-chosen tile width.
    ///
    /// # Panics
    ///
    /// Panics if `tile` is zero.
    pub fn with_tile(strategy: Strategy, tile: usize) -> Self {
        assert!(tile >= 1, "tile width must be at least 1");
        Self { strategy, tile }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn tile(&self) -> usize {
        self.tile
    }

    /// Compute `c = a · b` for the given shape.
    ///
    /// Always overwrite semantics: whatever `c` held before the call is
    /// gone afterwards. Strategies that accumulate internally get a
    /// freshly zeroed buffer because this method zeroes `c` for them, so
    /// reusing an output buffer across calls is safe.
    ///
    /// # Errors
    ///
    /// All preconditions are checked before any element is written:
    ///
    /// - [`MatmulError::ShapeMismatch`] if a buffer length disagrees with
    ///   `shape`
    /// - [`MatmulError::UnsupportedLayout`] if the strategy's index
    ///   arithmetic is not written for the supplied operand layouts
    /// - [`MatmulError::TileMismatch`] if a dimension the strategy tiles
    ///   over is not a multiple of the tile width
    pub fn multiply(
        &self,
        a: Operand<'_>,
        b: Operand<'_>,
        c: &mut [f32],
        shape: Shape,
    ) -> Result<(), MatmulError> {
        let Shape { m, k, n } = shape;
        check_len("left", a.data(), m, k)?;
        check_len("right", b.data(), k, n)?;
        check_len("output", c, m, n)?;

        match self.strategy {
            Strategy::Naive => match (a.layout(), b.layout()) {
                (Layout::RowMajor, Layout::RowMajor) => {
                    matrix::naive::multiply_row_major(a.data(), b.data(), c, m, n, k);
                }
                (Layout::RowMajor, Layout::Transposed) => {
                    matrix::naive::multiply_transposed_right(a.data(), b.data(), c, m, n, k);
                }
                (Layout::Transposed, Layout::RowMajor) => {
                    matrix::naive::multiply_transposed_left(a.data(), b.data(), c, m, n, k);
                }
                (Layout::Transposed, Layout::Transposed) => {
                    matrix::naive::multiply_transposed_both(a.data(), b.data(), c, m, n, k);
                }
            },
            Strategy::UnrolledInner => {
                self.require_layouts(&a, &b, Layout::RowMajor, Layout::Transposed)?;
                self.require_tile_multiple("K", k)?;
                blocked::unrolled::multiply_unrolled(a.data(), b.data(), c, m, n, k, self.tile);
            }
            Strategy::OutputTiled => {
                self.require_layouts(&a, &b, Layout::Transposed, Layout::RowMajor)?;
                self.require_tile_multiple("N", n)?;
                c.fill(0.0);
                blocked::output_tiled::multiply_output_tiled(
                    a.data(),
                    b.data(),
                    c,
                    m,
                    n,
                    k,
                    self.tile,
                );
            }
            Strategy::GridTiled => {
                self.require_layouts(&a, &b, Layout::Transposed, Layout::RowMajor)?;
                self.require_tile_multiple("M", m)?;
                self.require_tile_multiple("N", n)?;
                c.fill(0.0);
                blocked::grid_tiled::multiply_grid_tiled(a.data(), b.data(), c, m, n, k, self.tile);
            }
            Strategy::PackedTiled => {
                self.require_layouts(&a, &b, Layout::Transposed, Layout::RowMajor)?;
                self.require_tile_multiple("M", m)?;
                self.require_tile_multiple("N", n)?;
                c.fill(0.0);
                blocked::packed::multiply_packed(a.data(), b.data(), c, m, n, k, self.tile);
            }
        }

        Ok(())
    }

    fn require_layouts(
        &self,
        a: &Operand<'_>,
        b: &Operand<'_>,
        left: Layout,
        right: Layout,
    ) -> Result<(), MatmulError> {
        if a.layout() != left || b.layout() != right {
            return Err(MatmulError::UnsupportedLayout {
                strategy: self.strategy,
                left: a.layout(),
                right: b.layout(),
            });
        }
        Ok(())
    }

    fn require_tile_multiple(&self, dim: &'static str, size: usize) -> Result<(), MatmulError> {
        if size % self.tile != 0 {
            return Err(MatmulError::TileMismatch {
                dim,
                size,
                tile: self.tile,
            });
        }
        Ok(())
    }
}

fn check_len(
    operand: &'static str,
    buf: &[f32],
    rows: usize,
    cols: usize,
) -> Result<(), MatmulError> {
    if buf.len() != rows * cols {
        return Err(MatmulError::ShapeMismatch {
            operand,
            len: buf.len(),
            rows,
            cols,
        });
    }
    Ok(())
}

/// Compute `c = a · b` with `strategy` at the default tile width.
///
/// Shorthand for `Kernel::new(strategy).multiply(a, b, c, shape)`; see
/// [`Kernel::multiply`] for the contract.
pub fn multiply(
    strategy: Strategy,
    a: Operand<'_>,
    b: Operand<'_>,
    c: &mut [f32],
    shape: Shape,
) -> Result<(), MatmulError> {
    Kernel::new(strategy).multiply(a, b, c, shape)
}
