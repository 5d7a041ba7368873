//! Error types for kernel dispatch.

use thiserror::Error;

use crate::Strategy;
use crate::layout::Layout;

/// Reasons a kernel refuses to run.
///
/// Every precondition is checked before any element of the output is
/// written, so a failed call leaves the output buffer untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MatmulError {
    /// A buffer's length disagrees with the declared shape.
    #[error("{operand} buffer holds {len} elements, expected {rows}x{cols}")]
    ShapeMismatch {
        operand: &'static str,
        len: usize,
        rows: usize,
        cols: usize,
    },

    /// A dimension the chosen strategy tiles over is not an exact multiple
    /// of the configured tile width.
    #[error("{dim} = {size} is not a multiple of the tile width {tile}")]
    TileMismatch {
        dim: &'static str,
        size: usize,
        tile: usize,
    },

    /// The strategy's index arithmetic is written for different operand
    /// layouts than the ones supplied.
    #[error("{strategy} kernel does not accept a {left} left operand and a {right} right operand")]
    UnsupportedLayout {
        strategy: Strategy,
        left: Layout,
        right: Layout,
    },
}
