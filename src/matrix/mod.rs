//! Basic matrix operations: naive reference kernels, transpose, and the
//! tolerance-based equivalence check the tiled strategies are validated
//! against.

pub mod compare;
pub mod naive;
pub mod transpose;
