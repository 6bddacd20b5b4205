//! Mathematical utilities: sample moments and least squares.

pub mod moments;
pub mod ols;

pub use moments::*;
pub use ols::*;
