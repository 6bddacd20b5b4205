//! The statistical checks, one module per pipeline stage.
//!
//! Everything here is pure: series in, results out. Each function attaches
//! its own [`Stage`](crate::error::Stage) to the errors it raises.

pub mod autoreg;
pub mod beta;
pub mod returns;
pub mod trend;
pub mod walk;

pub use autoreg::*;
pub use beta::*;
pub use returns::*;
pub use trend::*;
pub use walk::*;
