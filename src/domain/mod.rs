//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the loaded and derived series (`PriceSeries`, `ReturnSeries`, `SyntheticWalk`)
//! - scalar results (`Ar1Estimate`, `TrendFit`, `BetaEstimate`)
//! - the typed verdicts (`Observations`) and their thresholds

pub mod types;

pub use types::*;
