//! Reporting: threshold classification and formatted terminal output.
//!
//! Classification is a pure function of the scalar results so that tests can
//! assert on typed verdicts instead of parsing text.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{
    Ar1Estimate, BETA_RISK_THRESHOLD, BetaEstimate, Direction, FitQuality, Observations, RANDOMNESS_THRESHOLD,
    Randomness, ReportInputs, ReturnStats, RiskLevel, SLOPE_THRESHOLD, Valuation,
};

pub mod format;

pub use format::*;

/// Classify scalar results into the four verdicts.
///
/// Ties resolve as follows: `|b| == RANDOMNESS_THRESHOLD` is predictable,
/// `slope == SLOPE_THRESHOLD` is avoid/hold, a price equal to trend is
/// undervalued and `beta == BETA_RISK_THRESHOLD` is low/moderate risk.
pub fn classify(inputs: &ReportInputs) -> Observations {
    let randomness = if inputs.ar1_coefficient.abs() < RANDOMNESS_THRESHOLD {
        Randomness::Efficient
    } else {
        Randomness::Predictable
    };

    let direction = if inputs.slope > SLOPE_THRESHOLD {
        Direction::LongTermBuy
    } else {
        Direction::AvoidHold
    };

    let valuation = if inputs.current_price > inputs.trend_price {
        Valuation::Overvalued
    } else {
        Valuation::Undervalued
    };

    let risk = if inputs.beta > BETA_RISK_THRESHOLD {
        RiskLevel::High
    } else {
        RiskLevel::LowModerate
    };

    Observations {
        randomness,
        direction,
        valuation,
        risk,
    }
}

/// Machine-readable run summary (`--format json`).
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSummary {
    pub n_prices: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub returns: ReturnStats,
    pub walk_seed: u64,
    pub walk_final_position: Option<i64>,
    pub ar1: Ar1Estimate,
    pub trend_slope: f64,
    pub trend_intercept: f64,
    pub trend_quality: FitQuality,
    pub beta: BetaEstimate,
    pub inputs: ReportInputs,
    pub observations: Observations,
}
