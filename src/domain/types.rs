//! Shared domain types.
//!
//! These types are intentionally kept small. Series types own their data and
//! enforce their ordering invariants at construction; scalar results are small
//! serializable structs computed once and never mutated.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Serialize;

use crate::error::{AppError, ErrorKind, Stage};

/// `|b|` below this is read as "mostly random".
pub const RANDOMNESS_THRESHOLD: f64 = 0.05;

/// A trend slope strictly above this is a long-term buy signal.
pub const SLOPE_THRESHOLD: f64 = 0.0;

/// A beta strictly above this is high volatility.
pub const BETA_RISK_THRESHOLD: f64 = 1.0;

/// Seed used for the illustrative random walk when none is given.
pub const DEFAULT_WALK_SEED: u64 = 42;

/// One trading day's close.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// Daily closes, ascending by date, one entry per date.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Sort `points` by date and reject duplicate dates.
    pub fn new(mut points: Vec<PricePoint>) -> Result<Self, AppError> {
        points.sort_by_key(|p| p.date);
        if let Some(w) = points.windows(2).find(|w| w[0].date == w[1].date) {
            return Err(AppError::new(
                ErrorKind::ParseError,
                Stage::Load,
                format!("Duplicate date {} in price series.", w[0].date),
            ));
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Keep only the dates present in both series.
    pub fn align(&self, other: &PriceSeries) -> (PriceSeries, PriceSeries) {
        let mut left = Vec::new();
        let mut right = Vec::new();
        let (mut i, mut j) = (0, 0);
        while i < self.points.len() && j < other.points.len() {
            let (a, b) = (self.points[i], other.points[j]);
            match a.date.cmp(&b.date) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    left.push(a);
                    right.push(b);
                    i += 1;
                    j += 1;
                }
            }
        }
        (PriceSeries { points: left }, PriceSeries { points: right })
    }
}

/// Simple daily returns. `values[i]` is the change into `dates[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnSeries {
    pub dates: Vec<NaiveDate>,
    pub values: Vec<f64>,
}

impl ReturnSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Mean and sample standard deviation of daily returns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReturnStats {
    pub mean: f64,
    pub std: f64,
}

/// Cumulative sum of independent ±1 steps.
///
/// Illustrative only: shares nothing with the price data except its length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticWalk {
    pub seed: u64,
    pub positions: Vec<i64>,
}

/// `r_t = a + b * r_{t-1}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ar1Estimate {
    pub coefficient: f64,
    pub intercept: f64,
    /// Number of (today, yesterday) pairs used.
    pub n_pairs: usize,
}

/// Fit quality diagnostics for the trend line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FitQuality {
    pub sse: f64,
    pub rmse: f64,
    pub r_squared: f64,
    pub n: usize,
}

/// Price regressed on the day index `0..n`.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendFit {
    pub slope: f64,
    pub intercept: f64,
    /// Fitted value at each index.
    pub fitted: Vec<f64>,
    pub quality: FitQuality,
}

impl TrendFit {
    pub fn value_at(&self, index: usize) -> f64 {
        self.slope * index as f64 + self.intercept
    }

    pub fn last_value(&self) -> Option<f64> {
        self.fitted.last().copied()
    }
}

/// Where the beta's market proxy came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BetaBenchmark {
    /// The series compared with itself.
    SelfReference,
    /// A separate price file, aligned on common dates.
    External { label: String, n_common_days: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BetaEstimate {
    pub beta: f64,
    pub benchmark: BetaBenchmark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Randomness {
    Efficient,
    Predictable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    LongTermBuy,
    AvoidHold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Valuation {
    Overvalued,
    Undervalued,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    High,
    LowModerate,
}

impl Randomness {
    pub fn verdict(self) -> &'static str {
        match self {
            Randomness::Efficient => "Randomness: Market is mostly RANDOM (efficient).",
            Randomness::Predictable => "Randomness: Some predictability exists.",
        }
    }
}

impl Direction {
    pub fn verdict(self) -> &'static str {
        match self {
            Direction::LongTermBuy => "Buy Decision: LONG-TERM BUY (upward trend).",
            Direction::AvoidHold => "Buy Decision: AVOID / HOLD (no clear growth).",
        }
    }
}

impl Valuation {
    pub fn verdict(self) -> &'static str {
        match self {
            Valuation::Overvalued => "Valuation: OVERVALUED (price above trend).",
            Valuation::Undervalued => "Valuation: UNDERVALUED (price below trend).",
        }
    }
}

impl RiskLevel {
    pub fn verdict(self) -> &'static str {
        match self {
            RiskLevel::High => "Risk Level: HIGH volatility (riskier than market).",
            RiskLevel::LowModerate => "Risk Level: LOW to MODERATE volatility.",
        }
    }
}

/// The four verdicts, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Observations {
    pub randomness: Randomness,
    pub direction: Direction,
    pub valuation: Valuation,
    pub risk: RiskLevel,
}

impl Observations {
    pub fn verdicts(&self) -> [&'static str; 4] {
        [
            self.randomness.verdict(),
            self.direction.verdict(),
            self.valuation.verdict(),
            self.risk.verdict(),
        ]
    }
}

/// Inputs to the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReportInputs {
    pub mean_return: f64,
    pub ar1_coefficient: f64,
    pub slope: f64,
    pub beta: f64,
    pub current_price: f64,
    pub trend_price: f64,
}

/// How the run summary is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Settings for the statistical pipeline itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Seed for the illustrative random walk.
    pub walk_seed: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            walk_seed: DEFAULT_WALK_SEED,
        }
    }
}

/// A full run's configuration as understood by the binary.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub csv_path: PathBuf,
    /// Optional second price file used as the beta's market proxy.
    pub benchmark_path: Option<PathBuf>,
    pub analysis: AnalysisConfig,
    pub format: OutputFormat,
    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,
    /// Directory for SVG charts, if they should be saved.
    pub chart_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    #[test]
    fn price_series_sorts_ascending() {
        let series = PriceSeries::new(vec![
            PricePoint { date: day(3), close: 3.0 },
            PricePoint { date: day(1), close: 1.0 },
            PricePoint { date: day(2), close: 2.0 },
        ])
        .unwrap();
        assert_eq!(series.closes(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn price_series_rejects_duplicate_dates() {
        let err = PriceSeries::new(vec![
            PricePoint { date: day(1), close: 1.0 },
            PricePoint { date: day(1), close: 2.0 },
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseError);
    }

    #[test]
    fn align_keeps_common_dates_only() {
        let a = PriceSeries::new(vec![
            PricePoint { date: day(1), close: 10.0 },
            PricePoint { date: day(2), close: 11.0 },
            PricePoint { date: day(4), close: 12.0 },
        ])
        .unwrap();
        let b = PriceSeries::new(vec![
            PricePoint { date: day(2), close: 20.0 },
            PricePoint { date: day(3), close: 21.0 },
            PricePoint { date: day(4), close: 22.0 },
        ])
        .unwrap();

        let (left, right) = a.align(&b);
        assert_eq!(left.closes(), vec![11.0, 12.0]);
        assert_eq!(right.closes(), vec![20.0, 22.0]);
    }
}
