//! The analysis pipeline, shared by every output mode.
//!
//! load -> returns -> random walk -> AR(1) -> trend -> beta -> classification
//!
//! `run_analysis` is pure (no filesystem, no printing); `run_from_config`
//! adds the file loading in front of it.

use crate::analysis::{
    benchmark_beta, compute_returns, estimate_ar1, fit_trend, self_beta, simulate_random_walk, summarize_returns,
};
use crate::domain::{
    AnalysisConfig, Ar1Estimate, BetaBenchmark, BetaEstimate, Observations, PriceSeries, ReportInputs, ReturnSeries,
    ReturnStats, RunConfig, SyntheticWalk, TrendFit,
};
use crate::error::{AppError, ErrorKind, Stage};
use crate::io::load_price_series;
use crate::report::classify;

/// A separate market series for the beta.
#[derive(Debug, Clone, Copy)]
pub struct Benchmark<'a> {
    pub label: &'a str,
    pub prices: &'a PriceSeries,
}

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub prices: PriceSeries,
    pub returns: ReturnSeries,
    pub return_stats: ReturnStats,
    pub walk: SyntheticWalk,
    pub ar1: Ar1Estimate,
    pub trend: TrendFit,
    pub beta: BetaEstimate,
    pub inputs: ReportInputs,
    pub observations: Observations,
}

/// Load the configured file(s) and run the analysis.
pub fn run_from_config(config: &RunConfig) -> Result<RunOutput, AppError> {
    let prices = load_price_series(&config.csv_path)?;

    let benchmark_prices = match &config.benchmark_path {
        Some(path) => Some((path.display().to_string(), load_price_series(path)?)),
        None => None,
    };
    let benchmark = benchmark_prices.as_ref().map(|(label, prices)| Benchmark {
        label: label.as_str(),
        prices,
    });

    run_analysis(prices, benchmark, &config.analysis)
}

/// Run every check on an already-loaded price series.
///
/// Without a benchmark the beta compares the series with itself.
pub fn run_analysis(
    prices: PriceSeries,
    benchmark: Option<Benchmark<'_>>,
    config: &AnalysisConfig,
) -> Result<RunOutput, AppError> {
    if prices.len() < 2 {
        return Err(AppError::new(
            ErrorKind::InsufficientData,
            Stage::Returns,
            format!("Need at least 2 prices, got {}.", prices.len()),
        ));
    }

    let returns = compute_returns(&prices)?;
    let return_stats = summarize_returns(&returns)?;
    log::debug!("mean return {:.6}, std {:.6}", return_stats.mean, return_stats.std);

    let walk = simulate_random_walk(prices.len(), config.walk_seed);

    let ar1 = estimate_ar1(&returns.values)?;
    log::debug!("AR(1) b={:.6} a={:.6} over {} pairs", ar1.coefficient, ar1.intercept, ar1.n_pairs);

    let closes = prices.closes();
    let trend = fit_trend(&closes)?;
    log::debug!("trend slope={:.6} intercept={:.6}", trend.slope, trend.intercept);

    let beta = match benchmark {
        Some(b) => benchmark_beta(&prices, b.prices, b.label)?,
        None => self_beta(&returns.values)?,
    };
    if beta.benchmark == BetaBenchmark::SelfReference {
        log::warn!("no benchmark given; beta compares the series with itself and is 1.0 by construction");
    }

    let (current_price, trend_price) = match (closes.last(), trend.last_value()) {
        (Some(&c), Some(t)) => (c, t),
        _ => {
            return Err(AppError::new(
                ErrorKind::InsufficientData,
                Stage::Trend,
                "Empty trend line.",
            ));
        }
    };

    let inputs = ReportInputs {
        mean_return: return_stats.mean,
        ar1_coefficient: ar1.coefficient,
        slope: trend.slope,
        beta: beta.beta,
        current_price,
        trend_price,
    };
    let observations = classify(&inputs);

    Ok(RunOutput {
        prices,
        returns,
        return_stats,
        walk,
        ar1,
        trend,
        beta,
        inputs,
        observations,
    })
}
