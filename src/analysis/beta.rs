//! Covariance beta.
//!
//! `beta = Cov(asset, market) / Var(market)`. The pipeline's default passes the
//! same return series in both slots, which always gives exactly `1.0`; callers
//! with a real benchmark pass its returns as `market`.

use crate::domain::{BetaBenchmark, BetaEstimate, PriceSeries};
use crate::error::{AppError, ErrorKind, Stage};
use crate::math::{covariance, nondegenerate_variance};

use super::returns::pct_change;

pub fn beta(asset: &[f64], market: &[f64]) -> Result<f64, AppError> {
    if asset.len() != market.len() {
        return Err(AppError::new(
            ErrorKind::LengthMismatch,
            Stage::Beta,
            format!(
                "Asset and market return series differ in length ({} vs {}).",
                asset.len(),
                market.len()
            ),
        ));
    }
    if market.len() < 2 {
        return Err(AppError::new(
            ErrorKind::InsufficientData,
            Stage::Beta,
            format!("Need at least 2 paired returns for beta, got {}.", market.len()),
        ));
    }

    let var_market = nondegenerate_variance(market).ok_or_else(|| {
        AppError::new(ErrorKind::NumericDegeneracy, Stage::Beta, "Market returns have zero variance.")
    })?;
    let cov = covariance(asset, market).ok_or_else(|| {
        AppError::new(ErrorKind::NumericDegeneracy, Stage::Beta, "Covariance is undefined.")
    })?;

    Ok(cov / var_market)
}

/// Beta of a return series against itself.
pub fn self_beta(returns: &[f64]) -> Result<BetaEstimate, AppError> {
    Ok(BetaEstimate {
        beta: beta(returns, returns)?,
        benchmark: BetaBenchmark::SelfReference,
    })
}

/// Beta against a separate benchmark, using only the dates both series share.
pub fn benchmark_beta(
    asset: &PriceSeries,
    benchmark: &PriceSeries,
    label: impl Into<String>,
) -> Result<BetaEstimate, AppError> {
    let (asset, benchmark) = asset.align(benchmark);
    if asset.len() < 3 {
        return Err(AppError::new(
            ErrorKind::InsufficientData,
            Stage::Beta,
            format!(
                "Asset and benchmark share {} dates; need at least 3 for beta.",
                asset.len()
            ),
        ));
    }

    let asset_returns = pct_change(&asset.closes()).map_err(restage)?;
    let market_returns = pct_change(&benchmark.closes()).map_err(restage)?;

    Ok(BetaEstimate {
        beta: beta(&asset_returns, &market_returns)?,
        benchmark: BetaBenchmark::External {
            label: label.into(),
            n_common_days: asset.len(),
        },
    })
}

fn restage(err: AppError) -> AppError {
    AppError::new(err.kind(), Stage::Beta, err.message())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PricePoint;
    use chrono::NaiveDate;

    const RETURNS: [f64; 6] = [0.02, -0.0098, 0.0396, 0.019, -0.004, 0.0071];

    #[test]
    fn self_comparison_is_exactly_one() {
        let est = self_beta(&RETURNS).unwrap();
        assert_eq!(est.beta, 1.0);
        assert_eq!(est.benchmark, BetaBenchmark::SelfReference);
    }

    #[test]
    fn doubled_asset_gives_two() {
        let asset: Vec<f64> = RETURNS.iter().map(|r| 2.0 * r).collect();
        let b = beta(&asset, &RETURNS).unwrap();
        assert!((b - 2.0).abs() < 1e-12, "beta = {b}");
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = beta(&RETURNS[..3], &RETURNS).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LengthMismatch);
    }

    #[test]
    fn flat_market_is_degenerate() {
        let err = beta(&RETURNS[..3], &[0.01, 0.01, 0.01]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NumericDegeneracy);
        assert_eq!(err.stage(), Stage::Beta);
    }

    #[test]
    fn flat_market_with_inexact_mean_is_degenerate() {
        let err = beta(&[0.1; 3], &[0.1; 3]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NumericDegeneracy);
        let err = self_beta(&[0.1; 5]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NumericDegeneracy);
    }

    #[test]
    fn too_few_shared_dates_are_insufficient() {
        let d = |day| NaiveDate::from_ymd_opt(2025, 3, day).unwrap();
        let series = |pts: &[(u32, f64)]| {
            PriceSeries::new(pts.iter().map(|&(day, close)| PricePoint { date: d(day), close }).collect())
                .unwrap()
        };
        let asset = series(&[(3, 100.0), (4, 101.0), (5, 99.0), (6, 102.0)]);
        let market = series(&[(4, 50.0), (10, 51.0), (11, 52.0), (12, 50.5)]);

        let err = benchmark_beta(&asset, &market, "bench").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientData);
        assert_eq!(err.stage(), Stage::Beta);
        assert!(err.message().contains("share 1 dates"), "{err}");
    }

    #[test]
    fn benchmark_is_aligned_on_common_dates() {
        let d = |day| NaiveDate::from_ymd_opt(2025, 3, day).unwrap();
        let series = |pts: &[(u32, f64)]| {
            PriceSeries::new(pts.iter().map(|&(day, close)| PricePoint { date: d(day), close }).collect())
                .unwrap()
        };
        // The asset moves twice as much as the benchmark on shared days.
        let asset = series(&[(3, 100.0), (4, 104.0), (5, 101.92), (6, 105.9968), (9, 50.0)]);
        let market = series(&[(2, 7.0), (3, 100.0), (4, 102.0), (5, 100.98), (6, 102.9996)]);

        let est = benchmark_beta(&asset, &market, "bench").unwrap();
        assert!((est.beta - 2.0).abs() < 1e-9, "beta = {}", est.beta);
        assert_eq!(
            est.benchmark,
            BetaBenchmark::External { label: "bench".to_string(), n_common_days: 4 }
        );
    }
}
