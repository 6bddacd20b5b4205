//! First-order autoregression on returns.
//!
//! ```text
//! r_t = a + b * r_{t-1}
//! ```
//!
//! `b` is estimated as `Cov(r_t, r_{t-1}) / Var(r_{t-1})`, where `r_t` is
//! `returns[1..]` and `r_{t-1}` is `returns[..n-1]`, aligned by day.

use crate::domain::Ar1Estimate;
use crate::error::{AppError, ErrorKind, Stage};
use crate::math::{covariance, mean, nondegenerate_variance};

/// Minimum number of returns: two lag pairs are needed for a sample covariance.
pub const MIN_AR1_RETURNS: usize = 3;

pub fn estimate_ar1(returns: &[f64]) -> Result<Ar1Estimate, AppError> {
    if returns.len() < MIN_AR1_RETURNS {
        return Err(AppError::new(
            ErrorKind::InsufficientData,
            Stage::Ar1,
            format!(
                "Need at least {MIN_AR1_RETURNS} returns for a lag-1 regression, got {}.",
                returns.len()
            ),
        ));
    }

    let now = &returns[1..];
    let lag = &returns[..returns.len() - 1];

    let var_lag = nondegenerate_variance(lag)
        .ok_or_else(|| degenerate("lagged returns have zero variance (constant returns)"))?;
    let cov = covariance(now, lag).ok_or_else(|| degenerate("lag covariance is undefined"))?;

    let coefficient = cov / var_lag;
    if !coefficient.is_finite() {
        return Err(degenerate("coefficient is not finite"));
    }

    let intercept = match (mean(now), mean(lag)) {
        (Some(m_now), Some(m_lag)) => m_now - coefficient * m_lag,
        _ => return Err(degenerate("lagged means are undefined")),
    };

    Ok(Ar1Estimate {
        coefficient,
        intercept,
        n_pairs: now.len(),
    })
}

fn degenerate(msg: &str) -> AppError {
    AppError::new(ErrorKind::NumericDegeneracy, Stage::Ar1, msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;
    use rand::rngs::StdRng;

    #[test]
    fn geometric_decay_recovers_half() {
        let mut r = vec![0.04];
        for i in 1..12 {
            r.push(0.5 * r[i - 1]);
        }
        let est = estimate_ar1(&r).unwrap();
        assert!((est.coefficient - 0.5).abs() < 1e-9, "b = {}", est.coefficient);
        assert!(est.intercept.abs() < 1e-12);
        assert_eq!(est.n_pairs, 11);
    }

    #[test]
    fn noisy_process_recovers_coefficient() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut r = vec![0.0];
        for i in 1..20_000 {
            let noise: f64 = rng.gen_range(-0.01..0.01);
            r.push(0.5 * r[i - 1] + noise);
        }
        let est = estimate_ar1(&r).unwrap();
        assert!((est.coefficient - 0.5).abs() < 0.05, "b = {}", est.coefficient);
    }

    #[test]
    fn constant_returns_are_degenerate() {
        let err = estimate_ar1(&[0.01, 0.01, 0.01, 0.01]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NumericDegeneracy);
        assert_eq!(err.stage(), Stage::Ar1);
    }

    #[test]
    fn constant_returns_with_inexact_mean_are_degenerate() {
        let err = estimate_ar1(&[0.1; 4]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NumericDegeneracy);
    }

    #[test]
    fn constant_growth_prices_are_degenerate() {
        let closes: Vec<f64> = (0..10).map(|i| 100.0 * 1.1_f64.powi(i)).collect();
        let returns = crate::analysis::pct_change(&closes).unwrap();
        let err = estimate_ar1(&returns).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NumericDegeneracy);
        assert_eq!(err.stage(), Stage::Ar1);
    }

    #[test]
    fn two_returns_are_insufficient() {
        let err = estimate_ar1(&[0.01, 0.02]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientData);
    }
}
