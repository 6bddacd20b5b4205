//! Simple daily returns.

use crate::domain::{PriceSeries, ReturnSeries, ReturnStats};
use crate::error::{AppError, ErrorKind, Stage};
use crate::math::{mean, std_dev};

/// `r[i] = (p[i+1] - p[i]) / p[i]`.
///
/// The first close has no predecessor and produces no return. A zero close
/// makes the following return undefined and is reported, not skipped.
pub fn pct_change(closes: &[f64]) -> Result<Vec<f64>, AppError> {
    if closes.len() < 2 {
        return Err(AppError::new(
            ErrorKind::InsufficientData,
            Stage::Returns,
            format!("Need at least 2 prices to compute returns, got {}.", closes.len()),
        ));
    }

    let mut out = Vec::with_capacity(closes.len() - 1);
    for (i, w) in closes.windows(2).enumerate() {
        let (prev, next) = (w[0], w[1]);
        if prev == 0.0 {
            return Err(AppError::new(
                ErrorKind::NumericDegeneracy,
                Stage::Returns,
                format!("Price at index {i} is zero; the next return is undefined."),
            ));
        }
        let r = (next - prev) / prev;
        if !r.is_finite() {
            return Err(AppError::new(
                ErrorKind::NumericDegeneracy,
                Stage::Returns,
                format!("Non-finite return at index {i}."),
            ));
        }
        out.push(r);
    }
    Ok(out)
}

pub fn compute_returns(prices: &PriceSeries) -> Result<ReturnSeries, AppError> {
    let values = pct_change(&prices.closes())?;
    let dates = prices.points().iter().skip(1).map(|p| p.date).collect();
    Ok(ReturnSeries { dates, values })
}

/// Mean and sample standard deviation.
pub fn summarize_returns(returns: &ReturnSeries) -> Result<ReturnStats, AppError> {
    let mean = mean(&returns.values).ok_or_else(|| {
        AppError::new(ErrorKind::InsufficientData, Stage::Returns, "Return series is empty.")
    })?;
    // A single return has no sample deviation.
    let std = std_dev(&returns.values).unwrap_or(f64::NAN);
    Ok(ReturnStats { mean, std })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PricePoint;
    use chrono::NaiveDate;

    #[test]
    fn returns_round_trip_to_prices() {
        let closes = [100.0, 102.0, 101.0, 105.0, 107.0, 99.5, 120.25];
        let r = pct_change(&closes).unwrap();
        assert_eq!(r.len(), closes.len() - 1);
        for i in 0..r.len() {
            let rebuilt = closes[i] * (1.0 + r[i]);
            assert!((rebuilt - closes[i + 1]).abs() < 1e-9, "index {i}: {rebuilt}");
        }
    }

    #[test]
    fn zero_price_is_reported() {
        let err = pct_change(&[10.0, 0.0, 5.0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NumericDegeneracy);
        assert_eq!(err.stage(), Stage::Returns);
    }

    #[test]
    fn single_price_is_insufficient() {
        let err = pct_change(&[10.0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientData);
    }

    #[test]
    fn returns_are_dated_by_the_later_day() {
        let d = |day| NaiveDate::from_ymd_opt(2024, 11, day).unwrap();
        let prices = PriceSeries::new(vec![
            PricePoint { date: d(25), close: 100.0 },
            PricePoint { date: d(26), close: 110.0 },
        ])
        .unwrap();
        let r = compute_returns(&prices).unwrap();
        assert_eq!(r.dates, vec![d(26)]);
        assert!((r.values[0] - 0.1).abs() < 1e-12);
    }

    #[test]
    fn summary_uses_sample_std() {
        let r = ReturnSeries {
            dates: Vec::new(),
            values: vec![0.01, -0.01, 0.03, -0.03],
        };
        let stats = summarize_returns(&r).unwrap();
        assert!(stats.mean.abs() < 1e-15);
        // Σx² = 0.002, n - 1 = 3.
        assert!((stats.std - (0.002_f64 / 3.0).sqrt()).abs() < 1e-12);
    }
}
