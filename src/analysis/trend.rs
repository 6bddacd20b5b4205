//! Linear price trend.
//!
//! Closes are regressed on the day index `x = 0..n`, so the slope is in price
//! units per trading day.

use crate::domain::{FitQuality, TrendFit};
use crate::error::{AppError, ErrorKind, Stage};
use crate::math::{fit_line, mean};

pub fn fit_trend(closes: &[f64]) -> Result<TrendFit, AppError> {
    if closes.len() < 2 {
        return Err(AppError::new(
            ErrorKind::InsufficientData,
            Stage::Trend,
            format!("Need at least 2 prices to fit a trend, got {}.", closes.len()),
        ));
    }

    let x: Vec<f64> = (0..closes.len()).map(|i| i as f64).collect();
    let (slope, intercept) = fit_line(&x, closes).ok_or_else(|| {
        AppError::new(
            ErrorKind::NumericDegeneracy,
            Stage::Trend,
            "Least-squares solve for the trend line failed.",
        )
    })?;

    let fitted: Vec<f64> = x.iter().map(|&xi| slope * xi + intercept).collect();
    let quality = fit_quality(closes, &fitted);

    Ok(TrendFit {
        slope,
        intercept,
        fitted,
        quality,
    })
}

fn fit_quality(y: &[f64], fitted: &[f64]) -> FitQuality {
    let n = y.len();
    let sse: f64 = y.iter().zip(fitted).map(|(a, b)| (a - b) * (a - b)).sum();
    let rmse = (sse / n as f64).sqrt();

    let y_mean = mean(y).unwrap_or(0.0);
    let sst: f64 = y.iter().map(|v| (v - y_mean) * (v - y_mean)).sum();
    // A flat series is explained perfectly by a flat line.
    let r_squared = if sst > 0.0 { 1.0 - sse / sst } else { 1.0 };

    FitQuality {
        sse,
        rmse,
        r_squared,
        n,
    }
}
