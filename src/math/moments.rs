//! Sample moments.
//!
//! All second moments use the **sample** convention (divide by `n - 1`).
//! Ratios such as the AR(1) coefficient and beta divide one second moment by
//! another, so the convention cancels as long as both sides use the same one.
//!
//! `variance(x)` is computed as `covariance(x, x)`, which makes
//! `covariance(x, x) / variance(x)` exactly `1.0` rather than merely close.

/// Delta degrees of freedom for every second moment in this crate.
pub const SAMPLE_DDOF: usize = 1;

pub fn mean(x: &[f64]) -> Option<f64> {
    if x.is_empty() {
        return None;
    }
    Some(x.iter().sum::<f64>() / x.len() as f64)
}

/// Sample covariance. `None` on length mismatch or fewer than two points.
pub fn covariance(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.len() <= SAMPLE_DDOF {
        return None;
    }
    let mx = mean(x)?;
    let my = mean(y)?;
    let sum: f64 = x.iter().zip(y).map(|(a, b)| (a - mx) * (b - my)).sum();
    Some(sum / (x.len() - SAMPLE_DDOF) as f64)
}

pub fn variance(x: &[f64]) -> Option<f64> {
    covariance(x, x)
}

pub fn std_dev(x: &[f64]) -> Option<f64> {
    variance(x).map(f64::sqrt)
}

/// A standard deviation at or below this fraction of the largest magnitude is
/// rounding noise, not spread.
pub const DEGENERATE_REL_TOL: f64 = 1e-12;

/// Sample variance, or `None` when `x` has no usable spread.
///
/// Constant data rarely yields an exact `0.0`: `[0.1; 4]` has a mean of
/// `0.10000000000000002`, and returns of a constant-growth price series wobble
/// in the last few bits. Both count as zero variance.
pub fn nondegenerate_variance(x: &[f64]) -> Option<f64> {
    let var = variance(x)?;
    let scale = x.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
    let floor = DEGENERATE_REL_TOL * scale;
    if !var.is_finite() || var <= floor * floor {
        return None;
    }
    Some(var)
}
