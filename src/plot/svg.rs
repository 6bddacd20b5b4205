//! SVG chart files, rendered with Plotters.
//!
//! The terminal charts are coarse; these are the same two charts at full
//! resolution for viewing in a browser.

use std::path::{Path, PathBuf};

use plotters::prelude::*;

use crate::domain::{PriceSeries, SyntheticWalk, TrendFit};
use crate::error::{AppError, ErrorKind, Stage};

const CHART_SIZE: (u32, u32) = (1000, 400);

pub const WALK_FILE: &str = "random_walk.svg";
pub const TREND_FILE: &str = "price_trend.svg";

/// Write both charts into `dir` and return their paths.
pub fn write_charts(
    dir: &Path,
    walk: &SyntheticWalk,
    prices: &PriceSeries,
    trend: &TrendFit,
) -> Result<Vec<PathBuf>, AppError> {
    std::fs::create_dir_all(dir).map_err(|e| {
        output_error(format!("Failed to create chart directory '{}': {e}", dir.display()))
    })?;

    let walk_path = dir.join(WALK_FILE);
    write_walk_svg(&walk_path, walk)?;
    log::info!("wrote {}", walk_path.display());

    let trend_path = dir.join(TREND_FILE);
    write_trend_svg(&trend_path, prices, trend)?;
    log::info!("wrote {}", trend_path.display());

    Ok(vec![walk_path, trend_path])
}

pub fn write_walk_svg(path: &Path, walk: &SyntheticWalk) -> Result<(), AppError> {
    let points: Vec<(f64, f64)> = walk
        .positions
        .iter()
        .enumerate()
        .map(|(i, &p)| (i as f64, p as f64))
        .collect();

    draw_lines(
        path,
        "Drunk Man Random Walk",
        "step",
        "position",
        &[("walk", points.as_slice(), RGBColor(31, 119, 180))],
    )
}

pub fn write_trend_svg(path: &Path, prices: &PriceSeries, trend: &TrendFit) -> Result<(), AppError> {
    let actual: Vec<(f64, f64)> = prices
        .points()
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.close))
        .collect();
    let fitted: Vec<(f64, f64)> = trend
        .fitted
        .iter()
        .enumerate()
        .map(|(i, &y)| (i as f64, y))
        .collect();

    draw_lines(
        path,
        "Price Trend (Linear Regression)",
        "trading day",
        "close",
        &[
            ("Actual Price", actual.as_slice(), RGBColor(31, 119, 180)),
            ("Trend Line", fitted.as_slice(), RGBColor(255, 127, 14)),
        ],
    )
}

fn draw_lines(
    path: &Path,
    title: &str,
    x_label: &str,
    y_label: &str,
    series: &[(&str, &[(f64, f64)], RGBColor)],
) -> Result<(), AppError> {
    let (x0, x1) = bounds(series.iter().flat_map(|(_, pts, _)| pts.iter().map(|p| p.0)));
    let (y0, y1) = bounds(series.iter().flat_map(|(_, pts, _)| pts.iter().map(|p| p.1)));

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    let result = (|| -> Result<(), Box<dyn std::error::Error>> {
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 20))
            .margin(10)
            .x_label_area_size(30)
            .y_label_area_size(60)
            .build_cartesian_2d(x0..x1, y0..y1)?;

        chart
            .configure_mesh()
            .x_desc(x_label)
            .y_desc(y_label)
            .draw()?;

        for &(label, points, color) in series {
            chart
                .draw_series(LineSeries::new(points.iter().copied(), &color))?
                .label(label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        }

        if series.len() > 1 {
            chart
                .configure_series_labels()
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()?;
        }

        root.present()?;
        Ok(())
    })();

    result.map_err(|e| output_error(format!("Failed to render '{}': {e}", path.display())))
}

/// Padded `(min, max)`; never empty so Plotters can always build the axes.
fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in values.filter(|v| v.is_finite()) {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if !(lo.is_finite() && hi.is_finite()) {
        return (0.0, 1.0);
    }
    if hi <= lo {
        return (lo - 1.0, hi + 1.0);
    }
    let pad = (hi - lo) * 0.05;
    (lo - pad, hi + pad)
}

fn output_error(message: String) -> AppError {
    AppError::new(ErrorKind::Io, Stage::Output, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{fit_trend, simulate_random_walk};
    use crate::domain::PricePoint;
    use chrono::NaiveDate;

    #[test]
    fn bounds_pad_and_handle_flat_input() {
        assert_eq!(bounds([2.0, 2.0].into_iter()), (1.0, 3.0));
        assert_eq!(bounds(std::iter::empty()), (0.0, 1.0));
        let (lo, hi) = bounds([0.0, 10.0].into_iter());
        assert!((lo + 0.5).abs() < 1e-12 && (hi - 10.5).abs() < 1e-12);
    }

    #[test]
    fn writes_both_chart_files() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let prices = PriceSeries::new(
            [100.0, 102.0, 101.0, 105.0, 107.0]
                .iter()
                .enumerate()
                .map(|(i, &close)| PricePoint {
                    date: start + chrono::Duration::days(i as i64),
                    close,
                })
                .collect(),
        )
        .unwrap();
        let trend = fit_trend(&prices.closes()).unwrap();
        let walk = simulate_random_walk(prices.len(), 42);

        let dir = tempfile::tempdir().unwrap();
        let paths = write_charts(dir.path(), &walk, &prices, &trend).unwrap();

        assert_eq!(paths.len(), 2);
        for path in paths {
            let svg = std::fs::read_to_string(&path).unwrap();
            assert!(svg.contains("<svg"), "{}", path.display());
        }
    }
}
