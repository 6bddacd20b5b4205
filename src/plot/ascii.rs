//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Series are drawn in order and never overwrite cells already drawn, so the
//! first series stays on top.

use crate::domain::{PriceSeries, SyntheticWalk, TrendFit};

/// One line on the chart.
#[derive(Debug, Clone, Copy)]
pub struct AsciiSeries<'a> {
    pub glyph: char,
    pub points: &'a [(f64, f64)],
}

/// The random walk over its step index.
pub fn render_walk_plot(walk: &SyntheticWalk, width: usize, height: usize) -> String {
    let points: Vec<(f64, f64)> = walk
        .positions
        .iter()
        .enumerate()
        .map(|(i, &p)| (i as f64, p as f64))
        .collect();

    let mut out = render_line_chart(
        "Drunk Man Random Walk",
        &[AsciiSeries { glyph: '*', points: &points }],
        width,
        height,
    );
    out.push_str(&format!("Legend: * walk (seed {})\n", walk.seed));
    out
}

/// Closing prices with the fitted trend line, both over the day index.
pub fn render_trend_plot(prices: &PriceSeries, trend: &TrendFit, width: usize, height: usize) -> String {
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

    let mut out = render_line_chart(
        "Price Trend (Linear Regression)",
        &[
            AsciiSeries { glyph: '*', points: &actual },
            AsciiSeries { glyph: '-', points: &fitted },
        ],
        width,
        height,
    );
    if let (Some(first), Some(last)) = (prices.first(), prices.last()) {
        out.push_str(&format!("Days: {} .. {}\n", first.date, last.date));
    }
    out.push_str("Legend: * actual price  - trend line\n");
    out
}

/// Render any number of line series on a shared grid.
pub fn render_line_chart(title: &str, series: &[AsciiSeries<'_>], width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (x_min, x_max) = x_range(series).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = y_range(series).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];
    for s in series {
        draw_series(&mut grid, s.points, s.glyph, (x_min, x_max), (y_min, y_max));
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{title}: x=[{x_min:.0}, {x_max:.0}] | y=[{y_min:.2}, {y_max:.2}]\n"
    ));
    for row in grid {
        out.push_str(row.into_iter().collect::<String>().trim_end());
        out.push('\n');
    }
    out
}

fn x_range(series: &[AsciiSeries<'_>]) -> Option<(f64, f64)> {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    for &(x, _) in series.iter().flat_map(|s| s.points.iter()) {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
    }
    if min_x.is_finite() && max_x.is_finite() && max_x > min_x {
        Some((min_x, max_x))
    } else {
        None
    }
}

fn y_range(series: &[AsciiSeries<'_>]) -> Option<(f64, f64)> {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for &(_, y) in series.iter().flat_map(|s| s.points.iter()) {
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }
    if !(min_y.is_finite() && max_y.is_finite()) {
        return None;
    }
    if max_y > min_y {
        Some((min_y, max_y))
    } else {
        // Flat series: centre it.
        Some((min_y - 1.0, max_y + 1.0))
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_series(grid: &mut [Vec<char>], points: &[(f64, f64)], glyph: char, xr: (f64, f64), yr: (f64, f64)) {
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(x, y) in points {
        let cx = map_x(x, xr.0, xr.1, width);
        let cy = map_y(y, yr.0, yr.1, height);
        match prev {
            Some((x0, y0)) => draw_line(grid, x0, y0, cx, cy, glyph),
            None => draw_line(grid, cx, cy, cx, cy, glyph),
        }
        prev = Some((cx, cy));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_golden_snapshot_small() {
        let rising = [(0.0, 0.0), (9.0, 10.0)];
        let flat = [(0.0, 5.0), (9.0, 5.0)];
        let txt = render_line_chart(
            "Test",
            &[
                AsciiSeries { glyph: '*', points: &rising },
                AsciiSeries { glyph: '-', points: &flat },
            ],
            10,
            5,
        );
        let expected = concat!(
            "Test: x=[0, 9] | y=[-0.50, 10.50]\n",
            "        **\n",
            "      **\n",
            "----**----\n",
            "  **\n",
            "**\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn flat_series_is_drawn_mid_chart() {
        let flat = [(0.0, 3.0), (1.0, 3.0), (2.0, 3.0)];
        let txt = render_line_chart("Flat", &[AsciiSeries { glyph: '-', points: &flat }], 10, 5);
        let rows: Vec<&str> = txt.lines().skip(1).collect();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[2], "----------");
    }
}
