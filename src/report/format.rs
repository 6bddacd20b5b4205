//! Terminal formatting for a finished run.
//!
//! Formatting lives here so the analysis code stays free of presentation and
//! output changes stay localized.

use crate::app::pipeline::RunOutput;
use crate::domain::BetaBenchmark;

use super::AnalysisSummary;

/// Format the full text report: header, per-check sections, then verdicts.
pub fn format_run_summary(run: &RunOutput) -> String {
    let mut out = String::new();

    out.push_str("=== index-walk - Basic Market Analysis ===\n");
    if let (Some(first), Some(last)) = (run.prices.first(), run.prices.last()) {
        out.push_str(&format!(
            "Prices: n={} | {} to {} | close=[{:.2} .. {:.2}]\n",
            run.prices.len(),
            first.date,
            last.date,
            first.close,
            last.close
        ));
    }

    out.push_str("\n--- RANDOM WALK CHECK ---\n");
    out.push_str(&format!("Average daily return: {:.6}\n", run.return_stats.mean));
    out.push_str(&format!("Daily return std dev: {:.6}\n", run.return_stats.std));
    out.push_str(&format!(
        "Drunk man walk: n={} seed={} final position={}\n",
        run.walk.positions.len(),
        run.walk.seed,
        run.walk.positions.last().copied().unwrap_or(0)
    ));

    out.push_str("\n--- AR(1) BASIC ---\n");
    out.push_str(&format!("AR(1) coefficient (b): {:.6}\n", run.ar1.coefficient));
    out.push_str(&format!("AR(1) intercept (a): {:.6}\n", run.ar1.intercept));

    out.push_str("\n--- PRICE TREND ---\n");
    out.push_str(&format!(
        "Slope: {:.4}/day | Intercept: {:.2} | R^2={:.4} RMSE={:.2}\n",
        run.trend.slope, run.trend.intercept, run.trend.quality.r_squared, run.trend.quality.rmse
    ));
    out.push_str(&format!(
        "Current price: {:.2} | Trend price: {:.2}\n",
        run.inputs.current_price, run.inputs.trend_price
    ));

    out.push_str("\n--- BETA (RISK) ---\n");
    out.push_str(&format!("Beta: {:.4} ({})\n", run.beta.beta, benchmark_label(&run.beta.benchmark)));

    out.push_str("\n========== FINAL OBSERVATIONS ==========\n");
    for line in run.observations.verdicts() {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str("========================================\n");

    out
}

/// Collect the scalar results into a serializable summary.
pub fn summarize(run: &RunOutput) -> AnalysisSummary {
    AnalysisSummary {
        n_prices: run.prices.len(),
        first_date: run.prices.first().map(|p| p.date),
        last_date: run.prices.last().map(|p| p.date),
        returns: run.return_stats,
        walk_seed: run.walk.seed,
        walk_final_position: run.walk.positions.last().copied(),
        ar1: run.ar1,
        trend_slope: run.trend.slope,
        trend_intercept: run.trend.intercept,
        trend_quality: run.trend.quality,
        beta: run.beta.clone(),
        inputs: run.inputs,
        observations: run.observations,
    }
}

fn benchmark_label(benchmark: &BetaBenchmark) -> String {
    match benchmark {
        BetaBenchmark::SelfReference => "market proxy: the series itself".to_string(),
        BetaBenchmark::External { label, n_common_days } => {
            format!("market proxy: {label}, {n_common_days} common days")
        }
    }
}
