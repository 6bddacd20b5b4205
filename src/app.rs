//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the analysis pipeline
//! - prints the report and plots
//! - writes optional SVG charts

use clap::Parser;

use crate::cli::Cli;
use crate::domain::{AnalysisConfig, OutputFormat, RunConfig};
use crate::error::{AppError, ErrorKind, Stage};

pub mod pipeline;

/// Entry point for the `index-walk` binary.
pub fn run() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = run_config_from_args(&cli);
    log::info!("analysing {}", config.csv_path.display());

    let run = pipeline::run_from_config(&config)?;

    match config.format {
        OutputFormat::Text => println!("{}", crate::report::format_run_summary(&run)),
        OutputFormat::Json => {
            let summary = crate::report::summarize(&run);
            let json = serde_json::to_string_pretty(&summary).map_err(|e| {
                AppError::new(ErrorKind::Io, Stage::Output, format!("Failed to serialize summary: {e}"))
            })?;
            println!("{json}");
        }
    }

    if config.plot && config.format == OutputFormat::Text {
        println!(
            "{}",
            crate::plot::render_walk_plot(&run.walk, config.plot_width, config.plot_height)
        );
        println!(
            "{}",
            crate::plot::render_trend_plot(&run.prices, &run.trend, config.plot_width, config.plot_height)
        );
    }

    if let Some(dir) = &config.chart_dir {
        let paths = crate::plot::write_charts(dir, &run.walk, &run.prices, &run.trend)?;
        log::info!("saved {} charts to {}", paths.len(), dir.display());
    }

    Ok(())
}

pub fn run_config_from_args(cli: &Cli) -> RunConfig {
    RunConfig {
        csv_path: cli.csv.clone(),
        benchmark_path: cli.benchmark.clone(),
        analysis: AnalysisConfig { walk_seed: cli.seed },
        format: cli.format,
        plot: !cli.no_plot,
        plot_width: cli.width,
        plot_height: cli.height,
        chart_dir: cli.chart_dir.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_plot_flag_disables_plots() {
        let cli = Cli::try_parse_from(["index-walk", "a.csv", "--no-plot", "--seed", "3"]).unwrap();
        let config = run_config_from_args(&cli);
        assert!(!config.plot);
        assert_eq!(config.analysis.walk_seed, 3);
        assert_eq!(config.csv_path, std::path::PathBuf::from("a.csv"));
    }
}
