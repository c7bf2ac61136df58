//! Pipeline orchestration: locate, analyze, aggregate, render, write.

use crate::aggregator::aggregate;
use crate::analyzer::analyze_all;
use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::model::Dashboard;
use crate::reporter::{
    html::HtmlReporter, json::JsonReporter, terminal::TerminalReporter, Reporter,
};
use std::fs;
use std::process::ExitCode;
use tracing::{debug, info};

/// Compute the full dashboard for a CLI invocation.
pub fn build_dashboard(cli: &Cli, config: &Config) -> Dashboard {
    let analyses = analyze_all(&cli.reports_dir, config);
    let overall = aggregate(&analyses, cli.no_data_policy);
    debug!(level = %overall.level, "Aggregated overall status");
    Dashboard::new(analyses, overall)
}

/// Run the whole pipeline. Per-tool data absence is never fatal; only a bad
/// config file or an unwritable output path exits non-zero.
pub fn run(cli: &Cli) -> ExitCode {
    let config = match &cli.config {
        Some(path) => match Config::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::from(2);
            }
        },
        None => Config::default(),
    };

    let dashboard = build_dashboard(cli, &config);

    let output = match cli.format {
        OutputFormat::Html => HtmlReporter::new().report(&dashboard),
        OutputFormat::Json => JsonReporter::new().report(&dashboard),
    };

    if let Err(e) = fs::write(&cli.output, &output) {
        eprintln!("Failed to write report to {}: {}", cli.output.display(), e);
        return ExitCode::from(2);
    }
    info!(path = %cli.output.display(), "Dashboard written");
    println!("Dashboard generated: {}", cli.output.display());

    if !cli.quiet {
        let mut reporter = TerminalReporter::new();
        if cli.ascii {
            reporter = reporter.with_ascii(true);
        }
        println!();
        print!("{}", reporter.report(&dashboard));
    }

    ExitCode::SUCCESS
}
