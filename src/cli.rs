use crate::model::NoDataPolicy;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "secdash",
    version,
    about = "Aggregates JSON/JSONL reports from eight security scanners into one dashboard",
    long_about = "secdash reads the JSON/JSONL output of secret, vulnerability, container, \
                  IaC, EOL, code-quality, antivirus, and chart-validation scanners from a \
                  reports directory and renders a single dashboard with an overall status."
)]
pub struct Cli {
    /// Root directory containing per-tool report subdirectories
    pub reports_dir: PathBuf,

    /// Output file for the rendered dashboard
    #[arg(default_value = "dynamic-security-dashboard.html")]
    pub output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// How tools with no data contribute to the overall status
    #[arg(long, value_enum, default_value_t = NoDataPolicy::Optimistic)]
    pub no_data_policy: NoDataPolicy,

    /// Per-tool directory/glob overrides (YAML or JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Suppress the console summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Force ASCII-only console output
    #[arg(long)]
    pub ascii: bool,
}
