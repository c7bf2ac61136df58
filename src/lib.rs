pub mod aggregator;
pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod loader;
pub mod model;
pub mod reporter;

pub use aggregator::aggregate;
pub use analyzer::analyze_all;
pub use cli::{Cli, OutputFormat};
pub use config::{Config, SourceSpec};
pub use error::{DashboardError, Result};
pub use model::{
    Analyses, Dashboard, NoDataPolicy, OverallLevel, OverallStatus, ToolStatus,
};
pub use reporter::{
    html::HtmlReporter, json::JsonReporter, terminal::TerminalReporter, Reporter,
};
