//! Per-tool normalizers.
//!
//! Each analyzer is a pure function of the files under its own subdirectory:
//! it enumerates matching files, loads each one through the safe loader,
//! folds valid entries into counters, and classifies the result. Analyzers
//! never read each other's output and share no state.

pub mod antivirus;
pub mod chart;
pub mod container;
pub mod eol;
pub mod iac;
pub mod quality;
pub mod secrets;
pub mod vulnerability;

use crate::config::Config;
use crate::model::Analyses;
use std::path::Path;
use tracing::{debug, info};

/// Run all eight analyzers over the reports root.
pub fn analyze_all(root: &Path, config: &Config) -> Analyses {
    info!(root = %root.display(), "Analyzing scan reports");

    let analyses = Analyses {
        quality: quality::analyze(root, config),
        secrets: secrets::analyze(root, config),
        antivirus: antivirus::analyze(root, config),
        chart: chart::analyze(root, config),
        iac: iac::analyze(root, config),
        container: container::analyze(root, config),
        vulnerability: vulnerability::analyze(root, config),
        eol: eol::analyze(root, config),
    };

    debug!(
        secrets = analyses.secrets.total,
        vulnerabilities = analyses.vulnerability.total,
        container_vulnerabilities = analyses.container.total,
        iac_pass_rate = analyses.iac.pass_rate,
        eol_packages = analyses.eol.eol_packages,
        "Analysis complete"
    );

    analyses
}
