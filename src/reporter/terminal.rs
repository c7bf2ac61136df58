//! Console summary: a human-readable echo of the dashboard data.

use crate::model::{Dashboard, OverallLevel};
use crate::reporter::{fmt_count, fmt_coverage, Reporter};
use colored::Colorize;

pub struct TerminalReporter {
    ascii: bool,
}

impl TerminalReporter {
    pub fn new() -> Self {
        Self {
            ascii: !stdout_supports_unicode(),
        }
    }

    pub fn with_ascii(mut self, ascii: bool) -> Self {
        self.ascii = ascii;
        self
    }

    fn header(&self) -> &'static str {
        if self.ascii {
            "[Security Analysis Summary]"
        } else {
            "\u{1F4CA} Security Analysis Summary:"
        }
    }

    fn overall_label(&self) -> &'static str {
        if self.ascii {
            "[Overall Status]:"
        } else {
            "\u{1F3AF} Overall Status:"
        }
    }

    fn valid_mark(&self, valid: Option<bool>) -> String {
        match valid {
            Some(true) => if self.ascii { "yes" } else { "\u{2713}" }.to_string(),
            Some(false) => if self.ascii { "no" } else { "\u{2717}" }.to_string(),
            None => "N/A".to_string(),
        }
    }

    fn availability(has_data: bool) -> &'static str {
        if has_data {
            "Data Available"
        } else {
            "No Data"
        }
    }

    fn level_label(&self, level: OverallLevel) -> colored::ColoredString {
        match level {
            OverallLevel::Good => level.as_str().green().bold(),
            OverallLevel::Warning => level.as_str().yellow().bold(),
            OverallLevel::Critical => level.as_str().red().bold(),
        }
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, dashboard: &Dashboard) -> String {
        let tools = &dashboard.tools;
        let mut output = String::new();

        output.push_str(&format!("{}\n", self.header()));

        let tests_display = tools
            .quality
            .passed_tests
            .or(tools.quality.tests)
            .map_or_else(|| "N/A".to_string(), |t| t.to_string());
        output.push_str(&format!(
            "   SonarQube: {} coverage, {} tests ({})\n",
            fmt_coverage(tools.quality.coverage),
            tests_display,
            Self::availability(tools.quality.has_data),
        ));

        output.push_str(&format!(
            "   TruffleHog: {} secrets ({} verified)\n",
            tools.secrets.total, tools.secrets.verified,
        ));

        output.push_str(&format!(
            "   ClamAV: {} threats, {} files ({})\n",
            fmt_count(tools.antivirus.threats),
            fmt_count(tools.antivirus.files_scanned),
            Self::availability(tools.antivirus.has_data),
        ));

        output.push_str(&format!(
            "   Helm: {} resources, {} valid ({})\n",
            fmt_count(tools.chart.resources),
            self.valid_mark(tools.chart.valid),
            Self::availability(tools.chart.has_data),
        ));

        output.push_str(&format!(
            "   Checkov: {}% pass rate ({} failed)\n",
            tools.iac.pass_rate, tools.iac.failed,
        ));

        output.push_str(&format!(
            "   Trivy: {} vulnerabilities ({}C/{}H)\n",
            tools.container.total,
            tools.container.severity_counts.critical,
            tools.container.severity_counts.high,
        ));

        output.push_str(&format!(
            "   Grype: {} vulnerabilities ({}C/{}H)\n",
            tools.vulnerability.total,
            tools.vulnerability.severity_counts.critical,
            tools.vulnerability.severity_counts.high,
        ));

        output.push_str(&format!(
            "   Xeol: {} EOL packages\n",
            tools.eol.eol_packages,
        ));

        output.push_str(&format!(
            "\n{} {}\n{}\n",
            self.overall_label(),
            self.level_label(dashboard.overall.level),
            dashboard.overall.message,
        ));

        output
    }
}

/// Whether stdout can be expected to render non-ASCII symbols. Checked via
/// the locale environment; when in doubt, fall back to ASCII labels.
fn stdout_supports_unicode() -> bool {
    ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .any(|value| {
            let value = value.to_uppercase();
            value.contains("UTF-8") || value.contains("UTF8")
        })
}
