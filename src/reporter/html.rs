//! HTML dashboard renderer.

use crate::model::{Dashboard, OverallLevel, ToolStatus};
use crate::reporter::{fmt_count, fmt_coverage, Reporter};

pub struct HtmlReporter;

impl HtmlReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn status_class(status: ToolStatus) -> &'static str {
    match status {
        ToolStatus::Good => "status-good",
        ToolStatus::Warning => "status-warning",
        ToolStatus::Critical => "status-critical",
    }
}

fn availability_class(has_data: bool) -> &'static str {
    if has_data {
        "status-good"
    } else {
        "status-warning"
    }
}

fn metric(value: &str, label: &str) -> String {
    format!(
        r#"
                    <div class="metric">
                        <div class="metric-number">{value}</div>
                        <div class="metric-label">{label}</div>
                    </div>"#
    )
}

fn tool_card(
    abbrev: &str,
    name: &str,
    description: &str,
    icon_class: &str,
    metrics: &[(String, &str)],
) -> String {
    let metrics_html: String = metrics
        .iter()
        .map(|(value, label)| metric(value, label))
        .collect();
    format!(
        r#"
            <div class="tool-card">
                <div class="tool-header">
                    <div class="tool-icon {icon_class}">{abbrev}</div>
                    <div>
                        <h3>{name}</h3>
                        <p>{description}</p>
                    </div>
                </div>
                <div class="metrics">{metrics_html}
                </div>
            </div>"#
    )
}

impl Reporter for HtmlReporter {
    fn report(&self, dashboard: &Dashboard) -> String {
        let tools = &dashboard.tools;
        let overall_class = match dashboard.overall.level {
            OverallLevel::Good => "status-good",
            OverallLevel::Warning => "status-warning",
            OverallLevel::Critical => "status-critical",
        };

        let quality_tests = tools
            .quality
            .passed_tests
            .or(tools.quality.tests)
            .map_or_else(|| "N/A".to_string(), |t| t.to_string());
        let chart_valid = match tools.chart.valid {
            Some(true) => "\u{2713}".to_string(),
            Some(false) => "\u{2717}".to_string(),
            None => "N/A".to_string(),
        };
        let yes_no = |flag: bool| if flag { "Yes" } else { "No" }.to_string();

        let cards: String = [
            tool_card(
                "SQ",
                "SonarQube",
                "Code Quality Analysis",
                availability_class(tools.quality.has_data),
                &[
                    (fmt_coverage(tools.quality.coverage), "Coverage"),
                    (quality_tests, "Tests"),
                    (tools.quality.issues.to_string(), "Issues"),
                ],
            ),
            tool_card(
                "TH",
                "TruffleHog",
                "Secret Detection",
                status_class(tools.secrets.status),
                &[
                    (tools.secrets.verified.to_string(), "Verified"),
                    (tools.secrets.unverified.to_string(), "Unverified"),
                    (tools.secrets.detector_types.to_string(), "Detectors"),
                ],
            ),
            tool_card(
                "CV",
                "ClamAV",
                "Antivirus Scanning",
                if tools.antivirus.status == ToolStatus::Critical {
                    "status-critical"
                } else {
                    availability_class(tools.antivirus.has_data)
                },
                &[
                    (fmt_count(tools.antivirus.threats), "Threats"),
                    (fmt_count(tools.antivirus.files_scanned), "Files"),
                    (yes_no(tools.antivirus.has_data), "Data"),
                ],
            ),
            tool_card(
                "HM",
                "Helm",
                "Chart Validation",
                availability_class(tools.chart.has_data),
                &[
                    (fmt_count(tools.chart.resources), "Resources"),
                    (chart_valid, "Valid"),
                    (yes_no(tools.chart.has_data), "Data"),
                ],
            ),
            tool_card(
                "CK",
                "Checkov",
                "IaC Security",
                status_class(tools.iac.status),
                &[
                    (tools.iac.passed.to_string(), "Passed"),
                    (tools.iac.failed.to_string(), "Failed"),
                    (format!("{}%", tools.iac.pass_rate), "Pass Rate"),
                ],
            ),
            tool_card(
                "TV",
                "Trivy",
                "Container Security",
                status_class(tools.container.status),
                &[
                    (tools.container.severity_counts.critical.to_string(), "Critical"),
                    (tools.container.severity_counts.high.to_string(), "High"),
                    (tools.container.scanned_targets.to_string(), "Targets"),
                ],
            ),
            tool_card(
                "GP",
                "Grype",
                "Vulnerability Scanning",
                status_class(tools.vulnerability.status),
                &[
                    (tools.vulnerability.severity_counts.critical.to_string(), "Critical"),
                    (tools.vulnerability.severity_counts.high.to_string(), "High"),
                    (tools.vulnerability.sbom_files.to_string(), "SBOMs"),
                ],
            ),
            tool_card(
                "XL",
                "Xeol",
                "EOL Detection",
                status_class(tools.eol.status),
                &[
                    (tools.eol.eol_packages.to_string(), "EOL Items"),
                    (
                        match tools.eol.eol_packages {
                            0 => "Low".to_string(),
                            1..=5 => "Med".to_string(),
                            _ => "High".to_string(),
                        },
                        "Risk",
                    ),
                ],
            ),
        ]
        .concat();

        let high_plus =
            tools.vulnerability.severity_counts.critical + tools.vulnerability.severity_counts.high;

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Security Dashboard</title>
    <style>
        body {{ font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; margin: 0; background-color: #f8f9fa; }}
        .header {{ background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 30px; text-align: center; }}
        .container {{ max-width: 1400px; margin: 0 auto; padding: 20px; }}
        .overall-status {{ text-align: center; padding: 25px; border-radius: 12px; margin: 20px 0; font-size: 18px; }}
        .overall-status.status-good {{ background: linear-gradient(135deg, #28a745, #20c997); color: white; }}
        .overall-status.status-warning {{ background: linear-gradient(135deg, #ffc107, #fd7e14); color: #212529; }}
        .overall-status.status-critical {{ background: linear-gradient(135deg, #dc3545, #e83e8c); color: white; }}
        .tools-grid {{ display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 20px; margin: 20px 0; }}
        .tool-card {{ background: white; padding: 25px; border-radius: 12px; box-shadow: 0 4px 12px rgba(0,0,0,0.1); }}
        .tool-header {{ display: flex; align-items: center; gap: 15px; margin-bottom: 20px; }}
        .tool-icon {{ width: 50px; height: 50px; border-radius: 10px; display: flex; align-items: center; justify-content: center; color: white; font-weight: bold; font-size: 18px; }}
        .tool-icon.status-good {{ background: #28a745; }}
        .tool-icon.status-warning {{ background: #ffc107; color: #212529; }}
        .tool-icon.status-critical {{ background: #dc3545; }}
        .metrics {{ display: grid; grid-template-columns: repeat(auto-fit, minmax(80px, 1fr)); gap: 15px; margin: 15px 0; }}
        .metric {{ text-align: center; padding: 10px; background: #f8f9fa; border-radius: 8px; }}
        .metric-number {{ font-size: 28px; font-weight: bold; }}
        .metric-label {{ font-size: 13px; color: #666; margin-top: 5px; }}
        .summary {{ background: white; padding: 30px; border-radius: 12px; box-shadow: 0 4px 12px rgba(0,0,0,0.1); margin-bottom: 20px; }}
        .summary-grid {{ display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 20px; }}
        .summary-grid div {{ text-align: center; }}
        .last-updated {{ text-align: center; margin: 20px 0; color: #666; font-size: 14px; }}
    </style>
</head>
<body>
    <div class="header">
        <h1>Security Dashboard</h1>
        <p>Eight-Layer DevOps Security Architecture</p>
        <p>Generated: {generated_at}</p>
    </div>

    <div class="container">
        <div class="overall-status {overall_class}">
            <h2>Overall Security Status: {overall_level}</h2>
            <p>{overall_message}</p>
        </div>

        <div class="tools-grid">{cards}
        </div>

        <div class="summary">
            <h2>Security Summary</h2>
            <div class="summary-grid">
                <div>
                    <h3>Secret Detection</h3>
                    <p>{secrets_total} total findings</p>
                    <p>{secrets_verified} verified secrets</p>
                </div>
                <div>
                    <h3>Vulnerabilities</h3>
                    <p>{vuln_total} total findings</p>
                    <p>{high_plus} high+ severity</p>
                </div>
                <div>
                    <h3>IaC Security</h3>
                    <p>{pass_rate}% pass rate</p>
                    <p>{iac_failed} failed checks</p>
                </div>
                <div>
                    <h3>Container Security</h3>
                    <p>{container_total} total findings</p>
                    <p>{scanned_targets} targets scanned</p>
                </div>
            </div>
        </div>

        <div class="last-updated">
            <p>Dashboard generated from scan report data</p>
            <p>Last updated: {generated_at}</p>
        </div>
    </div>
</body>
</html>"#,
            generated_at = dashboard.generated_at,
            overall_class = overall_class,
            overall_level = dashboard.overall.level,
            overall_message = dashboard.overall.message,
            cards = cards,
            secrets_total = tools.secrets.total,
            secrets_verified = tools.secrets.verified,
            vuln_total = tools.vulnerability.total,
            high_plus = high_plus,
            pass_rate = tools.iac.pass_rate,
            iac_failed = tools.iac.failed,
            container_total = tools.container.total,
            scanned_targets = tools.container.scanned_targets,
        )
    }
}
