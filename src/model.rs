//! Common status model and per-tool summary records.

use serde::{Deserialize, Serialize};

/// Per-tool risk classification. Ordered so the aggregator can take a max.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum ToolStatus {
    #[default]
    Good,
    Warning,
    Critical,
}

impl ToolStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolStatus::Good => "good",
            ToolStatus::Warning => "warning",
            ToolStatus::Critical => "critical",
        }
    }
}

impl std::fmt::Display for ToolStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Overall classification across all tools, rendered uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OverallLevel {
    Good,
    Warning,
    Critical,
}

impl OverallLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverallLevel::Good => "GOOD",
            OverallLevel::Warning => "WARNING",
            OverallLevel::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for OverallLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Overall status plus its fixed operator-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverallStatus {
    pub level: OverallLevel,
    pub message: &'static str,
}

/// How a tool with no data contributes to the overall status.
///
/// Optimistic treats "scanner did not run" as good; strict uses the tool's
/// own no-data status as-is. Applies only to tools exposing `has_data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum NoDataPolicy {
    #[default]
    Optimistic,
    Strict,
}

/// Severity histogram for SBOM-based vulnerability matching (lowercase keys).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub critical: u64,
    pub high: u64,
    pub medium: u64,
    pub low: u64,
}

/// Severity histogram for container scan results (uppercase keys on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct ContainerSeverityCounts {
    pub critical: u64,
    pub high: u64,
    pub medium: u64,
    pub low: u64,
}

/// Secret detection summary (TruffleHog).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SecretsSummary {
    pub total: u64,
    pub verified: u64,
    pub unverified: u64,
    pub detector_types: u64,
    pub status: ToolStatus,
}

/// SBOM-based vulnerability scan summary (Grype).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VulnerabilitySummary {
    pub total: u64,
    pub severity_counts: SeverityCounts,
    pub sbom_files: u64,
    pub status: ToolStatus,
}

/// Container image vulnerability scan summary (Trivy).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContainerSummary {
    pub total: u64,
    pub severity_counts: ContainerSeverityCounts,
    pub scanned_targets: u64,
    pub status: ToolStatus,
}

/// IaC policy scan summary (Checkov).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IacSummary {
    pub passed: u64,
    pub failed: u64,
    pub skipped: u64,
    /// Percentage, rounded to one decimal place.
    pub pass_rate: f64,
    pub status: ToolStatus,
}

/// End-of-life package detection summary (Xeol).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EolSummary {
    pub eol_packages: u64,
    pub status: ToolStatus,
}

/// Code-quality analysis summary (SonarQube).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QualitySummary {
    /// Statement coverage percentage, if any source reported one.
    pub coverage: Option<f64>,
    pub tests: Option<u64>,
    pub passed_tests: Option<u64>,
    pub issues: u64,
    pub has_data: bool,
    pub status: ToolStatus,
}

impl QualitySummary {
    pub fn effective_status(&self, policy: NoDataPolicy) -> ToolStatus {
        match policy {
            NoDataPolicy::Optimistic if !self.has_data => ToolStatus::Good,
            _ => self.status,
        }
    }
}

/// Antivirus scan summary (ClamAV).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AntivirusSummary {
    pub threats: Option<u64>,
    pub files_scanned: Option<u64>,
    pub has_data: bool,
    pub status: ToolStatus,
}

impl AntivirusSummary {
    pub fn effective_status(&self, policy: NoDataPolicy) -> ToolStatus {
        match policy {
            NoDataPolicy::Optimistic if !self.has_data => ToolStatus::Good,
            _ => self.status,
        }
    }
}

/// Chart validation summary (Helm).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChartSummary {
    pub resources: Option<u64>,
    pub valid: Option<bool>,
    pub has_data: bool,
    pub status: ToolStatus,
}

impl ChartSummary {
    pub fn effective_status(&self, policy: NoDataPolicy) -> ToolStatus {
        match policy {
            NoDataPolicy::Optimistic if !self.has_data => ToolStatus::Good,
            _ => self.status,
        }
    }
}

/// The eight tool summaries, one per scanner, computed independently.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Analyses {
    pub quality: QualitySummary,
    pub secrets: SecretsSummary,
    pub antivirus: AntivirusSummary,
    pub chart: ChartSummary,
    pub iac: IacSummary,
    pub container: ContainerSummary,
    pub vulnerability: VulnerabilitySummary,
    pub eol: EolSummary,
}

impl Analyses {
    /// The status each tool contributes to the overall vote, with the
    /// no-data policy applied to the tools that expose `has_data`.
    pub fn effective_statuses(&self, policy: NoDataPolicy) -> [ToolStatus; 8] {
        [
            self.quality.effective_status(policy),
            self.secrets.status,
            self.antivirus.effective_status(policy),
            self.chart.effective_status(policy),
            self.iac.status,
            self.container.status,
            self.vulnerability.status,
            self.eol.status,
        ]
    }
}

/// The full normalized dashboard: eight tool summaries plus the derived
/// overall status. Recomputed from scratch on every invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub generated_at: String,
    #[serde(flatten)]
    pub tools: Analyses,
    pub overall: OverallStatus,
}

impl Dashboard {
    pub fn new(tools: Analyses, overall: OverallStatus) -> Self {
        Self {
            generated_at: chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            tools,
            overall,
        }
    }
}
