//! Per-tool report layout configuration.
//!
//! The subdirectory and glob names are a contract with the upstream scanners.
//! Defaults match the conventional layout; an optional YAML or JSON file can
//! override any subset of them.

use crate::error::{DashboardError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One tool's input source: a subdirectory under the reports root plus a
/// glob pattern for the files inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpec {
    pub dir: String,
    pub pattern: String,
}

impl SourceSpec {
    pub fn new(dir: &str, pattern: &str) -> Self {
        Self {
            dir: dir.to_string(),
            pattern: pattern.to_string(),
        }
    }
}

/// Report layout for all eight tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub secrets: SourceSpec,
    pub vulnerability: SourceSpec,
    /// Sidecar SBOM files counted alongside vulnerability reports.
    pub sbom_pattern: String,
    pub container: SourceSpec,
    pub iac: SourceSpec,
    pub eol: SourceSpec,
    /// Ordered candidate sources; the first one with recognizable content wins.
    pub quality: Vec<SourceSpec>,
    pub antivirus: SourceSpec,
    /// Plain-text log fallback when the antivirus directory has no JSON.
    pub antivirus_log_pattern: String,
    pub chart: SourceSpec,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            secrets: SourceSpec::new("trufflehog-reports", "*.json"),
            vulnerability: SourceSpec::new("grype-reports", "grype-*.json"),
            sbom_pattern: "sbom-*.json".to_string(),
            container: SourceSpec::new("trivy-reports", "trivy-*.json"),
            iac: SourceSpec::new("checkov-reports", "*.json"),
            eol: SourceSpec::new("xeol-reports", "*.json"),
            quality: vec![
                SourceSpec::new("sonar-reports", "*.json"),
                SourceSpec::new("security-reports/raw-data/SonarQube", "*.json"),
            ],
            antivirus: SourceSpec::new("clamav-reports", "*.json"),
            antivirus_log_pattern: "*.log".to_string(),
            chart: SourceSpec::new("helm-reports", "*.json"),
        }
    }
}

impl Config {
    /// Load layout overrides from a file, dispatching on extension.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| DashboardError::ConfigRead {
            path: path.display().to_string(),
            source: e,
        })?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "yaml" | "yml" => {
                serde_yaml::from_str(&content).map_err(|e| DashboardError::ConfigYaml {
                    path: path.display().to_string(),
                    source: e,
                })
            }
            "json" => serde_json::from_str(&content).map_err(|e| DashboardError::ConfigJson {
                path: path.display().to_string(),
                source: e,
            }),
            _ => Err(DashboardError::UnsupportedConfigFormat {
                path: path.display().to_string(),
                extension: ext,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_layout() {
        let config = Config::default();
        assert_eq!(config.secrets.dir, "trufflehog-reports");
        assert_eq!(config.vulnerability.pattern, "grype-*.json");
        assert_eq!(config.quality.len(), 2);
        assert_eq!(config.quality[0].dir, "sonar-reports");
    }

    #[test]
    fn test_partial_yaml_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.yaml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "secrets:\n  dir: secrets\n  pattern: \"*.jsonl\"").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.secrets.dir, "secrets");
        assert_eq!(config.secrets.pattern, "*.jsonl");
        // untouched fields keep their defaults
        assert_eq!(config.container.dir, "trivy-reports");
    }

    #[test]
    fn test_json_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        fs::write(&path, r#"{"eol": {"dir": "endoflife", "pattern": "*.json"}}"#).unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.eol.dir, "endoflife");
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.ini");
        fs::write(&path, "[secrets]").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(
            err,
            DashboardError::UnsupportedConfigFormat { .. }
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_file(Path::new("/nonexistent/layout.yaml")).unwrap_err();
        assert!(matches!(err, DashboardError::ConfigRead { .. }));
    }
}
