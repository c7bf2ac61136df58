//! SBOM-based vulnerability scan normalizer (Grype).

use crate::config::Config;
use crate::loader::{list_files, load_json_safely};
use crate::model::{SeverityCounts, ToolStatus, VulnerabilitySummary};
use serde_json::Value;
use std::path::Path;

pub fn analyze(root: &Path, config: &Config) -> VulnerabilitySummary {
    let dir = root.join(&config.vulnerability.dir);
    let mut total = 0u64;
    let mut counts = SeverityCounts::default();

    for file in list_files(&dir, &config.vulnerability.pattern) {
        let Some(data) = load_json_safely(&file) else {
            continue;
        };
        let Some(matches) = data.get("matches").and_then(Value::as_array) else {
            continue;
        };
        total += matches.len() as u64;

        for entry in matches {
            let severity = entry
                .get("vulnerability")
                .and_then(|v| v.get("severity"))
                .and_then(Value::as_str)
                .unwrap_or("unknown")
                .to_lowercase();
            match severity.as_str() {
                "critical" => counts.critical += 1,
                "high" => counts.high += 1,
                "medium" => counts.medium += 1,
                "low" => counts.low += 1,
                _ => {}
            }
        }
    }

    let sbom_files = list_files(&dir, &config.sbom_pattern).len() as u64;

    let status = if counts.critical > 0 {
        ToolStatus::Critical
    } else if counts.high > 0 {
        ToolStatus::Warning
    } else {
        ToolStatus::Good
    };

    VulnerabilitySummary {
        total,
        severity_counts: counts,
        sbom_files,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn setup() -> (tempfile::TempDir, Config) {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("grype-reports")).unwrap();
        (dir, Config::default())
    }

    #[test]
    fn test_severity_histogram_is_case_insensitive() {
        let (dir, config) = setup();
        fs::write(
            dir.path().join("grype-reports/grype-app.json"),
            r#"{"matches": [
                {"vulnerability": {"severity": "Critical"}},
                {"vulnerability": {"severity": "HIGH"}},
                {"vulnerability": {"severity": "medium"}},
                {"vulnerability": {"severity": "Negligible"}}
            ]}"#,
        )
        .unwrap();

        let summary = analyze(dir.path(), &config);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.severity_counts.critical, 1);
        assert_eq!(summary.severity_counts.high, 1);
        assert_eq!(summary.severity_counts.medium, 1);
        assert_eq!(summary.severity_counts.low, 0);
        assert_eq!(summary.status, ToolStatus::Critical);
    }

    #[test]
    fn test_high_without_critical_is_warning() {
        let (dir, config) = setup();
        fs::write(
            dir.path().join("grype-reports/grype-app.json"),
            r#"{"matches": [{"vulnerability": {"severity": "high"}}]}"#,
        )
        .unwrap();

        let summary = analyze(dir.path(), &config);
        assert_eq!(summary.status, ToolStatus::Warning);
    }

    #[test]
    fn test_sbom_sidecars_counted_not_parsed() {
        let (dir, config) = setup();
        fs::write(
            dir.path().join("grype-reports/sbom-app.json"),
            "not even json",
        )
        .unwrap();
        fs::write(
            dir.path().join("grype-reports/sbom-base.json"),
            "{}",
        )
        .unwrap();

        let summary = analyze(dir.path(), &config);
        assert_eq!(summary.sbom_files, 2);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.status, ToolStatus::Good);
    }

    #[test]
    fn test_matches_summed_across_files() {
        let (dir, config) = setup();
        fs::write(
            dir.path().join("grype-reports/grype-a.json"),
            r#"{"matches": [{"vulnerability": {"severity": "low"}}]}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("grype-reports/grype-b.json"),
            r#"{"matches": [{"vulnerability": {"severity": "low"}}, {"vulnerability": {"severity": "low"}}]}"#,
        )
        .unwrap();

        let summary = analyze(dir.path(), &config);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.severity_counts.low, 3);
    }

    #[test]
    fn test_missing_directory_is_good() {
        let dir = tempfile::tempdir().unwrap();
        let summary = analyze(dir.path(), &Config::default());
        assert_eq!(summary.total, 0);
        assert_eq!(summary.sbom_files, 0);
        assert_eq!(summary.status, ToolStatus::Good);
    }
}
