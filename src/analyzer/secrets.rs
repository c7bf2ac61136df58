//! Secret detection normalizer (TruffleHog).

use crate::config::Config;
use crate::loader::{list_files, load_json_safely};
use crate::model::{SecretsSummary, ToolStatus};
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;

#[derive(Default)]
struct Counters {
    total: u64,
    verified: u64,
    unverified: u64,
    detectors: HashSet<String>,
}

impl Counters {
    /// Count an entry only if it looks like an actual secret finding.
    /// TruffleHog output mixes findings with log entries; findings carry a
    /// detector name, the raw match, and source location metadata.
    fn record(&mut self, entry: &Value) {
        if !entry.is_object()
            || entry.get("DetectorName").is_none()
            || entry.get("Raw").is_none()
            || entry.get("SourceMetadata").is_none()
        {
            return;
        }

        self.total += 1;
        if entry
            .get("Verified")
            .and_then(Value::as_bool)
            .unwrap_or(false)
        {
            self.verified += 1;
        } else {
            self.unverified += 1;
        }
        let detector = entry
            .get("DetectorName")
            .and_then(Value::as_str)
            .unwrap_or("Unknown");
        self.detectors.insert(detector.to_string());
    }
}

pub fn analyze(root: &Path, config: &Config) -> SecretsSummary {
    let dir = root.join(&config.secrets.dir);
    let mut counters = Counters::default();

    for file in list_files(&dir, &config.secrets.pattern) {
        let Some(data) = load_json_safely(&file) else {
            continue;
        };
        match data {
            Value::Array(entries) => {
                for entry in &entries {
                    counters.record(entry);
                }
            }
            entry => counters.record(&entry),
        }
    }

    let status = if counters.verified > 0 {
        ToolStatus::Critical
    } else if counters.unverified > 0 {
        ToolStatus::Warning
    } else {
        ToolStatus::Good
    };

    SecretsSummary {
        total: counters.total,
        verified: counters.verified,
        unverified: counters.unverified,
        detector_types: counters.detectors.len() as u64,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn setup(content: &str) -> (tempfile::TempDir, Config) {
        let dir = tempfile::tempdir().unwrap();
        let reports = dir.path().join("trufflehog-reports");
        fs::create_dir(&reports).unwrap();
        fs::write(reports.join("scan.json"), content).unwrap();
        (dir, Config::default())
    }

    #[test]
    fn test_single_verified_finding_is_critical() {
        let (dir, config) = setup(
            r#"{"DetectorName": "AWS", "Raw": "AKIAIOSFODNN7", "SourceMetadata": {"Data": {}}, "Verified": true}"#,
        );
        let summary = analyze(dir.path(), &config);

        assert_eq!(summary.total, 1);
        assert_eq!(summary.verified, 1);
        assert_eq!(summary.unverified, 0);
        assert_eq!(summary.status, ToolStatus::Critical);
    }

    #[test]
    fn test_unverified_findings_are_warning() {
        let (dir, config) = setup(concat!(
            r#"{"DetectorName": "Slack", "Raw": "xoxb-1", "SourceMetadata": {}, "Verified": false}"#,
            "\n",
            r#"{"DetectorName": "GitHub", "Raw": "ghp_x", "SourceMetadata": {}}"#,
            "\n",
        ));
        let summary = analyze(dir.path(), &config);

        assert_eq!(summary.total, 2);
        assert_eq!(summary.unverified, 2);
        assert_eq!(summary.detector_types, 2);
        assert_eq!(summary.status, ToolStatus::Warning);
    }

    #[test]
    fn test_log_noise_is_skipped() {
        let (dir, config) = setup(concat!(
            r#"{"level": "info", "msg": "scanning repo"}"#,
            "\n",
            r#"{"DetectorName": "AWS", "Raw": "AKIA", "SourceMetadata": {}, "Verified": false}"#,
            "\n",
        ));
        let summary = analyze(dir.path(), &config);

        assert_eq!(summary.total, 1);
    }

    #[test]
    fn test_duplicate_detectors_counted_once() {
        let (dir, config) = setup(concat!(
            r#"{"DetectorName": "AWS", "Raw": "a", "SourceMetadata": {}}"#,
            "\n",
            r#"{"DetectorName": "AWS", "Raw": "b", "SourceMetadata": {}}"#,
            "\n",
        ));
        let summary = analyze(dir.path(), &config);

        assert_eq!(summary.total, 2);
        assert_eq!(summary.detector_types, 1);
    }

    #[test]
    fn test_missing_directory_is_good() {
        let dir = tempfile::tempdir().unwrap();
        let summary = analyze(dir.path(), &Config::default());

        assert_eq!(summary.total, 0);
        assert_eq!(summary.status, ToolStatus::Good);
    }
}
