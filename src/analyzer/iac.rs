//! IaC policy scan normalizer (Checkov).

use crate::config::Config;
use crate::loader::{list_files, load_json_safely};
use crate::model::{IacSummary, ToolStatus};
use serde_json::Value;
use std::path::Path;

fn check_count(results: &Value, key: &str) -> u64 {
    results
        .get(key)
        .and_then(Value::as_array)
        .map(|checks| checks.len() as u64)
        .unwrap_or(0)
}

pub fn analyze(root: &Path, config: &Config) -> IacSummary {
    let dir = root.join(&config.iac.dir);
    let mut passed = 0u64;
    let mut failed = 0u64;
    let mut skipped = 0u64;

    for file in list_files(&dir, &config.iac.pattern) {
        let Some(data) = load_json_safely(&file) else {
            continue;
        };
        let Some(results) = data.get("results") else {
            continue;
        };
        passed += check_count(results, "passed_checks");
        failed += check_count(results, "failed_checks");
        skipped += check_count(results, "skipped_checks");
    }

    let total = passed + failed + skipped;
    let pass_rate = if total > 0 {
        passed as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    let status = if pass_rate < 70.0 {
        ToolStatus::Critical
    } else if pass_rate < 90.0 {
        ToolStatus::Warning
    } else {
        ToolStatus::Good
    };

    IacSummary {
        passed,
        failed,
        skipped,
        pass_rate: (pass_rate * 10.0).round() / 10.0,
        status,
    }
}
