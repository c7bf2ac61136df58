//! Container image vulnerability scan normalizer (Trivy).

use crate::config::Config;
use crate::loader::{list_files, load_json_safely};
use crate::model::{ContainerSeverityCounts, ContainerSummary, ToolStatus};
use serde_json::Value;
use std::path::Path;

pub fn analyze(root: &Path, config: &Config) -> ContainerSummary {
    let dir = root.join(&config.container.dir);
    let mut total = 0u64;
    let mut counts = ContainerSeverityCounts::default();
    let mut scanned_targets = 0u64;

    for file in list_files(&dir, &config.container.pattern) {
        let Some(data) = load_json_safely(&file) else {
            continue;
        };
        scanned_targets += 1;

        let results = data
            .get("Results")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        for result in results {
            let vulnerabilities = result
                .get("Vulnerabilities")
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or_default();
            total += vulnerabilities.len() as u64;

            for vulnerability in vulnerabilities {
                // Trivy severities are uppercase on the wire; matched exactly.
                match vulnerability.get("Severity").and_then(Value::as_str) {
                    Some("CRITICAL") => counts.critical += 1,
                    Some("HIGH") => counts.high += 1,
                    Some("MEDIUM") => counts.medium += 1,
                    Some("LOW") => counts.low += 1,
                    _ => {}
                }
            }
        }
    }

    let status = if counts.critical > 0 {
        ToolStatus::Critical
    } else if counts.high > 0 {
        ToolStatus::Warning
    } else {
        ToolStatus::Good
    };

    ContainerSummary {
        total,
        severity_counts: counts,
        scanned_targets,
        status,
    }
}
