//! Code-quality analysis normalizer (SonarQube).
//!
//! Quality data may live in either of two locations, tried in order. Within
//! a directory the first file with a recognized shape wins; the directory
//! search stops as soon as a coverage value has been found.

use crate::config::Config;
use crate::loader::{list_files, load_json_safely};
use crate::model::{QualitySummary, ToolStatus};
use serde_json::Value;
use std::path::Path;

#[derive(Debug, Default)]
struct Extracted {
    coverage: Option<f64>,
    tests: Option<u64>,
    passed_tests: Option<u64>,
    issues: Option<u64>,
}

fn as_count(value: &Value) -> Option<u64> {
    value
        .as_u64()
        .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
}

fn as_percentage(value: &Value) -> Option<f64> {
    value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
}

/// Extract metrics from one report, returning `None` for unrecognized shapes.
fn extract(data: &Value) -> Option<Extracted> {
    // Custom analysis format: nested test-results and coverage objects.
    if let (Some(test_results), Some(coverage)) = (data.get("test_results"), data.get("coverage"))
    {
        return Some(Extracted {
            coverage: Some(
                coverage
                    .get("statement_coverage")
                    .and_then(Value::as_f64)
                    .unwrap_or(0.0),
            ),
            tests: test_results.get("total_tests").and_then(as_count),
            passed_tests: test_results.get("passed_tests").and_then(as_count),
            issues: test_results.get("failed_tests").and_then(as_count),
        });
    }

    // Standard measures-list format from the API.
    if let Some(measures) = data
        .get("component")
        .and_then(|c| c.get("measures"))
        .and_then(Value::as_array)
    {
        let mut extracted = Extracted::default();
        for measure in measures {
            let value = measure.get("value");
            match measure.get("metric").and_then(Value::as_str) {
                Some("coverage") => {
                    extracted.coverage = Some(value.and_then(as_percentage).unwrap_or(0.0));
                }
                Some("tests") => {
                    extracted.tests = value.and_then(as_count);
                }
                _ => {}
            }
        }
        return Some(extracted);
    }

    // Bare issues list: only the count is usable.
    if let Some(issues) = data.get("issues").and_then(Value::as_array) {
        return Some(Extracted {
            issues: Some(issues.len() as u64),
            ..Default::default()
        });
    }

    None
}

pub fn analyze(root: &Path, config: &Config) -> QualitySummary {
    let mut coverage: Option<f64> = None;
    let mut tests: Option<u64> = None;
    let mut passed_tests: Option<u64> = None;
    let mut issues = 0u64;

    for source in &config.quality {
        let dir = root.join(&source.dir);
        for file in list_files(&dir, &source.pattern) {
            let Some(data) = load_json_safely(&file) else {
                continue;
            };
            let Some(extracted) = extract(&data) else {
                continue;
            };
            coverage = coverage.or(extracted.coverage);
            tests = tests.or(extracted.tests);
            passed_tests = passed_tests.or(extracted.passed_tests);
            if let Some(count) = extracted.issues {
                issues = count;
            }
            break;
        }
        if coverage.is_some() {
            break;
        }
    }

    let has_data = coverage.is_some();
    let status = match coverage {
        Some(value) if value >= 90.0 => ToolStatus::Good,
        Some(value) if value >= 70.0 => ToolStatus::Warning,
        Some(_) => ToolStatus::Critical,
        None => ToolStatus::Warning,
    };

    QualitySummary {
        coverage,
        tests,
        passed_tests,
        issues,
        has_data,
        status,
    }
}
