//! Chart validation normalizer (Helm).

use crate::config::Config;
use crate::loader::{list_files, load_json_safely};
use crate::model::{ChartSummary, ToolStatus};
use serde_json::Value;
use std::path::Path;

pub fn analyze(root: &Path, config: &Config) -> ChartSummary {
    let dir = root.join(&config.chart.dir);
    let has_data = dir.exists();
    let mut resources: Option<u64> = None;
    let mut valid: Option<bool> = None;

    for file in list_files(&dir, &config.chart.pattern) {
        let Some(data) = load_json_safely(&file) else {
            continue;
        };
        if let Value::Object(report) = &data {
            resources = report.get("resource_count").and_then(Value::as_u64);
            valid = Some(
                report
                    .get("valid")
                    .and_then(Value::as_bool)
                    .unwrap_or(true),
            );
        }
        break;
    }

    // A present directory counts as validated, parseable file or not.
    let status = if has_data {
        ToolStatus::Good
    } else {
        ToolStatus::Warning
    };

    ChartSummary {
        resources,
        valid,
        has_data,
        status,
    }
}
