//! End-of-life package detection normalizer (Xeol).

use crate::config::Config;
use crate::loader::{list_files, load_json_safely};
use crate::model::{EolSummary, ToolStatus};
use serde_json::Value;
use std::path::Path;

pub fn analyze(root: &Path, config: &Config) -> EolSummary {
    let dir = root.join(&config.eol.dir);
    let mut eol_packages = 0u64;

    for file in list_files(&dir, &config.eol.pattern) {
        let Some(data) = load_json_safely(&file) else {
            continue;
        };
        if let Some(matches) = data.get("matches").and_then(Value::as_array) {
            eol_packages += matches.len() as u64;
        }
    }

    let status = if eol_packages > 0 {
        ToolStatus::Warning
    } else {
        ToolStatus::Good
    };

    EolSummary {
        eol_packages,
        status,
    }
}
