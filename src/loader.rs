//! Fault-tolerant report loading and file discovery.

use globset::Glob;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Load a report file as JSON, falling back to JSON Lines.
///
/// Returns `None` for a missing, unreadable, empty, or entirely unparsable
/// file. Callers cannot distinguish "absent" from "garbage"; both contribute
/// nothing to the counters. Never panics and never propagates an error.
pub fn load_json_safely(path: &Path) -> Option<Value> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Could not load report file");
            return None;
        }
    };

    let content = content.trim();
    if content.is_empty() {
        return None;
    }

    if let Ok(value) = serde_json::from_str(content) {
        return Some(value);
    }

    // JSONL mode: keep the lines that parse, in original order.
    let values: Vec<Value> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| serde_json::from_str(line).ok())
        .collect();

    if values.is_empty() {
        debug!(path = %path.display(), "No parseable JSON in file");
        None
    } else {
        Some(Value::Array(values))
    }
}

/// Read a file as plain text, absorbing I/O errors into `None`.
pub fn read_text(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Could not read file");
            None
        }
    }
}

/// List files directly under `dir` whose names match `pattern`, sorted
/// lexicographically so first-file-wins rules are reproducible.
///
/// A missing directory or an invalid pattern yields an empty list.
pub fn list_files(dir: &Path, pattern: &str) -> Vec<PathBuf> {
    let matcher = match Glob::new(pattern) {
        Ok(glob) => glob.compile_matcher(),
        Err(e) => {
            warn!(pattern, error = %e, "Invalid glob pattern");
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| matcher.is_match(entry.file_name()))
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}
