#![cfg(test)]
use std::fs;
use std::path::Path;

use recordr_common::config::ErrorPolicy;
use recordr_core::intake::Intake;
use recordr_core::store::FileRecordStore;
use tempfile::TempDir;

pub fn file_intake(dir: &TempDir, policy: ErrorPolicy) -> Intake<FileRecordStore> {
    Intake::new(FileRecordStore::new(dir.path()), policy)
}

/// Lines of a surname file, or an empty list when it was never created.
pub fn stored_lines(dir: &Path, last_name: &str) -> Vec<String> {
    match fs::read_to_string(dir.join(format!("{last_name}.txt"))) {
        Ok(contents) => contents.lines().map(String::from).collect(),
        Err(_) => Vec::new(),
    }
}
