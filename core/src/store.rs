//! # Record Store
//!
//! Records are kept one per line in `<LastName>.txt`. Files are append-only:
//! a write first scans the whole file for an identical line and only appends
//! when none is found.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use recordr_common::record::PersonRecord;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to scan '{}' for duplicates: {source}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to append to '{}': {source}", path.display())]
    Append {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result of a single insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inserted {
    Stored(PathBuf),
    Duplicate(PathBuf),
}

/// Defines the contract for persisting validated records.
pub trait RecordStore {
    /// Where `record` is (or would be) stored.
    fn location(&self, record: &PersonRecord) -> PathBuf;

    /// Checks whether an identical line already exists at `path`.
    fn exists(&self, line: &str, path: &Path) -> Result<bool, StoreError>;

    /// Appends `line` and a line terminator to `path`.
    fn append(&self, line: &str, path: &Path) -> Result<(), StoreError>;

    /// Stores `record` unless an identical line is already present.
    fn insert(&self, record: &PersonRecord) -> Result<Inserted, StoreError> {
        let path = self.location(record);
        let line = format(record);

        if self.exists(&line, &path)? {
            debug!("duplicate record in {}", path.display());
            return Ok(Inserted::Duplicate(path));
        }

        self.append(&line, &path)?;
        debug!("appended record to {}", path.display());
        Ok(Inserted::Stored(path))
    }
}

/// Renders the on-disk line: `<last><first><middle><date> <phone><gender>`.
pub fn format(record: &PersonRecord) -> String {
    format!(
        "<{}><{}><{}><{}> <{}><{}>",
        record.last_name,
        record.first_name,
        record.middle_name,
        record.birth_date_text(),
        record.phone,
        record.gender_text
    )
}

/// Linear scan of `path` for a line equal to `line`. A missing file holds no records.
///
/// Stored lines are compared as raw bytes with one trailing `\r` dropped, so a
/// line in another encoding never matches and never aborts the scan.
pub fn exists(line: &str, path: &Path) -> Result<bool, StoreError> {
    let scan_err = |source: io::Error| StoreError::Scan {
        path: path.to_path_buf(),
        source,
    };

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(scan_err(e)),
    };

    for stored in BufReader::new(file).split(b'\n') {
        let stored = stored.map_err(scan_err)?;
        let stored = stored.strip_suffix(b"\r").unwrap_or(&stored);
        if stored == line.as_bytes() {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Appends `line` plus `\n` to `path`, creating the file when needed.
pub fn append(line: &str, path: &Path) -> Result<(), StoreError> {
    let append_err = |source: io::Error| StoreError::Append {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(append_err)?;

    file.write_all(format!("{line}\n").as_bytes())
        .and_then(|_| file.flush())
        .map_err(append_err)
}

/// Flat-file store rooted at a data directory.
pub struct FileRecordStore {
    root: PathBuf,
}

impl FileRecordStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl RecordStore for FileRecordStore {
    fn location(&self, record: &PersonRecord) -> PathBuf {
        self.root.join(record.file_name())
    }

    fn exists(&self, line: &str, path: &Path) -> Result<bool, StoreError> {
        exists(line, path)
    }

    fn append(&self, line: &str, path: &Path) -> Result<(), StoreError> {
        append(line, path)
    }
}
