use std::path::PathBuf;

use recordr_common::config::ErrorPolicy;
use recordr_common::error::Rejection;
use recordr_common::record::PersonRecord;
use thiserror::Error;
use tracing::debug;

use crate::store::{Inserted, RecordStore, StoreError};
use crate::validator;

/// What happened to an accepted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Stored { record: PersonRecord, path: PathBuf },
    Duplicate { record: PersonRecord, path: PathBuf },
}

#[derive(Debug, Error)]
pub enum IntakeError {
    /// The line broke one or more input rules. Nothing was written.
    #[error("invalid input: {0}")]
    Rejected(#[from] Rejection),
    /// The line was valid but the store could not be read or written.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

/// Validates input lines and hands accepted records to a [`RecordStore`].
pub struct Intake<S: RecordStore> {
    store: S,
    policy: ErrorPolicy,
}

impl<S: RecordStore> Intake<S> {
    pub fn new(store: S, policy: ErrorPolicy) -> Self {
        Self { store, policy }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Processes one raw input line end to end.
    pub fn process_line(&self, line: &str) -> Result<Outcome, IntakeError> {
        let fields: Vec<&str> = validator::split_fields(line).map_err(Rejection::from)?;
        let record: PersonRecord = validator::validate_fields(&fields, self.policy)?;
        debug!("validated record for {}", record.last_name);

        match self.store.insert(&record)? {
            Inserted::Stored(path) => Ok(Outcome::Stored { record, path }),
            Inserted::Duplicate(path) => Ok(Outcome::Duplicate { record, path }),
        }
    }
}
