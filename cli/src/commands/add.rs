use recordr_common::config::Config;
use recordr_core::intake::Intake;
use recordr_core::store::FileRecordStore;

use crate::commands::report;

/// Stores one record passed on the command line. Fails the process when the
/// record is rejected or cannot be written.
pub fn add(fields: &[String], cfg: &Config) -> anyhow::Result<()> {
    let intake = Intake::new(FileRecordStore::new(&cfg.data_dir), cfg.policy);
    let result = intake.process_line(&fields.join(" "));
    report(&result);

    result
        .map(|_| ())
        .map_err(|err| anyhow::anyhow!("record not stored: {err}"))
}
