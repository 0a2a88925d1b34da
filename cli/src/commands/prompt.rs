use std::io::{self, BufRead, Write};

use anyhow::Context;
use colored::*;
use recordr_common::config::Config;
use recordr_common::info;
use recordr_core::intake::{Intake, IntakeError, Outcome};
use recordr_core::store::{FileRecordStore, RecordStore};

use crate::commands::report;
use crate::rprint;
use crate::terminal::{colors, print};

pub const ENTRY_PROMPT: &str =
    "Enter: LastName FirstName MiddleName birth_date(dd.mm.yyyy) phone(digits) gender(m/f)";
pub const CONTINUE_PROMPT: &str = "Continue entering records? (y/n)";

/// Tally of one interactive session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub stored: usize,
    pub duplicates: usize,
    pub rejected: usize,
    pub failed: usize,
}

impl Session {
    fn tally(&mut self, result: &Result<Outcome, IntakeError>) {
        match result {
            Ok(Outcome::Stored { .. }) => self.stored += 1,
            Ok(Outcome::Duplicate { .. }) => self.duplicates += 1,
            Err(IntakeError::Rejected(_)) => self.rejected += 1,
            Err(IntakeError::Storage(_)) => self.failed += 1,
        }
    }

    pub fn processed(&self) -> usize {
        self.stored + self.duplicates + self.rejected + self.failed
    }
}

pub fn prompt(cfg: &Config) -> anyhow::Result<()> {
    let intake = Intake::new(FileRecordStore::new(&cfg.data_dir), cfg.policy);
    if cfg.quiet == 0 {
        info!("Records are filed under {}", cfg.data_dir.display());
    }

    let stdin = io::stdin();
    let session = run(&intake, stdin.lock(), io::stdout(), cfg)?;

    print_summary(&session, cfg);
    Ok(())
}

/// Drives the read/validate/store loop until the user declines to continue
/// or the input ends.
pub fn run<S, R, W>(intake: &Intake<S>, mut input: R, mut output: W, cfg: &Config) -> anyhow::Result<Session>
where
    S: RecordStore,
    R: BufRead,
    W: Write,
{
    let mut session = Session::default();

    loop {
        ask(&mut output, ENTRY_PROMPT, cfg)?;
        let Some(line) = read_line(&mut input)? else {
            break;
        };

        let result = intake.process_line(&line);
        report(&result);
        session.tally(&result);

        ask(&mut output, CONTINUE_PROMPT, cfg)?;
        let Some(answer) = read_line(&mut input)? else {
            break;
        };
        if !answer.trim().eq_ignore_ascii_case("y") {
            break;
        }
    }

    Ok(session)
}

fn ask<W: Write>(output: &mut W, question: &str, cfg: &Config) -> anyhow::Result<()> {
    if cfg.quiet > 1 {
        return Ok(());
    }
    writeln!(output, "{}", question.color(colors::SECONDARY))
        .and_then(|_| output.flush())
        .context("failed to write prompt")
}

/// `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    Ok((read > 0).then_some(line))
}

fn print_summary(session: &Session, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    rprint!();
    print::header("session summary", cfg.quiet);
    let key_width: usize = "Duplicates".len();
    print::aligned_line("Stored", key_width, &session.stored.to_string());
    print::aligned_line("Duplicates", key_width, &session.duplicates.to_string());
    print::aligned_line("Rejected", key_width, &session.rejected.to_string());
    print::aligned_line("Failed", key_width, &session.failed.to_string());

    let total: ColoredString = format!("{} lines", session.processed()).bold().green();
    print::fat_separator();
    print::centerln(&format!("Session complete: {total} processed"));
    print::end_of_program();
}
