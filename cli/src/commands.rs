pub mod add;
pub mod prompt;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use recordr_common::config::{Config, ErrorPolicy};
use recordr_common::{error, success, warn};
use recordr_core::intake::{IntakeError, Outcome};

use crate::terminal::format;

#[derive(Parser)]
#[command(name = "recordr")]
#[command(about = "Validates personal records and files them by surname.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the <LastName>.txt files
    #[arg(long, default_value = ".", global = true)]
    pub dir: PathBuf,

    /// Report only the first invalid field of a line
    #[arg(long, global = true)]
    pub fail_fast: bool,

    /// Hide the banner and headers (-q), and the prompts as well (-qq)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Hide the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Show debug diagnostics
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Read records interactively, one line at a time (default)
    #[command(alias = "p")]
    Prompt,
    /// Store a single record given as arguments
    #[command(alias = "a")]
    Add {
        /// LastName FirstName MiddleName dd.mm.yyyy phone m|f
        #[arg(num_args = 0.., allow_hyphen_values = true)]
        fields: Vec<String>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            data_dir: self.dir.clone(),
            policy: if self.fail_fast {
                ErrorPolicy::FailFast
            } else {
                ErrorPolicy::Aggregate
            },
            quiet: self.quiet,
            no_banner: self.no_banner,
        }
    }
}

/// Writes the result of one processed line to the console.
pub fn report(result: &Result<Outcome, IntakeError>) {
    match result {
        Ok(outcome @ Outcome::Stored { .. }) => success!("{}", format::outcome_message(outcome)),
        Ok(outcome @ Outcome::Duplicate { .. }) => warn!("{}", format::outcome_message(outcome)),
        Err(IntakeError::Rejected(rejection)) => {
            error!("Invalid input, nothing written:");
            for line in format::rejection_lines(rejection) {
                error!("  {line}");
            }
        }
        Err(IntakeError::Storage(err)) => {
            error!("File error: {err}");
            tracing::debug!("{err:?}");
        }
    }
}
