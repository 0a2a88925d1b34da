use std::path::Path;

use colored::*;
use recordr_common::error::Rejection;
use recordr_core::intake::Outcome;

use crate::terminal::colors;

fn file_label(path: &Path) -> ColoredString {
    path.display().to_string().color(colors::ACCENT)
}

pub fn outcome_message(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Stored { record, path } => format!(
            "Record for {} written to {}",
            record.last_name.color(colors::PRIMARY),
            file_label(path)
        ),
        Outcome::Duplicate { record, path } => format!(
            "Record for {} already exists in {}, nothing written",
            record.last_name.color(colors::PRIMARY),
            file_label(path)
        ),
    }
}

/// One line per violated rule, numbered when there is more than one.
pub fn rejection_lines(rejection: &Rejection) -> Vec<String> {
    let errors = rejection.errors();
    if errors.len() == 1 {
        return vec![errors[0].to_string()];
    }

    errors
        .iter()
        .enumerate()
        .map(|(idx, err)| format!("{} {}", format!("{}.", idx + 1).color(colors::SEPARATOR), err))
        .collect()
}
