#![cfg(test)]
use std::fs;

use recordr_common::config::ErrorPolicy;
use recordr_common::error::{DateError, ValidationError};
use recordr_core::intake::{IntakeError, Outcome};
use recordr_core::store::StoreError;
use tempfile::TempDir;

use crate::utils::{file_intake, stored_lines};

const IVANOV_INPUT: &str = "Ivanov Ivan Ivanovich 15.05.1990 1234567890 m";
const IVANOV_LINE: &str = "<Ivanov><Ivan><Ivanovich><15.05.1990> <1234567890><m>";

/// A valid line lands in `<LastName>.txt` in the documented layout.
#[test]
fn valid_record_is_written_in_exact_format() {
    let temp_dir = TempDir::new().unwrap();
    let intake = file_intake(&temp_dir, ErrorPolicy::Aggregate);

    let outcome = intake.process_line(IVANOV_INPUT).unwrap();

    match outcome {
        Outcome::Stored { path, .. } => assert_eq!(path, temp_dir.path().join("Ivanov.txt")),
        other => panic!("expected a stored record, got {other:?}"),
    }
    let raw = fs::read_to_string(temp_dir.path().join("Ivanov.txt")).unwrap();
    assert_eq!(raw, format!("{IVANOV_LINE}\n"));
}

#[test]
fn repeated_record_is_stored_once() {
    let temp_dir = TempDir::new().unwrap();
    let intake = file_intake(&temp_dir, ErrorPolicy::Aggregate);

    for _ in 0..3 {
        intake.process_line(IVANOV_INPUT).unwrap();
    }

    assert_eq!(stored_lines(temp_dir.path(), "Ivanov"), vec![IVANOV_LINE.to_string()]);
}

#[test]
fn different_records_share_a_surname_file() {
    let temp_dir = TempDir::new().unwrap();
    let intake = file_intake(&temp_dir, ErrorPolicy::Aggregate);

    intake.process_line(IVANOV_INPUT).unwrap();
    intake
        .process_line("Ivanov Petr Ivanovich 01.01.1985 555 M")
        .unwrap();

    assert_eq!(
        stored_lines(temp_dir.path(), "Ivanov"),
        vec![
            IVANOV_LINE.to_string(),
            "<Ivanov><Petr><Ivanovich><01.01.1985> <555><M>".to_string(),
        ]
    );
}

#[test]
fn cyrillic_record_is_accepted() {
    let temp_dir = TempDir::new().unwrap();
    let intake = file_intake(&temp_dir, ErrorPolicy::Aggregate);

    intake
        .process_line("Сидоров Сидор Сидорович 29.02.2024 89991112233 f")
        .unwrap();

    assert_eq!(
        stored_lines(temp_dir.path(), "Сидоров"),
        vec!["<Сидоров><Сидор><Сидорович><29.02.2024> <89991112233><f>".to_string()]
    );
}

#[test]
fn leap_day_follows_gregorian_rules() {
    let temp_dir = TempDir::new().unwrap();
    let intake = file_intake(&temp_dir, ErrorPolicy::Aggregate);

    assert!(intake.process_line("Leap Ann Bee 29.02.2000 1 f").is_ok());
    assert!(intake.process_line("Leap Ann Bee 29.02.2024 1 f").is_ok());
    assert!(matches!(
        intake.process_line("Leap Ann Bee 29.02.1900 1 f"),
        Err(IntakeError::Rejected(_))
    ));

    for year in [1900, 2000, 2023, 2024] {
        let line = format!("Leap Ann Bee 30.02.{year} 1 f");
        assert!(intake.process_line(&line).is_err(), "{line} should be rejected");
    }

    assert_eq!(stored_lines(temp_dir.path(), "Leap").len(), 2);
}

#[test]
fn rejected_lines_write_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let intake = file_intake(&temp_dir, ErrorPolicy::Aggregate);

    let inputs = [
        "Ivanov Ivan 15.05.1990 1234567890 m",
        "Ivanov Ivan Ivanovich 31.04.1990 123 m",
        "Ivanov Iv4n Ivanovich 15.05.1990 123 m",
        "Ivanov Ivan Ivanovich 15.05.1990 12-34 m",
        "Ivanov Ivan Ivanovich 15.05.1990 123 x",
        "Ivanov Ivan Ivanovich 15/05/1990 123 m",
    ];

    for input in inputs {
        assert!(
            matches!(intake.process_line(input), Err(IntakeError::Rejected(_))),
            "{input} should be rejected"
        );
    }
    assert!(!temp_dir.path().join("Ivanov.txt").exists());
}

#[test]
fn fail_fast_reports_one_violation() {
    let temp_dir = TempDir::new().unwrap();
    let aggregate = file_intake(&temp_dir, ErrorPolicy::Aggregate);
    let fail_fast = file_intake(&temp_dir, ErrorPolicy::FailFast);
    let input = "Ivanov Ivan Ivanovich 31.04.1990 abc x";

    let Err(IntakeError::Rejected(all)) = aggregate.process_line(input) else {
        panic!("expected rejection");
    };
    let Err(IntakeError::Rejected(first)) = fail_fast.process_line(input) else {
        panic!("expected rejection");
    };

    assert_eq!(all.errors().len(), 3);
    assert_eq!(
        first.errors(),
        &[ValidationError::Date(DateError::ThirtyDayMonth { day: 31, month: 4 })]
    );
}

#[test]
fn unwritable_directory_is_a_storage_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("not-created");
    let intake = recordr_core::intake::Intake::new(
        recordr_core::store::FileRecordStore::new(&missing),
        ErrorPolicy::Aggregate,
    );

    let err = intake.process_line(IVANOV_INPUT).unwrap_err();

    assert!(matches!(err, IntakeError::Storage(StoreError::Append { .. })));
    assert!(err.to_string().contains("Ivanov.txt"));
}

#[test]
fn uppercase_gender_matches_existing_uppercase_line() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("Ivanov.txt");
    fs::write(&path, "<Ivanov><Ivan><Ivanovich><15.05.1990> <1234567890><M>\n").unwrap();
    let intake = file_intake(&temp_dir, ErrorPolicy::Aggregate);

    let outcome = intake
        .process_line("Ivanov Ivan Ivanovich 15.05.1990 1234567890 M")
        .unwrap();

    assert!(matches!(outcome, Outcome::Duplicate { .. }));
    assert_eq!(fs::read(&path).unwrap().iter().filter(|b| **b == b'\n').count(), 1);
}

#[test]
fn foreign_encoded_line_does_not_block_new_records() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("Ivanov.txt");
    let legacy: &[u8] = b"<\xc8\xe2\xe0\xed\xee\xe2>\n";
    fs::write(&path, legacy).unwrap();
    let intake = file_intake(&temp_dir, ErrorPolicy::Aggregate);

    let outcome = intake.process_line(IVANOV_INPUT).unwrap();

    assert!(matches!(outcome, Outcome::Stored { .. }));
    let raw = fs::read(&path).unwrap();
    assert!(raw.starts_with(legacy));
    assert!(raw.ends_with(format!("{IVANOV_LINE}\n").as_bytes()));
}
