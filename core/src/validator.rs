//! # Field Validation
//!
//! Pure checks for each field of an input line. Nothing here touches the
//! filesystem; a [`PersonRecord`] only leaves this module when every field
//! passed.

use std::sync::OnceLock;

use chrono::NaiveDate;
use recordr_common::config::ErrorPolicy;
use recordr_common::error::{DateError, NameField, PhoneError, Rejection, ValidationError};
use recordr_common::record::{Gender, PersonRecord};
use regex::Regex;

/// Number of whitespace separated fields in a record line.
pub const FIELD_COUNT: usize = 6;

const CYRILLIC: std::ops::RangeInclusive<char> = '\u{0400}'..='\u{04FF}';

static DATE_SHAPE: OnceLock<Regex> = OnceLock::new();

/// Splits an input line into its six fields.
///
/// Any run of whitespace separates two fields, so stray double spaces or a
/// trailing `\r\n` never produce empty tokens.
pub fn split_fields(line: &str) -> Result<Vec<&str>, ValidationError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != FIELD_COUNT {
        return Err(ValidationError::FieldCount {
            expected: FIELD_COUNT,
            found: fields.len(),
        });
    }
    Ok(fields)
}

/// True iff `token` is non-empty and made only of Latin or Cyrillic letters.
pub fn validate_name(token: &str) -> bool {
    !token.is_empty() && token.chars().all(is_name_char)
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || (CYRILLIC.contains(&c) && c.is_alphabetic())
}

/// Leap years are the ones whose February has a 29th day.
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

fn date_shape() -> &'static Regex {
    DATE_SHAPE.get_or_init(|| {
        Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("date shape pattern is valid")
    })
}

/// Parses a strict `dd.mm.yyyy` date and checks it against the calendar.
pub fn validate_date(text: &str) -> Result<NaiveDate, DateError> {
    let (day, month, year) = parse_date_parts(text)
        .ok_or_else(|| DateError::Malformed(text.to_string()))?;

    NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day))
        .ok_or_else(|| calendar_error(day, month, year))
}

/// Names the rule a rejected day/month/year broke.
fn calendar_error(day: u8, month: u8, year: u16) -> DateError {
    if !(1..=12).contains(&month) {
        return DateError::MonthOutOfRange(month);
    }
    if !(1..=31).contains(&day) {
        return DateError::DayOutOfRange(day);
    }

    match month {
        4 | 6 | 9 | 11 => DateError::ThirtyDayMonth { day, month },
        2 if is_leap_year(i32::from(year)) => DateError::LeapFebruary { day, year },
        2 => DateError::CommonFebruary { day, year },
        _ => DateError::DayOutOfRange(day),
    }
}

/// Splits `dd.mm.yyyy` into numbers without judging their range.
fn parse_date_parts(text: &str) -> Option<(u8, u8, u16)> {
    if !date_shape().is_match(text) {
        return None;
    }

    Some((
        text[0..2].parse().ok()?,
        text[3..5].parse().ok()?,
        text[6..10].parse().ok()?,
    ))
}

/// Accepts a phone number made of digits that fits a signed 64-bit integer.
pub fn validate_phone(text: &str) -> Result<u64, PhoneError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PhoneError::NotNumeric(text.to_string()));
    }

    text.parse::<u64>()
        .ok()
        .filter(|number| *number <= i64::MAX as u64)
        .ok_or_else(|| PhoneError::OutOfRange(text.to_string()))
}

/// Accepts `m` or `f` in either case.
pub fn validate_gender(text: &str) -> Result<Gender, ValidationError> {
    match text {
        "m" | "M" => Ok(Gender::Male),
        "f" | "F" => Ok(Gender::Female),
        _ => Err(ValidationError::Gender(text.to_string())),
    }
}

fn check_name(field: NameField, value: &str) -> Result<String, ValidationError> {
    if validate_name(value) {
        Ok(value.to_string())
    } else {
        Err(ValidationError::Name {
            field,
            value: value.to_string(),
        })
    }
}

fn keep<T>(errors: &mut Vec<ValidationError>, result: Result<T, ValidationError>) -> Option<T> {
    result.map_err(|e| errors.push(e)).ok()
}

/// Runs every field check and builds the record.
///
/// All checks run regardless of `policy`; with [`ErrorPolicy::FailFast`] only
/// the first violation in field order is kept.
pub fn validate_fields(fields: &[&str], policy: ErrorPolicy) -> Result<PersonRecord, Rejection> {
    let [last, first, middle, date, phone, gender_text] = fields else {
        return Err(ValidationError::FieldCount {
            expected: FIELD_COUNT,
            found: fields.len(),
        }
        .into());
    };

    let mut errors: Vec<ValidationError> = Vec::new();

    let last_name = keep(&mut errors, check_name(NameField::Last, last));
    let first_name = keep(&mut errors, check_name(NameField::First, first));
    let middle_name = keep(&mut errors, check_name(NameField::Middle, middle));
    let birth_date = keep(&mut errors, validate_date(date).map_err(ValidationError::from));
    let phone_ok = keep(&mut errors, validate_phone(phone).map_err(ValidationError::from));
    let gender = keep(&mut errors, validate_gender(gender_text));

    match (last_name, first_name, middle_name, birth_date, phone_ok, gender) {
        (Some(last_name), Some(first_name), Some(middle_name), Some(birth_date), Some(_), Some(gender)) => {
            Ok(PersonRecord {
                last_name,
                first_name,
                middle_name,
                birth_date,
                phone: phone.to_string(),
                gender,
                gender_text: gender_text.to_string(),
            })
        }
        _ => {
            if policy == ErrorPolicy::FailFast {
                errors.truncate(1);
            }
            Err(Rejection(errors))
        }
    }
}
