//! # Person Record Model
//!
//! A record is built once from a validated input line and is never mutated.
//! Free-text fields keep the exact characters that were entered, so the line
//! written to a surname file matches what earlier runs wrote for the same input.

use chrono::NaiveDate;

/// Layout of birth dates, both on input and on disk.
pub const BIRTH_DATE_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonRecord {
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub birth_date: NaiveDate,
    /// Digits exactly as entered, leading zeros included.
    pub phone: String,
    pub gender: Gender,
    /// Gender token as entered (`m`, `M`, `f` or `F`).
    pub gender_text: String,
}

impl PersonRecord {
    /// Name of the file this record belongs to.
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.last_name)
    }

    /// Birth date rendered as `dd.mm.yyyy`.
    pub fn birth_date_text(&self) -> String {
        self.birth_date.format(BIRTH_DATE_FORMAT).to_string()
    }
}
