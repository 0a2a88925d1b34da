use thiserror::Error;

/// Why a birth date was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("birth date '{0}' is not in dd.mm.yyyy format")]
    Malformed(String),
    #[error("month {0} is outside 1-12")]
    MonthOutOfRange(u8),
    #[error("day {0} is outside 1-31")]
    DayOutOfRange(u8),
    #[error("month {month} has only 30 days, got day {day}")]
    ThirtyDayMonth { day: u8, month: u8 },
    #[error("February {year} is a leap year and has only 29 days, got day {day}")]
    LeapFebruary { day: u8, year: u16 },
    #[error("February {year} is not a leap year and has only 28 days, got day {day}")]
    CommonFebruary { day: u8, year: u16 },
}

/// Why a phone number was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneError {
    #[error("phone number '{0}' must contain digits only")]
    NotNumeric(String),
    #[error("phone number '{0}' is too long")]
    OutOfRange(String),
}

/// A single violated input rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("expected {expected} fields separated by spaces, got {found}")]
    FieldCount { expected: usize, found: usize },
    #[error("{field} '{value}' must contain only Latin or Cyrillic letters")]
    Name { field: NameField, value: String },
    #[error(transparent)]
    Date(#[from] DateError),
    #[error(transparent)]
    Phone(#[from] PhoneError),
    #[error("gender '{0}' is invalid, use 'm' or 'f'")]
    Gender(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    Last,
    First,
    Middle,
}

impl std::fmt::Display for NameField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            NameField::Last => "last name",
            NameField::First => "first name",
            NameField::Middle => "middle name",
        };
        f.write_str(label)
    }
}

/// Every violation found in one input line, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_messages(.0))]
pub struct Rejection(pub Vec<ValidationError>);

impl Rejection {
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }
}

impl From<ValidationError> for Rejection {
    fn from(err: ValidationError) -> Self {
        Rejection(vec![err])
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<String>>()
        .join("; ")
}
