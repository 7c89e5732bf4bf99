//! Per-field conversions from raw text
//!
//! Each conversion is an explicit step that returns a `Result`; what to do
//! with a failure is decided by the caller's [`ParsePolicy`](super::ParsePolicy).

use chrono::NaiveDate;
use std::fmt;

use crate::models::FinanceType;

/// Textual date pattern accepted by the form (`yyyy-MM-dd`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A field of the finance form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Date,
    Category,
    Amount,
}

impl FormField {
    /// All fields, in the order the form presents them
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Date,
        FormField::Category,
        FormField::Amount,
    ];

    /// Prompt label for this field
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Date => "Date",
            Self::Category => "Category",
            Self::Amount => "Amount",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Date => write!(f, "date"),
            Self::Category => write!(f, "category"),
            Self::Amount => write!(f, "amount"),
        }
    }
}

/// A field whose text could not be converted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Which field failed
    pub field: FormField,
    /// The text as entered
    pub input: String,
    /// Why it was rejected
    pub reason: String,
}

impl FieldError {
    pub fn new(field: FormField, input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field,
            input: input.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}': {}", self.field, self.input, self.reason)
    }
}

impl std::error::Error for FieldError {}

/// Parse a `yyyy-MM-dd` date
pub fn parse_date(text: &str) -> Result<NaiveDate, FieldError> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .map_err(|_| FieldError::new(FormField::Date, text, "expected yyyy-MM-dd"))
}

/// Parse INCOME or EXPENSE, ignoring case
pub fn parse_category(text: &str) -> Result<FinanceType, FieldError> {
    text.parse::<FinanceType>()
        .map_err(|e| FieldError::new(FormField::Category, text, e.to_string()))
}

/// Parse a decimal amount
///
/// `NaN` and infinities parse as `f64` but are not amounts, so they are rejected.
pub fn parse_amount(text: &str) -> Result<f64, FieldError> {
    match text.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        Ok(_) => Err(FieldError::new(FormField::Amount, text, "not a finite number")),
        Err(_) => Err(FieldError::new(FormField::Amount, text, "not a number")),
    }
}
