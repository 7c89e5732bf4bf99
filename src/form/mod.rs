//! Finance form parsing
//!
//! Turns the four raw text fields of the add/edit form into a typed record.
//! Parsing is pure: `(previous record or defaults, raw text) -> candidate`.
//!
//! Under [`ParsePolicy::Fallback`] a field that fails to parse keeps the
//! previous record's value (edit) or the type default (create), and the
//! failure is reported in [`Parsed::fallbacks`]. Under [`ParsePolicy::Strict`]
//! any failure rejects the submission with [`FinanceError::InvalidForm`].

mod fields;
mod policy;

pub use fields::{parse_amount, parse_category, parse_date, FieldError, FormField, DATE_FORMAT};
pub use policy::ParsePolicy;

use chrono::NaiveDate;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Finance, FinanceDraft, FinanceType};

/// A parsed value together with the fields that fell back
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<T> {
    pub value: T,
    pub fallbacks: Vec<FieldError>,
}

impl<T> Parsed<T> {
    /// Check if every field parsed as entered
    pub fn is_clean(&self) -> bool {
        self.fallbacks.is_empty()
    }
}

/// Raw text of the finance form, exactly as the user typed it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FinanceForm {
    pub name: String,
    pub date: String,
    pub category: String,
    pub amount: String,
}

impl FinanceForm {
    /// Create a form from its four text fields
    pub fn new(
        name: impl Into<String>,
        date: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            category: category.into(),
            amount: amount.into(),
        }
    }

    /// Pre-fill the form with the text of an existing record
    pub fn from_finance(finance: &Finance) -> Self {
        Self {
            name: finance.name.clone(),
            date: finance.date.format(DATE_FORMAT).to_string(),
            category: finance.category.to_string(),
            amount: finance.amount.to_string(),
        }
    }

    /// Get the raw text of a field
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Date => &self.date,
            FormField::Category => &self.category,
            FormField::Amount => &self.amount,
        }
    }

    /// Mutable access to the raw text of a field
    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Date => &mut self.date,
            FormField::Category => &mut self.category,
            FormField::Amount => &mut self.amount,
        }
    }

    /// Parse the form as an edit of `previous`
    ///
    /// The identifier always comes from `previous`.
    pub fn apply_to(
        &self,
        previous: &Finance,
        policy: ParsePolicy,
    ) -> FinanceResult<Parsed<Finance>> {
        let (draft, fallbacks) = self.resolve(&previous.to_draft());
        let finance = Finance::from_draft(previous.id, draft);
        finish(finance, fallbacks, policy)
    }

    /// Parse the form as a new record
    ///
    /// Failed fields default to `today`, EXPENSE and `0.0`.
    pub fn build_draft(
        &self,
        today: NaiveDate,
        policy: ParsePolicy,
    ) -> FinanceResult<Parsed<FinanceDraft>> {
        let (draft, fallbacks) = self.resolve(&FinanceDraft::empty_on(today));
        finish(draft, fallbacks, policy)
    }

    fn resolve(&self, base: &FinanceDraft) -> (FinanceDraft, Vec<FieldError>) {
        let mut fallbacks = Vec::new();

        let date = or_fallback(parse_date(&self.date), base.date, &mut fallbacks);
        let category: FinanceType =
            or_fallback(parse_category(&self.category), base.category, &mut fallbacks);
        let amount = or_fallback(parse_amount(&self.amount), base.amount, &mut fallbacks);

        let draft = FinanceDraft {
            name: self.name.clone(),
            category,
            amount,
            date,
        };
        (draft, fallbacks)
    }
}

fn or_fallback<T>(
    result: Result<T, FieldError>,
    fallback: T,
    fallbacks: &mut Vec<FieldError>,
) -> T {
    result.unwrap_or_else(|e| {
        fallbacks.push(e);
        fallback
    })
}

fn finish<T>(
    value: T,
    fallbacks: Vec<FieldError>,
    policy: ParsePolicy,
) -> FinanceResult<Parsed<T>> {
    match policy {
        ParsePolicy::Strict if !fallbacks.is_empty() => Err(FinanceError::InvalidForm(fallbacks)),
        _ => Ok(Parsed { value, fallbacks }),
    }
}
