//! Finance record model
//!
//! A finance record is a single income or expense entry. Records are created
//! from a [`FinanceDraft`] once the store has assigned them an identifier.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::finance_type::FinanceType;
use super::ids::FinanceId;

/// A finance record that has not been given an identifier yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceDraft {
    /// Free-text label
    pub name: String,

    /// Income or expense
    pub category: FinanceType,

    /// Amount, no currency attached
    pub amount: f64,

    /// Calendar date of the entry
    pub date: NaiveDate,
}

impl FinanceDraft {
    /// Create a draft with all fields
    pub fn new(
        name: impl Into<String>,
        category: FinanceType,
        amount: f64,
        date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            amount,
            date,
        }
    }

    /// An empty expense dated `today`
    pub fn empty_on(today: NaiveDate) -> Self {
        Self::new("", FinanceType::default(), 0.0, today)
    }
}

impl Default for FinanceDraft {
    fn default() -> Self {
        Self::empty_on(Local::now().date_naive())
    }
}

/// A finance record owned by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finance {
    /// Unique identifier, immutable once assigned
    pub id: FinanceId,

    /// Free-text label
    pub name: String,

    /// Income or expense
    pub category: FinanceType,

    /// Amount, no currency attached
    pub amount: f64,

    /// Calendar date of the entry
    pub date: NaiveDate,
}

impl Finance {
    /// Finalize a draft under the given identifier
    pub fn from_draft(id: FinanceId, draft: FinanceDraft) -> Self {
        Self {
            id,
            name: draft.name,
            category: draft.category,
            amount: draft.amount,
            date: draft.date,
        }
    }

    /// Create a record with all fields
    pub fn new(
        id: FinanceId,
        name: impl Into<String>,
        category: FinanceType,
        amount: f64,
        date: NaiveDate,
    ) -> Self {
        Self::from_draft(id, FinanceDraft::new(name, category, amount, date))
    }

    /// Copy of this record without its identifier
    pub fn to_draft(&self) -> FinanceDraft {
        FinanceDraft {
            name: self.name.clone(),
            category: self.category,
            amount: self.amount,
            date: self.date,
        }
    }

    /// Amount with income positive and expenses negative
    pub fn signed_amount(&self) -> f64 {
        if self.category.is_income() {
            self.amount
        } else {
            -self.amount
        }
    }
}

impl Default for Finance {
    /// The placeholder record shown when a lookup misses (id 0)
    fn default() -> Self {
        Self::from_draft(FinanceId::default(), FinanceDraft::default())
    }
}

impl fmt::Display for Finance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {:.2}",
            self.date.format("%Y-%m-%d"),
            self.name,
            self.category,
            self.amount
        )
    }
}
