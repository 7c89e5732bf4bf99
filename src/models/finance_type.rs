//! Finance type (income or expense)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a record brings money in or sends it out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum FinanceType {
    /// Money received
    Income,
    /// Money spent
    #[default]
    Expense,
}

impl FinanceType {
    /// All variants, in display order
    pub const ALL: [FinanceType; 2] = [FinanceType::Income, FinanceType::Expense];

    /// The canonical upper-case label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "INCOME",
            Self::Expense => "EXPENSE",
        }
    }

    /// Check if this is income
    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }
}

impl fmt::Display for FinanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text names neither INCOME nor EXPENSE
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFinanceTypeError(pub String);

impl fmt::Display for ParseFinanceTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected INCOME or EXPENSE, got '{}'", self.0)
    }
}

impl std::error::Error for ParseFinanceTypeError {}

impl FromStr for FinanceType {
    type Err = ParseFinanceTypeError;

    /// Case-insensitive match against the two labels
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseFinanceTypeError(s.to_string()))
    }
}
