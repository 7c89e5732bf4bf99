//! Strongly-typed identifier for finance records
//!
//! Identifiers are small integers handed out by the store, wrapped in a
//! newtype so they cannot be confused with amounts or counts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a finance record, assigned by the store on creation
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct FinanceId(u32);

impl FinanceId {
    /// The identifier given to the first record of an empty store
    pub const FIRST: FinanceId = FinanceId(1);

    /// Create an ID from a raw value
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw value
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// The identifier following this one, or `None` past `u32::MAX`
    pub const fn next(&self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }
}

impl fmt::Display for FinanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for FinanceId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl FromStr for FinanceId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept both "4" and the display form "#4"
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}
