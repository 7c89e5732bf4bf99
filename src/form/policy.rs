use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a submission does when one of its fields fails to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParsePolicy {
    /// Keep the previous value (edit) or the type default (create) for the
    /// failed field and accept the rest of the submission
    #[default]
    Fallback,
    /// Reject the whole submission, reporting every failed field
    Strict,
}

impl fmt::Display for ParsePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fallback => write!(f, "fallback"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

impl FromStr for ParsePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fallback" => Ok(Self::Fallback),
            "strict" | "reject" => Ok(Self::Strict),
            other => Err(format!("unknown parse policy '{}'", other)),
        }
    }
}
