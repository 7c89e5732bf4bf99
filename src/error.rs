//! Custom error types for finance-tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::form::FieldError;

/// The main error type for finance-tracker operations
#[derive(Error, Debug)]
pub enum FinanceError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A submitted form had fields that could not be parsed
    #[error("Invalid form: {}", format_field_errors(.0))]
    InvalidForm(Vec<FieldError>),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl FinanceError {
    /// Create a "not found" error for finance records
    pub fn finance_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Finance",
            identifier: identifier.into(),
        }
    }

    /// Create a "duplicate" error for finance records
    pub fn duplicate_finance(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Finance",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if a submitted form was rejected
    pub fn is_invalid_form(&self) -> bool {
        matches!(self, Self::InvalidForm(_))
    }
}

impl From<std::io::Error> for FinanceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinanceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for finance-tracker operations
pub type FinanceResult<T> = Result<T, FinanceError>;
