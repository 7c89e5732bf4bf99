//! Export module for finance-tracker
//!
//! Writes a snapshot of the records to any writer:
//! - CSV: one row per record (spreadsheet-compatible)
//! - JSON: machine-readable, records wrapped with export metadata
//! - YAML: human-readable, same structure as JSON

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_finances_csv;
pub use json::{export_finances_json, FinanceExport};
pub use yaml::export_finances_yaml;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::error::{FinanceError, FinanceResult};
use crate::models::Finance;

/// Output format for an export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Yaml,
    Csv,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "csv" => Ok(Self::Csv),
            other => Err(FinanceError::Export(format!(
                "unknown format '{}' (expected json, yaml or csv)",
                other
            ))),
        }
    }
}

/// Write `finances` to `writer` in the given format
pub fn export_finances<W: Write>(
    finances: &[Finance],
    format: ExportFormat,
    writer: &mut W,
) -> FinanceResult<()> {
    match format {
        ExportFormat::Json => export_finances_json(finances, writer),
        ExportFormat::Yaml => export_finances_yaml(finances, writer),
        ExportFormat::Csv => export_finances_csv(finances, writer),
    }
}
