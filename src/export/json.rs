//! JSON Export functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::models::Finance;

/// Snapshot of all records with export metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinanceExport {
    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Number of records in the export
    pub record_count: usize,

    /// The records, in store order
    pub finances: Vec<Finance>,
}

impl FinanceExport {
    /// Wrap a snapshot of records
    pub fn new(finances: &[Finance]) -> Self {
        Self {
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            record_count: finances.len(),
            finances: finances.to_vec(),
        }
    }
}

/// Export records as pretty-printed JSON
pub fn export_finances_json<W: Write>(finances: &[Finance], writer: &mut W) -> FinanceResult<()> {
    let export = FinanceExport::new(finances);

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| FinanceError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| FinanceError::Export(e.to_string()))?;

    Ok(())
}
