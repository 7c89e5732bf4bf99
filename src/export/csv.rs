//! CSV Export functionality

use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::models::Finance;

/// Export records as CSV with an `id,name,category,amount,date` header
pub fn export_finances_csv<W: Write>(finances: &[Finance], writer: &mut W) -> FinanceResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    if finances.is_empty() {
        csv_writer
            .write_record(["id", "name", "category", "amount", "date"])
            .map_err(|e| FinanceError::Export(e.to_string()))?;
    }

    for finance in finances {
        csv_writer
            .serialize(finance)
            .map_err(|e| FinanceError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| FinanceError::Export(e.to_string()))?;

    Ok(())
}
