//! YAML Export functionality

use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::export::json::FinanceExport;
use crate::models::Finance;

/// Export records as YAML, preceded by a comment header
pub fn export_finances_yaml<W: Write>(finances: &[Finance], writer: &mut W) -> FinanceResult<()> {
    let export = FinanceExport::new(finances);

    writeln!(writer, "# finance-tracker export")
        .and_then(|_| writeln!(writer, "# Generated: {}", export.exported_at))
        .map_err(|e| FinanceError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| FinanceError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::sample_finances;

    #[test]
    fn test_yaml_export() {
        let mut output = Vec::new();
        export_finances_yaml(&sample_finances(), &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.starts_with("# finance-tracker export\n"));
        assert!(text.contains("name: Paycheck"));
        assert!(text.contains("category: INCOME"));

        let export: FinanceExport = serde_yaml::from_str(&text).unwrap();
        assert_eq!(export.finances, sample_finances());
    }
}
