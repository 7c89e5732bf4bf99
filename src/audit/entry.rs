//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::form::DATE_FORMAT;
use crate::models::{Finance, FinanceId};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Record was added
    Create,
    /// Record was replaced
    Update,
    /// Record was removed
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// ID of the affected record
    pub finance_id: FinanceId,

    /// Name of the affected record at the time of the operation
    pub name: String,

    /// The record before the operation (updates and deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Finance>,

    /// The record after the operation (creates and updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Finance>,

    /// Human-readable summary of changed fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes: Option<String>,
}

impl AuditEntry {
    fn new(operation: Operation, finance: &Finance) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            finance_id: finance.id,
            name: finance.name.clone(),
            before: None,
            after: None,
            changes: None,
        }
    }

    /// Entry for a newly added record
    pub fn create(finance: &Finance) -> Self {
        Self {
            after: Some(finance.clone()),
            ..Self::new(Operation::Create, finance)
        }
    }

    /// Entry for a replaced record
    pub fn update(before: &Finance, after: &Finance) -> Self {
        Self {
            before: Some(before.clone()),
            after: Some(after.clone()),
            changes: describe_changes(before, after),
            ..Self::new(Operation::Update, after)
        }
    }

    /// Entry for a removed record
    pub fn delete(finance: &Finance) -> Self {
        Self {
            before: Some(finance.clone()),
            ..Self::new(Operation::Delete, finance)
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} Finance {} ({})",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.finance_id,
            self.name
        );

        if let Some(changes) = &self.changes {
            output.push_str(&format!("\n  Changes: {}", changes));
        }

        output
    }
}

/// Summarize which fields differ between two versions of a record
///
/// Returns `None` when nothing changed.
pub fn describe_changes(before: &Finance, after: &Finance) -> Option<String> {
    let mut changes = Vec::new();

    if before.name != after.name {
        changes.push(format!("name: \"{}\" -> \"{}\"", before.name, after.name));
    }
    if before.date != after.date {
        changes.push(format!(
            "date: {} -> {}",
            before.date.format(DATE_FORMAT),
            after.date.format(DATE_FORMAT)
        ));
    }
    if before.category != after.category {
        changes.push(format!("category: {} -> {}", before.category, after.category));
    }
    if before.amount != after.amount {
        changes.push(format!("amount: {:.2} -> {:.2}", before.amount, after.amount));
    }

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FinanceType;
    use chrono::NaiveDate;

    fn groceries() -> Finance {
        Finance::new(
            FinanceId::new(2),
            "Groceries",
            FinanceType::Expense,
            52.34,
            NaiveDate::from_ymd_opt(2025, 12, 4).unwrap(),
        )
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Update.to_string(), "UPDATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_create_entry() {
        let entry = AuditEntry::create(&groceries());

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.finance_id, FinanceId::new(2));
        assert!(entry.before.is_none());
        assert_eq!(entry.after, Some(groceries()));
    }

    #[test]
    fn test_update_entry() {
        let before = groceries();
        let mut after = groceries();
        after.amount = 60.0;
        after.category = FinanceType::Income;

        let entry = AuditEntry::update(&before, &after);

        assert_eq!(entry.operation, Operation::Update);
        assert_eq!(
            entry.changes.as_deref(),
            Some("category: EXPENSE -> INCOME, amount: 52.34 -> 60.00")
        );
    }

    #[test]
    fn test_delete_entry() {
        let entry = AuditEntry::delete(&groceries());

        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_no_changes() {
        assert!(describe_changes(&groceries(), &groceries()).is_none());
    }

    #[test]
    fn test_name_and_date_changes() {
        let mut after = groceries();
        after.name = "Market".to_string();
        after.date = NaiveDate::from_ymd_opt(2025, 12, 5).unwrap();

        let changes = describe_changes(&groceries(), &after).unwrap();
        assert_eq!(
            changes,
            "name: \"Groceries\" -> \"Market\", date: 2025-12-04 -> 2025-12-05"
        );
    }

    #[test]
    fn test_serialization() {
        let entry = AuditEntry::create(&groceries());

        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("\"before\""));

        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.operation, Operation::Create);
        assert_eq!(deserialized.after, Some(groceries()));
    }

    #[test]
    fn test_human_readable_format() {
        let mut after = groceries();
        after.amount = 10.0;
        let formatted = AuditEntry::update(&groceries(), &after).format_human_readable();

        assert!(formatted.contains("UPDATE Finance #2 (Groceries)"));
        assert!(formatted.contains("Changes: amount: 52.34 -> 10.00"));
    }
}
