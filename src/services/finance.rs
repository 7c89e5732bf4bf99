//! Finance service
//!
//! Sits between the form a user fills in and the record store: parses raw
//! form text, writes the result back to the store, and records the change
//! in the audit log.

use chrono::{Local, NaiveDate};

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{FinanceError, FinanceResult};
use crate::form::{FieldError, FinanceForm, ParsePolicy, Parsed};
use crate::models::{Finance, FinanceId};
use crate::store::FinanceStore;

/// Service for finance record management
pub struct FinanceService<'a> {
    store: &'a FinanceStore,
    policy: ParsePolicy,
    audit: Option<AuditLogger>,
}

impl<'a> FinanceService<'a> {
    /// Create a service with the fallback policy and no audit log
    pub fn new(store: &'a FinanceStore) -> Self {
        Self {
            store,
            policy: ParsePolicy::default(),
            audit: None,
        }
    }

    /// Use the given policy for form submissions
    pub fn with_policy(mut self, policy: ParsePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Record every change in the given audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// The policy applied to form submissions
    pub fn policy(&self) -> ParsePolicy {
        self.policy
    }

    /// All records in insertion order
    pub fn list(&self) -> FinanceResult<Vec<Finance>> {
        self.store.list()
    }

    /// Get a record, failing if it does not exist
    pub fn get(&self, id: FinanceId) -> FinanceResult<Finance> {
        self.store
            .get(id)?
            .ok_or_else(|| FinanceError::finance_not_found(id.to_string()))
    }

    /// Get a record for the edit screen, or a blank record if it does not exist
    pub fn load(&self, id: FinanceId) -> FinanceResult<Finance> {
        Ok(self.store.get(id)?.unwrap_or_default())
    }

    /// The edit form pre-filled with a record's current values
    pub fn edit_form(&self, id: FinanceId) -> FinanceResult<FinanceForm> {
        Ok(FinanceForm::from_finance(&self.get(id)?))
    }

    /// Add a record from a submitted form, dating failed dates today
    pub fn create(&self, form: &FinanceForm) -> FinanceResult<Parsed<Finance>> {
        self.create_on(form, Local::now().date_naive())
    }

    /// Add a record from a submitted form, dating failed dates `today`
    pub fn create_on(
        &self,
        form: &FinanceForm,
        today: NaiveDate,
    ) -> FinanceResult<Parsed<Finance>> {
        let parsed = form.build_draft(today, self.policy)?;
        log_fallbacks(None, &parsed.fallbacks);

        let finance = self.store.add(parsed.value)?;
        tracing::info!(id = %finance.id, name = %finance.name, "added finance record");

        self.audit(&AuditEntry::create(&finance));

        Ok(Parsed {
            value: finance,
            fallbacks: parsed.fallbacks,
        })
    }

    /// Replace a record with the values of a submitted form
    ///
    /// Fields that fail to parse keep the record's current value, unless the
    /// policy is strict.
    pub fn edit(&self, id: FinanceId, form: &FinanceForm) -> FinanceResult<Parsed<Finance>> {
        let before = self.get(id)?;

        let parsed = form.apply_to(&before, self.policy)?;
        log_fallbacks(Some(id), &parsed.fallbacks);

        if !self.store.update(parsed.value.clone())? {
            return Err(FinanceError::finance_not_found(id.to_string()));
        }
        tracing::info!(id = %id, "updated finance record");

        self.audit(&AuditEntry::update(&before, &parsed.value));

        Ok(parsed)
    }

    /// Remove a record, returning it
    pub fn delete(&self, id: FinanceId) -> FinanceResult<Finance> {
        let finance = self.get(id)?;

        if !self.store.delete(id)? {
            return Err(FinanceError::finance_not_found(id.to_string()));
        }
        tracing::info!(id = %id, name = %finance.name, "deleted finance record");

        self.audit(&AuditEntry::delete(&finance));

        Ok(finance)
    }

    /// Append to the audit log, if any
    ///
    /// The store has already changed by the time this runs, so a failed
    /// write is logged rather than returned.
    fn audit(&self, entry: &AuditEntry) {
        let Some(logger) = &self.audit else {
            return;
        };
        if let Err(e) = logger.log(entry) {
            tracing::error!(
                operation = %entry.operation,
                id = %entry.finance_id,
                path = %logger.path().display(),
                "failed to write audit entry: {}",
                e
            );
        }
    }
}

fn log_fallbacks(id: Option<FinanceId>, fallbacks: &[FieldError]) {
    for fallback in fallbacks {
        match id {
            Some(id) => tracing::warn!(id = %id, "kept previous value for {}", fallback),
            None => tracing::warn!("used default value for {}", fallback),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::form::FormField;
    use crate::models::FinanceType;
    use tempfile::TempDir;

    fn dec(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, day).unwrap()
    }

    fn ids(service: &FinanceService) -> Vec<u32> {
        service.list().unwrap().iter().map(|f| f.id.get()).collect()
    }

    #[test]
    fn test_create_then_delete() {
        let store = FinanceStore::with_sample_data();
        let service = FinanceService::new(&store);

        let form = FinanceForm::new("Coffee", "2025-12-10", "EXPENSE", "3.50");
        let created = service.create_on(&form, dec(15)).unwrap();

        assert!(created.is_clean());
        assert_eq!(created.value.id, FinanceId::new(4));
        assert_eq!(created.value.amount, 3.50);

        let deleted = service.delete(FinanceId::new(2)).unwrap();
        assert_eq!(deleted.name, "Groceries");
        assert_eq!(ids(&service), vec![1, 3, 4]);
    }

    #[test]
    fn test_create_with_fallbacks() {
        let store = FinanceStore::new();
        let service = FinanceService::new(&store);

        let form = FinanceForm::new("Mystery", "", "gift", "lots");
        let created = service.create_on(&form, dec(15)).unwrap();

        assert_eq!(created.value.id, FinanceId::FIRST);
        assert_eq!(created.value.date, dec(15));
        assert_eq!(created.value.category, FinanceType::Expense);
        assert_eq!(created.value.amount, 0.0);
        assert_eq!(created.fallbacks.len(), 3);
    }

    #[test]
    fn test_edit_keeps_previous_on_bad_amount() {
        let store = FinanceStore::with_sample_data();
        let service = FinanceService::new(&store);

        let mut form = service.edit_form(FinanceId::new(1)).unwrap();
        form.amount = "abc".to_string();
        form.name = "Lunch".to_string();

        let edited = service.edit(FinanceId::new(1), &form).unwrap();
        assert_eq!(edited.value.amount, 5.70);
        assert_eq!(edited.fallbacks[0].field, FormField::Amount);

        let stored = service.get(FinanceId::new(1)).unwrap();
        assert_eq!(stored.name, "Lunch");
        assert_eq!(stored.amount, 5.70);
    }

    #[test]
    fn test_strict_edit_leaves_store_unchanged() {
        let store = FinanceStore::with_sample_data();
        let service = FinanceService::new(&store).with_policy(ParsePolicy::Strict);
        let before = service.list().unwrap();

        let form = FinanceForm::new("Food", "2025-13-40", "EXPENSE", "5.70");
        let err = service.edit(FinanceId::new(1), &form).unwrap_err();

        assert!(err.is_invalid_form());
        assert_eq!(service.list().unwrap(), before);
    }

    #[test]
    fn test_edit_missing_is_not_found() {
        let store = FinanceStore::with_sample_data();
        let service = FinanceService::new(&store);
        let before = service.list().unwrap();

        let form = FinanceForm::new("Ghost", "2025-12-04", "INCOME", "1");
        let err = service.edit(FinanceId::new(9), &form).unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(service.list().unwrap(), before);
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let store = FinanceStore::with_sample_data();
        let service = FinanceService::new(&store);

        assert!(service.delete(FinanceId::new(9)).unwrap_err().is_not_found());
        assert_eq!(store.count().unwrap(), 3);
    }

    #[test]
    fn test_load_missing_gives_blank_record() {
        let store = FinanceStore::with_sample_data();
        let service = FinanceService::new(&store);

        let blank = service.load(FinanceId::new(9)).unwrap();
        assert_eq!(blank.id, FinanceId::default());
        assert_eq!(blank.name, "");
        assert_eq!(blank.category, FinanceType::Expense);

        assert_eq!(service.load(FinanceId::new(3)).unwrap().name, "Paycheck");
    }

    #[test]
    fn test_changes_are_audited() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let store = FinanceStore::with_sample_data();
        let service = FinanceService::new(&store).with_audit(logger.clone());

        let form = FinanceForm::new("Coffee", "2025-12-10", "EXPENSE", "3.50");
        service.create_on(&form, dec(15)).unwrap();

        let mut form = service.edit_form(FinanceId::new(3)).unwrap();
        form.amount = "1200".to_string();
        service.edit(FinanceId::new(3), &form).unwrap();

        service.delete(FinanceId::new(2)).unwrap();

        let entries = logger.read_all().unwrap();
        let ops: Vec<Operation> = entries.iter().map(|e| e.operation).collect();
        assert_eq!(ops, vec![Operation::Create, Operation::Update, Operation::Delete]);
        assert_eq!(entries[1].changes.as_deref(), Some("amount: 1000.29 -> 1200.00"));
    }

    #[test]
    fn test_audit_failure_does_not_fail_change() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().to_path_buf());
        let store = FinanceStore::with_sample_data();
        let service = FinanceService::new(&store).with_audit(logger);

        let form = FinanceForm::new("Coffee", "2025-12-10", "EXPENSE", "3.50");
        let created = service.create_on(&form, dec(15)).unwrap();
        assert_eq!(created.value.id, FinanceId::new(4));

        let mut form = service.edit_form(FinanceId::new(1)).unwrap();
        form.name = "Lunch".to_string();
        assert_eq!(service.edit(FinanceId::new(1), &form).unwrap().value.name, "Lunch");

        service.delete(FinanceId::new(2)).unwrap();
        assert_eq!(ids(&service), vec![1, 3, 4]);
    }
}
