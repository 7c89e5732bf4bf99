//! In-memory record store
//!
//! The store is the sole owner of the finance records. Callers only ever get
//! clones back, so the only way to change a record is through the store.

mod sample;

pub use sample::sample_finances;

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Finance, FinanceDraft, FinanceId};

/// Store of finance records, kept in insertion order
///
/// All access goes through a lock, so a store shared between threads still
/// applies each operation atomically.
#[derive(Debug, Default)]
pub struct FinanceStore {
    records: RwLock<Vec<Finance>>,
}

impl FinanceStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given records
    ///
    /// Fails if two records share an identifier.
    pub fn from_records(records: Vec<Finance>) -> FinanceResult<Self> {
        for (i, record) in records.iter().enumerate() {
            if records[..i].iter().any(|r| r.id == record.id) {
                return Err(FinanceError::duplicate_finance(record.id.to_string()));
            }
        }

        Ok(Self {
            records: RwLock::new(records),
        })
    }

    /// Create a store seeded with the sample records
    pub fn with_sample_data() -> Self {
        Self {
            records: RwLock::new(sample_finances()),
        }
    }

    fn read(&self) -> FinanceResult<RwLockReadGuard<'_, Vec<Finance>>> {
        self.records
            .read()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> FinanceResult<RwLockWriteGuard<'_, Vec<Finance>>> {
        self.records
            .write()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Snapshot of all records in insertion order
    pub fn list(&self) -> FinanceResult<Vec<Finance>> {
        Ok(self.read()?.clone())
    }

    /// Get a record by ID
    pub fn get(&self, id: FinanceId) -> FinanceResult<Option<Finance>> {
        Ok(self.read()?.iter().find(|f| f.id == id).cloned())
    }

    /// Append a new record, assigning it the next identifier
    ///
    /// The identifier is one more than the largest identifier currently held,
    /// or [`FinanceId::FIRST`] when the store is empty. Fails with
    /// [`FinanceError::Storage`] if the largest identifier is `u32::MAX`.
    pub fn add(&self, draft: FinanceDraft) -> FinanceResult<Finance> {
        let mut records = self.write()?;

        let id = match records.iter().map(|f| f.id).max() {
            Some(max) => max.next().ok_or_else(|| {
                FinanceError::Storage(format!("No identifier left after {}", max))
            })?,
            None => FinanceId::FIRST,
        };

        let finance = Finance::from_draft(id, draft);
        records.push(finance.clone());
        Ok(finance)
    }

    /// Replace the record with the same ID, keeping its position
    ///
    /// Returns `false` and leaves the store untouched when no record has that ID.
    pub fn update(&self, finance: Finance) -> FinanceResult<bool> {
        let mut records = self.write()?;

        match records.iter_mut().find(|f| f.id == finance.id) {
            Some(slot) => {
                *slot = finance;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove a record
    ///
    /// Returns whether a record was removed.
    pub fn delete(&self, id: FinanceId) -> FinanceResult<bool> {
        let mut records = self.write()?;

        let before = records.len();
        records.retain(|f| f.id != id);
        Ok(records.len() != before)
    }

    /// Count records
    pub fn count(&self) -> FinanceResult<usize> {
        Ok(self.read()?.len())
    }

    /// Check whether the store holds no records
    pub fn is_empty(&self) -> FinanceResult<bool> {
        Ok(self.read()?.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FinanceType;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn coffee() -> FinanceDraft {
        FinanceDraft::new("Coffee", FinanceType::Expense, 3.50, date(2025, 12, 10))
    }

    fn record(id: u32, name: &str, category: FinanceType) -> Finance {
        Finance::new(FinanceId::new(id), name, category, 1.0, date(2025, 1, 1))
    }

    fn ids(store: &FinanceStore) -> Vec<u32> {
        store.list().unwrap().iter().map(|f| f.id.get()).collect()
    }

    #[test]
    fn test_first_id_is_one() {
        let store = FinanceStore::new();
        let added = store.add(coffee()).unwrap();
        assert_eq!(added.id, FinanceId::FIRST);
    }

    #[test]
    fn test_add_ids_strictly_increase() {
        let store = FinanceStore::new();
        let mut last = 0;
        for _ in 0..10 {
            let id = store.add(coffee()).unwrap().id.get();
            assert!(id > last);
            last = id;
        }
        assert_eq!(ids(&store), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_add_uses_max_id_not_count() {
        let store = FinanceStore::from_records(vec![
            record(7, "A", FinanceType::Income),
            record(2, "B", FinanceType::Expense),
        ])
        .unwrap();

        assert_eq!(store.add(coffee()).unwrap().id, FinanceId::new(8));
    }

    #[test]
    fn test_add_fails_when_ids_are_exhausted() {
        let last = record(u32::MAX, "Last", FinanceType::Income);
        let store = FinanceStore::from_records(vec![last]).unwrap();

        let err = store.add(coffee()).unwrap_err();
        assert!(matches!(err, FinanceError::Storage(_)));
        assert_eq!(ids(&store), vec![u32::MAX]);
    }

    #[test]
    fn test_list_after_add_contains_draft() {
        let store = FinanceStore::with_sample_data();
        let draft = coffee();
        let added = store.add(draft.clone()).unwrap();

        let listed = store.list().unwrap();
        let found = listed.iter().find(|f| f.id == added.id).unwrap();
        assert_eq!(found.to_draft(), draft);
        assert_eq!(listed.last(), Some(&added));
    }

    #[test]
    fn test_get_missing_is_none() {
        let store = FinanceStore::with_sample_data();
        assert!(store.get(FinanceId::new(99)).unwrap().is_none());
        assert_eq!(store.get(FinanceId::new(2)).unwrap().unwrap().name, "Groceries");
    }

    #[test]
    fn test_update_replaces_in_place() {
        let store = FinanceStore::with_sample_data();
        let mut groceries = store.get(FinanceId::new(2)).unwrap().unwrap();
        groceries.amount = 60.0;

        assert!(store.update(groceries.clone()).unwrap());
        assert_eq!(store.list().unwrap()[1], groceries);
        assert_eq!(ids(&store), vec![1, 2, 3]);
    }

    #[test]
    fn test_update_missing_leaves_store_unchanged() {
        let store = FinanceStore::with_sample_data();
        let before = store.list().unwrap();

        let ghost = record(42, "Ghost", FinanceType::Income);
        assert!(!store.update(ghost).unwrap());
        assert_eq!(store.list().unwrap(), before);
    }

    #[test]
    fn test_delete_then_get_is_none() {
        let store = FinanceStore::with_sample_data();
        assert!(store.delete(FinanceId::new(2)).unwrap());
        assert!(store.get(FinanceId::new(2)).unwrap().is_none());
        assert!(!store.delete(FinanceId::new(2)).unwrap());
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn test_add_then_delete_scenario() {
        let store = FinanceStore::with_sample_data();

        let coffee = store.add(coffee()).unwrap();
        assert_eq!(coffee.id, FinanceId::new(4));

        store.delete(FinanceId::new(2)).unwrap();
        assert_eq!(ids(&store), vec![1, 3, 4]);
    }

    #[test]
    fn test_from_records_rejects_duplicates() {
        let a = record(1, "A", FinanceType::Income);
        let err = FinanceStore::from_records(vec![a.clone(), a]).unwrap_err();
        assert!(matches!(err, FinanceError::Duplicate { .. }));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let store = FinanceStore::with_sample_data();
        let mut snapshot = store.list().unwrap();
        snapshot[0].name = "Changed".to_string();
        snapshot.clear();

        assert_eq!(store.count().unwrap(), 3);
        assert_eq!(store.get(FinanceId::new(1)).unwrap().unwrap().name, "Food");
    }

    #[test]
    fn test_empty_store() {
        let store = FinanceStore::new();
        assert!(store.is_empty().unwrap());
        assert!(store.list().unwrap().is_empty());
    }
}
