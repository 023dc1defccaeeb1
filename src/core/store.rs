use crate::core::seed;
use crate::errors::{AppError, AppResult};
use crate::models::FeedbackRecord;
use std::collections::HashSet;

/// Ordered, append-only collection of feedback records.
///
/// Insertion order is the display order. Records are never edited or removed;
/// new batches are prepended with [`FeedbackStore::import`].
#[derive(Debug, Clone, Default)]
pub struct FeedbackStore {
    records: Vec<FeedbackRecord>,
}

impl FeedbackStore {
    pub fn new(records: Vec<FeedbackRecord>) -> Self {
        Self { records }
    }

    /// Store populated with the sample set.
    pub fn seeded() -> Self {
        Self::new(seed::sample_records())
    }

    pub fn records(&self) -> &[FeedbackRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&FeedbackRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Prepend `new_records` in their given order. Ids are taken as-is.
    pub fn import(&mut self, new_records: Vec<FeedbackRecord>) -> usize {
        let n = new_records.len();
        self.records.splice(0..0, new_records);
        n
    }

    /// Like [`import`](Self::import), but refuses the whole batch if one of its
    /// ids is already in the store or repeated inside the batch.
    pub fn import_checked(&mut self, new_records: Vec<FeedbackRecord>) -> AppResult<usize> {
        let mut seen: HashSet<u32> = self.records.iter().map(|r| r.id).collect();
        for rec in &new_records {
            if !seen.insert(rec.id) {
                return Err(AppError::DuplicateId(rec.id));
            }
        }
        Ok(self.import(new_records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(id: u32) -> FeedbackRecord {
        FeedbackRecord::new(id, "Hall", "calme", "", "2025-01-01")
    }

    #[test]
    fn import_prepends_in_given_order() {
        let mut store = FeedbackStore::new(vec![rec(1), rec(2)]);
        store.import(vec![rec(10), rec(11)]);
        let ids: Vec<u32> = store.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![10, 11, 1, 2]);
    }

    #[test]
    fn import_empty_is_noop() {
        let mut store = FeedbackStore::seeded();
        let before = store.records().to_vec();
        assert_eq!(store.import(Vec::new()), 0);
        assert_eq!(store.records(), before.as_slice());
    }

    #[test]
    fn import_trusts_ids() {
        let mut store = FeedbackStore::new(vec![rec(1)]);
        store.import(vec![rec(1)]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn import_checked_rejects_collisions_atomically() {
        let mut store = FeedbackStore::new(vec![rec(1), rec(2)]);
        let err = store.import_checked(vec![rec(3), rec(2)]).unwrap_err();
        assert!(matches!(err, AppError::DuplicateId(2)));
        assert_eq!(store.len(), 2);

        let err = store.import_checked(vec![rec(7), rec(7)]).unwrap_err();
        assert!(matches!(err, AppError::DuplicateId(7)));
        assert_eq!(store.len(), 2);

        assert_eq!(store.import_checked(vec![rec(3)]).unwrap(), 1);
        assert_eq!(store.records()[0].id, 3);
    }

    #[test]
    fn get_by_id() {
        let store = FeedbackStore::new(vec![rec(4), rec(9)]);
        assert!(store.get(9).is_some());
        assert!(store.get(5).is_none());
    }
}
