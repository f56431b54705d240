use crate::domain::model::SubmissionRecord;
use std::cell::RefCell;
use std::rc::Rc;

/// Page-lifetime list of accepted submissions.
///
/// Cloning hands out another handle onto the same list, so the form handler
/// and the debug surface can share one instance.
#[derive(Debug, Clone, Default)]
pub struct SubmissionStore {
    records: Rc<RefCell<Vec<SubmissionRecord>>>,
}

impl SubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, record: SubmissionRecord) {
        let total = {
            let mut records = self.records.borrow_mut();
            records.push(record);
            records.len()
        };
        tracing::info!(total, "✅ Form submission stored");
    }

    /// Snapshot of every submission in insertion order.
    pub fn all(&self) -> Vec<SubmissionRecord> {
        self.records.borrow().clone()
    }

    pub fn last(&self) -> Option<SubmissionRecord> {
        self.records.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.records.borrow_mut().clear();
        tracing::info!("✅ All submissions cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::FormFields;

    fn record(name: &str) -> SubmissionRecord {
        SubmissionRecord::captured_now(FormFields::new(
            name,
            "jo@x.co",
            "1234567890",
            "Lawn mowing weekly",
        ))
    }

    #[test]
    fn test_append_keeps_insertion_order_and_duplicates() {
        let store = SubmissionStore::new();
        store.append(record("Jo"));
        store.append(record("Al"));
        store.append(record("Jo"));

        let names: Vec<_> = store.all().into_iter().map(|r| r.fields.name).collect();
        assert_eq!(names, vec!["Jo", "Al", "Jo"]);
        assert_eq!(store.last().unwrap().fields.name, "Jo");
    }

    #[test]
    fn test_clones_share_contents() {
        let store = SubmissionStore::new();
        let handle = store.clone();
        store.append(record("Jo"));
        assert_eq!(handle.len(), 1);

        handle.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let store = SubmissionStore::new();
        store.append(record("Jo"));
        let mut snapshot = store.all();
        snapshot.clear();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clear_on_empty_store() {
        let store = SubmissionStore::new();
        store.clear();
        assert_eq!(store.len(), 0);
    }
}
