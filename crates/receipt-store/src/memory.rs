//! # In-Memory Store
//!
//! `HashMap` behind a `RwLock`. Lookups take the read lock and can run in
//! parallel; a `put` briefly takes the write lock.
//!
//! Everything is lost when the process exits.

use std::collections::HashMap;
use std::sync::RwLock;

use receipt_core::Points;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::id::ReceiptId;
use crate::store::PointsStore;

/// Process-lifetime points store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<ReceiptId, Points>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.records.read()?.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl PointsStore for MemoryStore {
    fn put(&self, id: ReceiptId, points: Points) -> StoreResult<()> {
        let mut records = self.records.write()?;
        debug!(id = %id, points = points.value(), "Storing points");
        records.insert(id, points);
        Ok(())
    }

    fn get(&self, id: &ReceiptId) -> StoreResult<Points> {
        let records = self.records.read()?;
        records
            .get(id)
            .copied()
            .ok_or_else(|| StoreError::not_found(id.as_str()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_put_then_get() {
        let store = MemoryStore::new();
        let id = ReceiptId::generate();

        store.put(id.clone(), Points::new(109)).unwrap();

        assert_eq!(store.get(&id).unwrap(), Points::new(109));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let store = MemoryStore::new();
        let err = store.get(&ReceiptId::from("missing")).unwrap_err();

        assert_eq!(err, StoreError::not_found("missing"));
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_concurrent_puts_under_distinct_ids() {
        let store = Arc::new(MemoryStore::new());

        let handles: Vec<_> = (0..8u64)
            .map(|n| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    (0..100u64)
                        .map(|i| {
                            let id = ReceiptId::generate();
                            store.put(id.clone(), Points::new(n * 1000 + i)).unwrap();
                            (id, n * 1000 + i)
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut written = Vec::new();
        for handle in handles {
            written.extend(handle.join().unwrap());
        }

        assert_eq!(store.len().unwrap(), 800);
        for (id, points) in written {
            assert_eq!(store.get(&id).unwrap(), Points::new(points));
        }
    }

    #[test]
    fn test_poisoned_lock_is_an_error_not_a_panic() {
        let store = Arc::new(MemoryStore::new());

        let poisoner = Arc::clone(&store);
        let _ = thread::spawn(move || {
            let _guard = poisoner.records.write().unwrap();
            panic!("writer died");
        })
        .join();

        let err = store.get(&ReceiptId::from("any")).unwrap_err();
        assert!(matches!(err, StoreError::Poisoned(_)));
    }
}
