//! # Store Trait
//!
//! The seam between request handling and wherever points are kept.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  HTTP handler                                                           │
//! │       │  state.store.put(id, points)                                   │
//! │       │  state.store.get(&id)                                          │
//! │       ▼                                                                 │
//! │  Arc<dyn PointsStore>                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  MemoryStore (default) / test doubles                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Implementations must be safe to share across request tasks: concurrent
//! `put`s under distinct ids must not interfere, and a `get` that follows a
//! `put` of the same id on the same path must see it.

use receipt_core::Points;

use crate::error::StoreResult;
use crate::id::ReceiptId;

/// Keeps the point total of each processed receipt.
///
/// Records are written once and never updated or deleted.
pub trait PointsStore: Send + Sync {
    /// Records the points for a newly issued id.
    fn put(&self, id: ReceiptId, points: Points) -> StoreResult<()>;

    /// Looks up the points for an id.
    ///
    /// Returns [`crate::StoreError::NotFound`] for unknown ids.
    fn get(&self, id: &ReceiptId) -> StoreResult<Points>;
}
