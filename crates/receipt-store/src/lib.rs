//! # receipt-store: Points Storage for Receipt Points
//!
//! Keeps the score of every processed receipt, keyed by a generated id, for
//! the lifetime of the process.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Receipt Points Data Flow                         │
//! │                                                                         │
//! │  POST /receipts/process                GET /receipts/{id}/points        │
//! │       │ score ─► ReceiptId::generate()       │                          │
//! │       ▼                                      ▼                          │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  receipt-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  ReceiptId    │    │  PointsStore  │    │ MemoryStore  │  │   │
//! │  │   │   (id.rs)     │    │  (store.rs)   │◄───│ (memory.rs)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ UUID v4 token │    │ put / get     │    │ RwLock +     │  │   │
//! │  │   │               │    │               │    │ HashMap      │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`id`] - Opaque receipt identifier
//! - [`store`] - The `PointsStore` trait
//! - [`memory`] - In-memory implementation
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust
//! use receipt_core::Points;
//! use receipt_store::{MemoryStore, PointsStore, ReceiptId};
//!
//! let store = MemoryStore::new();
//! let id = ReceiptId::generate();
//!
//! store.put(id.clone(), Points::new(28)).unwrap();
//! assert_eq!(store.get(&id).unwrap(), Points::new(28));
//! ```

pub mod error;
pub mod id;
pub mod memory;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use id::ReceiptId;
pub use memory::MemoryStore;
pub use store::PointsStore;
