//! # Error Types
//!
//! Domain-specific error types for receipt-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  receipt-core errors (this file)                                       │
//! │  ├── ValidationError  - Receipt validation failures                    │
//! │  └── ItemDefect       - What is wrong with a rejected item             │
//! │                                                                         │
//! │  receipt-store errors (separate crate)                                 │
//! │  └── StoreError       - Lookup / lock failures                         │
//! │                                                                         │
//! │  HTTP errors (in app)                                                  │
//! │  └── ApiError         - What clients see (status + plain text)         │
//! │                                                                         │
//! │  Flow: ValidationError → ApiError → HTTP 400                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every validation failure is terminal for the receipt: no partial scoring,
//! no retry. The client fixes the receipt and resubmits.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Receipt validation failures, in the order the checks run.
///
/// The `Display` text is the plain-text body returned to HTTP clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required top-level field is empty, or the receipt has no items.
    #[error("missing required fields in receipt")]
    MissingField,

    /// `purchaseDate` is not `YYYY-MM-DD`.
    #[error("invalid purchaseDate format")]
    InvalidDateFormat,

    /// `purchaseTime` is not 24-hour `HH:MM`.
    #[error("invalid purchaseTime format")]
    InvalidTimeFormat,

    /// `total` is not a real number.
    #[error("invalid total format")]
    InvalidTotalFormat,

    /// An item has an empty field or an unparseable price.
    ///
    /// `index` is zero-based, in receipt order.
    #[error("invalid item in receipt: item {index} has {reason}")]
    InvalidItem { index: usize, reason: ItemDefect },
}

/// What is wrong with an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemDefect {
    MissingDescription,
    MissingPrice,
    InvalidPrice,
}

impl std::fmt::Display for ItemDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            ItemDefect::MissingDescription => "missing shortDescription",
            ItemDefect::MissingPrice => "missing price",
            ItemDefect::InvalidPrice => "invalid price format",
        };
        f.write_str(text)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
