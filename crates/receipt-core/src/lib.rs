//! # receipt-core: Pure Business Logic for Receipt Points
//!
//! This crate is the **heart** of the service. It turns a purchase receipt
//! into a reward-points total, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Points Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    receipt-api (axum)                           │   │
//! │  │    POST /receipts/process        GET /receipts/{id}/points      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ receipt-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  amount   │  │validation │  │  scoring  │  │   │
//! │  │   │  Receipt  │  │  parsing  │  │ validate  │  │   score   │  │   │
//! │  │   │   Item    │  │           │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  receipt-store (id -> points)                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Wire types (Receipt, Item) and the Points value
//! - [`amount`] - Decimal currency string parsing
//! - [`error`] - Domain error types
//! - [`validation`] - The validation gate run before scoring
//! - [`scoring`] - The seven additive points rules
//!
//! ## Example Usage
//!
//! ```rust
//! use receipt_core::{score, validate, Item, Receipt};
//!
//! let receipt = Receipt {
//!     retailer: "Target".to_string(),
//!     purchase_date: "2022-01-01".to_string(),
//!     purchase_time: "13:01".to_string(),
//!     total: "35.35".to_string(),
//!     items: vec![Item {
//!         short_description: "Mountain Dew 12PK".to_string(),
//!         price: "6.49".to_string(),
//!     }],
//! };
//!
//! validate(&receipt).unwrap();
//! assert_eq!(score(&receipt).value(), 12);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod amount;
pub mod error;
pub mod scoring;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ItemDefect, ValidationError};
pub use scoring::{score, score_breakdown, PointsBreakdown};
pub use types::*;
pub use validation::{validate, ValidationResult};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Calendar format of `purchaseDate` (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Clock format of `purchaseTime` (24-hour `HH:MM`, no timezone).
pub const TIME_FORMAT: &str = "%H:%M";

// =============================================================================
// Entry Point
// =============================================================================

/// Validates a receipt and, only if every check passes, scores it.
///
/// ## Flow
/// ```text
/// Receipt ──► validate() ──┬── Err(ValidationError)
///                          │
///                          └── Ok ──► score_breakdown() ──► PointsBreakdown
/// ```
pub fn evaluate(receipt: &Receipt) -> ValidationResult<PointsBreakdown> {
    validate(receipt)?;
    Ok(score_breakdown(receipt))
}
