//! # Receipt API
//!
//! HTTP server that scores purchase receipts and serves the results.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Receipt API Server                              │
//! │                                                                         │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────────┐│
//! │  │  routes        │  │  receipt-core  │  │  receipt-store             ││
//! │  │                │  │                │  │                            ││
//! │  │ • process      │─►│ • validate     │  │ • PointsStore (trait)      ││
//! │  │ • points       │  │ • score        │  │ • MemoryStore              ││
//! │  │ • health       │──┼────────────────┼─►│                            ││
//! │  └────────────────┘  └────────────────┘  └────────────────────────────┘│
//! │                                                                         │
//! │  config (env) ─► server (bind, serve, graceful shutdown)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `RECEIPT_API_BIND_ADDR` - Bind host (default: 0.0.0.0)
//! - `RECEIPT_API_PORT` - HTTP port (default: 8080)
//! - `RECEIPT_API_MAX_BODY_BYTES` - Request body cap (default: 1048576)
//! - `RECEIPT_API_LOG_LEVEL` - Log filter when `RUST_LOG` is unset (default: info)

use std::sync::Arc;

use receipt_store::PointsStore;

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

// Re-exports
pub use config::ApiConfig;
pub use error::{ApiError, ServerError};
pub use server::{ApiHandle, ApiServer};

/// Shared application state.
pub struct AppState {
    pub store: Arc<dyn PointsStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn PointsStore>) -> Self {
        AppState { store }
    }
}
