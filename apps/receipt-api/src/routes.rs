//! # HTTP Routes
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST /receipts/process                                                 │
//! │       body ──► serde_json ──► evaluate() ──► ReceiptId ──► store.put   │
//! │       200 {"id": "..."}   |   400 text                                  │
//! │                                                                         │
//! │  GET /receipts/{id}/points                                              │
//! │       id ──► store.get                                                  │
//! │       200 {"points": N}   |   404 text                                  │
//! │                                                                         │
//! │  GET /health                                                            │
//! │       200 OK                                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, Path, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use receipt_core::{evaluate, Points, Receipt};
use receipt_store::{PointsStore, ReceiptId};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ts_rs::TS;

use crate::error::{ApiError, ApiResult};
use crate::AppState;

// =============================================================================
// Response Bodies
// =============================================================================

/// Body of a successful `POST /receipts/process`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProcessReceiptResponse {
    pub id: String,
}

/// Body of a successful `GET /receipts/{id}/points`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PointsResponse {
    pub points: Points,
}

// =============================================================================
// Router
// =============================================================================

/// Builds the application router.
pub fn router(state: Arc<AppState>, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/{id}/points", get(get_points))
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint.
async fn health_handler() -> impl IntoResponse {
    "OK"
}

/// Validates, scores and stores a receipt.
///
/// The body is decoded by hand rather than through the `Json` extractor so a
/// missing `Content-Type` header is not an error and every decode failure
/// gets the same 400 response.
pub async fn process_receipt(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<Json<ProcessReceiptResponse>> {
    let receipt: Receipt = serde_json::from_slice(&body).map_err(|e| {
        debug!(?e, "Rejecting malformed receipt body");
        ApiError::InvalidJson(e)
    })?;

    let breakdown = evaluate(&receipt).inspect_err(|e| {
        info!(retailer = %receipt.retailer, reason = %e, "Receipt rejected");
    })?;
    let points = breakdown.total();

    let id = ReceiptId::generate();
    state.store.put(id.clone(), points)?;

    debug!(id = %id, ?breakdown, "Points breakdown");
    info!(id = %id, points = points.value(), "Receipt processed");

    Ok(Json(ProcessReceiptResponse { id: id.to_string() }))
}

/// Returns the points stored for a receipt id.
pub async fn get_points(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    let points = state.store.get(&ReceiptId::from(id))?;
    Ok(Json(PointsResponse { points }))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use receipt_store::MemoryStore;

    fn state() -> (Arc<AppState>, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (Arc::new(AppState::new(store.clone())), store)
    }

    const TARGET_RECEIPT: &str = r#"{
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "total": "35.35",
        "items": [{"shortDescription": "Mountain Dew 12PK", "price": "6.49"}]
    }"#;

    #[tokio::test]
    async fn test_process_then_lookup() {
        let (state, store) = state();

        let Json(created) = process_receipt(State(state.clone()), Bytes::from(TARGET_RECEIPT))
            .await
            .unwrap();

        let Json(found) = get_points(State(state.clone()), Path(created.id))
            .await
            .unwrap();
        assert_eq!(found.points, Points::new(12));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let (state, store) = state();
        let err = process_receipt(State(state), Bytes::from_static(b"{\"retailer\":"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::InvalidJson(_)));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(store.is_empty().unwrap());
    }

    #[tokio::test]
    async fn test_invalid_receipt_is_not_stored() {
        let (state, store) = state();
        let body = TARGET_RECEIPT.replace("13:01", "1:01 PM");

        let err = process_receipt(State(state), Bytes::from(body))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "invalid purchaseTime format");
        assert!(store.is_empty().unwrap());
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let err = get_points(State(state().0), Path("nope".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_response_shapes() {
        let body = serde_json::to_value(PointsResponse {
            points: Points::new(28),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "points": 28 }));

        let body = serde_json::to_value(ProcessReceiptResponse {
            id: "abc".to_string(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "id": "abc" }));
    }
}
