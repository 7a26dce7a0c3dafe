//! Fire-and-forget care endpoints
//!
//! SOS alerts and daily check-ins are acknowledged and logged; delivery
//! to caregivers happens outside this gateway.

use axum::{Json, Router, routing::post};
use serde_json::{Value, json};

/// Create the endpoint router for care notifications
pub fn endpoint_router() -> Router {
    Router::new()
        .route("/sos", post(sos))
        .route("/checkin", post(check_in))
}

async fn sos(Json(alert): Json<Value>) -> Json<Value> {
    tracing::info!(%alert, "SOS alert received");
    Json(json!({ "status": "success", "message": "SOS received" }))
}

async fn check_in(Json(entry): Json<Value>) -> Json<Value> {
    tracing::info!(%entry, "check-in received");
    Json(json!({ "status": "success", "message": "Check-In received" }))
}
