#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod http_client;
mod store;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use carelink_core::HttpError;
use http::StatusCode;
use serde_json::{Value, json};

pub use error::{Result, StoreError};
pub use store::ReminderStore;

/// Build the reminder store client from configuration
pub fn build_store(config: &carelink_config::Config) -> Arc<ReminderStore> {
    Arc::new(ReminderStore::new(&config.store))
}

/// Create the endpoint router for reminder operations
pub fn endpoint_router() -> Router<Arc<ReminderStore>> {
    Router::new()
        .route("/setreminder", post(set_reminder))
        .route("/getreminders", get(get_reminders))
        .route("/deletereminder/{id}", delete(delete_reminder))
}

/// Handle reminder creation
///
/// The body is an arbitrary JSON object and is forwarded verbatim; the
/// store assigns the document id.
async fn set_reminder(State(store): State<Arc<ReminderStore>>, Json(reminder): Json<Value>) -> Response {
    tracing::debug!("set reminder handler called");

    match store.create(reminder).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "message": "Reminder stored successfully" }))).into_response(),
        Err(e) => {
            tracing::error!("failed to store reminder: {e}");
            (
                e.status_code(),
                Json(json!({
                    "message": "Failed to store reminder",
                    "error": e.client_message(),
                })),
            )
                .into_response()
        }
    }
}

/// Handle reminder listing
async fn get_reminders(State(store): State<Arc<ReminderStore>>) -> Response {
    tracing::debug!("get reminders handler called");

    match store.list().await {
        Ok(reminders) => (StatusCode::OK, Json(json!({ "reminders": reminders }))).into_response(),
        Err(e) => {
            tracing::error!("failed to fetch reminders: {e}");
            (
                e.status_code(),
                Json(json!({
                    "error": "Failed to fetch reminders",
                    "message": e.client_message(),
                })),
            )
                .into_response()
        }
    }
}

/// Handle reminder deletion by id
async fn delete_reminder(State(store): State<Arc<ReminderStore>>, Path(id): Path<String>) -> Response {
    tracing::debug!("delete reminder handler called for id {id}");

    match store.delete(&id).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "message": "Reminder deleted successfully" }))).into_response(),
        Err(e @ StoreError::NotFound(_)) => {
            (e.status_code(), Json(json!({ "message": "Reminder not found" }))).into_response()
        }
        Err(e) => {
            tracing::error!("failed to delete reminder {id}: {e}");
            (
                e.status_code(),
                Json(json!({
                    "error": "Failed to delete reminder",
                    "message": e.client_message(),
                })),
            )
                .into_response()
        }
    }
}
