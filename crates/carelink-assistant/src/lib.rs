#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod assistant;
mod error;
mod http_client;
mod prompt;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::post,
};
use carelink_core::HttpError;
use serde::Deserialize;
use serde_json::json;

pub use assistant::Assistant;
pub use error::{AssistantError, Result};

/// Transcript submitted by the voice frontend
///
/// An absent field defaults to the empty string rather than rejecting
/// the request.
#[derive(Debug, Deserialize)]
pub struct TranscriptRequest {
    #[serde(default)]
    pub transcript: String,
}

/// Build the assistant client from configuration
pub fn build_assistant(config: &carelink_config::Config) -> Arc<Assistant> {
    Arc::new(Assistant::new(&config.assistant))
}

/// Create the endpoint router for transcript processing
pub fn endpoint_router() -> Router<Arc<Assistant>> {
    Router::new().route("/api/receive-transcript", post(receive_transcript))
}

/// Handle transcript processing
async fn receive_transcript(State(assistant): State<Arc<Assistant>>, Json(request): Json<TranscriptRequest>) -> Response {
    tracing::debug!("transcript handler called, {} chars", request.transcript.len());

    match assistant.reply(&request.transcript).await {
        Ok(reply) => Json(json!({ "status": "success", "response": reply })).into_response(),
        Err(e) => {
            tracing::error!("failed to process transcript: {e}");
            (
                e.status_code(),
                Json(json!({
                    "status": "error",
                    "message": "Failed to process transcript",
                    "error": e.client_message(),
                })),
            )
                .into_response()
        }
    }
}
