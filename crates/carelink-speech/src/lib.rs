#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod http_client;
mod iam;
mod service;
mod types;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
};
use carelink_core::HttpError;
use serde_json::json;

pub use error::{Result, SpeechError};
pub use service::{SpeechService, SpeechTokenService};
pub use types::ServiceToken;

/// Build the speech token service from configuration
pub fn build_service(config: &carelink_config::Config) -> Arc<SpeechTokenService> {
    Arc::new(SpeechTokenService::new(&config.speech))
}

/// Create the endpoint router for speech token minting
pub fn endpoint_router() -> Router<Arc<SpeechTokenService>> {
    Router::new()
        .route("/api/speech-to-text-token", get(speech_to_text_token))
        .route("/api/text-to-speech-token", get(text_to_speech_token))
}

async fn speech_to_text_token(State(service): State<Arc<SpeechTokenService>>) -> Response {
    issue(&service, SpeechService::SpeechToText).await
}

async fn text_to_speech_token(State(service): State<Arc<SpeechTokenService>>) -> Response {
    issue(&service, SpeechService::TextToSpeech).await
}

/// Handle a token request for one speech service
async fn issue(service: &SpeechTokenService, kind: SpeechService) -> Response {
    tracing::debug!("token handler called for {kind:?}");

    match service.issue_token(kind).await {
        Ok(token) => Json(token).into_response(),
        Err(e) => {
            tracing::error!("failed to mint token for {kind:?}: {e}");
            (e.status_code(), Json(json!({ "error": e.client_message() }))).into_response()
        }
    }
}
