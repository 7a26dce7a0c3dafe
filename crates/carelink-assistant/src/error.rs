use http::StatusCode;

use carelink_core::HttpError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AssistantError>;

/// Errors from the hosted model inference relay
#[derive(Debug, Error)]
pub enum AssistantError {
    /// Inference endpoint missing from the environment
    #[error("Assistant is not configured: {0}")]
    ConfigError(String),

    /// Network or connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Inference API returned a non-success status; `message` carries the
    /// raw remote error body
    #[error("Inference API error ({status}): {message}")]
    InferenceApiError { status: u16, message: String },

    /// Inference API returned a body we could not parse
    #[error("Invalid inference response: {0}")]
    InvalidResponse(String),
}

impl HttpError for AssistantError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn client_message(&self) -> String {
        self.to_string()
    }
}
